//! Macro-generated test suite for `NotificationService` contract validation.
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//! use society::storage::InMemoryNotificationService;
//!
//! notification_service_tests!(InMemoryNotificationService::new());
//! ```
//!
//! # Generated Tests
//!
//! - `test_insert_and_get` — insert then retrieve, verify all fields
//! - `test_get_nonexistent` — unknown id returns None
//! - `test_find_by_user_newest_first` — only the owner's documents, newest first
//! - `test_find_by_user_empty` — member without notifications gets an empty list
//! - `test_insert_duplicate_fails` — re-inserting an id never resets `is_read`
//! - `test_save_persists_read_flag` — save after `mark_read`
//! - `test_save_nonexistent_fails` — save of an unknown id is an error
//! - `test_mark_all_read_scoped_to_user` — other members are untouched
//! - `test_mark_all_read_counts_only_unread` — already-read ones are not counted
//! - `test_mark_all_read_twice` — second call changes nothing
//! - `test_concurrent_inserts` — parallel inserts from spawned tasks

/// Generate a full `NotificationService` conformance test suite.
///
/// `$factory` is re-evaluated for each test. For the concurrent test the
/// service must also be `Clone + 'static`.
#[macro_export]
macro_rules! notification_service_tests {
    ($factory:expr) => {
        mod notification_service_contract_tests {
            use super::*;
            use society::core::entity::Entity;
            use society::core::service::NotificationService;
            use uuid::Uuid;

            #[tokio::test]
            async fn test_insert_and_get() {
                let service = $factory;
                let user = Uuid::new_v4();
                let notification = notification_at(user, "Water cut", 0);
                let id = notification.id;

                let inserted = service.insert(notification).await.unwrap();
                assert_eq!(inserted.id, id);

                let fetched = service.get(&id).await.unwrap().expect("should exist");
                assert_eq!(fetched.owner(), user);
                assert_eq!(fetched.title, "Water cut");
                assert_eq!(fetched.message, "Water cut details");
                assert_eq!(fetched.kind, "general");
                assert!(!fetched.is_read);
                assert_eq!(fetched.created_at, base_time());
            }

            #[tokio::test]
            async fn test_get_nonexistent() {
                let service = $factory;
                assert!(service.get(&Uuid::new_v4()).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_find_by_user_newest_first() {
                let service = $factory;
                let user = Uuid::new_v4();
                let other = Uuid::new_v4();

                service.insert(notification_at(user, "oldest", 0)).await.unwrap();
                service.insert(notification_at(user, "newest", 20)).await.unwrap();
                service.insert(notification_at(other, "not mine", 30)).await.unwrap();
                service.insert(notification_at(user, "middle", 10)).await.unwrap();

                let titles: Vec<String> = service
                    .find_by_user(&user)
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|n| n.title)
                    .collect();

                assert_eq!(titles, vec!["newest", "middle", "oldest"]);
            }

            #[tokio::test]
            async fn test_find_by_user_empty() {
                let service = $factory;
                service
                    .insert(notification_at(Uuid::new_v4(), "someone else", 0))
                    .await
                    .unwrap();

                assert!(service.find_by_user(&Uuid::new_v4()).await.unwrap().is_empty());
            }

            #[tokio::test]
            async fn test_insert_duplicate_fails() {
                let service = $factory;
                let user = Uuid::new_v4();
                let notification = service.insert(notification_at(user, "Redelivered", 0)).await.unwrap();
                service.mark_all_read(&user).await.unwrap();

                let result = service.insert(notification.clone()).await;
                assert!(result.is_err(), "duplicate id must be rejected");

                let stored = service.get(&notification.id).await.unwrap().unwrap();
                assert!(stored.is_read, "a read notification must stay read");
                assert_eq!(service.find_by_user(&user).await.unwrap().len(), 1);
            }

            #[tokio::test]
            async fn test_save_persists_read_flag() {
                let service = $factory;
                let mut notification = service
                    .insert(notification_at(Uuid::new_v4(), "AGM on Sunday", 0))
                    .await
                    .unwrap();

                notification.mark_read();
                let saved = service.save(notification.clone()).await.unwrap();
                assert!(saved.is_read);

                let fetched = service.get(&notification.id).await.unwrap().unwrap();
                assert!(fetched.is_read);
                assert_eq!(fetched.title, "AGM on Sunday");
            }

            #[tokio::test]
            async fn test_save_nonexistent_fails() {
                let service = $factory;
                let result = service.save(notification_at(Uuid::new_v4(), "ghost", 0)).await;
                assert!(result.is_err());
            }

            #[tokio::test]
            async fn test_mark_all_read_scoped_to_user() {
                let service = $factory;
                let user = Uuid::new_v4();
                let other = Uuid::new_v4();

                service.insert(notification_at(user, "a", 0)).await.unwrap();
                service.insert(notification_at(user, "b", 1)).await.unwrap();
                service.insert(notification_at(other, "c", 2)).await.unwrap();

                assert_eq!(service.mark_all_read(&user).await.unwrap(), 2);

                assert!(service.find_by_user(&user).await.unwrap().iter().all(|n| n.is_read));
                assert!(service.find_by_user(&other).await.unwrap().iter().all(|n| !n.is_read));
            }

            #[tokio::test]
            async fn test_mark_all_read_counts_only_unread() {
                let service = $factory;
                let user = Uuid::new_v4();

                service.insert(read_notification_at(user, "seen", 0)).await.unwrap();
                service.insert(notification_at(user, "unseen", 1)).await.unwrap();

                assert_eq!(service.mark_all_read(&user).await.unwrap(), 1);
            }

            #[tokio::test]
            async fn test_mark_all_read_twice() {
                let service = $factory;
                let user = Uuid::new_v4();
                service.insert(notification_at(user, "a", 0)).await.unwrap();

                assert_eq!(service.mark_all_read(&user).await.unwrap(), 1);
                assert_eq!(service.mark_all_read(&user).await.unwrap(), 0);
                assert_eq!(service.mark_all_read(&Uuid::new_v4()).await.unwrap(), 0);
            }

            #[tokio::test]
            async fn test_concurrent_inserts() {
                let service = $factory;
                let user = Uuid::new_v4();

                let mut handles = Vec::new();
                for i in 0..10 {
                    let service = service.clone();
                    handles.push(tokio::spawn(async move {
                        service
                            .insert(notification_at(user, &format!("n{}", i), i))
                            .await
                            .unwrap()
                    }));
                }
                for handle in handles {
                    handle.await.unwrap();
                }

                let listed = service.find_by_user(&user).await.unwrap();
                assert_eq!(listed.len(), 10);
                assert_eq!(listed[0].title, "n9");
            }
        }
    };
}
