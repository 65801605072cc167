//! REST integration test macro for storage backends.
//!
//! The `rest_integration_tests!` macro generates HTTP-level tests that run a
//! pair of stores through full round-trips:
//! HTTP request → identity middleware → handler → store → JSON response.

/// Generate a REST integration test suite for a storage backend.
///
/// `$notification_factory` must produce an `impl NotificationService + 'static`
/// and `$bill_factory` an `impl BillService + 'static`.
///
/// # Generated Tests
///
/// ## Notifications
/// - `test_rest_list_notifications_newest_first` — only the caller's, newest first
/// - `test_rest_mark_as_read` — owner marks one read, others untouched
/// - `test_rest_mark_as_read_not_owner` — 401 and the record is unchanged
/// - `test_rest_mark_as_read_not_found` — unknown id → 404
/// - `test_rest_mark_as_read_invalid_id` — garbage id → 400
/// - `test_rest_mark_all_as_read` — acknowledgement, caller's only, idempotent
///
/// ## Bills
/// - `test_rest_list_bills` / `test_rest_get_bill_not_owner`
///
/// ## Identity / static content
/// - `test_rest_missing_identity` — 401 on every member route
/// - `test_rest_navigation_and_dashboard`
/// - `test_rest_health`
#[macro_export]
macro_rules! rest_integration_tests {
    ($notification_factory:expr, $bill_factory:expr) => {
        mod rest_integration_tests {
            use super::*;
            use axum::http::StatusCode;
            use axum_test::TestServer;
            use serde_json::Value;
            use society::core::service::{BillService, NotificationService};
            use std::sync::Arc;
            use crate::storage_harness::integration::{build_test_router, identity};
            use uuid::Uuid;

            struct Fixture {
                server: TestServer,
                notifications: Arc<dyn NotificationService>,
                bills: Arc<dyn BillService>,
            }

            async fn make_fixture() -> Fixture {
                let notifications: Arc<dyn NotificationService> = Arc::new($notification_factory);
                let bills: Arc<dyn BillService> = Arc::new($bill_factory);
                let router = build_test_router(notifications.clone(), bills.clone());

                Fixture {
                    server: TestServer::new(router),
                    notifications,
                    bills,
                }
            }

            // ==============================================================
            // Notifications
            // ==============================================================

            #[tokio::test]
            async fn test_rest_list_notifications_newest_first() {
                let fx = make_fixture().await;
                let user = Uuid::new_v4();

                fx.notifications.insert(notification_at(user, "Lift repair", 0)).await.unwrap();
                fx.notifications.insert(notification_at(user, "Water cut", 5)).await.unwrap();
                fx.notifications
                    .insert(notification_at(Uuid::new_v4(), "Someone else", 10))
                    .await
                    .unwrap();

                let (name, value) = identity(user);
                let response = fx.server.get("/api/notifications").add_header(name, value).await;

                response.assert_status(StatusCode::OK);
                let body: Vec<Value> = response.json();
                assert_eq!(body.len(), 2);
                assert_eq!(body[0]["title"], "Water cut");
                assert_eq!(body[1]["title"], "Lift repair");
                assert_eq!(body[0]["isRead"], false);
                assert_eq!(body[0]["user"], user.to_string());
                assert!(body[0].get("createdAt").is_some());
                assert_eq!(body[0]["type"], "general");
            }

            #[tokio::test]
            async fn test_rest_mark_as_read() {
                let fx = make_fixture().await;
                let user = Uuid::new_v4();

                let target = fx.notifications.insert(notification_at(user, "Target", 0)).await.unwrap();
                let other = fx.notifications.insert(notification_at(user, "Other", 1)).await.unwrap();

                let (name, value) = identity(user);
                let response = fx
                    .server
                    .put(&format!("/api/notifications/{}/read", target.id))
                    .add_header(name, value)
                    .await;

                response.assert_status(StatusCode::OK);
                let body: Value = response.json();
                assert_eq!(body["id"], target.id.to_string());
                assert_eq!(body["isRead"], true);

                let stored = fx.notifications.get(&target.id).await.unwrap().unwrap();
                assert!(stored.is_read);
                let untouched = fx.notifications.get(&other.id).await.unwrap().unwrap();
                assert!(!untouched.is_read);
            }

            #[tokio::test]
            async fn test_rest_mark_as_read_not_owner() {
                let fx = make_fixture().await;
                let owner = Uuid::new_v4();
                let target = fx.notifications.insert(notification_at(owner, "Private", 0)).await.unwrap();

                let (name, value) = identity(Uuid::new_v4());
                let response = fx
                    .server
                    .put(&format!("/api/notifications/{}/read", target.id))
                    .add_header(name, value)
                    .await;

                response.assert_status(StatusCode::UNAUTHORIZED);
                let body: Value = response.json();
                assert_eq!(body["message"], "Not authorized");

                let stored = fx.notifications.get(&target.id).await.unwrap().unwrap();
                assert!(!stored.is_read);
            }

            #[tokio::test]
            async fn test_rest_mark_as_read_not_found() {
                let fx = make_fixture().await;

                let (name, value) = identity(Uuid::new_v4());
                let response = fx
                    .server
                    .put(&format!("/api/notifications/{}/read", Uuid::new_v4()))
                    .add_header(name, value)
                    .await;

                response.assert_status(StatusCode::NOT_FOUND);
                let body: Value = response.json();
                assert_eq!(body["code"], "NOT_FOUND");
                assert_eq!(body["message"], "Notification not found");
            }

            #[tokio::test]
            async fn test_rest_mark_as_read_invalid_id() {
                let fx = make_fixture().await;

                let (name, value) = identity(Uuid::new_v4());
                let response = fx
                    .server
                    .put("/api/notifications/not-a-uuid/read")
                    .add_header(name, value)
                    .await;

                response.assert_status(StatusCode::BAD_REQUEST);
                let body: Value = response.json();
                assert_eq!(body["code"], "INVALID_ENTITY_ID");
            }

            #[tokio::test]
            async fn test_rest_mark_all_as_read() {
                let fx = make_fixture().await;
                let user = Uuid::new_v4();
                let other = Uuid::new_v4();

                fx.notifications.insert(notification_at(user, "a", 0)).await.unwrap();
                fx.notifications.insert(read_notification_at(user, "b", 1)).await.unwrap();
                let foreign = fx.notifications.insert(notification_at(other, "c", 2)).await.unwrap();

                for _ in 0..2 {
                    let (name, value) = identity(user);
                    let response = fx
                        .server
                        .put("/api/notifications/read-all")
                        .add_header(name, value)
                        .await;

                    response.assert_status(StatusCode::OK);
                    let body: Value = response.json();
                    assert_eq!(body["message"], "All notifications marked as read");
                }

                let mine = fx.notifications.find_by_user(&user).await.unwrap();
                assert!(mine.iter().all(|n| n.is_read));
                let theirs = fx.notifications.get(&foreign.id).await.unwrap().unwrap();
                assert!(!theirs.is_read);
            }

            // ==============================================================
            // Bills
            // ==============================================================

            #[tokio::test]
            async fn test_rest_list_bills() {
                let fx = make_fixture().await;
                let user = Uuid::new_v4();

                fx.bills.insert(bill_at(user, "INV-1", 0)).await.unwrap();
                fx.bills.insert(bill_at(user, "INV-2", 30)).await.unwrap();

                let (name, value) = identity(user);
                let response = fx.server.get("/api/bills").add_header(name, value).await;

                response.assert_status(StatusCode::OK);
                let body: Vec<Value> = response.json();
                assert_eq!(body.len(), 2);
                assert_eq!(body[0]["invoiceNumber"], "INV-2");
                assert_eq!(body[0]["type"], "maintenance");
            }

            #[tokio::test]
            async fn test_rest_get_bill_not_owner() {
                let fx = make_fixture().await;
                let owner = Uuid::new_v4();
                let bill = fx.bills.insert(bill_at(owner, "INV-9", 0)).await.unwrap();

                let (name, value) = identity(owner);
                fx.server
                    .get(&format!("/api/bills/{}", bill.id))
                    .add_header(name, value)
                    .await
                    .assert_status(StatusCode::OK);

                let (name, value) = identity(Uuid::new_v4());
                fx.server
                    .get(&format!("/api/bills/{}", bill.id))
                    .add_header(name, value)
                    .await
                    .assert_status(StatusCode::UNAUTHORIZED);
            }

            // ==============================================================
            // Identity and static content
            // ==============================================================

            #[tokio::test]
            async fn test_rest_missing_identity() {
                let fx = make_fixture().await;

                for path in ["/api/notifications", "/api/bills", "/api/navigation", "/api/dashboard"] {
                    let response = fx.server.get(path).await;
                    response.assert_status(StatusCode::UNAUTHORIZED);
                    let body: Value = response.json();
                    assert_eq!(body["code"], "UNAUTHENTICATED", "path {}", path);
                }

                fx.server
                    .put("/api/notifications/read-all")
                    .await
                    .assert_status(StatusCode::UNAUTHORIZED);
            }

            #[tokio::test]
            async fn test_rest_navigation_and_dashboard() {
                let fx = make_fixture().await;
                let user = Uuid::new_v4();

                let (name, value) = identity(user);
                let nav: Vec<Value> = fx.server.get("/api/navigation").add_header(name, value).await.json();
                assert_eq!(nav[0]["label"], "Dashboard");
                assert!(nav.iter().any(|l| l["path"] == "/notifications"));

                let (name, value) = identity(user);
                let stats: Value = fx.server.get("/api/dashboard").add_header(name, value).await.json();
                assert_eq!(stats["totalMembers"], 120);
            }

            #[tokio::test]
            async fn test_rest_health() {
                let fx = make_fixture().await;

                let body: Value = fx.server.get("/health").await.json();
                assert_eq!(body["status"], "ok");
                assert_eq!(body["service"], "society-hub");
            }
        }
    };
}
