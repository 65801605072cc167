//! Macro-generated test suite for `BillService` contract validation.

/// Generate a `BillService` conformance test suite.
///
/// `$factory` is re-evaluated for each test.
#[macro_export]
macro_rules! bill_service_tests {
    ($factory:expr) => {
        mod bill_service_contract_tests {
            use super::*;
            use society::core::service::BillService;
            use society::entities::BillType;
            use uuid::Uuid;

            #[tokio::test]
            async fn test_insert_and_get() {
                let service = $factory;
                let user = Uuid::new_v4();
                let bill = bill_at(user, "INV-2024-001", 0)
                    .with_due_date(chrono::NaiveDate::from_ymd_opt(2024, 3, 10).unwrap());
                let id = bill.id;

                service.insert(bill).await.unwrap();

                let fetched = service.get(&id).await.unwrap().expect("should exist");
                assert_eq!(fetched.user, user);
                assert_eq!(fetched.invoice_number, "INV-2024-001");
                assert_eq!(fetched.kind, BillType::Maintenance);
                assert!((fetched.amount - 2500.0).abs() < f64::EPSILON);
                assert_eq!(
                    fetched.due_date,
                    chrono::NaiveDate::from_ymd_opt(2024, 3, 10)
                );
            }

            #[tokio::test]
            async fn test_insert_duplicate_fails() {
                let service = $factory;
                let bill = bill_at(Uuid::new_v4(), "INV-DUP", 0);

                service.insert(bill.clone()).await.unwrap();
                assert!(service.insert(bill).await.is_err());
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

                service.insert(bill_at(user, "INV-1", 0)).await.unwrap();
                service.insert(bill_at(user, "INV-3", 60)).await.unwrap();
                service.insert(bill_at(Uuid::new_v4(), "INV-X", 90)).await.unwrap();
                service.insert(bill_at(user, "INV-2", 30)).await.unwrap();

                let invoices: Vec<String> = service
                    .find_by_user(&user)
                    .await
                    .unwrap()
                    .into_iter()
                    .map(|b| b.invoice_number)
                    .collect();

                assert_eq!(invoices, vec!["INV-3", "INV-2", "INV-1"]);
            }
        }
    };
}
