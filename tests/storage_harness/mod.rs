//! Shared test harness for storage backend testing
//!
//! Provides fixture builders for notifications and bills, plus the contract
//! macros every backend is checked against.
//!
//! # Usage
//!
//! From any integration test file in `tests/`:
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//! use storage_harness::*;
//!
//! notification_service_tests!(InMemoryNotificationService::new());
//! ```

#![allow(dead_code)]

#[macro_use]
pub mod notification_service_tests;

#[macro_use]
pub mod bill_service_tests;

#[macro_use]
pub mod integration;

use chrono::{DateTime, Duration, TimeZone, Utc};
use society::entities::{Bill, BillType, Notification};
use uuid::Uuid;

/// Fixed base instant so ordering assertions never depend on the clock.
///
/// Whole seconds, so backends with millisecond precision keep it exactly.
pub fn base_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
}

/// Unread notification for `user`, created `minutes` after [`base_time`]
pub fn notification_at(user: Uuid, title: &str, minutes: i64) -> Notification {
    let mut notification = Notification::new(user, title, format!("{} details", title), "general");
    notification.created_at = base_time() + Duration::minutes(minutes);
    notification
}

/// Read notification for `user`, created `minutes` after [`base_time`]
pub fn read_notification_at(user: Uuid, title: &str, minutes: i64) -> Notification {
    let mut notification = notification_at(user, title, minutes);
    notification.mark_read();
    notification
}

/// Maintenance bill for `user`, created `days` after [`base_time`]
pub fn bill_at(user: Uuid, invoice_number: &str, days: i64) -> Bill {
    let mut bill = Bill::new(user, 2500.0, invoice_number, BillType::Maintenance);
    bill.created_at = base_time() + Duration::days(days);
    bill
}
