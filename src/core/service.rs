//! Storage traits for society documents

use crate::entities::{Bill, Notification};
use anyhow::Result;
use async_trait::async_trait;
use uuid::Uuid;

/// Storage for notifications
///
/// Implementations are agnostic to HTTP and authorization; ownership checks
/// live in [`NotificationApi`](crate::entities::notification::NotificationApi).
#[async_trait]
pub trait NotificationService: Send + Sync {
    /// Store a new notification (used by producers, never by the REST layer).
    /// Fails if the id is already stored.
    async fn insert(&self, notification: Notification) -> Result<Notification>;

    /// Get a notification by ID
    async fn get(&self, id: &Uuid) -> Result<Option<Notification>>;

    /// All notifications owned by `user`, newest first
    async fn find_by_user(&self, user: &Uuid) -> Result<Vec<Notification>>;

    /// Replace a stored notification
    ///
    /// Fails if no notification with that id exists.
    async fn save(&self, notification: Notification) -> Result<Notification>;

    /// Set `is_read = true` on every unread notification owned by `user`
    ///
    /// Returns how many documents changed.
    async fn mark_all_read(&self, user: &Uuid) -> Result<u64>;
}

/// Read-only storage for bills
#[async_trait]
pub trait BillService: Send + Sync {
    /// Store a new bill. Fails if the id is already stored.
    async fn insert(&self, bill: Bill) -> Result<Bill>;

    /// Get a bill by ID
    async fn get(&self, id: &Uuid) -> Result<Option<Bill>>;

    /// All bills owned by `user`, newest first
    async fn find_by_user(&self, user: &Uuid) -> Result<Vec<Bill>>;
}
