//! Entity trait shared by every stored document

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Base trait for documents kept in the store.
///
/// Every society document has:
/// - id: Unique identifier
/// - owner: The user the document belongs to
/// - created_at: Creation timestamp, used for newest-first listings
pub trait Entity: Clone + Send + Sync + 'static {
    /// The collection name (e.g., "notifications", "bills")
    fn resource_name() -> &'static str;

    /// The singular name used in error messages (e.g., "notification")
    fn resource_name_singular() -> &'static str;

    /// Get the unique identifier for this document
    fn id(&self) -> Uuid;

    /// Get the owner reference
    fn owner(&self) -> Uuid;

    /// Get the creation timestamp
    fn created_at(&self) -> DateTime<Utc>;

    /// Check whether `user_id` owns this document
    fn is_owned_by(&self, user_id: &Uuid) -> bool {
        self.owner() == *user_id
    }
}

/// Sort documents newest first.
///
/// The sort is stable, so documents sharing a timestamp keep their input order.
pub fn sort_newest_first<T: Entity>(items: &mut [T]) {
    items.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
}
