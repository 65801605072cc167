//! In-memory storage for testing and development

use crate::core::entity::{Entity, sort_newest_first};
use crate::core::{BillService, NotificationService};
use crate::entities::{Bill, Notification};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use uuid::Uuid;

/// Shared map behind the in-memory services
///
/// Insertion order is kept alongside the map so that listings sharing a
/// `created_at` come back in a stable order.
struct Documents<T> {
    by_id: HashMap<Uuid, T>,
    order: Vec<Uuid>,
}

impl<T: Entity> Documents<T> {
    fn new() -> Self {
        Self {
            by_id: HashMap::new(),
            order: Vec::new(),
        }
    }

    /// Store a new document. An id that is already present is rejected so
    /// a re-delivered document cannot overwrite the stored one.
    fn insert(&mut self, doc: T) -> Result<()> {
        let id = doc.id();
        if self.by_id.contains_key(&id) {
            return Err(anyhow!(
                "{} already exists: {}",
                T::resource_name_singular(),
                id
            ));
        }
        self.by_id.insert(id, doc);
        self.order.push(id);
        Ok(())
    }

    fn owned_by(&self, user: &Uuid) -> Vec<T> {
        let mut docs: Vec<T> = self
            .order
            .iter()
            .filter_map(|id| self.by_id.get(id))
            .filter(|doc| doc.is_owned_by(user))
            .cloned()
            .collect();
        sort_newest_first(&mut docs);
        docs
    }
}

/// In-memory notification service
///
/// Uses RwLock for thread-safe access.
#[derive(Clone)]
pub struct InMemoryNotificationService {
    docs: Arc<RwLock<Documents<Notification>>>,
}

impl InMemoryNotificationService {
    /// Create a new in-memory notification service
    pub fn new() -> Self {
        Self {
            docs: Arc::new(RwLock::new(Documents::new())),
        }
    }
}

impl Default for InMemoryNotificationService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl NotificationService for InMemoryNotificationService {
    async fn insert(&self, notification: Notification) -> Result<Notification> {
        let mut docs = self
            .docs
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        docs.insert(notification.clone())?;

        Ok(notification)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Notification>> {
        let docs = self
            .docs
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(docs.by_id.get(id).cloned())
    }

    async fn find_by_user(&self, user: &Uuid) -> Result<Vec<Notification>> {
        let docs = self
            .docs
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(docs.owned_by(user))
    }

    async fn save(&self, notification: Notification) -> Result<Notification> {
        let mut docs = self
            .docs
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let slot = docs
            .by_id
            .get_mut(&notification.id)
            .ok_or_else(|| anyhow!("Notification not found: {}", notification.id))?;
        *slot = notification.clone();

        Ok(notification)
    }

    async fn mark_all_read(&self, user: &Uuid) -> Result<u64> {
        let mut docs = self
            .docs
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        let mut modified = 0;
        for notification in docs.by_id.values_mut() {
            if notification.user == *user && !notification.is_read {
                notification.mark_read();
                modified += 1;
            }
        }

        Ok(modified)
    }
}

/// In-memory bill service
#[derive(Clone)]
pub struct InMemoryBillService {
    docs: Arc<RwLock<Documents<Bill>>>,
}

impl InMemoryBillService {
    pub fn new() -> Self {
        Self {
            docs: Arc::new(RwLock::new(Documents::new())),
        }
    }
}

impl Default for InMemoryBillService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BillService for InMemoryBillService {
    async fn insert(&self, bill: Bill) -> Result<Bill> {
        let mut docs = self
            .docs
            .write()
            .map_err(|e| anyhow!("Failed to acquire write lock: {}", e))?;

        docs.insert(bill.clone())?;

        Ok(bill)
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Bill>> {
        let docs = self
            .docs
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(docs.by_id.get(id).cloned())
    }

    async fn find_by_user(&self, user: &Uuid) -> Result<Vec<Bill>> {
        let docs = self
            .docs
            .read()
            .map_err(|e| anyhow!("Failed to acquire read lock: {}", e))?;

        Ok(docs.owned_by(user))
    }
}
