//! MongoDB storage backend using the official MongoDB async driver.
//!
//! Provides `MongoNotificationService` and `MongoBillService` backed by a
//! `mongodb::Database`.
//!
//! # Feature flag
//!
//! This module is gated behind the `mongodb_backend` feature flag:
//! ```toml
//! [dependencies]
//! society-hub = { version = "0.1", features = ["mongodb_backend"] }
//! ```
//!
//! # Storage model
//!
//! One collection per document type, named after `T::resource_name()`
//! ("notifications", "bills"). Documents are serialized through
//! `serde_json::Value` and converted to BSON; UUIDs are stored as strings,
//! `id` is mapped to MongoDB's `_id`, and `createdAt` is stored as a native
//! BSON datetime so that server-side sorting is chronological.

use crate::core::entity::Entity;
use crate::core::{BillService, NotificationService};
use crate::entities::{Bill, Notification};
use anyhow::{Result, anyhow};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use futures::TryStreamExt;
use mongodb::bson::{Bson, Document, doc};
use mongodb::{Database, IndexModel};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use uuid::Uuid;

/// Field holding the creation timestamp in every society document
const CREATED_AT: &str = "createdAt";

/// Field holding the owner reference in every society document
const OWNER: &str = "user";

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

/// Convert a serde_json::Value (expected to be an Object) into a BSON Document,
/// renaming `id` → `_id` and storing `createdAt` as a BSON datetime.
fn json_to_document(json: serde_json::Value) -> Result<Document> {
    let bson_val = mongodb::bson::to_bson(&json)
        .map_err(|e| anyhow!("Failed to convert JSON to BSON: {}", e))?;

    let mut doc = match bson_val {
        Bson::Document(d) => d,
        _ => return Err(anyhow!("Expected BSON document, got non-object")),
    };

    if let Some(id) = doc.remove("id") {
        doc.insert("_id", id);
    }

    let stamp = match doc.get(CREATED_AT) {
        Some(Bson::String(raw)) => {
            let parsed = DateTime::parse_from_rfc3339(raw)
                .map_err(|e| anyhow!("Invalid {} '{}': {}", CREATED_AT, raw, e))?;
            Some(mongodb::bson::DateTime::from_millis(parsed.timestamp_millis()))
        }
        _ => None,
    };
    if let Some(stamp) = stamp {
        doc.insert(CREATED_AT, Bson::DateTime(stamp));
    }

    Ok(doc)
}

/// Convert a BSON Document back into a serde_json::Value,
/// renaming `_id` → `id` and turning `createdAt` back into RFC 3339.
fn document_to_json(mut doc: Document) -> Result<serde_json::Value> {
    if let Some(id) = doc.remove("_id") {
        doc.insert("id", id);
    }

    let millis = match doc.get(CREATED_AT) {
        Some(Bson::DateTime(stamp)) => Some(stamp.timestamp_millis()),
        _ => None,
    };
    if let Some(millis) = millis {
        let restored: DateTime<Utc> = DateTime::from_timestamp_millis(millis)
            .ok_or_else(|| anyhow!("{} out of range: {}", CREATED_AT, millis))?;
        doc.insert(
            CREATED_AT,
            Bson::String(restored.to_rfc3339_opts(SecondsFormat::Millis, true)),
        );
    }

    Ok(Bson::Document(doc).into_relaxed_extjson())
}

/// Convert a UUID to its BSON string representation for queries.
fn uuid_bson(id: &Uuid) -> Bson {
    Bson::String(id.to_string())
}

// ---------------------------------------------------------------------------
// Typed collection shared by the services
// ---------------------------------------------------------------------------

/// Collection of `T` documents, named by `T::resource_name()`
#[derive(Clone, Debug)]
struct EntityCollection<T> {
    database: Database,
    _marker: PhantomData<T>,
}

impl<T: Entity + Serialize + DeserializeOwned> EntityCollection<T> {
    fn new(database: Database) -> Self {
        Self {
            database,
            _marker: PhantomData,
        }
    }

    fn collection(&self) -> mongodb::Collection<Document> {
        self.database.collection(T::resource_name())
    }

    fn to_document(entity: &T) -> Result<Document> {
        let json = serde_json::to_value(entity)
            .map_err(|e| anyhow!("Failed to serialize {}: {}", T::resource_name_singular(), e))?;
        json_to_document(json)
    }

    fn from_document(doc: Document) -> Result<T> {
        let json = document_to_json(doc)?;
        serde_json::from_value(json).map_err(|e| {
            anyhow!(
                "Failed to deserialize {} from document: {}",
                T::resource_name_singular(),
                e
            )
        })
    }

    /// Owner lookups are the only query path, newest first
    async fn ensure_indexes(&self) -> Result<()> {
        let index = IndexModel::builder()
            .keys(doc! { OWNER: 1, CREATED_AT: -1 })
            .build();

        self.collection().create_index(index).await.map_err(|e| {
            anyhow!(
                "Failed to create indexes on {} collection: {}",
                T::resource_name(),
                e
            )
        })?;

        Ok(())
    }

    async fn insert(&self, entity: T) -> Result<T> {
        let doc = Self::to_document(&entity)?;

        self.collection()
            .insert_one(doc)
            .await
            .map_err(|e| anyhow!("Failed to create {}: {}", T::resource_name_singular(), e))?;

        self.get(&entity.id())
            .await?
            .ok_or_else(|| anyhow!("{} not found after insert", T::resource_name_singular()))
    }

    async fn get(&self, id: &Uuid) -> Result<Option<T>> {
        let doc = self
            .collection()
            .find_one(doc! { "_id": uuid_bson(id) })
            .await
            .map_err(|e| anyhow!("Failed to get {}: {}", T::resource_name_singular(), e))?;

        doc.map(Self::from_document).transpose()
    }

    async fn find_by_user(&self, user: &Uuid) -> Result<Vec<T>> {
        let cursor = self
            .collection()
            .find(doc! { OWNER: uuid_bson(user) })
            .sort(doc! { CREATED_AT: -1 })
            .await
            .map_err(|e| anyhow!("Failed to list {}: {}", T::resource_name(), e))?;

        let docs: Vec<Document> = cursor
            .try_collect()
            .await
            .map_err(|e| anyhow!("Failed to collect {}: {}", T::resource_name(), e))?;

        docs.into_iter().map(Self::from_document).collect()
    }

    async fn replace(&self, entity: T) -> Result<T> {
        let id = entity.id();
        let doc = Self::to_document(&entity)?;

        let result = self
            .collection()
            .replace_one(doc! { "_id": uuid_bson(&id) }, doc)
            .await
            .map_err(|e| anyhow!("Failed to update {}: {}", T::resource_name_singular(), e))?;

        if result.matched_count == 0 {
            return Err(anyhow!("{} not found: {}", T::resource_name_singular(), id));
        }

        self.get(&id)
            .await?
            .ok_or_else(|| anyhow!("{} not found after update", T::resource_name_singular()))
    }
}

// ---------------------------------------------------------------------------
// MongoNotificationService
// ---------------------------------------------------------------------------

/// Notification storage backed by MongoDB.
///
/// # Example
///
/// ```rust,ignore
/// use mongodb::Client;
/// use society::storage::MongoNotificationService;
///
/// let client = Client::with_uri_str("mongodb://localhost:27017").await?;
/// let service = MongoNotificationService::new(client.database("society"));
/// service.ensure_indexes().await?;
/// ```
#[derive(Clone, Debug)]
pub struct MongoNotificationService {
    notifications: EntityCollection<Notification>,
}

impl MongoNotificationService {
    /// Create a new `MongoNotificationService` with the given database handle.
    pub fn new(database: Database) -> Self {
        Self {
            notifications: EntityCollection::new(database),
        }
    }

    /// Get a reference to the underlying database.
    pub fn database(&self) -> &Database {
        &self.notifications.database
    }

    /// Create the `{user: 1, createdAt: -1}` index. Safe to call on every startup.
    pub async fn ensure_indexes(&self) -> Result<()> {
        self.notifications.ensure_indexes().await
    }
}

#[async_trait]
impl NotificationService for MongoNotificationService {
    async fn insert(&self, notification: Notification) -> Result<Notification> {
        self.notifications.insert(notification).await
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Notification>> {
        self.notifications.get(id).await
    }

    async fn find_by_user(&self, user: &Uuid) -> Result<Vec<Notification>> {
        self.notifications.find_by_user(user).await
    }

    async fn save(&self, notification: Notification) -> Result<Notification> {
        self.notifications.replace(notification).await
    }

    /// Single `updateMany` filtered on `isRead: false`, so documents that are
    /// already read are never rewritten.
    async fn mark_all_read(&self, user: &Uuid) -> Result<u64> {
        let result = self
            .notifications
            .collection()
            .update_many(
                doc! { OWNER: uuid_bson(user), "isRead": false },
                doc! { "$set": { "isRead": true } },
            )
            .await
            .map_err(|e| anyhow!("Failed to mark notifications as read: {}", e))?;

        Ok(result.modified_count)
    }
}

// ---------------------------------------------------------------------------
// MongoBillService
// ---------------------------------------------------------------------------

/// Bill storage backed by MongoDB.
#[derive(Clone, Debug)]
pub struct MongoBillService {
    bills: EntityCollection<Bill>,
}

impl MongoBillService {
    pub fn new(database: Database) -> Self {
        Self {
            bills: EntityCollection::new(database),
        }
    }

    pub fn database(&self) -> &Database {
        &self.bills.database
    }

    pub async fn ensure_indexes(&self) -> Result<()> {
        self.bills.ensure_indexes().await
    }
}

#[async_trait]
impl BillService for MongoBillService {
    async fn insert(&self, bill: Bill) -> Result<Bill> {
        self.bills.insert(bill).await
    }

    async fn get(&self, id: &Uuid) -> Result<Option<Bill>> {
        self.bills.get(id).await
    }

    async fn find_by_user(&self, user: &Uuid) -> Result<Vec<Bill>> {
        self.bills.find_by_user(user).await
    }
}
