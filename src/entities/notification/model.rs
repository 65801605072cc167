//! Notification document

use crate::impl_owned_entity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A notification addressed to a single society member.
///
/// `is_read` only ever moves from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: Uuid,

    /// Owner reference
    pub user: Uuid,

    pub title: String,

    pub message: String,

    /// Producer-defined category (e.g., "bill", "payment", "announcement")
    #[serde(rename = "type", default = "default_kind")]
    pub kind: String,

    #[serde(default)]
    pub is_read: bool,

    pub created_at: DateTime<Utc>,
}

fn default_kind() -> String {
    "general".to_string()
}

impl Notification {
    /// Create an unread notification stamped with the current time
    pub fn new(
        user: Uuid,
        title: impl Into<String>,
        message: impl Into<String>,
        kind: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            user,
            title: title.into(),
            message: message.into(),
            kind: kind.into(),
            is_read: false,
            created_at: Utc::now(),
        }
    }

    /// Mark as read. Calling it again is a no-op.
    pub fn mark_read(&mut self) {
        self.is_read = true;
    }
}

impl_owned_entity!(Notification, "notification", "notifications");
