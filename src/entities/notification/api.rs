//! Notification operations scoped to the requesting user

use super::model::Notification;
use crate::core::entity::Entity;
use crate::core::error::SocietyError;
use crate::core::service::NotificationService;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Message returned by bulk operations instead of the mutated records
pub const ALL_READ_MESSAGE: &str = "All notifications marked as read";

/// Generic success body without per-record detail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub message: String,
}

impl Acknowledgement {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Read-state and ownership rules on top of a [`NotificationService`]
#[derive(Clone)]
pub struct NotificationApi {
    service: Arc<dyn NotificationService>,
}

impl NotificationApi {
    pub fn new(service: Arc<dyn NotificationService>) -> Self {
        Self { service }
    }

    /// Every notification owned by `user_id`, newest first
    pub async fn get_notifications(&self, user_id: &Uuid) -> Result<Vec<Notification>, SocietyError> {
        self.service
            .find_by_user(user_id)
            .await
            .map_err(SocietyError::from_storage)
    }

    /// Mark one notification as read on behalf of `requester_id`.
    ///
    /// Only the owner may do this; anyone else gets `Unauthorized` and the
    /// record is left as it was.
    pub async fn mark_as_read(
        &self,
        notification_id: &Uuid,
        requester_id: &Uuid,
    ) -> Result<Notification, SocietyError> {
        let mut notification = self
            .service
            .get(notification_id)
            .await
            .map_err(SocietyError::from_storage)?
            .ok_or_else(|| {
                SocietyError::not_found(Notification::resource_name_singular(), *notification_id)
            })?;

        if !notification.is_owned_by(requester_id) {
            tracing::warn!(
                notification_id = %notification_id,
                requester_id = %requester_id,
                "rejected mark-as-read on a notification owned by someone else"
            );
            return Err(SocietyError::unauthorized("Not authorized"));
        }

        notification.mark_read();
        let saved = self
            .service
            .save(notification)
            .await
            .map_err(SocietyError::from_storage)?;

        tracing::debug!(notification_id = %saved.id, "notification marked as read");
        Ok(saved)
    }

    /// Mark every unread notification of `user_id` as read
    pub async fn mark_all_as_read(&self, user_id: &Uuid) -> Result<Acknowledgement, SocietyError> {
        let modified = self
            .service
            .mark_all_read(user_id)
            .await
            .map_err(SocietyError::from_storage)?;

        tracing::debug!(user_id = %user_id, modified, "notifications marked as read in bulk");
        Ok(Acknowledgement::new(ALL_READ_MESSAGE))
    }
}
