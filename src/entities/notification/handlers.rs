//! Notification HTTP handlers

use super::api::{Acknowledgement, NotificationApi};
use super::model::Notification;
use crate::core::auth::CurrentUser;
use crate::core::error::SocietyError;
use crate::core::extractors::EntityId;
use axum::{extract::State, response::Json};

/// Notification-specific AppState
#[derive(Clone)]
pub struct NotificationAppState {
    pub api: NotificationApi,
}

/// GET /api/notifications
pub async fn list_notifications(
    State(state): State<NotificationAppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<Notification>>, SocietyError> {
    state.api.get_notifications(&user_id).await.map(Json)
}

/// PUT /api/notifications/{id}/read
pub async fn mark_notification_read(
    State(state): State<NotificationAppState>,
    CurrentUser(user_id): CurrentUser,
    EntityId(id): EntityId,
) -> Result<Json<Notification>, SocietyError> {
    state.api.mark_as_read(&id, &user_id).await.map(Json)
}

/// PUT /api/notifications/read-all
pub async fn mark_all_notifications_read(
    State(state): State<NotificationAppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Acknowledgement>, SocietyError> {
    state.api.mark_all_as_read(&user_id).await.map(Json)
}
