//! Entity descriptor for Notification

use super::api::NotificationApi;
use super::handlers::{
    NotificationAppState, list_notifications, mark_all_notifications_read, mark_notification_read,
};
use crate::server::EntityDescriptor;
use axum::{
    Router,
    routing::{get, put},
};

/// Descriptor for the Notification entity
pub struct NotificationDescriptor {
    pub api: NotificationApi,
}

impl NotificationDescriptor {
    pub fn new(api: NotificationApi) -> Self {
        Self { api }
    }
}

impl EntityDescriptor for NotificationDescriptor {
    fn entity_type(&self) -> &str {
        "notification"
    }

    fn plural(&self) -> &str {
        "notifications"
    }

    fn build_routes(&self) -> Router {
        let state = NotificationAppState {
            api: self.api.clone(),
        };

        Router::new()
            .route("/notifications", get(list_notifications))
            .route("/notifications/read-all", put(mark_all_notifications_read))
            .route("/notifications/{id}/read", put(mark_notification_read))
            .with_state(state)
    }
}
