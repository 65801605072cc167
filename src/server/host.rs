//! Server host holding everything the exposures need
//!
//! The host is independent of the transport: it owns the document APIs, the
//! identity provider and the configuration. `RestExposure` turns it into an
//! axum router.

use crate::config::AppConfig;
use crate::core::auth::AuthProvider;
use crate::core::service::{BillService, NotificationService};
use crate::entities::bill::BillDescriptor;
use crate::entities::notification::NotificationDescriptor;
use crate::entities::{BillApi, NotificationApi};
use crate::server::entity_registry::EntityRegistry;
use std::sync::Arc;

/// Host context containing all application state
///
/// # Example
///
/// ```rust,ignore
/// let host = ServerHost::from_builder_components(
///     notification_service,
///     bill_service,
///     auth_provider,
///     config,
/// );
///
/// let app = RestExposure::build_router(Arc::new(host), vec![])?;
/// ```
pub struct ServerHost {
    pub config: Arc<AppConfig>,

    /// Resolves the member behind each request
    pub auth_provider: Arc<dyn AuthProvider>,

    pub notifications: NotificationApi,

    pub bills: BillApi,

    /// Route descriptors for every document type
    pub entity_registry: EntityRegistry,
}

impl ServerHost {
    /// Build the host and register the descriptor of each document type
    pub fn from_builder_components(
        notification_service: Arc<dyn NotificationService>,
        bill_service: Arc<dyn BillService>,
        auth_provider: Arc<dyn AuthProvider>,
        config: AppConfig,
    ) -> Self {
        let notifications = NotificationApi::new(notification_service);
        let bills = BillApi::new(bill_service);

        let mut entity_registry = EntityRegistry::new();
        entity_registry.register(Box::new(NotificationDescriptor::new(notifications.clone())));
        entity_registry.register(Box::new(BillDescriptor::new(bills.clone())));

        Self {
            config: Arc::new(config),
            auth_provider,
            notifications,
            bills,
            entity_registry,
        }
    }

    /// Get entity types registered in the host
    pub fn entity_types(&self) -> Vec<&str> {
        self.entity_registry.entity_types()
    }
}
