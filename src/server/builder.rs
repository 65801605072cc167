//! ServerBuilder for fluent API to build HTTP servers

use super::exposure::RestExposure;
use super::host::ServerHost;
use crate::config::AppConfig;
use crate::core::auth::{AuthProvider, HeaderAuthProvider};
use crate::core::service::{BillService, NotificationService};
use anyhow::Result;
use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// Builder for creating the society HTTP server
///
/// # Example
///
/// ```ignore
/// let app = ServerBuilder::new()
///     .with_notification_service(InMemoryNotificationService::new())
///     .with_bill_service(InMemoryBillService::new())
///     .with_custom_routes(dashboard::routes())
///     .build()?;
/// ```
pub struct ServerBuilder {
    notification_service: Option<Arc<dyn NotificationService>>,
    bill_service: Option<Arc<dyn BillService>>,
    auth_provider: Option<Arc<dyn AuthProvider>>,
    config: AppConfig,
    custom_routes: Vec<Router>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self {
            notification_service: None,
            bill_service: None,
            auth_provider: None,
            config: AppConfig::default(),
            custom_routes: Vec::new(),
        }
    }

    /// Set the notification store (required)
    pub fn with_notification_service(mut self, service: impl NotificationService + 'static) -> Self {
        self.notification_service = Some(Arc::new(service));
        self
    }

    /// Set the bill store (required)
    pub fn with_bill_service(mut self, service: impl BillService + 'static) -> Self {
        self.bill_service = Some(Arc::new(service));
        self
    }

    /// Override the identity provider.
    ///
    /// Without one, a [`HeaderAuthProvider`] reading `auth.user_header` from
    /// the configuration is used.
    pub fn with_auth_provider(mut self, provider: impl AuthProvider + 'static) -> Self {
        self.auth_provider = Some(Arc::new(provider));
        self
    }

    pub fn with_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Add custom routes, served under `/api` behind the identity middleware
    ///
    /// # Example
    ///
    /// ```ignore
    /// ServerBuilder::new()
    ///     .with_notification_service(notifications)
    ///     .with_bill_service(bills)
    ///     .with_custom_routes(society::dashboard::routes())
    ///     .build()?;
    /// ```
    pub fn with_custom_routes(mut self, routes: Router) -> Self {
        self.custom_routes.push(routes);
        self
    }

    /// Build the transport-agnostic host
    pub fn build_host(mut self) -> Result<ServerHost> {
        let notification_service = self.notification_service.take().ok_or_else(|| {
            anyhow::anyhow!("NotificationService is required. Call .with_notification_service()")
        })?;

        let bill_service = self
            .bill_service
            .take()
            .ok_or_else(|| anyhow::anyhow!("BillService is required. Call .with_bill_service()"))?;

        let auth_provider = match self.auth_provider.take() {
            Some(provider) => provider,
            None => {
                let provider = HeaderAuthProvider::from_name(&self.config.auth.user_header)?;
                tracing::debug!(header = %provider.header(), "identity read from request header");
                Arc::new(provider)
            }
        };

        Ok(ServerHost::from_builder_components(
            notification_service,
            bill_service,
            auth_provider,
            self.config,
        ))
    }

    /// Build the final REST router
    pub fn build(mut self) -> Result<Router> {
        let custom_routes = std::mem::take(&mut self.custom_routes);
        let host = Arc::new(self.build_host()?);
        RestExposure::build_router(host, custom_routes)
    }

    /// Serve the application with graceful shutdown
    ///
    /// Stops accepting connections on SIGTERM or Ctrl+C and waits for
    /// in-flight requests to finish.
    ///
    /// # Example
    ///
    /// ```ignore
    /// ServerBuilder::new()
    ///     .with_notification_service(notifications)
    ///     .with_bill_service(bills)
    ///     .serve("127.0.0.1:5000").await?;
    /// ```
    pub async fn serve(self, addr: &str) -> Result<()> {
        let app = self.build()?;
        let listener = TcpListener::bind(addr).await?;

        tracing::info!("Server listening on {}", addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Wait for SIGTERM or Ctrl+C
///
/// If a handler cannot be installed, that signal is ignored and the other
/// one still triggers shutdown.
async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal, initiating graceful shutdown...");
        },
        _ = terminate => {
            tracing::info!("Received SIGTERM signal, initiating graceful shutdown...");
        },
    }
}
