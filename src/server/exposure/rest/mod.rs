//! REST API exposure
//!
//! Consumes a `ServerHost` and produces an axum `Router`. Document routes and
//! custom routes are nested under `/api` behind the identity middleware;
//! health routes stay at the root and need no identity.

use super::super::host::ServerHost;
use crate::core::auth::attach_auth_context;
use anyhow::Result;
use axum::{Json, Router, middleware, routing::get};
use serde_json::{Value, json};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Prefix under which every member-facing route is served
pub const API_PREFIX: &str = "/api";

/// REST API exposure implementation
pub struct RestExposure;

impl RestExposure {
    /// Build the REST router from a host
    ///
    /// Returns a router with:
    /// - `/health` and `/healthz`
    /// - entity routes under `/api`
    /// - custom routes under `/api`
    pub fn build_router(host: Arc<ServerHost>, custom_routes: Vec<Router>) -> Result<Router> {
        let mut api = host.entity_registry.build_routes();
        for custom_router in custom_routes {
            api = api.merge(custom_router);
        }

        let api = api.layer(middleware::from_fn_with_state(
            host.auth_provider.clone(),
            attach_auth_context,
        ));

        let app = Self::health_routes(host.config.server.service_name.clone())
            .nest(API_PREFIX, api)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            );

        tracing::debug!(resources = ?host.entity_registry.resources(), "REST router built");

        Ok(app)
    }

    /// Build health check routes
    fn health_routes(service: String) -> Router {
        let body = Arc::new(json!({
            "status": "ok",
            "service": service,
        }));

        let health = move || {
            let body = body.clone();
            async move { Json(Value::clone(&body)) }
        };

        Router::new()
            .route("/health", get(health.clone()))
            .route("/healthz", get(health))
    }
}
