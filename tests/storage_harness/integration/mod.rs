//! Integration test infrastructure for storage backends.
//!
//! Builds the real application router over a given pair of stores so the
//! REST macro can exercise every layer:
//!
//! ```text
//! axum_test::TestServer
//!     └─ Router (built by build_test_router)
//!         ├─ GET  /health, /healthz
//!         └─ /api  (attach_auth_context)
//!             ├─ GET  /notifications
//!             ├─ PUT  /notifications/read-all
//!             ├─ PUT  /notifications/{id}/read
//!             ├─ GET  /bills
//!             ├─ GET  /bills/{id}
//!             ├─ GET  /navigation
//!             └─ GET  /dashboard
//! ```

#[macro_use]
pub mod rest_tests;

use axum::Router;
use axum::http::{HeaderName, HeaderValue};
use society::config::AppConfig;
use society::core::auth::HeaderAuthProvider;
use society::core::service::{BillService, NotificationService};
use society::dashboard;
use society::server::{RestExposure, ServerHost};
use std::sync::Arc;
use uuid::Uuid;

/// Header carrying the member id in tests (the default one)
pub const USER_HEADER: &str = "x-user-id";

/// Build the production router over the given stores
pub fn build_test_router(
    notifications: Arc<dyn NotificationService>,
    bills: Arc<dyn BillService>,
) -> Router {
    let host = ServerHost::from_builder_components(
        notifications,
        bills,
        Arc::new(HeaderAuthProvider::default()),
        AppConfig::default(),
    );

    RestExposure::build_router(Arc::new(host), vec![dashboard::routes()])
        .expect("router should build")
}

/// Header pair identifying `user`
pub fn identity(user: Uuid) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(USER_HEADER),
        HeaderValue::from_str(&user.to_string()).expect("uuid is a valid header value"),
    )
}
