//! Request identity for society-hub
//!
//! Authentication itself happens upstream (gateway, session layer). This
//! module only turns whatever that collaborator attached to the request into
//! an [`AuthContext`] and hands it to handlers:
//!
//! ```text
//! request ──▶ attach_auth_context (AuthProvider) ──▶ extensions[AuthContext] ──▶ CurrentUser
//! ```

use crate::core::error::{RequestError, SocietyError};
use anyhow::Result;
use async_trait::async_trait;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::HeaderName;
use axum::http::request::Parts;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;
use uuid::Uuid;

/// Authorization context extracted from a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthContext {
    /// Authenticated society member
    User { user_id: Uuid },

    /// No identity attached
    Anonymous,
}

impl AuthContext {
    /// Get user_id if available
    pub fn user_id(&self) -> Option<Uuid> {
        match self {
            AuthContext::User { user_id } => Some(*user_id),
            AuthContext::Anonymous => None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, AuthContext::User { .. })
    }
}

/// Trait for auth providers
#[async_trait]
pub trait AuthProvider: Send + Sync {
    /// Extract auth context from the request head
    async fn extract_context(&self, parts: &Parts) -> Result<AuthContext>;
}

/// Trusts a user id header set by the upstream authentication layer
///
/// Requests without the header, or with a value that is not a UUID, are
/// treated as anonymous.
#[derive(Debug, Clone)]
pub struct HeaderAuthProvider {
    header: HeaderName,
}

impl HeaderAuthProvider {
    pub fn new(header: HeaderName) -> Self {
        Self { header }
    }

    /// Build from a header name string (e.g., from configuration)
    pub fn from_name(name: &str) -> Result<Self> {
        let header = HeaderName::from_bytes(name.trim().to_ascii_lowercase().as_bytes())?;
        Ok(Self::new(header))
    }

    pub fn header(&self) -> &HeaderName {
        &self.header
    }
}

impl Default for HeaderAuthProvider {
    fn default() -> Self {
        Self::new(HeaderName::from_static("x-user-id"))
    }
}

#[async_trait]
impl AuthProvider for HeaderAuthProvider {
    async fn extract_context(&self, parts: &Parts) -> Result<AuthContext> {
        let Some(value) = parts.headers.get(&self.header) else {
            return Ok(AuthContext::Anonymous);
        };

        let parsed = value
            .to_str()
            .ok()
            .and_then(|raw| Uuid::parse_str(raw.trim()).ok());

        match parsed {
            Some(user_id) => Ok(AuthContext::User { user_id }),
            None => {
                tracing::debug!(header = %self.header, "ignoring malformed identity header");
                Ok(AuthContext::Anonymous)
            }
        }
    }
}

/// Default no-auth provider (every request is anonymous)
pub struct NoAuthProvider;

#[async_trait]
impl AuthProvider for NoAuthProvider {
    async fn extract_context(&self, _parts: &Parts) -> Result<AuthContext> {
        Ok(AuthContext::Anonymous)
    }
}

/// Middleware that resolves the [`AuthContext`] once per request and stores
/// it in the request extensions.
pub async fn attach_auth_context(
    State(provider): State<Arc<dyn AuthProvider>>,
    request: Request,
    next: Next,
) -> Response {
    let (mut parts, body) = request.into_parts();

    let context = match provider.extract_context(&parts).await {
        Ok(context) => context,
        Err(e) => {
            tracing::warn!(error = %e, "auth provider failed, treating request as anonymous");
            AuthContext::Anonymous
        }
    };

    parts.extensions.insert(context);
    next.run(Request::from_parts(parts, body)).await
}

/// Extractor for the authenticated user's id
///
/// Rejects with `401` when no [`AuthContext::User`] was attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrentUser(pub Uuid);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = SocietyError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .and_then(AuthContext::user_id)
            .map(CurrentUser)
            .ok_or_else(|| RequestError::MissingIdentity.into())
    }
}
