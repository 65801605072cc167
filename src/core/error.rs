//! Typed error handling for society-hub
//!
//! Handlers return [`SocietyError`], which knows its HTTP status and renders
//! itself as a JSON body of the form `{"code": "...", "message": "..."}`.
//!
//! # Error Categories
//!
//! - [`EntityError`]: a requested record does not exist
//! - [`RequestError`]: identity missing, ownership mismatch, malformed ids
//! - [`ValidationError`]: form field validation failures
//! - [`StorageError`]: anything raised by the document store
//! - [`ConfigError`]: configuration loading failures
//!
//! # Example
//!
//! ```rust,ignore
//! use society::prelude::*;
//!
//! match api.mark_as_read(&id, &requester).await {
//!     Ok(notification) => println!("read: {}", notification.id),
//!     Err(SocietyError::Entity(EntityError::NotFound { id, .. })) => {
//!         println!("notification {} does not exist", id);
//!     }
//!     Err(e) => eprintln!("other error: {}", e),
//! }
//! ```

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use std::fmt;
use uuid::Uuid;

/// The main error type for society-hub
#[derive(Debug)]
pub enum SocietyError {
    /// Record-level errors
    Entity(EntityError),

    /// Request / identity errors
    Request(RequestError),

    /// Field validation errors
    Validation(ValidationError),

    /// Document store errors
    Storage(StorageError),

    /// Configuration errors
    Config(ConfigError),
}

impl SocietyError {
    /// Wrap an error raised by a storage backend.
    ///
    /// The backend message is kept verbatim and ends up in the response body.
    pub fn from_storage(err: anyhow::Error) -> Self {
        SocietyError::Storage(StorageError::Backend {
            message: err.to_string(),
        })
    }

    /// Shorthand for an ownership mismatch
    pub fn unauthorized(message: impl Into<String>) -> Self {
        SocietyError::Request(RequestError::Unauthorized {
            message: message.into(),
        })
    }

    /// Shorthand for a missing record
    pub fn not_found(entity_type: &str, id: Uuid) -> Self {
        SocietyError::Entity(EntityError::NotFound {
            entity_type: entity_type.to_string(),
            id,
        })
    }
}

impl fmt::Display for SocietyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SocietyError::Entity(e) => write!(f, "{}", e),
            SocietyError::Request(e) => write!(f, "{}", e),
            SocietyError::Validation(e) => write!(f, "{}", e),
            SocietyError::Storage(e) => write!(f, "{}", e),
            SocietyError::Config(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SocietyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SocietyError::Entity(e) => Some(e),
            SocietyError::Request(e) => Some(e),
            SocietyError::Validation(e) => Some(e),
            SocietyError::Storage(e) => Some(e),
            SocietyError::Config(e) => Some(e),
        }
    }
}

/// Error response structure for HTTP responses
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl SocietyError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            SocietyError::Entity(e) => e.status_code(),
            SocietyError::Request(e) => e.status_code(),
            SocietyError::Validation(_) => StatusCode::BAD_REQUEST,
            SocietyError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            SocietyError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            SocietyError::Entity(e) => e.error_code(),
            SocietyError::Request(e) => e.error_code(),
            SocietyError::Validation(_) => "VALIDATION_ERROR",
            SocietyError::Storage(_) => "SERVER_ERROR",
            SocietyError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            SocietyError::Entity(EntityError::NotFound { entity_type, id }) => {
                Some(serde_json::json!({
                    "entity_type": entity_type,
                    "id": id.to_string()
                }))
            }
            SocietyError::Validation(ValidationError::FieldErrors(errors)) => {
                Some(serde_json::json!({ "fields": errors }))
            }
            _ => None,
        }
    }
}

impl IntoResponse for SocietyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(code = self.error_code(), "{}", self);
        }
        let body = Json(self.to_response());
        (status, body).into_response()
    }
}

// =============================================================================
// Entity Errors
// =============================================================================

/// Errors related to stored records
#[derive(Debug)]
pub enum EntityError {
    /// Record was not found
    NotFound { entity_type: String, id: Uuid },
}

impl fmt::Display for EntityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityError::NotFound { entity_type, .. } => {
                let mut chars = entity_type.chars();
                match chars.next() {
                    Some(first) => write!(f, "{}{} not found", first.to_uppercase(), chars.as_str()),
                    None => write!(f, "Record not found"),
                }
            }
        }
    }
}

impl std::error::Error for EntityError {}

impl EntityError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            EntityError::NotFound { .. } => StatusCode::NOT_FOUND,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            EntityError::NotFound { .. } => "NOT_FOUND",
        }
    }
}

impl From<EntityError> for SocietyError {
    fn from(err: EntityError) -> Self {
        SocietyError::Entity(err)
    }
}

// =============================================================================
// Request Errors
// =============================================================================

/// Errors related to the incoming request and its identity
#[derive(Debug)]
pub enum RequestError {
    /// No authenticated identity was attached to the request
    MissingIdentity,

    /// Identity present but not allowed to touch the resource
    Unauthorized { message: String },

    /// Path id is not a UUID
    InvalidEntityId { id: String },
}

impl fmt::Display for RequestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestError::MissingIdentity => write!(f, "Not authorized, no identity"),
            RequestError::Unauthorized { message } => write!(f, "{}", message),
            RequestError::InvalidEntityId { id } => {
                write!(f, "Invalid entity ID format: '{}'", id)
            }
        }
    }
}

impl std::error::Error for RequestError {}

impl RequestError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            RequestError::MissingIdentity => StatusCode::UNAUTHORIZED,
            RequestError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            RequestError::InvalidEntityId { .. } => StatusCode::BAD_REQUEST,
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            RequestError::MissingIdentity => "UNAUTHENTICATED",
            RequestError::Unauthorized { .. } => "UNAUTHORIZED",
            RequestError::InvalidEntityId { .. } => "INVALID_ENTITY_ID",
        }
    }
}

impl From<RequestError> for SocietyError {
    fn from(err: RequestError) -> Self {
        SocietyError::Request(err)
    }
}

// =============================================================================
// Validation Errors
// =============================================================================

/// Errors related to input validation
#[derive(Debug)]
pub enum ValidationError {
    /// Multiple field validation errors
    FieldErrors(Vec<FieldValidationError>),
}

/// A single field validation error
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldValidationError {
    pub field: String,
    pub message: String,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::FieldErrors(errors) => {
                let msgs: Vec<String> = errors
                    .iter()
                    .map(|e| format!("{}: {}", e.field, e.message))
                    .collect();
                write!(f, "Validation errors: {}", msgs.join(", "))
            }
        }
    }
}

impl std::error::Error for ValidationError {}

impl From<ValidationError> for SocietyError {
    fn from(err: ValidationError) -> Self {
        SocietyError::Validation(err)
    }
}

// =============================================================================
// Storage Errors
// =============================================================================

/// Errors raised by the document store
#[derive(Debug)]
pub enum StorageError {
    /// Any backend failure; the message is passed through untouched
    Backend { message: String },

    /// Backend could not be reached at startup
    ConnectionError { backend: String, message: String },
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Backend { message } => write!(f, "{}", message),
            StorageError::ConnectionError { backend, message } => {
                write!(f, "Failed to connect to {}: {}", backend, message)
            }
        }
    }
}

impl std::error::Error for StorageError {}

impl From<StorageError> for SocietyError {
    fn from(err: StorageError) -> Self {
        SocietyError::Storage(err)
    }
}

// =============================================================================
// Config Errors
// =============================================================================

/// Errors related to configuration
#[derive(Debug)]
pub enum ConfigError {
    /// Failed to parse configuration
    ParseError {
        file: Option<String>,
        message: String,
    },

    /// Configuration file could not be read
    IoError { path: String, message: String },

    /// Value present but unusable
    InvalidValue {
        field: String,
        value: String,
        message: String,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::ParseError { file, message } => {
                if let Some(file) = file {
                    write!(f, "Failed to parse config file '{}': {}", file, message)
                } else {
                    write!(f, "Failed to parse config: {}", message)
                }
            }
            ConfigError::IoError { path, message } => {
                write!(f, "Failed to read config file '{}': {}", path, message)
            }
            ConfigError::InvalidValue {
                field,
                value,
                message,
            } => {
                write!(
                    f,
                    "Invalid value '{}' for field '{}': {}",
                    value, field, message
                )
            }
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<ConfigError> for SocietyError {
    fn from(err: ConfigError) -> Self {
        SocietyError::Config(err)
    }
}
