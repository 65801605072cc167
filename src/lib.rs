//! # Society Hub
//!
//! Backend for a residential society: member notifications, bills, payment
//! method selection and registration checks, served as a REST API.
//!
//! ## Features
//!
//! - **Member-scoped documents**: every notification and bill belongs to one member
//! - **Ownership checks**: members can only read or change their own documents
//! - **Pluggable storage**: in-memory by default, MongoDB behind `mongodb_backend`
//! - **Form logic**: payment method state machine and registration validation
//! - **YAML configuration**: bind address, identity header, storage backend
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use society::prelude::*;
//!
//! let notifications = InMemoryNotificationService::new();
//! notifications
//!     .insert(Notification::new(member, "Water cut", "Tank cleaning at 10am", "alert"))
//!     .await?;
//!
//! ServerBuilder::new()
//!     .with_notification_service(notifications)
//!     .with_bill_service(InMemoryBillService::new())
//!     .with_custom_routes(society::dashboard::routes())
//!     .serve("127.0.0.1:5000")
//!     .await?;
//! ```

pub mod config;
pub mod core;
pub mod dashboard;
pub mod entities;
pub mod forms;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core Traits ===
    pub use crate::core::{
        auth::{AuthContext, AuthProvider, CurrentUser, HeaderAuthProvider, NoAuthProvider},
        entity::Entity,
        error::SocietyError,
        extractors::EntityId,
        service::{BillService, NotificationService},
    };

    // === Macros ===
    pub use crate::impl_owned_entity;

    // === Documents ===
    pub use crate::entities::{
        Acknowledgement, Bill, BillApi, BillType, Notification, NotificationApi,
    };

    // === Forms ===
    pub use crate::forms::{
        PaymentCallback, PaymentError, PaymentForm, PaymentMethod, RegistrationForm,
    };

    // === Storage ===
    pub use crate::storage::{InMemoryBillService, InMemoryNotificationService};
    #[cfg(feature = "mongodb_backend")]
    pub use crate::storage::{MongoBillService, MongoNotificationService};

    // === Config ===
    pub use crate::config::{AppConfig, StorageBackend};

    // === Server ===
    pub use crate::server::{EntityDescriptor, EntityRegistry, ServerBuilder};

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
