//! Core module containing the traits and types every other module builds on

pub mod auth;
pub mod entity;
pub mod error;
pub mod extractors;
pub mod service;

pub use auth::{AuthContext, AuthProvider, CurrentUser, HeaderAuthProvider, NoAuthProvider};
pub use entity::Entity;
pub use error::SocietyError;
pub use extractors::EntityId;
pub use service::{BillService, NotificationService};
