//! Server module for building the HTTP server
//!
//! `ServerBuilder` wires the document stores, identity provider and
//! configuration into a `ServerHost`, which `RestExposure` serves over axum.

pub mod builder;
pub mod entity_registry;
pub mod exposure;
pub mod host;

pub use builder::ServerBuilder;
pub use entity_registry::{EntityDescriptor, EntityRegistry};
pub use exposure::{API_PREFIX, RestExposure};
pub use host::ServerHost;
