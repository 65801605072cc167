//! Notification entity module

pub mod api;
pub mod descriptor;
pub mod handlers;
pub mod model;

pub use api::{ALL_READ_MESSAGE, Acknowledgement, NotificationApi};
pub use descriptor::NotificationDescriptor;
pub use model::Notification;
