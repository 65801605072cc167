//! Society documents: models, scoped operations, handlers and route descriptors

pub mod bill;
pub mod macros;
pub mod notification;

pub use bill::{Bill, BillApi, BillType};
pub use notification::{Acknowledgement, Notification, NotificationApi};
