//! Bill entity module

pub mod api;
pub mod descriptor;
pub mod handlers;
pub mod model;

pub use api::BillApi;
pub use descriptor::BillDescriptor;
pub use model::{Bill, BillType};
