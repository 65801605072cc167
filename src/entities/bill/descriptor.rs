//! Entity descriptor for Bill

use super::{
    api::BillApi,
    handlers::{BillAppState, get_bill, list_bills},
};
use crate::server::EntityDescriptor;
use axum::{Router, routing::get};

/// Descriptor for the Bill entity
pub struct BillDescriptor {
    pub api: BillApi,
}

impl BillDescriptor {
    pub fn new(api: BillApi) -> Self {
        Self { api }
    }
}

impl EntityDescriptor for BillDescriptor {
    fn entity_type(&self) -> &str {
        "bill"
    }

    fn plural(&self) -> &str {
        "bills"
    }

    fn build_routes(&self) -> Router {
        let state = BillAppState {
            api: self.api.clone(),
        };

        Router::new()
            .route("/bills", get(list_bills))
            .route("/bills/{id}", get(get_bill))
            .with_state(state)
    }
}
