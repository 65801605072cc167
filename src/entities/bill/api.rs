//! Bill lookups scoped to the requesting user

use super::model::Bill;
use crate::core::entity::Entity;
use crate::core::error::SocietyError;
use crate::core::service::BillService;
use std::sync::Arc;
use uuid::Uuid;

#[derive(Clone)]
pub struct BillApi {
    service: Arc<dyn BillService>,
}

impl BillApi {
    pub fn new(service: Arc<dyn BillService>) -> Self {
        Self { service }
    }

    /// Bills owned by `user_id`, newest first
    pub async fn list_bills(&self, user_id: &Uuid) -> Result<Vec<Bill>, SocietyError> {
        self.service
            .find_by_user(user_id)
            .await
            .map_err(SocietyError::from_storage)
    }

    /// A single bill, visible to its owner only
    pub async fn get_bill(&self, bill_id: &Uuid, requester_id: &Uuid) -> Result<Bill, SocietyError> {
        let bill = self
            .service
            .get(bill_id)
            .await
            .map_err(SocietyError::from_storage)?
            .ok_or_else(|| SocietyError::not_found(Bill::resource_name_singular(), *bill_id))?;

        if !bill.is_owned_by(requester_id) {
            return Err(SocietyError::unauthorized("Not authorized"));
        }

        Ok(bill)
    }
}
