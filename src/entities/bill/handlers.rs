//! Bill HTTP handlers

use super::{api::BillApi, model::Bill};
use crate::core::auth::CurrentUser;
use crate::core::error::SocietyError;
use crate::core::extractors::EntityId;
use axum::{extract::State, response::Json};

/// Bill-specific AppState
#[derive(Clone)]
pub struct BillAppState {
    pub api: BillApi,
}

pub async fn list_bills(
    State(state): State<BillAppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<Bill>>, SocietyError> {
    state.api.list_bills(&user_id).await.map(Json)
}

pub async fn get_bill(
    State(state): State<BillAppState>,
    CurrentUser(user_id): CurrentUser,
    EntityId(id): EntityId,
) -> Result<Json<Bill>, SocietyError> {
    state.api.get_bill(&id, &user_id).await.map(Json)
}
