//! Axum extractors shared by the entity handlers

use crate::core::error::{RequestError, SocietyError};
use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use uuid::Uuid;

/// Extractor for the `{id}` path segment
///
/// Rejects with `400 INVALID_ENTITY_ID` when the segment is not a UUID,
/// instead of axum's plain-text path rejection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntityId(pub Uuid);

impl<S> FromRequestParts<S> for EntityId
where
    S: Send + Sync,
{
    type Rejection = SocietyError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw): Path<String> = Path::from_request_parts(parts, state)
            .await
            .map_err(|e| RequestError::InvalidEntityId { id: e.body_text() })?;

        parse_entity_id(&raw).map(EntityId)
    }
}

/// Parse an entity id, rejecting anything that is not a UUID
pub fn parse_entity_id(raw: &str) -> Result<Uuid, SocietyError> {
    Uuid::parse_str(raw).map_err(|_| {
        RequestError::InvalidEntityId {
            id: raw.to_string(),
        }
        .into()
    })
}
