use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Entity not found: {entity} with name \"{name}\"")]
    NotFoundByName { entity: &'static str, name: String },

    /// The guitarist exists but the gear id is not on their gear list.
    #[error("Guitarist {guitarist_id} does not own gear with id {gear_id}")]
    NotInGearList { guitarist_id: DbId, gear_id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    /// The operation is refused because other records still reference the target.
    #[error("Not allowed: {0}")]
    NotAllowed(String),
}
