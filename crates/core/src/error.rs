use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// A write referenced a missing row or broke a uniqueness rule.
    #[error("Constraint violation: {0}")]
    ConstraintViolation(String),

    /// A loaded entity lacks a field or relation the caller depends on.
    #[error("Incomplete entity: {entity} with id {id} has no {missing}")]
    IncompleteEntity {
        entity: &'static str,
        id: DbId,
        missing: &'static str,
    },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
