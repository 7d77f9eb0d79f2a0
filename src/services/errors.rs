use thiserror::Error;

use crate::domain::types::TypeConstraintError;

/// Generic error type used by service layer functions.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ServiceError {
    /// Requested entity does not exist or does not satisfy its state
    /// precondition.
    #[error("not found")]
    NotFound,
    /// Duplicate name on create, or delete blocked by referenced videos.
    #[error("conflict")]
    Conflict,
    /// A field constraint was violated.
    #[error("{0}")]
    Validation(String),
    /// An unexpected internal error occurred.
    #[error("internal error")]
    Internal,
}

impl From<TypeConstraintError> for ServiceError {
    fn from(value: TypeConstraintError) -> Self {
        Self::Validation(value.to_string())
    }
}

/// Convenient alias for results returned from service functions.
pub type ServiceResult<T> = Result<T, ServiceError>;
