//! Request-level workflows sitting between routes and the upstream client.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::news::NewsError;

pub mod search;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// The caller's page parameter is not a positive integer.
    #[error("Invalid page: {0}")]
    InvalidPage(#[from] TypeConstraintError),

    #[error(transparent)]
    Upstream(#[from] NewsError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
