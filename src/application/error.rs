// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(DomainError),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

/// Persistence failures are the store's problem, not the caller's, so they
/// surface as infrastructure errors rather than domain ones.
impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Persistence(msg) => Self::Infrastructure(msg),
            other => Self::Domain(other),
        }
    }
}
