use crate::errors::repository::RepositoryError;
use std::fmt;
use thiserror::Error;

/// Stored field an update request failed to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationField {
    Cvv,
    Customer,
}

impl fmt::Display for VerificationField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VerificationField::Cvv => f.write_str("cvv"),
            VerificationField::Customer => f.write_str("customer"),
        }
    }
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("card already exists: {0}")]
    DuplicateCard(String),

    #[error("can't find card with number {0}")]
    CardNotFound(String),

    #[error("{0} is not match")]
    VerificationFailed(VerificationField),

    #[error("Validation failed: {0:?}")]
    Validation(Vec<String>),

    #[error("Repository error: {0}")]
    Repo(#[from] RepositoryError),
}
