mod repository;
mod service;
mod validate;

pub use self::repository::RepositoryError;
pub use self::service::{ServiceError, VerificationField};
pub use self::validate::format_validation_errors;
