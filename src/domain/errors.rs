//! Failure kinds returned by repositories and use cases.
//!
//! Use cases never panic or raise on business failures; they return one of the
//! enums below and leave the HTTP mapping to [`crate::error::AppError`].

use thiserror::Error;

/// Errors raised by a storage adapter.
///
/// These are infrastructure failures, not business outcomes. They pass through
/// use cases unchanged and surface as 500 responses.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A stored row could not be mapped back to a domain entity.
    #[error("corrupt record {id}: {reason}")]
    Mapping { id: String, reason: String },

    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Failures of the donation use cases.
#[derive(Debug, Error)]
pub enum DonationError {
    #[error("donation {0} not found")]
    DonationNotFound(String),

    /// A text field sanitized down to nothing.
    #[error("field '{0}' has no content after sanitization")]
    InvalidContent(&'static str),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

/// Failures of the registration use cases.
#[derive(Debug, Error)]
pub enum RegistrationError {
    #[error("registration {0} not found")]
    RegistrationNotFound(String),

    #[error("user {user_id} is already registered for donation {donation_id}")]
    UserAlreadyRegistered {
        donation_id: String,
        user_id: String,
    },

    #[error("invalid registration status: {0}")]
    InvalidRegistrationStatus(String),

    #[error("cannot cancel registration {id} in status {status}")]
    CannotCancelRegistration {
        id: String,
        status: crate::domain::entities::RegistrationStatus,
    },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
