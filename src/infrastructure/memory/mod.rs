//! In-process repository implementations.
//!
//! Selected with `STORAGE_BACKEND=memory`. Data lives for the lifetime of the
//! process only. The HTTP integration tests run against these adapters.

pub mod memory_donation_repository;
pub mod memory_registration_repository;

pub use memory_donation_repository::MemoryDonationRepository;
pub use memory_registration_repository::MemoryRegistrationRepository;

use crate::domain::errors::RepositoryError;

pub(crate) fn poisoned<T>(_: std::sync::PoisonError<T>) -> RepositoryError {
    RepositoryError::Unavailable("in-memory store lock poisoned".to_string())
}
