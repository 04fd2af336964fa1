//! Repository trait definitions for the domain layer.
//!
//! These traits are the ports the use cases depend on. Concrete adapters live in
//! the infrastructure layer and are injected at process start.
//!
//! # Architecture
//!
//! - Traits define the contract for data operations
//! - Implementations live in `crate::infrastructure::persistence` and
//!   `crate::infrastructure::memory`
//! - Mock implementations are auto-generated via `mockall` for testing
//!
//! # Available Repositories
//!
//! - [`DonationRepository`] - Donation CRUD, pagination and bulk delete
//! - [`RegistrationRepository`] - Registration lookups and status updates

pub mod donation_repository;
pub mod registration_repository;

pub use donation_repository::DonationRepository;
pub use registration_repository::RegistrationRepository;

#[cfg(test)]
pub use donation_repository::MockDonationRepository;
#[cfg(test)]
pub use registration_repository::MockRegistrationRepository;
