//! PostgreSQL repository implementations.
//!
//! Concrete implementations of domain repository traits using SQLx runtime
//! queries with bound parameters. Rows are read into plain records and mapped to
//! entities in [`mappers`].
//!
//! # Repositories
//!
//! - [`PgDonationRepository`] - Donation storage, pagination and bulk delete
//! - [`PgRegistrationRepository`] - Registration storage and status updates

pub mod mappers;
pub mod pg_donation_repository;
pub mod pg_registration_repository;

pub use pg_donation_repository::PgDonationRepository;
pub use pg_registration_repository::PgRegistrationRepository;
