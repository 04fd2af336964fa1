//! Application layer implementing the business operations.
//!
//! Use cases consume repository traits through constructor injection. Services
//! group the use cases of one aggregate behind a single API for HTTP handlers.
//!
//! # Available Services
//!
//! - [`services::DonationService`] - Donation lifecycle, queries and pagination
//! - [`services::RegistrationService`] - Donor registration and its status rules

pub mod services;
pub mod use_cases;
