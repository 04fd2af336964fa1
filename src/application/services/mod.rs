//! Per-aggregate services exposing the use cases to the HTTP layer.

pub mod donation_service;
pub mod registration_service;

pub use donation_service::DonationService;
pub use registration_service::RegistrationService;
