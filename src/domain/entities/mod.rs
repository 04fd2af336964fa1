//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures. The only behavior they carry is the
//! registration status rules and page arithmetic.
//!
//! # Entity Types
//!
//! - [`Donation`] - A blood-need request posted by a requester
//! - [`Registration`] - A donor's intent to fulfill a donation
//! - [`Paginated`] - A page of results with metadata
//!
//! # Design Pattern
//!
//! Entities follow the "New Type" pattern with separate structs for creation:
//! - `NewDonation`, `NewRegistration` - For creating new records

pub mod donation;
pub mod pagination;
pub mod registration;

pub use donation::{BloodType, Donation, DonationStatus, Location, NewDonation};
pub use pagination::{MAX_PAGE_LIMIT, PageMetadata, PageRequest, PageRequestError, Paginated};
pub use registration::{NewRegistration, Registration, RegistrationStatus};
