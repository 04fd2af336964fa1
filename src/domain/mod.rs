//! Domain layer containing business entities, errors and repository ports.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`errors`] - Repository and use case failure kinds
//! - [`repositories`] - Data access trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Repository traits define contracts implemented by infrastructure layer
//! - Business rules live in use cases (see [`crate::application::use_cases`])

pub mod entities;
pub mod errors;
pub mod repositories;
