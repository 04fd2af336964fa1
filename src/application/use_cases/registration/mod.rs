//! Registration use cases.

mod create;
mod find;
mod update_status;

pub use create::{CreateRegistration, CreateRegistrationInput};
pub use find::{FindRegistrationsByDonation, FindRegistrationsByUser};
pub use update_status::{CancelRegistration, UpdateRegistrationStatus};
