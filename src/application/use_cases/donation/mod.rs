//! Donation use cases.

mod create;
mod delete;
mod find;
mod update_status;

pub use create::{CreateDonation, UpdateDonation};
pub use delete::{DeleteDonation, DeleteDonationsByUserId};
pub use find::{CountDonations, FindAllDonations, FindDonationById, FindDonationsByBloodType};
pub use update_status::UpdateDonationStatus;
