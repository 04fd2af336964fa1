//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod donations;
pub mod health;
pub mod registrations;

pub use donations::{
    count_donations_handler, create_donation_handler, delete_donation_handler,
    delete_donations_by_user_handler, donations_by_blood_type_handler, get_donation_handler,
    list_donations_handler, update_donation_handler, update_donation_status_handler,
};
pub use health::health_handler;
pub use registrations::{
    cancel_registration_handler, create_registration_handler, registrations_by_donation_handler,
    registrations_by_user_handler, update_registration_status_handler,
};
