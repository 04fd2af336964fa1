//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::{DonationService, RegistrationService};
use crate::domain::repositories::{DonationRepository, RegistrationRepository};

#[derive(Clone)]
pub struct AppState {
    pub donation_service: Arc<DonationService>,
    pub registration_service: Arc<RegistrationService>,
    /// Page size for `GET /donations` when the query omits `limit`.
    pub default_page_limit: u32,
    /// Name of the storage backend, reported by `/health`.
    pub storage: &'static str,
}

impl AppState {
    /// Wires both services on top of the given repositories.
    pub fn new(
        donations: Arc<dyn DonationRepository>,
        registrations: Arc<dyn RegistrationRepository>,
        default_page_limit: u32,
        storage: &'static str,
    ) -> Self {
        Self {
            donation_service: Arc::new(DonationService::new(donations)),
            registration_service: Arc::new(RegistrationService::new(registrations)),
            default_page_limit,
            storage,
        }
    }
}
