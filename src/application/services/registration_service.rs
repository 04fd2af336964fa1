//! Registration service aggregating the registration use cases.

use std::sync::Arc;

use crate::application::use_cases::registration::{
    CancelRegistration, CreateRegistration, CreateRegistrationInput, FindRegistrationsByDonation,
    FindRegistrationsByUser, UpdateRegistrationStatus,
};
use crate::domain::entities::{Registration, RegistrationStatus};
use crate::domain::errors::RegistrationError;
use crate::domain::repositories::RegistrationRepository;

/// Entry point for every registration operation used by the HTTP layer.
pub struct RegistrationService {
    create: CreateRegistration,
    find_by_donation: FindRegistrationsByDonation,
    find_by_user: FindRegistrationsByUser,
    update_status: UpdateRegistrationStatus,
    cancel: CancelRegistration,
}

impl RegistrationService {
    pub fn new(repository: Arc<dyn RegistrationRepository>) -> Self {
        Self {
            create: CreateRegistration::new(repository.clone()),
            find_by_donation: FindRegistrationsByDonation::new(repository.clone()),
            find_by_user: FindRegistrationsByUser::new(repository.clone()),
            update_status: UpdateRegistrationStatus::new(repository.clone()),
            cancel: CancelRegistration::new(repository),
        }
    }

    pub async fn create_registration(
        &self,
        input: CreateRegistrationInput,
    ) -> Result<Registration, RegistrationError> {
        self.create.execute(input).await
    }

    pub async fn find_registrations_by_donation(
        &self,
        donation_id: &str,
    ) -> Result<Vec<Registration>, RegistrationError> {
        self.find_by_donation.execute(donation_id).await
    }

    pub async fn find_registrations_by_user(
        &self,
        user_id: &str,
    ) -> Result<Vec<Registration>, RegistrationError> {
        self.find_by_user.execute(user_id).await
    }

    pub async fn update_registration_status(
        &self,
        id: &str,
        status: RegistrationStatus,
    ) -> Result<Registration, RegistrationError> {
        self.update_status.execute(id, status).await
    }

    pub async fn cancel_registration(&self, id: &str) -> Result<Registration, RegistrationError> {
        self.cancel.execute(id).await
    }
}
