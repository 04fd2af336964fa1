//! Read-only registration queries.

use std::sync::Arc;

use crate::domain::entities::Registration;
use crate::domain::errors::RegistrationError;
use crate::domain::repositories::RegistrationRepository;

pub struct FindRegistrationsByDonation {
    repository: Arc<dyn RegistrationRepository>,
}

impl FindRegistrationsByDonation {
    pub fn new(repository: Arc<dyn RegistrationRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, donation_id: &str) -> Result<Vec<Registration>, RegistrationError> {
        Ok(self.repository.find_by_donation_id(donation_id).await?)
    }
}

pub struct FindRegistrationsByUser {
    repository: Arc<dyn RegistrationRepository>,
}

impl FindRegistrationsByUser {
    pub fn new(repository: Arc<dyn RegistrationRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, user_id: &str) -> Result<Vec<Registration>, RegistrationError> {
        Ok(self.repository.find_by_user_id(user_id).await?)
    }
}
