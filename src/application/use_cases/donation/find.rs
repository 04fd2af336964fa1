//! Read-only donation queries.

use std::sync::Arc;

use crate::domain::entities::{BloodType, Donation, PageRequest, Paginated};
use crate::domain::errors::DonationError;
use crate::domain::repositories::DonationRepository;

/// Looks up a single donation.
pub struct FindDonationById {
    repository: Arc<dyn DonationRepository>,
}

impl FindDonationById {
    pub fn new(repository: Arc<dyn DonationRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// Returns [`DonationError::DonationNotFound`] if `id` is unknown.
    pub async fn execute(&self, id: &str) -> Result<Donation, DonationError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DonationError::DonationNotFound(id.to_string()))
    }
}

/// Lists donations that need a given blood type.
pub struct FindDonationsByBloodType {
    repository: Arc<dyn DonationRepository>,
}

impl FindDonationsByBloodType {
    pub fn new(repository: Arc<dyn DonationRepository>) -> Self {
        Self { repository }
    }

    /// An empty list is a successful result.
    pub async fn execute(&self, blood_type: BloodType) -> Result<Vec<Donation>, DonationError> {
        Ok(self.repository.find_by_blood_type(blood_type).await?)
    }
}

/// Pages through all donations, newest first.
pub struct FindAllDonations {
    repository: Arc<dyn DonationRepository>,
}

impl FindAllDonations {
    pub fn new(repository: Arc<dyn DonationRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, request: PageRequest) -> Result<Paginated<Donation>, DonationError> {
        let data = self
            .repository
            .find_page(request.skip(), request.limit())
            .await?;
        let total = self.repository.count().await?;

        Ok(Paginated::new(data, request, total))
    }
}

/// Counts all donations.
pub struct CountDonations {
    repository: Arc<dyn DonationRepository>,
}

impl CountDonations {
    pub fn new(repository: Arc<dyn DonationRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> Result<u64, DonationError> {
        Ok(self.repository.count().await?)
    }
}
