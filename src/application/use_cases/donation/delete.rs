//! Donation removal.

use std::sync::Arc;

use crate::domain::errors::DonationError;
use crate::domain::repositories::DonationRepository;

/// Deletes a single donation.
pub struct DeleteDonation {
    repository: Arc<dyn DonationRepository>,
}

impl DeleteDonation {
    pub fn new(repository: Arc<dyn DonationRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// Returns [`DonationError::DonationNotFound`] if `id` is unknown.
    pub async fn execute(&self, id: &str) -> Result<(), DonationError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(DonationError::DonationNotFound(id.to_string()));
        }

        self.repository.delete(id).await?;
        tracing::info!(id, "Donation deleted");

        Ok(())
    }
}

/// Deletes every donation posted by a user.
pub struct DeleteDonationsByUserId {
    repository: Arc<dyn DonationRepository>,
}

impl DeleteDonationsByUserId {
    pub fn new(repository: Arc<dyn DonationRepository>) -> Self {
        Self { repository }
    }

    /// Returns the number of deleted donations. Zero is a successful result.
    pub async fn execute(&self, user_id: &str) -> Result<u64, DonationError> {
        let deleted = self.repository.delete_by_user_id(user_id).await?;
        tracing::info!(user_id, deleted, "Donations deleted for user");

        Ok(deleted)
    }
}
