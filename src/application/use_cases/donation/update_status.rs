//! Donation status changes.

use std::sync::Arc;

use crate::domain::entities::{Donation, DonationStatus};
use crate::domain::errors::DonationError;
use crate::domain::repositories::DonationRepository;

/// Sets the status of a donation.
///
/// Any status may replace any other; no transition graph is enforced.
pub struct UpdateDonationStatus {
    repository: Arc<dyn DonationRepository>,
}

impl UpdateDonationStatus {
    pub fn new(repository: Arc<dyn DonationRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// Returns [`DonationError::DonationNotFound`] if `id` is unknown, or if the
    /// donation disappeared between the lookup and the write.
    pub async fn execute(&self, id: &str, status: DonationStatus) -> Result<Donation, DonationError> {
        let Some(current) = self.repository.find_by_id(id).await? else {
            return Err(DonationError::DonationNotFound(id.to_string()));
        };

        let updated = self
            .repository
            .update_status(id, status)
            .await?
            .ok_or_else(|| DonationError::DonationNotFound(id.to_string()))?;

        tracing::info!(id, from = %current.status, to = %updated.status, "Donation status updated");
        Ok(updated)
    }
}
