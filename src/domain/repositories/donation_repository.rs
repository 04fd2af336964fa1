//! Repository trait for donation data access.

use crate::domain::entities::{BloodType, Donation, DonationStatus, NewDonation};
use crate::domain::errors::RepositoryError;
use async_trait::async_trait;

/// Repository interface for donation requests.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgDonationRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryDonationRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_donation.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DonationRepository: Send + Sync {
    /// Stores a new donation and returns it with its assigned id and timestamps.
    async fn save(&self, donation: NewDonation) -> Result<Donation, RepositoryError>;

    /// Finds a donation by id.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Donation))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: &str) -> Result<Option<Donation>, RepositoryError>;

    /// Lists all donations needing the given blood type.
    async fn find_by_blood_type(
        &self,
        blood_type: BloodType,
    ) -> Result<Vec<Donation>, RepositoryError>;

    /// Lists donations ordered by creation time, newest first.
    ///
    /// # Arguments
    ///
    /// - `skip` - Number of donations to skip
    /// - `limit` - Maximum number of donations to return
    async fn find_page(&self, skip: u64, limit: u32) -> Result<Vec<Donation>, RepositoryError>;

    /// Counts all stored donations.
    async fn count(&self) -> Result<u64, RepositoryError>;

    /// Replaces every attribute of an existing donation.
    ///
    /// Returns `Ok(None)` if no donation matches `id`.
    async fn update(
        &self,
        id: &str,
        donation: NewDonation,
    ) -> Result<Option<Donation>, RepositoryError>;

    /// Sets the status of a donation.
    ///
    /// Returns `Ok(None)` if no donation matches `id`.
    async fn update_status(
        &self,
        id: &str,
        status: DonationStatus,
    ) -> Result<Option<Donation>, RepositoryError>;

    /// Deletes a donation. Deleting a missing id is not an error.
    async fn delete(&self, id: &str) -> Result<(), RepositoryError>;

    /// Deletes every donation posted by `user_id` and returns how many were removed.
    async fn delete_by_user_id(&self, user_id: &str) -> Result<u64, RepositoryError>;
}
