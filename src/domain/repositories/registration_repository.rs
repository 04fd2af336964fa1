//! Repository trait for registration data access.

use crate::domain::entities::{NewRegistration, Registration, RegistrationStatus};
use crate::domain::errors::RepositoryError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Repository interface for donor registrations.
///
/// There is no storage-level uniqueness on `(donation_id, user_id)`; callers
/// check with [`RegistrationRepository::find_by_donation_and_user`] before saving.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgRegistrationRepository`] - PostgreSQL implementation
/// - [`crate::infrastructure::memory::MemoryRegistrationRepository`] - In-process implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationRepository: Send + Sync {
    async fn save(&self, registration: NewRegistration) -> Result<Registration, RepositoryError>;

    async fn find_by_id(&self, id: &str) -> Result<Option<Registration>, RepositoryError>;

    /// Registrations for a donation, oldest first.
    async fn find_by_donation_id(
        &self,
        donation_id: &str,
    ) -> Result<Vec<Registration>, RepositoryError>;

    /// Registrations made by a user, oldest first.
    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Registration>, RepositoryError>;

    async fn find_by_donation_and_user(
        &self,
        donation_id: &str,
        user_id: &str,
    ) -> Result<Option<Registration>, RepositoryError>;

    /// Sets `status` and stamps the matching timestamp column with `at`.
    ///
    /// See [`Registration::apply_status`] for which column is touched.
    /// Returns `Ok(None)` if no registration matches `id`.
    async fn update_status(
        &self,
        id: &str,
        status: RegistrationStatus,
        at: DateTime<Utc>,
    ) -> Result<Option<Registration>, RepositoryError>;

    /// Number of registrations per status, in [`RegistrationStatus::ALL`] order.
    async fn count_by_status(&self) -> Result<Vec<(RegistrationStatus, u64)>, RepositoryError>;
}
