//! Registration status changes and cancellation.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{Registration, RegistrationStatus};
use crate::domain::errors::RegistrationError;
use crate::domain::repositories::RegistrationRepository;

/// Sets the status of a registration and stamps the matching timestamp.
///
/// No transition graph is enforced: `PENDING -> COMPLETED` is accepted.
pub struct UpdateRegistrationStatus {
    repository: Arc<dyn RegistrationRepository>,
}

impl UpdateRegistrationStatus {
    pub fn new(repository: Arc<dyn RegistrationRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// Returns [`RegistrationError::RegistrationNotFound`] if `id` is unknown or
    /// vanished between the lookup and the write.
    pub async fn execute(
        &self,
        id: &str,
        status: RegistrationStatus,
    ) -> Result<Registration, RegistrationError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(RegistrationError::RegistrationNotFound(id.to_string()));
        }

        let updated = self
            .repository
            .update_status(id, status, Utc::now())
            .await?
            .ok_or_else(|| RegistrationError::RegistrationNotFound(id.to_string()))?;

        tracing::info!(id, status = %updated.status, "Registration status updated");
        Ok(updated)
    }
}

/// Cancels a pending or confirmed registration.
pub struct CancelRegistration {
    repository: Arc<dyn RegistrationRepository>,
}

impl CancelRegistration {
    pub fn new(repository: Arc<dyn RegistrationRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - [`RegistrationError::RegistrationNotFound`] if `id` is unknown
    /// - [`RegistrationError::CannotCancelRegistration`] unless the current
    ///   status is `PENDING` or `CONFIRMED`
    pub async fn execute(&self, id: &str) -> Result<Registration, RegistrationError> {
        let Some(current) = self.repository.find_by_id(id).await? else {
            return Err(RegistrationError::RegistrationNotFound(id.to_string()));
        };

        if !current.status.is_cancelable() {
            tracing::warn!(id, status = %current.status, "Cancellation rejected");
            return Err(RegistrationError::CannotCancelRegistration {
                id: id.to_string(),
                status: current.status,
            });
        }

        let canceled = self
            .repository
            .update_status(id, RegistrationStatus::Canceled, Utc::now())
            .await?
            .ok_or_else(|| RegistrationError::RegistrationNotFound(id.to_string()))?;

        tracing::info!(id, "Registration canceled");
        Ok(canceled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::registration::test_support::registration;
    use crate::domain::repositories::MockRegistrationRepository;

    fn repo_with(status: RegistrationStatus) -> MockRegistrationRepository {
        let mut repo = MockRegistrationRepository::new();
        repo.expect_find_by_id()
            .returning(move |id| Ok(Some(registration(id, status))));
        repo
    }

    fn apply_on_update(repo: &mut MockRegistrationRepository, initial: RegistrationStatus) {
        repo.expect_update_status()
            .times(1)
            .returning(move |id, status, at| {
                let mut reg = registration(id, initial);
                reg.apply_status(status, at);
                Ok(Some(reg))
            });
    }

    #[tokio::test]
    async fn test_update_status_not_found() {
        let mut repo = MockRegistrationRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));
        repo.expect_update_status().times(0);

        let result = UpdateRegistrationStatus::new(Arc::new(repo))
            .execute("missing", RegistrationStatus::Confirmed)
            .await;

        assert!(matches!(
            result,
            Err(RegistrationError::RegistrationNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_update_status_allows_skipping_confirmation() {
        let mut repo = repo_with(RegistrationStatus::Pending);
        apply_on_update(&mut repo, RegistrationStatus::Pending);

        let updated = UpdateRegistrationStatus::new(Arc::new(repo))
            .execute("r1", RegistrationStatus::Completed)
            .await
            .unwrap();

        assert_eq!(updated.status, RegistrationStatus::Completed);
        assert!(updated.completed_at.is_some());
        assert!(updated.confirmed_at.is_none());
    }

    #[tokio::test]
    async fn test_update_status_confirm_sets_confirmed_at() {
        let mut repo = repo_with(RegistrationStatus::Pending);
        apply_on_update(&mut repo, RegistrationStatus::Pending);

        let updated = UpdateRegistrationStatus::new(Arc::new(repo))
            .execute("r1", RegistrationStatus::Confirmed)
            .await
            .unwrap();

        assert!(updated.confirmed_at.is_some());
    }

    #[tokio::test]
    async fn test_update_status_write_finds_nothing() {
        let mut repo = repo_with(RegistrationStatus::Pending);
        repo.expect_update_status()
            .times(1)
            .returning(|_, _, _| Ok(None));

        let result = UpdateRegistrationStatus::new(Arc::new(repo))
            .execute("r1", RegistrationStatus::Confirmed)
            .await;

        assert!(matches!(
            result,
            Err(RegistrationError::RegistrationNotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_cancel_pending_sets_canceled_at() {
        let mut repo = repo_with(RegistrationStatus::Pending);
        apply_on_update(&mut repo, RegistrationStatus::Pending);

        let canceled = CancelRegistration::new(Arc::new(repo))
            .execute("r1")
            .await
            .unwrap();

        assert_eq!(canceled.status, RegistrationStatus::Canceled);
        assert!(canceled.canceled_at.is_some());
    }

    #[tokio::test]
    async fn test_cancel_confirmed_is_allowed() {
        let mut repo = repo_with(RegistrationStatus::Confirmed);
        apply_on_update(&mut repo, RegistrationStatus::Confirmed);

        let canceled = CancelRegistration::new(Arc::new(repo))
            .execute("r1")
            .await
            .unwrap();

        assert_eq!(canceled.status, RegistrationStatus::Canceled);
    }

    #[tokio::test]
    async fn test_cancel_completed_is_rejected() {
        let mut repo = repo_with(RegistrationStatus::Completed);
        repo.expect_update_status().times(0);

        let result = CancelRegistration::new(Arc::new(repo)).execute("r1").await;

        assert!(matches!(
            result,
            Err(RegistrationError::CannotCancelRegistration {
                status: RegistrationStatus::Completed,
                ..
            })
        ));
    }

    #[tokio::test]
    async fn test_cancel_already_canceled_is_rejected() {
        let mut repo = repo_with(RegistrationStatus::Canceled);
        repo.expect_update_status().times(0);

        let result = CancelRegistration::new(Arc::new(repo)).execute("r1").await;

        assert!(matches!(
            result,
            Err(RegistrationError::CannotCancelRegistration { .. })
        ));
    }

    #[tokio::test]
    async fn test_cancel_missing() {
        let mut repo = MockRegistrationRepository::new();
        repo.expect_find_by_id().returning(|_| Ok(None));

        let result = CancelRegistration::new(Arc::new(repo)).execute("x").await;

        assert!(matches!(
            result,
            Err(RegistrationError::RegistrationNotFound(_))
        ));
    }
}
