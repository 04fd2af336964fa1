//! Create and fully replace donations.

use std::sync::Arc;

use crate::domain::entities::{Donation, NewDonation};
use crate::domain::errors::DonationError;
use crate::domain::repositories::DonationRepository;
use crate::utils::sanitize::{sanitize_content, sanitize_optional};

/// Sanitizes every free-text field of a donation payload.
///
/// `content` is required to keep some text. `description` and `name` are
/// optional but, when present, must not sanitize down to nothing either.
pub(crate) fn sanitize_donation(mut donation: NewDonation) -> Result<NewDonation, DonationError> {
    donation.content = sanitize_content(&donation.content);
    if donation.content.is_empty() {
        return Err(DonationError::InvalidContent("content"));
    }

    donation.description = sanitize_optional(donation.description.as_deref());
    if donation.description.as_deref() == Some("") {
        return Err(DonationError::InvalidContent("description"));
    }

    donation.name = sanitize_optional(donation.name.as_deref());
    if donation.name.as_deref() == Some("") {
        return Err(DonationError::InvalidContent("name"));
    }

    Ok(donation)
}

/// Stores a new donation after sanitizing its text.
pub struct CreateDonation {
    repository: Arc<dyn DonationRepository>,
}

impl CreateDonation {
    pub fn new(repository: Arc<dyn DonationRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// Returns [`DonationError::InvalidContent`] if a text field has nothing left
    /// after sanitization.
    pub async fn execute(&self, donation: NewDonation) -> Result<Donation, DonationError> {
        let donation = sanitize_donation(donation).inspect_err(|e| {
            tracing::debug!(error = %e, "Rejected donation payload");
        })?;

        let saved = self.repository.save(donation).await?;
        tracing::info!(id = %saved.id, user_id = %saved.user_id, "Donation created");

        Ok(saved)
    }
}

/// Replaces every attribute of an existing donation.
pub struct UpdateDonation {
    repository: Arc<dyn DonationRepository>,
}

impl UpdateDonation {
    pub fn new(repository: Arc<dyn DonationRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// - [`DonationError::InvalidContent`] if a text field sanitizes to nothing
    /// - [`DonationError::DonationNotFound`] if `id` is unknown, or vanished
    ///   between the lookup and the write
    pub async fn execute(&self, id: &str, donation: NewDonation) -> Result<Donation, DonationError> {
        let donation = sanitize_donation(donation)?;

        if self.repository.find_by_id(id).await?.is_none() {
            return Err(DonationError::DonationNotFound(id.to_string()));
        }

        let updated = self
            .repository
            .update(id, donation)
            .await?
            .ok_or_else(|| DonationError::DonationNotFound(id.to_string()))?;

        tracing::info!(id = %updated.id, "Donation updated");
        Ok(updated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::use_cases::donation::test_support::{donation, new_donation};
    use crate::domain::repositories::MockDonationRepository;

    #[tokio::test]
    async fn test_create_sanitizes_content() {
        let mut repo = MockDonationRepository::new();
        repo.expect_save()
            .withf(|d| d.content == "<p>Need O-</p>" && d.name.as_deref() == Some("Clinic"))
            .times(1)
            .returning(|d| Ok(d.into_donation("d1".to_string(), chrono::Utc::now(), chrono::Utc::now())));

        let use_case = CreateDonation::new(Arc::new(repo));
        let mut payload = new_donation("u1");
        payload.content = "<p onclick=\"x()\">Need O-</p><script>alert(1)</script>".to_string();
        payload.name = Some("<b>Clinic</b>".to_string());

        let created = use_case.execute(payload).await.unwrap();

        assert_eq!(created.id, "d1");
        assert!(!created.content.contains("script"));
        assert!(!created.content.contains("onclick"));
    }

    #[tokio::test]
    async fn test_create_rejects_script_only_content() {
        let mut repo = MockDonationRepository::new();
        repo.expect_save().times(0);

        let use_case = CreateDonation::new(Arc::new(repo));
        let mut payload = new_donation("u1");
        payload.content = "<script>alert('x')</script>".to_string();

        let result = use_case.execute(payload).await;

        assert!(matches!(result, Err(DonationError::InvalidContent("content"))));
    }

    #[tokio::test]
    async fn test_create_rejects_empty_optional_field() {
        let mut repo = MockDonationRepository::new();
        repo.expect_save().times(0);

        let use_case = CreateDonation::new(Arc::new(repo));
        let mut payload = new_donation("u1");
        payload.description = Some("<style>body{}</style>".to_string());

        let result = use_case.execute(payload).await;

        assert!(matches!(
            result,
            Err(DonationError::InvalidContent("description"))
        ));
    }

    #[tokio::test]
    async fn test_update_not_found() {
        let mut repo = MockDonationRepository::new();
        repo.expect_find_by_id().times(1).returning(|_| Ok(None));
        repo.expect_update().times(0);

        let use_case = UpdateDonation::new(Arc::new(repo));
        let result = use_case.execute("missing", new_donation("u1")).await;

        assert!(matches!(result, Err(DonationError::DonationNotFound(id)) if id == "missing"));
    }

    #[tokio::test]
    async fn test_update_vanished_between_lookup_and_write() {
        let mut repo = MockDonationRepository::new();
        let existing = donation("d1", "u1");
        repo.expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_update().times(1).returning(|_, _| Ok(None));

        let use_case = UpdateDonation::new(Arc::new(repo));
        let result = use_case.execute("d1", new_donation("u1")).await;

        assert!(matches!(result, Err(DonationError::DonationNotFound(_))));
    }

    #[tokio::test]
    async fn test_update_success() {
        let mut repo = MockDonationRepository::new();
        let existing = donation("d1", "u1");
        repo.expect_find_by_id()
            .times(1)
            .returning(move |_| Ok(Some(existing.clone())));
        repo.expect_update()
            .withf(|id, d| id == "d1" && d.content == "Updated text")
            .times(1)
            .returning(|id, d| {
                Ok(Some(d.into_donation(
                    id.to_string(),
                    chrono::Utc::now(),
                    chrono::Utc::now(),
                )))
            });

        let use_case = UpdateDonation::new(Arc::new(repo));
        let mut payload = new_donation("u1");
        payload.content = "  Updated text ".to_string();

        let updated = use_case.execute("d1", payload).await.unwrap();
        assert_eq!(updated.content, "Updated text");
    }
}
