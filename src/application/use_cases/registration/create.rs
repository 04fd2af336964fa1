//! Donor registration.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::entities::{NewRegistration, Registration, RegistrationStatus};
use crate::domain::errors::RegistrationError;
use crate::domain::repositories::RegistrationRepository;
use crate::utils::sanitize::sanitize_optional;

/// Input for [`CreateRegistration`].
#[derive(Debug, Clone)]
pub struct CreateRegistrationInput {
    pub donation_id: String,
    pub user_id: String,
    pub notes: Option<String>,
}

/// Registers a donor for a donation.
///
/// At most one registration may exist per `(donation_id, user_id)` pair. The
/// check is a lookup before the insert, not a storage constraint, so two
/// concurrent requests for the same pair can both pass it. The donation id is
/// not checked against the donation store.
pub struct CreateRegistration {
    repository: Arc<dyn RegistrationRepository>,
}

impl CreateRegistration {
    pub fn new(repository: Arc<dyn RegistrationRepository>) -> Self {
        Self { repository }
    }

    /// # Errors
    ///
    /// Returns [`RegistrationError::UserAlreadyRegistered`] if the user already
    /// has a registration for this donation, in any status.
    pub async fn execute(
        &self,
        input: CreateRegistrationInput,
    ) -> Result<Registration, RegistrationError> {
        if self
            .repository
            .find_by_donation_and_user(&input.donation_id, &input.user_id)
            .await?
            .is_some()
        {
            tracing::debug!(
                donation_id = %input.donation_id,
                user_id = %input.user_id,
                "Duplicate registration rejected"
            );
            return Err(RegistrationError::UserAlreadyRegistered {
                donation_id: input.donation_id,
                user_id: input.user_id,
            });
        }

        let notes = sanitize_optional(input.notes.as_deref()).filter(|n| !n.is_empty());

        let saved = self
            .repository
            .save(NewRegistration {
                donation_id: input.donation_id,
                user_id: input.user_id,
                status: RegistrationStatus::Pending,
                registered_at: Utc::now(),
                notes,
            })
            .await?;

        tracing::info!(
            id = %saved.id,
            donation_id = %saved.donation_id,
            user_id = %saved.user_id,
            "Registration created"
        );
        Ok(saved)
    }
}
