//! DTOs for registration endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::application::use_cases::registration::CreateRegistrationInput;
use crate::domain::entities::{Registration, RegistrationStatus};

/// Body of `POST /registrations`.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegistrationRequest {
    #[validate(length(min = 1, message = "donationId must not be empty"))]
    pub donation_id: String,

    #[validate(length(min = 1, message = "userId must not be empty"))]
    pub user_id: String,

    #[validate(length(max = 500))]
    pub notes: Option<String>,
}

impl From<CreateRegistrationRequest> for CreateRegistrationInput {
    fn from(req: CreateRegistrationRequest) -> Self {
        CreateRegistrationInput {
            donation_id: req.donation_id,
            user_id: req.user_id,
            notes: req.notes,
        }
    }
}

/// Body of `PATCH /registrations/{id}/status`.
#[derive(Debug, Deserialize)]
pub struct UpdateRegistrationStatusRequest {
    pub status: String,
}

/// JSON representation of a registration.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistrationResponse {
    pub id: String,
    pub donation_id: String,
    pub user_id: String,
    pub status: RegistrationStatus,
    pub registered_at: DateTime<Utc>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub canceled_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

impl From<Registration> for RegistrationResponse {
    fn from(r: Registration) -> Self {
        RegistrationResponse {
            id: r.id,
            donation_id: r.donation_id,
            user_id: r.user_id,
            status: r.status,
            registered_at: r.registered_at,
            confirmed_at: r.confirmed_at,
            completed_at: r.completed_at,
            canceled_at: r.canceled_at,
            notes: r.notes,
        }
    }
}
