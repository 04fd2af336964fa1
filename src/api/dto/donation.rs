//! DTOs for donation endpoints.

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use validator::Validate;

use crate::domain::entities::{BloodType, Donation, DonationStatus, Location, NewDonation};

/// Digits with optional leading `+`, spaces, dashes and parentheses.
static PHONE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\+?[0-9 ()\-]{7,20}$").expect("phone pattern compiles"));

/// Geographic point as sent by clients.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, Validate)]
pub struct LocationDto {
    #[validate(range(min = -90.0, max = 90.0, message = "Latitude must be between -90 and 90"))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0, message = "Longitude must be between -180 and 180"))]
    pub longitude: f64,
}

impl From<LocationDto> for Location {
    fn from(dto: LocationDto) -> Self {
        Location {
            latitude: dto.latitude,
            longitude: dto.longitude,
        }
    }
}

impl From<Location> for LocationDto {
    fn from(location: Location) -> Self {
        LocationDto {
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }
}

/// Body of `POST /donations` and `PUT /donations/{id}`.
///
/// Text fields are sanitized by the use case, not here.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct DonationRequest {
    /// Defaults to `PENDING` when absent.
    pub status: Option<DonationStatus>,

    pub content: String,

    pub description: Option<String>,

    pub start_date: DateTime<Utc>,

    pub finish_date: Option<DateTime<Utc>>,

    pub blood_type: BloodType,

    #[validate(nested)]
    pub location: LocationDto,

    #[validate(length(min = 1, message = "userId must not be empty"))]
    pub user_id: String,

    #[validate(length(max = 255))]
    pub name: Option<String>,

    #[validate(url(message = "Invalid image URL"))]
    pub image: Option<String>,

    #[validate(regex(path = "*PHONE_REGEX", message = "Invalid phone number"))]
    pub phone: Option<String>,
}

impl From<DonationRequest> for NewDonation {
    fn from(req: DonationRequest) -> Self {
        NewDonation {
            status: req.status.unwrap_or(DonationStatus::Pending),
            content: req.content,
            description: req.description,
            start_date: req.start_date,
            finish_date: req.finish_date,
            blood_type: req.blood_type,
            location: req.location.into(),
            user_id: req.user_id,
            name: req.name,
            image: req.image,
            phone: req.phone,
        }
    }
}

/// Body of `PUT /donations/{id}/status`.
///
/// The status is kept as text so an unknown value can be reported as a
/// validation error instead of a body rejection.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: String,
}

/// JSON representation of a donation.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DonationResponse {
    pub id: String,
    pub status: DonationStatus,
    pub content: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub finish_date: Option<DateTime<Utc>>,
    pub blood_type: BloodType,
    pub location: LocationDto,
    pub user_id: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Donation> for DonationResponse {
    fn from(d: Donation) -> Self {
        DonationResponse {
            id: d.id,
            status: d.status,
            content: d.content,
            description: d.description,
            start_date: d.start_date,
            finish_date: d.finish_date,
            blood_type: d.blood_type,
            location: d.location.into(),
            user_id: d.user_id,
            name: d.name,
            image: d.image,
            phone: d.phone,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CountResponse {
    pub count: u64,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Response of `DELETE /donations/user/{userId}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteByUserResponse {
    pub message: String,
    pub deleted_count: u64,
}
