//! Row structs and their mappers to domain entities.
//!
//! Rows keep enums as their stored text; mapping fails with
//! [`RepositoryError::Mapping`] if a column holds a value the domain does not know.

use chrono::{DateTime, Utc};
use sqlx::FromRow;

use crate::domain::entities::{Donation, Location, Registration};
use crate::domain::errors::RepositoryError;

/// Column list matching [`DonationRecord`].
pub const DONATION_COLUMNS: &str = "id, status, content, description, start_date, finish_date, \
     blood_type, latitude, longitude, user_id, name, image, phone, created_at, updated_at";

/// Column list matching [`RegistrationRecord`].
pub const REGISTRATION_COLUMNS: &str = "id, donation_id, user_id, status, registered_at, \
     confirmed_at, completed_at, canceled_at, notes";

/// A row of the `donations` table.
#[derive(Debug, Clone, FromRow)]
pub struct DonationRecord {
    pub id: String,
    pub status: String,
    pub content: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub finish_date: Option<DateTime<Utc>>,
    pub blood_type: String,
    pub latitude: f64,
    pub longitude: f64,
    pub user_id: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A row of the `registrations` table.
#[derive(Debug, Clone, FromRow)]
pub struct RegistrationRecord {
    pub id: String,
    pub donation_id: String,
    pub user_id: String,
    pub status: String,
    pub registered_at: DateTime<Utc>,
    pub confirmed_at: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub canceled_at: Option<DateTime<Utc>>,
    pub notes: Option<String>,
}

fn corrupt(id: &str, reason: String) -> RepositoryError {
    RepositoryError::Mapping {
        id: id.to_string(),
        reason,
    }
}

/// Maps a `donations` row to a [`Donation`].
pub fn donation_from_record(record: DonationRecord) -> Result<Donation, RepositoryError> {
    let status = record
        .status
        .parse()
        .map_err(|reason| corrupt(&record.id, reason))?;
    let blood_type = record
        .blood_type
        .parse()
        .map_err(|reason| corrupt(&record.id, reason))?;

    Ok(Donation {
        id: record.id,
        status,
        content: record.content,
        description: record.description,
        start_date: record.start_date,
        finish_date: record.finish_date,
        blood_type,
        location: Location {
            latitude: record.latitude,
            longitude: record.longitude,
        },
        user_id: record.user_id,
        name: record.name,
        image: record.image,
        phone: record.phone,
        created_at: record.created_at,
        updated_at: record.updated_at,
    })
}

/// Maps a `registrations` row to a [`Registration`].
pub fn registration_from_record(
    record: RegistrationRecord,
) -> Result<Registration, RepositoryError> {
    let status = record
        .status
        .parse()
        .map_err(|reason| corrupt(&record.id, reason))?;

    Ok(Registration {
        id: record.id,
        donation_id: record.donation_id,
        user_id: record.user_id,
        status,
        registered_at: record.registered_at,
        confirmed_at: record.confirmed_at,
        completed_at: record.completed_at,
        canceled_at: record.canceled_at,
        notes: record.notes,
    })
}
