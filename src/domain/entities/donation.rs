//! Donation entity representing a blood-need request.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a donation request.
///
/// Transitions are unrestricted: any status may be replaced by any other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DonationStatus {
    Pending,
    Approved,
    Completed,
    Canceled,
}

impl DonationStatus {
    pub const ALL: [DonationStatus; 4] = [
        Self::Pending,
        Self::Approved,
        Self::Completed,
        Self::Canceled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Approved => "APPROVED",
            Self::Completed => "COMPLETED",
            Self::Canceled => "CANCELED",
        }
    }
}

impl fmt::Display for DonationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DonationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown donation status '{}'", s))
    }
}

/// ABO/Rh blood group required by a donation.
///
/// Serialized as `A+`, `O-`, ... The `A_POSITIVE` style spellings are accepted
/// on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BloodType {
    #[serde(rename = "A+", alias = "A_POSITIVE")]
    APositive,
    #[serde(rename = "A-", alias = "A_NEGATIVE")]
    ANegative,
    #[serde(rename = "B+", alias = "B_POSITIVE")]
    BPositive,
    #[serde(rename = "B-", alias = "B_NEGATIVE")]
    BNegative,
    #[serde(rename = "AB+", alias = "AB_POSITIVE")]
    AbPositive,
    #[serde(rename = "AB-", alias = "AB_NEGATIVE")]
    AbNegative,
    #[serde(rename = "O+", alias = "O_POSITIVE")]
    OPositive,
    #[serde(rename = "O-", alias = "O_NEGATIVE")]
    ONegative,
}

impl BloodType {
    pub const ALL: [BloodType; 8] = [
        Self::APositive,
        Self::ANegative,
        Self::BPositive,
        Self::BNegative,
        Self::AbPositive,
        Self::AbNegative,
        Self::OPositive,
        Self::ONegative,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::APositive => "A+",
            Self::ANegative => "A-",
            Self::BPositive => "B+",
            Self::BNegative => "B-",
            Self::AbPositive => "AB+",
            Self::AbNegative => "AB-",
            Self::OPositive => "O+",
            Self::ONegative => "O-",
        }
    }

    fn alias(&self) -> &'static str {
        match self {
            Self::APositive => "A_POSITIVE",
            Self::ANegative => "A_NEGATIVE",
            Self::BPositive => "B_POSITIVE",
            Self::BNegative => "B_NEGATIVE",
            Self::AbPositive => "AB_POSITIVE",
            Self::AbNegative => "AB_NEGATIVE",
            Self::OPositive => "O_POSITIVE",
            Self::ONegative => "O_NEGATIVE",
        }
    }
}

impl fmt::Display for BloodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BloodType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|bt| bt.as_str() == s || bt.alias() == s)
            .ok_or_else(|| format!("unknown blood type '{}'", s))
    }
}

/// Geographic point where the donation is needed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
}

/// A stored donation request.
#[derive(Debug, Clone, PartialEq)]
pub struct Donation {
    pub id: String,
    pub status: DonationStatus,
    pub content: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub finish_date: Option<DateTime<Utc>>,
    pub blood_type: BloodType,
    pub location: Location,
    pub user_id: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Donation attributes without the store-assigned identifier and timestamps.
///
/// Used both for creation and for full replacement of an existing donation.
#[derive(Debug, Clone, PartialEq)]
pub struct NewDonation {
    pub status: DonationStatus,
    pub content: String,
    pub description: Option<String>,
    pub start_date: DateTime<Utc>,
    pub finish_date: Option<DateTime<Utc>>,
    pub blood_type: BloodType,
    pub location: Location,
    pub user_id: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub phone: Option<String>,
}

impl NewDonation {
    /// Builds the stored entity from these attributes.
    pub fn into_donation(
        self,
        id: String,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Donation {
        Donation {
            id,
            status: self.status,
            content: self.content,
            description: self.description,
            start_date: self.start_date,
            finish_date: self.finish_date,
            blood_type: self.blood_type,
            location: self.location,
            user_id: self.user_id,
            name: self.name,
            image: self.image,
            phone: self.phone,
            created_at,
            updated_at,
        }
    }
}
