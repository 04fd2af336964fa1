//! Registration entity representing a donor's intent to fulfill a donation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationStatus {
    Pending,
    Confirmed,
    Completed,
    Canceled,
}

impl RegistrationStatus {
    pub const ALL: [RegistrationStatus; 4] = [
        Self::Pending,
        Self::Confirmed,
        Self::Completed,
        Self::Canceled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Completed => "COMPLETED",
            Self::Canceled => "CANCELED",
        }
    }

    /// Only pending or confirmed registrations may be canceled.
    pub fn is_cancelable(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

impl fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RegistrationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("unknown registration status '{}'", s))
    }
}

/// A stored registration.
#[derive(Debug, Clone, PartialEq)]
pub struct Registration {
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

impl Registration {
    /// Sets `status` and stamps the timestamp field that matches it.
    ///
    /// Moving back to `Pending` leaves every timestamp untouched.
    pub fn apply_status(&mut self, status: RegistrationStatus, at: DateTime<Utc>) {
        self.status = status;
        match status {
            RegistrationStatus::Pending => {}
            RegistrationStatus::Confirmed => self.confirmed_at = Some(at),
            RegistrationStatus::Completed => self.completed_at = Some(at),
            RegistrationStatus::Canceled => self.canceled_at = Some(at),
        }
    }
}

/// Input data for creating a new registration.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRegistration {
    pub donation_id: String,
    pub user_id: String,
    pub status: RegistrationStatus,
    pub registered_at: DateTime<Utc>,
    pub notes: Option<String>,
}

impl NewRegistration {
    pub fn into_registration(self, id: String) -> Registration {
        Registration {
            id,
            donation_id: self.donation_id,
            user_id: self.user_id,
            status: self.status,
            registered_at: self.registered_at,
            confirmed_at: None,
            completed_at: None,
            canceled_at: None,
            notes: self.notes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pending() -> Registration {
        NewRegistration {
            donation_id: "d1".to_string(),
            user_id: "u1".to_string(),
            status: RegistrationStatus::Pending,
            registered_at: Utc::now(),
            notes: None,
        }
        .into_registration("r1".to_string())
    }

    #[test]
    fn test_cancelable_statuses() {
        assert!(RegistrationStatus::Pending.is_cancelable());
        assert!(RegistrationStatus::Confirmed.is_cancelable());
        assert!(!RegistrationStatus::Completed.is_cancelable());
        assert!(!RegistrationStatus::Canceled.is_cancelable());
    }

    #[test]
    fn test_apply_status_stamps_matching_field() {
        let at = Utc::now();

        let mut reg = pending();
        reg.apply_status(RegistrationStatus::Confirmed, at);
        assert_eq!(reg.status, RegistrationStatus::Confirmed);
        assert_eq!(reg.confirmed_at, Some(at));
        assert!(reg.completed_at.is_none());
        assert!(reg.canceled_at.is_none());

        let mut reg = pending();
        reg.apply_status(RegistrationStatus::Completed, at);
        assert_eq!(reg.completed_at, Some(at));
        assert!(reg.confirmed_at.is_none());

        let mut reg = pending();
        reg.apply_status(RegistrationStatus::Canceled, at);
        assert_eq!(reg.canceled_at, Some(at));
    }

    #[test]
    fn test_apply_pending_leaves_timestamps() {
        let at = Utc::now();
        let mut reg = pending();
        reg.apply_status(RegistrationStatus::Confirmed, at);
        reg.apply_status(RegistrationStatus::Pending, Utc::now());

        assert_eq!(reg.status, RegistrationStatus::Pending);
        assert_eq!(reg.confirmed_at, Some(at));
    }

    #[test]
    fn test_status_parse() {
        assert_eq!(
            "CONFIRMED".parse::<RegistrationStatus>().unwrap(),
            RegistrationStatus::Confirmed
        );
        assert!("APPROVED".parse::<RegistrationStatus>().is_err());
    }
}
