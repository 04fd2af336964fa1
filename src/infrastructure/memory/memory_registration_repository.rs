//! In-memory implementation of registration repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::poisoned;
use crate::domain::entities::{NewRegistration, Registration, RegistrationStatus};
use crate::domain::errors::RepositoryError;
use crate::domain::repositories::RegistrationRepository;

/// Registration store backed by a vector in insertion order.
pub struct MemoryRegistrationRepository {
    registrations: RwLock<Vec<Registration>>,
}

impl MemoryRegistrationRepository {
    pub fn new() -> Self {
        debug!("Using in-memory registration repository");
        Self {
            registrations: RwLock::new(Vec::new()),
        }
    }

    fn oldest_first(
        &self,
        filter: impl Fn(&Registration) -> bool,
    ) -> Result<Vec<Registration>, RepositoryError> {
        let registrations = self.registrations.read().map_err(poisoned)?;
        let mut found: Vec<Registration> =
            registrations.iter().filter(|r| filter(r)).cloned().collect();
        found.sort_by(|a, b| a.registered_at.cmp(&b.registered_at));
        Ok(found)
    }
}

impl Default for MemoryRegistrationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RegistrationRepository for MemoryRegistrationRepository {
    async fn save(&self, registration: NewRegistration) -> Result<Registration, RepositoryError> {
        let registration = registration.into_registration(Uuid::new_v4().to_string());

        self.registrations
            .write()
            .map_err(poisoned)?
            .push(registration.clone());

        Ok(registration)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Registration>, RepositoryError> {
        let registrations = self.registrations.read().map_err(poisoned)?;
        Ok(registrations.iter().find(|r| r.id == id).cloned())
    }

    async fn find_by_donation_id(
        &self,
        donation_id: &str,
    ) -> Result<Vec<Registration>, RepositoryError> {
        self.oldest_first(|r| r.donation_id == donation_id)
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Registration>, RepositoryError> {
        self.oldest_first(|r| r.user_id == user_id)
    }

    async fn find_by_donation_and_user(
        &self,
        donation_id: &str,
        user_id: &str,
    ) -> Result<Option<Registration>, RepositoryError> {
        Ok(self
            .oldest_first(|r| r.donation_id == donation_id && r.user_id == user_id)?
            .into_iter()
            .next())
    }

    async fn update_status(
        &self,
        id: &str,
        status: RegistrationStatus,
        at: DateTime<Utc>,
    ) -> Result<Option<Registration>, RepositoryError> {
        let mut registrations = self.registrations.write().map_err(poisoned)?;

        Ok(registrations.iter_mut().find(|r| r.id == id).map(|existing| {
            existing.apply_status(status, at);
            existing.clone()
        }))
    }

    async fn count_by_status(&self) -> Result<Vec<(RegistrationStatus, u64)>, RepositoryError> {
        let registrations = self.registrations.read().map_err(poisoned)?;

        Ok(RegistrationStatus::ALL
            .iter()
            .map(|status| {
                let count = registrations.iter().filter(|r| r.status == *status).count();
                (*status, count as u64)
            })
            .collect())
    }
}
