//! In-memory implementation of donation repository.

use async_trait::async_trait;
use chrono::Utc;
use std::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use super::poisoned;
use crate::domain::entities::{BloodType, Donation, DonationStatus, NewDonation};
use crate::domain::errors::RepositoryError;
use crate::domain::repositories::DonationRepository;

/// Donation store backed by a vector in insertion order.
///
/// Listings are newest first. Donations created within the same clock tick
/// keep reverse insertion order.
pub struct MemoryDonationRepository {
    donations: RwLock<Vec<Donation>>,
}

impl MemoryDonationRepository {
    pub fn new() -> Self {
        debug!("Using in-memory donation repository");
        Self {
            donations: RwLock::new(Vec::new()),
        }
    }

    fn newest_first(&self) -> Result<Vec<Donation>, RepositoryError> {
        let donations = self.donations.read().map_err(poisoned)?;
        let mut sorted: Vec<Donation> = donations.iter().rev().cloned().collect();
        sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(sorted)
    }
}

impl Default for MemoryDonationRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DonationRepository for MemoryDonationRepository {
    async fn save(&self, donation: NewDonation) -> Result<Donation, RepositoryError> {
        let now = Utc::now();
        let donation = donation.into_donation(Uuid::new_v4().to_string(), now, now);

        self.donations
            .write()
            .map_err(poisoned)?
            .push(donation.clone());

        Ok(donation)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Donation>, RepositoryError> {
        let donations = self.donations.read().map_err(poisoned)?;
        Ok(donations.iter().find(|d| d.id == id).cloned())
    }

    async fn find_by_blood_type(
        &self,
        blood_type: BloodType,
    ) -> Result<Vec<Donation>, RepositoryError> {
        Ok(self
            .newest_first()?
            .into_iter()
            .filter(|d| d.blood_type == blood_type)
            .collect())
    }

    async fn find_page(&self, skip: u64, limit: u32) -> Result<Vec<Donation>, RepositoryError> {
        let skip = usize::try_from(skip).unwrap_or(usize::MAX);

        Ok(self
            .newest_first()?
            .into_iter()
            .skip(skip)
            .take(limit as usize)
            .collect())
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        Ok(self.donations.read().map_err(poisoned)?.len() as u64)
    }

    async fn update(
        &self,
        id: &str,
        donation: NewDonation,
    ) -> Result<Option<Donation>, RepositoryError> {
        let mut donations = self.donations.write().map_err(poisoned)?;

        Ok(donations.iter_mut().find(|d| d.id == id).map(|existing| {
            let created_at = existing.created_at;
            *existing = donation.into_donation(existing.id.clone(), created_at, Utc::now());
            existing.clone()
        }))
    }

    async fn update_status(
        &self,
        id: &str,
        status: DonationStatus,
    ) -> Result<Option<Donation>, RepositoryError> {
        let mut donations = self.donations.write().map_err(poisoned)?;

        Ok(donations.iter_mut().find(|d| d.id == id).map(|existing| {
            existing.status = status;
            existing.updated_at = Utc::now();
            existing.clone()
        }))
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        self.donations
            .write()
            .map_err(poisoned)?
            .retain(|d| d.id != id);
        Ok(())
    }

    async fn delete_by_user_id(&self, user_id: &str) -> Result<u64, RepositoryError> {
        let mut donations = self.donations.write().map_err(poisoned)?;
        let before = donations.len();
        donations.retain(|d| d.user_id != user_id);
        Ok((before - donations.len()) as u64)
    }
}
