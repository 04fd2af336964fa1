//! Donation service aggregating the donation use cases.

use std::sync::Arc;

use crate::application::use_cases::donation::{
    CountDonations, CreateDonation, DeleteDonation, DeleteDonationsByUserId, FindAllDonations,
    FindDonationById, FindDonationsByBloodType, UpdateDonation, UpdateDonationStatus,
};
use crate::domain::entities::{
    BloodType, Donation, DonationStatus, NewDonation, PageRequest, Paginated,
};
use crate::domain::errors::DonationError;
use crate::domain::repositories::DonationRepository;

/// Entry point for every donation operation used by the HTTP layer.
///
/// Holds one instance of each use case, all sharing the same repository.
pub struct DonationService {
    create: CreateDonation,
    update: UpdateDonation,
    update_status: UpdateDonationStatus,
    find_by_id: FindDonationById,
    find_by_blood_type: FindDonationsByBloodType,
    find_all: FindAllDonations,
    count: CountDonations,
    delete: DeleteDonation,
    delete_by_user: DeleteDonationsByUserId,
}

impl DonationService {
    /// Wires every donation use case to `repository`.
    pub fn new(repository: Arc<dyn DonationRepository>) -> Self {
        Self {
            create: CreateDonation::new(repository.clone()),
            update: UpdateDonation::new(repository.clone()),
            update_status: UpdateDonationStatus::new(repository.clone()),
            find_by_id: FindDonationById::new(repository.clone()),
            find_by_blood_type: FindDonationsByBloodType::new(repository.clone()),
            find_all: FindAllDonations::new(repository.clone()),
            count: CountDonations::new(repository.clone()),
            delete: DeleteDonation::new(repository.clone()),
            delete_by_user: DeleteDonationsByUserId::new(repository),
        }
    }

    pub async fn create_donation(&self, donation: NewDonation) -> Result<Donation, DonationError> {
        self.create.execute(donation).await
    }

    pub async fn update_donation(
        &self,
        id: &str,
        donation: NewDonation,
    ) -> Result<Donation, DonationError> {
        self.update.execute(id, donation).await
    }

    pub async fn update_status(
        &self,
        id: &str,
        status: DonationStatus,
    ) -> Result<Donation, DonationError> {
        self.update_status.execute(id, status).await
    }

    pub async fn find_donation_by_id(&self, id: &str) -> Result<Donation, DonationError> {
        self.find_by_id.execute(id).await
    }

    pub async fn find_donations_by_blood_type(
        &self,
        blood_type: BloodType,
    ) -> Result<Vec<Donation>, DonationError> {
        self.find_by_blood_type.execute(blood_type).await
    }

    pub async fn find_all_donations(
        &self,
        request: PageRequest,
    ) -> Result<Paginated<Donation>, DonationError> {
        self.find_all.execute(request).await
    }

    pub async fn count_donations(&self) -> Result<u64, DonationError> {
        self.count.execute().await
    }

    pub async fn delete_donation(&self, id: &str) -> Result<(), DonationError> {
        self.delete.execute(id).await
    }

    pub async fn delete_donations_by_user_id(&self, user_id: &str) -> Result<u64, DonationError> {
        self.delete_by_user.execute(user_id).await
    }
}
