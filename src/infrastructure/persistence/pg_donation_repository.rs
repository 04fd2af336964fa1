//! PostgreSQL implementation of donation repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use super::mappers::{DONATION_COLUMNS, DonationRecord, donation_from_record};
use crate::domain::entities::{BloodType, Donation, DonationStatus, NewDonation};
use crate::domain::errors::RepositoryError;
use crate::domain::repositories::DonationRepository;

/// PostgreSQL repository for donation requests.
///
/// Uses SQLx prepared statements with bound parameters. Identifiers are UUID v4
/// strings generated on insert.
pub struct PgDonationRepository {
    pool: Arc<PgPool>,
}

impl PgDonationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

fn map_all(records: Vec<DonationRecord>) -> Result<Vec<Donation>, RepositoryError> {
    records.into_iter().map(donation_from_record).collect()
}

#[async_trait]
impl DonationRepository for PgDonationRepository {
    async fn save(&self, donation: NewDonation) -> Result<Donation, RepositoryError> {
        let sql = format!(
            r#"
            INSERT INTO donations (
                id, status, content, description, start_date, finish_date, blood_type,
                latitude, longitude, user_id, name, image, phone
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING {DONATION_COLUMNS}
            "#
        );

        let record = sqlx::query_as::<_, DonationRecord>(&sql)
            .bind(Uuid::new_v4().to_string())
            .bind(donation.status.as_str())
            .bind(&donation.content)
            .bind(&donation.description)
            .bind(donation.start_date)
            .bind(donation.finish_date)
            .bind(donation.blood_type.as_str())
            .bind(donation.location.latitude)
            .bind(donation.location.longitude)
            .bind(&donation.user_id)
            .bind(&donation.name)
            .bind(&donation.image)
            .bind(&donation.phone)
            .fetch_one(self.pool.as_ref())
            .await?;

        donation_from_record(record)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Donation>, RepositoryError> {
        let sql = format!("SELECT {DONATION_COLUMNS} FROM donations WHERE id = $1");

        sqlx::query_as::<_, DonationRecord>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?
            .map(donation_from_record)
            .transpose()
    }

    async fn find_by_blood_type(
        &self,
        blood_type: BloodType,
    ) -> Result<Vec<Donation>, RepositoryError> {
        let sql = format!(
            "SELECT {DONATION_COLUMNS} FROM donations WHERE blood_type = $1 \
             ORDER BY created_at DESC, id DESC"
        );

        let records = sqlx::query_as::<_, DonationRecord>(&sql)
            .bind(blood_type.as_str())
            .fetch_all(self.pool.as_ref())
            .await?;

        map_all(records)
    }

    async fn find_page(&self, skip: u64, limit: u32) -> Result<Vec<Donation>, RepositoryError> {
        let sql = format!(
            "SELECT {DONATION_COLUMNS} FROM donations \
             ORDER BY created_at DESC, id DESC \
             LIMIT $1 OFFSET $2"
        );

        let records = sqlx::query_as::<_, DonationRecord>(&sql)
            .bind(i64::from(limit))
            .bind(i64::try_from(skip).unwrap_or(i64::MAX))
            .fetch_all(self.pool.as_ref())
            .await?;

        map_all(records)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM donations")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count.max(0) as u64)
    }

    async fn update(
        &self,
        id: &str,
        donation: NewDonation,
    ) -> Result<Option<Donation>, RepositoryError> {
        let sql = format!(
            r#"
            UPDATE donations SET
                status = $2,
                content = $3,
                description = $4,
                start_date = $5,
                finish_date = $6,
                blood_type = $7,
                latitude = $8,
                longitude = $9,
                user_id = $10,
                name = $11,
                image = $12,
                phone = $13,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {DONATION_COLUMNS}
            "#
        );

        sqlx::query_as::<_, DonationRecord>(&sql)
            .bind(id)
            .bind(donation.status.as_str())
            .bind(&donation.content)
            .bind(&donation.description)
            .bind(donation.start_date)
            .bind(donation.finish_date)
            .bind(donation.blood_type.as_str())
            .bind(donation.location.latitude)
            .bind(donation.location.longitude)
            .bind(&donation.user_id)
            .bind(&donation.name)
            .bind(&donation.image)
            .bind(&donation.phone)
            .fetch_optional(self.pool.as_ref())
            .await?
            .map(donation_from_record)
            .transpose()
    }

    async fn update_status(
        &self,
        id: &str,
        status: DonationStatus,
    ) -> Result<Option<Donation>, RepositoryError> {
        let sql = format!(
            "UPDATE donations SET status = $2, updated_at = NOW() \
             WHERE id = $1 RETURNING {DONATION_COLUMNS}"
        );

        sqlx::query_as::<_, DonationRecord>(&sql)
            .bind(id)
            .bind(status.as_str())
            .fetch_optional(self.pool.as_ref())
            .await?
            .map(donation_from_record)
            .transpose()
    }

    async fn delete(&self, id: &str) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM donations WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }

    async fn delete_by_user_id(&self, user_id: &str) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM donations WHERE user_id = $1")
            .bind(user_id)
            .execute(self.pool.as_ref())
            .await?;

        Ok(result.rows_affected())
    }
}
