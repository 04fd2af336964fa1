//! PostgreSQL implementation of registration repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;
use uuid::Uuid;

use super::mappers::{REGISTRATION_COLUMNS, RegistrationRecord, registration_from_record};
use crate::domain::entities::{NewRegistration, Registration, RegistrationStatus};
use crate::domain::errors::RepositoryError;
use crate::domain::repositories::RegistrationRepository;

/// PostgreSQL repository for donor registrations.
pub struct PgRegistrationRepository {
    pool: Arc<PgPool>,
}

impl PgRegistrationRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    async fn fetch_where(
        &self,
        column: &str,
        value: &str,
    ) -> Result<Vec<Registration>, RepositoryError> {
        let sql = format!(
            "SELECT {REGISTRATION_COLUMNS} FROM registrations WHERE {column} = $1 \
             ORDER BY registered_at ASC, id ASC"
        );

        sqlx::query_as::<_, RegistrationRecord>(&sql)
            .bind(value)
            .fetch_all(self.pool.as_ref())
            .await?
            .into_iter()
            .map(registration_from_record)
            .collect()
    }
}

#[async_trait]
impl RegistrationRepository for PgRegistrationRepository {
    async fn save(&self, registration: NewRegistration) -> Result<Registration, RepositoryError> {
        let sql = format!(
            r#"
            INSERT INTO registrations (id, donation_id, user_id, status, registered_at, notes)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {REGISTRATION_COLUMNS}
            "#
        );

        let record = sqlx::query_as::<_, RegistrationRecord>(&sql)
            .bind(Uuid::new_v4().to_string())
            .bind(&registration.donation_id)
            .bind(&registration.user_id)
            .bind(registration.status.as_str())
            .bind(registration.registered_at)
            .bind(&registration.notes)
            .fetch_one(self.pool.as_ref())
            .await?;

        registration_from_record(record)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Registration>, RepositoryError> {
        let sql = format!("SELECT {REGISTRATION_COLUMNS} FROM registrations WHERE id = $1");

        sqlx::query_as::<_, RegistrationRecord>(&sql)
            .bind(id)
            .fetch_optional(self.pool.as_ref())
            .await?
            .map(registration_from_record)
            .transpose()
    }

    async fn find_by_donation_id(
        &self,
        donation_id: &str,
    ) -> Result<Vec<Registration>, RepositoryError> {
        self.fetch_where("donation_id", donation_id).await
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Registration>, RepositoryError> {
        self.fetch_where("user_id", user_id).await
    }

    async fn find_by_donation_and_user(
        &self,
        donation_id: &str,
        user_id: &str,
    ) -> Result<Option<Registration>, RepositoryError> {
        let sql = format!(
            "SELECT {REGISTRATION_COLUMNS} FROM registrations \
             WHERE donation_id = $1 AND user_id = $2 \
             ORDER BY registered_at ASC LIMIT 1"
        );

        sqlx::query_as::<_, RegistrationRecord>(&sql)
            .bind(donation_id)
            .bind(user_id)
            .fetch_optional(self.pool.as_ref())
            .await?
            .map(registration_from_record)
            .transpose()
    }

    async fn update_status(
        &self,
        id: &str,
        status: RegistrationStatus,
        at: DateTime<Utc>,
    ) -> Result<Option<Registration>, RepositoryError> {
        // Only the timestamp column matching the new status is stamped.
        let sql = format!(
            r#"
            UPDATE registrations SET
                status = $2,
                confirmed_at = CASE WHEN $2 = 'CONFIRMED' THEN $3::timestamptz ELSE confirmed_at END,
                completed_at = CASE WHEN $2 = 'COMPLETED' THEN $3::timestamptz ELSE completed_at END,
                canceled_at = CASE WHEN $2 = 'CANCELED' THEN $3::timestamptz ELSE canceled_at END,
                updated_at = NOW()
            WHERE id = $1
            RETURNING {REGISTRATION_COLUMNS}
            "#
        );

        sqlx::query_as::<_, RegistrationRecord>(&sql)
            .bind(id)
            .bind(status.as_str())
            .bind(at)
            .fetch_optional(self.pool.as_ref())
            .await?
            .map(registration_from_record)
            .transpose()
    }

    async fn count_by_status(&self) -> Result<Vec<(RegistrationStatus, u64)>, RepositoryError> {
        let rows: Vec<(String, i64)> =
            sqlx::query_as("SELECT status, COUNT(*) FROM registrations GROUP BY status")
                .fetch_all(self.pool.as_ref())
                .await?;

        let mut counts: Vec<(RegistrationStatus, u64)> =
            RegistrationStatus::ALL.iter().map(|s| (*s, 0)).collect();

        for (status, count) in rows {
            let status: RegistrationStatus =
                status.parse().map_err(|reason| RepositoryError::Mapping {
                    id: status.clone(),
                    reason,
                })?;
            if let Some(slot) = counts.iter_mut().find(|(s, _)| *s == status) {
                slot.1 = count.max(0) as u64;
            }
        }

        Ok(counts)
    }
}
