//! Session repository: one conversation session row per user

use chrono::{DateTime, Utc};
use crate::database::DatabasePool;
use crate::models::SessionRecord;
use crate::utils::errors::StepupError;

#[derive(Clone)]
#[derive(Debug)]
pub struct SessionRepository {
    pool: DatabasePool,
}

impl SessionRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Insert or replace the user's session
    pub async fn upsert(&self, record: &SessionRecord) -> Result<(), StepupError> {
        sqlx::query(
            r#"
            INSERT INTO user_sessions (user_id, scenario, data, expires_at, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (user_id)
            DO UPDATE SET
                scenario = excluded.scenario,
                data = excluded.data,
                expires_at = excluded.expires_at,
                updated_at = excluded.updated_at
            "#
        )
        .bind(record.user_id)
        .bind(&record.scenario)
        .bind(&record.data)
        .bind(record.expires_at)
        .bind(record.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get(&self, user_id: i64) -> Result<Option<SessionRecord>, StepupError> {
        let record = sqlx::query_as::<_, SessionRecord>(
            "SELECT user_id, scenario, data, expires_at, updated_at FROM user_sessions WHERE user_id = $1"
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(record)
    }

    pub async fn delete(&self, user_id: i64) -> Result<bool, StepupError> {
        let result = sqlx::query("DELETE FROM user_sessions WHERE user_id = $1")
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove sessions that expired before `now`
    pub async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, StepupError> {
        let result = sqlx::query("DELETE FROM user_sessions WHERE expires_at < $1")
            .bind(now)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    pub async fn count(&self) -> Result<i64, StepupError> {
        super::content::count(&self.pool, "user_sessions").await
    }
}
