//! User repository implementation

use chrono::Utc;
use crate::database::DatabasePool;
use crate::models::user::{AgeGroup, CreateUserRequest, User};
use crate::models::{Category, CategoryScores};
use crate::utils::errors::StepupError;

const USER_COLUMNS: &str =
    "id, telegram_id, name, age_group, interest, test_scores, language_code, created_at, updated_at";

#[derive(Clone)]
#[derive(Debug)]
pub struct UserRepository {
    pool: DatabasePool,
}

impl UserRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Create the user or refresh the display name of an existing one
    pub async fn upsert(&self, request: CreateUserRequest) -> Result<User, StepupError> {
        let now = Utc::now();
        let user = sqlx::query_as::<_, User>(&format!(
            r#"
            INSERT INTO users (telegram_id, name, created_at, updated_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (telegram_id)
            DO UPDATE SET name = excluded.name, updated_at = excluded.updated_at
            RETURNING {USER_COLUMNS}
            "#
        ))
        .bind(request.telegram_id)
        .bind(request.name)
        .bind(now)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(user)
    }

    /// Find user by Telegram ID
    pub async fn find_by_telegram_id(&self, telegram_id: i64) -> Result<Option<User>, StepupError> {
        let user = sqlx::query_as::<_, User>(&format!(
            "SELECT {USER_COLUMNS} FROM users WHERE telegram_id = $1"
        ))
        .bind(telegram_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    /// Stored interface language, if the user picked one
    pub async fn get_language(&self, telegram_id: i64) -> Result<Option<String>, StepupError> {
        let row: Option<(Option<String>,)> =
            sqlx::query_as("SELECT language_code FROM users WHERE telegram_id = $1")
                .bind(telegram_id)
                .fetch_optional(&self.pool)
                .await?;

        Ok(row.and_then(|r| r.0))
    }

    pub async fn set_language(&self, telegram_id: i64, language_code: &str) -> Result<(), StepupError> {
        self.update_column(telegram_id, "language_code", Some(language_code.to_string())).await
    }

    pub async fn set_age_group(&self, telegram_id: i64, age_group: AgeGroup) -> Result<(), StepupError> {
        self.update_column(telegram_id, "age_group", Some(age_group.as_str().to_string())).await
    }

    pub async fn set_interest(&self, telegram_id: i64, category: Category) -> Result<(), StepupError> {
        self.update_column(telegram_id, "interest", Some(category.as_str().to_string())).await
    }

    pub async fn save_test_scores(&self, telegram_id: i64, scores: &CategoryScores) -> Result<(), StepupError> {
        let raw = serde_json::to_string(scores)?;
        self.update_column(telegram_id, "test_scores", Some(raw)).await
    }


    /// Count total users
    pub async fn count(&self) -> Result<i64, StepupError> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count.0)
    }

    // Column names come from the fixed set above, never from user input.
    async fn update_column(&self, telegram_id: i64, column: &str, value: Option<String>) -> Result<(), StepupError> {
        let result = sqlx::query(&format!(
            "UPDATE users SET {column} = $2, updated_at = $3 WHERE telegram_id = $1"
        ))
        .bind(telegram_id)
        .bind(value)
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StepupError::UserNotFound { user_id: telegram_id });
        }

        Ok(())
    }
}
