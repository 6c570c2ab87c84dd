//! Database service layer
//!
//! This module provides a high-level interface to database operations

use crate::database::{ContentRepository, DatabasePool, FavoriteRepository, QuizRepository, SessionRepository, UserRepository};
use crate::models::*;
use crate::utils::errors::StepupError;

#[derive(Debug, Clone)]
pub struct DatabaseService {
    pub users: UserRepository,
    pub content: ContentRepository,
    pub quiz: QuizRepository,
    pub favorites: FavoriteRepository,
    pub sessions: SessionRepository,
    pool: DatabasePool,
}

impl DatabaseService {
    pub fn new(pool: DatabasePool) -> Self {
        Self {
            users: UserRepository::new(pool.clone()),
            content: ContentRepository::new(pool.clone()),
            quiz: QuizRepository::new(pool.clone()),
            favorites: FavoriteRepository::new(pool.clone()),
            sessions: SessionRepository::new(pool.clone()),
            pool,
        }
    }

    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    /// Register a user on `/start`, refreshing the stored name
    pub async fn initialize_user(&self, telegram_id: i64, name: String) -> Result<User, StepupError> {
        self.users.upsert(CreateUserRequest { telegram_id, name }).await
    }

    /// Clear the profile, favorites and any pending session in one transaction
    pub async fn reset_user(&self, telegram_id: i64) -> Result<(), StepupError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query(
            "UPDATE users SET age_group = NULL, interest = NULL, test_scores = NULL, updated_at = $2 WHERE telegram_id = $1"
        )
        .bind(telegram_id)
        .bind(chrono::Utc::now())
        .execute(&mut *tx)
        .await?;

        sqlx::query("DELETE FROM favorites WHERE user_id = $1")
            .bind(telegram_id)
            .execute(&mut *tx)
            .await?;

        sqlx::query("DELETE FROM user_sessions WHERE user_id = $1")
            .bind(telegram_id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }

    /// Get system statistics
    pub async fn get_system_stats(&self) -> Result<serde_json::Value, StepupError> {
        let stats = serde_json::json!({
            "users": self.users.count().await?,
            "professions": self.content.count_professions().await?,
            "courses": self.content.count_courses().await?,
            "tips": self.content.count_tips().await?,
            "questions": self.quiz.question_count().await?,
            "answers": self.quiz.answer_count().await?,
            "sessions": self.sessions.count().await?,
        });

        Ok(stats)
    }
}
