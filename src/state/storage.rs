//! State storage implementation
//!
//! This module persists conversation state in the `user_sessions` table,
//! handling serialization, expiration and periodic cleanup.

use std::time::Duration;
use tracing::{debug, warn, error, info};
use crate::config::validation::MAX_SESSION_TTL_SECONDS;
use crate::database::SessionRepository;
use crate::models::SessionRecord;
use crate::utils::errors::Result;
use crate::utils::logging::log_session_replaced;
use super::context::{ConversationContext, Session};

/// SQLite-backed state storage
#[derive(Debug, Clone)]
pub struct StateStorage {
    sessions: SessionRepository,
    ttl: chrono::Duration,
}

impl StateStorage {
    /// Create a new state storage instance; the TTL is capped at
    /// `MAX_SESSION_TTL_SECONDS`
    pub fn new(sessions: SessionRepository, ttl_seconds: u64) -> Self {
        let ttl_seconds = ttl_seconds.min(MAX_SESSION_TTL_SECONDS);
        Self {
            sessions,
            ttl: chrono::Duration::seconds(ttl_seconds as i64),
        }
    }

    pub fn ttl(&self) -> chrono::Duration {
        self.ttl
    }

    /// Save conversation context
    pub async fn save_context(&self, context: &ConversationContext) -> Result<()> {
        let data = serde_json::to_string(&context.session)?;
        debug!(user_id = context.user_id, scenario = context.session.name(),
               data_length = data.len(), "Saving context");

        let record = SessionRecord {
            user_id: context.user_id,
            scenario: context.session.name().to_string(),
            data,
            expires_at: context.expires_at,
            updated_at: context.updated_at,
        };

        self.sessions.upsert(&record).await
    }

    /// Replace whatever session the user had with `session`
    pub async fn start_session(&self, user_id: i64, session: Session) -> Result<ConversationContext> {
        if let Some(previous) = self.load_context(user_id).await? {
            if previous.session.name() != session.name() {
                log_session_replaced(user_id, previous.session.name(), session.name());
            }
        }

        let context = ConversationContext::new(user_id, session, self.ttl);
        self.save_context(&context).await?;
        Ok(context)
    }

    /// Load conversation context; expired or unreadable rows are removed
    pub async fn load_context(&self, user_id: i64) -> Result<Option<ConversationContext>> {
        let record = match self.sessions.get(user_id).await? {
            Some(record) => record,
            None => {
                debug!(user_id = user_id, "No context found");
                return Ok(None);
            }
        };

        let session: Session = match serde_json::from_str(&record.data) {
            Ok(session) => session,
            Err(e) => {
                error!(user_id = user_id, error = %e, "Failed to deserialize context, dropping it");
                self.sessions.delete(user_id).await?;
                return Ok(None);
            }
        };

        let context = ConversationContext {
            user_id: record.user_id,
            session,
            expires_at: record.expires_at,
            updated_at: record.updated_at,
        };

        if context.is_expired() {
            warn!(user_id = user_id, expires_at = %context.expires_at, "Context has expired, removing");
            self.sessions.delete(user_id).await?;
            return Ok(None);
        }

        Ok(Some(context))
    }

    /// Delete conversation context
    pub async fn delete_context(&self, user_id: i64) -> Result<()> {
        if self.sessions.delete(user_id).await? {
            debug!("Deleted context for user {}", user_id);
        } else {
            debug!("No context to delete for user {}", user_id);
        }

        Ok(())
    }

    /// Check if a live context exists for a user
    pub async fn context_exists(&self, user_id: i64) -> Result<bool> {
        Ok(self.load_context(user_id).await?.is_some())
    }

    /// Clean up expired contexts
    pub async fn cleanup_expired_contexts(&self) -> Result<u64> {
        let cleaned_count = self.sessions.delete_expired(chrono::Utc::now()).await?;

        if cleaned_count > 0 {
            info!("Cleaned up {} expired contexts", cleaned_count);
        }

        Ok(cleaned_count)
    }
}

/// State storage manager with automatic cleanup
#[derive(Debug)]
pub struct StateStorageManager {
    storage: StateStorage,
    cleanup_interval: Duration,
    cleanup_handle: Option<tokio::task::JoinHandle<()>>,
}

impl StateStorageManager {
    pub fn new(storage: StateStorage, cleanup_interval: Duration) -> Self {
        Self {
            storage,
            cleanup_interval,
            cleanup_handle: None,
        }
    }

    /// Start automatic cleanup task
    pub fn start_cleanup(&mut self) {
        if self.cleanup_handle.is_some() {
            warn!("Cleanup task is already running");
            return;
        }

        let storage = self.storage.clone();
        let interval = self.cleanup_interval;

        let handle = tokio::spawn(async move {
            let mut cleanup_interval = tokio::time::interval(interval);

            loop {
                cleanup_interval.tick().await;

                if let Err(e) = storage.cleanup_expired_contexts().await {
                    error!("Cleanup task failed: {}", e);
                }
            }
        });

        self.cleanup_handle = Some(handle);
        info!("Started automatic cleanup task with interval {:?}", self.cleanup_interval);
    }

    /// Stop automatic cleanup task
    pub fn stop_cleanup(&mut self) {
        if let Some(handle) = self.cleanup_handle.take() {
            handle.abort();
            info!("Stopped automatic cleanup task");
        }
    }
}

impl Drop for StateStorageManager {
    fn drop(&mut self) {
        self.stop_cleanup();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::test_pool;
    use crate::state::context::QuizProgress;
    use crate::models::CategoryScores;

    async fn create_test_storage(ttl_seconds: u64) -> StateStorage {
        StateStorage::new(SessionRepository::new(test_pool().await), ttl_seconds)
    }

    #[tokio::test]
    async fn test_context_save_load() {
        let storage = create_test_storage(3600).await;

        let mut context = ConversationContext::new(123, Session::Quiz(QuizProgress::default()), storage.ttl());
        if let Session::Quiz(progress) = &mut context.session {
            progress.question_index = 4;
            progress.scores = CategoryScores::new(2, 0, 1, 0, 0);
        }
        storage.save_context(&context).await.unwrap();

        let loaded = storage.load_context(123).await.unwrap().unwrap();
        assert_eq!(
            loaded.quiz_progress(),
            Some(&QuizProgress { question_index: 4, scores: CategoryScores::new(2, 0, 1, 0, 0) })
        );

        storage.delete_context(123).await.unwrap();
        assert!(!storage.context_exists(123).await.unwrap());
    }

    #[tokio::test]
    async fn test_context_expiry() {
        let storage = create_test_storage(3600).await;

        let mut context = ConversationContext::new(456, Session::AwaitingFeedback, storage.ttl());
        context.expires_at = chrono::Utc::now() - chrono::Duration::hours(1);
        storage.save_context(&context).await.unwrap();

        assert!(storage.load_context(456).await.unwrap().is_none());
        assert!(!storage.context_exists(456).await.unwrap());
    }

    #[tokio::test]
    async fn test_start_session_replaces_other_kind() {
        let storage = create_test_storage(3600).await;

        storage.start_session(1, Session::Quiz(QuizProgress::default())).await.unwrap();
        storage.start_session(1, Session::AwaitingFeedback).await.unwrap();

        let loaded = storage.load_context(1).await.unwrap().unwrap();
        assert!(loaded.is_awaiting_feedback());
    }

    #[tokio::test]
    async fn test_cleanup_expired_contexts() {
        let storage = create_test_storage(3600).await;

        let mut stale = ConversationContext::new(1, Session::AwaitingFeedback, storage.ttl());
        stale.expires_at = chrono::Utc::now() - chrono::Duration::minutes(1);
        storage.save_context(&stale).await.unwrap();
        storage.start_session(2, Session::AwaitingFeedback).await.unwrap();

        assert_eq!(storage.cleanup_expired_contexts().await.unwrap(), 1);
        assert!(storage.context_exists(2).await.unwrap());
    }

    #[tokio::test]
    async fn test_oversized_ttl_is_capped() {
        let storage = create_test_storage(u64::MAX).await;
        assert_eq!(storage.ttl(), chrono::Duration::seconds(MAX_SESSION_TTL_SECONDS as i64));

        storage.start_session(9, Session::AwaitingFeedback).await.unwrap();
        assert!(storage.context_exists(9).await.unwrap());
    }

    #[tokio::test]
    async fn test_manager_start_stop() {
        let storage = create_test_storage(60).await;
        let mut manager = StateStorageManager::new(storage, Duration::from_secs(60));

        manager.start_cleanup();
        assert!(manager.cleanup_handle.is_some());
        manager.stop_cleanup();
        assert!(!manager.cleanup_handle.is_some());
    }
}
