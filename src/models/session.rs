//! Persisted conversation session row

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SessionRecord {
    pub user_id: i64,
    pub scenario: String,
    /// JSON payload of the session
    pub data: String,
    pub expires_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
