//! User model

use serde::{Deserialize, Serialize};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::str::FromStr;
use crate::models::category::{Category, CategoryScores};
use crate::utils::errors::StepupError;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: i64,
    pub telegram_id: i64,
    pub name: Option<String>,
    pub age_group: Option<String>,
    pub interest: Option<String>,
    pub test_scores: Option<String>,
    pub language_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Interest as a category; unknown stored values are treated as unset
    pub fn interest_category(&self) -> Option<Category> {
        self.interest.as_deref().and_then(|s| s.parse().ok())
    }

    pub fn age(&self) -> Option<AgeGroup> {
        self.age_group.as_deref().and_then(|s| s.parse().ok())
    }

    /// Last saved quiz scores, if any parse
    pub fn scores(&self) -> Option<CategoryScores> {
        self.test_scores
            .as_deref()
            .and_then(|raw| serde_json::from_str(raw).ok())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateUserRequest {
    pub telegram_id: i64,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Teen,
    Adult,
}

impl AgeGroup {
    pub const ALL: [AgeGroup; 2] = [AgeGroup::Teen, AgeGroup::Adult];

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Teen => "teen",
            AgeGroup::Adult => "adult",
        }
    }

    pub fn label_key(&self) -> &'static str {
        match self {
            AgeGroup::Teen => "age.teen",
            AgeGroup::Adult => "age.adult",
        }
    }
}

impl FromStr for AgeGroup {
    type Err = StepupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "teen" => Ok(AgeGroup::Teen),
            "adult" => Ok(AgeGroup::Adult),
            other => Err(StepupError::InvalidInput(format!("Unknown age group: {}", other))),
        }
    }
}
