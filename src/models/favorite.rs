//! Favorites model

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use crate::utils::errors::StepupError;

/// Kind of entity a favorite points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FavoriteKind {
    Profession,
    Course,
}

impl FavoriteKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FavoriteKind::Profession => "profession",
            FavoriteKind::Course => "course",
        }
    }
}

impl fmt::Display for FavoriteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FavoriteKind {
    type Err = StepupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "profession" => Ok(FavoriteKind::Profession),
            "course" => Ok(FavoriteKind::Course),
            other => Err(StepupError::InvalidInput(format!("Unknown favorite kind: {}", other))),
        }
    }
}

/// A favorited entity joined with its display fields
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct FavoriteItem {
    pub entity_id: i64,
    pub title: String,
    pub title_en: Option<String>,
    pub title_az: Option<String>,
    pub category: String,
    pub link: String,
}

impl FavoriteItem {
    pub fn title_for(&self, lang: &str) -> &str {
        crate::models::content::localized(
            lang,
            &self.title,
            self.title_en.as_deref(),
            self.title_az.as_deref(),
        )
    }
}

/// Favorites split by kind
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Favorites {
    pub professions: Vec<FavoriteItem>,
    pub courses: Vec<FavoriteItem>,
}

impl Favorites {
    pub fn is_empty(&self) -> bool {
        self.professions.is_empty() && self.courses.is_empty()
    }
}
