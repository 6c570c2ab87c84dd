//! Catalog service
//!
//! Professions and free courses per category, plus the daily tip.

use rand::seq::SliceRandom;
use tracing::debug;
use crate::config::settings::Settings;
use crate::database::DatabaseService;
use crate::models::{Category, Course, Profession, Tip};
use crate::utils::errors::Result;

/// What the courses screen should show
#[derive(Debug, Clone)]
pub enum CourseSelection {
    /// The user has not picked a category yet
    NoInterest,
    Empty(Category),
    Courses(Category, Vec<Course>),
}

#[derive(Debug, Clone)]
pub struct CatalogService {
    db: DatabaseService,
    professions_limit: i64,
    courses_limit: i64,
}

impl CatalogService {
    pub fn new(db: DatabaseService, settings: &Settings) -> Self {
        Self {
            db,
            professions_limit: i64::from(settings.content.professions_per_category),
            courses_limit: i64::from(settings.content.courses_per_category),
        }
    }

    /// Remember the category as the user's interest and list its professions
    pub async fn professions_for(&self, user_id: i64, category: Category) -> Result<Vec<Profession>> {
        self.db.users.set_interest(user_id, category).await?;
        let professions = self
            .db
            .content
            .professions_by_category(category, self.professions_limit)
            .await?;
        debug!(user_id = user_id, category = %category, count = professions.len(), "Professions listed");
        Ok(professions)
    }

    /// Free courses for the user's current interest
    pub async fn courses_for_user(&self, user_id: i64) -> Result<CourseSelection> {
        let interest = self
            .db
            .users
            .find_by_telegram_id(user_id)
            .await?
            .and_then(|user| user.interest_category());

        let category = match interest {
            Some(category) => category,
            None => return Ok(CourseSelection::NoInterest),
        };

        let courses = self
            .db
            .content
            .free_courses_by_category(category, self.courses_limit)
            .await?;
        if courses.is_empty() {
            Ok(CourseSelection::Empty(category))
        } else {
            Ok(CourseSelection::Courses(category, courses))
        }
    }

    /// A random tip, `None` when the table is empty
    pub async fn random_tip(&self) -> Result<Option<Tip>> {
        let tips = self.db.content.list_tips().await?;
        Ok(tips.choose(&mut rand::thread_rng()).cloned())
    }
}
