//! Content repository: professions, courses and tips

use crate::database::DatabasePool;
use crate::models::{Category, Course, Profession, Tip};
use crate::utils::errors::StepupError;

const PROFESSION_COLUMNS: &str = "id, category, name, description, skills, link, domain, \
    name_en, description_en, skills_en, name_az, description_az, skills_az";
const COURSE_COLUMNS: &str = "id, title, category, link, level, title_en, title_az";

#[derive(Clone)]
#[derive(Debug)]
pub struct ContentRepository {
    pool: DatabasePool,
}

impl ContentRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Professions in a category ordered by name
    pub async fn professions_by_category(&self, category: Category, limit: i64) -> Result<Vec<Profession>, StepupError> {
        let professions = sqlx::query_as::<_, Profession>(&format!(
            "SELECT {PROFESSION_COLUMNS} FROM professions WHERE category = $1 ORDER BY name LIMIT $2"
        ))
        .bind(category.as_str())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(professions)
    }

    pub async fn find_profession(&self, id: i64) -> Result<Option<Profession>, StepupError> {
        let profession = sqlx::query_as::<_, Profession>(&format!(
            "SELECT {PROFESSION_COLUMNS} FROM professions WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(profession)
    }

    /// Free courses in a category ordered by id
    pub async fn free_courses_by_category(&self, category: Category, limit: i64) -> Result<Vec<Course>, StepupError> {
        // SQLite LOWER() only folds ASCII, so the Cyrillic spelling is matched as stored.
        let courses = sqlx::query_as::<_, Course>(&format!(
            r#"
            SELECT {COURSE_COLUMNS} FROM courses
            WHERE category = $1 AND (LOWER(level) = 'free' OR level IN ('бесплатно', 'Бесплатно'))
            ORDER BY id
            LIMIT $2
            "#
        ))
        .bind(category.as_str())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(courses)
    }

    pub async fn find_course(&self, id: i64) -> Result<Option<Course>, StepupError> {
        let course = sqlx::query_as::<_, Course>(&format!(
            "SELECT {COURSE_COLUMNS} FROM courses WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(course)
    }

    pub async fn list_tips(&self) -> Result<Vec<Tip>, StepupError> {
        let tips = sqlx::query_as::<_, Tip>("SELECT id, text, text_en, text_az FROM tips ORDER BY id")
            .fetch_all(&self.pool)
            .await?;

        Ok(tips)
    }

    pub async fn count_professions(&self) -> Result<i64, StepupError> {
        count(&self.pool, "professions").await
    }

    pub async fn count_courses(&self) -> Result<i64, StepupError> {
        count(&self.pool, "courses").await
    }

    pub async fn count_tips(&self) -> Result<i64, StepupError> {
        count(&self.pool, "tips").await
    }
}

pub(crate) async fn count(pool: &DatabasePool, table: &str) -> Result<i64, StepupError> {
    let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await?;

    Ok(count.0)
}
