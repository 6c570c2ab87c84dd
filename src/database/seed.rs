//! Reference data seeding
//!
//! Each table is filled from the bundled `data/seed.json` only while it is
//! empty, so running the seeder on every start is safe.

use serde::Deserialize;
use tracing::info;
use crate::database::DatabasePool;
use crate::models::CategoryScores;
use crate::utils::errors::{Result, StepupError};
use crate::utils::logging::log_database_operation;

const BUNDLED_SEED: &str = include_str!("../../data/seed.json");

#[derive(Debug, Clone, Deserialize)]
pub struct SeedData {
    pub professions: Vec<SeedProfession>,
    pub courses: Vec<SeedCourse>,
    pub tips: Vec<SeedTip>,
    pub questions: Vec<SeedQuestion>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedProfession {
    pub category: String,
    pub name: String,
    pub description: String,
    pub skills: String,
    pub link: String,
    #[serde(default)]
    pub domain: String,
    pub name_en: Option<String>,
    pub description_en: Option<String>,
    pub skills_en: Option<String>,
    pub name_az: Option<String>,
    pub description_az: Option<String>,
    pub skills_az: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedCourse {
    pub title: String,
    pub category: String,
    pub link: String,
    pub level: String,
    pub title_en: Option<String>,
    pub title_az: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedTip {
    pub text: String,
    pub text_en: Option<String>,
    pub text_az: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedQuestion {
    pub order_idx: i64,
    pub text: String,
    pub text_en: Option<String>,
    pub text_az: Option<String>,
    pub answers: Vec<SeedAnswer>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeedAnswer {
    pub text: String,
    pub text_en: Option<String>,
    pub text_az: Option<String>,
    pub weights: CategoryScores,
}

impl SeedData {
    /// Data shipped with the binary
    pub fn bundled() -> Result<Self> {
        Self::from_json(BUNDLED_SEED)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let data: SeedData = serde_json::from_str(raw)?;
        data.validate()?;
        Ok(data)
    }

    fn validate(&self) -> Result<()> {
        let categories = self
            .professions
            .iter()
            .map(|p| p.category.as_str())
            .chain(self.courses.iter().map(|c| c.category.as_str()));
        for category in categories {
            category.parse::<crate::models::Category>()?;
        }

        let mut seen = std::collections::HashSet::new();
        for question in &self.questions {
            if !seen.insert(question.order_idx) {
                return Err(StepupError::InvalidInput(format!(
                    "Duplicate question order index {}",
                    question.order_idx
                )));
            }
        }

        Ok(())
    }
}

/// Rows inserted per table by one seeding run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub professions: u64,
    pub courses: u64,
    pub tips: u64,
    pub questions: u64,
    pub answers: u64,
}

/// Seed every empty reference table from `data`
pub async fn seed_reference_data(pool: &DatabasePool, data: &SeedData) -> Result<SeedReport> {
    let mut report = SeedReport::default();
    let mut tx = pool.begin().await?;

    if table_is_empty(&mut tx, "professions").await? {
        for p in &data.professions {
            sqlx::query(
                r#"
                INSERT INTO professions
                    (category, name, description, skills, link, domain,
                     name_en, description_en, skills_en, name_az, description_az, skills_az)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                "#
            )
            .bind(&p.category)
            .bind(&p.name)
            .bind(&p.description)
            .bind(&p.skills)
            .bind(&p.link)
            .bind(&p.domain)
            .bind(&p.name_en)
            .bind(&p.description_en)
            .bind(&p.skills_en)
            .bind(&p.name_az)
            .bind(&p.description_az)
            .bind(&p.skills_az)
            .execute(&mut *tx)
            .await?;
            report.professions += 1;
        }
    }

    if table_is_empty(&mut tx, "courses").await? {
        for c in &data.courses {
            sqlx::query(
                "INSERT INTO courses (title, category, link, level, title_en, title_az) VALUES ($1, $2, $3, $4, $5, $6)"
            )
            .bind(&c.title)
            .bind(&c.category)
            .bind(&c.link)
            .bind(&c.level)
            .bind(&c.title_en)
            .bind(&c.title_az)
            .execute(&mut *tx)
            .await?;
            report.courses += 1;
        }
    }

    if table_is_empty(&mut tx, "tips").await? {
        for t in &data.tips {
            sqlx::query("INSERT INTO tips (text, text_en, text_az) VALUES ($1, $2, $3)")
                .bind(&t.text)
                .bind(&t.text_en)
                .bind(&t.text_az)
                .execute(&mut *tx)
                .await?;
            report.tips += 1;
        }
    }

    if table_is_empty(&mut tx, "questions").await? {
        for q in &data.questions {
            let question_id: (i64,) = sqlx::query_as(
                "INSERT INTO questions (order_idx, text, text_en, text_az) VALUES ($1, $2, $3, $4) RETURNING id"
            )
            .bind(q.order_idx)
            .bind(&q.text)
            .bind(&q.text_en)
            .bind(&q.text_az)
            .fetch_one(&mut *tx)
            .await?;
            report.questions += 1;

            for a in &q.answers {
                sqlx::query(
                    r#"
                    INSERT INTO answers
                        (question_id, text, text_en, text_az,
                         weight_creative, weight_tech, weight_social, weight_business, weight_green)
                    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
                    "#
                )
                .bind(question_id.0)
                .bind(&a.text)
                .bind(&a.text_en)
                .bind(&a.text_az)
                .bind(a.weights.creative)
                .bind(a.weights.tech)
                .bind(a.weights.social)
                .bind(a.weights.business)
                .bind(a.weights.green)
                .execute(&mut *tx)
                .await?;
                report.answers += 1;
            }
        }
    }

    tx.commit().await?;

    log_database_operation("seed", "professions", report.professions);
    log_database_operation("seed", "courses", report.courses);
    log_database_operation("seed", "tips", report.tips);
    log_database_operation("seed", "questions", report.questions);
    info!(?report, "Reference data seeding finished");

    Ok(report)
}

async fn table_is_empty(tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>, table: &str) -> Result<bool> {
    let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(&mut **tx)
        .await?;

    Ok(count.0 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::test_pool;

    #[test]
    fn test_bundled_seed_parses() {
        let data = SeedData::bundled().unwrap();
        assert_eq!(data.professions.len(), 10);
        assert_eq!(data.courses.len(), 11);
        assert_eq!(data.tips.len(), 4);
        assert_eq!(data.questions.len(), 10);
        assert!(data.questions.iter().all(|q| q.answers.len() == 4));
    }

    #[test]
    fn test_duplicate_order_index_rejected() {
        let raw = r#"{
            "professions": [], "courses": [], "tips": [],
            "questions": [
                {"order_idx": 0, "text": "a", "answers": []},
                {"order_idx": 0, "text": "b", "answers": []}
            ]
        }"#;
        assert!(SeedData::from_json(raw).is_err());
    }

    #[tokio::test]
    async fn test_seeding_twice_keeps_row_counts() {
        let pool = test_pool().await;
        let data = SeedData::bundled().unwrap();

        let first = seed_reference_data(&pool, &data).await.unwrap();
        assert_eq!(first.questions, 10);
        assert_eq!(first.answers, 40);

        let second = seed_reference_data(&pool, &data).await.unwrap();
        assert_eq!(second, SeedReport::default());

        let answers: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM answers")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(answers.0, 40);
    }
}
