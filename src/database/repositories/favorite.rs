//! Favorites repository implementation

use chrono::Utc;
use crate::database::DatabasePool;
use crate::models::{FavoriteItem, FavoriteKind, Favorites};
use crate::utils::errors::StepupError;

#[derive(Clone)]
#[derive(Debug)]
pub struct FavoriteRepository {
    pool: DatabasePool,
}

impl FavoriteRepository {
    pub fn new(pool: DatabasePool) -> Self {
        Self { pool }
    }

    /// Flip a favorite on or off. Returns `true` when it is now present.
    pub async fn toggle(&self, user_id: i64, kind: FavoriteKind, entity_id: i64) -> Result<bool, StepupError> {
        let mut tx = self.pool.begin().await?;

        let removed = sqlx::query(
            "DELETE FROM favorites WHERE user_id = $1 AND entity_type = $2 AND entity_id = $3"
        )
        .bind(user_id)
        .bind(kind.as_str())
        .bind(entity_id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if removed == 0 {
            sqlx::query(
                "INSERT INTO favorites (user_id, entity_type, entity_id, created_at) VALUES ($1, $2, $3, $4)"
            )
            .bind(user_id)
            .bind(kind.as_str())
            .bind(entity_id)
            .bind(Utc::now())
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(removed == 0)
    }

    /// Favorite professions and courses, each ordered by title
    pub async fn list(&self, user_id: i64) -> Result<Favorites, StepupError> {
        let professions = sqlx::query_as::<_, FavoriteItem>(
            r#"
            SELECT p.id AS entity_id, p.name AS title, p.name_en AS title_en, p.name_az AS title_az,
                   p.category AS category, p.link AS link
            FROM favorites f
            JOIN professions p ON p.id = f.entity_id
            WHERE f.user_id = $1 AND f.entity_type = 'profession'
            ORDER BY p.name
            "#
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        let courses = self.list_courses(user_id).await?;

        Ok(Favorites { professions, courses })
    }

    pub async fn list_courses(&self, user_id: i64) -> Result<Vec<FavoriteItem>, StepupError> {
        let courses = sqlx::query_as::<_, FavoriteItem>(
            r#"
            SELECT c.id AS entity_id, c.title AS title, c.title_en AS title_en, c.title_az AS title_az,
                   c.category AS category, c.link AS link
            FROM favorites f
            JOIN courses c ON c.id = f.entity_id
            WHERE f.user_id = $1 AND f.entity_type = 'course'
            ORDER BY c.title
            "#
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(courses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::connection::test_pool;

    async fn seed_entities(pool: &DatabasePool) -> (i64, i64) {
        let profession: (i64,) = sqlx::query_as(
            "INSERT INTO professions (category, name, link) VALUES ('tech', 'ML Engineer', 'https://www.coursera.org/') RETURNING id"
        )
        .fetch_one(pool)
        .await
        .unwrap();
        let course: (i64,) = sqlx::query_as(
            "INSERT INTO courses (title, category, link, level) VALUES ('CS50x', 'tech', 'https://cs50.harvard.edu/x/', 'free') RETURNING id"
        )
        .fetch_one(pool)
        .await
        .unwrap();
        (profession.0, course.0)
    }

    #[tokio::test]
    async fn test_toggle_twice_restores_state() {
        let pool = test_pool().await;
        let (profession_id, _) = seed_entities(&pool).await;
        let repo = FavoriteRepository::new(pool);

        assert!(repo.list(1).await.unwrap().is_empty());
        assert!(repo.toggle(1, FavoriteKind::Profession, profession_id).await.unwrap());
        assert_eq!(repo.list(1).await.unwrap().professions.len(), 1);
        assert!(!repo.toggle(1, FavoriteKind::Profession, profession_id).await.unwrap());
        assert!(repo.list(1).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_splits_by_kind() {
        let pool = test_pool().await;
        let (profession_id, course_id) = seed_entities(&pool).await;
        let repo = FavoriteRepository::new(pool);

        repo.toggle(5, FavoriteKind::Profession, profession_id).await.unwrap();
        repo.toggle(5, FavoriteKind::Course, course_id).await.unwrap();
        repo.toggle(6, FavoriteKind::Course, course_id).await.unwrap();

        let favorites = repo.list(5).await.unwrap();
        assert_eq!(favorites.professions.len(), 1);
        assert_eq!(favorites.professions[0].title, "ML Engineer");
        assert_eq!(favorites.courses.len(), 1);
        assert_eq!(favorites.courses[0].link, "https://cs50.harvard.edu/x/");

        assert_eq!(repo.list_courses(6).await.unwrap().len(), 1);
        assert!(repo.list(7).await.unwrap().is_empty());
    }
}
