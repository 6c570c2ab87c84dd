//! Database test helpers
//!
//! Every test gets its own in-memory SQLite database with migrations applied
//! and, optionally, the bundled reference data.

use Stepup::config::DatabaseConfig;
use Stepup::database::{create_pool, run_migrations, seed_reference_data, DatabasePool, SeedData, SeedReport};

pub struct TestDatabase {
    pub pool: DatabasePool,
}

impl TestDatabase {
    /// Empty schema, no reference rows
    pub async fn new() -> Self {
        let config = DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            max_connections: 1,
            min_connections: 1,
            seed_on_startup: false,
        };
        let pool = create_pool(&config).await.expect("Failed to create test pool");
        run_migrations(&pool).await.expect("Failed to run migrations");

        Self { pool }
    }

    /// Schema plus the bundled reference data
    pub async fn seeded() -> Self {
        let db = Self::new().await;
        db.seed().await;
        db
    }

    pub async fn seed(&self) -> SeedReport {
        let data = SeedData::bundled().expect("Bundled seed data is valid");
        seed_reference_data(&self.pool, &data)
            .await
            .expect("Failed to seed reference data")
    }

    /// Count rows in a table
    pub async fn count_records(&self, table: &str) -> i64 {
        sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {}", table))
            .fetch_one(&self.pool)
            .await
            .expect("Failed to count records")
    }
}
