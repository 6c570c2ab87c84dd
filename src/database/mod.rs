//! Database module
//!
//! This module handles database connections and operations

pub mod connection;
pub mod repositories;
pub mod seed;
pub mod service;

// Re-export commonly used database components
pub use connection::{DatabasePool, create_pool, run_migrations, health_check};
pub use repositories::{UserRepository, ContentRepository, QuizRepository, FavoriteRepository, SessionRepository};
pub use seed::{seed_reference_data, SeedData, SeedReport};
pub use service::DatabaseService;
