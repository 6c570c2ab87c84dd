//! Database repositories module
//!
//! This module contains all repository implementations for data access

pub mod user;
pub mod content;
pub mod quiz;
pub mod favorite;
pub mod session;

// Re-export repositories
pub use user::UserRepository;
pub use content::ContentRepository;
pub use quiz::QuizRepository;
pub use favorite::FavoriteRepository;
pub use session::SessionRepository;
