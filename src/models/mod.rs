//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod category;
pub mod content;
pub mod favorite;
pub mod session;
pub mod user;

// Re-export commonly used models
pub use category::{Category, CategoryScores};
pub use content::{Answer, Course, Profession, Question, Tip};
pub use favorite::{FavoriteItem, FavoriteKind, Favorites};
pub use session::SessionRecord;
pub use user::{AgeGroup, CreateUserRequest, User};
