//! Services module
//!
//! This module contains business logic services

pub mod catalog;
pub mod favorites;
pub mod feedback;
pub mod quiz;
pub mod user;

// Re-export commonly used services
pub use catalog::{CatalogService, CourseSelection};
pub use favorites::FavoritesService;
pub use feedback::{FeedbackService, format_feedback};
pub use quiz::{QuizService, QuizStep, QuestionView, format_results, question_header};
pub use user::UserService;

use crate::config::settings::Settings;
use crate::database::DatabaseService;
use crate::state::StateStorage;
use teloxide::Bot;

/// Service factory for creating and managing all services
#[derive(Clone)]
pub struct ServiceFactory {
    pub db: DatabaseService,
    pub storage: StateStorage,
    pub user_service: UserService,
    pub quiz_service: QuizService,
    pub catalog_service: CatalogService,
    pub favorites_service: FavoritesService,
    pub feedback_service: FeedbackService,
}

impl ServiceFactory {
    /// Create a new ServiceFactory with all services initialized
    pub fn new(bot: Bot, settings: Settings, db: DatabaseService, storage: StateStorage) -> Self {
        let user_service = UserService::new(db.clone(), settings.clone());
        let quiz_service = QuizService::new(db.clone(), storage.clone());
        let catalog_service = CatalogService::new(db.clone(), &settings);
        let favorites_service = FavoritesService::new(db.clone());
        let feedback_service = FeedbackService::new(bot, &settings, storage.clone());

        Self {
            db,
            storage,
            user_service,
            quiz_service,
            catalog_service,
            favorites_service,
            feedback_service,
        }
    }
}
