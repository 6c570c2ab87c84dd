//! Favorites service

use tracing::{info, warn};
use crate::database::DatabaseService;
use crate::models::{FavoriteItem, FavoriteKind, Favorites};
use crate::utils::errors::Result;
use crate::utils::logging::log_user_action;

#[derive(Debug, Clone)]
pub struct FavoritesService {
    db: DatabaseService,
}

impl FavoritesService {
    pub fn new(db: DatabaseService) -> Self {
        Self { db }
    }

    /// Toggle a favorite; returns `Some(true)` when it was added and `None`
    /// when the profession or course no longer exists
    pub async fn toggle(&self, user_id: i64, kind: FavoriteKind, entity_id: i64) -> Result<Option<bool>> {
        let exists = match kind {
            FavoriteKind::Profession => self.db.content.find_profession(entity_id).await?.is_some(),
            FavoriteKind::Course => self.db.content.find_course(entity_id).await?.is_some(),
        };
        if !exists {
            warn!(user_id = user_id, kind = %kind, entity_id = entity_id, "Favorite toggle for missing entity");
            return Ok(None);
        }

        let added = self.db.favorites.toggle(user_id, kind, entity_id).await?;
        log_user_action(
            user_id,
            if added { "favorite_added" } else { "favorite_removed" },
            Some(&format!("{}:{}", kind, entity_id)),
        );
        Ok(Some(added))
    }

    pub async fn list(&self, user_id: i64) -> Result<Favorites> {
        let favorites = self.db.favorites.list(user_id).await?;
        info!(
            user_id = user_id,
            professions = favorites.professions.len(),
            courses = favorites.courses.len(),
            "Favorites listed"
        );
        Ok(favorites)
    }

    pub async fn list_courses(&self, user_id: i64) -> Result<Vec<FavoriteItem>> {
        self.db.favorites.list_courses(user_id).await
    }
}
