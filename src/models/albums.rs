pub use super::_entities::albums::{ActiveModel, Entity, Model};
use crate::models::_entities::{albums, photos};
use loco_rs::model::{ModelError, ModelResult};
use sea_orm::entity::prelude::*;
use sea_orm::ModelTrait;

pub type Albums = Entity;

/// Album every post upload lands in.
pub const UPLOADS_ALBUM: &str = "uploads";

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> std::result::Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if !insert && self.updated_at.is_unchanged() {
            let mut this = self;
            this.updated_at = sea_orm::ActiveValue::Set(chrono::Utc::now().into());
            Ok(this)
        } else {
            Ok(self)
        }
    }
}

impl Entity {
    /// Finds an album by its unique name
    ///
    /// # Errors
    ///
    /// When the album does not exist or a DB query error occurs
    pub async fn find_by_name<C>(db: &C, name: &str) -> ModelResult<Model>
    where
        C: ConnectionTrait,
    {
        let album = Self::find()
            .filter(albums::Column::Name.eq(name))
            .one(db)
            .await?;
        album.ok_or_else(|| ModelError::EntityNotFound)
    }
}

impl Model {
    /// Number of photos stored in this album
    ///
    /// # Errors
    ///
    /// When a DB query error occurs
    pub async fn n_photos(&self, db: &DatabaseConnection) -> ModelResult<u64> {
        Ok(self.find_related(photos::Entity).count(db).await?)
    }
}
