pub use super::_entities::photos::{ActiveModel, Entity, Model};
use crate::common::visibility::Visibility;
use crate::models::_entities::groups;
use loco_rs::model::ModelResult;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, IntoActiveModel, ModelTrait};

pub type Photos = Entity;

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

impl Model {
    /// Group tags controlling who may see this photo
    ///
    /// # Errors
    ///
    /// When a DB query error occurs
    pub async fn visibility(&self, db: &DatabaseConnection) -> ModelResult<Visibility> {
        let groups = self.find_related(groups::Entity).all(db).await?;
        Ok(Visibility::new(
            groups.into_iter().map(|g| g.name).collect(),
            None,
        ))
    }

    /// Increments the like counter and returns the new count
    ///
    /// # Errors
    ///
    /// When a DB query error occurs
    pub async fn bump_likes(&self, db: &DatabaseConnection) -> ModelResult<i32> {
        let mut item = self.clone().into_active_model();
        item.n_likes = ActiveValue::Set(self.n_likes + 1);
        let updated = item.update(db).await?;
        Ok(updated.n_likes)
    }
}
