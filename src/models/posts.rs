pub use super::_entities::posts::{ActiveModel, Entity, Model};
use crate::common::visibility::Visibility;
use crate::models::_entities::{groups, photos, posts};
use loco_rs::model::ModelResult;
use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, IntoActiveModel, ModelTrait, QueryOrder};

pub type Posts = Entity;

/// Posts older than this no longer show up on the timeline.
const TIMELINE_WINDOW_WEEKS: i64 = 26;

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
    /// Recent posts, newest first
    ///
    /// # Errors
    ///
    /// When a DB query error occurs
    pub async fn find_recent(db: &DatabaseConnection) -> ModelResult<Vec<Model>> {
        let cutoff: DateTimeWithTimeZone =
            (chrono::Utc::now() - chrono::Duration::weeks(TIMELINE_WINDOW_WEEKS)).into();
        Ok(Self::find()
            .filter(posts::Column::CreatedAt.gte(cutoff))
            .order_by_desc(posts::Column::CreatedAt)
            .all(db)
            .await?)
    }
}

impl Model {
    /// Group tags controlling who may see this post
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

    /// Photos attached to this post
    ///
    /// # Errors
    ///
    /// When a DB query error occurs
    pub async fn photos(&self, db: &DatabaseConnection) -> ModelResult<Vec<photos::Model>> {
        Ok(self.find_related(photos::Entity).all(db).await?)
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
