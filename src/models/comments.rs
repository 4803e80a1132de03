pub use super::_entities::comments::{ActiveModel, Entity, Model};
use crate::common::visibility::Visibility;
use crate::models::_entities::groups;
use loco_rs::model::ModelResult;
use sea_orm::entity::prelude::*;
use sea_orm::ModelTrait;

pub type Comments = Entity;

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
    /// Group tags controlling who may see this comment; the comment's own
    /// author always passes the check through the owner reference.
    ///
    /// # Errors
    ///
    /// When a DB query error occurs
    pub async fn visibility(&self, db: &DatabaseConnection) -> ModelResult<Visibility> {
        let groups = self.find_related(groups::Entity).all(db).await?;
        Ok(Visibility::new(
            groups.into_iter().map(|g| g.name).collect(),
            self.user_id,
        ))
    }

    /// Names of the groups tagged on this comment
    ///
    /// # Errors
    ///
    /// When a DB query error occurs
    pub async fn group_names(&self, db: &DatabaseConnection) -> ModelResult<Vec<String>> {
        let groups = self.find_related(groups::Entity).all(db).await?;
        Ok(groups.into_iter().map(|g| g.name).collect())
    }
}
