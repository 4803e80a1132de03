pub use super::_entities::groups::{ActiveModel, Entity, Model};
use crate::common::visibility::ADMIN_GROUP;
use crate::models::_entities::groups;
use loco_rs::model::{ModelError, ModelResult};
use sea_orm::entity::prelude::*;

pub type Groups = Entity;

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
    /// Finds a group by its unique name
    ///
    /// # Errors
    ///
    /// When no group carries the given name or a DB query error occurs
    pub async fn find_by_name<C>(db: &C, name: &str) -> ModelResult<Model>
    where
        C: ConnectionTrait,
    {
        let group = Self::find()
            .filter(groups::Column::Name.eq(name))
            .one(db)
            .await?;
        group.ok_or_else(|| ModelError::EntityNotFound)
    }

    /// Resolves every name to a group, failing when any name is unknown
    ///
    /// # Errors
    ///
    /// When one of the names does not exist or a DB query error occurs
    pub async fn find_by_names<C>(db: &C, names: &[String]) -> ModelResult<Vec<Model>>
    where
        C: ConnectionTrait,
    {
        let groups = Self::find()
            .filter(groups::Column::Name.is_in(names.iter().map(String::as_str)))
            .all(db)
            .await?;
        if groups.len() != names.len() {
            return Err(ModelError::EntityNotFound);
        }
        Ok(groups)
    }

    /// All groups, with "admin" sorted last the way group pickers present it
    ///
    /// # Errors
    ///
    /// When a DB query error occurs
    pub async fn all_admin_last(db: &DatabaseConnection) -> ModelResult<Vec<Model>> {
        let mut groups = Self::find().all(db).await?;
        groups.sort_by_key(|g| g.name == ADMIN_GROUP);
        Ok(groups)
    }
}
