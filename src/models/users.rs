use async_trait::async_trait;
use chrono::offset::Local;
use loco_rs::{auth::jwt, hash, prelude::*};
use sea_orm::ModelTrait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;
use validator::Validate;

pub use super::_entities::users::{self, ActiveModel, Entity, Model};
use super::_entities::groups;

pub type Users = Entity;

#[derive(Debug, Deserialize, Serialize)]
pub struct LoginParams {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct RegisterParams {
    pub email: String,
    pub password: String,
    pub name: String,
    #[serde(default)]
    pub want_newsletter: bool,
}

#[derive(Debug, Validate, Deserialize)]
pub struct Validator {
    #[validate(length(min = 2, message = "Name must be at least 2 characters long."))]
    pub name: String,
    #[validate(email(message = "invalid email"))]
    pub email: String,
}

impl Validatable for ActiveModel {
    fn validator(&self) -> Box<dyn Validate> {
        Box::new(Validator {
            name: self.name.as_ref().to_owned(),
            email: self.email.as_ref().to_owned(),
        })
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(self, _db: &C, insert: bool) -> std::result::Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        self.validate()?;
        if insert {
            let mut this = self;
            this.pid = sea_orm::ActiveValue::Set(Uuid::new_v4());
            this.api_key = sea_orm::ActiveValue::Set(format!("pb-{}", Uuid::new_v4()));
            Ok(this)
        } else {
            Ok(self)
        }
    }
}

#[async_trait]
impl Authenticable for Model {
    async fn find_by_api_key(db: &DatabaseConnection, api_key: &str) -> ModelResult<Self> {
        let user = users::Entity::find()
            .filter(users::Column::ApiKey.eq(api_key))
            .one(db)
            .await?;
        user.ok_or_else(|| ModelError::EntityNotFound)
    }

    async fn find_by_claims_key(db: &DatabaseConnection, claims_key: &str) -> ModelResult<Self> {
        Self::find_by_pid(db, claims_key).await
    }
}

impl Model {
    /// Finds a user by the provided email
    ///
    /// # Errors
    ///
    /// When could not find user by the given email or DB query error
    pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> ModelResult<Self> {
        let user = users::Entity::find()
            .filter(users::Column::Email.eq(email))
            .one(db)
            .await?;
        user.ok_or_else(|| ModelError::EntityNotFound)
    }

    /// Finds a user by the provided pid
    ///
    /// # Errors
    ///
    /// When could not find user or DB query error
    pub async fn find_by_pid(db: &DatabaseConnection, pid: &str) -> ModelResult<Self> {
        let parse_uuid = Uuid::parse_str(pid).map_err(|e| ModelError::Any(e.into()))?;
        let user = users::Entity::find()
            .filter(users::Column::Pid.eq(parse_uuid))
            .one(db)
            .await?;
        user.ok_or_else(|| ModelError::EntityNotFound)
    }

    /// Finds a user by the provided reset token
    ///
    /// # Errors
    ///
    /// When could not find user or DB query error
    pub async fn find_by_reset_token(db: &DatabaseConnection, token: &str) -> ModelResult<Self> {
        let user = users::Entity::find()
            .filter(users::Column::ResetToken.eq(token))
            .one(db)
            .await?;
        user.ok_or_else(|| ModelError::EntityNotFound)
    }

    /// Verifies whether the provided plain password matches the hashed password
    #[must_use]
    pub fn verify_password(&self, password: &str) -> bool {
        hash::verify_password(password, &self.password)
    }

    /// Creates a user with a hashed password from the registration parameters
    ///
    /// # Errors
    ///
    /// When the email is taken, hashing fails, or a DB query error occurs
    pub async fn create_with_password(
        db: &DatabaseConnection,
        params: &RegisterParams,
    ) -> ModelResult<Self> {
        let txn = db.begin().await?;

        if users::Entity::find()
            .filter(users::Column::Email.eq(&params.email))
            .one(&txn)
            .await?
            .is_some()
        {
            return Err(ModelError::EntityAlreadyExists {});
        }

        let password_hash =
            hash::hash_password(&params.password).map_err(|e| ModelError::Any(e.into()))?;
        let user = users::ActiveModel {
            email: sea_orm::ActiveValue::set(params.email.to_string()),
            password: sea_orm::ActiveValue::set(password_hash),
            name: sea_orm::ActiveValue::set(params.name.to_string()),
            want_newsletter: sea_orm::ActiveValue::set(params.want_newsletter),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(user)
    }

    /// Generates a signed JWT carrying the user pid
    ///
    /// # Errors
    ///
    /// When token generation fails
    pub fn generate_jwt(&self, secret: &str, expiration: u64) -> ModelResult<String> {
        jwt::JWT::new(secret)
            .generate_token(&expiration, self.pid.to_string(), Some(Value::Object(Map::new())))
            .map_err(|e| ModelError::Any(e.into()))
    }

    /// Names of all groups this user belongs to
    ///
    /// # Errors
    ///
    /// When a DB query error occurs
    pub async fn group_names(&self, db: &DatabaseConnection) -> ModelResult<Vec<String>> {
        let groups = self.find_related(groups::Entity).all(db).await?;
        Ok(groups.into_iter().map(|g| g.name).collect())
    }
}

impl ActiveModel {
    /// Stamps the reset token and the time it was sent
    ///
    /// # Errors
    ///
    /// When a DB query error occurs
    pub async fn set_forgot_password_sent(mut self, db: &DatabaseConnection) -> ModelResult<Model> {
        self.reset_sent_at = sea_orm::ActiveValue::set(Some(Local::now().into()));
        self.reset_token = sea_orm::ActiveValue::set(Some(Uuid::new_v4().to_string()));
        Ok(self.update(db).await?)
    }

    /// Replaces the password and clears any pending reset token
    ///
    /// # Errors
    ///
    /// When hashing fails or a DB query error occurs
    pub async fn reset_password(
        mut self,
        db: &DatabaseConnection,
        password: &str,
    ) -> ModelResult<Model> {
        self.password = sea_orm::ActiveValue::set(
            hash::hash_password(password).map_err(|e| ModelError::Any(e.into()))?,
        );
        self.reset_token = sea_orm::ActiveValue::set(None);
        self.reset_sent_at = sea_orm::ActiveValue::set(None);
        Ok(self.update(db).await?)
    }
}
