use axum::debug_handler;
use loco_rs::prelude::*;
use sea_orm::IntoActiveModel;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::common::visibility::Viewer;
use crate::mailers::auth::AuthMailer;
use crate::mailers::moderation::ModerationMailer;
use crate::models::users::{self, LoginParams, RegisterParams};
use crate::views::auth::{CurrentResponse, LoginResponse};

#[derive(Debug, Deserialize, Serialize)]
pub struct ForgotParams {
    pub email: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ResetParams {
    pub token: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct ChangePasswordParams {
    pub current_password: String,
    pub new_password: String,
}

/// Creates the account, notifies the site owner, and logs the new user
/// straight in.
#[debug_handler]
async fn register(
    State(ctx): State<AppContext>,
    Json(params): Json<RegisterParams>,
) -> Result<Response> {
    let res = users::Model::create_with_password(&ctx.db, &params).await;

    let user = match res {
        Ok(user) => user,
        Err(err) => {
            info!(
                message = err.to_string(),
                user_email = &params.email,
                "could not register user",
            );
            return format::json(());
        }
    };

    AuthMailer::send_welcome(&ctx, &user).await?;
    ModerationMailer::account_created(&ctx, &user).await?;

    let jwt_secret = ctx.config.get_jwt_config()?;
    let token = user
        .generate_jwt(&jwt_secret.secret, jwt_secret.expiration)
        .or_else(|_| unauthorized("unauthorized!"))?;

    format::json(LoginResponse::new(&user, &token, false))
}

/// Verifies the password and responds with a bearer token
#[debug_handler]
async fn login(State(ctx): State<AppContext>, Json(params): Json<LoginParams>) -> Result<Response> {
    let user = users::Model::find_by_email(&ctx.db, &params.email).await?;

    if !user.verify_password(&params.password) {
        return unauthorized("unauthorized!");
    }

    let jwt_secret = ctx.config.get_jwt_config()?;
    let token = user
        .generate_jwt(&jwt_secret.secret, jwt_secret.expiration)
        .or_else(|_| unauthorized("unauthorized!"))?;

    let viewer = Viewer::for_user(&ctx.db, user.clone()).await?;
    format::json(LoginResponse::new(&user, &token, viewer.is_admin()))
}

#[debug_handler]
async fn current(auth: auth::JWT, State(ctx): State<AppContext>) -> Result<Response> {
    let user = users::Model::find_by_pid(&ctx.db, &auth.claims.pid).await?;
    let groups = user.group_names(&ctx.db).await?;
    format::json(CurrentResponse::new(&user, groups))
}

/// Replaces the password of the logged-in user after checking the current
/// one.
#[debug_handler]
async fn change_password(
    auth: auth::JWT,
    State(ctx): State<AppContext>,
    Json(params): Json<ChangePasswordParams>,
) -> Result<Response> {
    let user = users::Model::find_by_pid(&ctx.db, &auth.claims.pid).await?;
    if !user.verify_password(&params.current_password) {
        return unauthorized("unauthorized!");
    }
    let groups = user.group_names(&ctx.db).await?;
    let user = user
        .into_active_model()
        .reset_password(&ctx.db, &params.new_password)
        .await?;
    info!(user_email = &user.email, "password changed");
    format::json(CurrentResponse::new(&user, groups))
}

/// Stamps a reset token and mails it; the response never reveals whether
/// the email exists.
#[debug_handler]
async fn forgot(
    State(ctx): State<AppContext>,
    Json(params): Json<ForgotParams>,
) -> Result<Response> {
    let Ok(user) = users::Model::find_by_email(&ctx.db, &params.email).await else {
        return format::json(());
    };

    let user = user
        .into_active_model()
        .set_forgot_password_sent(&ctx.db)
        .await?;
    AuthMailer::forgot_password(&ctx, &user).await?;

    format::json(())
}

#[debug_handler]
async fn reset(State(ctx): State<AppContext>, Json(params): Json<ResetParams>) -> Result<Response> {
    let Ok(user) = users::Model::find_by_reset_token(&ctx.db, &params.token).await else {
        // do not expose whether the token was valid
        return format::json(());
    };

    user.into_active_model()
        .reset_password(&ctx.db, &params.password)
        .await?;

    format::json(())
}

pub fn routes() -> Routes {
    Routes::new()
        .prefix("/api/auth")
        .add("/register", post(register))
        .add("/login", post(login))
        .add("/current", get(current))
        .add("/change-password", post(change_password))
        .add("/forgot", post(forgot))
        .add("/reset", post(reset))
}
