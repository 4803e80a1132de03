use loco_rs::testing::prelude::*;
use photoblog_backend::{
    app::App,
    models::users,
    views::auth::{CurrentResponse, LoginResponse},
};
use serial_test::serial;

use super::prepare_data;

#[tokio::test]
#[serial]
async fn can_register_and_is_logged_in_right_away() {
    request::<App, _, _>(|request, ctx| async move {
        let payload = serde_json::json!({
            "name": "loco",
            "email": "register@loco.com",
            "password": "12341234",
            "want_newsletter": true
        });

        let response = request.post("/api/auth/register").json(&payload).await;
        assert_eq!(response.status_code(), 200);

        let login: LoginResponse = serde_json::from_str(&response.text()).unwrap();
        assert!(!login.token.is_empty());
        assert!(!login.is_admin);

        let saved = users::Model::find_by_email(&ctx.db, "register@loco.com")
            .await
            .unwrap();
        assert_eq!(saved.name, "loco");
        assert!(saved.want_newsletter);

        // welcome mail to the user plus the owner notification
        let deliveries = ctx.mailer.unwrap().deliveries();
        assert_eq!(deliveries.count, 2);
    })
    .await;
}

#[tokio::test]
#[serial]
async fn register_with_duplicate_email_does_not_leak() {
    request::<App, _, _>(|request, _ctx| async move {
        let payload = serde_json::json!({
            "name": "loco",
            "email": "dup@loco.com",
            "password": "12341234"
        });
        let first = request.post("/api/auth/register").json(&payload).await;
        assert_eq!(first.status_code(), 200);

        let second = request.post("/api/auth/register").json(&payload).await;
        assert_eq!(second.status_code(), 200);
        assert!(second.text().contains("null") || second.text() == "null");
    })
    .await;
}

#[tokio::test]
#[serial]
async fn login_with_wrong_password_is_rejected() {
    request::<App, _, _>(|request, ctx| async move {
        prepare_data::init_user_login(&request, &ctx).await;

        let response = request
            .post("/api/auth/login")
            .json(&serde_json::json!({
                "email": prepare_data::USER_EMAIL,
                "password": "definitely-wrong"
            }))
            .await;
        assert_eq!(response.status_code(), 401);
    })
    .await;
}

#[tokio::test]
#[serial]
async fn can_get_current_user() {
    request::<App, _, _>(|request, ctx| async move {
        let logged_in = prepare_data::init_user_login(&request, &ctx).await;

        let (auth_key, auth_value) = prepare_data::auth_header(&logged_in.token);
        let response = request
            .get("/api/auth/current")
            .add_header(auth_key, auth_value)
            .await;
        assert_eq!(response.status_code(), 200);

        let current: CurrentResponse = serde_json::from_str(&response.text()).unwrap();
        assert_eq!(current.email, prepare_data::USER_EMAIL);
        assert!(current.groups.is_empty());
    })
    .await;
}

#[tokio::test]
#[serial]
async fn current_without_token_is_rejected() {
    request::<App, _, _>(|request, _ctx| async move {
        let response = request.get("/api/auth/current").await;
        assert_eq!(response.status_code(), 401);
    })
    .await;
}

#[tokio::test]
#[serial]
async fn can_change_password() {
    request::<App, _, _>(|request, ctx| async move {
        let logged_in = prepare_data::init_user_login(&request, &ctx).await;

        let (auth_key, auth_value) = prepare_data::auth_header(&logged_in.token);
        let response = request
            .post("/api/auth/change-password")
            .add_header(auth_key, auth_value)
            .json(&serde_json::json!({
                "current_password": prepare_data::USER_PASSWORD,
                "new_password": "another-secret"
            }))
            .await;
        assert_eq!(response.status_code(), 200);

        let old = request
            .post("/api/auth/login")
            .json(&serde_json::json!({
                "email": prepare_data::USER_EMAIL,
                "password": prepare_data::USER_PASSWORD
            }))
            .await;
        assert_eq!(old.status_code(), 401);

        let new = request
            .post("/api/auth/login")
            .json(&serde_json::json!({
                "email": prepare_data::USER_EMAIL,
                "password": "another-secret"
            }))
            .await;
        assert_eq!(new.status_code(), 200);
    })
    .await;
}

#[tokio::test]
#[serial]
async fn can_reset_password_with_forgot_token() {
    request::<App, _, _>(|request, ctx| async move {
        let logged_in = prepare_data::init_user_login(&request, &ctx).await;

        let forgot = request
            .post("/api/auth/forgot")
            .json(&serde_json::json!({"email": prepare_data::USER_EMAIL}))
            .await;
        assert_eq!(forgot.status_code(), 200);

        let user = users::Model::find_by_email(&ctx.db, &logged_in.user.email)
            .await
            .unwrap();
        let token = user.reset_token.clone().expect("reset token stamped");

        let reset = request
            .post("/api/auth/reset")
            .json(&serde_json::json!({
                "token": token,
                "password": "reset-secret"
            }))
            .await;
        assert_eq!(reset.status_code(), 200);

        let login = request
            .post("/api/auth/login")
            .json(&serde_json::json!({
                "email": prepare_data::USER_EMAIL,
                "password": "reset-secret"
            }))
            .await;
        assert_eq!(login.status_code(), 200);
    })
    .await;
}
