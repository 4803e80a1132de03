use loco_rs::testing::prelude::*;
use photoblog_backend::app::App;
use serial_test::serial;

use super::prepare_data;

#[tokio::test]
#[serial]
async fn album_browsing_is_admin_only() {
    request::<App, _, _>(|request, ctx| async move {
        prepare_data::seed_reference_data(&ctx).await;

        let response = request.get("/api/albums").await;
        assert_eq!(response.status_code(), 401);

        let user = prepare_data::init_user_login(&request, &ctx).await;
        let (auth_key, auth_value) = prepare_data::auth_header(&user.token);
        let response = request
            .get("/api/albums")
            .add_header(auth_key, auth_value)
            .await;
        assert_eq!(response.status_code(), 401);
    })
    .await;
}

#[tokio::test]
#[serial]
async fn admins_can_browse_albums() {
    request::<App, _, _>(|request, ctx| async move {
        prepare_data::seed_reference_data(&ctx).await;
        prepare_data::create_photo(
            &ctx,
            ("/tmp/al_full.jpg", "/tmp/al_medium.jpg", "/tmp/al_thumb.jpg"),
            &[],
            None,
        )
        .await;

        let admin = prepare_data::init_user_login(&request, &ctx).await;
        prepare_data::add_to_group(&ctx, &admin.user, "admin").await;
        let (auth_key, auth_value) = prepare_data::auth_header(&admin.token);

        let response = request
            .get("/api/albums")
            .add_header(auth_key.clone(), auth_value.clone())
            .await;
        assert_eq!(response.status_code(), 200);
        assert!(response.text().contains("\"name\":\"uploads\""));
        assert!(response.text().contains("\"n_photos\":1"));

        let response = request
            .get("/api/albums/uploads")
            .add_header(auth_key.clone(), auth_value.clone())
            .await;
        assert_eq!(response.status_code(), 200);
        assert!(response.text().contains("thumbnail_url"));

        let response = request
            .get("/api/albums/missing")
            .add_header(auth_key, auth_value)
            .await;
        assert_eq!(response.status_code(), 404);
    })
    .await;
}
