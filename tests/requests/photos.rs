use loco_rs::testing::prelude::*;
use photoblog_backend::{app::App, common::settings::Settings, views::photos::PhotoDetailResponse};
use serial_test::serial;

use super::prepare_data;

#[tokio::test]
#[serial]
async fn photo_pages_respect_visibility() {
    request::<App, _, _>(|request, ctx| async move {
        prepare_data::seed_reference_data(&ctx).await;
        let open = prepare_data::create_photo(
            &ctx,
            ("/tmp/open_full.jpg", "/tmp/open_medium.jpg", "/tmp/open_thumb.jpg"),
            &["public"],
            None,
        )
        .await;
        let closed = prepare_data::create_photo(
            &ctx,
            ("/tmp/closed_full.jpg", "/tmp/closed_medium.jpg", "/tmp/closed_thumb.jpg"),
            &["kennis"],
            None,
        )
        .await;

        let response = request.get(&format!("/api/photos/{}", open.id)).await;
        assert_eq!(response.status_code(), 200);
        let detail: PhotoDetailResponse = serde_json::from_str(&response.text()).unwrap();
        assert_eq!(detail.id, open.id);
        assert_eq!(detail.groups, vec!["public".to_string()]);

        let response = request.get(&format!("/api/photos/{}", closed.id)).await;
        assert_eq!(response.status_code(), 401);

        let response = request.get("/api/photos/999999").await;
        assert_eq!(response.status_code(), 404);
    })
    .await;
}

#[tokio::test]
#[serial]
async fn photos_can_be_liked_and_commented() {
    request::<App, _, _>(|request, ctx| async move {
        prepare_data::seed_reference_data(&ctx).await;
        let photo = prepare_data::create_photo(
            &ctx,
            ("/tmp/l_full.jpg", "/tmp/l_medium.jpg", "/tmp/l_thumb.jpg"),
            &["public"],
            None,
        )
        .await;

        let response = request
            .post(&format!("/api/photos/{}/like", photo.id))
            .await;
        assert_eq!(response.status_code(), 200);
        assert!(response.text().contains("\"n_likes\":1"));

        let response = request
            .post(&format!("/api/photos/{}/comments", photo.id))
            .json(&serde_json::json!({
                "author": "visitor",
                "text": "lovely shot",
                "visibility": "public"
            }))
            .await;
        assert_eq!(response.status_code(), 200);

        // anonymous comments without an author name are rejected
        let response = request
            .post(&format!("/api/photos/{}/comments", photo.id))
            .json(&serde_json::json!({
                "text": "anonymous",
                "visibility": "public"
            }))
            .await;
        assert_eq!(response.status_code(), 400);

        let detail = request.get(&format!("/api/photos/{}", photo.id)).await;
        let detail: PhotoDetailResponse = serde_json::from_str(&detail.text()).unwrap();
        assert_eq!(detail.n_likes, 1);
        assert_eq!(detail.comments.len(), 1);
        assert_eq!(detail.comments[0].author, "visitor");
    })
    .await;
}

#[tokio::test]
#[serial]
async fn photo_files_are_streamed_with_their_mime_type() {
    request::<App, _, _>(|request, ctx| async move {
        prepare_data::seed_reference_data(&ctx).await;

        let settings = Settings::from_context(&ctx);
        tokio::fs::create_dir_all(&settings.photo_dir).await.unwrap();
        let medium_path = std::path::Path::new(&settings.photo_dir).join("streamed_medium.jpg");
        tokio::fs::write(&medium_path, b"jpeg-bytes").await.unwrap();

        let photo = prepare_data::create_photo(
            &ctx,
            (
                "/tmp/streamed_full.jpg",
                medium_path.to_str().unwrap(),
                "/tmp/streamed_thumb.jpg",
            ),
            &["public"],
            None,
        )
        .await;

        let response = request
            .get(&format!("/api/photos/{}/file/medium", photo.id))
            .await;
        assert_eq!(response.status_code(), 200);
        assert_eq!(response.as_bytes().as_ref(), b"jpeg-bytes");
        assert!(response
            .headers()
            .get("content-type")
            .unwrap()
            .to_str()
            .unwrap()
            .starts_with("image/jpeg"));

        let response = request
            .get(&format!("/api/photos/{}/file/bogus", photo.id))
            .await;
        assert_eq!(response.status_code(), 400);
    })
    .await;
}

#[tokio::test]
#[serial]
async fn comment_editing_is_limited_to_author_and_admin() {
    request::<App, _, _>(|request, ctx| async move {
        prepare_data::seed_reference_data(&ctx).await;
        let photo = prepare_data::create_photo(
            &ctx,
            ("/tmp/e_full.jpg", "/tmp/e_medium.jpg", "/tmp/e_thumb.jpg"),
            &["public"],
            None,
        )
        .await;

        let author = prepare_data::init_user_login(&request, &ctx).await;
        let (auth_key, auth_value) = prepare_data::auth_header(&author.token);
        let created = request
            .post(&format!("/api/photos/{}/comments", photo.id))
            .add_header(auth_key.clone(), auth_value.clone())
            .json(&serde_json::json!({
                "text": "my comment",
                "visibility": "public"
            }))
            .await;
        assert_eq!(created.status_code(), 200);
        let comment_id = serde_json::from_str::<serde_json::Value>(&created.text()).unwrap()["id"]
            .as_i64()
            .unwrap();

        // the author can edit their own comment
        let response = request
            .patch(&format!("/api/comments/{comment_id}"))
            .add_header(auth_key, auth_value)
            .json(&serde_json::json!({
                "text": "edited",
                "visibility": "loggedin"
            }))
            .await;
        assert_eq!(response.status_code(), 200);

        // another user cannot
        let stranger =
            prepare_data::init_user_login_as(&request, &ctx, "stranger", "stranger@loco.com")
                .await;
        let (auth_key, auth_value) = prepare_data::auth_header(&stranger.token);
        let response = request
            .patch(&format!("/api/comments/{comment_id}"))
            .add_header(auth_key, auth_value)
            .json(&serde_json::json!({
                "text": "hijacked",
                "visibility": "public"
            }))
            .await;
        assert_eq!(response.status_code(), 401);

        // neither can an anonymous caller
        let response = request
            .patch(&format!("/api/comments/{comment_id}"))
            .json(&serde_json::json!({
                "text": "hijacked",
                "visibility": "public"
            }))
            .await;
        assert_eq!(response.status_code(), 401);
    })
    .await;
}
