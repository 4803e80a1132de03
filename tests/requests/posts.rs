use std::io::Cursor;

use axum::body::Bytes;
use loco_rs::testing::prelude::*;
use photoblog_backend::{
    app::App,
    models::{photos, posts},
    views::timeline::{PostView, TimelineResponse},
};
use sea_orm::EntityTrait;
use serial_test::serial;

use super::prepare_data;

const BOUNDARY: &str = "X-PHOTOBLOG-BOUNDARY";

fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={BOUNDARY}")
}

fn text_part(name: &str, value: &str) -> Vec<u8> {
    format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
    )
    .into_bytes()
}

fn file_part(name: &str, file_name: &str, content_type: &str, data: &[u8]) -> Vec<u8> {
    let mut part = format!(
        "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\nContent-Type: {content_type}\r\n\r\n"
    )
    .into_bytes();
    part.extend_from_slice(data);
    part.extend_from_slice(b"\r\n");
    part
}

fn close_parts(mut body: Vec<u8>) -> Bytes {
    body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
    Bytes::from(body)
}

fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    let img = image::DynamicImage::ImageRgb8(image::ImageBuffer::from_fn(
        width,
        height,
        |x, y| image::Rgb([(x % 256) as u8, (y % 256) as u8, 0]),
    ));
    let mut out = Vec::new();
    img.write_to(&mut Cursor::new(&mut out), image::ImageFormat::Png)
        .unwrap();
    out
}

#[tokio::test]
#[serial]
async fn admins_can_create_posts_with_photos() {
    request::<App, _, _>(|request, ctx| async move {
        prepare_data::seed_reference_data(&ctx).await;
        let admin = prepare_data::init_user_login(&request, &ctx).await;
        prepare_data::add_to_group(&ctx, &admin.user, "admin").await;

        let mut body = Vec::new();
        body.extend(text_part("text", "fresh from the camera"));
        body.extend(text_part("groups", "public"));
        body.extend(file_part(
            "photos",
            "beach.png",
            "image/png",
            &png_bytes(640, 480),
        ));

        let (auth_key, auth_value) = prepare_data::auth_header(&admin.token);
        let response = request
            .post("/api/posts")
            .add_header(auth_key, auth_value)
            .content_type(&multipart_content_type())
            .bytes(close_parts(body))
            .await;
        assert_eq!(response.status_code(), 200);

        let created: PostView = serde_json::from_str(&response.text()).unwrap();
        assert_eq!(created.text, "fresh from the camera");
        assert_eq!(created.groups, vec!["public".to_string()]);

        // the photo row exists and its derivative files were written
        let stored = photos::Entity::find().all(&ctx.db).await.unwrap();
        assert_eq!(stored.len(), 1);
        assert!(std::path::Path::new(&stored[0].img_path_full).exists());
        assert!(std::path::Path::new(&stored[0].img_path_medium).exists());
        assert!(std::path::Path::new(&stored[0].img_path_thumbnail).exists());

        // and the post shows up on the public timeline with its photo
        let timeline_response = request.get("/api/timeline").await;
        let timeline: TimelineResponse =
            serde_json::from_str(&timeline_response.text()).unwrap();
        assert_eq!(timeline.posts.len(), 1);
        assert_eq!(timeline.posts[0].photos.len(), 1);
    })
    .await;
}

#[tokio::test]
#[serial]
async fn non_admins_cannot_create_posts() {
    request::<App, _, _>(|request, ctx| async move {
        prepare_data::seed_reference_data(&ctx).await;
        let user = prepare_data::init_user_login(&request, &ctx).await;

        let body = close_parts(text_part("text", "should not work").to_vec());
        let (auth_key, auth_value) = prepare_data::auth_header(&user.token);
        let response = request
            .post("/api/posts")
            .add_header(auth_key, auth_value)
            .content_type(&multipart_content_type())
            .bytes(body)
            .await;
        assert_eq!(response.status_code(), 401);
    })
    .await;
}

#[tokio::test]
#[serial]
async fn broken_images_abort_the_whole_post() {
    request::<App, _, _>(|request, ctx| async move {
        prepare_data::seed_reference_data(&ctx).await;
        let admin = prepare_data::init_user_login(&request, &ctx).await;
        prepare_data::add_to_group(&ctx, &admin.user, "admin").await;

        let mut body = Vec::new();
        body.extend(text_part("text", "with a broken image"));
        body.extend(text_part("groups", "public"));
        body.extend(file_part(
            "photos",
            "fine.png",
            "image/png",
            &png_bytes(64, 64),
        ));
        body.extend(file_part(
            "photos",
            "broken.jpg",
            "image/jpeg",
            b"this is not an image",
        ));

        let (auth_key, auth_value) = prepare_data::auth_header(&admin.token);
        let response = request
            .post("/api/posts")
            .add_header(auth_key, auth_value)
            .content_type(&multipart_content_type())
            .bytes(close_parts(body))
            .await;
        assert_eq!(response.status_code(), 400);

        // nothing was persisted
        assert!(photos::Entity::find().all(&ctx.db).await.unwrap().is_empty());
        assert!(posts::Entity::find().all(&ctx.db).await.unwrap().is_empty());
    })
    .await;
}

#[tokio::test]
#[serial]
async fn admins_can_edit_posts() {
    request::<App, _, _>(|request, ctx| async move {
        prepare_data::seed_reference_data(&ctx).await;
        let post = prepare_data::create_post(&ctx, "first draft", &["public"]).await;

        let admin = prepare_data::init_user_login(&request, &ctx).await;
        prepare_data::add_to_group(&ctx, &admin.user, "admin").await;

        let (auth_key, auth_value) = prepare_data::auth_header(&admin.token);
        let response = request
            .patch(&format!("/api/posts/{}", post.id))
            .add_header(auth_key, auth_value)
            .json(&serde_json::json!({
                "text": "final version",
                "groups": ["kennis"]
            }))
            .await;
        assert_eq!(response.status_code(), 200);

        // the post is no longer on the anonymous timeline
        let timeline_response = request.get("/api/timeline").await;
        let timeline: TimelineResponse =
            serde_json::from_str(&timeline_response.text()).unwrap();
        assert!(timeline.posts.is_empty());

        let updated = posts::Entity::find_by_id(post.id)
            .one(&ctx.db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(updated.text, "final version");
    })
    .await;
}
