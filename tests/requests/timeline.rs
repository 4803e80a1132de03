use loco_rs::testing::prelude::*;
use photoblog_backend::{app::App, views::timeline::TimelineResponse};
use serial_test::serial;

use super::prepare_data;

#[tokio::test]
#[serial]
async fn anonymous_viewers_see_only_public_posts() {
    request::<App, _, _>(|request, ctx| async move {
        prepare_data::seed_reference_data(&ctx).await;
        prepare_data::create_post(&ctx, "hello world", &["public"]).await;
        prepare_data::create_post(&ctx, "for friends only", &["kennis"]).await;
        prepare_data::create_post(&ctx, "members only", &["loggedin"]).await;

        let response = request.get("/api/timeline").await;
        assert_eq!(response.status_code(), 200);

        let timeline: TimelineResponse = serde_json::from_str(&response.text()).unwrap();
        assert!(!timeline.is_admin);
        assert_eq!(timeline.posts.len(), 1);
        assert_eq!(timeline.posts[0].text, "hello world");
    })
    .await;
}

#[tokio::test]
#[serial]
async fn logged_in_viewers_see_loggedin_posts() {
    request::<App, _, _>(|request, ctx| async move {
        prepare_data::seed_reference_data(&ctx).await;
        prepare_data::create_post(&ctx, "members only", &["loggedin"]).await;
        prepare_data::create_post(&ctx, "for friends only", &["kennis"]).await;

        let logged_in = prepare_data::init_user_login(&request, &ctx).await;
        let (auth_key, auth_value) = prepare_data::auth_header(&logged_in.token);
        let response = request
            .get("/api/timeline")
            .add_header(auth_key, auth_value)
            .await;
        assert_eq!(response.status_code(), 200);

        let timeline: TimelineResponse = serde_json::from_str(&response.text()).unwrap();
        assert_eq!(timeline.posts.len(), 1);
        assert_eq!(timeline.posts[0].text, "members only");
    })
    .await;
}

#[tokio::test]
#[serial]
async fn group_members_see_their_groups_posts() {
    request::<App, _, _>(|request, ctx| async move {
        prepare_data::seed_reference_data(&ctx).await;
        prepare_data::create_post(&ctx, "for friends only", &["kennis"]).await;

        let logged_in = prepare_data::init_user_login(&request, &ctx).await;
        prepare_data::add_to_group(&ctx, &logged_in.user, "kennis").await;

        let (auth_key, auth_value) = prepare_data::auth_header(&logged_in.token);
        let response = request
            .get("/api/timeline")
            .add_header(auth_key, auth_value)
            .await;
        let timeline: TimelineResponse = serde_json::from_str(&response.text()).unwrap();
        assert_eq!(timeline.posts.len(), 1);

        // an outsider still sees nothing
        let outsider =
            prepare_data::init_user_login_as(&request, &ctx, "outsider", "outsider@loco.com")
                .await;
        let (auth_key, auth_value) = prepare_data::auth_header(&outsider.token);
        let response = request
            .get("/api/timeline")
            .add_header(auth_key, auth_value)
            .await;
        let timeline: TimelineResponse = serde_json::from_str(&response.text()).unwrap();
        assert!(timeline.posts.is_empty());
    })
    .await;
}

#[tokio::test]
#[serial]
async fn admins_see_everything() {
    request::<App, _, _>(|request, ctx| async move {
        prepare_data::seed_reference_data(&ctx).await;
        prepare_data::create_post(&ctx, "for friends only", &["kennis"]).await;
        prepare_data::create_post(&ctx, "untagged", &[]).await;

        let logged_in = prepare_data::init_user_login(&request, &ctx).await;
        prepare_data::add_to_group(&ctx, &logged_in.user, "admin").await;

        let (auth_key, auth_value) = prepare_data::auth_header(&logged_in.token);
        let response = request
            .get("/api/timeline")
            .add_header(auth_key, auth_value)
            .await;
        let timeline: TimelineResponse = serde_json::from_str(&response.text()).unwrap();
        assert!(timeline.is_admin);
        assert_eq!(timeline.posts.len(), 2);
    })
    .await;
}

#[tokio::test]
#[serial]
async fn timeline_nests_visible_photos_and_comments() {
    request::<App, _, _>(|request, ctx| async move {
        prepare_data::seed_reference_data(&ctx).await;
        let post = prepare_data::create_post(&ctx, "with photo", &["public"]).await;
        prepare_data::create_photo(
            &ctx,
            ("/tmp/a_full.jpg", "/tmp/a_medium.jpg", "/tmp/a_thumb.jpg"),
            &["public"],
            Some(&post),
        )
        .await;
        prepare_data::create_photo(
            &ctx,
            ("/tmp/b_full.jpg", "/tmp/b_medium.jpg", "/tmp/b_thumb.jpg"),
            &["kennis"],
            Some(&post),
        )
        .await;

        // a public comment and a private one
        let comment = request
            .post(&format!("/api/posts/{}/comments", post.id))
            .json(&serde_json::json!({
                "author": "visitor",
                "text": "nice!",
                "visibility": "public"
            }))
            .await;
        assert_eq!(comment.status_code(), 200);
        let private = request
            .post(&format!("/api/posts/{}/comments", post.id))
            .json(&serde_json::json!({
                "author": "visitor",
                "text": "just for you",
                "visibility": "admin"
            }))
            .await;
        assert_eq!(private.status_code(), 200);

        let response = request.get("/api/timeline").await;
        let timeline: TimelineResponse = serde_json::from_str(&response.text()).unwrap();
        assert_eq!(timeline.posts.len(), 1);
        // the kennis-tagged photo and the admin comment stay hidden
        assert_eq!(timeline.posts[0].photos.len(), 1);
        assert_eq!(timeline.posts[0].comments.len(), 1);
        assert_eq!(timeline.posts[0].comments[0].text, "nice!");
    })
    .await;
}

#[tokio::test]
#[serial]
async fn likes_respect_visibility() {
    request::<App, _, _>(|request, ctx| async move {
        prepare_data::seed_reference_data(&ctx).await;
        let open = prepare_data::create_post(&ctx, "likeable", &["public"]).await;
        let closed = prepare_data::create_post(&ctx, "closed", &["kennis"]).await;

        let response = request
            .post(&format!("/api/posts/{}/like", open.id))
            .await;
        assert_eq!(response.status_code(), 200);
        assert!(response.text().contains("\"n_likes\":1"));

        let response = request
            .post(&format!("/api/posts/{}/like", closed.id))
            .await;
        assert_eq!(response.status_code(), 401);
    })
    .await;
}
