use std::path::PathBuf;

use axum::debug_handler;
use axum::extract::Multipart;
use loco_rs::prelude::*;
use sea_orm::{ActiveValue, IntoActiveModel, QueryFilter, TransactionTrait};
use serde::Deserialize;
use tokio::fs;
use tracing::info;
use uuid::Uuid;

use super::comments::{create_comment, CommentParams};
use crate::common::image_utils::sanitize_file_name;
use crate::common::ingest::{self, IngestedPhoto};
use crate::common::settings::Settings;
use crate::common::visibility::Viewer;
use crate::models::_entities::{photos_groups, posts_groups, posts_photos};
use crate::models::{albums, groups, photos, posts};
use crate::views::timeline::{CommentView, LikeResponse, PostView};

#[derive(Debug, Deserialize)]
pub struct UpdateParams {
    pub text: String,
    pub groups: Vec<String>,
}

async fn load_post(db: &DatabaseConnection, id: i32) -> Result<posts::Model> {
    posts::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound)
}

/// Creates a post from a multipart form: a `text` field, any number of
/// `groups` fields naming the visibility tags, and any number of `photos`
/// files. Each photo is stored, ingested into its derivatives, and filed
/// under the uploads album; nothing is persisted unless every image
/// ingests cleanly.
#[debug_handler]
async fn create(
    viewer: Viewer,
    State(ctx): State<AppContext>,
    mut multipart: Multipart,
) -> Result<Response> {
    if !viewer.is_admin() {
        return unauthorized("admin access required");
    }
    let settings = Settings::from_context(&ctx);

    let mut text = String::new();
    let mut group_names: Vec<String> = Vec::new();
    let mut uploads: Vec<(String, Vec<u8>)> = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| Error::BadRequest(e.to_string()))?
    {
        let field_name = field.name().map(ToString::to_string);
        match field_name.as_deref() {
            Some("text") => {
                text = field
                    .text()
                    .await
                    .map_err(|e| Error::BadRequest(e.to_string()))?;
            }
            Some("groups") => {
                group_names.push(
                    field
                        .text()
                        .await
                        .map_err(|e| Error::BadRequest(e.to_string()))?,
                );
            }
            Some("photos") => {
                let file_name = field
                    .file_name()
                    .map_or_else(|| "upload.jpg".to_string(), sanitize_file_name);
                let data = field
                    .bytes()
                    .await
                    .map_err(|e| Error::BadRequest(e.to_string()))?;
                uploads.push((file_name, data.to_vec()));
            }
            _ => {}
        }
    }

    if text.trim().is_empty() {
        return bad_request("text is required");
    }

    fs::create_dir_all(&settings.upload_dir).await?;
    fs::create_dir_all(&settings.photo_dir).await?;

    // Ingest every image before touching the database; a single broken
    // image fails the whole request without leaving partial rows behind.
    let mut ingested: Vec<(PathBuf, IngestedPhoto)> = Vec::new();
    for (file_name, data) in uploads {
        let stored =
            PathBuf::from(&settings.upload_dir).join(format!("{}-{file_name}", Uuid::new_v4()));
        fs::write(&stored, &data).await?;
        info!("stored upload at {}", stored.display());
        let derived =
            ingest::ingest_async(stored.clone(), PathBuf::from(&settings.photo_dir)).await?;
        ingested.push((stored, derived));
    }

    let txn = ctx.db.begin().await?;
    let selected_groups = groups::Entity::find_by_names(&txn, &group_names)
        .await
        .or_else(|_| bad_request("unknown visibility group"))?;
    let uploads_album = albums::Entity::find_by_name(&txn, albums::UPLOADS_ALBUM).await?;

    let post = posts::ActiveModel {
        text: ActiveValue::Set(text),
        n_likes: ActiveValue::Set(0),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    for group in &selected_groups {
        posts_groups::ActiveModel {
            post_id: ActiveValue::Set(post.id),
            group_id: ActiveValue::Set(group.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }

    for (full_path, derived) in ingested {
        let photo = photos::ActiveModel {
            img_path_full: ActiveValue::Set(full_path.to_string_lossy().into_owned()),
            img_path_medium: ActiveValue::Set(derived.medium_path.to_string_lossy().into_owned()),
            img_path_thumbnail: ActiveValue::Set(
                derived.thumbnail_path.to_string_lossy().into_owned(),
            ),
            taken_at: ActiveValue::Set(derived.taken_at),
            n_likes: ActiveValue::Set(0),
            album_id: ActiveValue::Set(uploads_album.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        posts_photos::ActiveModel {
            post_id: ActiveValue::Set(post.id),
            photo_id: ActiveValue::Set(photo.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
        for group in &selected_groups {
            photos_groups::ActiveModel {
                photo_id: ActiveValue::Set(photo.id),
                group_id: ActiveValue::Set(group.id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }
    }

    txn.commit().await?;
    info!(post = post.id, "post created");

    let group_names = selected_groups.into_iter().map(|g| g.name).collect();
    format::json(PostView::new(&post, group_names, Vec::new(), Vec::new()))
}

/// Replaces the text and the visibility groups of a post.
#[debug_handler]
async fn update(
    viewer: Viewer,
    Path(id): Path<i32>,
    State(ctx): State<AppContext>,
    Json(params): Json<UpdateParams>,
) -> Result<Response> {
    if !viewer.is_admin() {
        return unauthorized("admin access required");
    }
    let post = load_post(&ctx.db, id).await?;

    let txn = ctx.db.begin().await?;
    let selected_groups = groups::Entity::find_by_names(&txn, &params.groups)
        .await
        .or_else(|_| bad_request("unknown visibility group"))?;

    let mut item = post.into_active_model();
    item.text = ActiveValue::Set(params.text);
    let post = item.update(&txn).await?;

    posts_groups::Entity::delete_many()
        .filter(posts_groups::Column::PostId.eq(post.id))
        .exec(&txn)
        .await?;
    for group in &selected_groups {
        posts_groups::ActiveModel {
            post_id: ActiveValue::Set(post.id),
            group_id: ActiveValue::Set(group.id),
            ..Default::default()
        }
        .insert(&txn)
        .await?;
    }
    txn.commit().await?;

    let group_names = selected_groups.into_iter().map(|g| g.name).collect();
    format::json(PostView::new(&post, group_names, Vec::new(), Vec::new()))
}

/// Anyone who can see the post can like it.
#[debug_handler]
async fn like(viewer: Viewer, Path(id): Path<i32>, State(ctx): State<AppContext>) -> Result<Response> {
    let post = load_post(&ctx.db, id).await?;
    let visibility = post.visibility(&ctx.db).await?;
    if !(viewer.is_admin() || visibility.allows(&viewer)) {
        return unauthorized("not allowed");
    }
    let n_likes = post.bump_likes(&ctx.db).await?;
    format::json(LikeResponse { n_likes })
}

/// Anyone who can see the post can comment on it.
#[debug_handler]
async fn comment(
    viewer: Viewer,
    Path(id): Path<i32>,
    State(ctx): State<AppContext>,
    Json(params): Json<CommentParams>,
) -> Result<Response> {
    let post = load_post(&ctx.db, id).await?;
    let visibility = post.visibility(&ctx.db).await?;
    if !(viewer.is_admin() || visibility.allows(&viewer)) {
        return unauthorized("not allowed");
    }
    let comment = create_comment(&ctx, &viewer, params, Some(post.id), None).await?;
    let groups = comment.group_names(&ctx.db).await?;
    format::json(CommentView::new(&comment, groups))
}

pub fn routes() -> Routes {
    Routes::new()
        .prefix("/api/posts")
        .add("/", post(create))
        .add("/{id}", patch(update))
        .add("/{id}/like", post(like))
        .add("/{id}/comments", post(comment))
}
