use axum::debug_handler;
use loco_rs::prelude::*;
use sea_orm::{ActiveValue, IntoActiveModel, QueryFilter, TransactionTrait};
use serde::Deserialize;
use tracing::info;

use crate::common::visibility::Viewer;
use crate::mailers::moderation::ModerationMailer;
use crate::models::_entities::comments_groups;
use crate::models::{comments, groups};
use crate::views::timeline::CommentView;

#[derive(Debug, Deserialize)]
pub struct CommentParams {
    pub author: Option<String>,
    pub text: String,
    pub visibility: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateParams {
    pub text: String,
    pub visibility: String,
}

/// Creates a comment on a post or a photo for the posts/photos
/// controllers; the caller has already checked access to the parent.
/// The author name falls back to the logged-in user's name; anonymous
/// commenters must provide one.
pub(crate) async fn create_comment(
    ctx: &AppContext,
    viewer: &Viewer,
    params: CommentParams,
    post_id: Option<i32>,
    photo_id: Option<i32>,
) -> Result<comments::Model> {
    let author = viewer
        .user
        .as_ref()
        .map(|u| u.name.clone())
        .or(params.author)
        .filter(|a| !a.trim().is_empty());
    let Some(author) = author else {
        return bad_request("author is required");
    };
    if params.text.trim().is_empty() {
        return bad_request("text is required");
    }

    let group = groups::Entity::find_by_name(&ctx.db, &params.visibility)
        .await
        .or_else(|_| bad_request("unknown visibility group"))?;

    let txn = ctx.db.begin().await?;
    let comment = comments::ActiveModel {
        author: ActiveValue::Set(author),
        text: ActiveValue::Set(params.text),
        user_id: ActiveValue::Set(viewer.user.as_ref().map(|u| u.id)),
        post_id: ActiveValue::Set(post_id),
        photo_id: ActiveValue::Set(photo_id),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    comments_groups::ActiveModel {
        comment_id: ActiveValue::Set(comment.id),
        group_id: ActiveValue::Set(group.id),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;

    info!(comment = comment.id, author = &comment.author, "comment created");
    ModerationMailer::comment_posted(ctx, &comment, &params.visibility).await?;

    Ok(comment)
}

/// Rewrites a comment's text and visibility; only its author or an admin
/// may do so.
#[debug_handler]
async fn update(
    viewer: Viewer,
    Path(id): Path<i32>,
    State(ctx): State<AppContext>,
    Json(params): Json<UpdateParams>,
) -> Result<Response> {
    let comment = comments::Entity::find_by_id(id)
        .one(&ctx.db)
        .await?
        .ok_or_else(|| Error::NotFound)?;

    let is_author = matches!(
        (comment.user_id, viewer.user.as_ref()),
        (Some(user_id), Some(user)) if user_id == user.id
    );
    if !(viewer.is_admin() || is_author) {
        return unauthorized("not allowed");
    }

    let group = groups::Entity::find_by_name(&ctx.db, &params.visibility)
        .await
        .or_else(|_| bad_request("unknown visibility group"))?;

    let txn = ctx.db.begin().await?;
    let mut item = comment.into_active_model();
    item.text = ActiveValue::Set(params.text);
    let comment = item.update(&txn).await?;
    comments_groups::Entity::delete_many()
        .filter(comments_groups::Column::CommentId.eq(comment.id))
        .exec(&txn)
        .await?;
    comments_groups::ActiveModel {
        comment_id: ActiveValue::Set(comment.id),
        group_id: ActiveValue::Set(group.id),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    txn.commit().await?;

    format::json(CommentView::new(&comment, vec![group.name]))
}

pub fn routes() -> Routes {
    Routes::new()
        .prefix("/api/comments")
        .add("/{id}", patch(update))
}
