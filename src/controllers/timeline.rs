use axum::debug_handler;
use loco_rs::prelude::*;
use sea_orm::ModelTrait;

use crate::common::visibility::Viewer;
use crate::models::{comments, photos, posts};
use crate::views::timeline::{CommentView, PhotoView, PostView, TimelineResponse};

/// Comments the viewer is allowed to see, in view shape.
pub(crate) async fn comment_views(
    db: &DatabaseConnection,
    viewer: &Viewer,
    comments: Vec<comments::Model>,
) -> Result<Vec<CommentView>> {
    let mut views = Vec::new();
    for comment in comments {
        let visibility = comment.visibility(db).await?;
        if viewer.is_admin() || visibility.allows(viewer) {
            views.push(CommentView::new(&comment, visibility.group_names));
        }
    }
    Ok(views)
}

/// Photos the viewer is allowed to see, in view shape.
pub(crate) async fn photo_views(
    db: &DatabaseConnection,
    viewer: &Viewer,
    photos: Vec<photos::Model>,
) -> Result<Vec<PhotoView>> {
    let mut views = Vec::new();
    for photo in photos {
        let visibility = photo.visibility(db).await?;
        if viewer.is_admin() || visibility.allows(viewer) {
            views.push(PhotoView::new(&photo));
        }
    }
    Ok(views)
}

/// Recent posts the viewer may see, newest first, with their visible
/// photos and comments nested in.
#[debug_handler]
async fn list(viewer: Viewer, State(ctx): State<AppContext>) -> Result<Response> {
    let posts = posts::Entity::find_recent(&ctx.db).await?;

    let mut views = Vec::new();
    for post in posts {
        let visibility = post.visibility(&ctx.db).await?;
        if !(viewer.is_admin() || visibility.allows(&viewer)) {
            continue;
        }
        let photos = post.photos(&ctx.db).await?;
        let comments = post.find_related(comments::Entity).all(&ctx.db).await?;
        views.push(PostView::new(
            &post,
            visibility.group_names,
            photo_views(&ctx.db, &viewer, photos).await?,
            comment_views(&ctx.db, &viewer, comments).await?,
        ));
    }

    format::json(TimelineResponse {
        is_admin: viewer.is_admin(),
        posts: views,
    })
}

pub fn routes() -> Routes {
    Routes::new().prefix("/api/timeline").add("/", get(list))
}
