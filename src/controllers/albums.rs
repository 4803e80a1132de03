use axum::debug_handler;
use loco_rs::prelude::*;
use sea_orm::ModelTrait;

use crate::common::visibility::Viewer;
use crate::models::{albums, photos};
use crate::views::albums::{AlbumListItem, AlbumResponse};
use crate::views::timeline::PhotoView;

/// Albums with their photo counts; album browsing is an admin surface.
#[debug_handler]
async fn list(viewer: Viewer, State(ctx): State<AppContext>) -> Result<Response> {
    if !viewer.is_admin() {
        return unauthorized("admin access required");
    }
    let all = albums::Entity::find().all(&ctx.db).await?;
    let mut items = Vec::new();
    for album in all {
        let n_photos = album.n_photos(&ctx.db).await?;
        items.push(AlbumListItem::new(album.id, album.name, n_photos));
    }
    format::json(items)
}

/// One album with all of its photos.
#[debug_handler]
async fn get_one(
    viewer: Viewer,
    Path(name): Path<String>,
    State(ctx): State<AppContext>,
) -> Result<Response> {
    if !viewer.is_admin() {
        return unauthorized("admin access required");
    }
    let album = albums::Entity::find_by_name(&ctx.db, &name).await?;
    let photos = album.find_related(photos::Entity).all(&ctx.db).await?;
    let views = photos.iter().map(PhotoView::new).collect();
    format::json(AlbumResponse::new(album.id, album.name, views))
}

pub fn routes() -> Routes {
    Routes::new()
        .prefix("/api/albums")
        .add("/", get(list))
        .add("/{name}", get(get_one))
}
