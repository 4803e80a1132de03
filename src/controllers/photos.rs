use std::path::Path as FsPath;

use axum::body::Body;
use axum::debug_handler;
use axum::http::{header, StatusCode};
use loco_rs::prelude::*;
use path_clean::clean;
use sea_orm::ModelTrait;
use tokio::{fs::File, io::ErrorKind};
use tokio_util::codec::{BytesCodec, FramedRead};
use tracing::{debug, error, warn};

use super::comments::{create_comment, CommentParams};
use super::timeline::comment_views;
use crate::common::settings::Settings;
use crate::common::visibility::Viewer;
use crate::models::{comments, photos};
use crate::views::photos::PhotoDetailResponse;
use crate::views::timeline::{CommentView, LikeResponse};

async fn load_photo(db: &DatabaseConnection, id: i32) -> Result<photos::Model> {
    photos::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| Error::NotFound)
}

/// A photo with the comments the viewer may see.
#[debug_handler]
async fn get_one(viewer: Viewer, Path(id): Path<i32>, State(ctx): State<AppContext>) -> Result<Response> {
    let photo = load_photo(&ctx.db, id).await?;
    let visibility = photo.visibility(&ctx.db).await?;
    if !(viewer.is_admin() || visibility.allows(&viewer)) {
        return unauthorized("not allowed");
    }
    let comments = photo.find_related(comments::Entity).all(&ctx.db).await?;
    let comment_views = comment_views(&ctx.db, &viewer, comments).await?;
    format::json(PhotoDetailResponse::new(
        &photo,
        visibility.group_names,
        comment_views,
    ))
}

/// Anyone who can see the photo can like it.
#[debug_handler]
async fn like(viewer: Viewer, Path(id): Path<i32>, State(ctx): State<AppContext>) -> Result<Response> {
    let photo = load_photo(&ctx.db, id).await?;
    let visibility = photo.visibility(&ctx.db).await?;
    if !(viewer.is_admin() || visibility.allows(&viewer)) {
        return unauthorized("not allowed");
    }
    let n_likes = photo.bump_likes(&ctx.db).await?;
    format::json(LikeResponse { n_likes })
}

/// Anyone who can see the photo can comment on it.
#[debug_handler]
async fn comment(
    viewer: Viewer,
    Path(id): Path<i32>,
    State(ctx): State<AppContext>,
    Json(params): Json<CommentParams>,
) -> Result<Response> {
    let photo = load_photo(&ctx.db, id).await?;
    let visibility = photo.visibility(&ctx.db).await?;
    if !(viewer.is_admin() || visibility.allows(&viewer)) {
        return unauthorized("not allowed");
    }
    let comment = create_comment(&ctx, &viewer, params, None, Some(photo.id)).await?;
    let groups = comment.group_names(&ctx.db).await?;
    format::json(CommentView::new(&comment, groups))
}

/// Streams one of the stored photo files. The derivative variants must
/// live under the configured photo directory; the full variant is served
/// from wherever ingestion recorded it.
///
/// # Errors
///
/// - **`Error::NotFound`**: the photo row or its file does not exist, or
///   a derivative path escapes the photo directory.
/// - **`Error::BadRequest`**: the variant is not full/medium/thumbnail.
/// - **`Error::Unauthorized`**: the viewer fails the visibility check or
///   the server cannot read the file.
#[debug_handler]
async fn file(
    viewer: Viewer,
    Path((id, variant)): Path<(i32, String)>,
    State(ctx): State<AppContext>,
) -> Result<Response> {
    debug!("photo file requested: id={id} variant={variant}");

    let photo = load_photo(&ctx.db, id).await?;
    let visibility = photo.visibility(&ctx.db).await?;
    if !(viewer.is_admin() || visibility.allows(&viewer)) {
        return unauthorized("not allowed");
    }

    let settings = Settings::from_context(&ctx);
    let (raw_path, check_containment) = match variant.as_str() {
        "full" => (&photo.img_path_full, false),
        "medium" => (&photo.img_path_medium, true),
        "thumbnail" => (&photo.img_path_thumbnail, true),
        _ => return bad_request("unknown photo variant"),
    };

    let cleaned_path = clean(FsPath::new(raw_path));
    if check_containment && !cleaned_path.starts_with(clean(FsPath::new(&settings.photo_dir))) {
        warn!(
            "derivative path {} escapes the photo directory",
            cleaned_path.display()
        );
        return Err(Error::NotFound);
    }

    let file = File::open(&cleaned_path).await.map_err(|e| {
        error!("file open error: {}", e);
        match e.kind() {
            ErrorKind::NotFound => {
                debug!("file not found: {}", cleaned_path.display());
                Error::NotFound
            }
            ErrorKind::PermissionDenied => {
                warn!("permission denied: {}", cleaned_path.display());
                Error::Unauthorized("Can't open file, permission denied.".to_string())
            }
            _ => Error::InternalServerError,
        }
    })?;

    // Determine MIME type based on file extension
    let mime_type = mime_guess::from_path(&cleaned_path)
        .first()
        .unwrap_or(mime::APPLICATION_OCTET_STREAM);
    let file_name = cleaned_path
        .file_name()
        .map_or_else(|| "photo".to_string(), |n| n.to_string_lossy().into_owned());

    // Streaming response
    let stream = FramedRead::new(file, BytesCodec::new());
    Ok(axum::response::Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, mime_type.to_string())
        .header(
            header::CONTENT_DISPOSITION,
            format!("inline; filename=\"{file_name}\""),
        )
        .body(Body::from_stream(stream))?)
}

pub fn routes() -> Routes {
    Routes::new()
        .prefix("/api/photos")
        .add("/{id}", get(get_one))
        .add("/{id}/like", post(like))
        .add("/{id}/comments", post(comment))
        .add("/{id}/file/{variant}", get(file))
}
