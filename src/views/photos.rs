use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::timeline::CommentView;
use crate::models::photos;

#[derive(Debug, Deserialize, Serialize)]
pub struct PhotoDetailResponse {
    pub id: i32,
    pub album_id: i32,
    pub taken_at: Option<NaiveDateTime>,
    pub n_likes: i32,
    pub groups: Vec<String>,
    pub full_url: String,
    pub medium_url: String,
    pub thumbnail_url: String,
    pub comments: Vec<CommentView>,
}

impl PhotoDetailResponse {
    #[must_use]
    pub fn new(photo: &photos::Model, groups: Vec<String>, comments: Vec<CommentView>) -> Self {
        Self {
            id: photo.id,
            album_id: photo.album_id,
            taken_at: photo.taken_at,
            n_likes: photo.n_likes,
            groups,
            full_url: format!("/api/photos/{}/file/full", photo.id),
            medium_url: format!("/api/photos/{}/file/medium", photo.id),
            thumbnail_url: format!("/api/photos/{}/file/thumbnail", photo.id),
            comments,
        }
    }
}
