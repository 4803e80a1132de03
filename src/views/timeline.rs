use chrono::NaiveDateTime;
use sea_orm::prelude::DateTimeWithTimeZone;
use serde::{Deserialize, Serialize};

use crate::models::{comments, photos, posts};

#[derive(Debug, Deserialize, Serialize)]
pub struct PhotoView {
    pub id: i32,
    pub taken_at: Option<NaiveDateTime>,
    pub n_likes: i32,
    pub medium_url: String,
    pub thumbnail_url: String,
}

impl PhotoView {
    #[must_use]
    pub fn new(photo: &photos::Model) -> Self {
        Self {
            id: photo.id,
            taken_at: photo.taken_at,
            n_likes: photo.n_likes,
            medium_url: format!("/api/photos/{}/file/medium", photo.id),
            thumbnail_url: format!("/api/photos/{}/file/thumbnail", photo.id),
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct CommentView {
    pub id: i32,
    pub author: String,
    pub text: String,
    pub created_at: DateTimeWithTimeZone,
    pub groups: Vec<String>,
}

impl CommentView {
    #[must_use]
    pub fn new(comment: &comments::Model, groups: Vec<String>) -> Self {
        Self {
            id: comment.id,
            author: comment.author.clone(),
            text: comment.text.clone(),
            created_at: comment.created_at,
            groups,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct PostView {
    pub id: i32,
    pub text: String,
    pub created_at: DateTimeWithTimeZone,
    pub n_likes: i32,
    pub groups: Vec<String>,
    pub photos: Vec<PhotoView>,
    pub comments: Vec<CommentView>,
}

impl PostView {
    #[must_use]
    pub fn new(
        post: &posts::Model,
        groups: Vec<String>,
        photos: Vec<PhotoView>,
        comments: Vec<CommentView>,
    ) -> Self {
        Self {
            id: post.id,
            text: post.text.clone(),
            created_at: post.created_at,
            n_likes: post.n_likes,
            groups,
            photos,
            comments,
        }
    }
}

#[derive(Debug, Deserialize, Serialize)]
pub struct TimelineResponse {
    pub is_admin: bool,
    pub posts: Vec<PostView>,
}

#[derive(Debug, Deserialize, Serialize)]
pub struct LikeResponse {
    pub n_likes: i32,
}
