pub mod albums;
pub mod auth;
pub mod comments;
pub mod photos;
pub mod posts;
pub mod timeline;
