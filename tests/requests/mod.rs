mod albums;
mod auth;
mod photos;
mod posts;
mod timeline;
