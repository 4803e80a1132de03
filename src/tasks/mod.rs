pub mod albums;
pub mod comments;
pub mod photos;
pub mod seed;
