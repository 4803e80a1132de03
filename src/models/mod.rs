pub mod _entities;
pub mod albums;
pub mod comments;
pub mod groups;
pub mod photos;
pub mod posts;
pub mod users;
