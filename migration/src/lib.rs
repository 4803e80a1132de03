#![allow(elided_lifetimes_in_paths)]
#![allow(clippy::wildcard_imports)]
pub use sea_orm_migration::prelude::*;
mod m20220101_000001_users;
mod m20250301_081500_groups;
mod m20250301_081501_albums;
mod m20250301_081502_posts;
mod m20250301_081503_photos;
mod m20250301_081504_comments;
mod m20250301_081505_users_groups;
mod m20250301_081506_posts_photos;
mod m20250301_081507_posts_groups;
mod m20250301_081508_photos_groups;
mod m20250301_081509_comments_groups;
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20220101_000001_users::Migration),
            Box::new(m20250301_081500_groups::Migration),
            Box::new(m20250301_081501_albums::Migration),
            Box::new(m20250301_081502_posts::Migration),
            Box::new(m20250301_081503_photos::Migration),
            Box::new(m20250301_081504_comments::Migration),
            Box::new(m20250301_081505_users_groups::Migration),
            Box::new(m20250301_081506_posts_photos::Migration),
            Box::new(m20250301_081507_posts_groups::Migration),
            Box::new(m20250301_081508_photos_groups::Migration),
            Box::new(m20250301_081509_comments_groups::Migration),
            // inject-above (do not remove this comment)
        ]
    }
}
