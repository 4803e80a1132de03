use loco_rs::schema::*;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, m: &SchemaManager) -> Result<(), DbErr> {
        create_table(
            m,
            "photos",
            &[
                ("img_path_full", ColType::String),
                ("img_path_medium", ColType::StringUniq),
                ("img_path_thumbnail", ColType::StringUniq),
                ("taken_at", ColType::TimestampNull),
                ("n_likes", ColType::Integer),
            ],
            &[("album", "")],
        )
        .await
    }

    async fn down(&self, m: &SchemaManager) -> Result<(), DbErr> {
        drop_table(m, "photos").await
    }
}
