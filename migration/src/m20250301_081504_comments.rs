use loco_rs::schema::table_auto_tz;
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // A comment attaches to exactly one of a photo or a post, and may be
        // anonymous, so all three references are nullable.
        let table = table_auto_tz(Comments::Table)
            .col(pk_auto(Comments::Id))
            .col(string(Comments::Author))
            .col(text(Comments::Text))
            .col(integer_null(Comments::UserId))
            .col(integer_null(Comments::PhotoId))
            .col(integer_null(Comments::PostId))
            .foreign_key(
                ForeignKey::create()
                    .name("fk_comments_user_id")
                    .from(Comments::Table, Comments::UserId)
                    .to(Users::Table, Users::Id)
                    .on_delete(ForeignKeyAction::SetNull)
                    .on_update(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_comments_photo_id")
                    .from(Comments::Table, Comments::PhotoId)
                    .to(Photos::Table, Photos::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::Cascade),
            )
            .foreign_key(
                ForeignKey::create()
                    .name("fk_comments_post_id")
                    .from(Comments::Table, Comments::PostId)
                    .to(Posts::Table, Posts::Id)
                    .on_delete(ForeignKeyAction::Cascade)
                    .on_update(ForeignKeyAction::Cascade),
            )
            .to_owned();
        manager.create_table(table).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Comments::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Comments {
    Table,
    Id,
    Author,
    Text,
    UserId,
    PhotoId,
    PostId,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Photos {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Posts {
    Table,
    Id,
}
