use loco_rs::prelude::*;
use sea_orm::ActiveValue;
use tracing::info;

use crate::common::visibility::{ADMIN_GROUP, LOGGED_IN_GROUP, PUBLIC_GROUP};
use crate::models::_entities::users_groups;
use crate::models::users::RegisterParams;
use crate::models::{albums, groups, users};

pub struct SeedData;
#[async_trait]
impl Task for SeedData {
    fn task(&self) -> TaskInfo {
        TaskInfo {
            name: "seed_data".to_string(),
            detail: "create the built-in groups, the uploads album, and optionally an admin user (email:.. password:..)"
                .to_string(),
        }
    }

    async fn run(&self, ctx: &AppContext, vars: &task::Vars) -> Result<()> {
        for name in [PUBLIC_GROUP, LOGGED_IN_GROUP, ADMIN_GROUP] {
            if groups::Entity::find_by_name(&ctx.db, name).await.is_err() {
                groups::ActiveModel {
                    name: ActiveValue::Set(name.to_string()),
                    ..Default::default()
                }
                .insert(&ctx.db)
                .await?;
                info!("created group {name}");
            }
        }

        if albums::Entity::find_by_name(&ctx.db, albums::UPLOADS_ALBUM)
            .await
            .is_err()
        {
            albums::ActiveModel {
                name: ActiveValue::Set(albums::UPLOADS_ALBUM.to_string()),
                ..Default::default()
            }
            .insert(&ctx.db)
            .await?;
            info!("created album {}", albums::UPLOADS_ALBUM);
        }

        if let (Ok(email), Ok(password)) = (vars.cli_arg("email"), vars.cli_arg("password")) {
            let user = users::Model::create_with_password(
                &ctx.db,
                &RegisterParams {
                    email: email.to_string(),
                    password: password.to_string(),
                    name: "admin".to_string(),
                    want_newsletter: false,
                },
            )
            .await?;
            let admin_group = groups::Entity::find_by_name(&ctx.db, ADMIN_GROUP).await?;
            users_groups::ActiveModel {
                user_id: ActiveValue::Set(user.id),
                group_id: ActiveValue::Set(admin_group.id),
                ..Default::default()
            }
            .insert(&ctx.db)
            .await?;
            info!(user_email = &user.email, "created admin user");
        }

        Ok(())
    }
}
