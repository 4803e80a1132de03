use std::path::Path;

use async_trait::async_trait;
use loco_rs::{
    app::{AppContext, Hooks, Initializer},
    bgworker::Queue,
    boot::{create_app, BootResult, StartMode},
    config::Config,
    controller::AppRoutes,
    db::{self, truncate_table},
    environment::Environment,
    task::Tasks,
    Result,
};
use migration::Migrator;

use crate::models::_entities::prelude::*;
use crate::{controllers, initializers, models, tasks};

pub struct App;
#[async_trait]
impl Hooks for App {
    fn app_name() -> &'static str {
        env!("CARGO_CRATE_NAME")
    }

    fn app_version() -> String {
        format!(
            "{} ({})",
            env!("CARGO_PKG_VERSION"),
            option_env!("BUILD_SHA")
                .or(option_env!("GITHUB_SHA"))
                .unwrap_or("dev")
        )
    }

    async fn boot(
        mode: StartMode,
        environment: &Environment,
        config: Config,
    ) -> Result<BootResult> {
        create_app::<Self, Migrator>(mode, environment, config).await
    }

    async fn initializers(_ctx: &AppContext) -> Result<Vec<Box<dyn Initializer>>> {
        Ok(vec![Box::new(initializers::storage::StorageInitializer)])
    }

    fn routes(_ctx: &AppContext) -> AppRoutes {
        AppRoutes::with_default_routes()
            .add_route(controllers::auth::routes())
            .add_route(controllers::timeline::routes())
            .add_route(controllers::posts::routes())
            .add_route(controllers::photos::routes())
            .add_route(controllers::albums::routes())
            .add_route(controllers::comments::routes())
    }

    async fn connect_workers(_ctx: &AppContext, _queue: &Queue) -> Result<()> {
        Ok(())
    }

    fn register_tasks(tasks: &mut Tasks) {
        tasks.register(tasks::seed::SeedData);
        tasks.register(tasks::albums::ListAlbums);
        tasks.register(tasks::albums::CreateAlbum);
        tasks.register(tasks::albums::DeleteAlbum);
        tasks.register(tasks::photos::ImportPhotos);
        tasks.register(tasks::comments::ListComments);
        tasks.register(tasks::comments::DeleteComment);
    }

    async fn truncate(ctx: &AppContext) -> Result<()> {
        // join tables first, then the rows they point at
        truncate_table(&ctx.db, UsersGroups).await?;
        truncate_table(&ctx.db, PostsPhotos).await?;
        truncate_table(&ctx.db, PostsGroups).await?;
        truncate_table(&ctx.db, PhotosGroups).await?;
        truncate_table(&ctx.db, CommentsGroups).await?;
        truncate_table(&ctx.db, Comments).await?;
        truncate_table(&ctx.db, Photos).await?;
        truncate_table(&ctx.db, Posts).await?;
        truncate_table(&ctx.db, Albums).await?;
        truncate_table(&ctx.db, Groups).await?;
        truncate_table(&ctx.db, Users).await?;
        Ok(())
    }

    async fn seed(ctx: &AppContext, base: &Path) -> Result<()> {
        db::seed::<models::groups::ActiveModel>(
            &ctx.db,
            &base.join("groups.yaml").display().to_string(),
        )
        .await?;
        db::seed::<models::albums::ActiveModel>(
            &ctx.db,
            &base.join("albums.yaml").display().to_string(),
        )
        .await?;
        Ok(())
    }
}
