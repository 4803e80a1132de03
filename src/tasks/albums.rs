use loco_rs::prelude::*;
use sea_orm::ActiveValue;
use tracing::info;

use crate::models::albums;

pub struct ListAlbums;
#[async_trait]
impl Task for ListAlbums {
    fn task(&self) -> TaskInfo {
        TaskInfo {
            name: "albums:list".to_string(),
            detail: "print every album and its photo count".to_string(),
        }
    }

    async fn run(&self, ctx: &AppContext, _vars: &task::Vars) -> Result<()> {
        for album in albums::Entity::find().all(&ctx.db).await? {
            let n_photos = album.n_photos(&ctx.db).await?;
            let noun = if n_photos == 1 { "photo" } else { "photos" };
            println!("#{} {} ({n_photos} {noun})", album.id, album.name);
        }
        Ok(())
    }
}

pub struct CreateAlbum;
#[async_trait]
impl Task for CreateAlbum {
    fn task(&self) -> TaskInfo {
        TaskInfo {
            name: "albums:create".to_string(),
            detail: "create a new album (name:..)".to_string(),
        }
    }

    async fn run(&self, ctx: &AppContext, vars: &task::Vars) -> Result<()> {
        let name = vars.cli_arg("name")?;
        if albums::Entity::find_by_name(&ctx.db, name).await.is_ok() {
            return Err(Error::Message(format!(
                "album '{name}' already exists; not creating"
            )));
        }
        let album = albums::ActiveModel {
            name: ActiveValue::Set(name.to_string()),
            ..Default::default()
        }
        .insert(&ctx.db)
        .await?;
        info!(album = album.id, "created album {name}");
        Ok(())
    }
}

pub struct DeleteAlbum;
#[async_trait]
impl Task for DeleteAlbum {
    fn task(&self) -> TaskInfo {
        TaskInfo {
            name: "albums:delete".to_string(),
            detail: "delete an empty album (name:.., requires force:true)".to_string(),
        }
    }

    async fn run(&self, ctx: &AppContext, vars: &task::Vars) -> Result<()> {
        let name = vars.cli_arg("name")?;
        let force = vars.cli_arg("force").map(String::as_str).unwrap_or("false");
        if force != "true" {
            return Err(Error::Message(format!(
                "refusing to delete album '{name}'; re-run with force:true"
            )));
        }
        let Ok(album) = albums::Entity::find_by_name(&ctx.db, name).await else {
            println!("album '{name}' does not exist, nothing to delete");
            return Ok(());
        };
        let n_photos = album.n_photos(&ctx.db).await?;
        if n_photos > 0 {
            return Err(Error::Message(format!(
                "album '{name}' still holds {n_photos} photos; move them first"
            )));
        }
        albums::Entity::delete_by_id(album.id).exec(&ctx.db).await?;
        info!("deleted album {name}");
        Ok(())
    }
}
