use std::path::PathBuf;

use loco_rs::prelude::*;
use sea_orm::{ActiveValue, TransactionTrait};
use tracing::info;
use walkdir::WalkDir;

use crate::common::image_utils::is_image_file;
use crate::common::ingest;
use crate::common::settings::Settings;
use crate::models::_entities::photos_groups;
use crate::models::{albums, groups, photos};

pub struct ImportPhotos;
#[async_trait]
impl Task for ImportPhotos {
    fn task(&self) -> TaskInfo {
        TaskInfo {
            name: "photos:import".to_string(),
            detail: "ingest a file or a directory of images into an album (album:.. path:.. [groups:a,b])"
                .to_string(),
        }
    }

    async fn run(&self, ctx: &AppContext, vars: &task::Vars) -> Result<()> {
        let album_name = vars.cli_arg("album")?;
        let path = PathBuf::from(vars.cli_arg("path")?);
        let group_names: Vec<String> = vars
            .cli_arg("groups")
            .map(|raw| {
                raw.split(',')
                    .map(|part| part.trim().to_string())
                    .filter(|part| !part.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        let settings = Settings::from_context(ctx);
        let album = albums::Entity::find_by_name(&ctx.db, album_name).await?;
        let selected_groups = groups::Entity::find_by_names(&ctx.db, &group_names).await?;

        let mut sources: Vec<PathBuf> = Vec::new();
        if path.is_dir() {
            for entry in WalkDir::new(&path).into_iter().filter_map(Result::ok) {
                if entry.file_type().is_file() && is_image_file(entry.path()) {
                    sources.push(entry.path().to_path_buf());
                }
            }
        } else {
            sources.push(path.clone());
        }
        if sources.is_empty() {
            return Err(Error::Message(format!(
                "no images found under {}",
                path.display()
            )));
        }

        tokio::fs::create_dir_all(&settings.photo_dir).await?;

        for source in sources {
            let source = source.canonicalize()?;
            let derived =
                ingest::ingest_async(source.clone(), PathBuf::from(&settings.photo_dir)).await?;

            let txn = ctx.db.begin().await?;
            let photo = photos::ActiveModel {
                img_path_full: ActiveValue::Set(source.to_string_lossy().into_owned()),
                img_path_medium: ActiveValue::Set(
                    derived.medium_path.to_string_lossy().into_owned(),
                ),
                img_path_thumbnail: ActiveValue::Set(
                    derived.thumbnail_path.to_string_lossy().into_owned(),
                ),
                taken_at: ActiveValue::Set(derived.taken_at),
                n_likes: ActiveValue::Set(0),
                album_id: ActiveValue::Set(album.id),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
            for group in &selected_groups {
                photos_groups::ActiveModel {
                    photo_id: ActiveValue::Set(photo.id),
                    group_id: ActiveValue::Set(group.id),
                    ..Default::default()
                }
                .insert(&txn)
                .await?;
            }
            txn.commit().await?;

            info!(photo = photo.id, "imported {}", source.display());
            println!("imported {} as photo #{}", source.display(), photo.id);
        }

        Ok(())
    }
}
