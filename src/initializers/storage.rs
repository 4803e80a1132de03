use loco_rs::prelude::*;
use tracing::info;

use crate::common::settings::Settings;

pub struct StorageInitializer;

#[async_trait]
impl Initializer for StorageInitializer {
    fn name(&self) -> String {
        "photo-storage".to_string()
    }

    async fn before_run(&self, ctx: &AppContext) -> Result<()> {
        let settings = Settings::from_context(ctx);
        for dir in [&settings.photo_dir, &settings.upload_dir] {
            if !dir.is_empty() {
                tokio::fs::create_dir_all(dir).await?;
            }
        }
        info!("photo storage directories ready");
        Ok(())
    }
}
