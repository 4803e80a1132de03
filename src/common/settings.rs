use loco_rs::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default, Debug)]
pub struct Settings {
    /// Directory the medium/thumbnail derivatives are written to.
    pub photo_dir: String,
    /// Directory raw uploads are stored in before ingestion.
    pub upload_dir: String,
    /// Address account and comment notifications are sent to.
    pub notify_email: String,
}

impl Settings {
    /// Deserializes the `settings` section from the app's configuration
    /// file (e.g. `config/development.yaml`) into a typed struct.
    ///
    /// # Errors
    ///
    /// This function will return an error if the `settings` section does
    /// not match the expected structure.
    pub fn from_json(value: &serde_json::Value) -> Result<Self, serde_json::Error> {
        serde_json::from_value(value.clone())
    }

    /// Typed view over `ctx.config.settings`; a missing section yields the
    /// defaults.
    #[must_use]
    pub fn from_context(ctx: &AppContext) -> Self {
        ctx.config
            .settings
            .as_ref()
            .and_then(|settings| Self::from_json(settings).ok())
            .unwrap_or_default()
    }
}
