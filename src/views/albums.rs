use derive_more::Constructor;
use serde::{Deserialize, Serialize};

use super::timeline::PhotoView;

#[derive(Debug, Constructor, Deserialize, Serialize)]
pub struct AlbumListItem {
    pub id: i32,
    pub name: String,
    pub n_photos: u64,
}

#[derive(Debug, Constructor, Deserialize, Serialize)]
pub struct AlbumResponse {
    pub id: i32,
    pub name: String,
    pub photos: Vec<PhotoView>,
}
