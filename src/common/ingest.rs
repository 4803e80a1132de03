use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;
use exif::{In, Tag, Value};
use image::imageops::FilterType;
use image::{DynamicImage, ImageReader};
use thiserror::Error;
use tracing::{debug, error, info};
use uuid::Uuid;

/// Longer side of the medium derivative.
pub const MEDIUM_WIDTH: u32 = 1620;
/// Width of the thumbnail derivative.
pub const THUMBNAIL_WIDTH: u32 = 420;

/// EXIF timestamps carry no timezone: `2019:03:01 12:00:00`.
const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("file system error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ingestion task failed: {0}")]
    Runtime(String),
}

impl From<IngestError> for loco_rs::Error {
    fn from(err: IngestError) -> Self {
        match err {
            IngestError::Image(e) => {
                error!("image decode/encode error: {:?}", e);
                Self::BadRequest("could not process image".to_string())
            }
            IngestError::Io(e) => {
                error!("file system error during ingestion: {:?}", e);
                Self::InternalServerError
            }
            IngestError::Runtime(msg) => {
                error!("ingestion task failed: {}", msg);
                Self::InternalServerError
            }
        }
    }
}

/// The two derivative files plus the capture date, if one could be read.
#[derive(Debug, Clone)]
pub struct IngestedPhoto {
    pub medium_path: PathBuf,
    pub thumbnail_path: PathBuf,
    pub taken_at: Option<NaiveDateTime>,
}

/// Produces the medium and thumbnail derivatives for `source` under
/// `photo_dir`, correcting EXIF orientation and extracting the capture
/// date. The source file is left untouched.
///
/// EXIF problems degrade gracefully; anything wrong with the image itself
/// is returned to the caller and no derivative should be persisted.
///
/// # Errors
///
/// When the source cannot be opened or decoded, or a derivative cannot be
/// written.
pub fn ingest(source: &Path, photo_dir: &Path) -> Result<IngestedPhoto, IngestError> {
    info!("ingesting photo {}", source.display());

    let img = ImageReader::open(source)?.with_guessed_format()?.decode()?;
    let exif = read_exif(source);

    let orientation = exif
        .as_ref()
        .and_then(read_orientation)
        .unwrap_or_else(|| {
            debug!("no usable orientation tag in {}", source.display());
            1
        });
    let img = apply_orientation(img, orientation);

    let medium = bound_longer_side(&img, MEDIUM_WIDTH);
    let thumbnail = make_thumbnail(&img);

    let medium_path = photo_dir.join(derived_file_name(source, "medium"));
    let thumbnail_path = photo_dir.join(derived_file_name(source, "thumbnail"));
    medium.save(&medium_path)?;
    thumbnail.save(&thumbnail_path)?;

    let taken_at = exif.as_ref().and_then(read_capture_date);

    Ok(IngestedPhoto {
        medium_path,
        thumbnail_path,
        taken_at,
    })
}

/// Runs [`ingest`] on the blocking thread pool; decoding and resizing are
/// CPU-bound and must stay off the async workers.
///
/// # Errors
///
/// See [`ingest`].
pub async fn ingest_async(
    source: PathBuf,
    photo_dir: PathBuf,
) -> Result<IngestedPhoto, IngestError> {
    tokio::task::spawn_blocking(move || ingest(&source, &photo_dir))
        .await
        .map_err(|e| IngestError::Runtime(e.to_string()))?
}

fn read_exif(path: &Path) -> Option<exif::Exif> {
    let file = File::open(path).ok()?;
    let mut reader = BufReader::new(file);
    match exif::Reader::new().read_from_container(&mut reader) {
        Ok(exif) => Some(exif),
        Err(e) => {
            // Absent or corrupt EXIF is routine, not an ingestion failure.
            debug!("could not read EXIF from {}: {}", path.display(), e);
            None
        }
    }
}

fn read_orientation(exif: &exif::Exif) -> Option<u32> {
    exif.get_field(Tag::Orientation, In::PRIMARY)?
        .value
        .get_uint(0)
}

fn read_capture_date(exif: &exif::Exif) -> Option<NaiveDateTime> {
    let field = exif.get_field(Tag::DateTimeOriginal, In::PRIMARY)?;
    let raw = match &field.value {
        Value::Ascii(items) => items.first().map(|b| String::from_utf8_lossy(b).into_owned()),
        _ => None,
    }?;
    parse_exif_datetime(&raw)
}

fn parse_exif_datetime(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw.trim(), EXIF_DATETIME_FORMAT).ok()
}

/// Normalizes pixel orientation for the eight EXIF orientation values;
/// unknown values leave the image as-is.
#[must_use]
pub fn apply_orientation(img: DynamicImage, orientation: u32) -> DynamicImage {
    match orientation {
        2 => img.fliph(),
        3 => img.rotate180(),
        4 => img.flipv(),
        5 => img.rotate90().fliph(),
        6 => img.rotate90(),
        7 => img.rotate270().fliph(),
        8 => img.rotate270(),
        _ => img,
    }
}

/// Scales down so the longer side does not exceed `bound`, preserving the
/// aspect ratio and never upscaling.
fn bound_longer_side(img: &DynamicImage, bound: u32) -> DynamicImage {
    if img.width().max(img.height()) <= bound {
        return img.clone();
    }
    img.resize(bound, bound, FilterType::Lanczos3)
}

/// Thumbnails target a fixed width; portrait sources get a narrower target
/// (`420 * width / height`) so the result fits a square presentation crop.
fn make_thumbnail(img: &DynamicImage) -> DynamicImage {
    let mut target_width = THUMBNAIL_WIDTH;
    if img.height() > img.width() {
        target_width =
            ((u64::from(THUMBNAIL_WIDTH) * u64::from(img.width())) / u64::from(img.height())) as u32;
    }
    resize_to_width(img, target_width.max(1))
}

fn resize_to_width(img: &DynamicImage, target_width: u32) -> DynamicImage {
    if img.width() <= target_width {
        return img.clone();
    }
    let target_height =
        ((u64::from(img.height()) * u64::from(target_width)) / u64::from(img.width())) as u32;
    img.resize(target_width, target_height.max(1), FilterType::Lanczos3)
}

/// Derivative file name: `{stem}_{tag}_{random-id}{ext}`. The random id
/// keeps simultaneous uploads of the same file from colliding.
fn derived_file_name(source: &Path, tag: &str) -> String {
    let stem = source
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("photo");
    let extension = source
        .extension()
        .and_then(|s| s.to_str())
        .map_or_else(|| "jpg".to_string(), str::to_ascii_lowercase);
    format!("{stem}_{tag}_{}.{extension}", Uuid::new_v4().simple())
}
