use std::path::Path;

use crate::config::PlaceholderConfig;
use crate::consts::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::{FitSwapError, Result};
use crate::image_ref::{ImageRef, PhotoSlot};

/// Turns a user-selected file into an `ImageRef` for a slot.
pub trait Uploader {
    fn upload(&self, slot: PhotoSlot, path: &Path) -> Result<ImageRef>;
}

/// Accepts local image files and references them by `file://` URI.
#[derive(Clone, Copy, Debug, Default)]
pub struct FileUploader;

impl Uploader for FileUploader {
    fn upload(&self, slot: PhotoSlot, path: &Path) -> Result<ImageRef> {
        if !is_supported_image(path) {
            return Err(FitSwapError::UnsupportedUpload {
                path: path.to_path_buf(),
                reason: format!(
                    "expected one of: {}",
                    SUPPORTED_IMAGE_EXTENSIONS.join(", ")
                ),
            });
        }
        let metadata = std::fs::metadata(path).map_err(|e| {
            FitSwapError::UploadFailed(format!("{}: {e}", path.display()))
        })?;
        if !metadata.is_file() {
            return Err(FitSwapError::UnsupportedUpload {
                path: path.to_path_buf(),
                reason: "not a regular file".into(),
            });
        }
        let absolute = std::fs::canonicalize(path)?;
        // References are strings; a lossy path would not resolve back.
        if absolute.to_str().is_none() {
            return Err(FitSwapError::UnsupportedUpload {
                path: path.to_path_buf(),
                reason: "path is not valid UTF-8".into(),
            });
        }
        tracing::debug!("{slot} uploaded from {}", absolute.display());
        Ok(ImageRef::from_path(&absolute))
    }
}

/// Ignores the selected file and hands out the configured placeholder.
#[derive(Clone, Debug, Default)]
pub struct PlaceholderUploader {
    placeholders: PlaceholderConfig,
}

impl PlaceholderUploader {
    pub fn new(placeholders: PlaceholderConfig) -> Self {
        Self { placeholders }
    }
}

impl Uploader for PlaceholderUploader {
    fn upload(&self, slot: PhotoSlot, _path: &Path) -> Result<ImageRef> {
        Ok(match slot {
            PhotoSlot::Customer => self.placeholders.customer.clone(),
            PhotoSlot::Outfit => self.placeholders.outfit.clone(),
        })
    }
}

/// Copy the file behind a local `file://` reference to `dest`.
/// Returns the number of bytes written.
pub fn export_image(image: &ImageRef, dest: &Path) -> Result<u64> {
    let source = image
        .local_path()
        .ok_or_else(|| FitSwapError::NotLocalImage(image.clone()))?;
    let bytes = std::fs::copy(&source, dest)?;
    tracing::info!("Exported {image} to {} ({bytes} bytes)", dest.display());
    Ok(bytes)
}

pub fn is_supported_image(path: &Path) -> bool {
    match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => {
            let ext = ext.to_ascii_lowercase();
            SUPPORTED_IMAGE_EXTENSIONS.contains(&ext.as_str())
        }
        None => false,
    }
}
