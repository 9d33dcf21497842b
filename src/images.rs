use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine};
use thiserror::Error;
use tracing::{info, warn};

use crate::parser::extract::ImageRecord;

#[derive(Debug, Error)]
pub enum ImageSaveError {
    #[error("invalid base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),

    #[error("failed to write {path:?}: {source}")]
    Write { path: PathBuf, source: io::Error },
}

/// Decode the full payload of `image` into `<dir>/temp_<name>.<format>`.
pub fn try_save_image(
    image: &ImageRecord,
    name: &str,
    dir: &Path,
) -> Result<PathBuf, ImageSaveError> {
    let cleaned: String = image
        .payload()
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let bytes = STANDARD.decode(cleaned)?;

    let path = dir.join(format!("temp_{}.{}", name, image.format));
    fs::write(&path, &bytes).map_err(|source| ImageSaveError::Write {
        path: path.clone(),
        source,
    })?;
    info!(bytes = bytes.len(), "Saved image to {:?}", path);
    Ok(path)
}

/// Like [`try_save_image`], but a failure is reported on stderr and turned
/// into `None` so the remaining images are still processed.
pub fn save_image(image: &ImageRecord, name: &str, dir: &Path) -> Option<PathBuf> {
    match try_save_image(image, name, dir) {
        Ok(path) => Some(path),
        Err(e) => {
            warn!("Saving image {} failed: {}", name, e);
            eprintln!("Error saving image: {}", e);
            None
        }
    }
}

/// Save every image as `temp_image-<n>.<format>`, noting each written file on
/// `out`. Returns the paths that were written.
pub fn save_all<W: Write>(
    images: &[ImageRecord],
    dir: &Path,
    out: &mut W,
) -> io::Result<Vec<PathBuf>> {
    let mut saved = Vec::new();
    for (i, image) in images.iter().enumerate() {
        let name = format!("image-{}", i + 1);
        if let Some(path) = save_image(image, &name, dir) {
            writeln!(out, "Saved image {} to {}", i + 1, path.display())?;
            saved.push(path);
        }
    }
    Ok(saved)
}
