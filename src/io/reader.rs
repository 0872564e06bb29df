use std::path::Path;

use image::{ImageReader, RgbaImage};
use tracing::info;

use crate::error::Result;

/// Decode the image at `path` into 8-bit RGBA.
///
/// The container is sniffed from the file contents, so a mislabeled extension still decodes.
pub fn load_rgba(path: &Path) -> Result<RgbaImage> {
    let decoded = ImageReader::open(path)?.with_guessed_format()?.decode()?;
    info!(
        "Loaded {:?}: {}x{} ({:?})",
        path,
        decoded.width(),
        decoded.height(),
        decoded.color()
    );
    Ok(decoded.to_rgba8())
}
