use std::path::Path;

use image::RgbaImage;
use tracing::info;

use crate::error::Result;
use crate::io::writers::ico::write_single_ico;
use crate::io::writers::png::write_rgba_png;
use crate::types::IconFormat;

pub fn save_icon(image: &RgbaImage, output: &Path, format: IconFormat) -> Result<()> {
    match format {
        IconFormat::Png => write_rgba_png(output, image)?,
        IconFormat::Ico => write_single_ico(output, image)?,
    }
    info!(
        "Saved {} {}x{} -> {:?}",
        format,
        image.width(),
        image.height(),
        output
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageFormat, Rgba};

    #[test]
    fn writes_decodable_png_and_ico() {
        let dir = tempfile::tempdir().unwrap();
        let icon = RgbaImage::from_pixel(64, 64, Rgba([12, 34, 56, 200]));

        let png_path = dir.path().join("icon.png");
        save_icon(&icon, &png_path, IconFormat::Png).unwrap();
        let png = image::open(&png_path).unwrap().to_rgba8();
        assert_eq!(png, icon);

        let ico_path = dir.path().join("favicon.ico");
        save_icon(&icon, &ico_path, IconFormat::Ico).unwrap();
        let bytes = std::fs::read(&ico_path).unwrap();
        assert_eq!(&bytes[..4], &[0, 0, 1, 0]);
        // one directory entry
        assert_eq!(u16::from_le_bytes([bytes[4], bytes[5]]), 1);
        let ico = image::load_from_memory_with_format(&bytes, ImageFormat::Ico)
            .unwrap()
            .to_rgba8();
        assert_eq!(ico.dimensions(), (64, 64));
    }

    #[test]
    fn missing_directory_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let icon = RgbaImage::new(4, 4);
        let err = save_icon(&icon, &dir.path().join("nope/icon.png"), IconFormat::Png)
            .unwrap_err();
        assert!(matches!(err, crate::error::Error::Io(_)));
    }
}
