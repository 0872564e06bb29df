use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::ico::IcoEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::Result;

/// Write `image` as a one-entry ICO file (the entry is PNG-compressed).
pub fn write_single_ico(output: &Path, image: &RgbaImage) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = IcoEncoder::new(&mut writer);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    writer.flush()?;
    Ok(())
}
