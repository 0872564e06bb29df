use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, RgbaImage};

use crate::error::Result;

pub fn write_rgba_png(output: &Path, image: &RgbaImage) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);
    let encoder = PngEncoder::new(&mut writer);
    encoder.write_image(
        image.as_raw(),
        image.width(),
        image.height(),
        ExtendedColorType::Rgba8,
    )?;
    writer.flush()?;
    Ok(())
}
