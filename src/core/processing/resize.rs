use fast_image_resize::{FilterType, PixelType, ResizeAlg, ResizeOptions, Resizer, images::Image};
use image::RgbaImage;
use tracing::{debug, info};

use crate::error::{Error, Result};

/// Lanczos3-resize RGBA pixels to exactly `target_width` x `target_height`, ignoring aspect ratio.
///
/// Alpha is premultiplied during convolution so transparent pixels do not bleed color.
/// When the source already has the requested dimensions it is returned unchanged.
pub fn resize_exact(
    image: &RgbaImage,
    target_width: u32,
    target_height: u32,
) -> Result<RgbaImage> {
    if target_width == 0 || target_height == 0 {
        return Err(Error::ZeroSize {
            width: target_width,
            height: target_height,
        });
    }
    let (original_width, original_height) = image.dimensions();
    if original_width == 0 || original_height == 0 {
        return Err(Error::ZeroSize {
            width: original_width,
            height: original_height,
        });
    }

    if (original_width, original_height) == (target_width, target_height) {
        debug!(
            "Source already {}x{}, skipping resample",
            target_width, target_height
        );
        return Ok(image.clone());
    }

    info!(
        "Resizing {}x{} -> {}x{}",
        original_width, original_height, target_width, target_height
    );

    let resize_options =
        ResizeOptions::new().resize_alg(ResizeAlg::Convolution(FilterType::Lanczos3));
    let mut resizer = Resizer::new();

    let src_image = Image::from_vec_u8(
        original_width,
        original_height,
        image.as_raw().clone(),
        PixelType::U8x4,
    )
    .map_err(Error::resize)?;
    let mut dst_image = Image::new(target_width, target_height, PixelType::U8x4);
    resizer
        .resize(&src_image, &mut dst_image, &resize_options)
        .map_err(Error::resize)?;

    RgbaImage::from_raw(target_width, target_height, dst_image.into_vec()).ok_or_else(|| {
        Error::Resize(format!(
            "resampler returned a buffer that does not fit {}x{}",
            target_width, target_height
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn produces_exact_dimensions() {
        let src = RgbaImage::from_pixel(300, 200, Rgba([30, 60, 90, 255]));
        for (w, h) in [(192, 192), (512, 512), (180, 180), (64, 64)] {
            let out = resize_exact(&src, w, h).unwrap();
            assert_eq!(out.dimensions(), (w, h));
        }
    }

    #[test]
    fn solid_color_survives_lanczos() {
        let src = RgbaImage::from_pixel(300, 300, Rgba([200, 40, 40, 255]));
        let out = resize_exact(&src, 64, 64).unwrap();
        for p in out.pixels() {
            for (got, want) in p.0.iter().zip([200u8, 40, 40, 255]) {
                assert!((*got as i16 - want as i16).abs() <= 1, "{:?}", p);
            }
        }
    }

    #[test]
    fn same_size_is_pixel_identical() {
        let src = RgbaImage::from_fn(192, 192, |x, y| {
            Rgba([(x % 256) as u8, (y % 256) as u8, ((x * y) % 256) as u8, 255])
        });
        let out = resize_exact(&src, 192, 192).unwrap();
        assert_eq!(out, src);
    }

    #[test]
    fn zero_target_is_rejected() {
        let src = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        assert!(matches!(
            resize_exact(&src, 0, 16),
            Err(Error::ZeroSize { width: 0, height: 16 })
        ));
    }
}
