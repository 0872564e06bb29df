//! Content detection for icon cells.
//!
//! A cell is treated as dark-on-white: transparency is flattened onto white, the result is
//! reduced to luma and inverted, and every non-zero pixel counts as content.
use image::{GrayImage, Luma, RgbaImage};

use crate::types::BoundingBox;

/// Composite one channel over opaque white.
fn over_white(channel: u8, alpha: u8) -> u8 {
    let c = channel as u32;
    let a = alpha as u32;
    ((c * a + 255 * (255 - a) + 127) / 255) as u8
}

/// ITU-R 601-2 luma in 16.16 fixed point.
fn luma(r: u8, g: u8, b: u8) -> u8 {
    ((r as u32 * 19595 + g as u32 * 38470 + b as u32 * 7471 + 0x8000) >> 16) as u8
}

/// Flatten onto white, convert to grayscale and invert. White background maps to 0.
pub fn inverted_luma(region: &RgbaImage) -> GrayImage {
    GrayImage::from_fn(region.width(), region.height(), |x, y| {
        let [r, g, b, a] = region.get_pixel(x, y).0;
        let l = luma(over_white(r, a), over_white(g, a), over_white(b, a));
        Luma([255 - l])
    })
}

/// Bounding box of non-zero pixels, or `None` when the mask is empty.
pub fn nonzero_bbox(mask: &GrayImage) -> Option<BoundingBox> {
    let mut found: Option<BoundingBox> = None;
    for (x, y, pixel) in mask.enumerate_pixels() {
        if pixel.0[0] == 0 {
            continue;
        }
        found = Some(match found {
            None => BoundingBox {
                left: x,
                top: y,
                right: x + 1,
                bottom: y + 1,
            },
            Some(b) => BoundingBox {
                left: b.left.min(x),
                top: b.top.min(y),
                right: b.right.max(x + 1),
                bottom: b.bottom.max(y + 1),
            },
        });
    }
    found
}

/// Tightest box around everything in `region` that is not (effectively) white.
pub fn content_bbox(region: &RgbaImage) -> Option<BoundingBox> {
    nonzero_bbox(&inverted_luma(region))
}
