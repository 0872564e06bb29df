use image::RgbaImage;
use image::imageops::replace;
use tracing::debug;

/// Center `content` on a transparent square canvas whose side is the longer of its sides.
///
/// Content pixels replace the canvas pixels (alpha included); everything outside the
/// pasted region stays fully transparent.
pub fn pad_to_square(content: &RgbaImage) -> RgbaImage {
    let (cols, rows) = content.dimensions();
    let max_dim = cols.max(rows);
    let pad_cols = (max_dim - cols) / 2;
    let pad_rows = (max_dim - rows) / 2;

    debug!(
        "Padding to square: cols={}, rows={}, pad_cols={}, pad_rows={}",
        cols, rows, pad_cols, pad_rows
    );

    let mut canvas = RgbaImage::new(max_dim, max_dim);
    replace(&mut canvas, content, pad_cols as i64, pad_rows as i64);
    canvas
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::Rgba;

    #[test]
    fn wide_content_is_centered_vertically() {
        let content = RgbaImage::from_pixel(10, 4, Rgba([10, 20, 30, 255]));
        let squared = pad_to_square(&content);
        assert_eq!(squared.dimensions(), (10, 10));

        for (_, y, p) in squared.enumerate_pixels() {
            if (3..7).contains(&y) {
                assert_eq!(p.0, [10, 20, 30, 255]);
            } else {
                assert_eq!(p.0[3], 0);
            }
        }
    }

    #[test]
    fn odd_padding_rounds_toward_origin() {
        let content = RgbaImage::from_pixel(2, 5, Rgba([1, 1, 1, 255]));
        let squared = pad_to_square(&content);
        assert_eq!(squared.dimensions(), (5, 5));
        // (5 - 2) / 2 == 1 column of padding on the left, 2 on the right
        assert_eq!(squared.get_pixel(0, 0).0[3], 0);
        assert_eq!(squared.get_pixel(1, 0).0[3], 255);
        assert_eq!(squared.get_pixel(2, 4).0[3], 255);
        assert_eq!(squared.get_pixel(3, 0).0[3], 0);
        assert_eq!(squared.get_pixel(4, 0).0[3], 0);
    }

    #[test]
    fn translucent_content_is_copied_not_blended() {
        let content = RgbaImage::from_pixel(3, 3, Rgba([200, 100, 50, 40]));
        let squared = pad_to_square(&content);
        assert_eq!(squared.dimensions(), (3, 3));
        assert!(squared.pixels().all(|p| p.0 == [200, 100, 50, 40]));
    }
}
