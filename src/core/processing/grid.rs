use image::RgbaImage;
use image::imageops::crop_imm;

use crate::types::GRID_SIZE;

/// Width and height of one grid cell: `floor(w / 3) x floor(h / 3)`.
pub fn cell_dimensions(width: u32, height: u32) -> (u32, u32) {
    (width / GRID_SIZE, height / GRID_SIZE)
}

/// Copy of the cell at (`row`, `col`). Pixels past the last full cell are never included.
pub fn grid_cell(image: &RgbaImage, row: u32, col: u32) -> RgbaImage {
    let (cell_w, cell_h) = cell_dimensions(image.width(), image.height());
    crop_imm(image, col * cell_w, row * cell_h, cell_w, cell_h).to_image()
}
