use image::RgbaImage;
use image::imageops::crop_imm;
use tracing::debug;

use crate::core::params::glyph_height;
use crate::core::processing::bbox::content_bbox;
use crate::core::processing::grid::grid_cell;
use crate::core::processing::padding::pad_to_square;
use crate::types::IconSlot;

/// Cut one icon out of the sheet: crop the cell, look for content above the label strip,
/// trim to it and center the result on a transparent square.
///
/// Returns `None` when nothing but background sits above the label strip.
pub fn slice_cell(sheet: &RgbaImage, slot: &IconSlot) -> Option<RgbaImage> {
    let cell = grid_cell(sheet, slot.row, slot.col);
    let (cell_w, cell_h) = cell.dimensions();
    let glyph_h = glyph_height(cell_h);

    let glyph_region = crop_imm(&cell, 0, 0, cell_w, glyph_h).to_image();
    let bbox = content_bbox(&glyph_region)?;
    debug!(
        "{}: cell {}x{}, glyph region {}x{}, bbox {}",
        slot.filename, cell_w, cell_h, cell_w, glyph_h, bbox
    );

    let content = crop_imm(&cell, bbox.left, bbox.top, bbox.width(), bbox.height()).to_image();
    Some(pad_to_square(&content))
}
