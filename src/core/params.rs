use std::collections::HashSet;
use std::path::Path;

use crate::error::{Error, Result};
use crate::types::{GRID_SIZE, IconFormat, IconSlot, IconTarget};

/// Share of each grid cell (measured from the bottom) that holds the text label.
pub const LABEL_FRACTION: f64 = 0.25;

/// Grid slicer parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SliceParams {
    /// Output slots in processing order
    pub icons: Vec<IconSlot>,
}

impl Default for SliceParams {
    fn default() -> Self {
        Self {
            icons: vec![
                IconSlot::new("wechat.png", 0, 0),
                IconSlot::new("search.png", 0, 1),
                IconSlot::new("weibo.png", 0, 2),
                IconSlot::new("settings.png", 1, 0),
                IconSlot::new("worldbook.png", 1, 1),
                IconSlot::new("reset.png", 1, 2),
                IconSlot::new("syslog.png", 2, 0),
                IconSlot::new("couple.png", 2, 1),
                IconSlot::new("games.png", 2, 2),
            ],
        }
    }
}

impl SliceParams {
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for slot in &self.icons {
            validate_filename("icons.filename", &slot.filename)?;
            if slot.row >= GRID_SIZE || slot.col >= GRID_SIZE {
                return Err(Error::SlotOutOfGrid {
                    filename: slot.filename.clone(),
                    row: slot.row,
                    col: slot.col,
                    grid: GRID_SIZE,
                });
            }
            if !seen.insert(slot.filename.as_str()) {
                return Err(Error::DuplicateFilename {
                    filename: slot.filename.clone(),
                });
            }
        }
        Ok(())
    }
}

/// Height of the region kept above the label strip.
pub fn glyph_height(cell_height: u32) -> u32 {
    (cell_height as f64 * (1.0 - LABEL_FRACTION)).floor() as u32
}

/// Batch resizer parameters
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResizeParams {
    /// Outputs in processing order
    pub targets: Vec<IconTarget>,
    /// If true, write an icon manifest sidecar next to the outputs
    pub write_manifest: bool,
}

impl Default for ResizeParams {
    fn default() -> Self {
        Self {
            targets: vec![
                IconTarget::new("pwa-192x192.png", 192, 192, IconFormat::Png),
                IconTarget::new("pwa-512x512.png", 512, 512, IconFormat::Png),
                IconTarget::new("apple-touch-icon.png", 180, 180, IconFormat::Png),
                IconTarget::new("favicon.ico", 64, 64, IconFormat::Ico),
            ],
            write_manifest: false,
        }
    }
}

impl ResizeParams {
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for target in &self.targets {
            validate_filename("targets.filename", &target.filename)?;
            if target.width == 0 || target.height == 0 {
                return Err(Error::ZeroSize {
                    width: target.width,
                    height: target.height,
                });
            }
            // ICO directory entries store each side in a single byte (0 means 256)
            if target.format == IconFormat::Ico && (target.width > 256 || target.height > 256) {
                return Err(Error::InvalidArgument {
                    arg: "targets.size",
                    value: format!("{} for ICO {}", target.sizes(), target.filename),
                });
            }
            if !seen.insert(target.filename.as_str()) {
                return Err(Error::DuplicateFilename {
                    filename: target.filename.clone(),
                });
            }
        }
        Ok(())
    }
}

fn validate_filename(arg: &'static str, filename: &str) -> Result<()> {
    let path = Path::new(filename);
    let is_plain = path.components().count() == 1 && path.file_name().is_some();
    if filename.is_empty() || !is_plain {
        return Err(Error::InvalidArgument {
            arg,
            value: filename.to_string(),
        });
    }
    Ok(())
}
