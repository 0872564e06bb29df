//! High-level, ergonomic library API: slice an icon sheet or resize a source image, either
//! to in-memory buffers or straight into an output directory. Prefer these entrypoints
//! over the low-level processing modules when integrating iconkit.
use std::path::{Path, PathBuf};

use image::RgbaImage;
use tracing::{info, warn};

use crate::core::params::{ResizeParams, SliceParams};
use crate::core::processing::pipeline::slice_cell;
use crate::core::processing::resize::resize_exact;
use crate::core::processing::save::save_icon;
use crate::error::Result;
use crate::io::load_rgba;
use crate::io::writers::manifest::write_icon_manifest;
use crate::types::{IconFormat, IconSlot, IconTarget};

/// One squared icon cut from a sheet
#[derive(Debug, Clone)]
pub struct SlicedIcon {
    pub filename: String,
    pub image: RgbaImage,
}

/// Result of in-memory slicing
#[derive(Debug, Clone, Default)]
pub struct SlicedSheet {
    pub icons: Vec<SlicedIcon>,
    /// Slots with nothing but background above the label strip
    pub skipped: Vec<IconSlot>,
}

/// One resized output held in memory
#[derive(Debug, Clone)]
pub struct ResizedIcon {
    pub target: IconTarget,
    pub image: RgbaImage,
}

/// What a slicing run wrote to disk
#[derive(Debug, Clone, Default)]
pub struct SliceReport {
    pub written: Vec<PathBuf>,
    /// Slots with nothing but background above the label strip
    pub skipped: Vec<IconSlot>,
}

/// What a resize run wrote to disk
#[derive(Debug, Clone, Default)]
pub struct ResizeReport {
    pub written: Vec<PathBuf>,
    pub manifest: Option<PathBuf>,
}

/// Slice an already decoded sheet (no disk I/O)
pub fn slice_image(sheet: &RgbaImage, params: &SliceParams) -> Result<SlicedSheet> {
    params.validate()?;

    let mut result = SlicedSheet::default();
    for slot in &params.icons {
        match slice_cell(sheet, slot) {
            Some(image) => result.icons.push(SlicedIcon {
                filename: slot.filename.clone(),
                image,
            }),
            None => result.skipped.push(slot.clone()),
        }
    }
    Ok(result)
}

/// Slice the sheet at `input` and write one PNG per non-empty slot into `output_dir`.
///
/// Icons are written as soon as they are cut, so files saved before a failure stay on disk.
pub fn slice_sheet_to_dir(
    input: &Path,
    output_dir: &Path,
    params: &SliceParams,
) -> Result<SliceReport> {
    params.validate()?;
    let sheet = load_rgba(input)?;
    std::fs::create_dir_all(output_dir)?;

    info!("Slicing {:?} into {:?}", input, output_dir);

    let mut report = SliceReport::default();
    for slot in &params.icons {
        match slice_cell(&sheet, slot) {
            Some(icon) => {
                let path = output_dir.join(&slot.filename);
                save_icon(&icon, &path, IconFormat::Png)?;
                info!("Saved refined {}", slot.filename);
                report.written.push(path);
            }
            None => {
                warn!("Empty cell for {}", slot.filename);
                report.skipped.push(slot.clone());
            }
        }
    }

    info!(
        "Slicing complete: {} written, {} skipped",
        report.written.len(),
        report.skipped.len()
    );
    Ok(report)
}

/// Resize an already decoded image to every target (no disk I/O)
pub fn resize_to_targets(source: &RgbaImage, params: &ResizeParams) -> Result<Vec<ResizedIcon>> {
    params.validate()?;

    params
        .targets
        .iter()
        .map(|target| {
            let image = resize_exact(source, target.width, target.height)?;
            Ok(ResizedIcon {
                target: target.clone(),
                image,
            })
        })
        .collect()
}

/// Resize the image at `input` to every target and save each under its fixed filename.
///
/// With `params.write_manifest` the icon manifest sidecar is written after the last target.
pub fn resize_source_to_dir(
    input: &Path,
    output_dir: &Path,
    params: &ResizeParams,
) -> Result<ResizeReport> {
    params.validate()?;
    let source = load_rgba(input)?;
    std::fs::create_dir_all(output_dir)?;

    info!("Generating {} icons into {:?}", params.targets.len(), output_dir);

    let mut report = ResizeReport::default();
    for target in &params.targets {
        let resized = resize_exact(&source, target.width, target.height)?;
        let path = output_dir.join(&target.filename);
        save_icon(&resized, &path, target.format)?;
        report.written.push(path);
    }

    if params.write_manifest {
        report.manifest = Some(write_icon_manifest(output_dir, &params.targets)?);
    }

    info!("Icons generated successfully.");
    Ok(report)
}
