#![doc = r#"
iconkit — app icon generation from a single source image.

Two independent pipelines:

- **Grid slicer**: cuts a 3x3 icon sheet into nine named icons. Each cell loses its bottom
  label strip, is trimmed to the bounding box of its non-white content, and is centered on
  a transparent square canvas.
- **Batch resizer**: resizes one source image to the PWA icons (192x192, 512x512), the
  Apple touch icon (180x180) and a 64x64 favicon.

Both power the `iconkit` CLI and can be embedded in your own Rust applications.

Slice a sheet into a directory
------------------------------
```rust,no_run
use std::path::Path;
use iconkit::{slice_sheet_to_dir, SliceParams};

fn main() -> iconkit::Result<()> {
    let report = slice_sheet_to_dir(
        Path::new("public/icon-sheet.png"),
        Path::new("public/icons"),
        &SliceParams::default(),
    )?;

    println!("written={} skipped={}", report.written.len(), report.skipped.len());
    Ok(())
}
```

Resize a source image into the web icon set
-------------------------------------------
```rust,no_run
use std::path::Path;
use iconkit::{resize_source_to_dir, ResizeParams};

fn main() -> iconkit::Result<()> {
    let params = ResizeParams {
        write_manifest: true,
        ..ResizeParams::default()
    };

    resize_source_to_dir(
        Path::new("public/icon-source.jpg"),
        Path::new("public"),
        &params,
    )?;
    Ok(())
}
```

Work in memory
--------------
```rust
use image::{Rgba, RgbaImage};
use iconkit::{resize_to_targets, slice_image, ResizeParams, SliceParams};

fn main() -> iconkit::Result<()> {
    let sheet = RgbaImage::from_pixel(300, 300, Rgba([255, 255, 255, 255]));
    let sliced = slice_image(&sheet, &SliceParams::default())?;
    assert!(sliced.icons.is_empty());
    assert_eq!(sliced.skipped.len(), 9);

    let icons = resize_to_targets(&sheet, &ResizeParams::default())?;
    assert_eq!(icons.len(), 4);
    Ok(())
}
```

Error handling
--------------
All public functions return `iconkit::Result<T>`; match on `iconkit::Error` to handle
specific cases, e.g. decode failures or invalid slot tables.

Useful modules
--------------
- [`api`] — high-level, ergonomic entry points.
- [`types`] — slots, targets, formats and bounding boxes.
- [`core`] — grid, bounding box, padding and resampling primitives.
- [`io`] — image decoding and PNG/ICO/manifest writers.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod api;
pub mod core;
pub mod error;
pub mod io;
pub mod types;

// Curated public API surface
pub use crate::core::params::{ResizeParams, SliceParams};
pub use error::{Error, Result};
pub use types::{BoundingBox, GRID_SIZE, IconFormat, IconSlot, IconTarget};

pub use crate::core::processing::bbox::content_bbox;
pub use crate::core::processing::grid::grid_cell;
pub use crate::core::processing::padding::pad_to_square;
pub use crate::core::processing::pipeline::slice_cell;
pub use crate::core::processing::resize::resize_exact;

pub use api::{
    ResizeReport, ResizedIcon, SliceReport, SlicedIcon, SlicedSheet, resize_source_to_dir,
    resize_to_targets, slice_image, slice_sheet_to_dir,
};
