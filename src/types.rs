//! Shared types and enums used across iconkit.
//! Includes grid slots (`IconSlot`), resize targets (`IconTarget`), output containers
//! (`IconFormat`) and `BoundingBox`.

/// Side length of the icon sheet grid (rows == columns).
pub const GRID_SIZE: u32 = 3;

/// One named cell of the icon sheet.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct IconSlot {
    pub filename: String,
    pub row: u32,
    pub col: u32,
}

impl IconSlot {
    pub fn new(filename: impl Into<String>, row: u32, col: u32) -> Self {
        Self {
            filename: filename.into(),
            row,
            col,
        }
    }
}

/// One fixed-size output of the batch resizer.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct IconTarget {
    pub filename: String,
    pub width: u32,
    pub height: u32,
    pub format: IconFormat,
}

impl IconTarget {
    pub fn new(filename: impl Into<String>, width: u32, height: u32, format: IconFormat) -> Self {
        Self {
            filename: filename.into(),
            width,
            height,
            format,
        }
    }

    /// `"WxH"`, as used by web app manifests.
    pub fn sizes(&self) -> String {
        format!("{}x{}", self.width, self.height)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum IconFormat {
    Png,
    /// Single-entry ICO directory holding one raster
    Ico,
}

impl IconFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            IconFormat::Png => "image/png",
            IconFormat::Ico => "image/x-icon",
        }
    }
}

impl std::fmt::Display for IconFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconFormat::Png => write!(f, "PNG"),
            IconFormat::Ico => write!(f, "ICO"),
        }
    }
}

/// Tight rectangle around content pixels. `right` and `bottom` are exclusive.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct BoundingBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl BoundingBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

impl std::fmt::Display for BoundingBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.left, self.top, self.right, self.bottom
        )
    }
}
