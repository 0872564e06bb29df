//! Crate-level error type and `Result` alias for stable, structured error handling.
//! Converts underlying I/O, image codec, and JSON errors, and provides semantic variants
//! for parameter validation and resampling failures.
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Resize error: {0}")]
    Resize(String),

    #[error("Invalid argument: {arg}={value}")]
    InvalidArgument { arg: &'static str, value: String },

    #[error("Size must be greater than 0, got: {width}x{height}")]
    ZeroSize { width: u32, height: u32 },

    #[error("Slot {filename} at row {row}, column {col} lies outside the {grid}x{grid} grid")]
    SlotOutOfGrid {
        filename: String,
        row: u32,
        col: u32,
        grid: u32,
    },

    #[error("Duplicate output filename: {filename}")]
    DuplicateFilename { filename: String },
}

impl Error {
    pub fn resize<E: std::fmt::Display>(e: E) -> Self {
        Error::Resize(e.to_string())
    }
}
