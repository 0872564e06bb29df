use std::path::PathBuf;

use thiserror::Error;

/// Application-specific errors for the CLI
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Input image not found: {path:?}")]
    InputNotFound { path: PathBuf },

    #[error("{0}")]
    Library(#[from] iconkit::Error),
}
