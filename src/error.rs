use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced while stripping a background.
///
/// The path is set when the image came from, or was headed to, a file.
#[derive(Debug, Error)]
pub enum StripError {
    #[error("failed to decode input image{}", at(.0))]
    Decode(Option<PathBuf>, #[source] image::ImageError),

    #[error("failed to encode output image{}", at(.0))]
    Encode(Option<PathBuf>, #[source] image::ImageError),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl StripError {
    /// Attach a file path to a decode or encode error that has none yet
    pub fn with_path(self, path: &Path) -> Self {
        match self {
            StripError::Decode(None, e) => StripError::Decode(Some(path.to_path_buf()), e),
            StripError::Encode(None, e) => StripError::Encode(Some(path.to_path_buf()), e),
            other => other,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            StripError::Decode(path, _) | StripError::Encode(path, _) => path.as_deref(),
            StripError::InvalidArgument(_) => None,
        }
    }
}

fn at(path: &Option<PathBuf>) -> String {
    match path {
        Some(path) => format!(" `{}`", path.display()),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, StripError>;
