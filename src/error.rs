use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by the starfield pipeline. None of them are retried.
#[derive(Debug, Error)]
pub enum StarfieldError {
    /// The input could not be opened or decoded as an image
    #[error("failed to load image {}: {source}", .path.display())]
    ImageLoad {
        /// Path that was requested
        path: PathBuf,
        /// Underlying decoder or I/O failure
        #[source]
        source: image::ImageError,
    },

    /// More stars were requested than the filled shape has pixels
    #[error("cannot sample {requested} stars without replacement from {available} shape pixels")]
    InsufficientPoints {
        /// Requested sample size
        requested: usize,
        /// Foreground pixels available in the filled mask
        available: usize,
    },

    /// A star count of zero was configured
    #[error("star count must be positive")]
    InvalidStarCount,

    /// The plotting backend failed
    #[error("failed to render starfield: {0}")]
    Render(String),

    /// Writing an export file failed
    #[error("failed to write star export: {0}")]
    Export(#[from] std::io::Error),

    /// JSON encoding failed
    #[error("failed to encode star export: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StarfieldError {
    /// True when the failure came from the filesystem rather than decoding
    pub fn is_io(&self) -> bool {
        matches!(
            self,
            StarfieldError::ImageLoad {
                source: image::ImageError::IoError(_),
                ..
            } | StarfieldError::Export(_)
        )
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, StarfieldError>;
