use gamecast_catalog::CatalogError;
use thiserror::Error;

/// Errors that can occur while converting videos into games.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// Window parameters that cannot describe a sliding window
    #[error("Invalid window configuration: {0}")]
    InvalidWindow(String),

    #[error("Cannot read video directory {path}: {source}")]
    VideoDir {
        path: String,
        source: std::io::Error,
    },

    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

impl ConvertError {
    pub fn invalid_window(msg: impl Into<String>) -> Self {
        Self::InvalidWindow(msg.into())
    }

    pub fn video_dir(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::VideoDir {
            path: path.display().to_string(),
            source,
        }
    }
}
