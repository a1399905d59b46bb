use thiserror::Error;

/// Errors that can occur while reading or writing catalog and video files.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// I/O error on a named file
    #[error("I/O error on {path}: {source}")]
    File {
        path: String,
        source: std::io::Error,
    },

    /// I/O error on an anonymous reader or writer
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A source tag outside the configured allow-list
    #[error("Unknown source type {0:?}")]
    UnknownSource(String),

    /// The allow-list of source tags is empty
    #[error("No known source types configured")]
    NoKnownSources,

    #[error("Empty CSV data")]
    EmptyCsv,

    #[error("Invalid CSV header: {0}")]
    InvalidHeader(String),
}

impl CatalogError {
    pub fn file(path: &std::path::Path, source: std::io::Error) -> Self {
        Self::File {
            path: path.display().to_string(),
            source,
        }
    }
}
