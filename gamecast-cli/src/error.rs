use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    #[error(transparent)]
    Catalog(#[from] gamecast_catalog::CatalogError),

    #[error(transparent)]
    Convert(#[from] gamecast_convert::ConvertError),

    #[error(transparent)]
    Scrape(#[from] gamecast_scraper::ScrapeError),

    /// Input catalog does not exist
    #[error("Catalog not found: {}", .0.display())]
    MissingCatalog(PathBuf),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
