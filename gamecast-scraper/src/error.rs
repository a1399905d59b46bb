use gamecast_catalog::CatalogError;
use gamecast_convert::LookupError;

/// Errors that can occur while talking to content platforms and storefronts.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Rate limited by {0}")]
    RateLimit(&'static str),

    #[error("Unknown store ID {0:?}")]
    UnknownId(String),

    /// The channel (or other source) does not exist on the platform
    #[error("Source not found: {0}")]
    SourceNotFound(String),

    #[error("Server error (HTTP {status}): {message}")]
    ServerError { status: u16, message: String },

    #[error("API error: {0}")]
    Api(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// One or more channels of a multi-channel scrape failed
    #[error("{} of {total} channels failed: {}", .failures.len(), format_failures(.failures))]
    ChannelsFailed {
        total: usize,
        failures: Vec<(String, ScrapeError)>,
    },
}

impl ScrapeError {
    pub fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

fn format_failures(failures: &[(String, ScrapeError)]) -> String {
    failures
        .iter()
        .map(|(channel, e)| format!("{channel}: {e}"))
        .collect::<Vec<_>>()
        .join("; ")
}

impl From<ScrapeError> for LookupError {
    fn from(e: ScrapeError) -> Self {
        match e {
            ScrapeError::UnknownId(id) => LookupError::UnknownId(id),
            ScrapeError::RateLimit(_) => LookupError::RateLimited,
            other => LookupError::Transport(other.to_string()),
        }
    }
}
