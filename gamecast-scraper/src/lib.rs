//! Collaborators that talk to the outside world: the YouTube video source,
//! the Steam title lookup, multi-channel scraping into video CSVs, and the
//! user's credentials and config file.

pub mod client;
pub mod config;
pub mod credentials;
pub mod error;
pub mod report;
pub mod scrape;
pub mod steam;
pub mod types;
pub mod youtube;

pub use client::{ApiClient, REQUEST_TIMEOUT};
pub use config::{
    ConfigFile, ConvertConfig, YouTubeConfig, config_path, load_config, read_config,
};
pub use credentials::{API_KEY_ENV, ApiKey, CredentialSource, mask, resolve_api_key};
pub use error::ScrapeError;
pub use report::{ChannelOutcome, ReportSummary, ScrapeReport};
pub use scrape::{ScrapeEvent, VideoSource, channel_csv_path, scrape_channels};
pub use steam::{RetryPolicy, STEAM_STORE_API, SteamClient};
pub use youtube::{DEFAULT_PAGE_RESULTS, PageOptions, YOUTUBE_API, YouTubeScraper};
