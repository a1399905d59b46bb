//! Steam storefront title lookup.

use std::thread;
use std::time::Duration;

use gamecast_convert::{LookupError, TitleLookup};

use crate::client::{ApiClient, endpoint, parse_json};
use crate::error::ScrapeError;
use crate::types::AppDetailsResponse;

pub const STEAM_STORE_API: &str = "https://store.steampowered.com/api/";

/// How often and how patiently rate-limited requests are retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempts, including the first one.
    pub attempts: u32,
    pub delay: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            attempts: 5,
            delay: Duration::from_secs(5),
        }
    }
}

/// Client for the Steam store `appdetails` endpoint.
#[derive(Debug, Clone)]
pub struct SteamClient {
    client: ApiClient,
    base_url: String,
    retry: RetryPolicy,
}

impl SteamClient {
    pub fn new() -> Result<Self, ScrapeError> {
        Ok(Self::with_client(ApiClient::new("Steam")?, STEAM_STORE_API))
    }

    /// Create a client against a different API root.
    pub fn with_client(client: ApiClient, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            retry: RetryPolicy::default(),
        }
    }

    pub fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Look up the store name of an app.
    ///
    /// Rate-limit responses are retried according to the [`RetryPolicy`];
    /// every other failure is returned immediately.
    pub fn app_name(&self, app_id: &str) -> Result<String, ScrapeError> {
        let url = endpoint(&self.base_url, "appdetails");

        let mut attempt = 1;
        let text = loop {
            match self.client.get_text(&url, &[("appids", app_id)]) {
                Err(ScrapeError::RateLimit(service)) => {
                    if attempt >= self.retry.attempts {
                        return Err(ScrapeError::RateLimit(service));
                    }
                    log::warn!(
                        "{service} rate limit reached looking up app {app_id}, retrying in {:?} ({attempt}/{})",
                        self.retry.delay,
                        self.retry.attempts
                    );
                    attempt += 1;
                    thread::sleep(self.retry.delay);
                }
                other => break other?,
            }
        };

        let mut response: AppDetailsResponse = parse_json("Steam", "app details", &text)?;
        match response.remove(app_id) {
            Some(details) if details.success => details
                .data
                .map(|d| d.name)
                .ok_or_else(|| ScrapeError::UnknownId(app_id.to_string())),
            _ => Err(ScrapeError::UnknownId(app_id.to_string())),
        }
    }
}

impl TitleLookup for SteamClient {
    fn service(&self) -> &'static str {
        self.client.service()
    }

    fn game_name(&self, store_id: &str) -> Result<String, LookupError> {
        self.app_name(store_id).map_err(LookupError::from)
    }
}
