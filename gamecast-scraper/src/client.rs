use std::time::Duration;

use reqwest::StatusCode;
use reqwest::blocking::{Client, ClientBuilder};

use crate::error::ScrapeError;
use crate::types::GoogleErrorResponse;

/// Timeout applied to every API request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Longest response excerpt quoted in error messages.
const EXCERPT_LEN: usize = 200;

/// Blocking HTTP client shared by the platform APIs.
///
/// Responses are read as text and classified by status: 429 becomes
/// [`ScrapeError::RateLimit`], 5xx [`ScrapeError::ServerError`], and any
/// other non-success [`ScrapeError::Api`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    service: &'static str,
}

impl ApiClient {
    pub fn new(service: &'static str) -> Result<Self, ScrapeError> {
        Self::build(service, Client::builder())
    }

    /// A client that ignores proxy settings, for servers on the local machine.
    pub fn direct(service: &'static str) -> Result<Self, ScrapeError> {
        Self::build(service, Client::builder().no_proxy())
    }

    fn build(service: &'static str, builder: ClientBuilder) -> Result<Self, ScrapeError> {
        let http = builder
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("gamecast/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http, service })
    }

    pub fn service(&self) -> &'static str {
        self.service
    }

    /// GET `url` with query parameters and return the body of a successful
    /// response.
    pub fn get_text(&self, url: &str, query: &[(&str, &str)]) -> Result<String, ScrapeError> {
        log::debug!("GET {url}");
        let resp = self.http.get(url).query(query).send()?;
        let status = resp.status();
        let text = resp.text()?;

        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(ScrapeError::RateLimit(self.service));
        }
        if status.is_server_error() {
            return Err(ScrapeError::ServerError {
                status: status.as_u16(),
                message: error_message(&text),
            });
        }
        if !status.is_success() {
            return Err(ScrapeError::api(format!(
                "{} returned HTTP {}: {}",
                self.service,
                status.as_u16(),
                error_message(&text)
            )));
        }
        Ok(text)
    }
}

/// Parse a JSON body, quoting the start of the body on failure.
pub fn parse_json<T: serde::de::DeserializeOwned>(
    service: &str,
    what: &str,
    text: &str,
) -> Result<T, ScrapeError> {
    serde_json::from_str(text).map_err(|e| {
        ScrapeError::api(format!(
            "Failed to parse {service} {what}: {e}. Response: {}",
            excerpt(text)
        ))
    })
}

/// The message of a Google-style error body, or the start of the body.
fn error_message(text: &str) -> String {
    match serde_json::from_str::<GoogleErrorResponse>(text) {
        Ok(body) if !body.error.message.is_empty() => body.error.message,
        _ => excerpt(text).to_string(),
    }
}

fn excerpt(text: &str) -> &str {
    match text.char_indices().nth(EXCERPT_LEN) {
        Some((i, _)) => &text[..i],
        None => text,
    }
}

/// Join a base URL and an endpoint, tolerating a missing trailing slash.
pub fn endpoint(base_url: &str, path: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), path)
}
