//! YouTube Data API v3 video source.

use chrono::{DateTime, Utc};
use gamecast_catalog::{SourceTag, VideoRecord};

use crate::client::{ApiClient, endpoint, parse_json};
use crate::error::ScrapeError;
use crate::scrape::VideoSource;
use crate::types::{ChannelListResponse, PlaylistItem, PlaylistItemListResponse};

pub const YOUTUBE_API: &str = "https://www.googleapis.com/youtube/v3/";

/// Maximum results per page the API accepts.
pub const DEFAULT_PAGE_RESULTS: u32 = 50;

/// Paging behaviour of a channel scrape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageOptions {
    /// Results requested per page.
    pub page_results: u32,
    /// Maximum pages read per channel; 0 reads every page.
    pub page_limit: u32,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            page_results: DEFAULT_PAGE_RESULTS,
            page_limit: 0,
        }
    }
}

/// Lists every upload of a channel through its uploads playlist.
#[derive(Debug, Clone)]
pub struct YouTubeScraper {
    client: ApiClient,
    base_url: String,
    api_key: String,
    pages: PageOptions,
}

impl YouTubeScraper {
    pub fn new(api_key: impl Into<String>, pages: PageOptions) -> Result<Self, ScrapeError> {
        Self::with_client(ApiClient::new("YouTube")?, YOUTUBE_API, api_key, pages)
    }

    /// Create a scraper against a different API root.
    pub fn with_client(
        client: ApiClient,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        pages: PageOptions,
    ) -> Result<Self, ScrapeError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ScrapeError::config("YouTube API key is empty"));
        }
        Ok(Self {
            client,
            base_url: base_url.into(),
            api_key,
            pages,
        })
    }

    /// Resolve the uploads playlist of a channel.
    fn uploads_playlist(&self, channel_id: &str) -> Result<String, ScrapeError> {
        let text = self.client.get_text(
            &endpoint(&self.base_url, "channels"),
            &[
                ("part", "contentDetails"),
                ("id", channel_id),
                ("key", self.api_key.as_str()),
            ],
        )?;
        let response: ChannelListResponse = parse_json("YouTube", "channel list", &text)?;
        response
            .items
            .into_iter()
            .next()
            .map(|c| c.content_details.related_playlists.uploads)
            .ok_or_else(|| ScrapeError::SourceNotFound(format!("YouTube channel {channel_id:?}")))
    }

    /// Read the playlist page by page until it is exhausted or the page
    /// limit is reached.
    fn playlist_items(&self, playlist_id: &str) -> Result<Vec<PlaylistItem>, ScrapeError> {
        let url = endpoint(&self.base_url, "playlistItems");
        let page_results = self.pages.page_results.to_string();

        let mut items = Vec::new();
        let mut page_token: Option<String> = None;
        let mut page = 0;
        loop {
            page += 1;
            log::debug!("Fetching playlist {playlist_id} page {page}");

            let mut query = vec![
                ("part", "snippet"),
                ("playlistId", playlist_id),
                ("maxResults", page_results.as_str()),
                ("key", self.api_key.as_str()),
            ];
            if let Some(token) = &page_token {
                query.push(("pageToken", token.as_str()));
            }

            let text = self.client.get_text(&url, &query)?;
            let response: PlaylistItemListResponse =
                parse_json("YouTube", "playlist page", &text)?;
            if response.items.is_empty() {
                break;
            }
            log::debug!(
                "Page {page}: {} videos (first: {:?})",
                response.items.len(),
                response.items[0].snippet.title
            );
            items.extend(response.items);

            page_token = response.next_page_token.filter(|t| !t.is_empty());
            if page_token.is_none() || (self.pages.page_limit != 0 && page >= self.pages.page_limit)
            {
                break;
            }
        }
        Ok(items)
    }
}

impl VideoSource for YouTubeScraper {
    fn platform(&self) -> SourceTag {
        SourceTag::youtube()
    }

    fn videos(&self, channel_id: &str) -> Result<Vec<VideoRecord>, ScrapeError> {
        log::debug!("Scraping YouTube channel {channel_id}");
        let playlist = self.uploads_playlist(channel_id)?;
        let items = self.playlist_items(&playlist)?;

        let mut videos = Vec::with_capacity(items.len());
        for item in items {
            match to_video(item) {
                Ok(video) => videos.push(video),
                Err(e) => log::warn!("{e}"),
            }
        }
        log::debug!("Scraped {} videos from channel {channel_id}", videos.len());
        Ok(videos)
    }
}

fn to_video(item: PlaylistItem) -> Result<VideoRecord, String> {
    let snippet = item.snippet;
    let video_id = snippet.resource_id.video_id;
    let published_at = DateTime::parse_from_rfc3339(&snippet.published_at)
        .map_err(|e| {
            format!(
                "Skipping video {video_id}: invalid publish date {:?}: {e}",
                snippet.published_at
            )
        })?
        .with_timezone(&Utc);

    Ok(VideoRecord {
        link: format!("https://www.youtube.com/watch?v={video_id}"),
        video_id,
        title: snippet.title,
        description: snippet.description,
        published_at,
        channel_id: snippet.channel_id,
        source: SourceTag::youtube(),
    })
}
