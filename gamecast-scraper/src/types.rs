use std::collections::HashMap;

use serde::Deserialize;

// ── YouTube Data API v3 ─────────────────────────────────────────────────────

/// Response of `channels?part=contentDetails`.
#[derive(Debug, Deserialize)]
pub struct ChannelListResponse {
    #[serde(default)]
    pub items: Vec<Channel>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Channel {
    pub content_details: ChannelContentDetails,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChannelContentDetails {
    pub related_playlists: RelatedPlaylists,
}

#[derive(Debug, Deserialize)]
pub struct RelatedPlaylists {
    /// ID of the playlist holding every upload of the channel.
    pub uploads: String,
}

/// One page of `playlistItems?part=snippet`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemListResponse {
    #[serde(default)]
    pub items: Vec<PlaylistItem>,
    #[serde(default)]
    pub next_page_token: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct PlaylistItem {
    pub snippet: PlaylistItemSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaylistItemSnippet {
    #[serde(default)]
    pub published_at: String,
    #[serde(default)]
    pub channel_id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub resource_id: ResourceId,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceId {
    #[serde(default)]
    pub video_id: String,
}

/// Error envelope returned by Google APIs on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct GoogleErrorResponse {
    pub error: GoogleError,
}

#[derive(Debug, Deserialize)]
pub struct GoogleError {
    #[serde(default)]
    pub message: String,
}

// ── Steam storefront ────────────────────────────────────────────────────────

/// Response of `appdetails?appids=<id>`, keyed by app ID.
pub type AppDetailsResponse = HashMap<String, AppDetails>;

#[derive(Debug, Deserialize)]
pub struct AppDetails {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub data: Option<AppData>,
}

#[derive(Debug, Deserialize)]
pub struct AppData {
    #[serde(default)]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn playlist_page_parses() {
        let json = r#"{
            "kind": "youtube#playlistItemListResponse",
            "nextPageToken": "CAUQAA",
            "items": [{
                "snippet": {
                    "publishedAt": "2010-10-19T19:00:17Z",
                    "channelId": "UCYJ61XIK64sp6ZFFS8sctxw",
                    "title": "Let's Play Minecraft #001",
                    "description": "",
                    "resourceId": {"kind": "youtube#video", "videoId": "DM52HxaLK-Y"}
                }
            }]
        }"#;
        let page: PlaylistItemListResponse = serde_json::from_str(json).unwrap();
        assert_eq!(page.next_page_token.as_deref(), Some("CAUQAA"));
        assert_eq!(page.items[0].snippet.resource_id.video_id, "DM52HxaLK-Y");
    }

    #[test]
    fn failed_app_details_have_no_data() {
        let json = r#"{"1": {"success": false}}"#;
        let response: AppDetailsResponse = serde_json::from_str(json).unwrap();
        assert!(!response["1"].success);
        assert!(response["1"].data.is_none());
    }
}
