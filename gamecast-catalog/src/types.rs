//! Data model types for the game catalog.
//!
//! These types represent the persistent catalog schema (games and their
//! content entries) and the video records scraped from content platforms.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ── Source ──────────────────────────────────────────────────────────────────

/// Tag identifying the platform a piece of content was published on.
///
/// Tags compare ordinally, which is the order content entries are kept in
/// within a [`Game`].
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SourceTag(String);

impl SourceTag {
    pub const YOUTUBE: &'static str = "youtube";

    pub fn youtube() -> Self {
        Self(Self::YOUTUBE.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// All source tags produced by the bundled scrapers.
    pub fn known() -> Vec<SourceTag> {
        vec![Self::youtube()]
    }
}

impl std::fmt::Display for SourceTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Error returned when parsing an invalid source tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceTagParseError(pub String);

impl std::fmt::Display for SourceTagParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "invalid source tag: '{}'", self.0)
    }
}

impl std::error::Error for SourceTagParseError {}

impl std::str::FromStr for SourceTag {
    type Err = SourceTagParseError;

    /// Tags are lower-cased. Empty tags and tags containing `-` or `,` are
    /// rejected since they could not round-trip through the CSV header.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tag = s.trim().to_lowercase();
        if tag.is_empty() || tag.contains(['-', ',']) || tag.contains(char::is_whitespace) {
            return Err(SourceTagParseError(s.to_string()));
        }
        Ok(Self(tag))
    }
}

impl TryFrom<String> for SourceTag {
    type Error = SourceTagParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<SourceTag> for String {
    fn from(tag: SourceTag) -> Self {
        tag.0
    }
}

// ── Video ───────────────────────────────────────────────────────────────────

/// A single video or stream as reported by a content platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoRecord {
    /// Platform-unique identifier of the video.
    pub video_id: String,
    pub title: String,
    pub description: String,
    /// Full URL to the video.
    pub link: String,
    pub published_at: DateTime<Utc>,
    /// Identifier of the channel/creator that published the video.
    pub channel_id: String,
    pub source: SourceTag,
}

// ── Game ────────────────────────────────────────────────────────────────────

/// A game and the content produced with it, at most one entry per source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Game {
    pub name: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub content: Vec<ContentEntry>,
}

impl Game {
    pub fn new(name: impl Into<String>, content: Vec<ContentEntry>) -> Self {
        Self {
            name: name.into(),
            content,
        }
    }

    /// The content entry for a given source, if any.
    pub fn content_for(&self, source: &SourceTag) -> Option<&ContentEntry> {
        self.content.iter().find(|c| &c.source == source)
    }

    /// Stable-sort content entries by source tag.
    pub fn sort_content(&mut self) {
        self.content.sort_by(|a, b| a.source.cmp(&b.source));
    }
}

/// The earliest known appearance of a game on one platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ContentEntry {
    pub link: String,
    pub start: DateTime<Utc>,
    pub source: SourceTag,
}

impl ContentEntry {
    pub fn from_video(video: &VideoRecord) -> Self {
        Self {
            link: video.link.clone(),
            start: video.published_at,
            source: video.source.clone(),
        }
    }
}

/// Older catalogs were written with `"Content": null` for games without entries.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<ContentEntry>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<ContentEntry>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_tag_parses_lowercase() {
        let tag: SourceTag = " YouTube ".parse().unwrap();
        assert_eq!(tag, SourceTag::youtube());
        assert_eq!(tag.to_string(), "youtube");
    }

    #[test]
    fn source_tag_rejects_header_separators() {
        assert!("you-tube".parse::<SourceTag>().is_err());
        assert!("a,b".parse::<SourceTag>().is_err());
        assert!("".parse::<SourceTag>().is_err());
        assert!("you tube".parse::<SourceTag>().is_err());
    }

    #[test]
    fn source_tag_deserializes_through_parse() {
        let entry: ContentEntry = serde_json::from_str(
            r#"{"Link": "l", "Start": "2023-01-01T00:00:00Z", "Source": "YouTube"}"#,
        )
        .unwrap();
        assert_eq!(entry.source, SourceTag::youtube());
        assert_eq!(
            serde_json::to_string(&entry.source).unwrap(),
            r#""youtube""#
        );

        let bad = serde_json::from_str::<SourceTag>(r#""you-tube""#);
        assert!(bad.is_err());
    }

    #[test]
    fn content_for_finds_matching_source() {
        let entry = ContentEntry {
            link: "https://www.youtube.com/watch?v=abc".to_string(),
            start: DateTime::parse_from_rfc3339("2023-01-01T00:00:00Z")
                .unwrap()
                .with_timezone(&Utc),
            source: SourceTag::youtube(),
        };
        let game = Game::new("Minecraft", vec![entry.clone()]);
        assert_eq!(game.content_for(&SourceTag::youtube()), Some(&entry));
        assert_eq!(game.content_for(&"twitch".parse().unwrap()), None);
    }

    #[test]
    fn null_content_deserializes_as_empty() {
        let game: Game = serde_json::from_str(r#"{"Name": "Adrift", "Content": null}"#).unwrap();
        assert_eq!(game.name, "Adrift");
        assert!(game.content.is_empty());
    }
}
