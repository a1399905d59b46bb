//! CSV encoding of scraped video records.
//!
//! Scrapers write one file per channel; the converter reads every file in a
//! directory. Rows with a malformed publish timestamp or source are skipped
//! with a warning so one bad row never discards a whole channel.

use std::io::{Read, Write};
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::error::CatalogError;
use crate::types::{SourceTag, VideoRecord};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct VideoRow {
    #[serde(rename = "VideoID")]
    video_id: String,
    title: String,
    description: String,
    link: String,
    published_at: String,
    #[serde(rename = "ChannelID")]
    channel_id: String,
    source: String,
}

impl From<&VideoRecord> for VideoRow {
    fn from(video: &VideoRecord) -> Self {
        Self {
            video_id: video.video_id.clone(),
            title: video.title.clone(),
            description: video.description.clone(),
            link: video.link.clone(),
            published_at: video.published_at.to_rfc3339_opts(SecondsFormat::AutoSi, true),
            channel_id: video.channel_id.clone(),
            source: video.source.to_string(),
        }
    }
}

impl VideoRow {
    fn into_record(self) -> Result<VideoRecord, String> {
        let published_at = DateTime::parse_from_rfc3339(&self.published_at)
            .map_err(|e| format!("invalid publish timestamp '{}': {e}", self.published_at))?
            .with_timezone(&Utc);
        let source: SourceTag = self.source.parse().map_err(|e| format!("{e}"))?;

        Ok(VideoRecord {
            video_id: self.video_id,
            title: self.title,
            description: self.description,
            link: self.link,
            published_at,
            channel_id: self.channel_id,
            source,
        })
    }
}

/// Write video records as CSV with a header row.
pub fn write_videos_csv<W: Write>(writer: W, videos: &[VideoRecord]) -> Result<(), CatalogError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for video in videos {
        csv_writer.serialize(VideoRow::from(video))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Read video records from CSV, skipping malformed rows.
pub fn read_videos_csv<R: Read>(reader: R) -> Result<Vec<VideoRecord>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(reader);

    let mut videos = Vec::new();
    for (line, result) in csv_reader.deserialize::<VideoRow>().enumerate() {
        let row = match result {
            Ok(r) => r,
            Err(e) => {
                log::warn!("Skipping malformed video CSV row {}: {e}", line + 2);
                continue;
            }
        };
        let video_id = row.video_id.clone();
        match row.into_record() {
            Ok(video) => videos.push(video),
            Err(e) => log::warn!("Skipping video {video_id}: {e}"),
        }
    }

    Ok(videos)
}

/// Load the video records stored at `path`.
pub fn load_videos_csv(path: &Path) -> Result<Vec<VideoRecord>, CatalogError> {
    let file = std::fs::File::open(path).map_err(|e| CatalogError::file(path, e))?;
    read_videos_csv(std::io::BufReader::new(file))
}

/// Save video records to `path`, replacing any existing file.
pub fn save_videos_csv(path: &Path, videos: &[VideoRecord]) -> Result<(), CatalogError> {
    let file = std::fs::File::create(path).map_err(|e| CatalogError::file(path, e))?;
    write_videos_csv(std::io::BufWriter::new(file), videos)
}
