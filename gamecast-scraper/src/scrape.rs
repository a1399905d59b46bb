use std::path::{Path, PathBuf};

use gamecast_catalog::{SourceTag, VideoRecord, save_videos_csv};

use crate::error::ScrapeError;
use crate::report::{ChannelOutcome, ScrapeReport};

/// A content platform that can list the videos of a channel.
pub trait VideoSource {
    /// Tag stamped on every video this source produces.
    fn platform(&self) -> SourceTag;

    /// Fetch every video of `channel_id`.
    ///
    /// Fails with [`ScrapeError::SourceNotFound`] when the channel does not
    /// exist.
    fn videos(&self, channel_id: &str) -> Result<Vec<VideoRecord>, ScrapeError>;
}

/// Progress events emitted while scraping, consumed by the CLI.
#[derive(Debug, Clone)]
pub enum ScrapeEvent {
    ChannelStarted {
        index: usize,
        total: usize,
        channel: String,
    },
    ChannelWritten {
        channel: String,
        path: PathBuf,
        videos: usize,
    },
    ChannelFailed {
        channel: String,
        reason: String,
    },
}

/// Path of the video CSV written for a channel.
pub fn channel_csv_path(output_dir: &Path, channel_id: &str) -> PathBuf {
    output_dir.join(format!("{channel_id}.csv"))
}

/// Scrape every channel into `<output_dir>/<channel>.csv`.
///
/// A failing channel does not stop the others; its error is recorded in the
/// returned report. Only failing to create `output_dir` aborts the run.
pub fn scrape_channels(
    source: &dyn VideoSource,
    output_dir: &Path,
    channel_ids: &[String],
    mut on_event: impl FnMut(ScrapeEvent),
) -> Result<ScrapeReport, ScrapeError> {
    std::fs::create_dir_all(output_dir)?;

    let mut report = ScrapeReport::new();
    for (index, channel) in channel_ids.iter().enumerate() {
        on_event(ScrapeEvent::ChannelStarted {
            index,
            total: channel_ids.len(),
            channel: channel.clone(),
        });

        match scrape_channel(source, output_dir, channel) {
            Ok((path, videos)) => {
                log::debug!("Wrote {videos} videos to {}", path.display());
                on_event(ScrapeEvent::ChannelWritten {
                    channel: channel.clone(),
                    path: path.clone(),
                    videos,
                });
                report.add(ChannelOutcome::Written {
                    channel: channel.clone(),
                    path,
                    videos,
                });
            }
            Err(error) => {
                log::debug!("Scraping {} channel {channel} failed: {error}", source.platform());
                on_event(ScrapeEvent::ChannelFailed {
                    channel: channel.clone(),
                    reason: error.to_string(),
                });
                report.add(ChannelOutcome::Failed {
                    channel: channel.clone(),
                    error,
                });
            }
        }
    }

    Ok(report)
}

fn scrape_channel(
    source: &dyn VideoSource,
    output_dir: &Path,
    channel: &str,
) -> Result<(PathBuf, usize), ScrapeError> {
    let videos = source.videos(channel)?;
    let path = channel_csv_path(output_dir, channel);
    save_videos_csv(&path, &videos)?;
    Ok((path, videos.len()))
}
