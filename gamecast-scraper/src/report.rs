use std::path::PathBuf;

use crate::error::ScrapeError;

/// Outcome of scraping one channel.
#[derive(Debug)]
pub enum ChannelOutcome {
    Written {
        channel: String,
        path: PathBuf,
        videos: usize,
    },
    Failed {
        channel: String,
        error: ScrapeError,
    },
}

impl ChannelOutcome {
    pub fn channel(&self) -> &str {
        match self {
            Self::Written { channel, .. } | Self::Failed { channel, .. } => channel,
        }
    }
}

/// Collects per-channel outcomes of a multi-channel scrape.
#[derive(Debug, Default)]
pub struct ScrapeReport {
    entries: Vec<ChannelOutcome>,
}

impl ScrapeReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: ChannelOutcome) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[ChannelOutcome] {
        &self.entries
    }

    pub fn summary(&self) -> ReportSummary {
        let mut summary = ReportSummary::default();
        for entry in &self.entries {
            match entry {
                ChannelOutcome::Written { videos, .. } => {
                    summary.channels_written += 1;
                    summary.videos += videos;
                }
                ChannelOutcome::Failed { .. } => summary.channels_failed += 1,
            }
        }
        summary
    }

    /// Turn the report into an error when any channel failed.
    ///
    /// Every failure is carried in [`ScrapeError::ChannelsFailed`]; output of
    /// the successful channels is already on disk either way.
    pub fn into_result(self) -> Result<ReportSummary, ScrapeError> {
        let summary = self.summary();
        if summary.channels_failed == 0 {
            return Ok(summary);
        }

        let total = self.entries.len();
        let failures = self
            .entries
            .into_iter()
            .filter_map(|entry| match entry {
                ChannelOutcome::Failed { channel, error } => Some((channel, error)),
                ChannelOutcome::Written { .. } => None,
            })
            .collect();
        Err(ScrapeError::ChannelsFailed { total, failures })
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ReportSummary {
    pub channels_written: usize,
    pub channels_failed: usize,
    pub videos: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_are_reported_together() {
        let mut report = ScrapeReport::new();
        report.add(ChannelOutcome::Written {
            channel: "UC1".to_string(),
            path: PathBuf::from("data/UC1.csv"),
            videos: 3,
        });
        report.add(ChannelOutcome::Failed {
            channel: "UC2".to_string(),
            error: ScrapeError::SourceNotFound("YouTube channel \"UC2\"".to_string()),
        });
        report.add(ChannelOutcome::Failed {
            channel: "UC3".to_string(),
            error: ScrapeError::api("boom"),
        });

        assert_eq!(
            report.summary(),
            ReportSummary {
                channels_written: 1,
                channels_failed: 2,
                videos: 3
            }
        );

        let err = report.into_result().unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("2 of 3 channels failed"), "{message}");
        assert!(message.contains("UC2: Source not found"));
        assert!(message.contains("UC3: API error: boom"));
    }

    #[test]
    fn clean_report_is_ok() {
        let mut report = ScrapeReport::new();
        report.add(ChannelOutcome::Written {
            channel: "UC1".to_string(),
            path: PathBuf::from("data/UC1.csv"),
            videos: 0,
        });
        let summary = report.into_result().unwrap();
        assert_eq!(summary.channels_written, 1);
    }
}
