use gamecast_catalog::{Game, VideoRecord, merge_games};

use crate::cluster::cluster_window;
use crate::error::ConvertError;
use crate::lookup::{TitleCache, TitleLookup};
use crate::normalize::normalize;
use crate::window::sliding_windows;

/// Number of videos clustered together when nothing else is configured.
pub const DEFAULT_WINDOW_SIZE: usize = 100;

/// Sliding-window parameters for a conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertOptions {
    /// Number of videos clustered together.
    pub window_size: usize,
    /// Distance between window starts. Defaults to half the window size.
    pub window_step: Option<usize>,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            window_step: None,
        }
    }
}

impl ConvertOptions {
    /// The effective window step.
    pub fn step(&self) -> usize {
        self.window_step.unwrap_or((self.window_size / 2).max(1))
    }

    fn validate(&self) -> Result<(), ConvertError> {
        if self.window_size == 0 {
            return Err(ConvertError::invalid_window("window size must be at least 1"));
        }
        let step = self.step();
        if step == 0 {
            return Err(ConvertError::invalid_window("window step must be at least 1"));
        }
        if step > self.window_size {
            return Err(ConvertError::invalid_window(format!(
                "window step {step} exceeds window size {}",
                self.window_size
            )));
        }
        Ok(())
    }
}

/// Converts video records into games.
///
/// Videos are normalized, clustered in overlapping windows, and the
/// per-window games are folded together in window order with
/// [`merge_games`]. Without a lookup, store links in descriptions are
/// ignored.
pub struct Converter<'a> {
    lookup: Option<&'a dyn TitleLookup>,
    options: ConvertOptions,
}

impl<'a> Converter<'a> {
    /// Create a converter, rejecting window parameters that cannot slide.
    pub fn new(
        lookup: Option<&'a dyn TitleLookup>,
        options: ConvertOptions,
    ) -> Result<Self, ConvertError> {
        options.validate()?;
        Ok(Self { lookup, options })
    }

    pub fn options(&self) -> ConvertOptions {
        self.options
    }

    /// Convert `videos` into games sorted by name.
    ///
    /// The input records are left untouched; clustering works on copies with
    /// normalized titles.
    pub fn convert(
        &self,
        videos: &[VideoRecord],
        cache: &mut TitleCache,
    ) -> Result<Vec<Game>, ConvertError> {
        log::debug!("Cleaning up {} video titles", videos.len());
        let cleaned: Vec<VideoRecord> = videos
            .iter()
            .map(|video| VideoRecord {
                title: normalize(&video.title),
                ..video.clone()
            })
            .collect();

        let size = self.options.window_size;
        let step = self.options.step();
        log::info!(
            "Converting {} videos to games (window {size}, step {step})",
            cleaned.len()
        );

        let mut games = Vec::new();
        for (i, window) in sliding_windows(&cleaned, size, step).enumerate() {
            let window_games = cluster_window(window, self.lookup, cache);
            log::debug!("Window {} produced {} games", i + 1, window_games.len());
            games = merge_games(games, window_games);
        }

        Ok(games)
    }
}
