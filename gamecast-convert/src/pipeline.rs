//! Directory-level conversion: video CSV dumps in, catalog JSON out.

use std::path::{Path, PathBuf};

use gamecast_catalog::{VideoRecord, load_catalog, load_videos_csv, merge_games, save_catalog};

use crate::convert::Converter;
use crate::error::ConvertError;
use crate::lookup::TitleCache;

/// What a directory conversion did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConvertSummary {
    pub files: usize,
    pub videos: usize,
    /// Games produced from the videos alone.
    pub converted_games: usize,
    /// Games in the written catalog.
    pub catalog_games: usize,
    /// Whether an existing catalog was merged in.
    pub merged_existing: bool,
}

/// List the `*.csv` files in `dir`, sorted by file name.
fn csv_files(dir: &Path) -> Result<Vec<PathBuf>, ConvertError> {
    let entries = std::fs::read_dir(dir).map_err(|e| ConvertError::video_dir(dir, e))?;

    let mut files = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| ConvertError::video_dir(dir, e))?.path();
        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
        if is_csv && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Read every video CSV in `dir`, in file-name order.
///
/// Returns the number of files read alongside the videos.
pub fn read_video_dir(dir: &Path) -> Result<(usize, Vec<VideoRecord>), ConvertError> {
    let files = csv_files(dir)?;
    let mut videos = Vec::new();
    for file in &files {
        let mut loaded = load_videos_csv(file)?;
        log::debug!("Read {} videos from {}", loaded.len(), file.display());
        videos.append(&mut loaded);
    }
    Ok((files.len(), videos))
}

/// Convert the video CSVs in `input_dir` and write the catalog to `output`.
///
/// An existing catalog at `output` is merged with the new games. Returns
/// `Ok(None)` without writing anything when there are no CSV files or they
/// hold no videos.
pub fn convert_directory(
    converter: &Converter<'_>,
    cache: &mut TitleCache,
    input_dir: &Path,
    output: &Path,
) -> Result<Option<ConvertSummary>, ConvertError> {
    let (files, videos) = read_video_dir(input_dir)?;
    if files == 0 {
        log::warn!("No CSV files found in {}", input_dir.display());
        return Ok(None);
    }
    if videos.is_empty() {
        log::warn!("No videos found in {} CSV files", files);
        return Ok(None);
    }
    log::info!("Read {} videos from {} files", videos.len(), files);

    let converted = converter.convert(&videos, cache)?;
    let converted_games = converted.len();

    let (mut catalog, merged_existing) = match load_catalog(output)? {
        Some(existing) => {
            log::info!(
                "Merging {} games into existing catalog of {}",
                converted_games,
                existing.len()
            );
            (merge_games(converted, existing), true)
        }
        None => (converted, false),
    };

    save_catalog(output, &mut catalog)?;
    log::info!("Wrote {} games to {}", catalog.len(), output.display());

    Ok(Some(ConvertSummary {
        files,
        videos: videos.len(),
        converted_games,
        catalog_games: catalog.len(),
        merged_existing,
    }))
}
