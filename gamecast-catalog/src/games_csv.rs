//! CSV export of the game catalog.
//!
//! One row per game. Columns are `titel` followed by a `<source>-link` /
//! `<source>-start` pair for every source in the allow-list:
//! ```text
//! titel,youtube-link,youtube-start
//! Minecraft,https://www.youtube.com/watch?v=DM52HxaLK-Y,19.10.2010
//! ```
//! Cells stay empty when a game has no entry for that source.

use std::io::{Read, Write};
use std::path::Path;

use chrono::{NaiveDate, NaiveTime, TimeZone, Utc};

use crate::error::CatalogError;
use crate::json::sort_catalog;
use crate::types::{ContentEntry, Game, SourceTag};

const TITLE_COLUMN: &str = "titel";
const DATE_FORMAT: &str = "%d.%m.%Y";

fn header(known_sources: &[SourceTag]) -> Vec<String> {
    let mut h = vec![TITLE_COLUMN.to_string()];
    for source in known_sources {
        h.push(format!("{source}-link"));
        h.push(format!("{source}-start"));
    }
    h
}

/// Write games as CSV, restricted to the given source allow-list.
///
/// Fails with [`CatalogError::NoKnownSources`] when the allow-list is empty
/// and with [`CatalogError::UnknownSource`] when a game carries content from
/// a source outside it.
pub fn write_games_csv<W: Write>(
    writer: W,
    games: &mut [Game],
    known_sources: &[SourceTag],
) -> Result<(), CatalogError> {
    if known_sources.is_empty() {
        return Err(CatalogError::NoKnownSources);
    }

    sort_catalog(games);
    for game in games.iter() {
        if let Some(unknown) = game
            .content
            .iter()
            .find(|c| !known_sources.contains(&c.source))
        {
            return Err(CatalogError::UnknownSource(unknown.source.to_string()));
        }
    }

    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(header(known_sources))?;

    for game in games.iter() {
        let mut row = vec![game.name.clone()];
        for source in known_sources {
            match game.content_for(source) {
                Some(entry) => {
                    row.push(entry.link.clone());
                    row.push(entry.start.format(DATE_FORMAT).to_string());
                }
                None => {
                    row.push(String::new());
                    row.push(String::new());
                }
            }
        }
        csv_writer.write_record(&row)?;
    }

    csv_writer.flush()?;
    Ok(())
}

/// Read games from CSV, validating header sources against the allow-list.
///
/// Dates carry day precision only and are read as midnight UTC. Entries with
/// an unparseable date are skipped with a warning.
pub fn read_games_csv<R: Read>(
    reader: R,
    known_sources: &[SourceTag],
) -> Result<Vec<Game>, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader);

    let mut records = csv_reader.records();
    let headers = match records.next() {
        Some(h) => h?,
        None => return Err(CatalogError::EmptyCsv),
    };

    if headers.get(0) != Some(TITLE_COLUMN) {
        return Err(CatalogError::InvalidHeader(
            headers.get(0).unwrap_or_default().to_string(),
        ));
    }

    let mut sources = Vec::new();
    for i in (1..headers.len()).step_by(2) {
        let column = &headers[i];
        let name = column
            .strip_suffix("-link")
            .ok_or_else(|| CatalogError::InvalidHeader(column.to_string()))?;
        let start_column = headers.get(i + 1).unwrap_or_default();
        if start_column.strip_suffix("-start") != Some(name) {
            return Err(CatalogError::InvalidHeader(start_column.to_string()));
        }
        let source = known_sources
            .iter()
            .find(|s| s.as_str() == name)
            .ok_or_else(|| CatalogError::UnknownSource(name.to_string()))?;
        sources.push(source.clone());
    }

    let mut games = Vec::new();
    for record in records {
        let record = record?;
        let Some(name) = record.get(0) else {
            continue;
        };

        let mut game = Game::new(name, Vec::new());
        for (i, source) in sources.iter().enumerate() {
            let link = record.get(i * 2 + 1).unwrap_or("");
            let start = record.get(i * 2 + 2).unwrap_or("");
            if link.is_empty() && start.is_empty() {
                continue;
            }

            let Ok(date) = NaiveDate::parse_from_str(start, DATE_FORMAT) else {
                log::warn!(
                    "Skipping {} entry for '{}': invalid date '{}'",
                    source,
                    name,
                    start
                );
                continue;
            };
            game.content.push(ContentEntry {
                link: link.to_string(),
                start: Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)),
                source: source.clone(),
            });
        }
        games.push(game);
    }

    sort_catalog(&mut games);
    Ok(games)
}

/// Load games from the catalog CSV at `path`.
pub fn load_games_csv(path: &Path, known_sources: &[SourceTag]) -> Result<Vec<Game>, CatalogError> {
    let file = std::fs::File::open(path).map_err(|e| CatalogError::file(path, e))?;
    read_games_csv(std::io::BufReader::new(file), known_sources)
}

/// Save games as catalog CSV to `path`, creating parent directories.
pub fn save_games_csv(
    path: &Path,
    games: &mut [Game],
    known_sources: &[SourceTag],
) -> Result<(), CatalogError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CatalogError::file(parent, e))?;
    }
    let file = std::fs::File::create(path).map_err(|e| CatalogError::file(path, e))?;
    write_games_csv(std::io::BufWriter::new(file), games, known_sources)
}
