//! JSON encoding of the persisted catalog.
//!
//! The catalog is a single JSON array of games. It is read once as the merge
//! baseline and written once per run; games are sorted by name and content by
//! source on both read and write so the file diffs cleanly between runs.

use std::io::{Read, Write};
use std::path::Path;

use crate::error::CatalogError;
use crate::types::Game;

/// Stable-sort games by name and each game's content by source.
pub fn sort_catalog(games: &mut [Game]) {
    games.sort_by(|a, b| a.name.cmp(&b.name));
    for game in games.iter_mut() {
        game.sort_content();
    }
}

/// Read a catalog from JSON.
pub fn read_catalog<R: Read>(reader: R) -> Result<Vec<Game>, CatalogError> {
    let mut games: Vec<Game> = serde_json::from_reader(reader)?;
    sort_catalog(&mut games);
    Ok(games)
}

/// Write a catalog as pretty-printed JSON with a trailing newline.
pub fn write_catalog<W: Write>(mut writer: W, games: &mut [Game]) -> Result<(), CatalogError> {
    sort_catalog(games);
    serde_json::to_writer_pretty(&mut writer, &*games)?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Load the catalog stored at `path`.
///
/// Returns `Ok(None)` when the file does not exist yet.
pub fn load_catalog(path: &Path) -> Result<Option<Vec<Game>>, CatalogError> {
    if !path.exists() {
        return Ok(None);
    }
    let file = std::fs::File::open(path).map_err(|e| CatalogError::file(path, e))?;
    read_catalog(std::io::BufReader::new(file)).map(Some)
}

/// Save the catalog to `path`, creating parent directories as needed.
///
/// The file is written to a temporary sibling first and renamed into place.
pub fn save_catalog(path: &Path, games: &mut [Game]) -> Result<(), CatalogError> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| CatalogError::file(parent, e))?;
    }

    let tmp = path.with_extension("json.tmp");
    let mut buffer = Vec::new();
    write_catalog(&mut buffer, games)?;
    std::fs::write(&tmp, &buffer).map_err(|e| CatalogError::file(&tmp, e))?;
    std::fs::rename(&tmp, path).map_err(|e| CatalogError::file(path, e))?;
    Ok(())
}
