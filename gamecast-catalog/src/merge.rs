//! Catalog merge logic.
//!
//! Merging combines two game lists (typically a freshly converted batch and
//! the persisted catalog) into one, deduplicating games by name and, within a
//! game, content entries by source. For every (game, source) pair the entry
//! with the earliest start wins, so merges are associative and idempotent.

use crate::types::{ContentEntry, Game};

/// Merge two game lists.
///
/// Games are stable-sorted by name and equal names are coalesced. Content of
/// coalesced games is unioned, stable-sorted by source, and reduced to one
/// entry per source keeping the earliest start (the first one seen on ties).
pub fn merge_games(a: Vec<Game>, b: Vec<Game>) -> Vec<Game> {
    let mut all: Vec<Game> = a.into_iter().chain(b).collect();
    all.sort_by(|x, y| x.name.cmp(&y.name));

    let mut merged: Vec<Game> = Vec::with_capacity(all.len());
    for game in all {
        match merged.last_mut() {
            Some(last) if last.name == game.name => last.content.extend(game.content),
            _ => merged.push(game),
        }
    }

    for game in &mut merged {
        game.content = coalesce_content(std::mem::take(&mut game.content));
    }

    merged
}

/// Reduce content to one entry per source, keeping the earliest.
fn coalesce_content(mut content: Vec<ContentEntry>) -> Vec<ContentEntry> {
    content.sort_by(|a, b| a.source.cmp(&b.source));

    let mut result: Vec<ContentEntry> = Vec::with_capacity(content.len());
    for entry in content {
        match result.last_mut() {
            Some(last) if last.source == entry.source => {
                if entry.start < last.start {
                    *last = entry;
                }
            }
            _ => result.push(entry),
        }
    }
    result
}
