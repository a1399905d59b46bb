//! Fuzzy title clustering.
//!
//! Within one window, videos are grouped greedily: each video is compared
//! against every cluster key seen so far and joins the key with which it
//! shares the longest common prefix or suffix. The shared part becomes the
//! new (shorter) key, so after a few episodes the key converges on the game
//! name. A store link in the description short-circuits the comparison.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use gamecast_catalog::{ContentEntry, Game, VideoRecord};
use regex::Regex;

use crate::lookup::{TitleCache, TitleLookup};

static STORE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"steampowered\.com/app/(\d+)").expect("valid store link pattern")
});

/// Words too common to identify a game on their own.
const STOP_WORDS: &[&str] = &["alles", "der", "die", "das", "ein", "the", "gronkh"];

/// Characters stripped from both ends of a cluster key before title-casing.
const NAME_TRIM: &[char] = &['-', ':', '"', ' ', '\t'];

/// Minimum trimmed length of a shared prefix/suffix to form a cluster.
const MIN_SPECIFIER_LEN: usize = 2;

/// Cluster one window of normalized videos into games.
///
/// Every resulting game has exactly one content entry: the earliest video of
/// its cluster. Games are sorted by name. Lookup failures are logged and the
/// video falls back to fuzzy matching.
pub fn cluster_window(
    videos: &[VideoRecord],
    lookup: Option<&dyn TitleLookup>,
    cache: &mut TitleCache,
) -> Vec<Game> {
    let mut earliest: BTreeMap<String, &VideoRecord> = BTreeMap::new();

    for (i, video) in videos.iter().enumerate() {
        log::debug!(
            "Extracting game from video {} ({}/{})",
            video.video_id,
            i + 1,
            videos.len()
        );

        let mut specifier = lookup
            .and_then(|lookup| store_specifier(lookup, cache, video))
            .unwrap_or_default();
        let mut matched_key: Option<String> = None;

        if specifier.is_empty() {
            let title = video.title.to_lowercase();
            let mut best_len = 0;
            for key in earliest.keys() {
                let lowered_key = key.to_lowercase();
                let mut prefix = longest_common_prefix(&title, &lowered_key);
                let mut suffix = longest_common_suffix(&title, &lowered_key);
                if is_stop_word(&prefix) {
                    prefix.clear();
                }
                if is_stop_word(&suffix) {
                    suffix.clear();
                }

                let prefix_len = prefix.chars().count();
                let suffix_len = suffix.chars().count();
                if trimmed_len(&prefix) > MIN_SPECIFIER_LEN
                    && prefix_len > best_len
                    && prefix_len > suffix_len
                {
                    specifier = prefix;
                    best_len = prefix_len;
                    matched_key = Some(key.clone());
                } else if trimmed_len(&suffix) > MIN_SPECIFIER_LEN && suffix_len > best_len {
                    specifier = suffix;
                    best_len = suffix_len;
                    matched_key = Some(key.clone());
                }
            }
        }

        if specifier.is_empty() {
            log::debug!("No match for '{}'", video.title);
            keep_earliest(&mut earliest, video.title.clone(), video);
            continue;
        }

        if let Some(old) = matched_key.filter(|old| *old != specifier) {
            log::debug!("Shortening cluster '{old}' to '{specifier}'");
            if let Some(moved) = earliest.remove(&old) {
                keep_earliest(&mut earliest, specifier.clone(), moved);
            }
        }
        log::debug!("Matched '{}' to '{specifier}'", video.title);
        keep_earliest(&mut earliest, specifier, video);
    }

    let mut games: Vec<Game> = earliest
        .into_iter()
        .filter_map(|(key, video)| {
            let name = display_name(&key);
            if name.is_empty() {
                log::warn!("Dropping video {}: title is empty after cleanup", video.video_id);
                return None;
            }
            Some(Game::new(name, vec![ContentEntry::from_video(video)]))
        })
        .collect();
    games.sort_by(|a, b| a.name.cmp(&b.name));
    games
}

/// Resolve the store link in a video description, if there is one.
///
/// Returns the lower-cased store name, or `None` when there is no link or
/// the lookup fails.
fn store_specifier(
    lookup: &dyn TitleLookup,
    cache: &mut TitleCache,
    video: &VideoRecord,
) -> Option<String> {
    let captures = STORE_LINK.captures(&video.description)?;
    let store_id = &captures[1];
    match cache.resolve(lookup, store_id) {
        Ok(name) => {
            log::debug!(
                "Found '{name}' on {} for video {}",
                lookup.service(),
                video.video_id
            );
            Some(name.to_lowercase())
        }
        Err(e) => {
            log::error!(
                "Cannot get name from {} for video {}: {e}",
                lookup.service(),
                video.video_id
            );
            None
        }
    }
}

/// Store `video` under `key` unless an earlier video is already there.
fn keep_earliest<'v>(
    clusters: &mut BTreeMap<String, &'v VideoRecord>,
    key: String,
    video: &'v VideoRecord,
) {
    clusters
        .entry(key)
        .and_modify(|existing| {
            if video.published_at < existing.published_at {
                *existing = video;
            }
        })
        .or_insert(video);
}

fn is_stop_word(candidate: &str) -> bool {
    let word = candidate.trim().to_lowercase();
    STOP_WORDS.contains(&word.as_str())
}

fn trimmed_len(s: &str) -> usize {
    s.trim().chars().count()
}

fn display_name(key: &str) -> String {
    title_case(key.trim_matches(NAME_TRIM).trim())
}

/// Longest common prefix of two strings, compared per character.
///
/// On a mismatch the prefix backs off by one more character, so
/// `golang`/`golem` gives `go`. When one string is a prefix of the other the
/// shorter string is returned whole.
pub fn longest_common_prefix(a: &str, b: &str) -> String {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let shortest = a.len().min(b.len());

    let mut i = 0;
    while i < shortest {
        if a[i] != b[i] {
            i = i.saturating_sub(1);
            break;
        }
        i += 1;
    }
    a[..i].iter().collect()
}

/// Longest common suffix of two strings, with the same back-off as
/// [`longest_common_prefix`].
pub fn longest_common_suffix(a: &str, b: &str) -> String {
    let reversed_a: String = a.chars().rev().collect();
    let reversed_b: String = b.chars().rev().collect();
    longest_common_prefix(&reversed_a, &reversed_b)
        .chars()
        .rev()
        .collect()
}

/// Capitalise the first letter of every word and lower-case the rest.
///
/// A word starts after any character that is neither alphanumeric nor an
/// apostrophe.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev: Option<char> = None;
    for c in s.chars() {
        let word_start = prev.is_none_or(|p| !p.is_alphanumeric() && p != '\'' && p != '\u{2019}');
        if word_start {
            out.extend(c.to_uppercase());
        } else {
            out.extend(c.to_lowercase());
        }
        prev = Some(c);
    }
    out
}

#[cfg(test)]
#[path = "tests/cluster_tests.rs"]
mod tests;
