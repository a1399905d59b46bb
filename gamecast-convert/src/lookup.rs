//! Storefront title lookup.
//!
//! Video descriptions often link the game's store page. A [`TitleLookup`]
//! turns the numeric store ID from such a link into the authoritative game
//! name, and [`TitleCache`] memoises successful answers for one conversion.

use std::collections::HashMap;

use thiserror::Error;

/// Errors a title lookup can report.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The store does not know the ID (or reports it as unavailable)
    #[error("Unknown store ID: {0}")]
    UnknownId(String),

    /// The store kept answering with rate-limit responses
    #[error("Rate limit exceeded")]
    RateLimited,

    #[error("Lookup failed: {0}")]
    Transport(String),
}

/// Resolves a numeric storefront ID to a game name.
pub trait TitleLookup {
    /// Human-readable name of the backing service, for log messages.
    fn service(&self) -> &'static str;

    fn game_name(&self, store_id: &str) -> Result<String, LookupError>;
}

/// Memoised lookups, keyed by store ID.
///
/// Only successful lookups are stored, so a failed ID is asked again the
/// next time it appears.
#[derive(Debug, Clone, Default)]
pub struct TitleCache {
    names: HashMap<String, String>,
}

impl TitleCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached name for `store_id`, asking `lookup` on a miss.
    pub fn resolve(
        &mut self,
        lookup: &dyn TitleLookup,
        store_id: &str,
    ) -> Result<String, LookupError> {
        if let Some(name) = self.names.get(store_id) {
            log::debug!("{} ID {store_id} cached as '{name}'", lookup.service());
            return Ok(name.clone());
        }

        let name = lookup.game_name(store_id)?;
        self.names.insert(store_id.to_string(), name.clone());
        Ok(name)
    }

    pub fn get(&self, store_id: &str) -> Option<&str> {
        self.names.get(store_id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;

    struct CountingLookup {
        calls: Cell<usize>,
    }

    impl TitleLookup for CountingLookup {
        fn service(&self) -> &'static str {
            "test"
        }

        fn game_name(&self, store_id: &str) -> Result<String, LookupError> {
            self.calls.set(self.calls.get() + 1);
            match store_id {
                "1" => Ok("Portal".to_string()),
                _ => Err(LookupError::UnknownId(store_id.to_string())),
            }
        }
    }

    #[test]
    fn repeated_ids_are_looked_up_once() {
        let lookup = CountingLookup { calls: Cell::new(0) };
        let mut cache = TitleCache::new();

        assert_eq!(cache.resolve(&lookup, "1").unwrap(), "Portal");
        assert_eq!(cache.resolve(&lookup, "1").unwrap(), "Portal");
        assert_eq!(lookup.calls.get(), 1);
        assert_eq!(cache.get("1"), Some("Portal"));
    }

    #[test]
    fn failures_are_not_cached() {
        let lookup = CountingLookup { calls: Cell::new(0) };
        let mut cache = TitleCache::new();

        assert!(matches!(
            cache.resolve(&lookup, "2"),
            Err(LookupError::UnknownId(id)) if id == "2"
        ));
        assert!(cache.resolve(&lookup, "2").is_err());
        assert_eq!(lookup.calls.get(), 2);
        assert!(cache.is_empty());
    }
}
