//! Title normalization.
//!
//! Video titles carry a lot of decoration that differs between episodes of
//! the same game: series tags, episode counters, bracketed quality markers,
//! punctuation and emoji. [`normalize`] strips all of it so that titles of
//! one series share a long common prefix or suffix.

use std::sync::LazyLock;

use regex::Regex;

/// Patterns whose matches are removed, applied in order.
static STRIP_RULES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        // Series tags
        r"(?i)Let's (Play|Test)",
        r"(?i)\(?Ende\)?",
        r"(?i)\(?Demo\)?",
        r"(?i)\(?Angespielt\)?",
        r"(?i)\(?Preview\)?",
        r"(?i)\(LPT[^)]*\)",
        r"M\.?e\.?t\.?t\.?",
        // Episode counters
        r"#\d+",
        r"\D\d\d\d:",
        r"\d+/\d+",
        r"Folge\s+\d+",
        r"S\d+E\d+",
        // Bracketed groups
        r"\[[^\[]*\]",
        // Anything that is not a letter, digit, whitespace or colon
        r"[^\p{L}\p{N}\s:]+",
    ]
    .iter()
    .map(|pattern| Regex::new(pattern).expect("valid normalizer pattern"))
    .collect()
});

static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        "[\u{1F600}-\u{1F64F}\u{1F300}-\u{1F5FF}\u{1F680}-\u{1F6FF}\u{1F1E0}-\u{1F1FF}\
         \u{2702}-\u{27B0}\u{1F900}-\u{1F9FF}\u{1FA00}-\u{1FA6F}\u{1FA70}-\u{1FAFF}\
         \u{2600}-\u{26FF}\u{FE0F}\u{200D}]+",
    )
    .expect("valid emoji pattern")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid whitespace pattern"));

/// Strip series tags, episode markers, brackets, punctuation and emoji from a
/// title and collapse whitespace.
///
/// The result is not trimmed. Removing one token can make a new one appear
/// (`En[HD]de` loses its brackets and becomes `Ende`), so the rules are re-applied
/// until the title stops changing; `normalize(normalize(t)) == normalize(t)`.
pub fn normalize(title: &str) -> String {
    let mut current = apply_rules(title);
    loop {
        let next = apply_rules(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn apply_rules(title: &str) -> String {
    let mut s = title.to_string();
    for rule in STRIP_RULES.iter() {
        if rule.is_match(&s) {
            s = rule.replace_all(&s, "").into_owned();
        }
    }
    let s = EMOJI.replace_all(&s, " ");
    WHITESPACE.replace_all(&s, " ").into_owned()
}

#[cfg(test)]
#[path = "tests/normalize_tests.rs"]
mod tests;
