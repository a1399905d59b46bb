use std::collections::BTreeMap;

use chrono::{DateTime, TimeZone, Utc};
use gamecast_catalog::*;

fn at(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

fn entry(source: &str, link: &str, start: DateTime<Utc>) -> ContentEntry {
    ContentEntry {
        link: link.to_string(),
        start,
        source: source.parse().unwrap(),
    }
}

fn game(name: &str, content: Vec<ContentEntry>) -> Game {
    Game::new(name, content)
}

/// Flatten games into (name, source) -> (start, link) for invariant checks.
fn flatten(games: &[Game]) -> BTreeMap<(String, String), (DateTime<Utc>, String)> {
    let mut map = BTreeMap::new();
    for g in games {
        for c in &g.content {
            let previous = map.insert(
                (g.name.clone(), c.source.to_string()),
                (c.start, c.link.clone()),
            );
            assert!(previous.is_none(), "duplicate source {} in {}", c.source, g.name);
        }
    }
    map
}

#[test]
fn different_names_are_sorted() {
    let merged = merge_games(vec![game("foo", vec![])], vec![game("bar", vec![])]);
    assert_eq!(merged, vec![game("bar", vec![]), game("foo", vec![])]);
}

#[test]
fn same_game_keeps_earlier_first_list() {
    let a = vec![game("foo", vec![entry("youtube", "A", at(2020, 10, 8))])];
    let b = vec![game("foo", vec![entry("youtube", "B", at(2020, 10, 9))])];
    let merged = merge_games(a, b);
    assert_eq!(
        merged,
        vec![game("foo", vec![entry("youtube", "A", at(2020, 10, 8))])]
    );
}

#[test]
fn same_game_keeps_earlier_second_list() {
    let a = vec![game("foo", vec![entry("youtube", "A", at(2020, 10, 10))])];
    let b = vec![game("foo", vec![entry("youtube", "B", at(2020, 10, 9))])];
    let merged = merge_games(a, b);
    assert_eq!(
        merged,
        vec![game("foo", vec![entry("youtube", "B", at(2020, 10, 9))])]
    );
}

#[test]
fn equal_timestamps_keep_first_encountered() {
    let a = vec![game("foo", vec![entry("youtube", "A", at(2020, 10, 9))])];
    let b = vec![game("foo", vec![entry("youtube", "B", at(2020, 10, 9))])];
    let merged = merge_games(a, b);
    assert_eq!(merged[0].content[0].link, "A");
}

#[test]
fn different_sources_are_unioned_and_sorted() {
    let a = vec![game("foo", vec![entry("youtube", "Y", at(2021, 1, 1))])];
    let b = vec![game("foo", vec![entry("twitch", "T", at(2022, 1, 1))])];
    let merged = merge_games(a, b);
    assert_eq!(merged.len(), 1);
    let sources: Vec<&str> = merged[0].content.iter().map(|c| c.source.as_str()).collect();
    assert_eq!(sources, vec!["twitch", "youtube"]);
}

#[test]
fn duplicates_within_one_list_are_coalesced() {
    let a = vec![
        game("foo", vec![entry("youtube", "late", at(2021, 5, 1))]),
        game("foo", vec![entry("youtube", "early", at(2021, 1, 1))]),
    ];
    let merged = merge_games(a, vec![]);
    assert_eq!(
        merged,
        vec![game("foo", vec![entry("youtube", "early", at(2021, 1, 1))])]
    );
}

#[test]
fn existing_catalog_with_new_game() {
    let existing = vec![game(
        "Existing Game",
        vec![entry("youtube", "https://www.youtube.com/watch?v=old", at(2023, 1, 1))],
    )];
    let fresh = vec![game(
        "New Game",
        vec![entry("youtube", "https://www.youtube.com/watch?v=new", at(2024, 3, 2))],
    )];

    let merged = merge_games(fresh.clone(), existing.clone());
    assert_eq!(merged, vec![existing[0].clone(), fresh[0].clone()]);
}

#[test]
fn merge_is_associative_on_earliest_entries() {
    let a = vec![
        game("alpha", vec![entry("youtube", "a1", at(2020, 1, 5))]),
        game("beta", vec![entry("youtube", "a2", at(2020, 2, 1))]),
    ];
    let b = vec![
        game("alpha", vec![entry("youtube", "b1", at(2020, 1, 3))]),
        game("gamma", vec![entry("twitch", "b2", at(2020, 3, 1))]),
    ];
    let c = vec![
        game("alpha", vec![entry("youtube", "c1", at(2020, 1, 3))]),
        game("beta", vec![entry("twitch", "c2", at(2019, 12, 1))]),
        game("gamma", vec![entry("twitch", "c3", at(2020, 4, 1))]),
    ];

    let left = merge_games(merge_games(a.clone(), b.clone()), c.clone());
    let right = merge_games(a, merge_games(b, c));
    assert_eq!(flatten(&left), flatten(&right));
    assert_eq!(
        flatten(&left)[&("alpha".to_string(), "youtube".to_string())],
        (at(2020, 1, 3), "b1".to_string())
    );
}

#[test]
fn merge_is_idempotent() {
    let a = vec![
        game("alpha", vec![entry("youtube", "a1", at(2020, 1, 5))]),
        game(
            "beta",
            vec![
                entry("twitch", "a3", at(2020, 2, 2)),
                entry("youtube", "a2", at(2020, 2, 1)),
            ],
        ),
    ];
    let merged = merge_games(a.clone(), a.clone());
    assert_eq!(flatten(&merged), flatten(&a));
    assert_eq!(merged, a);
}

#[test]
fn empty_inputs_merge_to_empty() {
    assert!(merge_games(vec![], vec![]).is_empty());
}
