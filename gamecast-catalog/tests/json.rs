use chrono::{TimeZone, Utc};
use gamecast_catalog::*;
use tempfile::TempDir;

fn minecraft() -> Game {
    Game::new(
        "Minecraft",
        vec![ContentEntry {
            link: "some link".to_string(),
            start: Utc.with_ymd_and_hms(2025, 7, 26, 0, 0, 0).unwrap(),
            source: SourceTag::youtube(),
        }],
    )
}

#[test]
fn write_uses_catalog_field_names() {
    let mut games = vec![minecraft()];
    let mut out = Vec::new();
    write_catalog(&mut out, &mut games).unwrap();

    let text = String::from_utf8(out).unwrap();
    assert!(text.ends_with("]\n"));
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {
                "Name": "Minecraft",
                "Content": [
                    {
                        "Link": "some link",
                        "Start": "2025-07-26T00:00:00Z",
                        "Source": "youtube"
                    }
                ]
            }
        ])
    );
}

#[test]
fn write_sorts_games_by_name() {
    let mut games = vec![minecraft(), Game::new("Adrift", vec![])];
    let mut out = Vec::new();
    write_catalog(&mut out, &mut games).unwrap();

    let read = read_catalog(out.as_slice()).unwrap();
    let names: Vec<&str> = read.iter().map(|g| g.name.as_str()).collect();
    assert_eq!(names, vec!["Adrift", "Minecraft"]);
}

#[test]
fn read_sorts_unordered_input() {
    let json = r#"[
        {"Name": "b", "Content": [
            {"Link": "y", "Start": "2020-01-01T00:00:00Z", "Source": "youtube"},
            {"Link": "t", "Start": "2020-01-02T00:00:00Z", "Source": "twitch"}
        ]},
        {"Name": "a", "Content": null}
    ]"#;
    let games = read_catalog(json.as_bytes()).unwrap();
    assert_eq!(games[0].name, "a");
    assert!(games[0].content.is_empty());
    assert_eq!(games[1].content[0].source.as_str(), "twitch");
    assert_eq!(games[1].content[1].source.as_str(), "youtube");
}

#[test]
fn read_rejects_malformed_json() {
    let result = read_catalog("{not json".as_bytes());
    assert!(matches!(result, Err(CatalogError::Json(_))));
}

#[test]
fn save_then_load_from_nested_path() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("public").join("data.json");

    let mut games = vec![minecraft()];
    save_catalog(&path, &mut games).unwrap();
    assert!(!path.with_extension("json.tmp").exists());

    let loaded = load_catalog(&path).unwrap().unwrap();
    assert_eq!(loaded, vec![minecraft()]);
}

#[test]
fn load_missing_catalog_is_none() {
    let tmp = TempDir::new().unwrap();
    let loaded = load_catalog(&tmp.path().join("missing.json")).unwrap();
    assert!(loaded.is_none());
}
