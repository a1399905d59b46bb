use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamecast_catalog::{Game, load_catalog, load_games_csv, merge_games, save_catalog};

use crate::cli_types::ImportArgs;
use crate::error::CliError;

/// Run `import`.
pub(crate) fn run_import(args: ImportArgs) -> Result<(), CliError> {
    let imported = load_games_csv(&args.input, &args.sources)?;
    let imported_count = imported.len();

    let mut catalog = match load_catalog(&args.output)? {
        Some(existing) => {
            let imported = drop_known_links(imported, &existing);
            merge_games(imported, existing)
        }
        None => imported,
    };

    save_catalog(&args.output, &mut catalog)?;
    log::info!(
        "{} Imported {} games from {} ({} in catalog)",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        imported_count,
        args.input.display(),
        catalog.len(),
    );
    Ok(())
}

/// Remove imported entries whose link the catalog already holds for the
/// same game and source.
///
/// CSV dates carry no time of day, so such an entry would replace the exact
/// timestamp in the catalog with midnight of the same day.
fn drop_known_links(imported: Vec<Game>, existing: &[Game]) -> Vec<Game> {
    imported
        .into_iter()
        .map(|mut game| {
            if let Some(known) = existing.iter().find(|g| g.name == game.name) {
                game.content.retain(|entry| {
                    known
                        .content_for(&entry.source)
                        .is_none_or(|k| k.link != entry.link)
                });
            }
            game
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use gamecast_catalog::{ContentEntry, SourceTag};

    use super::*;

    fn entry(link: &str, hour: u32) -> ContentEntry {
        ContentEntry {
            link: link.to_string(),
            start: Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap(),
            source: SourceTag::youtube(),
        }
    }

    #[test]
    fn known_link_keeps_catalog_timestamp() {
        let existing = vec![Game::new("Minecraft", vec![entry("https://youtu.be/a", 18)])];
        let imported = vec![Game::new("Minecraft", vec![entry("https://youtu.be/a", 0)])];

        let merged = merge_games(drop_known_links(imported, &existing), existing);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0].content, vec![entry("https://youtu.be/a", 18)]);
    }

    #[test]
    fn new_links_and_games_are_kept() {
        let existing = vec![Game::new("Minecraft", vec![entry("https://youtu.be/a", 18)])];
        let imported = vec![
            Game::new("Minecraft", vec![entry("https://youtu.be/b", 0)]),
            Game::new("Portal 2", vec![entry("https://youtu.be/p", 0)]),
        ];

        let kept = drop_known_links(imported, &existing);
        assert_eq!(kept[0].content, vec![entry("https://youtu.be/b", 0)]);
        assert_eq!(kept[1].content, vec![entry("https://youtu.be/p", 0)]);

        let merged = merge_games(kept, existing);
        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0].content, vec![entry("https://youtu.be/b", 0)]);
    }
}
