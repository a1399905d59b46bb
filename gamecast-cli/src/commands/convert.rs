use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamecast_convert::{
    ConvertOptions, Converter, DEFAULT_WINDOW_SIZE, TitleCache, TitleLookup, convert_directory,
};
use gamecast_scraper::{SteamClient, load_config};

use crate::cli_types::ConvertArgs;
use crate::error::CliError;

/// Run `convert`.
pub(crate) fn run_convert(args: ConvertArgs) -> Result<(), CliError> {
    let config = load_config();
    let options = ConvertOptions {
        window_size: args
            .window_size
            .or(config.window_size())
            .unwrap_or(DEFAULT_WINDOW_SIZE),
        window_step: args.window_step.or(config.window_step()),
    };

    let steam = if args.offline {
        log::info!(
            "{} Offline mode: store links are not resolved",
            "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
        );
        None
    } else {
        Some(SteamClient::new()?)
    };
    let lookup = steam.as_ref().map(|s| s as &dyn TitleLookup);

    let converter = Converter::new(lookup, options)?;
    let mut cache = TitleCache::new();

    match convert_directory(&converter, &mut cache, &args.input, &args.output)? {
        Some(summary) => {
            log::info!(
                "{} {} videos from {} files -> {} games ({} in catalog) written to {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                summary.videos,
                summary.files,
                summary.converted_games,
                summary.catalog_games,
                args.output.display(),
            );
            if !cache.is_empty() {
                log::info!("  Resolved {} store titles", cache.len());
            }
        }
        None => {
            log::warn!(
                "{} Nothing to convert in {}; {} left unchanged",
                "\u{26A0}".if_supports_color(Stdout, |t| t.yellow()),
                args.input.display(),
                args.output.display(),
            );
        }
    }
    Ok(())
}
