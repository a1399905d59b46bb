use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamecast_catalog::{load_catalog, save_games_csv};

use crate::cli_types::ExportArgs;
use crate::error::CliError;

/// Run `export`.
pub(crate) fn run_export(args: ExportArgs) -> Result<(), CliError> {
    let mut games =
        load_catalog(&args.input)?.ok_or_else(|| CliError::MissingCatalog(args.input.clone()))?;

    save_games_csv(&args.output, &mut games, &args.sources)?;
    log::info!(
        "{} Exported {} games to {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        games.len(),
        args.output.display(),
    );
    Ok(())
}
