//! gamecast CLI
//!
//! Scrapes channel video lists, clusters them into a game catalog, and moves
//! the catalog between JSON and CSV.

mod cli_types;
mod commands;
mod error;
mod spinner;

use std::io::Write;

use clap::Parser;
use log::LevelFilter;
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use cli_types::{Cli, Commands, ConfigAction, ScrapePlatform};
use error::CliError;

/// Install the logger used for all command output.
///
/// Normal runs print bare messages at info level; `--verbose` adds
/// timestamps, levels, and debug output; `--quiet` keeps warnings and
/// errors only. `RUST_LOG` directives are applied on top.
fn init_logging(verbose: bool, quiet: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else if quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level)
        .target(env_logger::Target::Stdout)
        .format(move |buf, record| {
            if verbose {
                writeln!(
                    buf,
                    "{} {:<5} [{}] {}",
                    buf.timestamp_millis(),
                    record.level(),
                    record.target(),
                    record.args()
                )
            } else {
                writeln!(buf, "{}", record.args())
            }
        });
    if let Ok(directives) = std::env::var("RUST_LOG") {
        builder.parse_filters(&directives);
    }
    builder.init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    let quiet = cli.quiet;
    match cli.command {
        Commands::Scrape { platform } => match platform {
            ScrapePlatform::Youtube(args) => commands::scrape::run_scrape_youtube(args, quiet),
        },
        Commands::Convert(args) => commands::convert::run_convert(args),
        Commands::Export(args) => commands::export::run_export(args),
        Commands::Import(args) => commands::import::run_import(args),
        Commands::Config { action } => match action {
            ConfigAction::Show => {
                commands::config::run_config_show();
                Ok(())
            }
            ConfigAction::Path => commands::config::run_config_path(),
        },
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    if let Err(e) = run(cli) {
        log::error!(
            "{} {}",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            e,
        );
        std::process::exit(1);
    }
}
