use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamecast_convert::DEFAULT_WINDOW_SIZE;
use gamecast_scraper::{API_KEY_ENV, CredentialSource, config_path, load_config, resolve_api_key};

use crate::error::CliError;

/// Show current settings and their sources.
pub(crate) fn run_config_show() {
    let path = config_path();

    log::info!(
        "{}",
        "gamecast Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("");

    match &path {
        Some(p) if p.exists() => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(exists)".if_supports_color(Stdout, |t| t.green()),
            );
        }
        Some(p) => {
            log::info!(
                "  Config file: {} {}",
                p.display().if_supports_color(Stdout, |t| t.cyan()),
                "(not found)".if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  Config file: {}",
                "could not determine path".if_supports_color(Stdout, |t| t.red()),
            );
        }
    }
    log::info!("");

    let config = load_config();

    match resolve_api_key(None, std::env::var(API_KEY_ENV).ok(), &config) {
        Some(key) => print_field("youtube.api_key", Some(key.masked()), &key.source.to_string()),
        None => print_field(
            "youtube.api_key",
            None,
            &CredentialSource::Missing.to_string(),
        ),
    }

    let (size, size_source) = match config.window_size() {
        Some(size) => (size, "config file"),
        None => (DEFAULT_WINDOW_SIZE, "default"),
    };
    print_field("convert.window_size", Some(size.to_string()), size_source);

    match config.window_step() {
        Some(step) => print_field("convert.window_step", Some(step.to_string()), "config file"),
        None => print_field(
            "convert.window_step",
            Some((size / 2).max(1).to_string()),
            "half the window size",
        ),
    }
}

fn print_field(name: &str, value: Option<String>, source: &str) {
    let source_str = format!("({source})");
    let label = format!("{name}:");
    match value {
        Some(v) => {
            log::info!(
                "  {} {} {}",
                label.if_supports_color(Stdout, |t| t.cyan()),
                v,
                source_str.if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
        None => {
            log::info!(
                "  {} {} {}",
                label.if_supports_color(Stdout, |t| t.cyan()),
                "not set".if_supports_color(Stdout, |t| t.yellow()),
                source_str.if_supports_color(Stdout, |t| t.dimmed()),
            );
        }
    }
}

/// Print the config file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    let path = config_path().ok_or_else(|| CliError::config("could not determine config directory"))?;
    println!("{}", path.display());
    Ok(())
}
