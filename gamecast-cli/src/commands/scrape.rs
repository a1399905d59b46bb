use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use gamecast_scraper::{ApiKey, PageOptions, ScrapeEvent, YouTubeScraper, load_config, scrape_channels};

use crate::cli_types::YoutubeArgs;
use crate::error::CliError;
use crate::spinner::spinner;

/// Run `scrape youtube`.
pub(crate) fn run_scrape_youtube(args: YoutubeArgs, quiet: bool) -> Result<(), CliError> {
    let config = load_config();
    let key = ApiKey::load(args.api_key, &config)?;
    log::debug!("Using YouTube API key {} ({})", key.masked(), key.source);

    let pages = PageOptions {
        page_results: args.page_results,
        page_limit: args.page_limit,
    };
    let scraper = YouTubeScraper::new(key.value, pages)?;

    log::info!(
        "{}",
        format!("Scraping {} YouTube channels", args.channel_ids.len())
            .if_supports_color(Stdout, |t| t.bold()),
    );

    let pb = spinner(quiet, "Starting...");
    let report = scrape_channels(&scraper, &args.output, &args.channel_ids, |event| {
        match event {
            ScrapeEvent::ChannelStarted {
                index,
                total,
                channel,
            } => pb.set_message(format!("[{}/{}] {}", index + 1, total, channel)),
            ScrapeEvent::ChannelWritten {
                channel,
                path,
                videos,
            } => pb.suspend(|| {
                log::info!(
                    "  {} {}: {} videos -> {}",
                    "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                    channel,
                    videos,
                    path.display(),
                )
            }),
            ScrapeEvent::ChannelFailed { channel, reason } => pb.suspend(|| {
                log::warn!(
                    "  {} {}: {}",
                    "\u{2718}".if_supports_color(Stdout, |t| t.red()),
                    channel,
                    reason,
                )
            }),
        }
    })?;
    pb.finish_and_clear();

    let summary = report.summary();
    log::info!("");
    log::info!("{}", "Summary:".if_supports_color(Stdout, |t| t.bold()));
    log::info!(
        "  {} {} channels written, {} videos",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        summary.channels_written,
        summary.videos,
    );
    if summary.channels_failed > 0 {
        log::warn!(
            "  {} {} channels failed",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            summary.channels_failed,
        );
    }

    report.into_result()?;
    Ok(())
}
