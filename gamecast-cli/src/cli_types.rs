//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use gamecast_catalog::SourceTag;
use gamecast_scraper::DEFAULT_PAGE_RESULTS;

#[derive(Parser)]
#[command(name = "gamecast")]
#[command(about = "Build a game catalog from let's-play video channels", long_about = None)]
pub(crate) struct Cli {
    /// Only show warnings and errors (suppress normal output)
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Download the video lists of channels into one CSV per channel
    Scrape {
        #[command(subcommand)]
        platform: ScrapePlatform,
    },

    /// Cluster scraped videos into games and update the catalog
    Convert(ConvertArgs),

    /// Write the catalog as a spreadsheet-friendly CSV
    Export(ExportArgs),

    /// Merge a catalog CSV back into the JSON catalog
    Import(ImportArgs),

    /// Inspect the configuration file and credentials
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub(crate) enum ScrapePlatform {
    /// Scrape YouTube channels through the YouTube Data API
    Youtube(YoutubeArgs),
}

#[derive(Args)]
pub(crate) struct YoutubeArgs {
    /// Channel IDs to scrape (e.g., UCYJ61XIK64sp6ZFFS8sctxw)
    #[arg(required = true)]
    pub channel_ids: Vec<String>,

    /// YouTube Data API key (overrides env and config file)
    #[arg(long)]
    pub api_key: Option<String>,

    /// Directory the per-channel CSV files are written to
    #[arg(short, long, default_value = "./data")]
    pub output: PathBuf,

    /// Videos requested per API page
    #[arg(long, default_value_t = DEFAULT_PAGE_RESULTS)]
    pub page_results: u32,

    /// Maximum pages read per channel (0 = no limit)
    #[arg(long, default_value_t = 0)]
    pub page_limit: u32,
}

#[derive(Args)]
pub(crate) struct ConvertArgs {
    /// Directory holding the scraped video CSV files
    #[arg(short, long, default_value = "./data")]
    pub input: PathBuf,

    /// Catalog JSON file to create or update
    #[arg(short, long, default_value = "./public/data.json")]
    pub output: PathBuf,

    /// Number of videos clustered together (default: config file, then 100)
    #[arg(long)]
    pub window_size: Option<usize>,

    /// Distance between window starts (default: half the window size)
    #[arg(long)]
    pub window_step: Option<usize>,

    /// Skip storefront title lookups
    #[arg(long)]
    pub offline: bool,
}

#[derive(Args)]
pub(crate) struct ExportArgs {
    /// Catalog JSON file to read
    #[arg(short, long, default_value = "./public/data.json")]
    pub input: PathBuf,

    /// CSV file to write
    #[arg(short, long, default_value = "./public/data.csv")]
    pub output: PathBuf,

    /// Sources to include as columns, in order
    #[arg(long, value_delimiter = ',', default_value = "youtube")]
    pub sources: Vec<SourceTag>,
}

#[derive(Args)]
pub(crate) struct ImportArgs {
    /// Catalog CSV file to read
    #[arg(short, long, default_value = "./public/data.csv")]
    pub input: PathBuf,

    /// Catalog JSON file to merge into
    #[arg(short, long, default_value = "./public/data.json")]
    pub output: PathBuf,

    /// Sources allowed in the CSV header
    #[arg(long, value_delimiter = ',', default_value = "youtube")]
    pub sources: Vec<SourceTag>,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings and where they come from
    Show,

    /// Print the config file path
    Path,
}
