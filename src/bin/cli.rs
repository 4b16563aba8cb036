//! imdb-vidsrc CLI
//!
//! Searches IMDb, lets the user pick a title and prints its VidSrc embed link.

use std::io;
use std::path::PathBuf;

use clap::Parser;
use imdb_vidsrc::{
    error::Result,
    models::Config,
    pipeline::{self, LookupOptions},
    services::{BrowserLauncher, ImdbSearch},
};

/// Find a title on IMDb and open it on VidSrc
#[derive(Parser, Debug)]
#[command(name = "imdb-vidsrc", version, about = "Find a title on IMDb and open it on VidSrc")]
struct Cli {
    /// Title to search for (prompted when omitted)
    query: Option<String>,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Open the link without asking
    #[arg(long, conflicts_with = "no_open")]
    open: bool,

    /// Print the link without asking to open it
    #[arg(long)]
    no_open: bool,
}

impl Cli {
    fn lookup_options(&self) -> LookupOptions {
        let open = match (self.open, self.no_open) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        };
        LookupOptions {
            query: self.query.clone(),
            open,
        }
    }
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = if cli.config.exists() {
        Config::load_or_default(&cli.config)
    } else {
        Config::default()
    };
    if let Err(e) = config.validate() {
        log::error!("Config validation failed: {}", e);
        return Err(e);
    }
    log::debug!("Loaded configuration from {}", cli.config.display());

    let search = ImdbSearch::new(&config)?;
    let launcher = BrowserLauncher;

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout().lock();

    pipeline::run_lookup(
        &search,
        &config.embed,
        &launcher,
        &cli.lookup_options(),
        &mut input,
        &mut output,
    )
    .await?;

    Ok(())
}
