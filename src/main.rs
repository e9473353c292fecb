//! Sumi-Harvest main entry point
//!
//! This is the command-line interface for the Sumi-Harvest file harvester.

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use sumi_harvest::config::{load_config_with_hash, Config};
use sumi_harvest::extract::FileKind;
use sumi_harvest::output::print_report;
use sumi_harvest::Coordinator;
use tracing_subscriber::EnvFilter;

/// Sumi-Harvest: a single-page file harvester
///
/// Crawls the given URL for the specified file types and downloads the files
/// to the destination folder using several workers in parallel.
#[derive(Parser, Debug)]
#[command(name = "sumi-harvest")]
#[command(version)]
#[command(about = "Download every linked file of the chosen types from one page", long_about = None)]
struct Cli {
    /// Page to crawl for links
    #[arg(value_name = "URL")]
    url: String,

    /// Save the files to this folder (default: .)
    #[arg(short, long, value_name = "DESTINATION")]
    destination: Option<PathBuf>,

    /// Number of downloads to run in parallel (default: 1)
    #[arg(short = 'n', long, value_name = "WORKERS", value_parser = clap::value_parser!(u16).range(1..))]
    workers: Option<u16>,

    /// File types to download: jpg, mp3, pdf, png (default: all)
    ///
    /// Repeat the flag or separate types with commas: `-f jpg,png` or `-f jpg -f png`.
    #[arg(short = 'f', long = "file-types", value_name = "FILETYPES", value_delimiter = ',')]
    file_types: Vec<FileKind>,

    /// Path to a TOML configuration file
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// List the files that would be downloaded without downloading them
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    setup_logging(cli.verbose, cli.quiet);

    let config = build_config(&cli)?;
    let coordinator = Coordinator::new(config).context("Invalid configuration")?;

    if cli.dry_run {
        handle_dry_run(&coordinator, &cli.url).await
    } else {
        handle_crawl(&coordinator, &cli.url).await
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        // Only show errors
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("sumi_harvest=info,warn"),
            1 => EnvFilter::new("sumi_harvest=debug,info"),
            2 => EnvFilter::new("sumi_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_writer(std::io::stderr)
        .init();
}

/// Layers command-line flags over the config file (or defaults)
fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("Failed to load configuration from {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    if let Some(destination) = &cli.destination {
        config.harvest.destination = destination.clone();
    }
    if let Some(workers) = cli.workers {
        config.harvest.parallelism = usize::from(workers);
    }
    if !cli.file_types.is_empty() {
        config.harvest.file_kinds = cli.file_types.clone();
    }

    Ok(config)
}

/// Handles the --dry-run mode: shows what would be downloaded
async fn handle_dry_run(coordinator: &Coordinator, url: &str) -> anyhow::Result<()> {
    let config = coordinator.config();

    println!("=== Sumi-Harvest Dry Run ===\n");
    println!("Destination: {}", config.harvest.destination.display());
    println!("Workers: {}", config.harvest.parallelism);
    println!(
        "File types: {}",
        coordinator
            .kinds()
            .iter()
            .map(FileKind::to_string)
            .collect::<Vec<_>>()
            .join(", ")
    );

    let urls = coordinator
        .discover(url)
        .await
        .with_context(|| format!("Failed to crawl {}", url))?;

    println!("\nWould download {} files:", urls.len());
    for url in &urls {
        println!("  - {}", url);
    }

    Ok(())
}

/// Handles the main crawl operation
async fn handle_crawl(coordinator: &Coordinator, url: &str) -> anyhow::Result<()> {
    tracing::info!(
        "Crawling {} into {}",
        url,
        coordinator.config().harvest.destination.display()
    );

    match coordinator.crawl(url).await {
        Ok(report) => {
            print_report(&report);
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e).with_context(|| format!("Failed to crawl {}", url))
        }
    }
}
