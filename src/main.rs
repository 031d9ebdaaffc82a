//! Page-Harvest main entry point
//!
//! This is the command-line interface for the Page-Harvest crawler and
//! content extractor.

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use page_harvest::config::{load_config_with_hash, validate_config, Config};
use page_harvest::crawler::run_crawl;
use page_harvest::extractor::run_extraction;
use page_harvest::output::print_statistics;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Page-Harvest: crawl one site and extract its text
///
/// `crawl` writes the in-scope URLs of a site to a list file. `extract` reads
/// that list, fetches every page and writes content.json, content.txt and
/// content.pdf. `run` does both in sequence.
#[derive(Parser, Debug)]
#[command(name = "page-harvest")]
#[command(version = "1.0.0")]
#[command(about = "Crawl a website and extract its text content", long_about = None)]
struct Cli {
    /// Path to TOML configuration file
    #[arg(short, long, value_name = "CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Increase logging verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose", global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Discover in-scope pages and write them to the URL list file
    Crawl {
        #[command(flatten)]
        crawl: CrawlArgs,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Extract every URL in the list file and write the reports
    Extract {
        #[command(flatten)]
        extract: ExtractArgs,

        #[command(flatten)]
        list: ListArgs,
    },

    /// Crawl, then extract
    Run {
        #[command(flatten)]
        crawl: CrawlArgs,

        #[command(flatten)]
        extract: ExtractArgs,

        #[command(flatten)]
        list: ListArgs,
    },
}

#[derive(Args, Debug)]
struct ListArgs {
    /// URL list file written by crawl and read by extract
    #[arg(long, value_name = "FILE")]
    url_list: Option<String>,
}

#[derive(Args, Debug)]
struct CrawlArgs {
    /// URL to start crawling from
    #[arg(long, value_name = "URL")]
    seed: Option<String>,

    /// Only follow links starting with this prefix (defaults to the seed)
    #[arg(long, value_name = "PREFIX")]
    scope: Option<String>,
}

#[derive(Args, Debug)]
struct ExtractArgs {
    /// Directory for content.json, content.txt and content.pdf
    #[arg(long, value_name = "DIR")]
    output_dir: Option<String>,

    /// Sleep before every extraction request, in milliseconds
    #[arg(long, value_name = "MS")]
    delay_ms: Option<u64>,

    /// Per-request timeout, in milliseconds
    #[arg(long, value_name = "MS")]
    timeout_ms: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);

    let mut config = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path.display());
            let (config, hash) = load_config_with_hash(path)
                .with_context(|| format!("failed to load {}", path.display()))?;
            tracing::info!("Configuration loaded successfully (hash: {})", hash);
            config
        }
        None => Config::default(),
    };

    match cli.command {
        Command::Crawl { crawl, list } => {
            apply_crawl_args(&mut config, crawl, list);
            validate_config(&config)?;
            handle_crawl(&config).await
        }
        Command::Extract { extract, list } => {
            apply_list_args(&mut config, list);
            apply_extract_args(&mut config, extract);
            validate_config(&config)?;
            handle_extract(&config, cli.quiet).await
        }
        Command::Run {
            crawl,
            extract,
            list,
        } => {
            apply_crawl_args(&mut config, crawl, list);
            apply_extract_args(&mut config, extract);
            validate_config(&config)?;
            handle_crawl(&config).await?;
            handle_extract(&config, cli.quiet).await
        }
    }
}

/// Sets up the logging/tracing subscriber based on verbosity level
fn setup_logging(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            0 => EnvFilter::new("page_harvest=info,warn"),
            1 => EnvFilter::new("page_harvest=debug,info"),
            2 => EnvFilter::new("page_harvest=trace,debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .init();
}

fn apply_crawl_args(config: &mut Config, args: CrawlArgs, list: ListArgs) {
    if let Some(seed) = args.seed {
        config.crawl.seed_url = Some(seed);
    }
    if let Some(scope) = args.scope {
        config.crawl.scope_prefix = Some(scope);
    }
    apply_list_args(config, list);
}

fn apply_list_args(config: &mut Config, list: ListArgs) {
    if let Some(url_list) = list.url_list {
        config.crawl.url_list_path = url_list;
    }
}

fn apply_extract_args(config: &mut Config, args: ExtractArgs) {
    if let Some(dir) = args.output_dir {
        config.output.directory = dir;
    }
    if let Some(delay) = args.delay_ms {
        config.extract.delay_ms = delay;
    }
    if let Some(timeout) = args.timeout_ms {
        config.extract.request_timeout_ms = timeout;
    }
}

/// Handles crawl mode; any fetch failure ends the process with an error
async fn handle_crawl(config: &Config) -> anyhow::Result<()> {
    match run_crawl(config).await {
        Ok(urls) => {
            tracing::info!("Crawl completed successfully ({} URLs)", urls.len());
            Ok(())
        }
        Err(e) => {
            tracing::error!("Crawl failed: {}", e);
            Err(e).context(format!(
                "crawl aborted; partial list left in {}",
                config.crawl.url_list_path
            ))
        }
    }
}

/// Handles extract mode
async fn handle_extract(config: &Config, quiet: bool) -> anyhow::Result<()> {
    let stats = run_extraction(config)
        .await
        .context("extraction failed")?;

    if !quiet {
        print_statistics(&stats);
    }

    Ok(())
}
