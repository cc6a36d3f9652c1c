//! Support Interaction Labeler CLI
//!
//! Local execution entry point.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use labeler::{
    error::Result,
    models::Config,
    pipeline,
    storage::{InteractionStorage, LocalStorage},
};

/// labeler - Support Interaction Labeler
#[derive(Parser, Debug)]
#[command(
    name = "labeler",
    version,
    about = "Labels support interactions with a derived tech_support indicator"
)]

struct Cli {
    /// Path to storage directory containing config and snapshots
    #[arg(short, long, default_value = "storage")]
    storage_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch interactions from the platform export API
    Fetch,

    /// Label the fetched interactions
    Label,

    /// Run full pipeline: Fetch → Label
    Pipeline {
        /// Skip fetching, label the existing snapshot
        #[arg(long)]
        skip_fetch: bool,
    },

    /// Validate configuration and snapshot files
    Validate,

    /// Show current snapshot info
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    log::info!("Labeler starting...");

    // Load configuration
    let config_path = cli.storage_dir.join("config.toml");
    let config = Config::load_or_default(&config_path);

    log::info!("Loaded configuration from {}", cli.storage_dir.display());

    let config = Arc::new(config);
    let storage = LocalStorage::new(&cli.storage_dir);

    match cli.command {
        Command::Fetch => {
            config.validate()?;

            let stats = pipeline::run_fetcher(Arc::clone(&config), &storage).await?;
            log::info!(
                "Fetch complete: {} interactions ({} pages, {} failures)",
                stats.interaction_count,
                stats.page_total,
                stats.page_failures
            );
        }

        Command::Label => {
            let stats = pipeline::run_labeler(&storage).await?;
            log::info!(
                "Label complete: {} of {} interactions are tech support",
                stats.matched_count,
                stats.record_count
            );
        }

        Command::Pipeline { skip_fetch } => {
            // Step 1: Fetch (unless skipped)
            if skip_fetch {
                log::info!("Skipping fetch, labeling existing snapshot...");
            } else {
                config.validate()?;
                log::info!("Step 1/2: Fetching interactions...");
                pipeline::run_fetcher(Arc::clone(&config), &storage).await?;
            }

            // Step 2: Label
            log::info!("Step 2/2: Labeling interactions...");
            let stats = pipeline::run_labeler(&storage).await?;

            log::info!(
                "Pipeline complete: {} of {} interactions are tech support",
                stats.matched_count,
                stats.record_count
            );
        }

        Command::Validate => {
            log::info!("Validating configuration and snapshots...");
            pipeline::run_validate(&config, &storage).await?;
            log::info!("All validations passed!");
        }

        Command::Info => {
            log::info!("Storage directory: {}", cli.storage_dir.display());

            match storage.load_raw().await {
                Ok(Some(snapshot)) => {
                    log::info!(
                        "Raw snapshot: {} interactions, fetched at {}",
                        snapshot.count,
                        snapshot.fetched_at
                    );
                }
                _ => log::info!("Raw snapshot: not found"),
            }

            match storage.load_labeled().await {
                Ok(Some(labeled)) => {
                    let matched = labeled
                        .interactions
                        .iter()
                        .filter(|i| i.is_tech_support())
                        .count();
                    log::info!(
                        "Labeled output: {} interactions ({} tech support), updated at {}",
                        labeled.count,
                        matched,
                        labeled.updated_at
                    );
                }
                _ => log::info!("Labeled output: not found"),
            }
        }
    }

    log::info!("Done!");

    Ok(())
}
