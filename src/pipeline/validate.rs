// src/pipeline/validate.rs

//! Configuration and snapshot validation.

use crate::error::Result;
use crate::models::Config;
use crate::storage::InteractionStorage;

/// Validate the configuration and, when present, the raw snapshot.
///
/// Loading the snapshot is the type check: a record whose `support_team` is
/// neither a string nor null fails deserialization here, before it can ever
/// reach the labeler.
pub async fn run_validate(config: &Config, storage: &dyn InteractionStorage) -> Result<()> {
    config.validate()?;
    log::info!("Config OK");
    log::info!("    base_url: {}", config.platform.base_url);
    log::info!("    timeout_secs: {}", config.platform.timeout_secs);
    log::info!("    max_concurrent: {}", config.platform.max_concurrent);
    log::info!("    page_size: {}", config.platform.page_size);

    match storage.load_raw().await {
        Ok(Some(snapshot)) => {
            log::info!(
                "Raw snapshot OK: {} interactions fetched at {}",
                snapshot.count,
                snapshot.fetched_at
            );
        }
        Ok(None) => {
            log::info!("No raw snapshot yet. Run 'fetch' to create one.");
        }
        Err(e) => {
            log::error!("Raw snapshot is invalid: {}", e);
            return Err(e);
        }
    }

    Ok(())
}
