// src/pipeline/fetch.rs

//! Interaction fetching pipeline.

use std::sync::Arc;

use chrono::Utc;

use crate::error::Result;
use crate::models::{Config, FetchStats};
use crate::services::InteractionFetcher;
use crate::storage::InteractionStorage;

/// Run the interaction fetcher and write the raw snapshot.
pub async fn run_fetcher(
    config: Arc<Config>,
    storage: &dyn InteractionStorage,
) -> Result<FetchStats> {
    let start_time = Utc::now();

    let fetcher = InteractionFetcher::new(Arc::clone(&config))?;
    let outcome = fetcher.fetch_all().await?;

    let stats = FetchStats {
        start_time,
        end_time: Utc::now(),
        page_total: outcome.page_total,
        page_failures: outcome.page_failures,
        interaction_count: outcome.interactions.len(),
    };

    if stats.page_failures > 0 {
        log::warn!(
            "{} of {} pages failed; snapshot is incomplete",
            stats.page_failures,
            stats.page_total
        );
    }

    let metadata = storage.write_raw(outcome.interactions).await?;
    log::info!(
        "Fetched {} interactions across {} pages",
        metadata.record_count,
        stats.page_total
    );

    Ok(stats)
}
