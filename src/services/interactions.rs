// src/services/interactions.rs

//! Interaction fetcher service.
//!
//! Pulls pages of support-interaction records from the platform's export API.

use std::sync::Arc;
use std::time::Duration;

use futures::stream::{self, StreamExt};
use reqwest::Client;

use crate::error::{AppError, Result};
use crate::models::{Config, Interaction};
use crate::utils::http;

/// Summary of a fetch run.
#[derive(Debug, Default)]
pub struct FetchOutcome {
    pub interactions: Vec<Interaction>,
    pub page_total: usize,
    pub page_failures: usize,
}

/// Service for fetching interactions from the platform export API.
pub struct InteractionFetcher {
    config: Arc<Config>,
    client: Client,
}

impl InteractionFetcher {
    /// Create a new fetcher with the given configuration.
    pub fn new(config: Arc<Config>) -> Result<Self> {
        let client = http::create_async_client(&config.platform)?;
        Ok(Self { config, client })
    }

    /// Build the export URL for one page.
    fn page_url(&self, page: usize) -> String {
        format!(
            "{}/interactions?page={}&per_page={}",
            self.config.platform.base_url.trim_end_matches('/'),
            page,
            self.config.platform.page_size
        )
    }

    /// Fetch a single page of interactions.
    async fn fetch_page(&self, page: usize) -> Result<Vec<Interaction>> {
        let url = self.page_url(page);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.config.platform.api_token {
            request = request.bearer_auth(token);
        }

        let response = request
            .send()
            .await?
            .error_for_status()
            .map_err(|e| AppError::fetch(format!("page {}", page), e))?;

        Ok(response.json().await?)
    }

    /// Fetch all pages until a short page signals the end of the export.
    ///
    /// Pages are requested in waves bounded by `max_concurrent`. A page that
    /// fails is counted and skipped; the run continues so one bad page does
    /// not lose the whole export.
    pub async fn fetch_all(&self) -> Result<FetchOutcome> {
        let platform = &self.config.platform;
        let delay = Duration::from_millis(platform.request_delay_ms);
        let concurrency = platform.max_concurrent.max(1);

        let mut outcome = FetchOutcome::default();
        let mut next_page = 1;
        let mut done = false;

        while !done && next_page <= platform.max_pages {
            let wave_end = (next_page + concurrency - 1).min(platform.max_pages);
            let pages: Vec<usize> = (next_page..=wave_end).collect();

            let mut results: Vec<(usize, Result<Vec<Interaction>>)> = stream::iter(pages)
                .map(|page| async move { (page, self.fetch_page(page).await) })
                .buffer_unordered(concurrency)
                .collect()
                .await;

            // Keep output deterministic regardless of completion order
            results.sort_by_key(|(page, _)| *page);

            for (page, result) in results {
                outcome.page_total += 1;
                match result {
                    Ok(records) => {
                        if records.len() < platform.page_size {
                            done = true;
                        }
                        outcome.interactions.extend(records);
                    }
                    Err(error) => {
                        outcome.page_failures += 1;
                        log::warn!("Failed to fetch page {}: {}", page, error);
                    }
                }
            }

            if self.config.logging.show_progress {
                log::info!(
                    "Fetched through page {}: {} interactions so far",
                    wave_end,
                    outcome.interactions.len()
                );
            }

            next_page = wave_end + 1;
            if !done && delay.as_millis() > 0 {
                tokio::time::sleep(delay).await;
            }
        }

        Ok(outcome)
    }
}
