// src/pipeline/label.rs

//! Labeling pipeline.
//!
//! Applies the technical-support classification independently to every
//! record in the raw snapshot. Exactly one output record per input record;
//! no record depends on any other, so order never affects the result.

use chrono::Utc;

use crate::error::{AppError, Result};
use crate::models::{Interaction, LabelStats};
use crate::storage::InteractionStorage;

/// Result of labeling a batch of interactions.
#[derive(Debug, Default)]
pub struct LabelOutcome {
    pub interactions: Vec<Interaction>,
    pub matched_count: usize,
    pub missing_team_count: usize,
}

/// Label every interaction in the batch.
pub fn label_all(interactions: Vec<Interaction>) -> LabelOutcome {
    let mut outcome = LabelOutcome::default();

    for interaction in interactions {
        if interaction.support_team.is_none() {
            outcome.missing_team_count += 1;
        }

        let labeled = interaction.labeled();
        if labeled.is_tech_support() {
            outcome.matched_count += 1;
        }
        outcome.interactions.push(labeled);
    }

    outcome
}

/// Run the labeler over the stored raw snapshot.
pub async fn run_labeler(storage: &dyn InteractionStorage) -> Result<LabelStats> {
    let start_time = Utc::now();

    let snapshot = storage
        .load_raw()
        .await?
        .ok_or_else(|| AppError::validation("No raw snapshot found. Run 'fetch' first."))?;

    log::info!(
        "Labeling {} interactions fetched at {}",
        snapshot.count,
        snapshot.fetched_at
    );

    let outcome = label_all(snapshot.interactions);

    let stats = LabelStats {
        start_time,
        end_time: Utc::now(),
        record_count: outcome.interactions.len(),
        matched_count: outcome.matched_count,
        missing_team_count: outcome.missing_team_count,
    };

    storage
        .write_labeled(outcome.interactions, &stats)
        .await?;

    log::info!(
        "Labeled {} interactions: {} tech support, {} other, {} without a team",
        stats.record_count,
        stats.matched_count,
        stats.unmatched_count(),
        stats.missing_team_count
    );

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::LocalStorage;
    use serde_json::json;
    use tempfile::TempDir;

    fn interaction(value: serde_json::Value) -> Interaction {
        serde_json::from_value(value).unwrap()
    }

    fn sample_batch() -> Vec<Interaction> {
        vec![
            interaction(json!({ "support_team": "tech support", "ticket_id": 1 })),
            interaction(json!({ "support_team": "taskus", "ticket_id": 2 })),
            interaction(json!({ "support_team": "onc", "ticket_id": 3 })),
            interaction(json!({ "support_team": "billing", "ticket_id": 4 })),
            interaction(json!({ "support_team": null, "ticket_id": 5 })),
            interaction(json!({ "support_team": "ONC", "ticket_id": 6 })),
        ]
    }

    #[test]
    fn test_label_all_counts() {
        let outcome = label_all(sample_batch());

        assert_eq!(outcome.interactions.len(), 6);
        assert_eq!(outcome.matched_count, 3);
        assert_eq!(outcome.missing_team_count, 1);
    }

    #[test]
    fn test_label_all_per_record_results() {
        let outcome = label_all(sample_batch());
        let labels: Vec<Option<u8>> = outcome
            .interactions
            .iter()
            .map(|i| i.tech_support)
            .collect();

        assert_eq!(
            labels,
            vec![Some(1), Some(1), Some(1), None, None, None]
        );
    }

    #[test]
    fn test_label_all_is_order_independent() {
        let batch = sample_batch();
        let mut reversed = batch.clone();
        reversed.reverse();

        let forward = label_all(batch);
        let backward = label_all(reversed);

        for interaction in &forward.interactions {
            let id = &interaction.extra["ticket_id"];
            let twin = backward
                .interactions
                .iter()
                .find(|i| &i.extra["ticket_id"] == id)
                .unwrap();
            assert_eq!(interaction.tech_support, twin.tech_support);
        }
        assert_eq!(forward.matched_count, backward.matched_count);
    }

    #[test]
    fn test_label_all_empty_batch() {
        let outcome = label_all(Vec::new());
        assert!(outcome.interactions.is_empty());
        assert_eq!(outcome.matched_count, 0);
    }

    #[tokio::test]
    async fn test_run_labeler_end_to_end() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        storage.write_raw(sample_batch()).await.unwrap();
        let stats = run_labeler(&storage).await.unwrap();

        assert_eq!(stats.record_count, 6);
        assert_eq!(stats.matched_count, 3);
        assert_eq!(stats.missing_team_count, 1);
        assert_eq!(stats.unmatched_count(), 2);

        let labeled = storage.load_labeled().await.unwrap().unwrap();
        assert_eq!(labeled.count, 6);
        assert_eq!(labeled.interactions[0].tech_support, Some(1));
        // Untouched attributes survive the run
        assert_eq!(labeled.interactions[3].extra["ticket_id"], json!(4));
    }

    #[tokio::test]
    async fn test_run_labeler_without_snapshot() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        let result = run_labeler(&storage).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_run_labeler_twice_is_stable() {
        let tmp = TempDir::new().unwrap();
        let storage = LocalStorage::new(tmp.path());

        storage.write_raw(sample_batch()).await.unwrap();
        let first = run_labeler(&storage).await.unwrap();
        let first_labels = storage.load_labeled().await.unwrap().unwrap();

        let second = run_labeler(&storage).await.unwrap();
        let second_labels = storage.load_labeled().await.unwrap().unwrap();

        assert_eq!(first.matched_count, second.matched_count);
        assert_eq!(first_labels.interactions, second_labels.interactions);
    }
}
