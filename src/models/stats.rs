//! Run statistics for fetch and label passes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Statistics for one fetch run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchStats {
    /// When the fetch started
    pub start_time: DateTime<Utc>,

    /// When the fetch finished
    pub end_time: DateTime<Utc>,

    /// Pages requested
    pub page_total: usize,

    /// Pages that failed to fetch
    pub page_failures: usize,

    /// Interactions retrieved
    pub interaction_count: usize,
}

/// Statistics for one label run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabelStats {
    /// When the labeling started
    pub start_time: DateTime<Utc>,

    /// When the labeling finished
    pub end_time: DateTime<Utc>,

    /// Records processed (always equals records written)
    pub record_count: usize,

    /// Records labeled as technical support
    pub matched_count: usize,

    /// Records with no `support_team` value at all
    pub missing_team_count: usize,
}

impl LabelStats {
    /// Records that carried a team but did not match the rule.
    pub fn unmatched_count(&self) -> usize {
        self.record_count - self.matched_count - self.missing_team_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unmatched_count() {
        let stats = LabelStats {
            start_time: Utc::now(),
            end_time: Utc::now(),
            record_count: 10,
            matched_count: 3,
            missing_team_count: 2,
        };
        assert_eq!(stats.unmatched_count(), 5);
    }
}
