//! Support-interaction record structure.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::classify::classify;

/// A support interaction pulled from the platform export.
///
/// Only `support_team` is meaningful to this crate; every other attribute is
/// captured in `extra` and carried through unchanged, so the labeled output
/// is structurally identical to the input plus the `tech_support` indicator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Interaction {
    /// Team that handled the interaction (may be absent on the source side)
    #[serde(default)]
    pub support_team: Option<String>,

    /// Derived indicator: `1` for a technical-support team, null otherwise.
    /// Serialized even when null so consumers can tell "labeled, unknown"
    /// from a field that was never present.
    #[serde(default)]
    pub tech_support: Option<u8>,

    /// All remaining attributes, opaque to the labeler
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Interaction {
    /// Return this interaction with `tech_support` derived from
    /// `support_team`. Overwrites any previous value; applying it twice
    /// yields the same record.
    pub fn labeled(mut self) -> Self {
        self.tech_support = classify(self.support_team.as_deref());
        self
    }

    /// Whether the record carries a positive technical-support label.
    pub fn is_tech_support(&self) -> bool {
        self.tech_support == Some(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn interaction(value: serde_json::Value) -> Interaction {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_label_recognized_team() {
        let record = interaction(json!({ "support_team": "tech support" })).labeled();
        assert_eq!(record.tech_support, Some(1));
        assert!(record.is_tech_support());
    }

    #[test]
    fn test_label_other_team() {
        let record = interaction(json!({ "support_team": "billing" })).labeled();
        assert_eq!(record.tech_support, None);
        assert!(!record.is_tech_support());
    }

    #[test]
    fn test_label_missing_team() {
        let record = interaction(json!({ "ticket_id": 42 })).labeled();
        assert_eq!(record.support_team, None);
        assert_eq!(record.tech_support, None);
    }

    #[test]
    fn test_label_null_team() {
        let record = interaction(json!({ "support_team": null })).labeled();
        assert_eq!(record.tech_support, None);
    }

    #[test]
    fn test_label_is_idempotent() {
        let record = interaction(json!({ "support_team": "onc" })).labeled();
        let relabeled = record.clone().labeled();
        assert_eq!(record, relabeled);
    }

    #[test]
    fn test_label_overwrites_stale_value() {
        let record = interaction(json!({
            "support_team": "billing",
            "tech_support": 1
        }))
        .labeled();
        assert_eq!(record.tech_support, None);
    }

    #[test]
    fn test_extra_attributes_pass_through() {
        let record = interaction(json!({
            "support_team": "taskus",
            "ticket_id": 42,
            "agent": { "name": "Kim", "shift": "night" }
        }))
        .labeled();

        assert_eq!(record.tech_support, Some(1));
        assert_eq!(record.extra["ticket_id"], json!(42));
        assert_eq!(record.extra["agent"]["name"], json!("Kim"));
    }

    #[test]
    fn test_unknown_label_serializes_as_null() {
        let record = interaction(json!({ "support_team": "billing" })).labeled();
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["tech_support"], serde_json::Value::Null);
    }

    #[test]
    fn test_non_string_team_is_rejected() {
        let result: Result<Interaction, _> =
            serde_json::from_value(json!({ "support_team": 7 }));
        assert!(result.is_err());
    }
}
