// src/classify.rs

//! Technical-support classification rule.
//!
//! Maps a `support_team` value to a `tech_support` indicator. This is the
//! one piece of business logic the rest of the crate exists to carry:
//! everything else fetches records in or writes records out.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Teams recognized as technical-support handling groups.
///
/// Matching is exact and case-sensitive on the literal string value. The set
/// mirrors the upstream reporting rule as observed; variants like
/// `"Tech Support"` or `"ONC"` are intentionally not recognized, and any
/// broadening must happen here, deliberately, not via normalization.
pub static TECH_SUPPORT_TEAMS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| HashSet::from(["tech support", "taskus", "onc"]));

/// Classify a `support_team` value as technical support or not.
///
/// Returns `Some(1)` when the team is a recognized technical-support team
/// and `None` in every other case, including a missing team. There is no
/// negative value: absence of a match is "unknown", not "false", so
/// downstream consumers never see a false signal the rule cannot back.
pub fn classify(support_team: Option<&str>) -> Option<u8> {
    match support_team {
        Some(team) if TECH_SUPPORT_TEAMS.contains(team) => Some(1),
        _ => None,
    }
}
