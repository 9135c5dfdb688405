//! Validation report types
//!
//! Validation problems are returned as data, never as errors: the operator
//! should see every problem at once, and the UI decides whether to withhold
//! submission.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Event category of the match-entry workflow
///
/// Categories tag both validation messages and submission failures.
#[derive(
    Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EntryCategory {
    Score,
    Goals,
    Assists,
    Lineups,
    Substitutions,
    Penalties,
    /// Coach assignments are never validated, but their separate
    /// persistence path still tags failures with this category
    Coaches,
}

impl std::fmt::Display for EntryCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            EntryCategory::Score => "score",
            EntryCategory::Goals => "goals",
            EntryCategory::Assists => "assists",
            EntryCategory::Lineups => "lineups",
            EntryCategory::Substitutions => "substitutions",
            EntryCategory::Penalties => "penalties",
            EntryCategory::Coaches => "coaches",
        };
        write!(f, "{}", name)
    }
}

/// Outcome of validating a whole draft
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct ValidationReport {
    /// Operator-facing messages, grouped by category
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: BTreeMap<EntryCategory, Vec<String>>,
}

impl ValidationReport {
    /// True iff no category collected any message
    pub fn is_valid(&self) -> bool {
        self.errors.values().all(|messages| messages.is_empty())
    }

    /// Messages recorded for one category
    pub fn messages(&self, category: EntryCategory) -> &[String] {
        self.errors
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Record a message under a category
    pub fn push(&mut self, category: EntryCategory, message: impl Into<String>) {
        self.errors.entry(category).or_default().push(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_report_is_valid() {
        let report = ValidationReport::default();
        assert!(report.is_valid());
        assert!(report.messages(EntryCategory::Goals).is_empty());
    }

    #[test]
    fn test_push_invalidates() {
        let mut report = ValidationReport::default();
        report.push(EntryCategory::Penalties, "no attempts recorded");
        assert!(!report.is_valid());
        assert_eq!(report.messages(EntryCategory::Penalties).len(), 1);
    }
}
