//! Draft change events
//!
//! Every mutation of the draft broadcasts one of these so UI surfaces can
//! refresh from the latest snapshot without polling.

use crate::validation::EntryCategory;
use serde::{Deserialize, Serialize};

/// Change notification emitted by the draft manager
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DraftEvent {
    /// The score block was patched
    ScoreUpdated { revision: u64 },

    /// An entry was appended to one of the collections
    EntryAdded {
        revision: u64,
        category: EntryCategory,
        draft_id: String,
    },

    /// An entry was removed; `cascaded` lists the assist draft ids removed
    /// alongside a goal
    EntryRemoved {
        revision: u64,
        category: EntryCategory,
        draft_id: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        cascaded: Vec<String>,
    },

    /// The whole draft was replaced with a fresh empty one
    DraftReset { revision: u64 },
}

impl DraftEvent {
    /// Revision of the draft after the mutation
    pub fn revision(&self) -> u64 {
        match self {
            DraftEvent::ScoreUpdated { revision }
            | DraftEvent::EntryAdded { revision, .. }
            | DraftEvent::EntryRemoved { revision, .. }
            | DraftEvent::DraftReset { revision } => *revision,
        }
    }
}
