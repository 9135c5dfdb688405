//! Assist Model

use crate::draft::DraftAssist;
use serde::{Deserialize, Serialize};

/// Assist row as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistRecord {
    pub id: i64,
    pub match_id: i64,
    pub player_id: i64,
    pub goal_id: i64,
    pub note: Option<String>,
}

/// Create assist payload
///
/// `goal_id` is the store-issued id of the referenced goal. The draft-local
/// goal reference must be resolved before this payload can be built; see
/// [`NewAssist::from_draft`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewAssist {
    pub player_id: i64,
    pub goal_id: i64,
    pub note: Option<String>,
}

impl NewAssist {
    /// Build the payload from a drafted assist and its resolved goal id
    pub fn from_draft(assist: &DraftAssist, goal_id: i64) -> Self {
        Self {
            player_id: assist.player_id,
            goal_id,
            note: assist.note.clone(),
        }
    }
}
