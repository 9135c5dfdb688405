//! Goal Model

use crate::draft::{DraftGoal, GoalKind};
use serde::{Deserialize, Serialize};

/// Goal row as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalRecord {
    pub id: i64,
    pub match_id: i64,
    pub player_id: i64,
    pub minute: u32,
    pub kind: GoalKind,
    pub note: Option<String>,
}

/// Create goal payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewGoal {
    pub player_id: i64,
    pub minute: u32,
    pub kind: GoalKind,
    pub note: Option<String>,
}

impl From<&DraftGoal> for NewGoal {
    fn from(goal: &DraftGoal) -> Self {
        Self {
            player_id: goal.player_id,
            minute: goal.minute,
            kind: goal.kind,
            note: goal.note.clone(),
        }
    }
}
