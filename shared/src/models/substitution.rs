//! Substitution Model

use crate::draft::DraftSubstitution;
use serde::{Deserialize, Serialize};

/// Substitution row as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstitutionRecord {
    pub id: i64,
    pub match_id: i64,
    pub team_id: i64,
    pub player_in_id: i64,
    pub player_out_id: i64,
    pub minute: u32,
    pub note: Option<String>,
}

/// Create substitution payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewSubstitution {
    pub team_id: i64,
    pub player_in_id: i64,
    pub player_out_id: i64,
    pub minute: u32,
    pub note: Option<String>,
}

impl From<&DraftSubstitution> for NewSubstitution {
    fn from(substitution: &DraftSubstitution) -> Self {
        Self {
            team_id: substitution.team_id,
            player_in_id: substitution.player_in_id,
            player_out_id: substitution.player_out_id,
            minute: substitution.minute,
            note: substitution.note.clone(),
        }
    }
}
