//! Penalty Attempt Model

use crate::draft::DraftPenaltyAttempt;
use serde::{Deserialize, Serialize};

/// Shootout attempt row as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PenaltyRecord {
    pub id: i64,
    pub match_id: i64,
    pub team_id: i64,
    pub kicker_id: i64,
    pub goalkeeper_id: i64,
    pub scored: bool,
    pub order: u32,
}

/// Create shootout attempt payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPenaltyAttempt {
    pub team_id: i64,
    pub kicker_id: i64,
    pub goalkeeper_id: i64,
    pub scored: bool,
    pub order: u32,
}

impl From<&DraftPenaltyAttempt> for NewPenaltyAttempt {
    fn from(attempt: &DraftPenaltyAttempt) -> Self {
        Self {
            team_id: attempt.team_id,
            kicker_id: attempt.kicker_id,
            goalkeeper_id: attempt.goalkeeper_id,
            scored: attempt.scored,
            order: attempt.order,
        }
    }
}
