//! Match Record Model

use crate::draft::{MatchStatus, ScoreDraft};
use serde::{Deserialize, Serialize};

/// Match row as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchRecord {
    pub id: i64,
    pub home_team_id: i64,
    pub away_team_id: i64,
    pub home_score: u32,
    pub away_score: u32,
    pub penalty_home_score: Option<u32>,
    pub penalty_away_score: Option<u32>,
    pub status: MatchStatus,
    pub kickoff_at: i64,
    pub updated_at: i64,
}

/// Score-block update payload
///
/// Touches only the score fields of the match row; teams and kickoff are
/// managed elsewhere.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchScorePatch {
    pub home_score: u32,
    pub away_score: u32,
    pub penalty_home_score: Option<u32>,
    pub penalty_away_score: Option<u32>,
    pub status: MatchStatus,
}

impl From<&ScoreDraft> for MatchScorePatch {
    fn from(score: &ScoreDraft) -> Self {
        Self {
            home_score: score.home_score,
            away_score: score.away_score,
            penalty_home_score: score.penalty_home_score,
            penalty_away_score: score.penalty_away_score,
            status: score.status,
        }
    }
}
