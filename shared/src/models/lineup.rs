//! Lineup Entry Model

use crate::draft::DraftLineupEntry;
use serde::{Deserialize, Serialize};

/// Lineup row as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineupRecord {
    pub id: i64,
    pub match_id: i64,
    pub player_id: i64,
    pub team_id: i64,
    pub position: String,
    pub shirt_number: Option<u32>,
    pub minutes_played: u32,
    pub goals_conceded: Option<u32>,
}

/// Create lineup entry payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewLineupEntry {
    pub player_id: i64,
    pub team_id: i64,
    pub position: String,
    pub shirt_number: Option<u32>,
    pub minutes_played: u32,
    pub goals_conceded: Option<u32>,
}

impl From<&DraftLineupEntry> for NewLineupEntry {
    fn from(entry: &DraftLineupEntry) -> Self {
        Self {
            player_id: entry.player_id,
            team_id: entry.team_id,
            position: entry.position.clone(),
            shirt_number: entry.shirt_number,
            minutes_played: entry.minutes_played,
            goals_conceded: entry.goals_conceded,
        }
    }
}
