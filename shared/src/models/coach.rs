//! Coach Assignment Model

use crate::draft::DraftCoachAssignment;
use serde::{Deserialize, Serialize};

/// Coach assignment row as stored by the backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachAssignmentRecord {
    pub id: i64,
    pub match_id: i64,
    pub team_id: i64,
    pub coach_id: i64,
    pub role: String,
}

/// Create coach assignment payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewCoachAssignment {
    pub team_id: i64,
    pub coach_id: i64,
    pub role: String,
}

impl From<&DraftCoachAssignment> for NewCoachAssignment {
    fn from(assignment: &DraftCoachAssignment) -> Self {
        Self {
            team_id: assignment.team_id,
            coach_id: assignment.coach_id,
            role: assignment.role.clone(),
        }
    }
}
