//! Draft entity types for match entry
//!
//! Every drafted entity carries a client-generated `draft_id` so that other
//! draft entries (and the submission pipeline) can reference it before the
//! backing store has issued a permanent identifier.

use serde::{Deserialize, Serialize};

// ============================================================================
// Enumerations
// ============================================================================

/// Match lifecycle status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MatchStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
    Postponed,
}

/// How a goal was scored
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GoalKind {
    #[default]
    Normal,
    Penalty,
    FreeKick,
    OwnGoal,
}

// ============================================================================
// Score
// ============================================================================

/// Singleton score block of a draft
///
/// Penalty scores are only meaningful as a pair; the validator reports a
/// score-category error when exactly one of them is present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ScoreDraft {
    /// Home side goals
    pub home_score: u32,
    /// Away side goals
    pub away_score: u32,
    /// Home side shootout score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty_home_score: Option<u32>,
    /// Away side shootout score
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty_away_score: Option<u32>,
    /// Match status
    pub status: MatchStatus,
}

impl ScoreDraft {
    /// Whether both shootout scores have been recorded
    pub fn has_penalty_score(&self) -> bool {
        self.penalty_home_score.is_some() && self.penalty_away_score.is_some()
    }

    /// Combined shootout total, when both sides are recorded
    pub fn penalty_total(&self) -> Option<u32> {
        match (self.penalty_home_score, self.penalty_away_score) {
            (Some(home), Some(away)) => Some(home + away),
            _ => None,
        }
    }
}

/// Partial update merged into [`ScoreDraft`]
///
/// Absent fields leave the current value untouched. No validation happens
/// at merge time; the validator judges the resulting draft as a whole.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ScorePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub home_score: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub away_score: Option<u32>,
    /// `Some(None)` clears a previously recorded value
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty_home_score: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub penalty_away_score: Option<Option<u32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<MatchStatus>,
}

// ============================================================================
// Inputs (from the entry forms)
// ============================================================================

/// Goal as captured by the entry form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalInput {
    /// Scoring player
    pub player_id: i64,
    /// Match minute (0-120 by convention)
    pub minute: u32,
    #[serde(default)]
    pub kind: GoalKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Assist as captured by the entry form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssistInput {
    /// Crediting player
    pub player_id: i64,
    /// Draft id of the goal this assist belongs to
    pub goal_draft_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Lineup entry as captured by the entry form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineupInput {
    pub player_id: i64,
    pub team_id: i64,
    /// Position code (e.g. "GK", "DF", "MF", "FW")
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shirt_number: Option<u32>,
    pub minutes_played: u32,
    /// Only meaningful for the goalkeeper position
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals_conceded: Option<u32>,
}

/// Substitution as captured by the entry form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubstitutionInput {
    pub team_id: i64,
    pub player_in_id: i64,
    pub player_out_id: i64,
    pub minute: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Shootout attempt as captured by the entry form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PenaltyInput {
    pub team_id: i64,
    /// Kicking player
    pub kicker_id: i64,
    /// Opposing goalkeeper
    pub goalkeeper_id: i64,
    pub scored: bool,
    /// 1-based shootout sequence, unique within the draft
    pub order: u32,
}

/// Coach assignment as captured by the entry form
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoachInput {
    pub team_id: i64,
    pub coach_id: i64,
    /// Role code (e.g. "HEAD", "ASSISTANT")
    pub role: String,
}

// ============================================================================
// Drafted entries (inputs plus an assigned draft id)
// ============================================================================

/// Drafted goal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftGoal {
    /// Client-generated identifier, stable for the lifetime of the entry
    pub draft_id: String,
    pub player_id: i64,
    pub minute: u32,
    pub kind: GoalKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DraftGoal {
    pub fn new(draft_id: String, input: GoalInput) -> Self {
        Self {
            draft_id,
            player_id: input.player_id,
            minute: input.minute,
            kind: input.kind,
            note: input.note,
        }
    }
}

/// Drafted assist
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftAssist {
    pub draft_id: String,
    pub player_id: i64,
    /// Draft id of the referenced goal; must resolve within the same draft
    pub goal_draft_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DraftAssist {
    pub fn new(draft_id: String, input: AssistInput) -> Self {
        Self {
            draft_id,
            player_id: input.player_id,
            goal_draft_id: input.goal_draft_id,
            note: input.note,
        }
    }
}

/// Drafted lineup entry
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftLineupEntry {
    pub draft_id: String,
    pub player_id: i64,
    pub team_id: i64,
    pub position: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shirt_number: Option<u32>,
    pub minutes_played: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goals_conceded: Option<u32>,
}

impl DraftLineupEntry {
    pub fn new(draft_id: String, input: LineupInput) -> Self {
        Self {
            draft_id,
            player_id: input.player_id,
            team_id: input.team_id,
            position: input.position,
            shirt_number: input.shirt_number,
            minutes_played: input.minutes_played,
            goals_conceded: input.goals_conceded,
        }
    }
}

/// Drafted substitution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftSubstitution {
    pub draft_id: String,
    pub team_id: i64,
    pub player_in_id: i64,
    pub player_out_id: i64,
    pub minute: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl DraftSubstitution {
    pub fn new(draft_id: String, input: SubstitutionInput) -> Self {
        Self {
            draft_id,
            team_id: input.team_id,
            player_in_id: input.player_in_id,
            player_out_id: input.player_out_id,
            minute: input.minute,
            note: input.note,
        }
    }
}

/// Drafted shootout attempt
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftPenaltyAttempt {
    pub draft_id: String,
    pub team_id: i64,
    pub kicker_id: i64,
    pub goalkeeper_id: i64,
    pub scored: bool,
    pub order: u32,
}

impl DraftPenaltyAttempt {
    pub fn new(draft_id: String, input: PenaltyInput) -> Self {
        Self {
            draft_id,
            team_id: input.team_id,
            kicker_id: input.kicker_id,
            goalkeeper_id: input.goalkeeper_id,
            scored: input.scored,
            order: input.order,
        }
    }
}

/// Drafted coach assignment
///
/// Persisted through the simpler create/delete path; never part of the
/// ordered submission sequence.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DraftCoachAssignment {
    pub draft_id: String,
    pub team_id: i64,
    pub coach_id: i64,
    pub role: String,
}

impl DraftCoachAssignment {
    pub fn new(draft_id: String, input: CoachInput) -> Self {
        Self {
            draft_id,
            team_id: input.team_id,
            coach_id: input.coach_id,
            role: input.role,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enum_wire_format() {
        assert_eq!(
            serde_json::to_string(&GoalKind::FreeKick).unwrap(),
            "\"FREE_KICK\""
        );
        assert_eq!(
            serde_json::to_string(&MatchStatus::Postponed).unwrap(),
            "\"POSTPONED\""
        );
    }

    #[test]
    fn test_penalty_total_requires_both_sides() {
        let mut score = ScoreDraft {
            penalty_home_score: Some(4),
            ..Default::default()
        };
        assert!(!score.has_penalty_score());
        assert_eq!(score.penalty_total(), None);

        score.penalty_away_score = Some(3);
        assert!(score.has_penalty_score());
        assert_eq!(score.penalty_total(), Some(7));
    }
}
