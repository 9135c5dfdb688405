//! Backing-store boundary
//!
//! The persistent storage layer is an external collaborator; the core only
//! depends on the write contracts below. Each call is assumed atomic on its
//! own - there is no transaction spanning several calls, and the submission
//! pipeline is built around that limitation.

use async_trait::async_trait;
use shared::models::{
    AssistRecord, CoachAssignmentRecord, GoalRecord, LineupRecord, MatchRecord, MatchScorePatch,
    NewAssist, NewCoachAssignment, NewGoal, NewLineupEntry, NewPenaltyAttempt, NewSubstitution,
    PenaltyRecord, SubstitutionRecord,
};
use thiserror::Error;

/// Store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Match not found: {0}")]
    MatchNotFound(i64),

    #[error("Missing reference: {0}")]
    MissingReference(String),

    #[error("Store unavailable: {0}")]
    Unavailable(String),

    #[error("Internal store error: {0}")]
    Internal(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Write operations the match-entry pipeline drives
///
/// Every create returns the stored record including its store-issued id;
/// the pipeline relies on those ids to resolve draft-local references.
#[async_trait]
pub trait MatchStore: Send + Sync {
    /// Patch the score block of an existing match. Fails with
    /// [`StoreError::MatchNotFound`] if the match does not exist.
    async fn update_match(&self, match_id: i64, patch: MatchScorePatch)
    -> StoreResult<MatchRecord>;

    async fn create_goal(&self, match_id: i64, goal: NewGoal) -> StoreResult<GoalRecord>;

    /// Fails with [`StoreError::MissingReference`] if `assist.goal_id` does
    /// not exist in the store.
    async fn create_assist(&self, match_id: i64, assist: NewAssist) -> StoreResult<AssistRecord>;

    async fn create_lineup_entry(
        &self,
        match_id: i64,
        entry: NewLineupEntry,
    ) -> StoreResult<LineupRecord>;

    async fn create_substitution(
        &self,
        match_id: i64,
        substitution: NewSubstitution,
    ) -> StoreResult<SubstitutionRecord>;

    async fn create_penalty_attempt(
        &self,
        match_id: i64,
        attempt: NewPenaltyAttempt,
    ) -> StoreResult<PenaltyRecord>;

    async fn create_coach_assignment(
        &self,
        match_id: i64,
        assignment: NewCoachAssignment,
    ) -> StoreResult<CoachAssignmentRecord>;

    async fn delete_coach_assignment(&self, match_id: i64, assignment_id: i64) -> StoreResult<()>;
}

/// Cached read views keyed by match id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchView {
    Match,
    Goals,
    Assists,
    Lineups,
    Substitutions,
    Penalties,
}

impl MatchView {
    /// Every view the submission pipeline refreshes after a full flush
    pub const ALL: [MatchView; 6] = [
        MatchView::Match,
        MatchView::Goals,
        MatchView::Assists,
        MatchView::Lineups,
        MatchView::Substitutions,
        MatchView::Penalties,
    ];
}

/// Read-side cache invalidation
///
/// Invalidation is advisory: implementations log their own failures rather
/// than failing a submission whose writes already committed.
#[async_trait]
pub trait ReadViews: Send + Sync {
    async fn invalidate(&self, match_id: i64, view: MatchView);
}
