//! Submission pipeline - ordered flush of a validated draft
//!
//! Given a backing-store match id and a validated draft snapshot, performs
//! the minimum ordered sequence of store writes required by referential
//! dependencies and surfaces the first failure.
//!
//! # Write Order
//!
//! ```text
//! submit(match_id, draft)
//!     ├─ 1. Score update (independent, establishes match status)
//!     ├─ 2. Goals (concurrent; collect draft id -> store id map)
//!     ├─ 3. Assists (goal references resolved through the map)
//!     ├─ 4. Lineup entries
//!     ├─ 5. Substitutions
//!     ├─ 6. Penalty attempts
//!     └─ 7. Invalidate cached read views for the match
//! ```
//!
//! Writes within one category are independent and dispatched concurrently;
//! the category order itself is a hard contract. There is no rollback: a
//! failure mid-sequence leaves the earlier categories committed, and the
//! caller keeps the draft intact for inspection and retry. Re-submitting a
//! partially committed draft re-creates the rows that already succeeded.

use crate::store::{MatchStore, MatchView, ReadViews, StoreError};
use futures::future::try_join_all;
use serde::{Deserialize, Serialize};
use shared::draft::MatchDraft;
use shared::models::{
    CoachAssignmentRecord, MatchScorePatch, NewAssist, NewCoachAssignment, NewGoal,
    NewLineupEntry, NewPenaltyAttempt, NewSubstitution,
};
use shared::validation::EntryCategory;
use std::collections::HashMap;
use std::sync::Arc;
use thiserror::Error;

/// Submission errors
#[derive(Debug, Error)]
pub enum SubmitError {
    /// A backing-store write failed; earlier categories stay committed
    #[error("{category} write failed: {source}")]
    Store {
        category: EntryCategory,
        #[source]
        source: StoreError,
    },

    /// An assist's goal reference has no stored counterpart. The draft was
    /// submitted without passing validation, or a goal creation failed to
    /// report an id - an internal inconsistency, not an operator mistake.
    #[error("assist references goal draft id {goal_draft_id} with no stored counterpart")]
    UnresolvedGoalRef { goal_draft_id: String },
}

impl SubmitError {
    /// Category the submission stopped in
    pub fn category(&self) -> EntryCategory {
        match self {
            SubmitError::Store { category, .. } => *category,
            SubmitError::UnresolvedGoalRef { .. } => EntryCategory::Assists,
        }
    }
}

pub type SubmitResult<T> = Result<T, SubmitError>;

/// Per-category created counts of a completed submission
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct SubmissionSummary {
    pub goals: usize,
    pub assists: usize,
    pub lineups: usize,
    pub substitutions: usize,
    pub penalties: usize,
}

/// Flushes validated drafts into the backing store
pub struct SubmissionPipeline {
    store: Arc<dyn MatchStore>,
    views: Arc<dyn ReadViews>,
}

impl SubmissionPipeline {
    pub fn new(store: Arc<dyn MatchStore>, views: Arc<dyn ReadViews>) -> Self {
        Self { store, views }
    }

    /// Flush a validated draft into the store
    ///
    /// The caller is responsible for running the draft through `validate`
    /// first and for keeping the draft intact on failure. Retry is not
    /// idempotent: categories that committed before the failure will be
    /// created again on a second submit.
    pub async fn submit(
        &self,
        match_id: i64,
        draft: &MatchDraft,
    ) -> SubmitResult<SubmissionSummary> {
        tracing::info!(
            match_id,
            goals = draft.goals.len(),
            assists = draft.assists.len(),
            lineups = draft.lineups.len(),
            substitutions = draft.substitutions.len(),
            penalties = draft.penalties.len(),
            "Submitting match entry"
        );

        // 1. Score first: independent of every other category and
        // establishes the match status.
        self.store
            .update_match(match_id, MatchScorePatch::from(&draft.score))
            .await
            .map_err(|e| Self::store_failure(EntryCategory::Score, e))?;

        // 2. Goal creations are mutually independent and dispatched
        // concurrently, but step 3 needs the complete id map, so all of
        // them are awaited here.
        let created = try_join_all(draft.goals.iter().map(|goal| async move {
            let record = self.store.create_goal(match_id, NewGoal::from(goal)).await?;
            Ok::<_, StoreError>((goal.draft_id.clone(), record.id))
        }))
        .await
        .map_err(|e| Self::store_failure(EntryCategory::Goals, e))?;
        let goal_ids: HashMap<String, i64> = created.into_iter().collect();

        // 3. Resolve every assist's goal reference through the map before
        // any assist write is issued; a missing entry aborts the rest of
        // the submission.
        let mut assists = Vec::with_capacity(draft.assists.len());
        for assist in &draft.assists {
            let goal_id = *goal_ids.get(&assist.goal_draft_id).ok_or_else(|| {
                tracing::error!(
                    match_id,
                    goal_draft_id = %assist.goal_draft_id,
                    "Assist goal reference did not resolve to a store id"
                );
                SubmitError::UnresolvedGoalRef {
                    goal_draft_id: assist.goal_draft_id.clone(),
                }
            })?;
            assists.push(NewAssist::from_draft(assist, goal_id));
        }
        try_join_all(
            assists
                .into_iter()
                .map(|assist| self.store.create_assist(match_id, assist)),
        )
        .await
        .map_err(|e| Self::store_failure(EntryCategory::Assists, e))?;

        // 4. Lineups are independent of goals and assists; they are written
        // after them to keep the sequence auditable.
        try_join_all(
            draft
                .lineups
                .iter()
                .map(|entry| self.store.create_lineup_entry(match_id, NewLineupEntry::from(entry))),
        )
        .await
        .map_err(|e| Self::store_failure(EntryCategory::Lineups, e))?;

        // 5. Substitutions.
        try_join_all(draft.substitutions.iter().map(|substitution| {
            self.store
                .create_substitution(match_id, NewSubstitution::from(substitution))
        }))
        .await
        .map_err(|e| Self::store_failure(EntryCategory::Substitutions, e))?;

        // 6. Penalty attempts last; only meaningful once the score step has
        // recorded the penalty scores.
        try_join_all(draft.penalties.iter().map(|attempt| {
            self.store
                .create_penalty_attempt(match_id, NewPenaltyAttempt::from(attempt))
        }))
        .await
        .map_err(|e| Self::store_failure(EntryCategory::Penalties, e))?;

        // 7. Every write succeeded; refresh the cached read views so
        // subsequent reads see the new state.
        for view in MatchView::ALL {
            self.views.invalidate(match_id, view).await;
        }

        let summary = SubmissionSummary {
            goals: draft.goals.len(),
            assists: draft.assists.len(),
            lineups: draft.lineups.len(),
            substitutions: draft.substitutions.len(),
            penalties: draft.penalties.len(),
        };
        tracing::info!(match_id, ?summary, "Match entry submitted");
        Ok(summary)
    }

    /// Persist the drafted coach assignments
    ///
    /// Coaches take the simpler create-only path: no cross-entity
    /// references, no position in the ordered sequence.
    pub async fn submit_coaches(
        &self,
        match_id: i64,
        draft: &MatchDraft,
    ) -> SubmitResult<Vec<CoachAssignmentRecord>> {
        let records = try_join_all(draft.coaches.iter().map(|assignment| {
            self.store
                .create_coach_assignment(match_id, NewCoachAssignment::from(assignment))
        }))
        .await
        .map_err(|e| Self::store_failure(EntryCategory::Coaches, e))?;

        self.views.invalidate(match_id, MatchView::Match).await;
        tracing::info!(match_id, coaches = records.len(), "Coach assignments submitted");
        Ok(records)
    }

    /// Remove an already-persisted coach assignment
    pub async fn remove_coach_assignment(
        &self,
        match_id: i64,
        assignment_id: i64,
    ) -> SubmitResult<()> {
        self.store
            .delete_coach_assignment(match_id, assignment_id)
            .await
            .map_err(|e| Self::store_failure(EntryCategory::Coaches, e))?;
        self.views.invalidate(match_id, MatchView::Match).await;
        Ok(())
    }

    fn store_failure(category: EntryCategory, source: StoreError) -> SubmitError {
        tracing::error!(%category, error = %source, "Match entry write failed");
        SubmitError::Store { category, source }
    }
}
