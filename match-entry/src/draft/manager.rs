//! DraftManager - in-memory staging of one match's events
//!
//! Single-writer owner of the not-yet-submitted draft. Operator actions
//! mutate the draft through the methods below; nothing here talks to the
//! backing store, and no operation can fail (inputs are pre-validated by
//! the entry forms).
//!
//! # Mutation Flow
//!
//! ```text
//! add_goal(input)
//!     ├─ 1. Assign draft id (UUID v4)
//!     ├─ 2. Append under the write lock, bump revision
//!     ├─ 3. Release lock
//!     └─ 4. Broadcast DraftEvent to all subscribers
//! ```
//!
//! The one computed side effect in the system is the goal cascade:
//! removing a goal also removes every assist referencing it, because a
//! dangling assist is never valid.

use parking_lot::RwLock;
use shared::draft::{
    AssistInput, CoachInput, DraftAssist, DraftCoachAssignment, DraftEvent, DraftGoal,
    DraftLineupEntry, DraftPenaltyAttempt, DraftSubstitution, GoalInput, LineupInput, MatchDraft,
    PenaltyInput, ScorePatch, SubstitutionInput,
};
use shared::validation::EntryCategory;
use tokio::sync::broadcast;

/// Event broadcast channel capacity
const EVENT_CHANNEL_CAPACITY: usize = 256;

/// In-memory draft store for a single match entry session
///
/// Exclusively owned by one editing session; hand out clones of an
/// `Arc<DraftManager>` to UI surfaces, never references to the inner
/// collections.
pub struct DraftManager {
    draft: RwLock<MatchDraft>,
    event_tx: broadcast::Sender<DraftEvent>,
}

impl DraftManager {
    /// Create a manager holding a fresh empty draft
    pub fn new() -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            draft: RwLock::new(MatchDraft::new()),
            event_tx,
        }
    }

    /// Subscribe to draft change events
    pub fn subscribe(&self) -> broadcast::Receiver<DraftEvent> {
        self.event_tx.subscribe()
    }

    /// Current draft as an owned immutable snapshot
    pub fn snapshot(&self) -> MatchDraft {
        self.draft.read().clone()
    }

    /// Merge a partial update into the singleton score
    ///
    /// No validation happens here; the validator judges the draft as a
    /// whole after every mutation.
    pub fn set_score(&self, patch: ScorePatch) {
        let revision = {
            let mut draft = self.draft.write();
            let score = &mut draft.score;
            if let Some(home_score) = patch.home_score {
                score.home_score = home_score;
            }
            if let Some(away_score) = patch.away_score {
                score.away_score = away_score;
            }
            if let Some(penalty_home_score) = patch.penalty_home_score {
                score.penalty_home_score = penalty_home_score;
            }
            if let Some(penalty_away_score) = patch.penalty_away_score {
                score.penalty_away_score = penalty_away_score;
            }
            if let Some(status) = patch.status {
                score.status = status;
            }
            draft.touch()
        };
        tracing::debug!(revision, "Score updated");
        let _ = self.event_tx.send(DraftEvent::ScoreUpdated { revision });
    }

    /// Append a goal; returns its draft id so the caller can reference it
    /// immediately (e.g. to pre-fill an assist form)
    pub fn add_goal(&self, input: GoalInput) -> String {
        let draft_id = Self::next_draft_id();
        let revision = {
            let mut draft = self.draft.write();
            draft.goals.push(DraftGoal::new(draft_id.clone(), input));
            draft.touch()
        };
        self.notify_added(EntryCategory::Goals, &draft_id, revision);
        draft_id
    }

    /// Remove a goal and cascade to every assist referencing it
    ///
    /// The cascade is reference-exact: only assists whose goal reference
    /// equals `draft_id` are removed. Unknown ids are a no-op.
    pub fn remove_goal(&self, draft_id: &str) {
        let (revision, cascaded) = {
            let mut draft = self.draft.write();
            let goals_before = draft.goals.len();
            draft.goals.retain(|g| g.draft_id != draft_id);
            if draft.goals.len() == goals_before {
                return;
            }

            let cascaded: Vec<String> = draft
                .assists
                .iter()
                .filter(|a| a.goal_draft_id == draft_id)
                .map(|a| a.draft_id.clone())
                .collect();
            draft.assists.retain(|a| a.goal_draft_id != draft_id);

            (draft.touch(), cascaded)
        };

        if !cascaded.is_empty() {
            tracing::info!(
                goal_draft_id = %draft_id,
                cascaded = cascaded.len(),
                "Removed goal and its assists"
            );
        }
        let _ = self.event_tx.send(DraftEvent::EntryRemoved {
            revision,
            category: EntryCategory::Goals,
            draft_id: draft_id.to_string(),
            cascaded,
        });
    }

    /// Append an assist; returns its draft id
    pub fn add_assist(&self, input: AssistInput) -> String {
        let draft_id = Self::next_draft_id();
        let revision = {
            let mut draft = self.draft.write();
            draft.assists.push(DraftAssist::new(draft_id.clone(), input));
            draft.touch()
        };
        self.notify_added(EntryCategory::Assists, &draft_id, revision);
        draft_id
    }

    /// Remove an assist by draft id
    pub fn remove_assist(&self, draft_id: &str) {
        let revision = {
            let mut draft = self.draft.write();
            let before = draft.assists.len();
            draft.assists.retain(|a| a.draft_id != draft_id);
            if draft.assists.len() == before {
                return;
            }
            draft.touch()
        };
        self.notify_removed(EntryCategory::Assists, draft_id, revision);
    }

    /// Append a lineup entry; returns its draft id
    pub fn add_lineup(&self, input: LineupInput) -> String {
        let draft_id = Self::next_draft_id();
        let revision = {
            let mut draft = self.draft.write();
            draft
                .lineups
                .push(DraftLineupEntry::new(draft_id.clone(), input));
            draft.touch()
        };
        self.notify_added(EntryCategory::Lineups, &draft_id, revision);
        draft_id
    }

    /// Remove a lineup entry by draft id
    pub fn remove_lineup(&self, draft_id: &str) {
        let revision = {
            let mut draft = self.draft.write();
            let before = draft.lineups.len();
            draft.lineups.retain(|l| l.draft_id != draft_id);
            if draft.lineups.len() == before {
                return;
            }
            draft.touch()
        };
        self.notify_removed(EntryCategory::Lineups, draft_id, revision);
    }

    /// Append a substitution; returns its draft id
    pub fn add_substitution(&self, input: SubstitutionInput) -> String {
        let draft_id = Self::next_draft_id();
        let revision = {
            let mut draft = self.draft.write();
            draft
                .substitutions
                .push(DraftSubstitution::new(draft_id.clone(), input));
            draft.touch()
        };
        self.notify_added(EntryCategory::Substitutions, &draft_id, revision);
        draft_id
    }

    /// Remove a substitution by draft id
    pub fn remove_substitution(&self, draft_id: &str) {
        let revision = {
            let mut draft = self.draft.write();
            let before = draft.substitutions.len();
            draft.substitutions.retain(|s| s.draft_id != draft_id);
            if draft.substitutions.len() == before {
                return;
            }
            draft.touch()
        };
        self.notify_removed(EntryCategory::Substitutions, draft_id, revision);
    }

    /// Append a shootout attempt; returns its draft id
    pub fn add_penalty(&self, input: PenaltyInput) -> String {
        let draft_id = Self::next_draft_id();
        let revision = {
            let mut draft = self.draft.write();
            draft
                .penalties
                .push(DraftPenaltyAttempt::new(draft_id.clone(), input));
            draft.touch()
        };
        self.notify_added(EntryCategory::Penalties, &draft_id, revision);
        draft_id
    }

    /// Remove a shootout attempt by draft id
    pub fn remove_penalty(&self, draft_id: &str) {
        let revision = {
            let mut draft = self.draft.write();
            let before = draft.penalties.len();
            draft.penalties.retain(|p| p.draft_id != draft_id);
            if draft.penalties.len() == before {
                return;
            }
            draft.touch()
        };
        self.notify_removed(EntryCategory::Penalties, draft_id, revision);
    }

    /// Append a coach assignment; returns its draft id
    pub fn add_coach(&self, input: CoachInput) -> String {
        let draft_id = Self::next_draft_id();
        let revision = {
            let mut draft = self.draft.write();
            draft
                .coaches
                .push(DraftCoachAssignment::new(draft_id.clone(), input));
            draft.touch()
        };
        self.notify_added(EntryCategory::Coaches, &draft_id, revision);
        draft_id
    }

    /// Remove a coach assignment by draft id
    pub fn remove_coach(&self, draft_id: &str) {
        let revision = {
            let mut draft = self.draft.write();
            let before = draft.coaches.len();
            draft.coaches.retain(|c| c.draft_id != draft_id);
            if draft.coaches.len() == before {
                return;
            }
            draft.touch()
        };
        self.notify_removed(EntryCategory::Coaches, draft_id, revision);
    }

    /// Replace the draft with a fresh empty one
    ///
    /// Contents return to the initial shape; the revision keeps counting so
    /// the change feed stays monotonic for subscribers.
    pub fn reset(&self) {
        let revision = {
            let mut draft = self.draft.write();
            let revision = draft.revision + 1;
            *draft = MatchDraft::new();
            draft.revision = revision;
            revision
        };
        tracing::info!(revision, "Draft reset");
        let _ = self.event_tx.send(DraftEvent::DraftReset { revision });
    }

    fn next_draft_id() -> String {
        uuid::Uuid::new_v4().to_string()
    }

    fn notify_added(&self, category: EntryCategory, draft_id: &str, revision: u64) {
        tracing::debug!(%category, draft_id = %draft_id, revision, "Entry added");
        let _ = self.event_tx.send(DraftEvent::EntryAdded {
            revision,
            category,
            draft_id: draft_id.to_string(),
        });
    }

    fn notify_removed(&self, category: EntryCategory, draft_id: &str, revision: u64) {
        tracing::debug!(%category, draft_id = %draft_id, revision, "Entry removed");
        let _ = self.event_tx.send(DraftEvent::EntryRemoved {
            revision,
            category,
            draft_id: draft_id.to_string(),
            cascaded: Vec::new(),
        });
    }
}

impl Default for DraftManager {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for DraftManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let draft = self.draft.read();
        f.debug_struct("DraftManager")
            .field("revision", &draft.revision)
            .field("goals", &draft.goals.len())
            .field("assists", &draft.assists.len())
            .finish()
    }
}
