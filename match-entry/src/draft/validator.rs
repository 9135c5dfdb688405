//! Whole-draft validation
//!
//! `validate` is a pure function over a draft snapshot: deterministic,
//! side-effect-free, cheap enough to run after every mutation. Every check
//! runs - nothing short-circuits - so the operator sees all problems at
//! once. The report only describes; withholding submission is the caller's
//! job.

use shared::draft::MatchDraft;
use shared::validation::{EntryCategory, ValidationReport};
use std::collections::HashSet;

/// Validate a draft snapshot against the entry invariants
pub fn validate(draft: &MatchDraft) -> ValidationReport {
    let mut report = ValidationReport::default();

    check_score(draft, &mut report);
    check_goals(draft, &mut report);
    check_assists(draft, &mut report);
    check_penalties(draft, &mut report);

    report
}

/// Penalty scores are only meaningful as a pair
fn check_score(draft: &MatchDraft, report: &mut ValidationReport) {
    let score = &draft.score;
    if score.penalty_home_score.is_some() != score.penalty_away_score.is_some() {
        report.push(
            EntryCategory::Score,
            "penalty scores must be recorded for both sides or neither",
        );
    }
}

/// Goal count (own goals included) must match the recorded score
fn check_goals(draft: &MatchDraft, report: &mut ValidationReport) {
    let expected = draft.score.home_score + draft.score.away_score;
    let recorded = draft.goal_count() as u32;
    if recorded != expected {
        report.push(
            EntryCategory::Goals,
            format!(
                "{} goal(s) recorded but the score adds up to {}",
                recorded, expected
            ),
        );
    }
}

/// Every assist must reference a goal still present in the draft
///
/// One pooled message regardless of how many assists dangle; the entry
/// form highlights the offending rows itself.
fn check_assists(draft: &MatchDraft, report: &mut ValidationReport) {
    let goal_ids: HashSet<&str> = draft.goal_draft_ids();
    let dangling = draft
        .assists
        .iter()
        .any(|a| !goal_ids.contains(a.goal_draft_id.as_str()));
    if dangling {
        report.push(
            EntryCategory::Assists,
            "one or more assists reference a goal that is not in the draft",
        );
    }
}

/// Shootout bookkeeping, only judged once both penalty scores are present
///
/// The shootout is modeled as one pooled list of attempts, so the scored
/// count is compared against the combined total rather than per side.
fn check_penalties(draft: &MatchDraft, report: &mut ValidationReport) {
    if !draft.penalties.is_empty() {
        let mut seen = HashSet::new();
        if !draft.penalties.iter().all(|p| seen.insert(p.order)) {
            report.push(
                EntryCategory::Penalties,
                "shootout attempts must have unique order numbers",
            );
        }
    }

    let Some(total) = draft.score.penalty_total() else {
        return;
    };

    if draft.penalties.is_empty() {
        report.push(
            EntryCategory::Penalties,
            "penalty scores are recorded but no shootout attempts exist",
        );
        return;
    }

    let scored = draft.scored_penalty_count() as u32;
    if scored != total {
        report.push(
            EntryCategory::Penalties,
            format!(
                "{} scored attempt(s) recorded but the penalty scores add up to {}",
                scored, total
            ),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::draft::{
        AssistInput, DraftAssist, DraftGoal, DraftPenaltyAttempt, GoalInput, GoalKind,
        PenaltyInput,
    };

    fn draft_goal(draft_id: &str, kind: GoalKind) -> DraftGoal {
        DraftGoal::new(
            draft_id.to_string(),
            GoalInput {
                player_id: 7,
                minute: 30,
                kind,
                note: None,
            },
        )
    }

    fn draft_assist(draft_id: &str, goal_draft_id: &str) -> DraftAssist {
        DraftAssist::new(
            draft_id.to_string(),
            AssistInput {
                player_id: 10,
                goal_draft_id: goal_draft_id.to_string(),
                note: None,
            },
        )
    }

    fn draft_penalty(order: u32, scored: bool) -> DraftPenaltyAttempt {
        DraftPenaltyAttempt::new(
            format!("p{order}"),
            PenaltyInput {
                team_id: 1,
                kicker_id: 9,
                goalkeeper_id: 25,
                scored,
                order,
            },
        )
    }

    #[test]
    fn test_validate_is_deterministic() {
        let mut draft = MatchDraft::new();
        draft.score.home_score = 1;
        draft.assists.push(draft_assist("a1", "missing"));

        let first = validate(&draft);
        let second = validate(&draft);
        assert_eq!(first, second);
        assert!(!first.is_valid());
    }

    #[test]
    fn test_consistent_draft_is_valid() {
        // 2-1 with three normal goals and no assists
        let mut draft = MatchDraft::new();
        draft.score.home_score = 2;
        draft.score.away_score = 1;
        draft.goals.push(draft_goal("g1", GoalKind::Normal));
        draft.goals.push(draft_goal("g2", GoalKind::Normal));
        draft.goals.push(draft_goal("g3", GoalKind::Normal));

        let report = validate(&draft);
        assert!(report.is_valid(), "unexpected errors: {:?}", report.errors);
    }

    #[test]
    fn test_goal_count_mismatch_reports_goals_error() {
        // 1-0 with zero goals recorded
        let mut draft = MatchDraft::new();
        draft.score.home_score = 1;

        let report = validate(&draft);
        assert!(!report.is_valid());
        assert_eq!(report.messages(EntryCategory::Goals).len(), 1);
    }

    #[test]
    fn test_matching_goal_count_reports_nothing() {
        let mut draft = MatchDraft::new();
        draft.score.home_score = 1;
        draft.score.away_score = 1;
        draft.goals.push(draft_goal("g1", GoalKind::Normal));
        draft.goals.push(draft_goal("g2", GoalKind::OwnGoal));

        let report = validate(&draft);
        assert!(report.messages(EntryCategory::Goals).is_empty());
    }

    #[test]
    fn test_dangling_assists_pool_into_one_message() {
        let mut draft = MatchDraft::new();
        draft.goals.push(draft_goal("g1", GoalKind::Normal));
        draft.assists.push(draft_assist("a1", "g2"));
        draft.assists.push(draft_assist("a2", "g3"));

        let report = validate(&draft);
        assert_eq!(report.messages(EntryCategory::Assists).len(), 1);
    }

    #[test]
    fn test_resolved_assists_report_nothing() {
        let mut draft = MatchDraft::new();
        draft.score.home_score = 1;
        draft.goals.push(draft_goal("g1", GoalKind::Normal));
        draft.assists.push(draft_assist("a1", "g1"));

        let report = validate(&draft);
        assert!(report.messages(EntryCategory::Assists).is_empty());
    }

    #[test]
    fn test_penalty_scores_without_attempts() {
        let mut draft = MatchDraft::new();
        draft.score.penalty_home_score = Some(4);
        draft.score.penalty_away_score = Some(3);

        let report = validate(&draft);
        assert_eq!(report.messages(EntryCategory::Penalties).len(), 1);
    }

    #[test]
    fn test_penalty_scored_count_must_match_combined_total() {
        let mut draft = MatchDraft::new();
        draft.score.penalty_home_score = Some(2);
        draft.score.penalty_away_score = Some(1);
        draft.penalties.push(draft_penalty(1, true));
        draft.penalties.push(draft_penalty(2, true));
        draft.penalties.push(draft_penalty(3, false));

        // 2 scored vs combined total of 3
        let report = validate(&draft);
        assert_eq!(report.messages(EntryCategory::Penalties).len(), 1);

        draft.penalties.push(draft_penalty(4, true));
        let report = validate(&draft);
        assert!(report.messages(EntryCategory::Penalties).is_empty());
    }

    #[test]
    fn test_one_sided_penalty_score_reports_score_error() {
        let mut draft = MatchDraft::new();
        draft.score.penalty_home_score = Some(4);

        let report = validate(&draft);
        assert_eq!(report.messages(EntryCategory::Score).len(), 1);
        // Shootout checks stay quiet until both sides are recorded
        assert!(report.messages(EntryCategory::Penalties).is_empty());
    }

    #[test]
    fn test_duplicate_shootout_order_is_reported() {
        let mut draft = MatchDraft::new();
        draft.penalties.push(draft_penalty(1, true));
        draft.penalties.push(draft_penalty(1, false));

        let report = validate(&draft);
        assert_eq!(report.messages(EntryCategory::Penalties).len(), 1);
    }
}
