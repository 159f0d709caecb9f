use crate::models::milestone::{Milestone, MilestoneKind};
use crate::stats::streaks::StreakSnapshot;

/// Recompute `achieved` for every catalog entry against the snapshot.
///
/// Returns a fresh list; the catalog is never mutated. Stateless and
/// idempotent. Detecting false-to-true transitions (and celebrating
/// them) is the caller's job, see [`newly_achieved`].
pub fn evaluate_milestones(
    snapshot: &StreakSnapshot,
    total_entry_count: usize,
    catalog: &[Milestone],
) -> Vec<Milestone> {
    catalog
        .iter()
        .map(|milestone| {
            let achieved = match milestone.kind {
                MilestoneKind::TotalEntries => total_entry_count as u64 >= milestone.target as u64,
                MilestoneKind::StreakLength => snapshot.current_streak >= milestone.target,
                MilestoneKind::WeeklyStreak => snapshot.weekly_streak >= milestone.target,
            };
            Milestone {
                achieved,
                ..milestone.clone()
            }
        })
        .collect()
}

/// Milestones achieved in `current` but not in `previous`. Each
/// transition shows up exactly once, which is what makes the celebration
/// one-shot.
pub fn newly_achieved(previous: &[Milestone], current: &[Milestone]) -> Vec<Milestone> {
    current
        .iter()
        .filter(|m| m.achieved && !previous.iter().any(|p| p.id == m.id && p.achieved))
        .cloned()
        .collect()
}
