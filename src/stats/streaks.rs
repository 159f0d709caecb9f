use std::collections::BTreeSet;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::entry::WasteEntry;

/// Derived logging statistics. Recomputed from scratch on every
/// collection change, never incrementally maintained.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakSnapshot {
    /// Consecutive logging days ending today or yesterday; 0 once a full
    /// day is missed.
    pub current_streak: u32,
    /// Longest consecutive-day run across all history.
    pub longest_streak: u32,
    /// Consecutive ISO weeks (Monday-start) with at least one entry,
    /// ending this week or last week.
    pub weekly_streak: u32,
    /// Coerced quantity summed over every entry, not distinct days.
    pub total_quantity_logged: u64,
    pub last_log_date: Option<NaiveDate>,
}

/// Compute the snapshot for an entry collection in any order.
///
/// `today` is injected rather than read from the clock so the function
/// stays pure and reproducible.
pub fn compute_streak_data(entries: &[WasteEntry], today: NaiveDate) -> StreakSnapshot {
    if entries.is_empty() {
        return StreakSnapshot::default();
    }

    // Distinct calendar days, most recent first. Same-day entries
    // collapse for streak purposes; quantities still sum per entry.
    let day_set: BTreeSet<NaiveDate> = entries.iter().map(|e| e.date).collect();
    let days: Vec<NaiveDate> = day_set.into_iter().rev().collect();

    StreakSnapshot {
        current_streak: current_run(&days, today),
        longest_streak: longest_run(&days),
        weekly_streak: weekly_run(&days, today),
        total_quantity_logged: entries.iter().map(|e| e.quantity_value()).sum(),
        last_log_date: days.first().copied(),
    }
}

/// Backward walk from the most recent log day. `days` must be sorted
/// descending and deduplicated.
fn current_run(days: &[NaiveDate], today: NaiveDate) -> u32 {
    let Some(&most_recent) = days.first() else {
        return 0;
    };

    // Logging today or yesterday keeps the streak alive; anything older
    // (or a future-dated entry) means no active streak.
    let gap = (today - most_recent).num_days();
    if !(0..=1).contains(&gap) {
        return 0;
    }

    let mut streak = 0u32;
    let mut check = most_recent;
    for &day in days {
        if day == check {
            streak += 1;
            check -= Duration::days(1);
        } else {
            break;
        }
    }
    streak
}

/// Single forward pass over the sorted day list tracking the maximum run.
fn longest_run(days: &[NaiveDate]) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;

    for &day in days.iter().rev() {
        match prev {
            Some(p) if day == p + Duration::days(1) => run += 1,
            Some(_) => {
                longest = longest.max(run);
                run = 1;
            }
            None => run = 1,
        }
        prev = Some(day);
    }
    longest.max(run)
}

/// Monday of the week containing `date`.
pub(crate) fn week_start(date: NaiveDate) -> NaiveDate {
    let weekday = date.weekday().num_days_from_monday(); // Mon=0
    date - Duration::days(weekday as i64)
}

/// The weekly analogue of `current_run`: consecutive Monday-start weeks
/// with at least one entry, anchored at this week or last week.
fn weekly_run(days: &[NaiveDate], today: NaiveDate) -> u32 {
    let week_set: BTreeSet<NaiveDate> = days.iter().map(|&d| week_start(d)).collect();
    let weeks: Vec<NaiveDate> = week_set.into_iter().rev().collect();

    let Some(&most_recent) = weeks.first() else {
        return 0;
    };

    let gap = (week_start(today) - most_recent).num_days();
    if gap != 0 && gap != 7 {
        return 0;
    }

    let mut streak = 0u32;
    let mut check = most_recent;
    for &week in &weeks {
        if week == check {
            streak += 1;
            check -= Duration::days(7);
        } else {
            break;
        }
    }
    streak
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entry::{Category, Unit, WasteEntry, WasteReason};
    use chrono::Utc;
    use uuid::Uuid;

    fn today() -> NaiveDate {
        // A Saturday, so the current week spans Jun 10 - Jun 16.
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn day(days_ago: i64) -> NaiveDate {
        today() - Duration::days(days_ago)
    }

    fn entry_with_quantity(date: NaiveDate, quantity: &str) -> WasteEntry {
        WasteEntry {
            id: Uuid::new_v4(),
            food_item: "Bananas".into(),
            category: Category::Fruits,
            quantity: quantity.into(),
            unit: Unit::Pieces,
            reason: WasteReason::Spoiled,
            date,
            notes: None,
            created_at: Utc::now(),
        }
    }

    fn entry_on(date: NaiveDate) -> WasteEntry {
        entry_with_quantity(date, "1")
    }

    #[test]
    fn test_empty_input_zero_snapshot() {
        let snapshot = compute_streak_data(&[], today());
        assert_eq!(snapshot, StreakSnapshot::default());
        assert_eq!(snapshot.last_log_date, None);
    }

    #[test]
    fn test_single_entry_today() {
        let entries = vec![entry_on(today())];
        let snapshot = compute_streak_data(&entries, today());
        assert_eq!(snapshot.current_streak, 1);
        assert_eq!(snapshot.longest_streak, 1);
        assert_eq!(snapshot.weekly_streak, 1);
        assert_eq!(snapshot.last_log_date, Some(today()));
    }

    #[test]
    fn test_consecutive_day_chain() {
        let entries = vec![entry_on(day(0)), entry_on(day(1)), entry_on(day(2))];
        let snapshot = compute_streak_data(&entries, today());
        assert_eq!(snapshot.current_streak, 3);
        assert_eq!(snapshot.longest_streak, 3);
    }

    #[test]
    fn test_stale_entries_break_current_streak() {
        let entries = vec![entry_on(day(3)), entry_on(day(4))];
        let snapshot = compute_streak_data(&entries, today());
        assert_eq!(snapshot.current_streak, 0);
        assert_eq!(snapshot.longest_streak, 2);
    }

    #[test]
    fn test_yesterday_grace_period() {
        let entries = vec![entry_on(day(1))];
        let snapshot = compute_streak_data(&entries, today());
        assert_eq!(snapshot.current_streak, 1);
    }

    #[test]
    fn test_same_day_entries_collapse() {
        let entries = vec![
            entry_with_quantity(today(), "2"),
            entry_with_quantity(today(), "3"),
            entry_with_quantity(today(), "5"),
        ];
        let snapshot = compute_streak_data(&entries, today());
        assert_eq!(snapshot.current_streak, 1);
        assert_eq!(snapshot.total_quantity_logged, 10);
    }

    #[test]
    fn test_longest_and_current_diverge() {
        // Two days ending today, plus an isolated five-day run ending
        // ten days ago.
        let mut entries = vec![entry_on(day(0)), entry_on(day(1))];
        for days_ago in 10..15 {
            entries.push(entry_on(day(days_ago)));
        }
        let snapshot = compute_streak_data(&entries, today());
        assert_eq!(snapshot.current_streak, 2);
        assert_eq!(snapshot.longest_streak, 5);
    }

    #[test]
    fn test_entry_order_is_irrelevant() {
        let mut entries = vec![
            entry_on(day(1)),
            entry_on(day(0)),
            entry_on(day(4)),
            entry_on(day(2)),
        ];
        let forward = compute_streak_data(&entries, today());
        entries.reverse();
        let reversed = compute_streak_data(&entries, today());
        assert_eq!(forward, reversed);
        assert_eq!(forward.current_streak, 3);
    }

    #[test]
    fn test_current_never_exceeds_longest() {
        let entries = vec![
            entry_on(day(0)),
            entry_on(day(1)),
            entry_on(day(5)),
            entry_on(day(6)),
            entry_on(day(7)),
            entry_on(day(8)),
        ];
        let snapshot = compute_streak_data(&entries, today());
        assert!(snapshot.current_streak <= snapshot.longest_streak);
        assert_eq!(snapshot.longest_streak, 4);
    }

    #[test]
    fn test_idempotent() {
        let entries = vec![entry_on(day(0)), entry_on(day(1)), entry_on(day(7))];
        let first = compute_streak_data(&entries, today());
        let second = compute_streak_data(&entries, today());
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_quantity_contributes_zero() {
        let entries = vec![
            entry_with_quantity(today(), ""),
            entry_with_quantity(today(), "4"),
        ];
        let snapshot = compute_streak_data(&entries, today());
        assert_eq!(snapshot.total_quantity_logged, 4);
    }

    #[test]
    fn test_future_dated_entry_yields_no_current_streak() {
        let entries = vec![entry_on(today() + Duration::days(2))];
        let snapshot = compute_streak_data(&entries, today());
        assert_eq!(snapshot.current_streak, 0);
        assert_eq!(snapshot.longest_streak, 1);
    }

    #[test]
    fn test_week_start_is_monday() {
        assert_eq!(
            week_start(today()),
            NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
        );
        let monday = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert_eq!(week_start(monday), monday);
    }

    #[test]
    fn test_weekly_streak_consecutive_weeks() {
        // One entry in each of this week and the two weeks before.
        let entries = vec![entry_on(day(0)), entry_on(day(7)), entry_on(day(14))];
        let snapshot = compute_streak_data(&entries, today());
        assert_eq!(snapshot.weekly_streak, 3);
    }

    #[test]
    fn test_weekly_streak_gap_breaks_chain() {
        // Active this week and three weeks ago; the skipped weeks stop
        // the count at 1.
        let entries = vec![entry_on(day(0)), entry_on(day(21))];
        let snapshot = compute_streak_data(&entries, today());
        assert_eq!(snapshot.weekly_streak, 1);
    }

    #[test]
    fn test_weekly_streak_last_week_grace() {
        let entries = vec![entry_on(day(7))];
        let snapshot = compute_streak_data(&entries, today());
        assert_eq!(snapshot.weekly_streak, 1);
    }

    #[test]
    fn test_weekly_streak_stale_is_zero() {
        let entries = vec![entry_on(day(14)), entry_on(day(21))];
        let snapshot = compute_streak_data(&entries, today());
        assert_eq!(snapshot.weekly_streak, 0);
    }
}
