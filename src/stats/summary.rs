use std::collections::{HashMap, HashSet};

use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;

use crate::models::entry::{Category, WasteEntry};
use crate::stats::streaks::week_start;

const DAY_NAMES: [&str; 7] = [
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// One point on the weekly trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyWaste {
    pub date: NaiveDate,
    pub total_quantity: u64,
}

/// One point on the monthly trend chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyWaste {
    pub year: i32,
    pub month: u32,
    pub total_quantity: u64,
}

/// "This Week's Summary" card: current week against the one before.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklySummary {
    pub week_start: NaiveDate,
    pub week_end: NaiveDate,
    pub total_quantity: u64,
    pub previous_week_quantity: u64,
    /// Signed percent change vs. the previous week; None when there is
    /// nothing to compare against.
    pub change_pct: Option<f64>,
    /// Weekday with the least waste so far this week.
    pub best_day: Option<String>,
    /// Weekday with the most waste so far this week.
    pub worst_day: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryBreakdown {
    pub category: Category,
    pub entries: usize,
    pub total_quantity: u64,
}

/// The log page's Quick Stats card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuickStats {
    pub total_entries: usize,
    pub total_quantity: u64,
    pub categories_used: usize,
}

/// Per-day totals for the trailing 7 days, zero-filled, ascending.
pub fn weekly_trend(entries: &[WasteEntry], today: NaiveDate) -> Vec<DailyWaste> {
    let mut by_day: HashMap<NaiveDate, u64> = HashMap::new();
    for entry in entries {
        *by_day.entry(entry.date).or_default() += entry.quantity_value();
    }

    (0..7)
        .rev()
        .map(|days_ago| {
            let date = today - Duration::days(days_ago);
            DailyWaste {
                date,
                total_quantity: by_day.get(&date).copied().unwrap_or(0),
            }
        })
        .collect()
}

/// Per-month totals for the trailing 6 calendar months (current
/// inclusive), zero-filled, ascending.
pub fn monthly_trend(entries: &[WasteEntry], today: NaiveDate) -> Vec<MonthlyWaste> {
    let mut by_month: HashMap<(i32, u32), u64> = HashMap::new();
    for entry in entries {
        *by_month
            .entry((entry.date.year(), entry.date.month()))
            .or_default() += entry.quantity_value();
    }

    let mut months = Vec::with_capacity(6);
    let (mut year, mut month) = (today.year(), today.month());
    for _ in 0..6 {
        months.push((year, month));
        (year, month) = prev_month(year, month);
    }
    months.reverse();

    months
        .into_iter()
        .map(|(year, month)| MonthlyWaste {
            year,
            month,
            total_quantity: by_month.get(&(year, month)).copied().unwrap_or(0),
        })
        .collect()
}

fn prev_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// Current-week totals, percent change against the previous week, and
/// best/worst weekday among the days elapsed so far.
pub fn weekly_summary(entries: &[WasteEntry], today: NaiveDate) -> WeeklySummary {
    let start = week_start(today);
    let end = start + Duration::days(6);
    let prev_start = start - Duration::days(7);

    let mut total_quantity = 0u64;
    let mut previous_week_quantity = 0u64;
    let mut day_totals = [0u64; 7];

    for entry in entries {
        let quantity = entry.quantity_value();
        if entry.date >= start && entry.date <= end {
            total_quantity += quantity;
            day_totals[entry.date.weekday().num_days_from_monday() as usize] += quantity;
        } else if entry.date >= prev_start && entry.date < start {
            previous_week_quantity += quantity;
        }
    }

    let change_pct = if previous_week_quantity > 0 {
        let delta = total_quantity as f64 - previous_week_quantity as f64;
        Some(delta / previous_week_quantity as f64 * 100.0)
    } else {
        None
    };

    // Only rank the days that have actually happened this week.
    let elapsed = ((today - start).num_days() as usize + 1).min(7);
    let (best_day, worst_day) = if total_quantity == 0 {
        (None, None)
    } else {
        let best = day_totals[..elapsed]
            .iter()
            .enumerate()
            .min_by_key(|(_, &q)| q)
            .map(|(i, _)| DAY_NAMES[i].to_string());
        let worst = day_totals[..elapsed]
            .iter()
            .enumerate()
            .max_by_key(|(_, &q)| q)
            .map(|(i, _)| DAY_NAMES[i].to_string());
        (best, worst)
    };

    WeeklySummary {
        week_start: start,
        week_end: end,
        total_quantity,
        previous_week_quantity,
        change_pct,
        best_day,
        worst_day,
    }
}

/// Per-category entry counts and totals, heaviest category first.
pub fn category_breakdown(entries: &[WasteEntry]) -> Vec<CategoryBreakdown> {
    let mut by_category: HashMap<Category, (usize, u64)> = HashMap::new();
    for entry in entries {
        let slot = by_category.entry(entry.category).or_default();
        slot.0 += 1;
        slot.1 += entry.quantity_value();
    }

    let mut breakdown: Vec<CategoryBreakdown> = by_category
        .into_iter()
        .map(|(category, (entries, total_quantity))| CategoryBreakdown {
            category,
            entries,
            total_quantity,
        })
        .collect();
    breakdown.sort_by(|a, b| {
        b.total_quantity
            .cmp(&a.total_quantity)
            .then(b.entries.cmp(&a.entries))
            .then(a.category.label().cmp(b.category.label()))
    });
    breakdown
}

pub fn quick_stats(entries: &[WasteEntry]) -> QuickStats {
    let categories: HashSet<Category> = entries.iter().map(|e| e.category).collect();
    QuickStats {
        total_entries: entries.len(),
        total_quantity: entries.iter().map(|e| e.quantity_value()).sum(),
        categories_used: categories.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::entry::{Unit, WasteReason};
    use chrono::Utc;
    use uuid::Uuid;

    fn today() -> NaiveDate {
        // Saturday; current week runs Jun 10 - Jun 16.
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn entry(date: NaiveDate, category: Category, quantity: &str) -> WasteEntry {
        WasteEntry {
            id: Uuid::new_v4(),
            food_item: "Sample".into(),
            category,
            quantity: quantity.into(),
            unit: Unit::Grams,
            reason: WasteReason::ForgotAboutIt,
            date,
            notes: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_weekly_trend_zero_filled_and_ascending() {
        let entries = vec![
            entry(today(), Category::Fruits, "3"),
            entry(today() - Duration::days(2), Category::Dairy, "5"),
        ];
        let trend = weekly_trend(&entries, today());
        assert_eq!(trend.len(), 7);
        assert_eq!(trend[0].date, today() - Duration::days(6));
        assert_eq!(trend[6].date, today());
        assert_eq!(trend[6].total_quantity, 3);
        assert_eq!(trend[4].total_quantity, 5);
        assert_eq!(trend[5].total_quantity, 0);
    }

    #[test]
    fn test_monthly_trend_spans_year_boundary() {
        let today = NaiveDate::from_ymd_opt(2024, 2, 10).unwrap();
        let entries = vec![
            entry(NaiveDate::from_ymd_opt(2023, 12, 25).unwrap(), Category::Bakery, "10"),
            entry(NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(), Category::Bakery, "4"),
        ];
        let trend = monthly_trend(&entries, today);
        assert_eq!(trend.len(), 6);
        assert_eq!((trend[0].year, trend[0].month), (2023, 9));
        assert_eq!((trend[5].year, trend[5].month), (2024, 2));
        assert_eq!(trend[3].total_quantity, 10); // Dec 2023
        assert_eq!(trend[5].total_quantity, 4);
    }

    #[test]
    fn test_weekly_summary_percent_change() {
        let entries = vec![
            entry(today(), Category::Fruits, "50"),
            entry(today() - Duration::days(7), Category::Fruits, "100"),
        ];
        let summary = weekly_summary(&entries, today());
        assert_eq!(summary.total_quantity, 50);
        assert_eq!(summary.previous_week_quantity, 100);
        assert_eq!(summary.change_pct, Some(-50.0));
    }

    #[test]
    fn test_weekly_summary_no_previous_week() {
        let entries = vec![entry(today(), Category::Fruits, "50")];
        let summary = weekly_summary(&entries, today());
        assert_eq!(summary.change_pct, None);
    }

    #[test]
    fn test_weekly_summary_best_and_worst_day() {
        // Monday heavy, Wednesday light, within the current week.
        let monday = week_start(today());
        let entries = vec![
            entry(monday, Category::Vegetables, "40"),
            entry(monday + Duration::days(2), Category::Vegetables, "5"),
            entry(monday + Duration::days(4), Category::Vegetables, "10"),
        ];
        let summary = weekly_summary(&entries, today());
        assert_eq!(summary.worst_day.as_deref(), Some("Monday"));
        // Tuesday saw no waste at all, making it the best elapsed day.
        assert_eq!(summary.best_day.as_deref(), Some("Tuesday"));
    }

    #[test]
    fn test_weekly_summary_empty_week_has_no_days() {
        let entries = vec![entry(today() - Duration::days(30), Category::Fruits, "9")];
        let summary = weekly_summary(&entries, today());
        assert_eq!(summary.total_quantity, 0);
        assert_eq!(summary.best_day, None);
        assert_eq!(summary.worst_day, None);
    }

    #[test]
    fn test_category_breakdown_sorted_by_quantity() {
        let entries = vec![
            entry(today(), Category::Fruits, "2"),
            entry(today(), Category::Dairy, "20"),
            entry(today(), Category::Fruits, "3"),
        ];
        let breakdown = category_breakdown(&entries);
        assert_eq!(breakdown.len(), 2);
        assert_eq!(breakdown[0].category, Category::Dairy);
        assert_eq!(breakdown[0].total_quantity, 20);
        assert_eq!(breakdown[1].category, Category::Fruits);
        assert_eq!(breakdown[1].entries, 2);
        assert_eq!(breakdown[1].total_quantity, 5);
    }

    #[test]
    fn test_quick_stats_counts_distinct_categories() {
        let entries = vec![
            entry(today(), Category::Fruits, "2"),
            entry(today(), Category::Fruits, "1"),
            entry(today(), Category::Seafood, "7"),
        ];
        let stats = quick_stats(&entries);
        assert_eq!(stats.total_entries, 3);
        assert_eq!(stats.total_quantity, 10);
        assert_eq!(stats.categories_used, 2);
    }
}
