use serde::{Deserialize, Serialize};

/// Which snapshot field a milestone threshold applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MilestoneKind {
    TotalEntries,
    StreakLength,
    WeeklyStreak,
}

/// A named threshold with an achieved/unachieved state. The catalog is
/// static configuration; `achieved` is recomputed on every snapshot
/// change, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub id: String,
    pub title: String,
    pub description: String,
    pub target: u32,
    pub kind: MilestoneKind,
    pub achieved: bool,
}

impl Milestone {
    pub fn new(
        id: &str,
        title: &str,
        description: &str,
        target: u32,
        kind: MilestoneKind,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            target,
            kind,
            achieved: false,
        }
    }
}

/// The built-in achievement catalog shown on the profile page.
pub fn default_catalog() -> Vec<Milestone> {
    vec![
        Milestone::new(
            "first_steps",
            "First Steps",
            "Logged your first food waste entry",
            1,
            MilestoneKind::TotalEntries,
        ),
        Milestone::new(
            "week_warrior",
            "Week Warrior",
            "Logged waste for 7 consecutive days",
            7,
            MilestoneKind::StreakLength,
        ),
        Milestone::new(
            "committed_logger",
            "Committed Logger",
            "Logged 50 food waste entries",
            50,
            MilestoneKind::TotalEntries,
        ),
        Milestone::new(
            "consistency_champion",
            "Consistency Champion",
            "Kept a 30-day logging streak",
            30,
            MilestoneKind::StreakLength,
        ),
        Milestone::new(
            "steady_month",
            "Steady Month",
            "Stayed active four weeks in a row",
            4,
            MilestoneKind::WeeklyStreak,
        ),
    ]
}
