use serde::{Deserialize, Serialize};

use crate::stats::streaks::StreakSnapshot;

/// Personal targets from the profile page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goals {
    /// Target reduction in weekly waste, percent.
    pub weekly_waste_reduction_pct: u32,
    /// Monthly savings target in the preferred currency.
    pub monthly_savings_target: u32,
    /// Target consecutive logging days.
    pub daily_logging_streak: u32,
}

impl Default for Goals {
    fn default() -> Self {
        Self {
            weekly_waste_reduction_pct: 20,
            monthly_savings_target: 200,
            daily_logging_streak: 30,
        }
    }
}

impl Goals {
    pub fn streak_goal_met(&self, snapshot: &StreakSnapshot) -> bool {
        snapshot.current_streak >= self.daily_logging_streak
    }

    /// Fraction of the streak goal reached, clamped to 1.0 for progress bars.
    pub fn streak_goal_progress(&self, snapshot: &StreakSnapshot) -> f64 {
        if self.daily_logging_streak == 0 {
            return 1.0;
        }
        (snapshot.current_streak as f64 / self.daily_logging_streak as f64).min(1.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    Metric,
    Imperial,
}

impl Default for UnitSystem {
    fn default() -> Self {
        Self::Metric
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub units: UnitSystem,
    pub currency: String,
    pub language: String,
    pub timezone: String,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            units: UnitSystem::Metric,
            currency: "USD".into(),
            language: "English".into(),
            timezone: "PST".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NotificationSettings {
    pub daily_reminders: bool,
    pub weekly_reports: bool,
    pub goal_achievements: bool,
    pub tip_of_the_day: bool,
    pub community_updates: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            daily_reminders: true,
            weekly_reports: true,
            goal_achievements: true,
            tip_of_the_day: false,
            community_updates: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserSettings {
    pub goals: Goals,
    pub preferences: Preferences,
    pub notifications: NotificationSettings,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot_with_streak(current_streak: u32) -> StreakSnapshot {
        StreakSnapshot {
            current_streak,
            ..StreakSnapshot::default()
        }
    }

    #[test]
    fn test_default_goals_match_profile_page() {
        let goals = Goals::default();
        assert_eq!(goals.weekly_waste_reduction_pct, 20);
        assert_eq!(goals.monthly_savings_target, 200);
        assert_eq!(goals.daily_logging_streak, 30);
    }

    #[test]
    fn test_streak_goal_boundary() {
        let goals = Goals::default();
        assert!(!goals.streak_goal_met(&snapshot_with_streak(29)));
        assert!(goals.streak_goal_met(&snapshot_with_streak(30)));
    }

    #[test]
    fn test_streak_goal_progress_clamps() {
        let goals = Goals::default();
        assert_eq!(goals.streak_goal_progress(&snapshot_with_streak(15)), 0.5);
        assert_eq!(goals.streak_goal_progress(&snapshot_with_streak(90)), 1.0);
    }

    #[test]
    fn test_settings_serde_round_trip() -> anyhow::Result<()> {
        let settings = UserSettings::default();
        let json = serde_json::to_string(&settings)?;
        let back: UserSettings = serde_json::from_str(&json)?;
        assert_eq!(back, settings);
        Ok(())
    }
}
