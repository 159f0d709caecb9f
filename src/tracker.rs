use chrono::NaiveDate;
use serde::Serialize;

use crate::error::AppResult;
use crate::models::entry::{NewEntryRequest, WasteEntry};
use crate::models::milestone::{default_catalog, Milestone};
use crate::stats::milestones::{evaluate_milestones, newly_achieved};
use crate::stats::streaks::{compute_streak_data, StreakSnapshot};

/// What a successful log hands back to display code: the accepted entry,
/// the fresh snapshot, and any milestones that just flipped to achieved.
/// Each transition is reported exactly once, so the caller can fire its
/// one-shot celebration directly.
#[derive(Debug, Clone, Serialize)]
pub struct LogOutcome {
    pub entry: WasteEntry,
    pub snapshot: StreakSnapshot,
    pub newly_achieved: Vec<Milestone>,
}

/// Owns the in-memory entry collection and re-derives the snapshot and
/// milestone states from scratch on every mutation. Entries are
/// prepended, never edited; the only other mutation is wholesale
/// replacement.
#[derive(Debug, Clone)]
pub struct WasteTracker {
    entries: Vec<WasteEntry>,
    catalog: Vec<Milestone>,
    snapshot: StreakSnapshot,
    milestones: Vec<Milestone>,
}

impl WasteTracker {
    pub fn new(catalog: Vec<Milestone>) -> Self {
        let snapshot = StreakSnapshot::default();
        let milestones = evaluate_milestones(&snapshot, 0, &catalog);
        Self {
            entries: Vec::new(),
            catalog,
            snapshot,
            milestones,
        }
    }

    /// Validate a form submission, prepend the entry, and recompute.
    pub fn log_entry(&mut self, request: NewEntryRequest, today: NaiveDate) -> AppResult<LogOutcome> {
        let entry = request.into_entry(today)?;
        self.entries.insert(0, entry.clone());

        tracing::info!(
            entry_id = %entry.id,
            category = %entry.category,
            date = %entry.date,
            "waste entry logged"
        );

        let fresh = self.recompute(today);
        Ok(LogOutcome {
            entry,
            snapshot: self.snapshot.clone(),
            newly_achieved: fresh,
        })
    }

    /// Swap the whole collection (e.g. restoring a demo dataset) and
    /// recompute. Returns any milestones newly achieved by the new data.
    pub fn replace_entries(&mut self, entries: Vec<WasteEntry>, today: NaiveDate) -> Vec<Milestone> {
        self.entries = entries;
        tracing::debug!(entries = self.entries.len(), "entry collection replaced");
        self.recompute(today)
    }

    fn recompute(&mut self, today: NaiveDate) -> Vec<Milestone> {
        self.snapshot = compute_streak_data(&self.entries, today);
        let evaluated = evaluate_milestones(&self.snapshot, self.entries.len(), &self.catalog);
        let fresh = newly_achieved(&self.milestones, &evaluated);
        for milestone in &fresh {
            tracing::info!(milestone = %milestone.id, title = %milestone.title, "milestone achieved");
        }
        self.milestones = evaluated;
        fresh
    }

    pub fn entries(&self) -> &[WasteEntry] {
        &self.entries
    }

    pub fn snapshot(&self) -> &StreakSnapshot {
        &self.snapshot
    }

    pub fn milestones(&self) -> &[Milestone] {
        &self.milestones
    }
}

impl Default for WasteTracker {
    fn default() -> Self {
        Self::new(default_catalog())
    }
}
