//! Domain core for FOOPTRA, a food waste tracker.
//!
//! Everything in this crate is pure, synchronous, in-memory computation:
//! the entry log and its capture boundary, the streak and milestone
//! engine, dashboard aggregations, environmental impact estimates, and
//! the tips library. There is no I/O and no clock access in the
//! computations: callers inject `today` at every call site, which keeps
//! the engine deterministic and cheap enough to re-run on every
//! mutation.

pub mod error;
pub mod models;
pub mod sample;
pub mod stats;
pub mod tips;
pub mod tracker;

pub use error::{AppError, AppResult};
pub use models::entry::{parse_quantity, Category, NewEntryRequest, Unit, WasteEntry, WasteReason};
pub use models::milestone::{default_catalog, Milestone, MilestoneKind};
pub use models::settings::{Goals, NotificationSettings, Preferences, UserSettings};
pub use stats::milestones::{evaluate_milestones, newly_achieved};
pub use stats::streaks::{compute_streak_data, StreakSnapshot};
pub use tracker::{LogOutcome, WasteTracker};
