pub mod impact;
pub mod milestones;
pub mod streaks;
pub mod summary;
