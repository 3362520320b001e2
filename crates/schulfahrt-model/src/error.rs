//! Error types for model operations

use thiserror::Error;

use crate::schedule::Weekday;

/// Errors that can occur while mutating or validating a request
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ModelError {
    /// A schedule entry for this weekday already exists
    #[error("schedule already contains an entry for {0}")]
    DuplicateWeekday(Weekday),

    /// All five weekdays are already taken
    #[error("schedule is full, all weekdays are assigned")]
    ScheduleFull,

    /// The schedule must always keep at least one entry
    #[error("cannot remove the last remaining schedule entry")]
    LastEntry,

    /// The schedule contains no entries at all
    #[error("schedule contains no entries")]
    EmptySchedule,

    /// A wall-clock time string could not be parsed
    #[error("invalid wall-clock time: {0:?} (expected HH:MM)")]
    InvalidTime(String),
}

/// Result type for model operations
pub type Result<T> = std::result::Result<T, ModelError>;
