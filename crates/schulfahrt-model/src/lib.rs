//! schulfahrt-model - Data model for school-transport requests
//!
//! This crate provides the value types a transport request is made of:
//! the applicant (one or more students, or a named group), the weekly
//! schedule entries, and the wall-clock times and free-text locations
//! attached to each trip leg.
//!
//! The model is an immutable snapshot once it reaches the document
//! pipeline. The mutation helpers on [`Request`] exist for the input
//! layer and enforce the schedule invariants (unique weekday per entry,
//! at most five entries, never less than one).
//!
//! # Example
//!
//! ```
//! use schulfahrt_model::{Applicant, DayPlan, Request, ScheduleEntry, Student, TripLegs, Weekday};
//!
//! let applicant = Applicant::Single(vec![Student::named("Max", "Mustermann")]);
//! let monday = ScheduleEntry::new(Weekday::Montag, DayPlan::Simple(TripLegs::default()));
//! let mut request = Request::new(applicant, monday);
//!
//! let tuesday = ScheduleEntry::new(Weekday::Dienstag, DayPlan::Simple(TripLegs::default()));
//! request.add_entry(tuesday).unwrap();
//! assert_eq!(request.schedule().len(), 2);
//! ```

mod error;
mod request;
mod schedule;
mod student;
mod time;

// Re-export main types
pub use error::{ModelError, Result};
pub use request::{Applicant, GroupDetails, Request};
pub use schedule::{DayPlan, EntryId, Leg, ScheduleEntry, TripLegs, Weekday};
pub use student::Student;
pub use time::WallTime;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
