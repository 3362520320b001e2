//! schulfahrt-layout - Request to table-row transformation
//!
//! This crate turns a validated [`schulfahrt_model::Request`] into the
//! ordered, annotated rows of the schedule table. It is a pure
//! transformation: no I/O, no drawing, no knowledge of any particular
//! rendering backend. The composer downstream consumes the row set
//! without ever looking at the request mode again.
//!
//! # Example
//!
//! ```
//! use schulfahrt_model::{Applicant, DayPlan, Request, ScheduleEntry, Student, TripLegs, Weekday};
//! use schulfahrt_layout::build_rows;
//!
//! let request = Request::new(
//!     Applicant::Single(vec![Student::named("Max", "Mustermann")]),
//!     ScheduleEntry::new(Weekday::Montag, DayPlan::Simple(TripLegs::default())),
//! );
//!
//! let row_set = build_rows(&request);
//! assert_eq!(row_set.rows.len(), 2);
//! assert_eq!(row_set.rows[0].cells[0].content, "Montag");
//! ```

mod builder;
mod rows;

// Re-export main types and functions
pub use builder::build_rows;
pub use rows::{Cell, Row, RowRole, RowSet, GROUP_HEADERS, LEG_HEADERS};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
