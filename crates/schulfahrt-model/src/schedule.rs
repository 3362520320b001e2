//! Schedule entries
//!
//! One [`ScheduleEntry`] describes the trips of a single school
//! weekday: four legs (stop → school in the morning direction, school →
//! stop in the return direction), either once per day or split into
//! separate morning and afternoon sessions.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::time::WallTime;

/// The five school weekdays
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Montag,
    Dienstag,
    Mittwoch,
    Donnerstag,
    Freitag,
}

impl Weekday {
    /// All weekdays in school-week order
    pub const ALL: [Weekday; 5] = [
        Weekday::Montag,
        Weekday::Dienstag,
        Weekday::Mittwoch,
        Weekday::Donnerstag,
        Weekday::Freitag,
    ];

    /// The printable German label
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Montag => "Montag",
            Weekday::Dienstag => "Dienstag",
            Weekday::Mittwoch => "Mittwoch",
            Weekday::Donnerstag => "Donnerstag",
            Weekday::Freitag => "Freitag",
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Session-local identifier for a schedule entry
///
/// Entries have no identity beyond the current request; the id only
/// exists so the input layer can address a row for edit and removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct EntryId(pub u32);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "entry-{}", self.0)
    }
}

/// One leg of a trip: an optional departure or arrival time plus the
/// free-text location it refers to
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Leg {
    /// Wall-clock time, absent while the field is still blank
    #[serde(default)]
    pub time: Option<WallTime>,
    /// Stop or school name, empty while the field is still blank
    #[serde(default)]
    pub location: String,
}

impl Leg {
    /// Create a leg with both fields filled
    pub fn new(time: WallTime, location: impl Into<String>) -> Self {
        Self {
            time: Some(time),
            location: location.into(),
        }
    }
}

/// The four legs of one session: out to school and back to the stop
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TripLegs {
    /// Departure at the stop
    #[serde(default)]
    pub depart_stop: Leg,
    /// Arrival at school
    #[serde(default)]
    pub arrive_school: Leg,
    /// Departure at school
    #[serde(default)]
    pub depart_school: Leg,
    /// Arrival back at the stop
    #[serde(default)]
    pub arrive_stop: Leg,
}

/// The time shape of one weekday
///
/// `Simple` carries one set of four legs for the whole day; `Split`
/// duplicates them for separate morning and afternoon sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DayPlan {
    /// One departure/arrival pair per leg for the whole day
    Simple(TripLegs),
    /// Separate morning and afternoon sessions
    Split {
        morning: TripLegs,
        afternoon: TripLegs,
    },
}

impl Default for DayPlan {
    fn default() -> Self {
        DayPlan::Simple(TripLegs::default())
    }
}

/// The full set of trip fields for one weekday
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleEntry {
    /// Session-local identity, assigned by the input layer
    #[serde(default)]
    pub id: EntryId,
    /// The weekday this entry belongs to, unique within a request
    pub day: Weekday,
    /// Times and locations for the day
    pub plan: DayPlan,
}

impl ScheduleEntry {
    /// Create an entry for a weekday
    pub fn new(day: Weekday, plan: DayPlan) -> Self {
        Self {
            id: EntryId::default(),
            day,
            plan,
        }
    }

    /// Same entry with an explicit id
    pub fn with_id(mut self, id: EntryId) -> Self {
        self.id = id;
        self
    }
}
