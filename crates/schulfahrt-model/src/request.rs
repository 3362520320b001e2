//! The request root
//!
//! A [`Request`] is the complete snapshot one export operation works
//! on. The input layer mutates it field by field; the document
//! pipeline only ever reads it.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::schedule::{EntryId, ScheduleEntry, Weekday};
use crate::student::Student;

/// Who the request is filed for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Applicant {
    /// One or more named students with addresses
    Single(Vec<Student>),
    /// A whole group, named rather than enumerated
    Group(GroupDetails),
}

/// Group-mode applicant details
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GroupDetails {
    /// Group or class names, e.g. `["3b", "4a"]`
    #[serde(default)]
    pub names: Vec<String>,
    /// Number of students travelling
    #[serde(default)]
    pub headcount: u32,
    /// Accompanying responsible person
    #[serde(default)]
    pub responsible: String,
}

/// A complete transport request
///
/// Invariants: the schedule always holds at least one entry, at most
/// one per weekday, and therefore at most five in total. The
/// constructor and mutation helpers uphold them; [`Request::validate`]
/// re-checks them for requests read from serialized input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    applicant: Applicant,
    schedule: Vec<ScheduleEntry>,
}

impl Request {
    /// Create a request with its first schedule entry
    pub fn new(applicant: Applicant, first_entry: ScheduleEntry) -> Self {
        Self {
            applicant,
            schedule: vec![first_entry],
        }
    }

    /// The applicant this request is filed for
    pub fn applicant(&self) -> &Applicant {
        &self.applicant
    }

    /// Schedule entries in the order they were added
    pub fn schedule(&self) -> &[ScheduleEntry] {
        &self.schedule
    }

    /// Add a schedule entry
    ///
    /// Rejects a second entry for an already-assigned weekday and a
    /// sixth entry overall.
    pub fn add_entry(&mut self, entry: ScheduleEntry) -> Result<()> {
        if self.schedule.len() >= Weekday::ALL.len() {
            return Err(ModelError::ScheduleFull);
        }
        if self.schedule.iter().any(|e| e.day == entry.day) {
            return Err(ModelError::DuplicateWeekday(entry.day));
        }
        self.schedule.push(entry);
        Ok(())
    }

    /// Remove an entry by id, keeping at least one line
    pub fn remove_entry(&mut self, id: EntryId) -> Result<()> {
        if self.schedule.len() <= 1 {
            return Err(ModelError::LastEntry);
        }
        self.schedule.retain(|e| e.id != id);
        Ok(())
    }

    /// First weekday without an entry, in school-week order
    ///
    /// The input layer uses this as the default day for a new row.
    pub fn next_free_weekday(&self) -> Option<Weekday> {
        Weekday::ALL
            .into_iter()
            .find(|day| !self.schedule.iter().any(|e| e.day == *day))
    }

    /// Re-check the schedule invariants
    ///
    /// Deserialization bypasses the mutation helpers, so input read
    /// from a file is validated once before it enters the pipeline.
    pub fn validate(&self) -> Result<()> {
        if self.schedule.is_empty() {
            return Err(ModelError::EmptySchedule);
        }
        if self.schedule.len() > Weekday::ALL.len() {
            return Err(ModelError::ScheduleFull);
        }
        for (i, entry) in self.schedule.iter().enumerate() {
            if self.schedule[..i].iter().any(|e| e.day == entry.day) {
                return Err(ModelError::DuplicateWeekday(entry.day));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::DayPlan;

    fn entry(day: Weekday, id: u32) -> ScheduleEntry {
        ScheduleEntry::new(day, DayPlan::default()).with_id(EntryId(id))
    }

    fn single_request() -> Request {
        Request::new(
            Applicant::Single(vec![Student::named("Max", "Mustermann")]),
            entry(Weekday::Montag, 1),
        )
    }

    #[test]
    fn test_duplicate_weekday_rejected() {
        let mut request = single_request();
        let err = request.add_entry(entry(Weekday::Montag, 2)).unwrap_err();
        assert_eq!(err, ModelError::DuplicateWeekday(Weekday::Montag));
        assert_eq!(request.schedule().len(), 1);
    }

    #[test]
    fn test_sixth_entry_rejected() {
        let mut request = single_request();
        for (i, day) in [
            Weekday::Dienstag,
            Weekday::Mittwoch,
            Weekday::Donnerstag,
            Weekday::Freitag,
        ]
        .into_iter()
        .enumerate()
        {
            request.add_entry(entry(day, i as u32 + 2)).unwrap();
        }
        assert_eq!(request.schedule().len(), 5);
        assert_eq!(request.next_free_weekday(), None);

        // No weekday left, the full check fires before the duplicate one
        let extra = entry(Weekday::Montag, 99);
        assert_eq!(request.add_entry(extra), Err(ModelError::ScheduleFull));
    }

    #[test]
    fn test_last_entry_kept() {
        let mut request = single_request();
        assert_eq!(request.remove_entry(EntryId(1)), Err(ModelError::LastEntry));

        request.add_entry(entry(Weekday::Dienstag, 2)).unwrap();
        request.remove_entry(EntryId(1)).unwrap();
        assert_eq!(request.schedule().len(), 1);
        assert_eq!(request.schedule()[0].day, Weekday::Dienstag);
    }

    #[test]
    fn test_next_free_weekday_in_order() {
        let mut request = single_request();
        assert_eq!(request.next_free_weekday(), Some(Weekday::Dienstag));
        request.add_entry(entry(Weekday::Mittwoch, 2)).unwrap();
        // Dienstag is still the earliest gap
        assert_eq!(request.next_free_weekday(), Some(Weekday::Dienstag));
    }

    #[test]
    fn test_validate_deserialized_input() {
        let json = r#"{
            "applicant": {"Single": [{"first_name": "Max", "last_name": "Mustermann"}]},
            "schedule": [
                {"day": "Montag", "plan": {"Simple": {}}},
                {"day": "Montag", "plan": {"Simple": {}}}
            ]
        }"#;
        let request: Request = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.validate(),
            Err(ModelError::DuplicateWeekday(Weekday::Montag))
        );
    }

    #[test]
    fn test_validate_empty_schedule() {
        let json = r#"{"applicant": {"Group": {"names": ["3b"]}}, "schedule": []}"#;
        let request: Request = serde_json::from_str(json).unwrap();
        assert_eq!(request.validate(), Err(ModelError::EmptySchedule));
    }
}
