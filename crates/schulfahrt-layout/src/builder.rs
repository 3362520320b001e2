//! Row-set builder
//!
//! `build_rows` maps a request to the ordered table rows the document
//! shows, one group of rows per schedule entry:
//!
//! - single mode, split entry: four rows (morning times, morning
//!   locations, afternoon times, afternoon locations), weekday cell
//!   spanning all four
//! - single mode, simple entry: two rows (times, locations), weekday
//!   cell spanning both
//! - group mode: one row per entry with composite outbound/return text
//!   blocks
//!
//! Entries are emitted in request order; they are never re-sorted by
//! weekday.

use schulfahrt_model::{Applicant, DayPlan, Leg, Request, ScheduleEntry, TripLegs, WallTime};

use crate::rows::{Cell, Row, RowSet, GROUP_HEADERS, LEG_HEADERS};

/// Build the table content for a request
///
/// Total over well-formed input: the request invariants (non-empty
/// schedule, unique weekdays) are preconditions, not runtime error
/// paths.
pub fn build_rows(request: &Request) -> RowSet {
    debug_assert!(
        !request.schedule().is_empty(),
        "request schedule must hold at least one entry"
    );

    match request.applicant() {
        Applicant::Single(_) => RowSet {
            headers: LEG_HEADERS.to_vec(),
            rows: request
                .schedule()
                .iter()
                .flat_map(single_entry_rows)
                .collect(),
        },
        Applicant::Group(_) => RowSet {
            headers: GROUP_HEADERS.to_vec(),
            rows: request.schedule().iter().map(group_entry_row).collect(),
        },
    }
}

/// Rows for one entry of a single-mode request
fn single_entry_rows(entry: &ScheduleEntry) -> Vec<Row> {
    let day = entry.day.label();
    match &entry.plan {
        DayPlan::Simple(legs) => vec![
            Row::primary(time_cells(day, legs, 2)),
            Row::secondary(location_cells(legs, None)),
        ],
        DayPlan::Split { morning, afternoon } => vec![
            Row::primary(time_cells(day, morning, 4)),
            Row::secondary(location_cells(morning, Some("Vormittag"))),
            Row::primary(time_cells_unlabelled(afternoon)),
            Row::secondary(location_cells(afternoon, Some("Nachmittag"))),
        ],
    }
}

/// Time row opening an entry group: weekday cell plus four leg times
fn time_cells(day: &str, legs: &TripLegs, span: u32) -> Vec<Cell> {
    let mut cells = vec![Cell::spanning(day, span)];
    cells.extend(time_cells_unlabelled(legs));
    cells
}

/// Time row inside an entry group, no weekday cell
fn time_cells_unlabelled(legs: &TripLegs) -> Vec<Cell> {
    [
        &legs.depart_stop,
        &legs.arrive_school,
        &legs.depart_school,
        &legs.arrive_stop,
    ]
    .into_iter()
    .map(|leg| Cell::plain(time_text(leg.time)))
    .collect()
}

/// Location sub-row for a set of legs
///
/// When a split entry's first location is blank, the cell shows the
/// session placeholder word instead of the usual `(N/A)`, so the two
/// sub-rows of a session stay tellable apart even when fully blank.
fn location_cells(legs: &TripLegs, empty_first: Option<&str>) -> Vec<Cell> {
    let first = match empty_first {
        Some(placeholder) if legs.depart_stop.location.trim().is_empty() => {
            Cell::plain(placeholder)
        }
        _ => Cell::plain(location_text(&legs.depart_stop.location)),
    };
    let mut cells = vec![first];
    cells.extend(
        [&legs.arrive_school, &legs.depart_school, &legs.arrive_stop]
            .into_iter()
            .map(|leg| Cell::plain(location_text(&leg.location))),
    );
    cells
}

/// The single composite row for a group-mode entry
///
/// Split entries contribute the morning legs to the outbound block and
/// the afternoon legs to the return block (morning ride in, afternoon
/// ride home).
fn group_entry_row(entry: &ScheduleEntry) -> Row {
    let (outbound_legs, return_legs) = match &entry.plan {
        DayPlan::Simple(legs) => (legs, legs),
        DayPlan::Split { morning, afternoon } => (morning, afternoon),
    };
    Row::primary(vec![
        Cell::plain(entry.day.label()),
        Cell::plain(composite_text(
            &outbound_legs.depart_stop,
            &outbound_legs.arrive_school,
        )),
        Cell::plain(composite_text(
            &return_legs.depart_school,
            &return_legs.arrive_stop,
        )),
    ])
}

/// Newline-joined departure/arrival block for a composite cell
fn composite_text(depart: &Leg, arrive: &Leg) -> String {
    format!(
        "Abfahrt: {} {}\nAnkunft: {} {}",
        composite_time_text(depart.time),
        location_text(&depart.location),
        composite_time_text(arrive.time),
        location_text(&arrive.location),
    )
}

fn time_text(time: Option<WallTime>) -> String {
    match time {
        Some(t) => t.to_string(),
        None => "-".to_string(),
    }
}

fn composite_time_text(time: Option<WallTime>) -> String {
    match time {
        Some(t) => t.to_string(),
        None => "--:--".to_string(),
    }
}

fn location_text(location: &str) -> String {
    let location = location.trim();
    if location.is_empty() {
        "(N/A)".to_string()
    } else {
        format!("({location})")
    }
}
