//! Document composer
//!
//! Turns a request and its prepared row set into the sequence of
//! drawing calls that make up the printable document: centered title,
//! mode-specific header block, the schedule table, and the two
//! signature lines. Performs no I/O of its own.

use schulfahrt_layout::RowSet;
use schulfahrt_model::{Applicant, GroupDetails, Request, Student};

use crate::error::Result;
use crate::surface::{DrawingSurface, TableSpec, TextAlign, TextStyle, LINE_ADVANCE};

/// Fixed heading of every generated document
pub const DOCUMENT_TITLE: &str = "Schülerbeförderungsantrag";

/// Left/right page margin
pub(crate) const PAGE_MARGIN: f64 = 14.0;
/// Baseline of the title
const TITLE_Y: f64 = 22.0;
const TITLE_SIZE: f64 = 18.0;
/// First baseline of the header block
const HEADER_TOP: f64 = 40.0;
const NAME_SIZE: f64 = 12.0;
const DETAIL_SIZE: f64 = 11.0;
/// Gap between the header block and the table
const TABLE_GAP: f64 = 10.0;
/// Space that must remain under the table for the signature block
const BOTTOM_MARGIN: f64 = 20.0;
const SIGNATURE_BLOCK_HEIGHT: f64 = 20.0;
/// Gap between table bottom and the signature lines
const SIGNATURE_GAP: f64 = 20.0;
/// Signature position after overflowing onto a fresh page
const SIGNATURE_TOP_RESET: f64 = 30.0;
const SIGNATURE_LINE_LENGTH: f64 = 85.0;
const SIGNATURE_LINE_THICKNESS: f64 = 0.2;
const SIGNATURE_LABEL_SIZE: f64 = 10.0;
/// Fixed width of the weekday column in the group table
const GROUP_DAY_COLUMN_WIDTH: f64 = 30.0;

const GUARDIAN_SIGNATURE_LABEL: &str = "Datum, Unterschrift Erziehungsberechtigte/r";
const SCHOOL_SIGNATURE_LABEL: &str = "Stempel und Unterschrift der Schule";

/// Compose the full document onto a drawing surface
pub fn compose<S: DrawingSurface>(
    request: &Request,
    row_set: &RowSet,
    surface: &mut S,
) -> Result<()> {
    surface.draw_text(
        DOCUMENT_TITLE,
        surface.page_width() / 2.0,
        TITLE_Y,
        &TextStyle::bold(TITLE_SIZE).centered(),
    )?;

    let header_bottom = match request.applicant() {
        Applicant::Single(students) => draw_student_block(students, surface)?,
        Applicant::Group(group) => draw_group_block(group, surface)?,
    };

    let spec = table_spec(request, row_set, header_bottom + TABLE_GAP);
    surface.draw_table(&spec)?;

    let table_bottom = surface.table_bottom();
    let signature_y = if table_bottom > surface.page_height() - (BOTTOM_MARGIN + SIGNATURE_BLOCK_HEIGHT)
    {
        surface.add_page()?;
        SIGNATURE_TOP_RESET
    } else {
        table_bottom + SIGNATURE_GAP
    };
    draw_signatures(surface, signature_y)
}

/// Name/address stanzas for single mode, blank-line separated
///
/// Returns the y of the line after the block. Fully-blank students are
/// skipped; missing name parts fall back to `N/A`.
fn draw_student_block<S: DrawingSurface>(students: &[Student], surface: &mut S) -> Result<f64> {
    let mut y = HEADER_TOP;
    let mut first = true;
    for student in students.iter().filter(|s| !s.is_blank()) {
        if !first {
            y += LINE_ADVANCE;
        }
        first = false;

        let name = format!(
            "{} {}",
            fallback(&student.first_name, "N/A"),
            fallback(&student.last_name, "N/A")
        );
        surface.draw_text(&name, PAGE_MARGIN, y, &TextStyle::bold(NAME_SIZE))?;
        y += LINE_ADVANCE;

        if let Some(street) = trimmed(student.street.as_deref()) {
            surface.draw_text(street, PAGE_MARGIN, y, &TextStyle::regular(DETAIL_SIZE))?;
            y += LINE_ADVANCE;
        }
        let place = [
            trimmed(student.zip.as_deref()),
            trimmed(student.city.as_deref()),
        ]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" ");
        if !place.is_empty() {
            surface.draw_text(&place, PAGE_MARGIN, y, &TextStyle::regular(DETAIL_SIZE))?;
            y += LINE_ADVANCE;
        }
    }
    Ok(y)
}

/// Group name list (wrapped), headcount and responsible-person lines
fn draw_group_block<S: DrawingSurface>(group: &GroupDetails, surface: &mut S) -> Result<f64> {
    let mut y = HEADER_TOP;

    let names: Vec<&str> = group
        .names
        .iter()
        .map(|n| n.trim())
        .filter(|n| !n.is_empty())
        .collect();
    let list = if names.is_empty() {
        "Unbenannt".to_string()
    } else {
        names.join(", ")
    };
    let lines = surface.draw_wrapped_text(
        &format!("Gruppe: {list}"),
        PAGE_MARGIN,
        y,
        surface.page_width() - 2.0 * PAGE_MARGIN,
        &TextStyle::bold(NAME_SIZE),
    )?;
    y += LINE_ADVANCE * lines as f64;

    surface.draw_text(
        &format!("Anzahl der Schülerinnen und Schüler: {}", group.headcount),
        PAGE_MARGIN,
        y,
        &TextStyle::regular(DETAIL_SIZE),
    )?;
    y += LINE_ADVANCE;

    surface.draw_text(
        &format!(
            "Verantwortliche Begleitperson: {}",
            fallback(&group.responsible, "-")
        ),
        PAGE_MARGIN,
        y,
        &TextStyle::regular(DETAIL_SIZE),
    )?;
    y += LINE_ADVANCE;

    Ok(y)
}

/// Column layout for the request mode
fn table_spec<'a>(request: &Request, row_set: &'a RowSet, start_y: f64) -> TableSpec<'a> {
    match request.applicant() {
        Applicant::Single(_) => TableSpec {
            headers: &row_set.headers,
            rows: &row_set.rows,
            start_y,
            // Weekday column left, all time/location columns centered
            column_align: std::iter::once(TextAlign::Left)
                .chain(std::iter::repeat(TextAlign::Center))
                .take(row_set.headers.len())
                .collect(),
            first_column_width: None,
            bold_first_column: false,
        },
        Applicant::Group(_) => TableSpec {
            headers: &row_set.headers,
            rows: &row_set.rows,
            start_y,
            column_align: vec![TextAlign::Left; row_set.headers.len()],
            first_column_width: Some(GROUP_DAY_COLUMN_WIDTH),
            bold_first_column: true,
        },
    }
}

/// Guardian and school signature lines with their labels
fn draw_signatures<S: DrawingSurface>(surface: &mut S, y: f64) -> Result<()> {
    surface.draw_line(
        PAGE_MARGIN,
        y,
        PAGE_MARGIN + SIGNATURE_LINE_LENGTH,
        y,
        SIGNATURE_LINE_THICKNESS,
    )?;
    surface.draw_text(
        GUARDIAN_SIGNATURE_LABEL,
        PAGE_MARGIN,
        y + LINE_ADVANCE,
        &TextStyle::regular(SIGNATURE_LABEL_SIZE),
    )?;

    let right_x = surface.page_width() - PAGE_MARGIN;
    surface.draw_line(
        right_x - SIGNATURE_LINE_LENGTH,
        y,
        right_x,
        y,
        SIGNATURE_LINE_THICKNESS,
    )?;
    surface.draw_text(
        SCHOOL_SIGNATURE_LABEL,
        right_x,
        y + LINE_ADVANCE,
        &TextStyle::regular(SIGNATURE_LABEL_SIZE).right_aligned(),
    )
}

fn fallback<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    let value = value.trim();
    if value.is_empty() {
        fallback
    } else {
        value
    }
}

fn trimmed(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
