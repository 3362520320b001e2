//! Row and cell value types
//!
//! Rows carry their own merge and emphasis annotations so that the
//! composer and the drawing backend never have to re-derive them from
//! row positions.

use serde::{Deserialize, Serialize};

/// Column headers for the per-leg table (single mode)
pub const LEG_HEADERS: [&str; 5] = [
    "Tag",
    "Abfahrt Haltestelle",
    "Ankunft Schule",
    "Abfahrt Schule",
    "Ankunft Haltestelle",
];

/// Column headers for the composite table (group mode)
pub const GROUP_HEADERS: [&str; 3] = ["Tag", "Hinfahrt", "Rückfahrt"];

/// Emphasis tag for a rendered row
///
/// This tag, not the row position, decides how a row is styled:
/// primary rows are bold standard text, secondary rows (the location
/// sub-rows) are smaller and muted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowRole {
    Primary,
    Secondary,
}

/// One table cell with its merge annotation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    /// Rendered text, may contain embedded newlines
    pub content: String,
    /// Number of rows this cell spans downward (1 = no merge)
    pub row_span: u32,
}

impl Cell {
    /// A plain, unmerged cell
    pub fn plain(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            row_span: 1,
        }
    }

    /// A cell spanning several rows downward
    pub fn spanning(content: impl Into<String>, rows: u32) -> Self {
        Self {
            content: content.into(),
            row_span: rows,
        }
    }
}

/// One table row with its emphasis tag
///
/// Rows following a spanning cell carry one cell less than the header
/// has columns; the drawing backend shifts them right accordingly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<Cell>,
    pub role: RowRole,
}

impl Row {
    /// Create a primary row
    pub fn primary(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            role: RowRole::Primary,
        }
    }

    /// Create a secondary row
    pub fn secondary(cells: Vec<Cell>) -> Self {
        Self {
            cells,
            role: RowRole::Secondary,
        }
    }
}

/// The complete table content for one request
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RowSet {
    /// Header labels, fixed per request mode
    pub headers: Vec<&'static str>,
    /// Body rows in schedule order
    pub rows: Vec<Row>,
}
