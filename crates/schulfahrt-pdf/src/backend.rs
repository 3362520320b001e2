//! printpdf drawing backend
//!
//! [`PdfSurface`] implements the abstract drawing capability on top of
//! `printpdf` with the built-in Helvetica faces. Page coordinates of
//! the surface API are top-left based; printpdf measures from the
//! bottom-left corner, so every y is flipped on the way in.
//!
//! The table painter covers what the composer needs from a table
//! extension: filled header row, striped body, per-column alignment, a
//! fixed first-column width, row-span cells with vertically centered
//! text, and page overflow with a repeated header row.

use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference, PdfLayerIndex,
    PdfLayerReference, PdfPageIndex, Point,
};
use tracing::debug;

use schulfahrt_layout::{Row, RowRole};

use crate::composer::{DOCUMENT_TITLE, PAGE_MARGIN};
use crate::error::{PdfError, Result};
use crate::metrics::{text_width, wrap_text};
use crate::surface::{
    Color, DrawingSurface, FontWeight, TableSpec, TextAlign, TextStyle, HEADER_FILL, HEADER_TEXT,
    LINE_ADVANCE, SECONDARY_TEXT, STRIPE_FILL,
};

/// A4 portrait page size in mm
pub const A4_WIDTH: f64 = 210.0;
pub const A4_HEIGHT: f64 = 297.0;

const LAYER_NAME: &str = "Ebene 1";

const CELL_PADDING: f64 = 2.0;
const TABLE_LINE_HEIGHT: f64 = 4.5;
/// Baseline offset from the top of a text line inside a cell
const BASELINE_OFFSET: f64 = 3.0;
const HEADER_FONT_SIZE: f64 = 9.0;
const PRIMARY_FONT_SIZE: f64 = 9.0;
const SECONDARY_FONT_SIZE: f64 = 8.0;
/// Table continuation margin on overflow pages
const TABLE_TOP_MARGIN: f64 = 20.0;
const TABLE_BOTTOM_MARGIN: f64 = 20.0;

/// printpdf-backed implementation of [`DrawingSurface`]
pub struct PdfSurface {
    doc: PdfDocumentReference,
    page: PdfPageIndex,
    layer: PdfLayerIndex,
    font_regular: IndirectFontRef,
    font_bold: IndirectFontRef,
    page_width: f64,
    page_height: f64,
    last_table_bottom: f64,
}

impl PdfSurface {
    /// Create an A4 portrait surface
    pub fn a4() -> Result<Self> {
        Self::new(A4_WIDTH, A4_HEIGHT)
    }

    /// Create a surface with a custom page size in mm
    pub fn new(page_width: f64, page_height: f64) -> Result<Self> {
        let (doc, page, layer) =
            PdfDocument::new(DOCUMENT_TITLE, Mm(page_width), Mm(page_height), LAYER_NAME);
        let font_regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| PdfError::BackendUnavailable(e.to_string()))?;
        let font_bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| PdfError::BackendUnavailable(e.to_string()))?;
        Ok(Self {
            doc,
            page,
            layer,
            font_regular,
            font_bold,
            page_width,
            page_height,
            last_table_bottom: 0.0,
        })
    }

    /// Serialize the finished document to PDF bytes
    pub fn finish(self) -> Result<Vec<u8>> {
        self.doc
            .save_to_bytes()
            .map_err(|e| PdfError::Drawing(e.to_string()))
    }

    fn layer(&self) -> PdfLayerReference {
        self.doc.get_page(self.page).get_layer(self.layer)
    }

    fn font(&self, weight: FontWeight) -> &IndirectFontRef {
        match weight {
            FontWeight::Regular => &self.font_regular,
            FontWeight::Bold => &self.font_bold,
        }
    }

    /// Flip a top-left y into printpdf's bottom-left coordinates
    fn pdf_y(&self, y: f64) -> Mm {
        Mm(self.page_height - y)
    }

    fn paint_text(
        &self,
        text: &str,
        x: f64,
        y: f64,
        size: f64,
        weight: FontWeight,
        align: TextAlign,
        color: Color,
    ) {
        let x = match align {
            TextAlign::Left => x,
            TextAlign::Center => x - text_width(text, size) / 2.0,
            TextAlign::Right => x - text_width(text, size),
        };
        let layer = self.layer();
        layer.set_fill_color(pdf_color(color));
        layer.use_text(text, size, Mm(x), self.pdf_y(y), self.font(weight));
        layer.set_fill_color(pdf_color(Color::BLACK));
    }

    /// Fill a rectangle given by its top-left corner
    fn fill_rect(&self, x: f64, y: f64, width: f64, height: f64, color: Color) {
        let top = self.pdf_y(y);
        let bottom = self.pdf_y(y + height);
        let rect = Line {
            points: vec![
                (Point::new(Mm(x), bottom), false),
                (Point::new(Mm(x + width), bottom), false),
                (Point::new(Mm(x + width), top), false),
                (Point::new(Mm(x), top), false),
            ],
            is_closed: true,
            has_fill: true,
            has_stroke: false,
            is_clipping_path: false,
        };
        let layer = self.layer();
        layer.set_fill_color(pdf_color(color));
        layer.add_shape(rect);
        layer.set_fill_color(pdf_color(Color::BLACK));
    }

    fn paint_table_header(&self, spec: &TableSpec<'_>, columns: &[ColumnSlot], y: f64) {
        let total: f64 = columns.iter().map(|c| c.width).sum();
        self.fill_rect(columns[0].x, y, total, header_row_height(), HEADER_FILL);
        for (i, label) in spec.headers.iter().enumerate() {
            let col = &columns[i];
            self.paint_text(
                label,
                col.x + col.width / 2.0,
                y + CELL_PADDING + BASELINE_OFFSET,
                HEADER_FONT_SIZE,
                FontWeight::Bold,
                TextAlign::Center,
                HEADER_TEXT,
            );
        }
    }

    /// Paint one cell's wrapped lines inside its column
    #[allow(clippy::too_many_arguments)]
    fn paint_cell(
        &self,
        content: &str,
        col: &ColumnSlot,
        y: f64,
        size: f64,
        weight: FontWeight,
        align: TextAlign,
        color: Color,
    ) {
        for (i, line) in wrap_text(content, col.width - 2.0 * CELL_PADDING, size)
            .iter()
            .enumerate()
        {
            let x = match align {
                TextAlign::Left => col.x + CELL_PADDING,
                TextAlign::Center => col.x + col.width / 2.0,
                TextAlign::Right => col.x + col.width - CELL_PADDING,
            };
            let baseline = y + CELL_PADDING + BASELINE_OFFSET + i as f64 * TABLE_LINE_HEIGHT;
            self.paint_text(line, x, baseline, size, weight, align, color);
        }
    }
}

impl DrawingSurface for PdfSurface {
    fn page_width(&self) -> f64 {
        self.page_width
    }

    fn page_height(&self) -> f64 {
        self.page_height
    }

    fn add_page(&mut self) -> Result<()> {
        let (page, layer) =
            self.doc
                .add_page(Mm(self.page_width), Mm(self.page_height), LAYER_NAME);
        self.page = page;
        self.layer = layer;
        debug!("started a fresh page");
        Ok(())
    }

    fn draw_text(&mut self, text: &str, x: f64, y: f64, style: &TextStyle) -> Result<()> {
        self.paint_text(text, x, y, style.size, style.weight, style.align, Color::BLACK);
        Ok(())
    }

    fn draw_wrapped_text(
        &mut self,
        text: &str,
        x: f64,
        y: f64,
        max_width: f64,
        style: &TextStyle,
    ) -> Result<usize> {
        let lines = wrap_text(text, max_width, style.size);
        for (i, line) in lines.iter().enumerate() {
            self.paint_text(
                line,
                x,
                y + i as f64 * LINE_ADVANCE,
                style.size,
                style.weight,
                style.align,
                Color::BLACK,
            );
        }
        Ok(lines.len())
    }

    fn draw_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, thickness: f64) -> Result<()> {
        let segment = Line {
            points: vec![
                (Point::new(Mm(x1), self.pdf_y(y1)), false),
                (Point::new(Mm(x2), self.pdf_y(y2)), false),
            ],
            is_closed: false,
            has_fill: false,
            has_stroke: true,
            is_clipping_path: false,
        };
        let layer = self.layer();
        layer.set_outline_color(pdf_color(Color::BLACK));
        layer.set_outline_thickness(thickness);
        layer.add_shape(segment);
        Ok(())
    }

    fn draw_table(&mut self, spec: &TableSpec<'_>) -> Result<()> {
        let columns = column_slots(spec, self.page_width);
        let offsets = row_offsets(spec.rows);
        let heights: Vec<f64> = spec
            .rows
            .iter()
            .zip(&offsets)
            .map(|(row, offset)| row_height(row, *offset, &columns))
            .collect();

        self.paint_table_header(spec, &columns, spec.start_y);
        let mut y = spec.start_y + header_row_height();
        let table_width: f64 = columns.iter().map(|c| c.width).sum();

        let mut body_index = 0usize;
        for (start, len) in span_groups(&offsets) {
            // A merged group moves to the next page as one unit
            let group_height: f64 = heights[start..start + len].iter().sum();
            if y + group_height > self.page_height - TABLE_BOTTOM_MARGIN {
                self.add_page()?;
                self.paint_table_header(spec, &columns, TABLE_TOP_MARGIN);
                y = TABLE_TOP_MARGIN + header_row_height();
            }

            let group_top = y;
            for idx in start..start + len {
                let row = &spec.rows[idx];
                let offset = offsets[idx];
                if body_index % 2 == 1 {
                    self.fill_rect(columns[0].x, y, table_width, heights[idx], STRIPE_FILL);
                }
                for (ci, cell) in row.cells.iter().enumerate() {
                    if offset == 0 && ci == 0 && cell.row_span > 1 {
                        continue; // painted once, centered over the group
                    }
                    let slot = ci + offset;
                    let bold_column = spec.bold_first_column && slot == 0;
                    let (size, weight, color) = body_cell_style(row.role, bold_column);
                    self.paint_cell(
                        &cell.content,
                        &columns[slot],
                        y,
                        size,
                        weight,
                        spec.column_align[slot],
                        color,
                    );
                }
                body_index += 1;
                y += heights[idx];
            }

            // Weekday cell spanning the group, vertically centered
            if let Some(first) = spec.rows[start].cells.first() {
                if first.row_span > 1 {
                    let centered = group_top + group_height / 2.0 - TABLE_LINE_HEIGHT / 2.0;
                    self.paint_cell(
                        &first.content,
                        &columns[0],
                        centered - CELL_PADDING,
                        PRIMARY_FONT_SIZE,
                        FontWeight::Bold,
                        spec.column_align[0],
                        Color::BLACK,
                    );
                }
            }
        }

        self.last_table_bottom = y;
        Ok(())
    }

    fn table_bottom(&self) -> f64 {
        self.last_table_bottom
    }
}

/// Horizontal slot of one table column
struct ColumnSlot {
    x: f64,
    width: f64,
}

fn header_row_height() -> f64 {
    TABLE_LINE_HEIGHT + 2.0 * CELL_PADDING
}

fn pdf_color(c: Color) -> printpdf::Color {
    printpdf::Color::Rgb(printpdf::Rgb::new(
        c.r as f64 / 255.0,
        c.g as f64 / 255.0,
        c.b as f64 / 255.0,
        None,
    ))
}

/// Text style of a body cell from its row role
fn body_cell_style(role: RowRole, bold_column: bool) -> (f64, FontWeight, Color) {
    match role {
        RowRole::Primary => (
            PRIMARY_FONT_SIZE,
            FontWeight::Bold,
            Color::BLACK,
        ),
        RowRole::Secondary => (
            SECONDARY_FONT_SIZE,
            if bold_column {
                FontWeight::Bold
            } else {
                FontWeight::Regular
            },
            SECONDARY_TEXT,
        ),
    }
}

/// Column x positions and widths across the printable area
fn column_slots(spec: &TableSpec<'_>, page_width: f64) -> Vec<ColumnSlot> {
    let available = page_width - 2.0 * PAGE_MARGIN;
    let count = spec.headers.len();
    let mut x = PAGE_MARGIN;
    let mut slots = Vec::with_capacity(count);
    for i in 0..count {
        let width = match spec.first_column_width {
            Some(first) if i == 0 => first,
            Some(first) => (available - first) / (count - 1) as f64,
            None => available / count as f64,
        };
        slots.push(ColumnSlot { x, width });
        x += width;
    }
    slots
}

/// Column shift per row: rows under a merged weekday cell start one
/// column to the right
fn row_offsets(rows: &[Row]) -> Vec<usize> {
    let mut offsets = Vec::with_capacity(rows.len());
    let mut span_remaining = 0u32;
    for row in rows {
        if span_remaining > 0 {
            offsets.push(1);
            span_remaining -= 1;
        } else {
            offsets.push(0);
            if let Some(first) = row.cells.first() {
                if first.row_span > 1 {
                    span_remaining = first.row_span - 1;
                }
            }
        }
    }
    offsets
}

/// Consecutive (start, len) row groups held together by a merged cell
fn span_groups(offsets: &[usize]) -> Vec<(usize, usize)> {
    let mut groups = Vec::new();
    let mut i = 0;
    while i < offsets.len() {
        let mut len = 1;
        while i + len < offsets.len() && offsets[i + len] == 1 {
            len += 1;
        }
        groups.push((i, len));
        i += len;
    }
    groups
}

/// Height of one row from its tallest wrapped cell
fn row_height(row: &Row, offset: usize, columns: &[ColumnSlot]) -> f64 {
    let mut max_lines = 1usize;
    for (ci, cell) in row.cells.iter().enumerate() {
        if offset == 0 && ci == 0 && cell.row_span > 1 {
            continue;
        }
        let col = &columns[ci + offset];
        let (size, _, _) = body_cell_style(row.role, false);
        let lines = wrap_text(&cell.content, col.width - 2.0 * CELL_PADDING, size).len();
        max_lines = max_lines.max(lines);
    }
    max_lines as f64 * TABLE_LINE_HEIGHT + 2.0 * CELL_PADDING
}

#[cfg(test)]
mod tests {
    use super::*;
    use schulfahrt_layout::Cell;

    fn span_row(day: &str, span: u32) -> Row {
        Row::primary(vec![
            Cell::spanning(day, span),
            Cell::plain("-"),
            Cell::plain("-"),
            Cell::plain("-"),
            Cell::plain("-"),
        ])
    }

    fn continuation_row() -> Row {
        Row::secondary(vec![
            Cell::plain("(N/A)"),
            Cell::plain("(N/A)"),
            Cell::plain("(N/A)"),
            Cell::plain("(N/A)"),
        ])
    }

    #[test]
    fn test_row_offsets_follow_spans() {
        let rows = vec![
            span_row("Montag", 2),
            continuation_row(),
            span_row("Dienstag", 2),
            continuation_row(),
        ];
        assert_eq!(row_offsets(&rows), vec![0, 1, 0, 1]);
    }

    #[test]
    fn test_span_groups_are_atomic() {
        let offsets = vec![0, 1, 1, 1, 0, 1, 0];
        assert_eq!(span_groups(&offsets), vec![(0, 4), (4, 2), (6, 1)]);
    }

    #[test]
    fn test_column_slots_fixed_first_width() {
        let headers = ["Tag", "Hinfahrt", "Rückfahrt"];
        let spec = TableSpec {
            headers: &headers,
            rows: &[],
            start_y: 50.0,
            column_align: vec![TextAlign::Left; 3],
            first_column_width: Some(30.0),
            bold_first_column: true,
        };
        let slots = column_slots(&spec, A4_WIDTH);
        assert_eq!(slots[0].width, 30.0);
        assert_eq!(slots[1].width, 76.0);
        assert_eq!(slots[2].width, 76.0);
        assert_eq!(slots[0].x, 14.0);
        assert_eq!(slots[2].x, 120.0);
    }

    #[test]
    fn test_surface_produces_pdf_bytes() {
        let mut surface = PdfSurface::a4().unwrap();
        surface
            .draw_text("Probe", 14.0, 40.0, &TextStyle::bold(12.0))
            .unwrap();
        let bytes = surface.finish().unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_table_bottom_advances() {
        let headers = ["Tag", "Hinfahrt", "Rückfahrt"];
        let rows = vec![Row::primary(vec![
            Cell::plain("Montag"),
            Cell::plain("Abfahrt: --:-- (N/A)\nAnkunft: --:-- (N/A)"),
            Cell::plain("Abfahrt: --:-- (N/A)\nAnkunft: --:-- (N/A)"),
        ])];
        let spec = TableSpec {
            headers: &headers,
            rows: &rows,
            start_y: 50.0,
            column_align: vec![TextAlign::Left; 3],
            first_column_width: Some(30.0),
            bold_first_column: true,
        };
        let mut surface = PdfSurface::a4().unwrap();
        surface.draw_table(&spec).unwrap();
        // Header row plus one two-line body row
        assert!(surface.table_bottom() > 50.0 + header_row_height());
    }
}
