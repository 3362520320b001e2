//! schulfahrt-pdf - PDF composition and export
//!
//! This crate renders a transport request into the printable PDF
//! document.
//!
//! # Architecture
//!
//! The pipeline has three stages:
//!
//! 1. **Composer** - Issues title, header block, schedule table and
//!    signature drawing calls against an abstract [`DrawingSurface`]
//! 2. **Backend** - [`PdfSurface`], the printpdf implementation of the
//!    surface, including the table painter
//! 3. **Export driver** - Derives the file name, wires composer and
//!    backend together and surfaces failures as one error
//!
//! # Example
//!
//! ```ignore
//! use schulfahrt_pdf::export_request;
//!
//! let document = export_request(&request)?;
//! std::fs::write(&document.file_name, &document.bytes)?;
//! ```

mod backend;
mod composer;
mod error;
mod export;
mod metrics;
mod surface;
pub mod test_utils;

pub use backend::{PdfSurface, A4_HEIGHT, A4_WIDTH};
pub use composer::{compose, DOCUMENT_TITLE};
pub use error::{PdfError, Result};
pub use export::{derive_file_name, export_request, export_to_file, NamedDocument};
pub use surface::{
    Color, DrawingSurface, FontWeight, TableSpec, TextAlign, TextStyle, LINE_ADVANCE,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
