//! Export driver
//!
//! Front door of the crate: derives the output file name, initializes
//! the drawing backend, runs the composer and hands back the finished
//! document. Any backend or drawing failure surfaces as a single
//! error; there is no retry and no partial artifact.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use schulfahrt_layout::build_rows;
use schulfahrt_model::{Applicant, Request};

use crate::backend::PdfSurface;
use crate::composer::compose;
use crate::error::Result;

/// A finished document with its derived file name
#[derive(Debug, Clone)]
pub struct NamedDocument {
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Derive the output file name for a request
///
/// Pure over the request: the same request always maps to the same
/// name, independent of how often it is exported.
pub fn derive_file_name(request: &Request) -> String {
    match request.applicant() {
        Applicant::Single(students) => {
            let first = students.first();
            let last_name = first
                .map(|s| s.last_name.trim())
                .filter(|n| !n.is_empty())
                .unwrap_or("Name");
            let first_name = first
                .map(|s| s.first_name.trim())
                .filter(|n| !n.is_empty())
                .unwrap_or("Vorname");
            let suffix = if students.len() > 1 { "_und_weitere" } else { "" };
            format!("Antrag_{last_name}_{first_name}{suffix}.pdf")
        }
        Applicant::Group(group) => {
            let names: Vec<&str> = group
                .names
                .iter()
                .map(|n| n.trim())
                .filter(|n| !n.is_empty())
                .collect();
            let base = match names.as_slice() {
                [] => "Unbenannt".to_string(),
                [only] => (*only).to_string(),
                [first, ..] => format!("{first}_und_weitere"),
            };
            format!("Antrag_Gruppe_{}.pdf", collapse_whitespace(&base))
        }
    }
}

/// Compose a request into a named PDF document
pub fn export_request(request: &Request) -> Result<NamedDocument> {
    debug!(entries = request.schedule().len(), "starting export");
    let mut surface = PdfSurface::a4()?;
    let row_set = build_rows(request);
    compose(request, &row_set, &mut surface)?;
    let bytes = surface.finish()?;
    let file_name = derive_file_name(request);
    info!(file = %file_name, size = bytes.len(), "request exported");
    Ok(NamedDocument { file_name, bytes })
}

/// Export a request and write it into a directory
///
/// Returns the path of the written file.
pub fn export_to_file(request: &Request, dir: &Path) -> Result<PathBuf> {
    let document = export_request(request)?;
    let path = dir.join(&document.file_name);
    fs::write(&path, &document.bytes)?;
    Ok(path)
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join("_")
}
