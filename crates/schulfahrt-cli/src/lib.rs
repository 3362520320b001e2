//! schulfahrt CLI - Command-line interface library
//!
//! This library provides the CLI functionality for schulfahrt:
//! - Render: Export a request JSON file to a PDF document
//! - Check: Validate a request file without exporting
//! - Sample: Emit a fully-populated example request file
//!
//! # Binary Usage
//!
//! ```bash
//! # Write a starting point
//! schulfahrt sample --output antrag.json
//!
//! # Validate it
//! schulfahrt check antrag.json
//!
//! # Render the PDF next to it
//! schulfahrt render antrag.json --output .
//! ```

pub mod app;

// Re-export main entry point and commands
pub use app::{check_command, render_command, run_cli, sample_command};
