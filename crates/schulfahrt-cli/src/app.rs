//! CLI Application logic
//!
//! Contains the command-line interface implementation. The CLI stands
//! in for the interactive form: it reads a fully-populated request
//! from a JSON file and triggers the export.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use schulfahrt_model::{
    Applicant, DayPlan, EntryId, Leg, Request, ScheduleEntry, Student, TripLegs, WallTime, Weekday,
};
use schulfahrt_pdf::export_to_file;

#[derive(Parser)]
#[command(name = "schulfahrt")]
#[command(author, version, about = "Schülerbeförderungsanträge als PDF", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a request file to a PDF document
    Render {
        /// Input request file (JSON)
        input: PathBuf,

        /// Output directory for the generated PDF
        #[arg(short, long, default_value = ".")]
        output: PathBuf,
    },

    /// Check a request file for schedule problems
    Check {
        /// Input request file (JSON)
        input: PathBuf,
    },

    /// Write a fully-populated sample request file
    Sample {
        /// Output file (defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

/// Run the CLI application
///
/// This is the main entry point for the command-line interface.
/// It parses arguments and dispatches to the appropriate command.
pub fn run_cli() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Render { input, output } => {
            let path = render_command(&input, &output)?;
            println!("PDF gespeichert: {}", path.display());
        }
        Commands::Check { input } => {
            check_command(&input)?;
            println!("Keine Probleme gefunden.");
        }
        Commands::Sample { output } => {
            sample_command(output.as_deref())?;
        }
    }

    Ok(())
}

/// Load, validate and export a request; returns the written path
pub fn render_command(input: &Path, output_dir: &Path) -> Result<PathBuf> {
    let request = load_request(input)?;
    fs::create_dir_all(output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;
    let path = export_to_file(&request, output_dir)
        .with_context(|| format!("Failed to export {}", input.display()))?;
    Ok(path)
}

/// Validate a request file without exporting it
pub fn check_command(input: &Path) -> Result<()> {
    load_request(input).map(|_| ())
}

/// Emit a sample request, to a file or stdout
pub fn sample_command(output: Option<&Path>) -> Result<()> {
    let request = sample_request()?;
    let json = serde_json::to_string_pretty(&request)?;
    match output {
        Some(path) => fs::write(path, json)
            .with_context(|| format!("Failed to write sample to {}", path.display()))?,
        None => println!("{json}"),
    }
    Ok(())
}

fn load_request(path: &Path) -> Result<Request> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read request file {}", path.display()))?;
    let request: Request = serde_json::from_str(&text)
        .with_context(|| format!("Failed to parse request file {}", path.display()))?;
    request
        .validate()
        .with_context(|| format!("Invalid schedule in {}", path.display()))?;
    Ok(request)
}

/// A filled request covering both entry shapes
fn sample_request() -> Result<Request> {
    let morning = TripLegs {
        depart_stop: Leg::new(WallTime::new(7, 35)?, "Dorfplatz"),
        arrive_school: Leg::new(WallTime::new(7, 55)?, "Grundschule Beispielstadt"),
        ..Default::default()
    };
    let afternoon = TripLegs {
        depart_school: Leg::new(WallTime::new(15, 10)?, "Grundschule Beispielstadt"),
        arrive_stop: Leg::new(WallTime::new(15, 30)?, "Dorfplatz"),
        ..Default::default()
    };
    let monday = ScheduleEntry::new(Weekday::Montag, DayPlan::Split { morning, afternoon })
        .with_id(EntryId(1));

    let simple = TripLegs {
        depart_stop: Leg::new(WallTime::new(7, 35)?, "Dorfplatz"),
        arrive_school: Leg::new(WallTime::new(7, 55)?, "Grundschule Beispielstadt"),
        depart_school: Leg::new(WallTime::new(13, 10)?, "Grundschule Beispielstadt"),
        arrive_stop: Leg::new(WallTime::new(13, 30)?, "Dorfplatz"),
    };
    let wednesday =
        ScheduleEntry::new(Weekday::Mittwoch, DayPlan::Simple(simple)).with_id(EntryId(2));

    let student = Student::named("Max", "Mustermann").with_address(
        "Schulweg 1",
        "12345",
        "Beispielstadt",
    );

    let mut request = Request::new(Applicant::Single(vec![student]), monday);
    request.add_entry(wednesday)?;
    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_request_is_valid() {
        let request = sample_request().unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.schedule().len(), 2);
    }
}
