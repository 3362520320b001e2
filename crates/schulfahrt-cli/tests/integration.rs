//! Integration tests for the schulfahrt CLI
//!
//! These tests exercise the full path: sample file -> validation ->
//! PDF export under the derived name.

use std::fs;

use tempfile::TempDir;

use schulfahrt_cli::{check_command, render_command, sample_command};

#[test]
fn test_sample_round_trips_through_check() {
    let dir = TempDir::new().unwrap();
    let sample_path = dir.path().join("antrag.json");

    sample_command(Some(sample_path.as_path())).unwrap();
    assert!(sample_path.exists());

    check_command(&sample_path).unwrap();
}

#[test]
fn test_render_writes_pdf_under_derived_name() {
    let dir = TempDir::new().unwrap();
    let sample_path = dir.path().join("antrag.json");
    sample_command(Some(sample_path.as_path())).unwrap();

    let out_dir = dir.path().join("out");
    let pdf_path = render_command(&sample_path, &out_dir).unwrap();

    assert_eq!(
        pdf_path.file_name().unwrap().to_str().unwrap(),
        "Antrag_Mustermann_Max.pdf"
    );
    let bytes = fs::read(&pdf_path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_check_rejects_duplicate_weekday() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("invalid.json");
    fs::write(
        &path,
        r#"{
            "applicant": {"Group": {"names": ["3b"], "headcount": 10, "responsible": ""}},
            "schedule": [
                {"day": "Montag", "plan": {"Simple": {}}},
                {"day": "Montag", "plan": {"Simple": {}}}
            ]
        }"#,
    )
    .unwrap();

    let err = check_command(&path).unwrap_err();
    assert!(err.to_string().contains("Invalid schedule"));
}

#[test]
fn test_check_rejects_empty_schedule() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("empty.json");
    fs::write(
        &path,
        r#"{"applicant": {"Single": []}, "schedule": []}"#,
    )
    .unwrap();

    assert!(check_command(&path).is_err());
}

#[test]
fn test_check_rejects_malformed_json() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ not json").unwrap();

    let err = check_command(&path).unwrap_err();
    assert!(err.to_string().contains("Failed to parse"));
}
