use std::fs;
use std::path::Path;

use anyhow::Result;
use lead_quality::app::dry_run_use_case::DryRunUseCase;
use lead_quality::error::LeadQualityError;
use serde_json::{json, Value};
use tempfile::tempdir;

const MAPPING: &str = r#"{
  "full_name": ["first_name", "last_name"],
  "email": ["email"],
  "company_out": ["company"],
  "extra": ["notes", "company"]
}"#;

fn write(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[test]
fn test_end_to_end_dry_run() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("leads.csv");
    let mapping = dir.path().join("mapping.json");
    let out = dir.path().join("out");

    write(
        &input,
        "first_name,last_name,email,company,notes\n\
         Ada,Lovelace,ada@example.com,  Analytical   Engines ,\n\
         Ada,L,  ADA@EXAMPLE.COM ,Dup Co,dup\n\
         Grace,,grace@navy.mil,Navy,missing last name\n",
    );
    write(&mapping, MAPPING);

    let outcome = DryRunUseCase::with_file_adapters(&out).execute(&input, &mapping)?;
    assert_eq!(outcome.total_rows, 3);
    assert_eq!(outcome.valid_rows, 1);
    assert_eq!(outcome.invalid_rows, 1);
    assert_eq!(outcome.duplicates, 1);

    let payload = read_json(&out.join("payload.json"));
    assert_eq!(
        payload,
        json!([{
            "full_name": "Ada Lovelace",
            "email": "ada@example.com",
            "company_out": "Analytical Engines",
            "extra": ["", "Analytical Engines"]
        }])
    );

    let report = read_json(&out.join("report.json"));
    assert_eq!(report["input_file"], input.display().to_string());
    assert_eq!(report["total_rows"], 3);
    assert_eq!(report["valid_rows"], 1);
    assert_eq!(report["invalid_rows"], 1);
    assert_eq!(report["duplicates"], 1);
    assert_eq!(report["invalid_examples"], json!([{"row": 3, "email": "grace@navy.mil"}]));
    assert_eq!(report["duplicate_examples"], json!([{"email": "ada@example.com"}]));
    assert!(report["generated_at"].as_str().unwrap().ends_with("+00:00"));

    Ok(())
}

#[test]
fn test_report_keeps_first_five_invalid_rows() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("leads.csv");
    let mapping = dir.path().join("mapping.json");
    let out = dir.path().join("out");

    let mut csv = String::from("first_name,last_name,email\n");
    for i in 1..=8 {
        csv.push_str(&format!("Name{},,user{}@example.com\n", i, i));
    }
    csv.push_str("Valid,Person,valid@example.com\n");
    write(&input, &csv);
    write(&mapping, MAPPING);

    let outcome = DryRunUseCase::with_file_adapters(&out).execute(&input, &mapping)?;
    assert_eq!(outcome.invalid_rows, 8);
    assert_eq!(outcome.valid_rows, 1);

    let report = read_json(&out.join("report.json"));
    let rows: Vec<u64> = report["invalid_examples"]
        .as_array()
        .unwrap()
        .iter()
        .map(|entry| entry["row"].as_u64().unwrap())
        .collect();
    assert_eq!(rows, vec![1, 2, 3, 4, 5]);

    Ok(())
}

#[test]
fn test_report_keeps_first_five_duplicates() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("leads.csv");
    let mapping = dir.path().join("mapping.json");
    let out = dir.path().join("out");

    let mut csv = String::from("first_name,last_name,email\n");
    csv.push_str("Ada,Lovelace,ada@example.com\n");
    csv.push_str("Grace,Hopper,grace@navy.mil\n");
    // Seven repeats of ada, with grace repeated once in the middle
    for i in 1..=7 {
        csv.push_str(&format!("Ada{},Lovelace,  ADA@example.com \n", i));
        if i == 2 {
            csv.push_str("Grace,H,GRACE@navy.mil\n");
        }
    }
    write(&input, &csv);
    write(&mapping, MAPPING);

    let outcome = DryRunUseCase::with_file_adapters(&out).execute(&input, &mapping)?;
    assert_eq!(outcome.total_rows, 10);
    assert_eq!(outcome.valid_rows, 2);
    assert_eq!(outcome.duplicates, 8);

    let report = read_json(&out.join("report.json"));
    assert_eq!(report["duplicates"], 8);
    assert_eq!(
        report["duplicate_examples"],
        json!([
            {"email": "ada@example.com"},
            {"email": "ada@example.com"},
            {"email": "grace@navy.mil"},
            {"email": "ada@example.com"},
            {"email": "ada@example.com"}
        ])
    );

    Ok(())
}

#[test]
fn test_missing_input_writes_nothing() -> Result<()> {
    let dir = tempdir()?;
    let mapping = dir.path().join("mapping.json");
    let out = dir.path().join("out");
    write(&mapping, MAPPING);

    let err = DryRunUseCase::with_file_adapters(&out)
        .execute(&dir.path().join("absent.csv"), &mapping)
        .unwrap_err();

    assert!(matches!(err, LeadQualityError::Input { .. }));
    assert!(!out.exists());
    Ok(())
}

#[test]
fn test_bad_mapping_writes_nothing() -> Result<()> {
    let dir = tempdir()?;
    let input = dir.path().join("leads.csv");
    let mapping = dir.path().join("mapping.json");
    let out = dir.path().join("out");
    write(&input, "first_name,last_name,email\nAda,Lovelace,ada@example.com\n");
    write(&mapping, "{\"full_name\": [\"first_name\",");

    let err = DryRunUseCase::with_file_adapters(&out)
        .execute(&input, &mapping)
        .unwrap_err();

    assert!(matches!(err, LeadQualityError::Mapping { .. }));
    assert!(!out.exists());
    Ok(())
}
