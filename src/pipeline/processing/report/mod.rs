use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::constants::REPORT_EXAMPLE_LIMIT;
use crate::domain::{DuplicateRecord, InvalidRow};

/// Run-level summary written to `report.json`
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    #[serde(serialize_with = "iso8601::serialize")]
    pub generated_at: DateTime<Utc>,
    pub input_file: String,
    pub total_rows: usize,
    /// Count of valid rows that survived deduplication
    pub valid_rows: usize,
    pub invalid_rows: usize,
    pub duplicates: usize,
    pub invalid_examples: Vec<InvalidRow>,
    pub duplicate_examples: Vec<DuplicateRecord>,
}

/// Assemble the report, stamping it with the current time
pub fn build_report(
    input_path: &str,
    total_rows: usize,
    deduped_count: usize,
    invalid: &[InvalidRow],
    duplicates: &[DuplicateRecord],
) -> Report {
    build_report_at(Utc::now(), input_path, total_rows, deduped_count, invalid, duplicates)
}

pub fn build_report_at(
    generated_at: DateTime<Utc>,
    input_path: &str,
    total_rows: usize,
    deduped_count: usize,
    invalid: &[InvalidRow],
    duplicates: &[DuplicateRecord],
) -> Report {
    Report {
        generated_at,
        input_file: input_path.to_string(),
        total_rows,
        valid_rows: deduped_count,
        invalid_rows: invalid.len(),
        duplicates: duplicates.len(),
        invalid_examples: first_examples(invalid),
        duplicate_examples: first_examples(duplicates),
    }
}

fn first_examples<T: Clone>(entries: &[T]) -> Vec<T> {
    entries.iter().take(REPORT_EXAMPLE_LIMIT).cloned().collect()
}

/// `2026-10-17T09:30:00.123456+00:00`, or without the fraction on a whole second
mod iso8601 {
    use chrono::{DateTime, SecondsFormat, Utc};
    use serde::Serializer;

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let precision = if value.timestamp_subsec_micros() == 0 {
            SecondsFormat::Secs
        } else {
            SecondsFormat::Micros
        };
        serializer.serialize_str(&value.to_rfc3339_opts(precision, false))
    }
}
