use std::fs;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use tracing::{debug, info};

use crate::app::ports::LeadSourcePort;
use crate::domain::RawRow;
use crate::error::{LeadQualityError, Result};

const UTF8_BOM: char = '\u{feff}';

/// Reads a headered CSV file into raw rows
#[derive(Debug, Default)]
pub struct CsvLeadSource;

impl CsvLeadSource {
    pub fn new() -> Self {
        Self
    }

    /// Parse CSV text. Short records leave trailing columns absent, extra cells are dropped
    /// and values are kept untrimmed for the normalizer.
    pub fn parse_content(content: &str) -> std::result::Result<Vec<RawRow>, csv::Error> {
        let content = content.strip_prefix(UTF8_BOM).unwrap_or(content);

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::None)
            .from_reader(content.as_bytes());

        let headers = reader.headers()?.clone();
        debug!(columns = headers.len(), "Read CSV header");

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let row: RawRow = headers
                .iter()
                .zip(record.iter())
                .collect();
            rows.push(row);
        }

        Ok(rows)
    }
}

impl LeadSourcePort for CsvLeadSource {
    fn load_rows(&self, input_path: &Path) -> Result<Vec<RawRow>> {
        let path = input_path.display().to_string();

        let content = fs::read_to_string(input_path).map_err(|source| LeadQualityError::Input {
            path: path.clone(),
            source,
        })?;

        let rows = Self::parse_content(&content)
            .map_err(|source| LeadQualityError::Csv { path: path.clone(), source })?;

        info!(input = %path, rows = rows.len(), "Loaded lead rows");
        Ok(rows)
    }
}
