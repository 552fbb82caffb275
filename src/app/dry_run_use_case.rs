use std::path::{Path, PathBuf};
use std::time::Instant;

use tracing::{info, info_span, warn};
use uuid::Uuid;

use crate::app::ports::{ArtifactOutputPort, LeadSourcePort, MappingSourcePort};
use crate::error::Result;
use crate::infra::{CsvLeadSource, FileArtifactOutputAdapter, JsonMappingLoader};
use crate::observability::metrics;
use crate::pipeline::dedupe::Deduplicator;
use crate::pipeline::mapping::map_batch;
use crate::pipeline::normalize::normalize_batch;
use crate::pipeline::quality_gate;
use crate::pipeline::report::build_report;

/// Use case for a full dry run: load, clean, validate, dedupe, map and report
pub struct DryRunUseCase {
    source: Box<dyn LeadSourcePort>,
    mapping: Box<dyn MappingSourcePort>,
    output: Box<dyn ArtifactOutputPort>,
}

/// Counts and artifact locations of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DryRunOutcome {
    pub total_rows: usize,
    pub valid_rows: usize,
    pub invalid_rows: usize,
    pub duplicates: usize,
    pub payload_path: PathBuf,
    pub report_path: PathBuf,
}

impl DryRunOutcome {
    /// The three console lines printed after a successful run
    pub fn summary_lines(&self) -> [String; 3] {
        [
            format!("Loaded rows: {}", self.total_rows),
            format!(
                "Valid: {} | Invalid: {} | Duplicates: {}",
                self.valid_rows, self.invalid_rows, self.duplicates
            ),
            format!(
                "Wrote {} and {}",
                self.payload_path.display(),
                self.report_path.display()
            ),
        ]
    }
}

impl DryRunUseCase {
    pub fn new(
        source: Box<dyn LeadSourcePort>,
        mapping: Box<dyn MappingSourcePort>,
        output: Box<dyn ArtifactOutputPort>,
    ) -> Self {
        Self {
            source,
            mapping,
            output,
        }
    }

    /// CSV in, JSON mapping, JSON artifacts written under `output_dir`
    pub fn with_file_adapters(output_dir: impl Into<PathBuf>) -> Self {
        Self::new(
            Box::new(CsvLeadSource::new()),
            Box::new(JsonMappingLoader::new()),
            Box::new(FileArtifactOutputAdapter::new(output_dir)),
        )
    }

    /// Run the pipeline end to end.
    ///
    /// Fails before writing anything if the input or the mapping cannot be loaded.
    pub fn execute(&self, input_path: &Path, mapping_path: &Path) -> Result<DryRunOutcome> {
        let span = info_span!("dry_run", run_id = %Uuid::new_v4(), input = %input_path.display());
        let _enter = span.enter();
        let started = Instant::now();

        let result = self.run_stages(input_path, mapping_path);
        match &result {
            Ok(_) => metrics::run::completed(started.elapsed().as_secs_f64()),
            Err(e) => {
                warn!(error = %e, "Dry run failed");
                metrics::run::failed();
            }
        }
        result
    }

    fn run_stages(&self, input_path: &Path, mapping_path: &Path) -> Result<DryRunOutcome> {
        let rows = self.source.load_rows(input_path)?;
        let total_rows = rows.len();
        metrics::pipeline::rows_loaded(total_rows);

        let cleaned = normalize_batch(&rows);

        let gate = quality_gate::partition(cleaned);
        metrics::quality_gate::batch_assessed(gate.valid.len(), gate.invalid.len());
        info!(valid = gate.valid.len(), invalid = gate.invalid.len(), "Validated rows");

        let dedupe = Deduplicator::new().dedupe(gate.valid);
        metrics::dedupe::duplicates_dropped(dedupe.duplicates.len());
        info!(
            kept = dedupe.deduped.len(),
            duplicates = dedupe.duplicates.len(),
            "Deduplicated rows by email"
        );

        let mapping = self.mapping.load_mapping(mapping_path)?;
        let payload = map_batch(&dedupe.deduped, &mapping);
        metrics::pipeline::items_mapped(payload.len());

        let report = build_report(
            &input_path.display().to_string(),
            total_rows,
            dedupe.deduped.len(),
            &gate.invalid,
            &dedupe.duplicates,
        );

        let paths = self.output.write_artifacts(&payload, &report)?;

        Ok(DryRunOutcome {
            total_rows,
            valid_rows: report.valid_rows,
            invalid_rows: report.invalid_rows,
            duplicates: report.duplicates,
            payload_path: paths.payload,
            report_path: paths.report,
        })
    }
}
