//! Metrics for the lead pipeline.
//!
//! Values go through the `metrics` facade. No exporter is installed here, so
//! recording is a no-op unless the embedding process installs a recorder.

use std::fmt;

/// All metric names used by the pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MetricName {
    RowsLoaded,
    RowsValid,
    RowsInvalid,
    RowsDuplicate,
    ItemsMapped,
    RunsCompleted,
    RunsFailed,
    RunDuration,
}

impl MetricName {
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricName::RowsLoaded => "lead_quality_rows_loaded_total",
            MetricName::RowsValid => "lead_quality_rows_valid_total",
            MetricName::RowsInvalid => "lead_quality_rows_invalid_total",
            MetricName::RowsDuplicate => "lead_quality_rows_duplicate_total",
            MetricName::ItemsMapped => "lead_quality_items_mapped_total",
            MetricName::RunsCompleted => "lead_quality_runs_completed_total",
            MetricName::RunsFailed => "lead_quality_runs_failed_total",
            MetricName::RunDuration => "lead_quality_run_duration_seconds",
        }
    }

    pub fn all_metrics() -> impl Iterator<Item = MetricName> {
        use MetricName::*;
        [
            RowsLoaded,
            RowsValid,
            RowsInvalid,
            RowsDuplicate,
            ItemsMapped,
            RunsCompleted,
            RunsFailed,
            RunDuration,
        ]
        .into_iter()
    }
}

impl fmt::Display for MetricName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

pub mod pipeline {
    use super::MetricName;

    pub fn rows_loaded(count: usize) {
        ::metrics::counter!(MetricName::RowsLoaded.as_str()).increment(count as u64);
    }

    pub fn items_mapped(count: usize) {
        ::metrics::counter!(MetricName::ItemsMapped.as_str()).increment(count as u64);
    }
}

pub mod quality_gate {
    use super::MetricName;

    /// Record the valid / invalid split of a batch
    pub fn batch_assessed(valid: usize, invalid: usize) {
        ::metrics::counter!(MetricName::RowsValid.as_str()).increment(valid as u64);
        ::metrics::counter!(MetricName::RowsInvalid.as_str()).increment(invalid as u64);
    }
}

pub mod dedupe {
    use super::MetricName;

    pub fn duplicates_dropped(count: usize) {
        ::metrics::counter!(MetricName::RowsDuplicate.as_str()).increment(count as u64);
    }
}

pub mod run {
    use super::MetricName;

    pub fn completed(duration_secs: f64) {
        ::metrics::counter!(MetricName::RunsCompleted.as_str()).increment(1);
        ::metrics::histogram!(MetricName::RunDuration.as_str()).record(duration_secs);
    }

    pub fn failed() {
        ::metrics::counter!(MetricName::RunsFailed.as_str()).increment(1);
    }
}
