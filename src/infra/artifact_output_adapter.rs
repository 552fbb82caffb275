use std::fs;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::app::ports::{ArtifactOutputPort, ArtifactPaths};
use crate::constants::{PAYLOAD_FILE_NAME, REPORT_FILE_NAME};
use crate::error::Result;
use crate::pipeline::mapping::OutputItem;
use crate::pipeline::report::Report;

/// File-based implementation of ArtifactOutputPort.
/// Writes `payload.json` and `report.json` as 2-space pretty JSON into one directory.
pub struct FileArtifactOutputAdapter {
    output_dir: PathBuf,
}

impl FileArtifactOutputAdapter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

impl ArtifactOutputPort for FileArtifactOutputAdapter {
    fn write_artifacts(&self, payload: &[OutputItem], report: &Report) -> Result<ArtifactPaths> {
        // Serialize everything up front so a failure leaves no files behind
        let payload_json = serde_json::to_string_pretty(payload)?;
        let report_json = serde_json::to_string_pretty(report)?;

        fs::create_dir_all(&self.output_dir)?;

        let paths = ArtifactPaths {
            payload: self.output_dir.join(PAYLOAD_FILE_NAME),
            report: self.output_dir.join(REPORT_FILE_NAME),
        };
        let staged_payload = staging_path(&paths.payload);
        let staged_report = staging_path(&paths.report);

        // Both artifacts are staged before either becomes visible
        let staged = fs::write(&staged_payload, payload_json)
            .and_then(|_| fs::write(&staged_report, report_json));
        if let Err(e) = staged {
            discard(&staged_payload);
            discard(&staged_report);
            return Err(e.into());
        }

        fs::rename(&staged_payload, &paths.payload)?;
        fs::rename(&staged_report, &paths.report)?;

        info!(
            payload = %paths.payload.display(),
            report = %paths.report.display(),
            items = payload.len(),
            "Wrote dry-run artifacts"
        );

        Ok(paths)
    }
}

fn staging_path(path: &Path) -> PathBuf {
    let mut staged = path.as_os_str().to_os_string();
    staged.push(".tmp");
    PathBuf::from(staged)
}

fn discard(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        if e.kind() != std::io::ErrorKind::NotFound {
            warn!(path = %path.display(), error = %e, "Failed to remove staged artifact");
        }
    }
}
