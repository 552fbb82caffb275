use std::path::{Path, PathBuf};

use crate::domain::RawRow;
use crate::error::Result;
use crate::pipeline::mapping::{MappingConfig, OutputItem};
use crate::pipeline::report::Report;

/// Supplies the raw lead rows for a run, fully read into memory
pub trait LeadSourcePort: Send + Sync {
    fn load_rows(&self, input_path: &Path) -> Result<Vec<RawRow>>;
}

/// Supplies the output field mapping for a run
pub trait MappingSourcePort: Send + Sync {
    fn load_mapping(&self, mapping_path: &Path) -> Result<MappingConfig>;
}

/// Persists the payload and report together; nothing is written if either cannot be produced
pub trait ArtifactOutputPort: Send + Sync {
    fn write_artifacts(&self, payload: &[OutputItem], report: &Report) -> Result<ArtifactPaths>;
}

/// Where the artifacts of a run ended up
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactPaths {
    pub payload: PathBuf,
    pub report: PathBuf,
}
