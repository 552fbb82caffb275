use std::fs;
use std::path::Path;

use tracing::info;

use crate::app::ports::MappingSourcePort;
use crate::error::{LeadQualityError, Result};
use crate::pipeline::mapping::MappingConfig;

/// Loads the field mapping from a JSON object file
#[derive(Debug, Default)]
pub struct JsonMappingLoader;

impl JsonMappingLoader {
    pub fn new() -> Self {
        Self
    }
}

impl MappingSourcePort for JsonMappingLoader {
    fn load_mapping(&self, mapping_path: &Path) -> Result<MappingConfig> {
        let path = mapping_path.display().to_string();

        let content = fs::read_to_string(mapping_path).map_err(|e| LeadQualityError::Mapping {
            path: path.clone(),
            message: format!("failed to read file: {}", e),
        })?;

        let mapping: MappingConfig =
            serde_json::from_str(&content).map_err(|e| LeadQualityError::Mapping {
                path: path.clone(),
                message: format!("invalid JSON: {}", e),
            })?;

        info!(mapping = %path, targets = mapping.len(), "Loaded field mapping");
        Ok(mapping)
    }
}
