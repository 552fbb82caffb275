pub mod artifact_output_adapter;
pub mod csv_lead_source;
pub mod json_mapping_loader;

pub use artifact_output_adapter::FileArtifactOutputAdapter;
pub use csv_lead_source::CsvLeadSource;
pub use json_mapping_loader::JsonMappingLoader;
