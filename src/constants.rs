/// Defaults and fixed names shared across the pipeline

/// Output field that joins its non-empty sources with a single space
pub const FULL_NAME_FIELD: &str = "full_name";

/// How many invalid / duplicate entries the report keeps
pub const REPORT_EXAMPLE_LIMIT: usize = 5;

pub const DEFAULT_MAPPING_PATH: &str = "config/mapping.json";
pub const DEFAULT_OUTPUT_DIR: &str = "out";
pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_CONFIG_FILE: &str = "lead_quality.toml";

pub const PAYLOAD_FILE_NAME: &str = "payload.json";
pub const REPORT_FILE_NAME: &str = "report.json";

// Environment overrides
pub const ENV_MAPPING_PATH: &str = "LEAD_QUALITY_MAPPING";
pub const ENV_OUTPUT_DIR: &str = "LEAD_QUALITY_OUTPUT_DIR";
pub const ENV_LOG_DIR: &str = "LEAD_QUALITY_LOG_DIR";
