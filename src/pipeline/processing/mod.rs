// Pipeline processing: normalization, validation, dedupe, mapping and reporting

pub mod normalize;
pub mod quality_gate;
pub mod dedupe;
pub mod mapping;
pub mod report;
