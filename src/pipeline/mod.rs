// Lead pipeline stages. Data only flows forward: raw -> normalized -> valid -> deduped -> mapped.

pub mod processing;

pub use processing::{dedupe, mapping, normalize, quality_gate, report};
