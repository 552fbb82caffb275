pub mod config;
pub mod constants;
pub mod error;

// Domain data shapes shared across layers
pub mod domain;

// Pipeline stages: normalize -> validate -> dedupe -> map -> report
pub mod pipeline;

// Layered boundaries for application and infrastructure
pub mod app;
pub mod infra;

pub mod observability;
