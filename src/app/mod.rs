pub mod ports;
pub mod dry_run_use_case;
