//! `tally` — runs the catalog reports over the reference dataset.

pub mod config;
pub mod report;
pub mod sample;

pub use config::{AppConfig, ConfigError, OutputFormat};
pub use report::run_reports;
pub use sample::SampleCatalog;
