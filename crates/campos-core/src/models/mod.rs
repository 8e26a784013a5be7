//! Data models.

pub mod config;
pub mod record;

pub use config::CamposConfig;
pub use record::{BatchSummary, ExtractionTable, FieldSet, ResultRow};
