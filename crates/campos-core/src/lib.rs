//! Core library for extracting form fields from Word documents.
//!
//! This crate provides:
//! - DOCX reading (body paragraphs and tables)
//! - Field extraction for Nome, CPF and Data
//! - Two-tier document scanning (paragraphs, then table rows)
//! - Batch aggregation with per-document error isolation
//! - Spreadsheet export (xlsx, csv)

pub mod error;
pub mod models;
pub mod docx;
pub mod extract;
pub mod scanner;
pub mod batch;
pub mod session;
pub mod single;
pub mod export;

pub use error::{CamposError, DocumentError, ExportError, Result};
pub use models::config::CamposConfig;
pub use models::record::{BatchSummary, ExtractionTable, FieldSet, ResultRow};
pub use docx::{Document, DocumentReader, DocxReader, Table};
pub use extract::extract;
pub use scanner::{scan, scan_path, scan_with_source, MatchSource, ScanOutcome};
pub use batch::{aggregate, aggregate_with, aggregate_with_progress, file_name_of};
pub use session::Session;
pub use single::{extract_document, extract_to_file};
pub use export::{export_single, export_table, ExportFormat, Exporter, Sheet};
