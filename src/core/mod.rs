//! Core scanning engine.
//!
//! Each file goes through the same pipeline:
//! extract candidates → filter false positives → classify priority,
//! plus a separate pass collecting translation keys. Per-file results are
//! folded into a `ReportAggregator`, which builds the final report.
//!
//! - `path_filter`: exclusion globs
//! - `extractor`: pattern-based candidate extraction
//! - `filter`: false-positive rejection
//! - `priority`: keyword tier classification
//! - `keys`: translation key collection
//! - `catalog`: translation resource loading
//! - `file_scanner`: file discovery and the per-file pipeline
//! - `aggregate`: scan-wide totals and recommendations

pub mod aggregate;
pub mod catalog;
pub mod extractor;
pub mod file_scanner;
pub mod filter;
pub mod keys;
pub mod path_filter;
pub mod priority;
pub mod types;

pub use aggregate::ReportAggregator;
pub use catalog::{TranslationCatalog, load_catalog};
pub use file_scanner::{FileScanResult, Scanner, SourceFile, discover_files};
pub use path_filter::PathFilter;
pub use priority::{Priority, PriorityClassifier};
pub use types::{Candidate, FileStat, Finding, ScanWarning, Script};
