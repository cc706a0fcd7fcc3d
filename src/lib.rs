//! i18n-guard - hard-coded text scanner for web front-end projects
//!
//! i18n-guard walks a project's source files looking for user-visible text that
//! bypasses the translation layer: English UI strings and Arabic text written
//! directly in code. Findings are ranked by keyword priority, translation keys
//! in use are collected and cross-referenced with the translation catalog, and
//! the result is written as a JSON report. A HIGH finding fails the run.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (arguments, runner, console output)
//! - `config`: Configuration file loading and defaults
//! - `core`: Scanning engine (extraction, filtering, classification, aggregation)
//! - `report`: The persisted report model
//! - `utils`: Shared text and path helpers

pub mod cli;
pub mod config;
pub mod core;
pub mod report;
pub mod utils;
