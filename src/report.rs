//! The persisted scan report.
//!
//! Written once per run as pretty-printed JSON, replacing any previous report.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use serde::Serialize;

use crate::core::{Candidate, Finding, Priority};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub total_files: usize,
    pub files_with_english_text: usize,
    pub files_with_arabic_text: usize,
    pub files_with_translation_issues: usize,
    pub unreadable_files: usize,
    pub total_english_texts: usize,
    pub total_arabic_texts: usize,
    pub high_priority_issues: usize,
    pub medium_priority_issues: usize,
    pub low_priority_issues: usize,
    pub translation_keys_used: usize,
    pub catalog_files: usize,
    pub missing_translations: usize,
    pub unused_translations: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub message: String,
    pub action: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanReport {
    pub summary: Summary,
    pub high_priority_issues: Vec<Finding>,
    pub medium_priority_issues: Vec<Finding>,
    pub low_priority_issues: Vec<Finding>,
    pub arabic_texts: Vec<Candidate>,
    pub translation_keys: Vec<String>,
    pub missing_translations: Vec<String>,
    pub unused_translations: Vec<String>,
    pub recommendations: Vec<Recommendation>,
}

impl ScanReport {
    /// The CI gate: any high-priority finding fails the run.
    pub fn has_blocking_issues(&self) -> bool {
        self.summary.high_priority_issues > 0
    }
}

pub fn write_report(report: &ScanReport, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("Failed to serialize report")?;
    fs::write(path, json + "\n")
        .with_context(|| format!("Failed to write report: {}", path.display()))
}
