//! Scan-wide accumulation and recommendations.

use std::collections::BTreeSet;

use super::{
    catalog::TranslationCatalog,
    file_scanner::FileScanResult,
    priority::Priority,
    types::{Candidate, Finding, ScanWarning},
};
use crate::report::{Recommendation, ScanReport, Summary};

/// Running totals across the scan. Append-only: nothing is removed or deduplicated.
#[derive(Debug, Default)]
pub struct ReportAggregator {
    findings: Vec<Finding>,
    arabic_findings: Vec<Candidate>,
    keys: BTreeSet<String>,
    total_files: usize,
    files_with_english_text: usize,
    files_with_arabic_text: usize,
    files_with_translation_issues: usize,
    warnings: Vec<ScanWarning>,
}

impl ReportAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn aggregate(&mut self, result: FileScanResult) {
        self.total_files += 1;
        if result.stat.has_english_finding {
            self.files_with_english_text += 1;
        }
        if result.stat.has_arabic_finding {
            self.files_with_arabic_text += 1;
        }
        if result.stat.has_translation_issues() {
            self.files_with_translation_issues += 1;
        }
        self.findings.extend(result.findings);
        self.arabic_findings.extend(result.arabic_findings);
        self.keys.extend(result.keys);
        self.warnings.extend(result.warning);
    }

    /// Files that could not be read during the scan.
    pub fn warnings(&self) -> &[ScanWarning] {
        &self.warnings
    }

    pub fn build_report(&self, catalog: &TranslationCatalog) -> ScanReport {
        let by_priority = |priority: Priority| -> Vec<Finding> {
            self.findings
                .iter()
                .filter(|f| f.priority == priority)
                .cloned()
                .collect()
        };
        let high = by_priority(Priority::High);
        let medium = by_priority(Priority::Medium);
        let low = by_priority(Priority::Low);

        let (missing, unused) = cross_reference(&self.keys, catalog);

        let summary = Summary {
            total_files: self.total_files,
            files_with_english_text: self.files_with_english_text,
            files_with_arabic_text: self.files_with_arabic_text,
            files_with_translation_issues: self.files_with_translation_issues,
            unreadable_files: self.warnings.len(),
            total_english_texts: high.len() + medium.len() + low.len(),
            total_arabic_texts: self.arabic_findings.len(),
            high_priority_issues: high.len(),
            medium_priority_issues: medium.len(),
            low_priority_issues: low.len(),
            translation_keys_used: self.keys.len(),
            catalog_files: catalog.files_loaded,
            missing_translations: missing.len(),
            unused_translations: unused.len(),
        };

        ScanReport {
            recommendations: recommendations(&summary),
            summary,
            high_priority_issues: high,
            medium_priority_issues: medium,
            low_priority_issues: low,
            arabic_texts: self.arabic_findings.clone(),
            translation_keys: self.keys.iter().cloned().collect(),
            missing_translations: missing,
            unused_translations: unused,
        }
    }
}

/// Used keys absent from the catalog, and JSON catalog keys never used.
///
/// Both are empty when no catalog was loaded.
fn cross_reference(used: &BTreeSet<String>, catalog: &TranslationCatalog) -> (Vec<String>, Vec<String>) {
    if catalog.is_empty() {
        return (Vec::new(), Vec::new());
    }
    let missing = used
        .iter()
        .filter(|key| !catalog.contains_key(key))
        .cloned()
        .collect();
    let unused = catalog
        .keys()
        .into_iter()
        .filter(|key| !used.contains(*key))
        .map(String::from)
        .collect();
    (missing, unused)
}

/// Derive remediation actions from the totals.
pub fn recommendations(summary: &Summary) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    if summary.high_priority_issues > 0 {
        recommendations.push(Recommendation {
            priority: Priority::High,
            message: format!(
                "Found {} high-priority hard-coded texts",
                summary.high_priority_issues
            ),
            action: "Move these texts into translation files and replace them with t() calls"
                .to_string(),
        });
    }

    if summary.medium_priority_issues > 0 {
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            message: format!(
                "Found {} medium-priority hard-coded texts",
                summary.medium_priority_issues
            ),
            action: "Schedule these texts for translation in the next iteration".to_string(),
        });
    }

    if summary.total_arabic_texts > 0 {
        recommendations.push(Recommendation {
            priority: Priority::Medium,
            message: format!(
                "Found {} hard-coded Arabic texts",
                summary.total_arabic_texts
            ),
            action: "Move Arabic texts into the Arabic translation file and reference them by key"
                .to_string(),
        });
    }

    recommendations
}
