use std::{
    collections::BTreeSet,
    fs,
    path::{Path, PathBuf},
};

use anyhow::Result;
use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use super::{
    extractor::{CompiledPattern, compile_patterns, extract},
    filter::FalsePositiveFilter,
    keys::KeyExtractor,
    path_filter::{MATCH_OPTIONS, PathFilter},
    priority::PriorityClassifier,
    types::{Candidate, FileStat, Finding, Script, ScanWarning},
};
use crate::config::Config;
use crate::utils::normalize_path;

/// Everything needed to scan one file, compiled once per run.
#[derive(Debug, Clone)]
pub struct Scanner {
    latin: Vec<CompiledPattern>,
    arabic: Vec<CompiledPattern>,
    keys: KeyExtractor,
    filter: FalsePositiveFilter,
    classifier: PriorityClassifier,
}

/// Output of scanning a single file.
#[derive(Debug, Clone, Default)]
pub struct FileScanResult {
    pub findings: Vec<Finding>,
    pub arabic_findings: Vec<Candidate>,
    pub keys: BTreeSet<String>,
    pub stat: FileStat,
    pub warning: Option<ScanWarning>,
}

impl Scanner {
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            latin: compile_patterns(&config.latin_patterns, Script::Latin)?,
            arabic: compile_patterns(&config.arabic_patterns, Script::Arabic)?,
            keys: KeyExtractor::new(&config.key_patterns)?,
            filter: FalsePositiveFilter::new(&config.ignore_texts),
            classifier: PriorityClassifier::new(&config.priority_tiers),
        })
    }

    /// Read `path` once and run both extraction pipelines and the key extractor.
    ///
    /// `display_path` is what findings report as their file path. A read failure
    /// yields an empty result carrying a warning.
    pub fn scan_file(&self, path: &Path, display_path: &str) -> FileScanResult {
        match fs::read_to_string(path) {
            Ok(content) => self.scan_content(&content, display_path),
            Err(e) => FileScanResult {
                stat: FileStat {
                    path: display_path.to_string(),
                    ..Default::default()
                },
                warning: Some(ScanWarning {
                    file_path: display_path.to_string(),
                    error: format!("Failed to read file: {}", e),
                }),
                ..Default::default()
            },
        }
    }

    pub fn scan_content(&self, content: &str, display_path: &str) -> FileScanResult {
        let findings: Vec<Finding> = extract(content, display_path, &self.latin)
            .filter(|c| self.filter.accept(c))
            .map(|candidate| Finding {
                priority: self.classifier.classify(&candidate.text),
                candidate,
            })
            .collect();

        let arabic_findings: Vec<Candidate> = extract(content, display_path, &self.arabic)
            .filter(|c| self.filter.accept(c))
            .collect();

        FileScanResult {
            stat: FileStat {
                path: display_path.to_string(),
                has_english_finding: !findings.is_empty(),
                has_arabic_finding: !arabic_findings.is_empty(),
            },
            keys: self.keys.extract_keys(content),
            findings,
            arabic_findings,
            warning: None,
        }
    }
}

/// A source file selected for scanning.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SourceFile {
    pub path: PathBuf,
    /// Root-relative path with forward slashes.
    pub display: String,
}

/// Result of discovering source files.
#[derive(Debug, Default)]
pub struct DiscoverResult {
    pub files: Vec<SourceFile>,
    pub warnings: Vec<ScanWarning>,
}

/// Walk `root` and keep files matching any source glob that are not excluded.
///
/// The list is sorted by path and free of duplicates.
pub fn discover_files(root: &Path, source_globs: &[String], filter: &PathFilter) -> DiscoverResult {
    let mut result = DiscoverResult::default();

    let mut patterns: Vec<Pattern> = Vec::new();
    for glob in source_globs {
        match Pattern::new(glob) {
            Ok(pattern) => patterns.push(pattern),
            Err(e) => eprintln!(
                "{} Invalid source pattern '{}': {}",
                "warning:".bold().yellow(),
                glob,
                e
            ),
        }
    }
    if patterns.is_empty() {
        return result;
    }

    let walker = WalkDir::new(root)
        .into_iter()
        .filter_entry(|entry| !(entry.file_type().is_dir() && filter.is_excluded_dir(entry.path())));

    let mut files = BTreeSet::new();
    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                result.warnings.push(ScanWarning {
                    file_path: e
                        .path()
                        .map(|p| normalize_path(p.strip_prefix(root).unwrap_or(p)))
                        .unwrap_or_default(),
                    error: format!("Cannot access path: {}", e),
                });
                continue;
            }
        };
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let display = normalize_path(path.strip_prefix(root).unwrap_or(path));
        if patterns.iter().any(|p| p.matches_with(&display, MATCH_OPTIONS))
            && !filter.is_excluded(path)
        {
            files.insert(SourceFile {
                path: path.to_path_buf(),
                display,
            });
        }
    }

    result.files = files.into_iter().collect();
    result
}
