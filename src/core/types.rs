use serde::Serialize;

use super::priority::Priority;

/// Writing system a pattern looks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Script {
    Latin,
    Arabic,
}

impl std::fmt::Display for Script {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Script::Latin => write!(f, "latin"),
            Script::Arabic => write!(f, "arabic"),
        }
    }
}

/// A raw text span found by an extraction pattern, before filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub text: String,
    pub file_path: String,
    /// 1-based.
    pub line_number: usize,
    /// Byte offset of `text` within the file.
    pub byte_offset: usize,
    pub surrounding_context: String,
    /// Name of the pattern that produced this candidate.
    pub pattern: String,
    pub script: Script,
}

/// An accepted Latin candidate with its remediation priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    #[serde(flatten)]
    pub candidate: Candidate,
    pub priority: Priority,
}

impl Finding {
    pub fn file_path(&self) -> &str {
        &self.candidate.file_path
    }

    pub fn text(&self) -> &str {
        &self.candidate.text
    }
}

/// Per-file flags folded into the scan-wide counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FileStat {
    pub path: String,
    pub has_english_finding: bool,
    pub has_arabic_finding: bool,
}

impl FileStat {
    pub fn has_translation_issues(&self) -> bool {
        self.has_english_finding || self.has_arabic_finding
    }
}

/// A recoverable problem encountered while reading inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanWarning {
    pub file_path: String,
    pub error: String,
}

/// Stable ordering for previews: path, then line, then offset.
pub fn compare_candidates(a: &Candidate, b: &Candidate) -> std::cmp::Ordering {
    a.file_path
        .cmp(&b.file_path)
        .then_with(|| a.line_number.cmp(&b.line_number))
        .then_with(|| a.byte_offset.cmp(&b.byte_offset))
}
