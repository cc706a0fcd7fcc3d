//! Pattern-based text extraction.
//!
//! Every pattern scans the whole content on its own, so one span of text can be
//! reported by several patterns. Duplicates are kept on purpose.

use anyhow::{Context, Result};
use regex::{CaptureMatches, Captures, Regex};

use super::types::{Candidate, Script};
use crate::config::PatternConfig;
use crate::utils::{CONTEXT_RADIUS, build_line_index, offset_to_line, surrounding_context};

/// A compiled extraction pattern.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub name: String,
    pub regex: Regex,
    pub script: Script,
}

/// Compile pattern configs for one script, keeping their order.
pub fn compile_patterns(configs: &[PatternConfig], script: Script) -> Result<Vec<CompiledPattern>> {
    configs
        .iter()
        .map(|config| {
            let regex = Regex::new(&config.regex)
                .with_context(|| format!("Invalid regex for pattern '{}'", config.name))?;
            Ok(CompiledPattern {
                name: config.name.clone(),
                regex,
                script,
            })
        })
        .collect()
}

/// Returns the first non-empty capture group, trimmed, with its byte range.
///
/// Used by both the text and key extractors.
pub fn first_capture<'h>(caps: &Captures<'h>) -> Option<(&'h str, usize, usize)> {
    caps.iter().skip(1).flatten().find_map(|m| {
        let raw = m.as_str();
        let text = raw.trim();
        if text.is_empty() {
            return None;
        }
        let start = m.start() + (raw.len() - raw.trim_start().len());
        Some((text, start, start + text.len()))
    })
}

/// Lazily yields candidates for `content`, pattern by pattern.
///
/// Each call starts a fresh scan; no state is shared between calls.
pub fn extract<'a>(
    content: &'a str,
    file_path: &'a str,
    patterns: &'a [CompiledPattern],
) -> Candidates<'a> {
    Candidates {
        content,
        file_path,
        patterns: patterns.iter(),
        current: None,
        line_index: build_line_index(content),
    }
}

pub struct Candidates<'a> {
    content: &'a str,
    file_path: &'a str,
    patterns: std::slice::Iter<'a, CompiledPattern>,
    current: Option<(&'a CompiledPattern, CaptureMatches<'a, 'a>)>,
    line_index: Vec<usize>,
}

impl Iterator for Candidates<'_> {
    type Item = Candidate;

    fn next(&mut self) -> Option<Candidate> {
        loop {
            if let Some((pattern, matches)) = &mut self.current {
                for caps in matches.by_ref() {
                    let Some((text, start, end)) = first_capture(&caps) else {
                        continue;
                    };
                    return Some(Candidate {
                        text: text.to_string(),
                        file_path: self.file_path.to_string(),
                        line_number: offset_to_line(&self.line_index, start),
                        byte_offset: start,
                        surrounding_context: surrounding_context(
                            self.content,
                            start,
                            end,
                            CONTEXT_RADIUS,
                        )
                        .to_string(),
                        pattern: pattern.name.clone(),
                        script: pattern.script,
                    });
                }
            }

            let pattern = self.patterns.next()?;
            self.current = Some((pattern, pattern.regex.captures_iter(self.content)));
        }
    }
}
