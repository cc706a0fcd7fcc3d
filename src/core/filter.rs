use std::collections::HashSet;

use super::types::{Candidate, Script};
use crate::utils::{contains_arabic, has_mixed_case};

/// Capitalized identifiers from the ecosystem that pass the mixed-case check
/// but are not user-facing text.
///
/// Only exact matches are rejected; a label that merely contains one of
/// these words is still reported.
pub const RESERVED_WORDS: &[&str] = &[
    "React",
    "Fragment",
    "Component",
    "Props",
    "Promise",
    "Object",
    "Array",
    "String",
    "Number",
    "Boolean",
    "Date",
    "Math",
    "Record",
    "Partial",
    "Readonly",
    "Omit",
    "Pick",
    "Content-Type",
    "GraphQL",
    "Apollo",
    "Redux",
];

/// Discards candidates that are unlikely to be user-facing text.
#[derive(Debug, Clone, Default)]
pub struct FalsePositiveFilter {
    ignore_texts: HashSet<String>,
}

impl FalsePositiveFilter {
    pub fn new(ignore_texts: &[String]) -> Self {
        Self {
            ignore_texts: ignore_texts.iter().map(|t| t.trim().to_string()).collect(),
        }
    }

    pub fn accept(&self, candidate: &Candidate) -> bool {
        let text = candidate.text.trim();
        if text.chars().count() <= 2 || self.ignore_texts.contains(text) {
            return false;
        }
        match candidate.script {
            Script::Latin => has_mixed_case(text) && !RESERVED_WORDS.contains(&text),
            Script::Arabic => {
                contains_arabic(text) && !(text.starts_with("//") || text.starts_with("/*"))
            }
        }
    }
}
