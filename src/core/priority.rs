use serde::Serialize;

use crate::config::PriorityTiers;

/// Remediation priority of a finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Priority::High => write!(f, "high"),
            Priority::Medium => write!(f, "medium"),
            Priority::Low => write!(f, "low"),
        }
    }
}

/// Maps text to a priority by ordered, case-insensitive substring containment.
///
/// Tiers are checked HIGH, MEDIUM, LOW; the first keyword hit wins. Text that matches
/// no keyword is LOW, so every text gets exactly one tier.
#[derive(Debug, Clone)]
pub struct PriorityClassifier {
    tiers: [(Priority, Vec<String>); 3],
}

impl PriorityClassifier {
    pub fn new(tiers: &PriorityTiers) -> Self {
        let lower = |keywords: &[String]| -> Vec<String> {
            keywords
                .iter()
                .map(|k| k.to_lowercase())
                .filter(|k| !k.is_empty())
                .collect()
        };
        Self {
            tiers: [
                (Priority::High, lower(&tiers.high)),
                (Priority::Medium, lower(&tiers.medium)),
                (Priority::Low, lower(&tiers.low)),
            ],
        }
    }

    pub fn classify(&self, text: &str) -> Priority {
        let text = text.to_lowercase();
        self.tiers
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|k| text.contains(k.as_str())))
            .map_or(Priority::Low, |(priority, _)| *priority)
    }
}
