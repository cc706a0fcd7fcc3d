use std::collections::BTreeSet;

use anyhow::{Context, Result};
use regex::Regex;

use super::extractor::first_capture;
use crate::config::PatternConfig;

/// Collects the literal keys passed to translation calls such as `t("nav.home")`.
#[derive(Debug, Clone)]
pub struct KeyExtractor {
    patterns: Vec<Regex>,
}

impl KeyExtractor {
    pub fn new(configs: &[PatternConfig]) -> Result<Self> {
        let patterns = configs
            .iter()
            .map(|config| {
                Regex::new(&config.regex)
                    .with_context(|| format!("Invalid regex for key pattern '{}'", config.name))
            })
            .collect::<Result<_>>()?;
        Ok(Self { patterns })
    }

    pub fn extract_keys(&self, content: &str) -> BTreeSet<String> {
        self.patterns
            .iter()
            .flat_map(|pattern| pattern.captures_iter(content))
            .filter_map(|caps| first_capture(&caps).map(|(key, _, _)| key.to_string()))
            .collect()
    }
}
