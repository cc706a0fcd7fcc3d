use std::path::{Path, PathBuf};

use colored::Colorize;
use glob::{MatchOptions, Pattern};

use crate::utils::normalize_path;

/// `*` stays within one path segment; `**` crosses segments.
pub const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Decides whether a path is excluded from the scan.
#[derive(Debug, Clone, Default)]
pub struct PathFilter {
    root: Option<PathBuf>,
    patterns: Vec<Pattern>,
    /// Prefixes of `<prefix>/**` globs. Any directory matching one is skipped entirely.
    dir_patterns: Vec<Pattern>,
}

impl PathFilter {
    /// Compile exclusion globs. Invalid globs are skipped with a warning.
    pub fn new(excludes: &[String]) -> Self {
        let mut patterns = Vec::new();
        let mut dir_patterns = Vec::new();

        for glob in excludes {
            match Pattern::new(glob) {
                Ok(pattern) => patterns.push(pattern),
                Err(e) => {
                    eprintln!(
                        "{} Invalid exclude pattern '{}': {}",
                        "warning:".bold().yellow(),
                        glob,
                        e
                    );
                    continue;
                }
            }
            if let Some(prefix) = glob.strip_suffix("/**")
                && let Ok(pattern) = Pattern::new(prefix)
            {
                dir_patterns.push(pattern);
            }
        }

        Self {
            root: None,
            patterns,
            dir_patterns,
        }
    }

    /// Match paths under `root` relative to it.
    pub fn with_root(mut self, root: &Path) -> Self {
        self.root = Some(root.to_path_buf());
        self
    }

    pub fn is_excluded(&self, path: &Path) -> bool {
        let relative = self.relative(path);
        self.patterns
            .iter()
            .any(|p| p.matches_with(&relative, MATCH_OPTIONS))
    }

    /// True if everything below `dir` is excluded, so the walk can skip it.
    pub fn is_excluded_dir(&self, dir: &Path) -> bool {
        let relative = self.relative(dir);
        !relative.is_empty()
            && self
                .dir_patterns
                .iter()
                .any(|p| p.matches_with(&relative, MATCH_OPTIONS))
    }

    fn relative(&self, path: &Path) -> String {
        let path = self
            .root
            .as_deref()
            .and_then(|root| path.strip_prefix(root).ok())
            .unwrap_or(path);
        normalize_path(path)
    }
}
