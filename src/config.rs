use std::{
    fs,
    path::{Component, Path, PathBuf},
};

use anyhow::{Context, Ok, Result};
use glob::Pattern;
use regex::Regex;
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".i18nguardrc.json";

pub const DEFAULT_REPORT_FILE: &str = "translation-check-report.json";

/// A named regular expression used by the extractors.
///
/// The first non-empty capture group of a match is taken as the extracted text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PatternConfig {
    pub name: String,
    pub regex: String,
}

impl PatternConfig {
    fn new(name: &str, regex: &str) -> Self {
        Self {
            name: name.to_string(),
            regex: regex.to_string(),
        }
    }
}

/// Keyword tiers used to rank findings. Checked in order: high, medium, low.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PriorityTiers {
    pub high: Vec<String>,
    pub medium: Vec<String>,
    pub low: Vec<String>,
}

impl Default for PriorityTiers {
    fn default() -> Self {
        Self {
            high: [
                "add to cart",
                "checkout",
                "buy now",
                "place order",
                "payment",
                "price",
                "sign in",
                "sign up",
                "log in",
                "login",
                "register",
                "password",
                "submit",
                "error",
                "failed",
                "welcome",
            ]
            .map(String::from)
            .to_vec(),
            medium: [
                "save",
                "cancel",
                "delete",
                "edit",
                "search",
                "loading",
                "success",
                "confirm",
                "settings",
                "profile",
                "update",
                "remove",
                "continue",
                "back",
                "next",
            ]
            .map(String::from)
            .to_vec(),
            low: [
                "home",
                "about",
                "contact",
                "help",
                "privacy",
                "terms",
                "description",
                "title",
                "footer",
                "copyright",
            ]
            .map(String::from)
            .to_vec(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    #[serde(default = "default_source_globs")]
    pub source_globs: Vec<String>,
    #[serde(default = "default_translation_globs")]
    pub translation_globs: Vec<String>,
    #[serde(default = "default_exclude_globs")]
    pub exclude_globs: Vec<String>,
    #[serde(default = "default_latin_patterns")]
    pub latin_patterns: Vec<PatternConfig>,
    #[serde(default = "default_arabic_patterns")]
    pub arabic_patterns: Vec<PatternConfig>,
    #[serde(default = "default_key_patterns")]
    pub key_patterns: Vec<PatternConfig>,
    #[serde(default)]
    pub priority_tiers: PriorityTiers,
    #[serde(default)]
    pub ignore_texts: Vec<String>,
    #[serde(default = "default_report_file")]
    pub report_file: String,
}

fn default_source_globs() -> Vec<String> {
    let roots = ["src", "app", "components", "pages"];
    let extensions = ["ts", "tsx", "js", "jsx"];

    roots
        .iter()
        .flat_map(|root| {
            extensions
                .iter()
                .map(move |ext| format!("{}/**/*.{}", root, ext))
        })
        .collect()
}

fn default_translation_globs() -> Vec<String> {
    [
        "src/locales/**/*.json",
        "src/i18n/**/*.json",
        "src/translations/**/*.json",
        "locales/**/*.json",
        "messages/**/*.json",
        "public/locales/**/*.json",
        "src/locales/**/*.ts",
        "src/i18n/**/*.ts",
        "src/translations/**/*.ts",
    ]
    .map(String::from)
    .to_vec()
}

fn default_exclude_globs() -> Vec<String> {
    [
        "**/node_modules/**",
        "**/.next/**",
        "**/dist/**",
        "**/build/**",
        "**/coverage/**",
        "**/__tests__/**",
        "**/*.test.*",
        "**/*.spec.*",
        "**/*.stories.*",
        "**/*.d.ts",
        "**/locales/**",
        "**/i18n/**",
        "**/translations/**",
    ]
    .map(String::from)
    .to_vec()
}

/// Matches a capitalized Latin word.
const CAPITALIZED: &str = "[A-Z][a-z]+";

/// Matches a character from the Arabic Unicode block.
const ARABIC: &str = r"[\x{0600}-\x{06FF}]";

/// Builds the five text shapes for a script, given the regex a candidate must contain.
fn text_shapes(required: &str) -> Vec<PatternConfig> {
    let double = format!(r#""([^"\n]*{required}[^"\n]*)""#);
    let single = format!(r#"'([^'\n]*{required}[^'\n]*)'"#);

    vec![
        PatternConfig::new(
            "markup-text",
            &format!(r">\s*([^<>{{}}\n]*{required}[^<>{{}}\n]*?)\s*<"),
        ),
        PatternConfig::new("quoted-string", &format!("{double}|{single}")),
        PatternConfig::new(
            "template-literal",
            &format!(r"`([^`]*{required}[^`]*)`"),
        ),
        PatternConfig::new(
            "key-value",
            &format!(r"\b[A-Za-z_$][\w$]*\s*:\s*(?:{double}|{single})"),
        ),
        PatternConfig::new("list-item", &format!(r"(?:{double}|{single})\s*,")),
    ]
}

fn default_latin_patterns() -> Vec<PatternConfig> {
    text_shapes(CAPITALIZED)
}

fn default_arabic_patterns() -> Vec<PatternConfig> {
    // Arabic has no list-item shape, but also looks inside comments.
    let mut patterns: Vec<_> = text_shapes(ARABIC).into_iter().take(4).collect();
    patterns.push(PatternConfig::new(
        "line-comment",
        &format!(r"//([^\n]*{ARABIC}[^\n]*)"),
    ));
    patterns.push(PatternConfig::new(
        "block-comment",
        &format!(r"/\*((?:[^*]|\*+[^*/])*?{ARABIC}(?:[^*]|\*+[^*/])*)\*+/"),
    ));
    patterns
}

fn default_key_patterns() -> Vec<PatternConfig> {
    let literal = r#"\(\s*(?:"([^"\n]+)"|'([^'\n]+)'|`([^`$\n]+)`)"#;
    vec![
        PatternConfig::new("t-call", &format!(r"(?:^|[^\w.$])t{literal}")),
        PatternConfig::new("i18n-accessor", &format!(r"\bi18n\.t{literal}")),
        PatternConfig::new("server-accessor", &format!(r"\bgetTranslations?{literal}")),
    ]
}

fn default_report_file() -> String {
    DEFAULT_REPORT_FILE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            source_globs: default_source_globs(),
            translation_globs: default_translation_globs(),
            exclude_globs: default_exclude_globs(),
            latin_patterns: default_latin_patterns(),
            arabic_patterns: default_arabic_patterns(),
            key_patterns: default_key_patterns(),
            priority_tiers: PriorityTiers::default(),
            ignore_texts: Vec::new(),
            report_file: default_report_file(),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error naming the field if any glob or regex fails to compile.
    pub fn validate(&self) -> Result<()> {
        let glob_fields = [
            ("sourceGlobs", &self.source_globs),
            ("translationGlobs", &self.translation_globs),
            ("excludeGlobs", &self.exclude_globs),
        ];
        for (field, globs) in glob_fields {
            for pattern in globs {
                Pattern::new(pattern).with_context(|| {
                    format!("Invalid glob pattern in '{}': \"{}\"", field, pattern)
                })?;
            }
        }

        let pattern_fields = [
            ("latinPatterns", &self.latin_patterns),
            ("arabicPatterns", &self.arabic_patterns),
            ("keyPatterns", &self.key_patterns),
        ];
        for (field, patterns) in pattern_fields {
            for pattern in patterns {
                Regex::new(&pattern.regex).with_context(|| {
                    format!(
                        "Invalid regex '{}' in '{}': \"{}\"",
                        pattern.name, field, pattern.regex
                    )
                })?;
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Make `dir` absolute and drop `.`/`..` components without touching the filesystem.
fn absolute_dir(dir: &Path) -> Result<PathBuf> {
    let absolute = std::path::absolute(dir)
        .with_context(|| format!("Failed to resolve directory: {:?}", dir))?;

    let mut normalized = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    Ok(normalized)
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Where the config came from, `None` when using the embedded defaults.
    pub source: Option<PathBuf>,
}

/// Load and validate a specific config file.
pub fn load_config_file(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {:?}", path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", path))?;
    config.validate()?;
    Ok(config)
}

/// Find and load the config for `start_dir`, falling back to the defaults.
///
/// A relative `start_dir` is resolved against the working directory first, so
/// the search can walk past it.
pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    let start_dir = absolute_dir(start_dir)?;
    match find_config_file(&start_dir) {
        Some(path) => Ok(ConfigLoadResult {
            config: load_config_file(&path)?,
            source: Some(path),
        }),
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            source: None,
        }),
    }
}
