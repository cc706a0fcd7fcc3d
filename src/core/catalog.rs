//! Translation catalog loading.
//!
//! JSON resources are flattened into dotted keys per locale. Source modules
//! (`export const en = { ... }`) are not evaluated; their export blocks are kept
//! as opaque text.

use std::{
    collections::{BTreeMap, BTreeSet},
    fs,
    path::{Path, PathBuf},
    sync::LazyLock,
};

use anyhow::{Context, Result};
use glob::glob;
use regex::Regex;
use serde_json::Value;

use super::types::ScanWarning;
use crate::utils::normalize_path;

static EXPORT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)^\s*export\s+(?:(?:const|let|var)\s+([A-Za-z_$][\w$]*)\s*(?::[^=\n]+)?=|(default))\s*\{",
    )
    .unwrap()
});

/// A named export block harvested from a source module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleExport {
    pub file_path: String,
    pub name: String,
    /// Raw text between the outer braces.
    pub body: String,
}

#[derive(Debug, Clone, Default)]
pub struct TranslationCatalog {
    /// Flattened keys per locale (locale = JSON file stem).
    pub locales: BTreeMap<String, BTreeSet<String>>,
    pub modules: Vec<ModuleExport>,
    pub files_loaded: usize,
}

impl TranslationCatalog {
    pub fn is_empty(&self) -> bool {
        self.locales.is_empty() && self.modules.is_empty()
    }

    /// All JSON keys across locales.
    pub fn keys(&self) -> BTreeSet<&str> {
        self.locales
            .values()
            .flat_map(|keys| keys.iter().map(String::as_str))
            .collect()
    }

    /// True if any locale defines `key`, or an export block has a property named
    /// like its last segment.
    pub fn contains_key(&self, key: &str) -> bool {
        if self.locales.values().any(|keys| keys.contains(key)) {
            return true;
        }
        let leaf = key.rsplit('.').next().unwrap_or(key);
        let needles = [
            format!("{}:", leaf),
            format!("\"{}\":", leaf),
            format!("'{}':", leaf),
        ];
        self.modules
            .iter()
            .any(|module| needles.iter().any(|n| module.body.contains(n.as_str())))
    }

    fn add_json(&mut self, locale: String, keys: BTreeSet<String>) {
        self.locales.entry(locale).or_default().extend(keys);
        self.files_loaded += 1;
    }

    fn add_module(&mut self, exports: Vec<ModuleExport>) {
        self.modules.extend(exports);
        self.files_loaded += 1;
    }
}

#[derive(Debug, Default)]
pub struct LoadCatalogResult {
    pub catalog: TranslationCatalog,
    pub warnings: Vec<ScanWarning>,
}

/// Expand translation globs under `root` and load every matched file.
///
/// Unreadable or malformed files become warnings; loading never fails as a whole.
pub fn load_catalog(root: &Path, globs: &[String]) -> LoadCatalogResult {
    let mut result = LoadCatalogResult::default();

    for path in expand_globs(root, globs, &mut result.warnings) {
        let display = normalize_path(path.strip_prefix(root).unwrap_or(&path));
        let loaded = if is_json(&path) {
            parse_json_file(&path).map(|keys| result.catalog.add_json(locale_of(&path), keys))
        } else {
            parse_module_file(&path, &display).map(|exports| result.catalog.add_module(exports))
        };
        if let Err(e) = loaded {
            result.warnings.push(ScanWarning {
                file_path: display,
                error: format!("{:#}", e),
            });
        }
    }

    result
}

fn expand_globs(root: &Path, globs: &[String], warnings: &mut Vec<ScanWarning>) -> BTreeSet<PathBuf> {
    let mut paths = BTreeSet::new();
    for pattern in globs {
        let full_pattern = root.join(pattern);
        match glob(&full_pattern.to_string_lossy()) {
            Ok(entries) => {
                for entry in entries {
                    match entry {
                        Ok(path) if path.is_file() => {
                            paths.insert(path);
                        }
                        Ok(_) => {}
                        Err(e) => warnings.push(ScanWarning {
                            file_path: normalize_path(e.path()),
                            error: e.error().to_string(),
                        }),
                    }
                }
            }
            Err(e) => warnings.push(ScanWarning {
                file_path: pattern.clone(),
                error: format!("Invalid glob pattern: {}", e),
            }),
        }
    }
    paths
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}

/// Extracts locale from filename, e.g. `en.json` -> `en`.
fn locale_of(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_default()
}

pub fn parse_json_file(path: &Path) -> Result<BTreeSet<String>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read JSON file: {:?}", path))?;
    let json: Value = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse JSON file: {:?}", path))?;

    let mut keys = BTreeSet::new();
    flatten_json(&json, String::new(), &mut keys);
    Ok(keys)
}

fn flatten_json(value: &Value, prefix: String, keys: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                let new_prefix = if prefix.is_empty() {
                    key.clone()
                } else {
                    format!("{}.{}", prefix, key)
                };
                flatten_json(val, new_prefix, keys);
            }
        }
        Value::Array(arr) => {
            if arr.is_empty() || prefix.is_empty() {
                return;
            }
            // String arrays are looked up as a whole; object arrays by index.
            if arr.iter().all(Value::is_string) {
                keys.insert(prefix);
            } else {
                for (index, val) in arr.iter().enumerate() {
                    flatten_json(val, format!("{}.{}", prefix, index), keys);
                }
            }
        }
        Value::String(_) | Value::Number(_) | Value::Bool(_) => {
            if !prefix.is_empty() {
                keys.insert(prefix);
            }
        }
        Value::Null => {}
    }
}

pub fn parse_module_file(path: &Path, display: &str) -> Result<Vec<ModuleExport>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read translation module: {:?}", path))?;
    Ok(harvest_exports(&content, display))
}

/// Find `export const name = {` / `export default {` headers and take the
/// brace-balanced block after each. Braces inside strings are not special-cased.
pub fn harvest_exports(content: &str, file_path: &str) -> Vec<ModuleExport> {
    EXPORT_REGEX
        .captures_iter(content)
        .filter_map(|caps| {
            let name = caps.get(1).or_else(|| caps.get(2))?.as_str().to_string();
            let open = caps.get(0)?.end();
            let body = balanced_block(&content[open..])?;
            Some(ModuleExport {
                file_path: file_path.to_string(),
                name,
                body: body.to_string(),
            })
        })
        .collect()
}

/// Text up to the brace closing an already-opened block.
fn balanced_block(rest: &str) -> Option<&str> {
    let mut depth = 1usize;
    for (i, c) in rest.char_indices() {
        match c {
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&rest[..i]);
                }
            }
            _ => {}
        }
    }
    None
}
