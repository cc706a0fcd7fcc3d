//! Common utility functions shared across the codebase.

use std::path::Path;

/// Number of characters kept on each side of a match for `surroundingContext`.
pub const CONTEXT_RADIUS: usize = 50;

/// Checks if the text contains at least one character from the Arabic block (U+0600..=U+06FF).
///
/// # Examples
///
/// ```
/// use i18n_guard::utils::contains_arabic;
///
/// assert!(contains_arabic("مرحبا"));
/// assert!(contains_arabic("Price: ٣٠"));
/// assert!(!contains_arabic("Hello"));
/// assert!(!contains_arabic(""));
/// ```
pub fn contains_arabic(text: &str) -> bool {
    text.chars().any(|c| ('\u{0600}'..='\u{06FF}').contains(&c))
}

/// Checks if the text has both an upper-case and a lower-case letter.
///
/// ```
/// use i18n_guard::utils::has_mixed_case;
///
/// assert!(has_mixed_case("Save"));
/// assert!(!has_mixed_case("SAVE"));
/// assert!(!has_mixed_case("save"));
/// ```
pub fn has_mixed_case(text: &str) -> bool {
    text.chars().any(char::is_uppercase) && text.chars().any(char::is_lowercase)
}

/// Build an index of line start byte offsets for O(log n) line lookups.
///
/// Line 1 starts at offset 0, line 2 starts after the first '\n', etc.
pub fn build_line_index(content: &str) -> Vec<usize> {
    let mut offsets = vec![0];
    for (i, c) in content.char_indices() {
        if c == '\n' {
            offsets.push(i + 1);
        }
    }
    offsets
}

/// Find the 1-based line number for a byte offset using binary search.
pub fn offset_to_line(line_index: &[usize], offset: usize) -> usize {
    match line_index.binary_search(&offset) {
        Ok(line) => line + 1,
        Err(line) => line,
    }
}

/// Slice up to `radius` characters before `start` and after `end`.
///
/// `start` and `end` must lie on char boundaries.
pub fn surrounding_context(content: &str, start: usize, end: usize, radius: usize) -> &str {
    let from = content[..start]
        .char_indices()
        .rev()
        .take(radius)
        .last()
        .map_or(start, |(i, _)| i);
    let to = content[end..]
        .char_indices()
        .nth(radius)
        .map_or(content.len(), |(i, _)| end + i);
    &content[from..to]
}

/// Render a path with forward slashes and without a leading `./`.
pub fn normalize_path(path: &Path) -> String {
    let rendered = path.to_string_lossy().replace('\\', "/");
    let mut rest = rendered.as_str();
    while let Some(stripped) = rest.strip_prefix("./") {
        rest = stripped;
    }
    rest.to_string()
}
