//! Console output for a scan.
//!
//! Line-oriented and cargo-flavoured. The JSON report holds everything; the
//! console shows counts and a sorted preview of the worst findings.

use std::io::{self, Write};
use std::path::Path;

use colored::{ColoredString, Colorize};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::types::compare_candidates;
use crate::core::{Candidate, Priority, ScanWarning};
use crate::report::ScanReport;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

const MAX_HIGH_DISPLAY: usize = 10;
const MAX_MEDIUM_DISPLAY: usize = 5;
const MAX_ARABIC_DISPLAY: usize = 5;

/// Display width of a previewed text.
const MAX_TEXT_WIDTH: usize = 60;

pub fn print(report: &ScanReport) {
    print_to(report, &mut io::stdout().lock());
}

pub fn print_to<W: Write>(report: &ScanReport, writer: &mut W) {
    print_summary(report, writer);

    let mut high: Vec<&Candidate> = report
        .high_priority_issues
        .iter()
        .map(|f| &f.candidate)
        .collect();
    high.sort_by(|a, b| compare_candidates(a, b));
    print_preview(Priority::High, &high, MAX_HIGH_DISPLAY, writer);

    let mut medium: Vec<&Candidate> = report
        .medium_priority_issues
        .iter()
        .map(|f| &f.candidate)
        .collect();
    medium.sort_by(|a, b| compare_candidates(a, b));
    print_preview(Priority::Medium, &medium, MAX_MEDIUM_DISPLAY, writer);

    let mut arabic: Vec<&Candidate> = report.arabic_texts.iter().collect();
    arabic.sort_by(|a, b| compare_candidates(a, b));
    print_arabic(&arabic, writer);

    print_recommendations(report, writer);
    print_verdict(report, writer);
}

/// Print unreadable inputs: each one with `-v`, otherwise a count.
pub fn print_warnings(warnings: &[&ScanWarning], verbose: bool) {
    print_warnings_to(warnings, verbose, &mut io::stderr().lock());
}

pub fn print_warnings_to<W: Write>(warnings: &[&ScanWarning], verbose: bool, writer: &mut W) {
    if warnings.is_empty() {
        return;
    }
    if verbose {
        for warning in warnings {
            let _ = writeln!(
                writer,
                "{} {}: {}",
                "warning:".bold().yellow(),
                warning.file_path,
                warning.error
            );
        }
    } else {
        let _ = writeln!(
            writer,
            "{} {} file(s) could not be read or parsed (use {} for details)",
            "warning:".bold().yellow(),
            warnings.len(),
            "-v".cyan()
        );
    }
}

pub fn print_saved(path: &Path) {
    print_saved_to(path, &mut io::stdout().lock());
}

pub fn print_saved_to<W: Write>(path: &Path, writer: &mut W) {
    let _ = writeln!(writer, "Report saved to {}", path.display().to_string().cyan());
}

// ============================================================
// Internal Functions
// ============================================================

fn print_summary<W: Write>(report: &ScanReport, writer: &mut W) {
    let s = &report.summary;
    let _ = writeln!(writer, "{}", "Translation scan".bold());

    let rows: [(&str, usize); 7] = [
        ("Files scanned", s.total_files),
        ("Files with English text", s.files_with_english_text),
        ("Files with Arabic text", s.files_with_arabic_text),
        ("Files needing translation", s.files_with_translation_issues),
        ("English texts", s.total_english_texts),
        ("Arabic texts", s.total_arabic_texts),
        ("Translation keys used", s.translation_keys_used),
    ];
    let label_width = rows
        .iter()
        .map(|(label, _)| UnicodeWidthStr::width(*label))
        .max()
        .unwrap_or(0);
    for (label, value) in rows {
        let _ = writeln!(writer, "  {:<width$}  {}", label, value, width = label_width);
    }

    if s.catalog_files > 0 {
        let _ = writeln!(
            writer,
            "  {} catalog file(s): {} missing, {} unused",
            s.catalog_files, s.missing_translations, s.unused_translations
        );
    }

    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "  {} {}  {} {}  {} {}",
        priority_label(Priority::High),
        s.high_priority_issues,
        priority_label(Priority::Medium),
        s.medium_priority_issues,
        priority_label(Priority::Low),
        s.low_priority_issues
    );
}

fn print_preview<W: Write>(
    priority: Priority,
    candidates: &[&Candidate],
    limit: usize,
    writer: &mut W,
) {
    if candidates.is_empty() {
        return;
    }
    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{} {}",
        priority_label(priority),
        shown_of(candidates.len(), limit)
    );
    for candidate in candidates.iter().take(limit) {
        print_candidate(candidate, writer);
    }
}

fn print_arabic<W: Write>(candidates: &[&Candidate], writer: &mut W) {
    if candidates.is_empty() {
        return;
    }
    let _ = writeln!(writer);
    let _ = writeln!(
        writer,
        "{} {}",
        "ARABIC".bold().magenta(),
        shown_of(candidates.len(), MAX_ARABIC_DISPLAY)
    );
    for candidate in candidates.iter().take(MAX_ARABIC_DISPLAY) {
        print_candidate(candidate, writer);
    }
}

fn print_candidate<W: Write>(candidate: &Candidate, writer: &mut W) {
    let _ = writeln!(
        writer,
        "  {} {}:{}  \"{}\"",
        "-->".blue(),
        candidate.file_path,
        candidate.line_number,
        truncate_text(&candidate.text, MAX_TEXT_WIDTH)
    );
}

fn print_recommendations<W: Write>(report: &ScanReport, writer: &mut W) {
    if report.recommendations.is_empty() {
        return;
    }
    let _ = writeln!(writer);
    let _ = writeln!(writer, "{}", "Recommendations".bold());
    for rec in &report.recommendations {
        let _ = writeln!(writer, "  {} {}", priority_label(rec.priority), rec.message);
        let _ = writeln!(writer, "    {} {}", "=".blue(), rec.action);
    }
}

fn print_verdict<W: Write>(report: &ScanReport, writer: &mut W) {
    let _ = writeln!(writer);
    let high = report.summary.high_priority_issues;
    if report.has_blocking_issues() {
        let _ = writeln!(
            writer,
            "{} {}",
            FAILURE_MARK.red(),
            format!(
                "{} high-priority hard-coded {}",
                high,
                if high == 1 { "text" } else { "texts" }
            )
            .red()
        );
    } else {
        let _ = writeln!(
            writer,
            "{} {}",
            SUCCESS_MARK.green(),
            "No high-priority hard-coded texts".green()
        );
    }
}

fn priority_label(priority: Priority) -> ColoredString {
    match priority {
        Priority::High => "HIGH".bold().red(),
        Priority::Medium => "MEDIUM".bold().yellow(),
        Priority::Low => "LOW".bold().dimmed(),
    }
}

fn shown_of(total: usize, limit: usize) -> String {
    if total > limit {
        format!("(showing {} of {})", limit, total)
    } else {
        format!("({})", total)
    }
}

/// Flatten whitespace onto one line and cut to `max_width` columns.
fn truncate_text(text: &str, max_width: usize) -> String {
    let flat = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if UnicodeWidthStr::width(flat.as_str()) <= max_width {
        return flat;
    }

    let mut out = String::new();
    let mut width = 0;
    for c in flat.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        // Leave a column for the ellipsis.
        if width + w > max_width - 1 {
            break;
        }
        width += w;
        out.push(c);
    }
    out.push('\u{2026}');
    out
}
