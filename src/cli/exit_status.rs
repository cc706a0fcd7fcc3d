use std::process::ExitCode;

use crate::report::ScanReport;

/// Exit status for the CLI, following common conventions for linter tools.
///
/// - `Success` (0): no high-priority findings
/// - `Failure` (1): at least one high-priority finding
/// - `Error` (2): the run failed (invalid config, report could not be written, etc.)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// No high-priority findings.
    Success,
    /// At least one high-priority finding.
    Failure,
    /// Internal error.
    Error,
}

impl ExitStatus {
    pub fn from_report(report: &ScanReport) -> Self {
        if report.has_blocking_issues() {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
