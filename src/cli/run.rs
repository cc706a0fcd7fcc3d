//! The scan runner.
//!
//! A run moves through `Idle → LoadingCatalog → Scanning → Reporting → Done`.
//! Each step checks it is called in order.

use std::path::{Path, PathBuf};

use anyhow::{Result, bail};
use colored::Colorize;
use rayon::prelude::*;

use super::args::Arguments;
use crate::config::{CONFIG_FILE_NAME, Config, load_config, load_config_file};
use crate::core::{
    FileScanResult, PathFilter, ReportAggregator, ScanWarning, Scanner, TranslationCatalog,
    discover_files, load_catalog,
};
use crate::report::{ScanReport, write_report};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    LoadingCatalog,
    Scanning,
    Reporting,
    Done,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Idle => write!(f, "idle"),
            Phase::LoadingCatalog => write!(f, "loading catalog"),
            Phase::Scanning => write!(f, "scanning"),
            Phase::Reporting => write!(f, "reporting"),
            Phase::Done => write!(f, "done"),
        }
    }
}

pub struct Runner {
    phase: Phase,
    root: PathBuf,
    config: Config,
    report_path: PathBuf,
    verbose: bool,
    catalog: TranslationCatalog,
    aggregator: ReportAggregator,
    warnings: Vec<ScanWarning>,
}

impl Runner {
    pub fn new(root: &Path, config: Config, report_path: PathBuf, verbose: bool) -> Self {
        Self {
            phase: Phase::Idle,
            root: root.to_path_buf(),
            config,
            report_path,
            verbose,
            catalog: TranslationCatalog::default(),
            aggregator: ReportAggregator::new(),
            warnings: Vec::new(),
        }
    }

    /// Resolve config and report path from CLI arguments.
    ///
    /// Priority: `--config` > config file found from the root > defaults;
    /// `--output` > `reportFile` (relative to the root).
    pub fn from_args(args: &Arguments) -> Result<Self> {
        let config = match &args.config {
            Some(path) => load_config_file(path)?,
            None => {
                let loaded = load_config(&args.root)?;
                if args.verbose {
                    match &loaded.source {
                        Some(path) => {
                            eprintln!("{} using config {}", "note:".bold().cyan(), path.display())
                        }
                        None => eprintln!(
                            "{} no {} found, using default configuration",
                            "note:".bold().cyan(),
                            CONFIG_FILE_NAME
                        ),
                    }
                }
                loaded.config
            }
        };

        let report_path = args
            .output
            .clone()
            .unwrap_or_else(|| args.root.join(&config.report_file));

        Ok(Self::new(&args.root, config, report_path, args.verbose))
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Unreadable or unparsable inputs seen so far.
    pub fn warnings(&self) -> Vec<&ScanWarning> {
        self.warnings
            .iter()
            .chain(self.aggregator.warnings())
            .collect()
    }

    pub fn report_path(&self) -> &Path {
        &self.report_path
    }

    fn transition(&mut self, from: Phase, to: Phase) -> Result<()> {
        if self.phase != from {
            bail!(
                "Cannot start {} while {} (expected {})",
                to,
                self.phase,
                from
            );
        }
        if self.verbose {
            eprintln!("{} {}", "note:".bold().cyan(), to);
        }
        self.phase = to;
        Ok(())
    }

    pub fn load_catalog(&mut self) -> Result<()> {
        self.transition(Phase::Idle, Phase::LoadingCatalog)?;

        let result = load_catalog(&self.root, &self.config.translation_globs);
        self.catalog = result.catalog;
        self.warnings.extend(result.warnings);
        Ok(())
    }

    pub fn scan(&mut self) -> Result<()> {
        self.transition(Phase::LoadingCatalog, Phase::Scanning)?;

        let scanner = Scanner::new(&self.config)?;
        let filter = PathFilter::new(&self.config.exclude_globs).with_root(&self.root);
        let discovered = discover_files(&self.root, &self.config.source_globs, &filter);
        self.warnings.extend(discovered.warnings);

        // Collect keeps discovery order, so the fold below is deterministic.
        let results: Vec<FileScanResult> = discovered
            .files
            .par_iter()
            .map(|file| scanner.scan_file(&file.path, &file.display))
            .collect();

        for result in results {
            self.aggregator.aggregate(result);
        }
        Ok(())
    }

    pub fn build_report(&mut self) -> Result<ScanReport> {
        self.transition(Phase::Scanning, Phase::Reporting)?;
        Ok(self.aggregator.build_report(&self.catalog))
    }

    /// Write the report. Failure here is fatal.
    pub fn persist(&mut self, report: &ScanReport) -> Result<()> {
        self.transition(Phase::Reporting, Phase::Done)?;
        write_report(report, &self.report_path)
    }

    /// Drive every phase and persist the report.
    pub fn run(&mut self) -> Result<ScanReport> {
        self.load_catalog()?;
        self.scan()?;
        let report = self.build_report()?;
        self.persist(&report)?;
        Ok(report)
    }
}
