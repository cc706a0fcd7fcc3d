use anyhow::Result;

use crate::config::default_config_json;

pub mod args;
mod exit_status;
mod report;
mod run;

pub use args::Arguments;
pub use exit_status::ExitStatus;
pub use run::{Phase, Runner};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    if args.print_config {
        println!("{}", default_config_json()?);
        return Ok(ExitStatus::Success);
    }

    let verbose = args.verbose;
    let mut runner = Runner::from_args(&args)?;

    let report = runner.run()?;

    report::print(&report);
    report::print_warnings(&runner.warnings(), verbose);
    report::print_saved(runner.report_path());

    Ok(ExitStatus::from_report(&report))
}
