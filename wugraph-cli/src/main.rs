//! `wugraph` binary: load an edge list, run a command, print the report.
//!
//! Logging is installed before anything else so failures surface as
//! structured events on stderr.

use std::io::{self, BufWriter, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, field};

use wugraph_cli::{
    cli::{Cli, CliError, EdgeListError, render_report, run_cli},
    logging::{self, LoggingError},
};

fn try_main() -> Result<()> {
    let cli = Cli::parse();
    let report = run_cli(cli).context("failed to execute command")?;
    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    render_report(&report, &mut writer).context("failed to render report")?;
    writer.flush().context("failed to flush output")?;
    Ok(())
}

fn main() -> ExitCode {
    if let Err(err) = logging::init_logging() {
        report_logging_init_error(&err);
        return ExitCode::FAILURE;
    }

    if let Err(err) = try_main() {
        let line = err
            .downcast_ref::<CliError>()
            .and_then(|cli_error| match cli_error {
                CliError::EdgeList {
                    source: EdgeListError::Malformed { line, .. },
                    ..
                } => Some(*line),
                _ => None,
            });
        error!(
            error = %format!("{err:#}"),
            line = line.map(field::display),
            "command execution failed"
        );
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

#[expect(
    clippy::print_stderr,
    reason = "Emit one-off diagnostic before tracing is initialized"
)]
fn report_logging_init_error(err: &LoggingError) {
    eprintln!("failed to initialize logging: {err}");
}
