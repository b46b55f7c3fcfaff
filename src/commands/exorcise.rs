//! The one and only command: list, inspect, pick, terminate.

use crate::config::RunConfig;
use crate::core::models::RunOutcome;
use crate::core::pipeline::Pipeline;
use crate::core::traits::{CommandResolver, ListingSource, ProcessKiller, Selector, StatsProbe};
use crate::error::ExoError;
use colored::Colorize;
use std::io::Write;
use std::process::ExitCode;
use tracing::{debug, error, info};

/// Run the whole pipeline against the real OS and terminal.
#[cfg(unix)]
pub async fn run(config: &RunConfig) -> ExitCode {
    use crate::platform::{
        DialoguerSelector, JpsListing, PsutilCommandResolver, PsutilProbe, SignalKiller,
    };

    let listing = JpsListing::from_config(config);
    let probe = PsutilProbe::new();

    let mut stdout = std::io::stdout();
    run_with(
        config,
        &listing,
        &probe,
        &PsutilCommandResolver,
        &DialoguerSelector,
        &SignalKiller,
        &mut stdout,
    )
    .await
}

#[cfg(not(unix))]
pub async fn run(_config: &RunConfig) -> ExitCode {
    eprintln!("{} exo only supports unix-like systems", "error:".red());
    ExitCode::from(1)
}

/// One run with the given collaborators. The probe is released exactly once
/// after the pipeline returns, whether or not it succeeded.
pub async fn run_with<W: Write>(
    config: &RunConfig,
    listing: &dyn ListingSource,
    probe: &dyn StatsProbe,
    resolver: &dyn CommandResolver,
    selector: &dyn Selector,
    killer: &dyn ProcessKiller,
    out: &mut W,
) -> ExitCode {
    let pipeline = Pipeline::new(config, listing, probe, resolver, selector, killer);
    let result = pipeline.run(&mut *out).await;
    probe.clear();

    finish(result, out)
}

/// Map a run result to what the operator sees and the exit status.
///
/// Non-fatal errors are explained on `out`; fatal ones go to stderr.
pub fn finish<W: Write>(result: Result<RunOutcome, ExoError>, out: &mut W) -> ExitCode {
    match result {
        Ok(RunOutcome::NothingToShow { listed }) => {
            info!(listed, "no candidates to offer");
            ExitCode::SUCCESS
        }
        Ok(RunOutcome::Completed(report)) => {
            info!(
                selected = report.selected,
                succeeded = report.succeeded(),
                "done"
            );
            ExitCode::SUCCESS
        }
        Err(err) if !err.is_fatal() => {
            if let Err(write_err) = writeln!(out, "{}", err.user_message()) {
                debug!(error = %write_err, "failed to write notice");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(category = err.category().display_name(), "{err}");
            eprintln!("{} {}", "error:".red().bold(), err.user_message());
            ExitCode::from(err.exit_code())
        }
    }
}
