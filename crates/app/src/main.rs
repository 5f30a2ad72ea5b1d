//! apismoke - Main Entry Point
//!
//! Loads settings and the suite, runs every case in order, reports, and
//! exits non-zero when anything did not pass.

mod cli;
mod error;

use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use apismoke_application::{Reporter, RunSuite};
use apismoke_domain::Ledger;
use apismoke_infrastructure::{
    ConsoleReporter, JsonReporter, ReqwestHttpClient, load_settings, load_suite, sharein_suite,
    write_listing,
};
use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::{Cli, OutputFormat};
use crate::error::CliError;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref());

    if cli.no_color {
        colored::control::set_override(false);
    }

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::from(e.exit_code())
        }
    }
}

/// Logs go to stderr so stdout carries only the report.
fn init_tracing(level: Option<&str>) {
    let filter = level.map_or_else(
        || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        EnvFilter::new,
    );
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Exit status of a finished run: 0 when every case passed, 1 otherwise.
const fn exit_status(ledger: &Ledger) -> u8 {
    if ledger.all_passed() { 0 } else { 1 }
}

/// Returns the process exit status of a completed run.
async fn run(cli: Cli) -> Result<u8, CliError> {
    let settings = load_settings(cli.config.as_deref(), cli.overrides())?;
    let suite = match &cli.suite {
        Some(path) => load_suite(path).await?,
        None => sharein_suite(),
    };

    if cli.list {
        write_listing(&suite, &mut io::stdout().lock())?;
        return Ok(0);
    }

    let client = Arc::new(ReqwestHttpClient::new()?);
    let runner = RunSuite::new(client, settings);

    let mut reporter: Box<dyn Reporter> = match cli.output {
        OutputFormat::Text => Box::new(ConsoleReporter::stdout()),
        OutputFormat::Json => Box::new(JsonReporter::stdout()),
    };
    let ledger = runner.run(&suite, reporter.as_mut()).await?;

    tracing::debug!(passed = ledger.passed(), failed = ledger.failed(), "exiting");
    Ok(exit_status(&ledger))
}

#[cfg(test)]
mod tests {
    use super::*;
    use apismoke_domain::{HttpMethod, StatusCode, TestCase, TestResult};
    use pretty_assertions::assert_eq;

    fn case(name: &str) -> TestCase {
        TestCase::new(name, HttpMethod::Get, "/x")
    }

    fn ledger_of(results: Vec<TestResult>) -> Ledger {
        let mut ledger = Ledger::new();
        for result in results {
            ledger.record(result);
        }
        ledger
    }

    #[test]
    fn test_exit_status_follows_ledger() {
        let all_pass = ledger_of(vec![
            TestResult::pass(&case("a"), StatusCode(200), 1),
            TestResult::pass(&case("b"), StatusCode(204), 1),
        ]);
        let one_fail = ledger_of(vec![
            TestResult::pass(&case("a"), StatusCode(200), 1),
            TestResult::fail(&case("b"), StatusCode(404), "missing", 1),
        ]);
        let one_error = ledger_of(vec![
            TestResult::error(&case("a"), "request timed out after 5000ms", 1),
            TestResult::pass(&case("b"), StatusCode(200), 1),
        ]);

        assert_eq!(exit_status(&all_pass), 0);
        assert_eq!(exit_status(&one_fail), 1);
        assert_eq!(exit_status(&one_error), 1);
    }

    #[test]
    fn test_empty_run_exits_zero() {
        assert_eq!(exit_status(&Ledger::new()), 0);
    }
}
