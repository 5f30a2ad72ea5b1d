//! Machine-readable run report.

use std::io::{self, Write};

use apismoke_application::Reporter;
use apismoke_domain::{Ledger, RunnerSettings, Section, Suite, TestResult};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::serialization::to_json_stable;

/// Everything a pipeline needs from a finished run.
#[derive(Debug, Serialize)]
pub struct RunReport<'a> {
    /// Suite name.
    pub suite: &'a str,
    /// When the first case started.
    pub started_at: DateTime<Utc>,
    /// Target base URL.
    pub base_url: &'a str,
    /// Number of cases attempted.
    pub total: usize,
    /// PASS count.
    pub passed: usize,
    /// FAIL + ERROR count.
    pub failed: usize,
    /// Percentage of passes, absent when nothing ran.
    pub success_rate: Option<f64>,
    /// Outcomes in execution order.
    pub results: &'a [TestResult],
}

/// Writes a single JSON [`RunReport`] once the suite finishes.
pub struct JsonReporter<W: Write> {
    out: W,
    suite: String,
    base_url: String,
    started_at: DateTime<Utc>,
}

impl<W: Write> JsonReporter<W> {
    /// Create a reporter writing to `out`.
    pub fn new(out: W) -> Self {
        Self {
            out,
            suite: String::new(),
            base_url: String::new(),
            started_at: Utc::now(),
        }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl JsonReporter<io::Stdout> {
    /// Create a reporter writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter for JsonReporter<W> {
    fn suite_started(&mut self, suite: &Suite, settings: &RunnerSettings) -> io::Result<()> {
        self.suite.clone_from(&suite.name);
        self.base_url.clone_from(&settings.base_url);
        self.started_at = Utc::now();
        Ok(())
    }

    fn section_started(&mut self, _index: usize, _section: &Section) -> io::Result<()> {
        Ok(())
    }

    fn test_recorded(&mut self, _result: &TestResult) -> io::Result<()> {
        Ok(())
    }

    fn suite_finished(&mut self, ledger: &Ledger) -> io::Result<()> {
        let report = RunReport {
            suite: &self.suite,
            started_at: self.started_at,
            base_url: &self.base_url,
            total: ledger.total(),
            passed: ledger.passed(),
            failed: ledger.failed(),
            success_rate: ledger.success_rate(),
            results: ledger.results(),
        };
        let json = to_json_stable(&report).map_err(io::Error::other)?;
        self.out.write_all(json.as_bytes())?;
        self.out.flush()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use apismoke_domain::{HttpMethod, StatusCode, TestCase};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_report_is_written_once_at_the_end() {
        let suite = Suite::new("ShareIn Mobile App");
        let settings = RunnerSettings::default();
        let case = TestCase::new("Get Users", HttpMethod::Get, "/users");
        let result = TestResult::fail(&case, StatusCode(500), "boom", 2);

        let mut reporter = JsonReporter::new(Vec::new());
        reporter.suite_started(&suite, &settings).unwrap();
        reporter.section_started(1, &Section::new("Users")).unwrap();
        reporter.test_recorded(&result).unwrap();
        assert!(reporter.out.is_empty());

        let mut ledger = Ledger::new();
        ledger.record(result);
        reporter.suite_finished(&ledger).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&reporter.into_inner()).unwrap();
        assert_eq!(value["suite"], "ShareIn Mobile App");
        assert_eq!(value["base_url"], settings.base_url.as_str());
        assert_eq!(value["total"], 1);
        assert_eq!(value["failed"], 1);
        assert_eq!(value["success_rate"], 0.0);
        assert_eq!(value["results"][0]["status"], "FAIL");
        assert_eq!(value["results"][0]["response_code"], 500);
        assert_eq!(value["results"][0]["error"], "boom");
        assert!(value["started_at"].is_string());
    }

    #[test]
    fn test_empty_run_has_null_success_rate() {
        let mut reporter = JsonReporter::new(Vec::new());
        reporter
            .suite_started(&Suite::new("Empty"), &RunnerSettings::default())
            .unwrap();
        reporter.suite_finished(&Ledger::new()).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&reporter.into_inner()).unwrap();
        assert!(value["success_rate"].is_null());
        assert_eq!(value["total"], 0);
    }
}
