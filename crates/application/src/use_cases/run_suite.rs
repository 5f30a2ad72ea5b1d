//! Run Suite Use Case
//!
//! Executes every case of a suite one at a time, classifies each outcome
//! and threads the results through a single [`Ledger`].

use std::sync::Arc;
use std::time::Instant;

use apismoke_domain::{
    Ledger, RequestSpec, ResponseSpec, RunnerSettings, Suite, TestCase, TestResult,
};
use tracing::{debug, info, warn};

use crate::{ApplicationError, ApplicationResult};
use crate::ports::{HttpClient, HttpClientError, Reporter};

/// Use case for running a smoke-test suite.
///
/// # Example
///
/// ```ignore
/// let runner = RunSuite::new(Arc::new(ReqwestHttpClient::new()?), settings);
/// let ledger = runner.run(&suite, &mut reporter).await?;
/// ```
pub struct RunSuite<C: HttpClient> {
    client: Arc<C>,
    settings: RunnerSettings,
}

impl<C: HttpClient> RunSuite<C> {
    /// Creates a new `RunSuite` use case.
    pub const fn new(client: Arc<C>, settings: RunnerSettings) -> Self {
        Self { client, settings }
    }

    /// Runs the whole suite in order and returns the filled ledger.
    ///
    /// A failing or erroring case never stops the run, and neither does a
    /// report write failure: every case is still sent and recorded.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings or a case are invalid (checked
    /// before any request is sent), or, once every case has run, the first
    /// reporter write failure.
    pub async fn run<R: Reporter + ?Sized>(
        &self,
        suite: &Suite,
        reporter: &mut R,
    ) -> ApplicationResult<Ledger> {
        self.settings.validate()?;
        suite.validate()?;

        info!(
            suite = %suite.name,
            cases = suite.len(),
            base_url = %self.settings.base_url,
            "starting smoke run"
        );

        let mut ledger = Ledger::new();
        let mut report_error = None;
        defer_report_error(&mut report_error, reporter.suite_started(suite, &self.settings));

        for (index, section) in suite.sections.iter().enumerate() {
            defer_report_error(&mut report_error, reporter.section_started(index + 1, section));
            for case in &section.cases {
                let reported = self.run_test(case, &mut ledger, reporter).await;
                defer_report_error(&mut report_error, reported);
            }
        }

        defer_report_error(&mut report_error, reporter.suite_finished(&ledger));
        info!(
            total = ledger.total(),
            passed = ledger.passed(),
            failed = ledger.failed(),
            "smoke run finished"
        );

        match report_error {
            Some(error) => Err(error),
            None => Ok(ledger),
        }
    }

    /// Sends one case, records its outcome and reports it.
    ///
    /// # Errors
    ///
    /// Only reporter I/O fails here; request failures are recorded as
    /// ERROR outcomes.
    pub async fn run_test<R: Reporter + ?Sized>(
        &self,
        case: &TestCase,
        ledger: &mut Ledger,
        reporter: &mut R,
    ) -> ApplicationResult<()> {
        let request = RequestSpec::for_case(case, &self.settings);
        debug!(
            name = %case.name,
            method = %request.method,
            url = %request.url,
            auth = request.bearer_token.is_some(),
            "sending request"
        );

        let start = Instant::now();
        let outcome = self.client.execute(&request).await;
        let elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);

        let result = ledger.record(Self::classify(case, outcome, elapsed_ms));
        if !result.passed() {
            warn!(
                name = %result.name,
                status = %result.status,
                code = ?result.response_code,
                "case did not pass"
            );
        }
        reporter.test_recorded(result)?;
        Ok(())
    }

    /// Maps a request outcome to a result.
    ///
    /// No response is ERROR; otherwise the case's loose pass policy decides
    /// between PASS and FAIL.
    #[must_use]
    pub fn classify(
        case: &TestCase,
        outcome: Result<ResponseSpec, HttpClientError>,
        elapsed_ms: u64,
    ) -> TestResult {
        match outcome {
            Ok(response) if case.accepts(response.status) => {
                TestResult::pass(case, response.status, response.duration_ms)
            }
            Ok(response) => {
                TestResult::fail(case, response.status, response.body, response.duration_ms)
            }
            Err(error) => TestResult::error(case, error.to_string(), elapsed_ms),
        }
    }
}

/// Keeps the first report failure and lets the run go on.
fn defer_report_error<E: Into<ApplicationError>>(
    slot: &mut Option<ApplicationError>,
    result: Result<(), E>,
) {
    if let Err(error) = result {
        let error = error.into();
        warn!(%error, "report write failed, continuing run");
        slot.get_or_insert(error);
    }
}
