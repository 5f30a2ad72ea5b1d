//! Colored console report.

use std::io::{self, Write};

use apismoke_application::Reporter;
use apismoke_domain::{Ledger, RunnerSettings, Section, Suite, TestResult, TestStatus};
use colored::Colorize;

/// Fallback shown for a failure that captured no message.
const UNKNOWN_ERROR: &str = "Unknown error";

/// Writes one line per case plus section headers and a final summary.
///
/// Colors follow the global `colored` switch, so callers disable them with
/// `colored::control::set_override(false)`.
pub struct ConsoleReporter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReporter<W> {
    /// Create a reporter writing to `out`.
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    /// Give back the underlying writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl ConsoleReporter<io::Stdout> {
    /// Create a reporter writing to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn suite_started(&mut self, suite: &Suite, settings: &RunnerSettings) -> io::Result<()> {
        let banner = format!("===== API TEST SUITE - {} =====", suite.name);
        writeln!(self.out, "\n{}\n", banner.yellow())?;
        writeln!(
            self.out,
            "Starting tests at: {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
        )?;
        writeln!(self.out, "Target: {}\n", settings.base_url)
    }

    fn section_started(&mut self, index: usize, section: &Section) -> io::Result<()> {
        if index > 1 {
            writeln!(self.out)?;
        }
        let header = format!("{index}. {} API TESTS", section.title.to_uppercase());
        writeln!(self.out, "{}", header.yellow())
    }

    fn test_recorded(&mut self, result: &TestResult) -> io::Result<()> {
        let target = format!("{} ({} {})", result.name, result.method, result.endpoint);
        match (result.status, result.response_code) {
            (TestStatus::Pass, code) => writeln!(
                self.out,
                "{}: {target} - Status: {}",
                " PASS".green(),
                code.map_or_else(|| "-".to_string(), |c| c.to_string())
            ),
            (TestStatus::Fail, code) => writeln!(
                self.out,
                "{}: {target} - Expected: {}, Got: {}",
                " FAIL".red(),
                result.expected_status,
                code.map_or_else(|| "-".to_string(), |c| c.to_string())
            ),
            (TestStatus::Error, _) => writeln!(
                self.out,
                "{}: {target} - {}",
                " ERROR".red(),
                result.error.as_deref().unwrap_or(UNKNOWN_ERROR)
            ),
        }
    }

    fn suite_finished(&mut self, ledger: &Ledger) -> io::Result<()> {
        writeln!(self.out, "\n{}", "===== TEST SUMMARY =====".yellow())?;
        writeln!(self.out, "Total Tests: {}", ledger.total())?;
        writeln!(self.out, "{}", format!("Passed: {}", ledger.passed()).green())?;
        writeln!(self.out, "{}", format!("Failed: {}", ledger.failed()).red())?;
        writeln!(self.out, "Success Rate: {}\n", ledger.success_rate_label())?;

        if ledger.failed() > 0 {
            writeln!(self.out, "{}", "Failed Tests:".red())?;
            for failure in ledger.failures() {
                writeln!(
                    self.out,
                    "  - {}: {}",
                    failure.name,
                    failure.error.as_deref().unwrap_or(UNKNOWN_ERROR)
                )?;
            }
        }
        self.out.flush()
    }
}

/// Print a suite's sections and cases without running them.
///
/// # Errors
///
/// Returns an error if `out` cannot be written.
pub fn write_listing(suite: &Suite, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "{} ({} cases)", suite.name.bold(), suite.len())?;
    for (index, section) in suite.sections.iter().enumerate() {
        writeln!(out, "{}. {}", index + 1, section.title)?;
        for case in &section.cases {
            let auth = if case.requires_auth { "" } else { " [no auth]" };
            writeln!(
                out,
                "   {:<6} {:<30} expect {} - {}{auth}",
                case.method.as_str(),
                case.endpoint,
                case.expected_status,
                case.name
            )?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use apismoke_domain::{HttpMethod, StatusCode, TestCase};

    fn render(f: impl FnOnce(&mut ConsoleReporter<Vec<u8>>) -> io::Result<()>) -> String {
        let mut reporter = ConsoleReporter::new(Vec::new());
        f(&mut reporter).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    fn case(name: &str, endpoint: &str) -> TestCase {
        TestCase::new(name, HttpMethod::Get, endpoint)
    }

    #[test]
    fn test_pass_line() {
        let result = TestResult::pass(&case("Get Post Categories", "/posts/categories"), StatusCode(200), 1);
        let output = render(|r| r.test_recorded(&result));
        assert!(output.contains("PASS"));
        assert!(output.contains("Get Post Categories (GET /posts/categories) - Status: 200"));
    }

    #[test]
    fn test_fail_line_shows_expected_and_actual() {
        let token = TestCase::new("Create Test Token", HttpMethod::Post, "/auth/test-token");
        let result = TestResult::fail(&token, StatusCode(404), "Not Found", 1);
        let output = render(|r| r.test_recorded(&result));
        assert!(output.contains("FAIL"));
        assert!(output.contains("Create Test Token (POST /auth/test-token) - Expected: 200, Got: 404"));
    }

    #[test]
    fn test_error_line_shows_message() {
        let result = TestResult::error(&case("Get Users", "/users"), "request timed out after 5000ms", 5000);
        let output = render(|r| r.test_recorded(&result));
        assert!(output.contains("ERROR"));
        assert!(output.contains("Get Users (GET /users) - request timed out after 5000ms"));
    }

    #[test]
    fn test_section_header() {
        let output = render(|r| r.section_started(4, &Section::new("Chat/Conversations")));
        assert!(output.contains("4. CHAT/CONVERSATIONS API TESTS"));
    }

    #[test]
    fn test_summary_three_pass_one_fail() {
        let mut ledger = Ledger::new();
        for name in ["a", "b", "c"] {
            ledger.record(TestResult::pass(&case(name, "/ok"), StatusCode(200), 1));
        }
        ledger.record(TestResult::fail(&case("Get My Posts", "/posts/me"), StatusCode(401), "Unauthorized", 1));

        let output = render(|r| r.suite_finished(&ledger));
        assert!(output.contains("Total Tests: 4"));
        assert!(output.contains("Passed: 3"));
        assert!(output.contains("Failed: 1"));
        assert!(output.contains("Success Rate: 75.0%"));
        assert!(output.contains("Failed Tests:"));
        assert!(output.contains("  - Get My Posts: Unauthorized"));
        assert_eq!(output.matches("  - ").count(), 1);
    }

    #[test]
    fn test_summary_without_tests_does_not_divide_by_zero() {
        let output = render(|r| r.suite_finished(&Ledger::new()));
        assert!(output.contains("Total Tests: 0"));
        assert!(output.contains("Success Rate: n/a (no tests run)"));
        assert!(!output.contains("Failed Tests:"));
    }

    #[test]
    fn test_summary_falls_back_to_unknown_error() {
        let mut ledger = Ledger::new();
        let mut result = TestResult::error(&case("Silent", "/x"), "", 1);
        result.error = None;
        ledger.record(result);

        let output = render(|r| r.suite_finished(&ledger));
        assert!(output.contains("  - Silent: Unknown error"));
    }

    #[test]
    fn test_listing() {
        let suite = Suite::new("Demo").with_section(
            Section::new("Auth").with_case(
                TestCase::new("Create Test Token", HttpMethod::Post, "/auth/test-token").without_auth(),
            ),
        );
        let mut out = Vec::new();
        write_listing(&suite, &mut out).unwrap();
        let output = String::from_utf8(out).unwrap();
        assert!(output.contains("(1 cases)"));
        assert!(output.contains("1. Auth"));
        assert!(output.contains("Create Test Token [no auth]"));
    }
}
