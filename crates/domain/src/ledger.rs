//! Run-wide result accumulator.

use serde::Serialize;

use crate::testing::{TestResult, TestStatus};

/// Aggregate of every outcome recorded during one run.
///
/// `total == passed + failed == results.len()` holds after every
/// [`Ledger::record`]; counters only ever grow.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Ledger {
    total: usize,
    passed: usize,
    failed: usize,
    results: Vec<TestResult>,
}

impl Ledger {
    /// Create an empty ledger.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            total: 0,
            passed: 0,
            failed: 0,
            results: Vec::new(),
        }
    }

    /// Append one outcome and return it.
    pub fn record(&mut self, result: TestResult) -> &TestResult {
        self.total += 1;
        match result.status {
            TestStatus::Pass => self.passed += 1,
            TestStatus::Fail | TestStatus::Error => self.failed += 1,
        }
        self.results.push(result);
        &self.results[self.results.len() - 1]
    }

    /// Number of cases attempted.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Number of PASS outcomes.
    #[must_use]
    pub const fn passed(&self) -> usize {
        self.passed
    }

    /// Number of FAIL and ERROR outcomes.
    #[must_use]
    pub const fn failed(&self) -> usize {
        self.failed
    }

    /// Outcomes in execution order.
    #[must_use]
    pub fn results(&self) -> &[TestResult] {
        &self.results
    }

    /// Non-PASS outcomes in execution order.
    pub fn failures(&self) -> impl Iterator<Item = &TestResult> {
        self.results.iter().filter(|r| !r.passed())
    }

    /// Check if nothing failed.
    #[must_use]
    pub const fn all_passed(&self) -> bool {
        self.failed == 0
    }

    /// `passed / total * 100`, or `None` when nothing ran.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn success_rate(&self) -> Option<f64> {
        (self.total > 0).then(|| self.passed as f64 / self.total as f64 * 100.0)
    }

    /// Success rate with one decimal, e.g. `75.0%`.
    #[must_use]
    pub fn success_rate_label(&self) -> String {
        self.success_rate().map_or_else(
            || "n/a (no tests run)".to_string(),
            |rate| format!("{rate:.1}%"),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::HttpMethod;
    use crate::response::StatusCode;
    use crate::testing::TestCase;
    use pretty_assertions::assert_eq;

    fn case(name: &str) -> TestCase {
        TestCase::new(name, HttpMethod::Get, "/x")
    }

    fn assert_invariant(ledger: &Ledger) {
        assert_eq!(ledger.total(), ledger.passed() + ledger.failed());
        assert_eq!(ledger.total(), ledger.results().len());
    }

    #[test]
    fn test_empty_ledger() {
        let ledger = Ledger::new();
        assert_invariant(&ledger);
        assert_eq!(ledger.success_rate(), None);
        assert_eq!(ledger.success_rate_label(), "n/a (no tests run)");
        assert!(ledger.all_passed());
    }

    #[test]
    fn test_invariant_holds_after_every_record() {
        let mut ledger = Ledger::new();
        let outcomes = [
            TestResult::pass(&case("a"), StatusCode(200), 1),
            TestResult::fail(&case("b"), StatusCode(500), "boom", 1),
            TestResult::error(&case("c"), "connection refused", 1),
            TestResult::pass(&case("d"), StatusCode(204), 1),
        ];
        for outcome in outcomes {
            ledger.record(outcome);
            assert_invariant(&ledger);
        }
        assert_eq!(ledger.passed(), 2);
        assert_eq!(ledger.failed(), 2);
    }

    #[test]
    fn test_failures_keep_execution_order() {
        let mut ledger = Ledger::new();
        ledger.record(TestResult::error(&case("first"), "timeout", 1));
        ledger.record(TestResult::pass(&case("ok"), StatusCode(200), 1));
        ledger.record(TestResult::fail(&case("second"), StatusCode(404), "", 1));

        let names: Vec<_> = ledger.failures().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }

    #[test]
    fn test_success_rate_one_decimal() {
        let mut ledger = Ledger::new();
        for name in ["a", "b", "c"] {
            ledger.record(TestResult::pass(&case(name), StatusCode(200), 1));
        }
        ledger.record(TestResult::fail(&case("d"), StatusCode(404), "nope", 1));
        assert_eq!(ledger.success_rate_label(), "75.0%");

        let mut thirds = Ledger::new();
        thirds.record(TestResult::pass(&case("a"), StatusCode(200), 1));
        thirds.record(TestResult::error(&case("b"), "x", 1));
        thirds.record(TestResult::error(&case("c"), "y", 1));
        assert_eq!(thirds.success_rate_label(), "33.3%");
    }
}
