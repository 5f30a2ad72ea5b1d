//! Report sink port

use std::io;

use apismoke_domain::{Ledger, RunnerSettings, Section, Suite, TestResult};

/// Receives run progress as it happens.
///
/// `test_recorded` is called once per case, right after the case's result is
/// appended to the ledger.
pub trait Reporter {
    /// Called once before the first section.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be written.
    fn suite_started(&mut self, suite: &Suite, settings: &RunnerSettings) -> io::Result<()>;

    /// Called before a section's cases run. `index` is 1-based.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be written.
    fn section_started(&mut self, index: usize, section: &Section) -> io::Result<()>;

    /// Called after each case.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be written.
    fn test_recorded(&mut self, result: &TestResult) -> io::Result<()>;

    /// Called once after the last case.
    ///
    /// # Errors
    ///
    /// Returns an error if the report cannot be written.
    fn suite_finished(&mut self, ledger: &Ledger) -> io::Result<()>;
}
