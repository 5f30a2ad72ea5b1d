//! apismoke Domain - Core smoke-test types
//!
//! This crate defines the domain model for the apismoke runner.
//! All types here are pure Rust with no I/O dependencies.

pub mod error;
pub mod ledger;
pub mod request;
pub mod response;
pub mod settings;
pub mod testing;

pub use error::{DomainError, DomainResult};
pub use ledger::Ledger;
pub use request::{HttpMethod, RequestSpec};
pub use response::{ResponseSpec, StatusCode};
pub use settings::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, DEFAULT_TOKEN, RunnerSettings};
pub use testing::{Section, Suite, TestCase, TestResult, TestStatus};
