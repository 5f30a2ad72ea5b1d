//! Application error types

use apismoke_domain::DomainError;
use thiserror::Error;

/// Application-level errors.
///
/// Failures of individual requests are outcomes, not errors; they end up in
/// the ledger. `Domain` stops a run before the first request; `Report` is
/// returned after the last case when the report could not be written.
#[derive(Debug, Error)]
pub enum ApplicationError {
    /// A domain validation error occurred.
    #[error("domain error: {0}")]
    Domain(#[from] DomainError),

    /// Writing the report failed.
    #[error("report error: {0}")]
    Report(#[from] std::io::Error),
}

/// Result type alias for application operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
