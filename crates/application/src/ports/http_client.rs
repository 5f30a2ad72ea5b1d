//! HTTP Client port

use std::future::Future;

use apismoke_domain::{RequestSpec, ResponseSpec};
use thiserror::Error;

/// Transport-level failures. Any of these turns a case into an ERROR.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum HttpClientError {
    /// No response within the configured timeout.
    #[error("request timed out after {timeout_ms}ms")]
    Timeout {
        /// Timeout that elapsed.
        timeout_ms: u64,
    },

    /// The server actively refused the connection.
    #[error("connection refused by {host}:{port}")]
    ConnectionRefused {
        /// Target host.
        host: String,
        /// Target port.
        port: u16,
    },

    /// Host name resolution failed.
    #[error("DNS lookup failed for {host}: {message}")]
    DnsError {
        /// Host that could not be resolved.
        host: String,
        /// Resolver message.
        message: String,
    },

    /// The connection failed for another reason.
    #[error("connection failed: {0}")]
    ConnectionFailed(String),

    /// The request URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The request body could not be encoded.
    #[error("invalid body: {0}")]
    InvalidBody(String),

    /// Anything else reported by the client.
    #[error("{0}")]
    Other(String),
}

/// Port for executing HTTP requests.
///
/// This trait abstracts the HTTP client implementation, allowing
/// the runner to be independent of specific HTTP libraries.
pub trait HttpClient: Send + Sync {
    /// Executes an HTTP request and returns the response.
    ///
    /// Any status code is a successful execution; classification happens
    /// in the runner.
    ///
    /// # Errors
    ///
    /// Returns an error if no response was received: network failure,
    /// timeout or an unusable URL.
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> impl Future<Output = Result<ResponseSpec, HttpClientError>> + Send;
}
