//! Response specification type
//!
//! Contains the parts of an HTTP response the runner classifies and
//! reports: the status code and the body text.

use serde::{Deserialize, Serialize};

/// HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCode(pub u16);

impl StatusCode {
    /// Returns the numeric status code.
    #[must_use]
    pub const fn as_u16(&self) -> u16 {
        self.0
    }

    /// Returns true if this is a 2xx success status.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl From<u16> for StatusCode {
    fn from(code: u16) -> Self {
        Self(code)
    }
}

/// HTTP response specification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseSpec {
    /// HTTP status code.
    pub status: StatusCode,
    /// Response body decoded as text.
    pub body: String,
    /// Time from send to fully read body, in milliseconds.
    pub duration_ms: u64,
}

impl ResponseSpec {
    /// Creates a new response.
    #[must_use]
    pub fn new(status: u16, body: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            status: StatusCode(status),
            body: body.into(),
            duration_ms,
        }
    }
}
