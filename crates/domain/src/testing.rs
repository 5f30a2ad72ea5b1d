//! Smoke-test cases and their outcomes.
//!
//! A [`Suite`] is plain data: ordered [`Section`]s of [`TestCase`]s. Each
//! executed case produces exactly one [`TestResult`].

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};
use crate::request::HttpMethod;
use crate::response::StatusCode;

const fn default_expected_status() -> u16 {
    200
}

const fn default_requires_auth() -> bool {
    true
}

/// One named HTTP request with its expected outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestCase {
    /// Descriptive label.
    pub name: String,
    /// HTTP method.
    pub method: HttpMethod,
    /// Path appended to the base URL.
    pub endpoint: String,
    /// JSON payload for POST and PATCH.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    /// Status reported as the target when the case fails.
    #[serde(default = "default_expected_status")]
    pub expected_status: u16,
    /// Whether the bearer token is attached.
    #[serde(default = "default_requires_auth")]
    pub requires_auth: bool,
}

impl TestCase {
    /// Create an authenticated case expecting 200 with no body.
    #[must_use]
    pub fn new(name: impl Into<String>, method: HttpMethod, endpoint: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            method,
            endpoint: endpoint.into(),
            body: None,
            expected_status: default_expected_status(),
            requires_auth: default_requires_auth(),
        }
    }

    /// Set the JSON body (builder pattern).
    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Set the expected status (builder pattern).
    #[must_use]
    pub const fn expecting(mut self, status: u16) -> Self {
        self.expected_status = status;
        self
    }

    /// Send this case without an `Authorization` header.
    #[must_use]
    pub const fn without_auth(mut self) -> Self {
        self.requires_auth = false;
        self
    }

    /// Check that the case can be executed.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidTestCase` when the name or endpoint is
    /// blank.
    pub fn validate(&self) -> DomainResult<()> {
        if self.name.trim().is_empty() {
            return Err(DomainError::InvalidTestCase(format!(
                "{} {} has an empty name",
                self.method, self.endpoint
            )));
        }
        if self.endpoint.trim().is_empty() {
            return Err(DomainError::InvalidTestCase(format!(
                "'{}' has an empty endpoint",
                self.name
            )));
        }
        Ok(())
    }

    /// Whether a received status counts as a pass for this case.
    ///
    /// Loose matching: any 2xx passes even when it differs from
    /// `expected_status`, and an exact match passes even outside 2xx.
    #[must_use]
    pub fn accepts(&self, status: StatusCode) -> bool {
        status.as_u16() == self.expected_status || status.is_success()
    }
}

/// A labeled group of cases. Grouping only affects console output.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    /// Header printed before the section's cases.
    pub title: String,
    /// Cases in execution order.
    #[serde(default)]
    pub cases: Vec<TestCase>,
}

impl Section {
    /// Create an empty section.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            cases: Vec::new(),
        }
    }

    /// Add a case (builder pattern).
    #[must_use]
    pub fn with_case(mut self, case: TestCase) -> Self {
        self.cases.push(case);
        self
    }
}

/// An ordered script of sections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Suite {
    /// Suite name shown in the report banner.
    pub name: String,
    /// Sections in execution order.
    #[serde(default)]
    pub sections: Vec<Section>,
}

impl Suite {
    /// Create an empty suite.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            sections: Vec::new(),
        }
    }

    /// Add a section (builder pattern).
    #[must_use]
    pub fn with_section(mut self, section: Section) -> Self {
        self.sections.push(section);
        self
    }

    /// Iterate over every case in execution order.
    pub fn cases(&self) -> impl Iterator<Item = &TestCase> {
        self.sections.iter().flat_map(|s| s.cases.iter())
    }

    /// Total number of cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.sections.iter().map(|s| s.cases.len()).sum()
    }

    /// Check if the suite has no cases.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Validate every case.
    ///
    /// # Errors
    ///
    /// Returns the first invalid case's error.
    pub fn validate(&self) -> DomainResult<()> {
        self.cases().try_for_each(TestCase::validate)
    }
}

/// Outcome class of one executed case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TestStatus {
    /// Response accepted by the pass policy.
    Pass,
    /// Response received but rejected by the pass policy.
    Fail,
    /// No response: timeout, connection or URL failure.
    Error,
}

impl TestStatus {
    /// Label used in reports.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for TestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome record for one executed case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestResult {
    /// Case name.
    pub name: String,
    /// Method used.
    pub method: HttpMethod,
    /// Endpoint requested.
    pub endpoint: String,
    /// Outcome class.
    pub status: TestStatus,
    /// Status declared by the case.
    pub expected_status: u16,
    /// Received status, present whenever a response arrived.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub response_code: Option<u16>,
    /// Response body on FAIL, error description on ERROR.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Wall time spent on the request.
    pub duration_ms: u64,
}

impl TestResult {
    fn base(case: &TestCase, status: TestStatus, duration_ms: u64) -> Self {
        Self {
            name: case.name.clone(),
            method: case.method,
            endpoint: case.endpoint.clone(),
            status,
            expected_status: case.expected_status,
            response_code: None,
            error: None,
            duration_ms,
        }
    }

    /// Create a passed result.
    #[must_use]
    pub fn pass(case: &TestCase, code: StatusCode, duration_ms: u64) -> Self {
        Self {
            response_code: Some(code.as_u16()),
            ..Self::base(case, TestStatus::Pass, duration_ms)
        }
    }

    /// Create a failed result carrying the response body.
    #[must_use]
    pub fn fail(
        case: &TestCase,
        code: StatusCode,
        body: impl Into<String>,
        duration_ms: u64,
    ) -> Self {
        Self {
            response_code: Some(code.as_u16()),
            error: Some(body.into()),
            ..Self::base(case, TestStatus::Fail, duration_ms)
        }
    }

    /// Create an errored result carrying the transport error description.
    #[must_use]
    pub fn error(case: &TestCase, message: impl Into<String>, duration_ms: u64) -> Self {
        Self {
            error: Some(message.into()),
            ..Self::base(case, TestStatus::Error, duration_ms)
        }
    }

    /// Check if this result passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.status == TestStatus::Pass
    }
}
