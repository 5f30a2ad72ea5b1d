//! Request specification type

use serde::{Deserialize, Serialize};

use super::HttpMethod;
use crate::settings::RunnerSettings;
use crate::testing::TestCase;

/// Complete specification for one outbound HTTP request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestSpec {
    /// HTTP method
    pub method: HttpMethod,
    /// Absolute target URL
    pub url: String,
    /// Bearer token sent in the `Authorization` header, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bearer_token: Option<String>,
    /// JSON body, only ever present for methods that carry one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
    /// Request timeout in milliseconds
    pub timeout_ms: u64,
}

impl RequestSpec {
    /// Creates a body-less request with the given method and URL.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>, timeout_ms: u64) -> Self {
        Self {
            method,
            url: url.into(),
            bearer_token: None,
            body: None,
            timeout_ms,
        }
    }

    /// Builds the request a test case issues under the given settings.
    ///
    /// The body is dropped for GET and DELETE, and the token is only
    /// attached when the case requires authentication.
    #[must_use]
    pub fn for_case(case: &TestCase, settings: &RunnerSettings) -> Self {
        let body = if case.method.has_body() {
            case.body.clone()
        } else {
            None
        };
        let bearer_token = case.requires_auth.then(|| settings.token.clone());

        Self {
            method: case.method,
            url: settings.endpoint_url(&case.endpoint),
            bearer_token,
            body,
            timeout_ms: settings.timeout_ms,
        }
    }
}
