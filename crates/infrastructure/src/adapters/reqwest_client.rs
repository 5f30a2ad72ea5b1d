//! HTTP Client implementation using reqwest.
//!
//! This adapter implements the `HttpClient` port using the reqwest library.
//! It handles all HTTP communication for the runner.

use std::time::{Duration, Instant};

use apismoke_application::ports::{HttpClient, HttpClientError};
use apismoke_domain::{HttpMethod, RequestSpec, ResponseSpec};
use reqwest::{Client, Method, Url};

/// Redirects followed before a request is reported as failed.
const MAX_REDIRECTS: usize = 10;

/// HTTP client implementation using reqwest.
///
/// Wraps one `reqwest::Client` for the whole run so connections are
/// reused between cases.
pub struct ReqwestHttpClient {
    client: Client,
}

impl ReqwestHttpClient {
    /// Creates a new HTTP client with default settings.
    ///
    /// Default configuration:
    /// - Follow redirects: up to 10
    /// - TLS verification: enabled
    /// - User-Agent: "apismoke/<version>"
    ///
    /// Timeouts are set per request from the `RequestSpec`.
    ///
    /// # Errors
    ///
    /// Returns an error if the client cannot be created.
    pub fn new() -> Result<Self, HttpClientError> {
        let client = Client::builder()
            .user_agent(concat!("apismoke/", env!("CARGO_PKG_VERSION")))
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .build()
            .map_err(|e| HttpClientError::Other(e.to_string()))?;

        Ok(Self { client })
    }

    /// Converts domain `HttpMethod` to reqwest `Method`.
    const fn to_reqwest_method(method: HttpMethod) -> Method {
        match method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Patch => Method::PATCH,
            HttpMethod::Delete => Method::DELETE,
        }
    }

    /// Builds the reqwest request for a domain request.
    fn build(&self, request: &RequestSpec) -> Result<reqwest::RequestBuilder, HttpClientError> {
        let url = Url::parse(&request.url)
            .map_err(|e| HttpClientError::InvalidUrl(format!("{e}: {}", request.url)))?;

        let mut builder = self
            .client
            .request(Self::to_reqwest_method(request.method), url)
            .timeout(Duration::from_millis(request.timeout_ms));

        if let Some(token) = &request.bearer_token {
            builder = builder.bearer_auth(token);
        }

        // `json` also sets `Content-Type: application/json`
        if let Some(body) = request.body.as_ref().filter(|_| request.method.has_body()) {
            builder = builder.json(body);
        }

        Ok(builder)
    }

    /// Maps reqwest errors to `HttpClientError`.
    fn map_error(error: &reqwest::Error, timeout_ms: u64) -> HttpClientError {
        if error.is_timeout() {
            return HttpClientError::Timeout { timeout_ms };
        }

        let host = || {
            error
                .url()
                .and_then(|u| u.host_str().map(ToString::to_string))
                .unwrap_or_else(|| "unknown".to_string())
        };

        if error.is_connect() {
            let message = error_chain(error);
            let lower = message.to_lowercase();
            if lower.contains("dns") || lower.contains("resolve") {
                return HttpClientError::DnsError {
                    host: host(),
                    message,
                };
            }
            if lower.contains("refused") {
                return HttpClientError::ConnectionRefused {
                    host: host(),
                    port: error
                        .url()
                        .and_then(Url::port_or_known_default)
                        .unwrap_or(80),
                };
            }
            return HttpClientError::ConnectionFailed(message);
        }

        if error.is_redirect() {
            return HttpClientError::Other(format!("too many redirects (max {MAX_REDIRECTS})"));
        }

        if error.is_builder() {
            return HttpClientError::InvalidBody(error.to_string());
        }

        HttpClientError::Other(error_chain(error))
    }
}

/// Joins an error and its sources, since reqwest keeps the useful part
/// (e.g. "Connection refused") in the source chain.
fn error_chain(error: &dyn std::error::Error) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

impl HttpClient for ReqwestHttpClient {
    fn execute(
        &self,
        request: &RequestSpec,
    ) -> impl Future<Output = Result<ResponseSpec, HttpClientError>> + Send {
        let built = self.build(request);
        let timeout_ms = request.timeout_ms;

        async move {
            let builder = built?;
            let start = Instant::now();

            let response = builder
                .send()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?;
            let status = response.status().as_u16();

            let body = response
                .text()
                .await
                .map_err(|e| Self::map_error(&e, timeout_ms))?;

            let duration_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX);
            Ok(ResponseSpec::new(status, body, duration_ms))
        }
    }
}
