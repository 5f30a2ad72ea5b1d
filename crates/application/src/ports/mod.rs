//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the runner core and the outside
//! world. Each port is a trait implemented by an adapter in the
//! infrastructure layer.

mod http_client;
mod reporter;

pub use http_client::{HttpClient, HttpClientError};
pub use reporter::Reporter;
