//! apismoke Application - Use cases and ports
//!
//! This crate defines the application layer with:
//! - Port traits (HTTP client, report sink)
//! - The suite-running use case
//! - Application-level error handling

pub mod error;
pub mod ports;
pub mod use_cases;

pub use error::{ApplicationError, ApplicationResult};
pub use ports::{HttpClient, HttpClientError, Reporter};
pub use use_cases::RunSuite;
