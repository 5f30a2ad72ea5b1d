//! Stable JSON output for machine-readable reports.
//!
//! Reports use 2-space indentation and a trailing newline so they diff and
//! pipe cleanly.

mod json;

pub use json::*;
