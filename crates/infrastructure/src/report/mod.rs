//! Reporter adapters.
//!
//! [`ConsoleReporter`] streams the human-readable report as cases run;
//! [`JsonReporter`] stays silent and writes one JSON document at the end.

mod console;
mod json;

pub use console::{ConsoleReporter, write_listing};
pub use json::{JsonReporter, RunReport};
