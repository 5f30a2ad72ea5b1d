//! Suite sources: the built-in catalog and suite files on disk.

mod catalog;
mod loader;

pub use catalog::sharein_suite;
pub use loader::{SuiteFormat, SuiteLoadError, load_suite, parse_suite};
