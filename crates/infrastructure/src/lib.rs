//! apismoke Infrastructure - Adapters and implementations
//!
//! This crate provides concrete implementations of the ports
//! defined in the application layer, plus the suite and settings
//! sources the binary wires together.

pub mod adapters;
pub mod report;
pub mod serialization;
pub mod settings;
pub mod suite;

pub use adapters::ReqwestHttpClient;
pub use report::{ConsoleReporter, JsonReporter, RunReport, write_listing};
pub use serialization::{SerializationError, to_json_stable};
pub use settings::{
    DEFAULT_SETTINGS_FILE, ENV_PREFIX, SettingsError, SettingsOverrides, load_settings,
    load_settings_with_env,
};
pub use suite::{SuiteFormat, SuiteLoadError, load_suite, parse_suite, sharein_suite};
