//! CLI-specific error types and exit code mapping

use apismoke_application::{ApplicationError, HttpClientError};
use apismoke_infrastructure::{SettingsError, SuiteLoadError};

/// Errors that stop the binary before or during a run.
///
/// FAIL and ERROR outcomes are not errors; they only change the exit code.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// Settings could not be loaded.
    #[error(transparent)]
    Settings(#[from] SettingsError),

    /// The suite file could not be loaded.
    #[error(transparent)]
    Suite(#[from] SuiteLoadError),

    /// The HTTP client could not be built.
    #[error("cannot create HTTP client: {0}")]
    Client(#[from] HttpClientError),

    /// The run aborted.
    #[error(transparent)]
    Run(#[from] ApplicationError),

    /// Writing to stdout failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Map the error to a process exit code.
    ///
    /// | Code | Meaning                                  |
    /// |------|------------------------------------------|
    /// | 0    | Every case passed                        |
    /// | 1    | At least one FAIL/ERROR, or a run error  |
    /// | 2    | Configuration or suite error             |
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Settings(_) | Self::Suite(_) | Self::Run(ApplicationError::Domain(_)) => 2,
            Self::Client(_) | Self::Run(_) | Self::Io(_) => 1,
        }
    }
}
