//! Suite files in YAML or JSON.
//!
//! ```yaml
//! name: Staging
//! sections:
//!   - title: Posts
//!     cases:
//!       - name: Get All Posts
//!         method: GET
//!         endpoint: /posts
//!       - name: Create Token
//!         method: POST
//!         endpoint: /auth/test-token
//!         body: { uid: test-user-001 }
//!         requires_auth: false
//! ```

use std::path::{Path, PathBuf};

use apismoke_domain::{DomainError, Suite};
use thiserror::Error;
use tracing::debug;

/// Error type for suite loading.
#[derive(Debug, Error)]
pub enum SuiteLoadError {
    /// The file could not be read.
    #[error("cannot read suite file {path}: {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        source: std::io::Error,
    },

    /// The extension maps to no known format.
    #[error("unsupported suite file extension: {0} (expected .yaml, .yml or .json)")]
    UnsupportedFormat(PathBuf),

    /// The content is not a valid suite.
    #[error("invalid suite file: {0}")]
    Parse(String),

    /// A case failed validation.
    #[error(transparent)]
    Domain(#[from] DomainError),
}

/// On-disk suite encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SuiteFormat {
    /// YAML document.
    Yaml,
    /// JSON document.
    Json,
}

impl SuiteFormat {
    /// Pick the format from a file extension.
    #[must_use]
    pub fn from_path(path: &Path) -> Option<Self> {
        match path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("yaml" | "yml") => Some(Self::Yaml),
            Some("json") => Some(Self::Json),
            _ => None,
        }
    }
}

/// Parse and validate a suite document.
///
/// # Errors
///
/// Returns `SuiteLoadError::Parse` for malformed documents, including any
/// method outside GET/POST/PATCH/DELETE, and `SuiteLoadError::Domain` for
/// cases with a blank name or endpoint.
pub fn parse_suite(content: &str, format: SuiteFormat) -> Result<Suite, SuiteLoadError> {
    let suite: Suite = match format {
        SuiteFormat::Yaml => {
            serde_yaml::from_str(content).map_err(|e| SuiteLoadError::Parse(e.to_string()))?
        }
        SuiteFormat::Json => {
            serde_json::from_str(content).map_err(|e| SuiteLoadError::Parse(e.to_string()))?
        }
    };
    suite.validate()?;
    Ok(suite)
}

/// Read, parse and validate a suite file.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has an unknown extension or
/// does not parse into a valid suite.
pub async fn load_suite(path: &Path) -> Result<Suite, SuiteLoadError> {
    let format = SuiteFormat::from_path(path)
        .ok_or_else(|| SuiteLoadError::UnsupportedFormat(path.to_path_buf()))?;
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|source| SuiteLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let suite = parse_suite(&content, format)?;
    debug!(path = %path.display(), cases = suite.len(), "loaded suite file");
    Ok(suite)
}
