//! Layered runner settings.
//!
//! Precedence, lowest first: built-in defaults, an optional TOML file,
//! `APISMOKE_*` environment variables, then explicit overrides (CLI flags).

use std::collections::HashMap;
use std::path::Path;

use apismoke_domain::{DomainError, RunnerSettings};
use config::{Config, Environment, File, FileFormat};
use thiserror::Error;
use tracing::{debug, warn};

/// Settings file read from the working directory when none is given.
pub const DEFAULT_SETTINGS_FILE: &str = "apismoke.toml";

/// Prefix of environment variables, e.g. `APISMOKE_BASE_URL`.
pub const ENV_PREFIX: &str = "APISMOKE";

/// Error type for settings loading.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// A source could not be read or deserialized.
    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// The merged settings are invalid.
    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// Highest-precedence values, typically from command-line flags.
#[derive(Debug, Clone, Default)]
pub struct SettingsOverrides {
    /// Replaces the base URL.
    pub base_url: Option<String>,
    /// Replaces the bearer token.
    pub token: Option<String>,
    /// Replaces the per-request timeout.
    pub timeout_ms: Option<u64>,
}

impl SettingsOverrides {
    fn apply(self, settings: &mut RunnerSettings) {
        if let Some(base_url) = self.base_url {
            settings.base_url = base_url;
        }
        if let Some(token) = self.token {
            settings.token = token;
        }
        if let Some(timeout_ms) = self.timeout_ms {
            settings.timeout_ms = timeout_ms;
        }
    }
}

/// Load settings from the process environment.
///
/// When `file` is `None`, `apismoke.toml` is read if present; an explicit
/// file must exist.
///
/// # Errors
///
/// Returns an error if a source is malformed or the result fails
/// validation.
pub fn load_settings(
    file: Option<&Path>,
    overrides: SettingsOverrides,
) -> Result<RunnerSettings, SettingsError> {
    load_settings_with_env(file, None, overrides)
}

/// Load settings with an explicit environment map instead of the process
/// environment. `None` reads the real environment.
///
/// # Errors
///
/// Returns an error if a source is malformed or the result fails
/// validation.
pub fn load_settings_with_env(
    file: Option<&Path>,
    env: Option<HashMap<String, String>>,
    overrides: SettingsOverrides,
) -> Result<RunnerSettings, SettingsError> {
    let file_source = match file {
        Some(path) => File::from(path).format(FileFormat::Toml).required(true),
        None => File::from(Path::new(DEFAULT_SETTINGS_FILE))
            .format(FileFormat::Toml)
            .required(false),
    };

    let merged = Config::builder()
        .add_source(file_source)
        // Env values stay strings so a numeric-looking token is not rewritten;
        // numeric fields are converted while deserializing.
        .add_source(Environment::with_prefix(ENV_PREFIX).source(env))
        .build()?;

    let mut settings: RunnerSettings = merged.try_deserialize()?;
    overrides.apply(&mut settings);
    settings.validate()?;

    if settings.token.trim().is_empty() {
        warn!("bearer token is empty; authenticated cases will send an empty credential");
    }
    debug!(?settings, "settings loaded");
    Ok(settings)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use apismoke_domain::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS, DEFAULT_TOKEN};
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    fn env(pairs: &[(&str, &str)]) -> Option<HashMap<String, String>> {
        Some(
            pairs
                .iter()
                .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
                .collect(),
        )
    }

    fn write_file(dir: &Path, content: &str) -> std::path::PathBuf {
        let path = dir.join("apismoke.toml");
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_sources() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "");
        let settings =
            load_settings_with_env(Some(&path), env(&[]), SettingsOverrides::default()).unwrap();

        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.token, DEFAULT_TOKEN);
        assert_eq!(settings.timeout_ms, DEFAULT_TIMEOUT_MS);
    }

    #[test]
    fn test_precedence_file_env_overrides() {
        let dir = tempdir().unwrap();
        let path = write_file(
            dir.path(),
            "base_url = \"http://file.test/api\"\ntoken = \"from-file\"\ntimeout_ms = 1000\n",
        );

        let from_file =
            load_settings_with_env(Some(&path), env(&[]), SettingsOverrides::default()).unwrap();
        assert_eq!(from_file.base_url, "http://file.test/api");
        assert_eq!(from_file.timeout_ms, 1000);

        let from_env = load_settings_with_env(
            Some(&path),
            env(&[("APISMOKE_TOKEN", "from-env"), ("APISMOKE_TIMEOUT_MS", "250")]),
            SettingsOverrides::default(),
        )
        .unwrap();
        assert_eq!(from_env.base_url, "http://file.test/api");
        assert_eq!(from_env.token, "from-env");
        assert_eq!(from_env.timeout_ms, 250);

        let from_flags = load_settings_with_env(
            Some(&path),
            env(&[("APISMOKE_TOKEN", "from-env")]),
            SettingsOverrides {
                token: Some("from-flag".to_string()),
                base_url: Some("https://flag.test".to_string()),
                timeout_ms: None,
            },
        )
        .unwrap();
        assert_eq!(from_flags.token, "from-flag");
        assert_eq!(from_flags.base_url, "https://flag.test");
        assert_eq!(from_flags.timeout_ms, 1000);
    }

    #[test]
    fn test_numeric_looking_env_token_is_kept_verbatim() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "");

        for token in ["007", "1e3", "true", "0x1F"] {
            let settings = load_settings_with_env(
                Some(&path),
                env(&[("APISMOKE_TOKEN", token), ("APISMOKE_TIMEOUT_MS", "750")]),
                SettingsOverrides::default(),
            )
            .unwrap();
            assert_eq!(settings.token, token);
            assert_eq!(settings.timeout_ms, 750);
        }
    }

    #[test]
    fn test_explicit_missing_file_is_an_error() {
        let dir = tempdir().unwrap();
        let result = load_settings_with_env(
            Some(&dir.path().join("nope.toml")),
            env(&[]),
            SettingsOverrides::default(),
        );
        assert!(matches!(result, Err(SettingsError::Config(_))));
    }

    #[test]
    fn test_invalid_result_is_rejected() {
        let dir = tempdir().unwrap();
        let path = write_file(dir.path(), "base_url = \"not-a-url\"\n");
        let result = load_settings_with_env(Some(&path), env(&[]), SettingsOverrides::default());
        assert!(matches!(
            result,
            Err(SettingsError::Invalid(DomainError::InvalidUrl(_)))
        ));
    }
}
