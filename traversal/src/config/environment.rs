//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `TRAVERSAL_*` environment variables that
//! override configuration file values.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::{LogLevel, LOG_MODE_ENV};

/// Environment variable overriding the application URL.
pub const APPLICATION_URL_ENV: &str = "TRAVERSAL_APPLICATION_URL";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use traversal::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// Empty values are ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if `TRAVERSAL_LOG_MODE` names an unknown level.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(url) = Self::non_empty(APPLICATION_URL_ENV) {
            config.application_url = Some(url);
        }

        if let Some(mode) = Self::non_empty(LOG_MODE_ENV) {
            let level = LogLevel::parse(&mode).map_err(|message| Error::Validation {
                field: LOG_MODE_ENV.into(),
                message,
            })?;
            config.log_mode = Some(level);
        }

        Ok(())
    }

    fn non_empty(name: &str) -> Option<String> {
        env::var(name).ok().filter(|value| !value.trim().is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    /// Runs `f` with the given variables set, restoring previous values.
    fn with_env(vars: &[(&str, Option<&str>)], f: impl FnOnce()) {
        let saved: Vec<(String, Option<String>)> = vars
            .iter()
            .map(|(name, _)| ((*name).to_string(), env::var(name).ok()))
            .collect();
        for (name, value) in vars {
            match value {
                Some(value) => env::set_var(name, value),
                None => env::remove_var(name),
            }
        }
        f();
        for (name, value) in saved {
            match value {
                Some(value) => env::set_var(&name, value),
                None => env::remove_var(&name),
            }
        }
    }

    #[test]
    #[serial]
    fn test_no_overrides() {
        with_env(&[(APPLICATION_URL_ENV, None), (LOG_MODE_ENV, None)], || {
            let mut config = Config::default();
            EnvironmentConfig::apply_overrides(&mut config).unwrap();
            assert_eq!(config, Config::default());
        });
    }

    #[test]
    #[serial]
    fn test_overrides() {
        with_env(
            &[
                (APPLICATION_URL_ENV, Some("https://example.com")),
                (LOG_MODE_ENV, Some("QUIET")),
            ],
            || {
                let mut config = Config {
                    application_url: Some("http://file.example".to_string()),
                    ..Config::default()
                };
                EnvironmentConfig::apply_overrides(&mut config).unwrap();
                assert_eq!(config.application_url.as_deref(), Some("https://example.com"));
                assert_eq!(config.log_mode, Some(LogLevel::Quiet));
            },
        );
    }

    #[test]
    #[serial]
    fn test_empty_values_ignored() {
        with_env(&[(APPLICATION_URL_ENV, Some("  ")), (LOG_MODE_ENV, None)], || {
            let mut config = Config::default();
            EnvironmentConfig::apply_overrides(&mut config).unwrap();
            assert!(config.application_url.is_none());
        });
    }

    #[test]
    #[serial]
    fn test_invalid_log_mode() {
        with_env(&[(APPLICATION_URL_ENV, None), (LOG_MODE_ENV, Some("loud"))], || {
            let mut config = Config::default();
            let err = EnvironmentConfig::apply_overrides(&mut config).unwrap_err();
            assert!(matches!(err, Error::Validation { field, .. } if field == LOG_MODE_ENV));
        });
    }
}
