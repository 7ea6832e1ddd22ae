//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses, timeouts, log settings
//! - Validate the external source link
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ShellConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use thiserror::Error;
use url::Url;

use crate::config::schema::ShellConfig;

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in a configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("listener.bind_address `{0}` is not a socket address")]
    BindAddress(String),

    #[error("observability.metrics_address `{0}` is not a socket address")]
    MetricsAddress(String),

    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,

    #[error("observability.log_level `{0}` is not one of trace, debug, info, warn, error")]
    LogLevel(String),

    #[error("app.footer_text must not be empty")]
    EmptyFooter,

    #[error("app.source_url `{0}` must be an absolute http(s) URL")]
    SourceUrl(String),
}

/// Check a parsed config for semantic errors.
pub fn validate_config(config: &ShellConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::BindAddress(
            config.listener.bind_address.clone(),
        ));
    }

    let obs = &config.observability;
    if obs.metrics_enabled && obs.metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::MetricsAddress(obs.metrics_address.clone()));
    }
    if !LOG_LEVELS.contains(&obs.log_level.to_lowercase().as_str()) {
        errors.push(ValidationError::LogLevel(obs.log_level.clone()));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if let Some(text) = &config.app.footer_text {
        if text.trim().is_empty() {
            errors.push(ValidationError::EmptyFooter);
        }
    }

    if let Some(raw) = &config.app.source_url {
        let valid = Url::parse(raw)
            .map(|u| matches!(u.scheme(), "http" | "https") && u.has_host())
            .unwrap_or(false);
        if !valid {
            errors.push(ValidationError::SourceUrl(raw.clone()));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(validate_config(&ShellConfig::default()), Ok(()));
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = ShellConfig::default();
        config.listener.bind_address = "localhost".into();
        config.timeouts.request_secs = 0;
        config.observability.log_level = "loud".into();
        config.app.footer_text = Some("   ".into());

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 4);
        assert!(errors.contains(&ValidationError::ZeroTimeout));
        assert!(errors.contains(&ValidationError::EmptyFooter));
    }

    #[test]
    fn test_metrics_address_only_checked_when_enabled() {
        let mut config = ShellConfig::default();
        config.observability.metrics_address = "nope".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert_eq!(
            validate_config(&config),
            Err(vec![ValidationError::MetricsAddress("nope".into())])
        );
    }

    #[test]
    fn test_source_url() {
        let mut config = ShellConfig::default();
        config.app.source_url = Some("https://github.com/rxseven/playground-docker".into());
        assert!(validate_config(&config).is_ok());

        for bad in ["github.com/x", "ftp://example.com/x", "javascript:alert(1)"] {
            config.app.source_url = Some(bad.into());
            assert_eq!(
                validate_config(&config),
                Err(vec![ValidationError::SourceUrl(bad.into())]),
                "{}",
                bad
            );
        }
    }

    #[test]
    fn test_log_level_case_insensitive() {
        let mut config = ShellConfig::default();
        config.observability.log_level = "DEBUG".into();
        assert!(validate_config(&config).is_ok());
    }
}
