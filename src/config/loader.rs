//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ProtocolsConfig;
use crate::config::validation::{config_warnings, validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Read and deserialize a TOML file without semantic validation.
///
/// Used where logging has to be set up from the file before validation
/// results can be reported.
pub fn read_config(path: &Path) -> Result<ProtocolsConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<ProtocolsConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "Config file read");
    parse_config(&content)
}

/// Parse and validate configuration from TOML text.
pub fn parse_config(content: &str) -> Result<ProtocolsConfig, ConfigError> {
    let config: ProtocolsConfig = toml::from_str(content)?;
    check_config(config)
}

/// Validate an already deserialized configuration and log the resulting sets.
pub fn check_config(config: ProtocolsConfig) -> Result<ProtocolsConfig, ConfigError> {
    validate_config(&config).map_err(ConfigError::Validation)?;

    for (name, endpoint) in config.endpoints() {
        tracing::info!(
            endpoint = name,
            protocols = %endpoint.protocol_set(),
            tls = endpoint.is_tls(),
            "Endpoint protocols configured"
        );
    }
    for warning in config_warnings(&config) {
        tracing::warn!(%warning, "Questionable protocol configuration");
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = parse_config("").unwrap();
        assert_eq!(config.server.protocol_set().to_string(), "{HTTP1,HTTP2}");
        assert_eq!(config.observability.log_level, "info");
    }

    #[test]
    fn aliases_in_config() {
        let config = parse_config(
            r#"
            [server]
            protocols = ["http/1.1", "h2c"]
            "#,
        )
        .unwrap();
        assert_eq!(config.server.protocol_set().to_string(), "{HTTP1,UnencryptedHTTP2}");
    }

    #[test]
    fn unknown_protocol_is_parse_error() {
        let err = parse_config("[client]\nprotocols = [\"h3\"]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn validation_errors_are_joined() {
        let err = parse_config("[server]\nprotocols = []\n[client]\nprotocols = [\"HTTP2\"]\n")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: server: no protocols enabled, \
             client: HTTP2 is the only protocol enabled but TLS is not configured"
        );
    }
}
