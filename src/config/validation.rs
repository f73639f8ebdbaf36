//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check each endpoint can speak at least one protocol
//! - Check TLS sections are complete
//! - Report questionable but legal combinations as warnings
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProtocolsConfig → Result<(), Vec<ValidationError>>
//! - Protocol sets are only inspected, never adjusted

use thiserror::Error;

use crate::config::schema::{EndpointConfig, ProtocolsConfig};
use crate::protocols::{Protocol, ProtocolSet};

/// A configuration problem that prevents an endpoint from being used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// No protocol enabled at all.
    #[error("{endpoint}: no protocols enabled")]
    NoProtocols { endpoint: String },

    /// Only HTTP/2 over TLS is enabled, but the endpoint has no TLS.
    #[error("{endpoint}: HTTP2 is the only protocol enabled but TLS is not configured")]
    Http2RequiresTls { endpoint: String },

    /// A TLS section is missing its certificate or key path.
    #[error("{endpoint}: TLS {field} must not be empty")]
    EmptyTlsPath { endpoint: String, field: &'static str },
}

/// A legal combination that likely does not do what was intended.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationWarning {
    #[error("{endpoint}: HTTP2 requires TLS and is ignored on a plaintext endpoint")]
    Http2WithoutTls { endpoint: String },

    #[error("{endpoint}: UnencryptedHTTP2 is ignored on a TLS endpoint")]
    UnencryptedHttp2WithTls { endpoint: String },
}

/// Validate every endpoint, collecting all errors.
pub fn validate_config(config: &ProtocolsConfig) -> Result<(), Vec<ValidationError>> {
    let errors: Vec<ValidationError> = config
        .endpoints()
        .flat_map(|(name, endpoint)| validate_endpoint(name, endpoint))
        .collect();

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Validate a single endpoint.
pub fn validate_endpoint(name: &str, endpoint: &EndpointConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let protocols = endpoint.protocol_set();

    if protocols.is_empty() {
        errors.push(ValidationError::NoProtocols {
            endpoint: name.to_string(),
        });
    } else if !endpoint.is_tls() && protocols == ProtocolSet::from(Protocol::Http2) {
        errors.push(ValidationError::Http2RequiresTls {
            endpoint: name.to_string(),
        });
    }

    if let Some(tls) = &endpoint.tls {
        if tls.cert_path.trim().is_empty() {
            errors.push(ValidationError::EmptyTlsPath {
                endpoint: name.to_string(),
                field: "cert_path",
            });
        }
        if tls.key_path.trim().is_empty() {
            errors.push(ValidationError::EmptyTlsPath {
                endpoint: name.to_string(),
                field: "key_path",
            });
        }
    }

    errors
}

/// Non-fatal observations about an endpoint's protocol combination.
pub fn endpoint_warnings(name: &str, endpoint: &EndpointConfig) -> Vec<ValidationWarning> {
    let protocols = endpoint.protocol_set();
    let mut warnings = Vec::new();

    if endpoint.is_tls() {
        if protocols.unencrypted_http2() {
            warnings.push(ValidationWarning::UnencryptedHttp2WithTls {
                endpoint: name.to_string(),
            });
        }
    } else if protocols.http2() && protocols.len() > 1 {
        warnings.push(ValidationWarning::Http2WithoutTls {
            endpoint: name.to_string(),
        });
    }

    warnings
}

/// Warnings for every endpoint in the configuration.
pub fn config_warnings(config: &ProtocolsConfig) -> Vec<ValidationWarning> {
    config
        .endpoints()
        .flat_map(|(name, endpoint)| endpoint_warnings(name, endpoint))
        .collect()
}
