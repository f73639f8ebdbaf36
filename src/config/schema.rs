//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::protocols::{Protocol, ProtocolSet};

/// Root configuration describing which protocols each endpoint speaks.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProtocolsConfig {
    /// Protocols accepted by the server side.
    pub server: EndpointConfig,

    /// Protocols offered by the client side.
    pub client: EndpointConfig,

    /// Logging settings.
    pub observability: ObservabilityConfig,
}

impl ProtocolsConfig {
    /// Iterate endpoints with their names, server first.
    pub fn endpoints(&self) -> impl Iterator<Item = (&'static str, &EndpointConfig)> {
        [("server", &self.server), ("client", &self.client)].into_iter()
    }
}

/// Protocol configuration for one endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Enabled protocols, by canonical name or alias (e.g. "h2c").
    pub protocols: Vec<Protocol>,

    /// Optional TLS configuration.
    pub tls: Option<TlsConfig>,
}

impl EndpointConfig {
    /// Fold the configured protocol list into a set.
    pub fn protocol_set(&self) -> ProtocolSet {
        self.protocols.iter().copied().collect()
    }

    pub fn is_tls(&self) -> bool {
        self.tls.is_some()
    }
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            protocols: vec![Protocol::Http1, Protocol::Http2],
            tls: None,
        }
    }
}

/// TLS configuration for an endpoint.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TlsConfig {
    /// Path to certificate file (PEM).
    pub cert_path: String,

    /// Path to private key file (PEM).
    pub key_path: String,
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    #[default]
    Compact,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_endpoint_speaks_http1_and_http2() {
        let endpoint = EndpointConfig::default();
        assert_eq!(endpoint.protocol_set().to_string(), "{HTTP1,HTTP2}");
        assert!(!endpoint.is_tls());
    }

    #[test]
    fn duplicate_entries_collapse() {
        let endpoint = EndpointConfig {
            protocols: vec![
                Protocol::UnencryptedHttp2,
                Protocol::Http1,
                Protocol::UnencryptedHttp2,
            ],
            tls: None,
        };
        assert_eq!(endpoint.protocol_set().to_string(), "{HTTP1,UnencryptedHTTP2}");
    }
}
