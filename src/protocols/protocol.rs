//! The individual protocol variants a set can hold.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single HTTP protocol variant.
///
/// Variants are declared in rendering order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Protocol {
    /// HTTP/1.0 and HTTP/1.1, over plaintext or TLS.
    Http1,
    /// HTTP/2 over TLS.
    Http2,
    /// HTTP/2 over plaintext (h2c).
    UnencryptedHttp2,
}

impl Protocol {
    /// Every variant, in rendering order.
    pub const ALL: [Protocol; 3] = [Protocol::Http1, Protocol::Http2, Protocol::UnencryptedHttp2];

    /// Canonical name as it appears inside a rendered set.
    pub const fn name(self) -> &'static str {
        match self {
            Protocol::Http1 => "HTTP1",
            Protocol::Http2 => "HTTP2",
            Protocol::UnencryptedHttp2 => "UnencryptedHTTP2",
        }
    }

    pub(crate) const fn bit(self) -> u8 {
        match self {
            Protocol::Http1 => 1 << 0,
            Protocol::Http2 => 1 << 1,
            Protocol::UnencryptedHttp2 => 1 << 2,
        }
    }
}

impl fmt::Display for Protocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors produced when parsing protocol names or set expressions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProtocolParseError {
    /// The name matches no known protocol or alias.
    #[error("unknown protocol: {0:?}")]
    UnknownProtocol(String),

    /// A set expression opened a brace without closing it, or vice versa.
    #[error("unbalanced braces in protocol set: {0:?}")]
    UnbalancedBraces(String),

    /// A comma-separated list contains a blank entry.
    #[error("empty entry in protocol set: {0:?}")]
    EmptyEntry(String),
}

impl FromStr for Protocol {
    type Err = ProtocolParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        match name.to_ascii_lowercase().as_str() {
            "http1" | "h1" | "http/1.0" | "http/1.1" => Ok(Protocol::Http1),
            "http2" | "h2" => Ok(Protocol::Http2),
            "unencryptedhttp2" | "h2c" => Ok(Protocol::UnencryptedHttp2),
            _ => Err(ProtocolParseError::UnknownProtocol(name.to_string())),
        }
    }
}

impl TryFrom<String> for Protocol {
    type Error = ProtocolParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Protocol> for &'static str {
    fn from(protocol: Protocol) -> Self {
        protocol.name()
    }
}
