//! HTTP protocol capability sets.
//!
//! [`ProtocolSet`] records which of HTTP/1, HTTP/2 over TLS and unencrypted
//! HTTP/2 an endpoint is willing to speak. Connection setup reads it to pick
//! TLS or plaintext and to build its protocol offers; configuration builds it.

pub mod config;
pub mod observability;
pub mod protocols;

pub use config::schema::ProtocolsConfig;
pub use protocols::{Protocol, ProtocolParseError, ProtocolSet};
