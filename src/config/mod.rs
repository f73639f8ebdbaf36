//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks, warnings)
//!     → ProtocolsConfig (validated, immutable)
//!     → EndpointConfig::protocol_set() per endpoint
//! ```
//!
//! # Design Decisions
//! - Config is read once at startup; protocol sets are rebuilt from it, never persisted
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{check_config, load_config, parse_config, read_config, ConfigError};
pub use schema::{EndpointConfig, LogFormat, ObservabilityConfig, ProtocolsConfig, TlsConfig};
pub use validation::{ValidationError, ValidationWarning};
