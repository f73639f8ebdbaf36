//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! config loading, validation, CLI
//!     → tracing events (endpoint, protocols = %set, tls)
//!     → logging.rs (EnvFilter + fmt layer)
//!     → stderr/stdout in pretty, compact or JSON form
//! ```

pub mod logging;

pub use logging::{init_logging, LoggingError};
