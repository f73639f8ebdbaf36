//! HTTP protocol capability sets.
//!
//! # Data Flow
//! ```text
//! config (protocols = ["HTTP1", "h2"])
//!     → protocol.rs (name parsing, canonical names)
//!     → set.rs (ProtocolSet, packed flags)
//!     → handed by value to negotiation / transport setup
//!     → rendered via Display for logs and diagnostics
//! ```
//!
//! # Design Decisions
//! - The set is a plain `Copy` value; every owner holds its own instance
//! - Flags are independent; no combination is rejected here
//! - Rendering order is fixed: HTTP1, HTTP2, UnencryptedHTTP2

pub mod protocol;
pub mod set;

pub use protocol::{Protocol, ProtocolParseError};
pub use set::ProtocolSet;
