//! Packed set of enabled HTTP protocols.

use std::fmt;
use std::str::FromStr;

use crate::protocols::protocol::{Protocol, ProtocolParseError};

/// A set of HTTP protocols.
///
/// The default value is the empty set. Each flag is independent: enabling
/// unencrypted HTTP/2 says nothing about HTTP/1 or HTTP/2 over TLS, and any
/// of the eight combinations is a valid value. Deciding whether a combination
/// suits a particular transport is left to the caller.
///
/// ```
/// use http_protocols::ProtocolSet;
///
/// let mut protocols = ProtocolSet::default();
/// protocols.set_http2(true);
/// protocols.set_http1(true);
/// assert_eq!(protocols.to_string(), "{HTTP1,HTTP2}");
/// ```
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ProtocolSet {
    bits: u8,
}

impl ProtocolSet {
    /// The empty set.
    pub const EMPTY: ProtocolSet = ProtocolSet { bits: 0 };

    /// HTTP/1, HTTP/2 and unencrypted HTTP/2.
    pub const ALL: ProtocolSet = ProtocolSet {
        bits: Protocol::Http1.bit() | Protocol::Http2.bit() | Protocol::UnencryptedHttp2.bit(),
    };

    /// Create an empty set.
    pub const fn new() -> Self {
        Self::EMPTY
    }

    /// Reports whether HTTP/1 is included.
    pub const fn http1(&self) -> bool {
        self.contains(Protocol::Http1)
    }

    /// Adds or removes HTTP/1.
    pub fn set_http1(&mut self, enabled: bool) {
        self.set(Protocol::Http1, enabled);
    }

    /// Reports whether HTTP/2 over TLS is included.
    pub const fn http2(&self) -> bool {
        self.contains(Protocol::Http2)
    }

    /// Adds or removes HTTP/2 over TLS.
    pub fn set_http2(&mut self, enabled: bool) {
        self.set(Protocol::Http2, enabled);
    }

    /// Reports whether unencrypted HTTP/2 is included.
    pub const fn unencrypted_http2(&self) -> bool {
        self.contains(Protocol::UnencryptedHttp2)
    }

    /// Adds or removes unencrypted HTTP/2.
    pub fn set_unencrypted_http2(&mut self, enabled: bool) {
        self.set(Protocol::UnencryptedHttp2, enabled);
    }

    pub const fn with_http1(self, enabled: bool) -> Self {
        self.with(Protocol::Http1, enabled)
    }

    pub const fn with_http2(self, enabled: bool) -> Self {
        self.with(Protocol::Http2, enabled)
    }

    pub const fn with_unencrypted_http2(self, enabled: bool) -> Self {
        self.with(Protocol::UnencryptedHttp2, enabled)
    }

    /// Reports whether `protocol` is included.
    pub const fn contains(&self, protocol: Protocol) -> bool {
        self.bits & protocol.bit() != 0
    }

    /// Adds `protocol` when `enabled`, removes it otherwise.
    pub fn set(&mut self, protocol: Protocol, enabled: bool) {
        *self = self.with(protocol, enabled);
    }

    /// Returns a copy with `protocol` added or removed.
    pub const fn with(self, protocol: Protocol, enabled: bool) -> Self {
        let bits = if enabled {
            self.bits | protocol.bit()
        } else {
            self.bits & !protocol.bit()
        };
        Self { bits }
    }

    pub fn insert(&mut self, protocol: Protocol) {
        self.set(protocol, true);
    }

    pub fn remove(&mut self, protocol: Protocol) {
        self.set(protocol, false);
    }

    pub const fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Number of protocols in the set.
    pub const fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    /// Iterate the included protocols in rendering order.
    pub fn iter(&self) -> Iter {
        Iter {
            set: *self,
            next: 0,
        }
    }
}

impl fmt::Display for ProtocolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, protocol) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            f.write_str(protocol.name())?;
        }
        f.write_str("}")
    }
}

impl fmt::Debug for ProtocolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ProtocolSet{}", self)
    }
}

impl FromStr for ProtocolSet {
    type Err = ProtocolParseError;

    /// Parses the rendered form (`{HTTP1,HTTP2}`) or a bare comma-separated
    /// list of names or aliases (`http/1.1, h2c`). Blank input is the empty
    /// set; an empty entry inside a list (`{HTTP1,,HTTP2}`, `{,}`) is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = match (trimmed.strip_prefix('{'), trimmed.ends_with('}')) {
            (Some(rest), true) => &rest[..rest.len() - 1],
            (None, false) => trimmed,
            _ => return Err(ProtocolParseError::UnbalancedBraces(trimmed.to_string())),
        };

        if inner.trim().is_empty() {
            return Ok(Self::EMPTY);
        }

        inner
            .split(',')
            .map(str::trim)
            .map(|name| {
                if name.is_empty() {
                    Err(ProtocolParseError::EmptyEntry(trimmed.to_string()))
                } else {
                    name.parse::<Protocol>()
                }
            })
            .collect()
    }
}

impl From<Protocol> for ProtocolSet {
    fn from(protocol: Protocol) -> Self {
        Self::EMPTY.with(protocol, true)
    }
}

impl FromIterator<Protocol> for ProtocolSet {
    fn from_iter<I: IntoIterator<Item = Protocol>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        set.extend(iter);
        set
    }
}

impl Extend<Protocol> for ProtocolSet {
    fn extend<I: IntoIterator<Item = Protocol>>(&mut self, iter: I) {
        for protocol in iter {
            self.insert(protocol);
        }
    }
}

impl IntoIterator for ProtocolSet {
    type Item = Protocol;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl IntoIterator for &ProtocolSet {
    type Item = Protocol;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

/// Iterator over the protocols of a [`ProtocolSet`], in rendering order.
#[derive(Debug, Clone)]
pub struct Iter {
    set: ProtocolSet,
    next: usize,
}

impl Iterator for Iter {
    type Item = Protocol;

    fn next(&mut self) -> Option<Protocol> {
        while let Some(&protocol) = Protocol::ALL.get(self.next) {
            self.next += 1;
            if self.set.contains(protocol) {
                return Some(protocol);
            }
        }
        None
    }
}
