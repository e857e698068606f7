//! Trace context identifiers.
//!
//! Fixed-size ids carried on a log record to correlate it with a span. Each
//! renders as lowercase hex of exactly twice its byte length.

use std::fmt;
use thiserror::Error;

/// Errors that can occur when parsing a trace context id from hex.
#[derive(Debug, Error)]
pub enum TraceContextError {
    /// The input has the wrong number of hex characters.
    #[error("expected {expected} hex characters, got {actual}")]
    InvalidLength {
        /// Required number of characters.
        expected: usize,
        /// Number of characters given.
        actual: usize,
    },

    /// The input contains a non-hex character.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

fn decode_fixed<const N: usize>(text: &str) -> Result<[u8; N], TraceContextError> {
    if text.len() != N * 2 {
        return Err(TraceContextError::InvalidLength {
            expected: N * 2,
            actual: text.len(),
        });
    }
    let mut bytes = [0u8; N];
    hex::decode_to_slice(text, &mut bytes)?;
    Ok(bytes)
}

/// A 16-byte trace id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TraceId([u8; 16]);

impl TraceId {
    /// Creates a trace id from its bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Parses 32 hex characters.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 32 hex characters.
    pub fn from_hex(text: &str) -> Result<Self, TraceContextError> {
        decode_fixed(text).map(Self)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Returns `false` for the all-zero id.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0 != [0; 16]
    }

    /// Renders the id as 32 lowercase hex characters.
    #[must_use]
    pub fn to_lower_base16(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for TraceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_lower_base16())
    }
}

/// An 8-byte span id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SpanId([u8; 8]);

impl SpanId {
    /// Creates a span id from its bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Parses 16 hex characters.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 16 hex characters.
    pub fn from_hex(text: &str) -> Result<Self, TraceContextError> {
        decode_fixed(text).map(Self)
    }

    /// Returns the raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Returns `false` for the all-zero id.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0 != [0; 8]
    }

    /// Renders the id as 16 lowercase hex characters.
    #[must_use]
    pub fn to_lower_base16(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for SpanId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_lower_base16())
    }
}

/// Trace flags byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TraceFlags(u8);

impl TraceFlags {
    /// The sampled bit.
    pub const SAMPLED: Self = Self(0x01);

    /// Creates flags from a raw byte.
    #[must_use]
    pub const fn new(flags: u8) -> Self {
        Self(flags)
    }

    /// Parses 2 hex characters.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not exactly 2 hex characters.
    pub fn from_hex(text: &str) -> Result<Self, TraceContextError> {
        decode_fixed::<1>(text).map(|[b]| Self(b))
    }

    /// Returns the raw byte.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns `true` if the sampled bit is set.
    #[must_use]
    pub const fn is_sampled(self) -> bool {
        self.0 & Self::SAMPLED.0 != 0
    }

    /// Renders the flags as 2 lowercase hex characters.
    #[must_use]
    pub fn to_lower_base16(self) -> String {
        hex::encode([self.0])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trace_id_hex_width() {
        let id = TraceId::from_bytes([
            0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d,
            0x0e, 0x0f,
        ]);
        assert_eq!(id.to_lower_base16(), "000102030405060708090a0b0c0d0e0f");
        assert_eq!(id.to_string().len(), 32);
    }

    #[test]
    fn test_span_id_hex_width() {
        let id = SpanId::from_bytes([0xff; 8]);
        assert_eq!(id.to_lower_base16(), "ffffffffffffffff");
    }

    #[test]
    fn test_trace_flags_hex() {
        assert_eq!(TraceFlags::SAMPLED.to_lower_base16(), "01");
        assert_eq!(TraceFlags::new(0x0a).to_lower_base16(), "0a");
        assert!(TraceFlags::SAMPLED.is_sampled());
        assert!(!TraceFlags::default().is_sampled());
    }

    #[test]
    fn test_from_hex_accepts_upper_case() {
        let id = SpanId::from_hex("00F067AA0BA902B7").unwrap();
        assert_eq!(id.to_lower_base16(), "00f067aa0ba902b7");
        assert_eq!(TraceFlags::from_hex("03").unwrap().bits(), 3);
    }

    #[test]
    fn test_from_hex_rejects_bad_input() {
        assert!(matches!(
            TraceId::from_hex("abc"),
            Err(TraceContextError::InvalidLength {
                expected: 32,
                actual: 3
            })
        ));
        assert!(matches!(
            SpanId::from_hex("zzzzzzzzzzzzzzzz"),
            Err(TraceContextError::InvalidHex(_))
        ));
    }

    #[test]
    fn test_validity() {
        assert!(!TraceId::default().is_valid());
        assert!(TraceId::from_bytes([1; 16]).is_valid());
        assert!(!SpanId::default().is_valid());
    }
}
