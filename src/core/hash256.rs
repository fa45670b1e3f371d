//! 32-byte digest type
//!
//! `Hash256` is an opaque blob: it has no integer operations. Where a
//! digest must be treated as a number it is reinterpreted as a
//! little-endian [`Uint256`](crate::core::Uint256).

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed 32-byte digest.
///
/// Byte order is significant only where a particular hash invocation says
/// so; this type itself never reorders its contents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Hash256([u8; 32]);

impl Hash256 {
    /// The all-zero digest
    pub const ZERO: Hash256 = Hash256([0u8; 32]);

    /// Create a digest from raw bytes
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Get the digest bytes
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Parse from a 64-digit hex string (digest byte order)
    pub fn from_hex(hex: &str) -> Result<Self> {
        let bytes = hex::decode(hex).map_err(|e| {
            Error::config_invalid_value("hash", hex, format!("valid hex: {}", e))
        })?;
        if bytes.len() != 32 {
            return Err(Error::config_invalid_value(
                "hash",
                hex,
                format!("32 bytes, got {}", bytes.len()),
            ));
        }
        let mut array = [0u8; 32];
        array.copy_from_slice(&bytes);
        Ok(Self(array))
    }

    /// Convert to a hex string (digest byte order)
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Read the little-endian `u64` at byte offset `pos * 8`.
    ///
    /// # Panics
    ///
    /// Panics if `pos > 3`.
    pub fn read_u64_le(&self, pos: usize) -> u64 {
        let bytes: [u8; 8] = self.0[pos * 8..pos * 8 + 8]
            .try_into()
            .expect("offset within digest");
        u64::from_le_bytes(bytes)
    }

    /// The first 8 bytes read as a little-endian `u64`.
    ///
    /// Usable as a cheap hash when the contents are uniformly random; not
    /// appropriate for attacker-influenced values.
    pub fn cheap_hash(&self) -> u64 {
        self.read_u64_le(0)
    }

    /// A copy with the byte order reversed
    pub fn reversed(&self) -> Self {
        let mut bytes = self.0;
        bytes.reverse();
        Self(bytes)
    }

    /// Whether every byte is zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

impl fmt::Display for Hash256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl From<[u8; 32]> for Hash256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Serialize for Hash256 {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Hash256 {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let hex = String::deserialize(deserializer)?;
        Self::from_hex(&hex).map_err(serde::de::Error::custom)
    }
}
