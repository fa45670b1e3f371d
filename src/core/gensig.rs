//! Generation signature and Shabal-256 composition
//!
//! Byte-order decisions here are consensus-critical: the merkle root is
//! fed reversed relative to its stored order, and the plot seed and mix
//! value are written as 8 little-endian bytes.

use crate::core::{BlockHeader, Hash256};
use shabal::{Digest, Shabal256};

/// Derive the generation signature from a parent header.
///
/// Hashes the reversed merkle root followed by the parent's plot seed.
/// The signature seeds scoop selection for the next height.
pub fn generation_signature(prev: &BlockHeader) -> Hash256 {
    let mut hasher = Shabal256::new();
    hasher.update(prev.merkle_root().reversed().as_bytes());
    hasher.update(prev.plotseed().to_le_bytes());
    Hash256::from_bytes(hasher.finalize().into())
}

/// Hash a generation signature together with a 64-bit mix value.
///
/// The mix value is written as 8 little-endian bytes after the signature;
/// callers that need a big-endian field in the stream byte-swap the value
/// first.
pub fn shabal_mix(gen_sig: &Hash256, mix64: i64) -> Hash256 {
    let mut hasher = Shabal256::new();
    hasher.update(gen_sig.as_bytes());
    hasher.update(mix64.to_le_bytes());
    Hash256::from_bytes(hasher.finalize().into())
}
