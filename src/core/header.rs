//! Block headers and the ancestor lookup seam
//!
//! The core never serializes headers or computes block ids; both are the
//! host's business. A [`ChainHeader`] is a header the host has already
//! accepted, annotated with its height, and ancestors are reached through
//! the [`AncestorLookup`] trait.

use crate::core::Hash256;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// A candidate block header as supplied by the host.
///
/// `bits` is the raw 64-bit base target, not a compact encoding. The
/// merkle root is stored reversed relative to display order, matching the
/// wire convention of the consuming ecosystem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockHeader {
    version: u32,
    timestamp: u32,
    bits: u64,
    nonce: u64,
    plotseed: u64,
    prev_block_hash: Hash256,
    merkle_root: Hash256,
}

impl BlockHeader {
    /// Header version
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Block time in seconds since the Unix epoch
    pub fn timestamp(&self) -> u32 {
        self.timestamp
    }

    /// The 64-bit base target
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// The miner's nonce
    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// The miner's plot seed (numeric account id)
    pub fn plotseed(&self) -> u64 {
        self.plotseed
    }

    /// Hash identifying the parent block
    pub fn prev_block_hash(&self) -> &Hash256 {
        &self.prev_block_hash
    }

    /// Merkle root in stored (reversed) order
    pub fn merkle_root(&self) -> &Hash256 {
        &self.merkle_root
    }
}

impl fmt::Display for BlockHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "BlockHeader(timestamp={}, bits={}, nonce={})",
            self.timestamp, self.bits, self.nonce
        )
    }
}

/// Builder for constructing headers
#[derive(Debug, Clone)]
pub struct HeaderBuilder {
    header: BlockHeader,
}

impl HeaderBuilder {
    /// Start from an all-zero header
    pub fn new() -> Self {
        Self {
            header: BlockHeader {
                version: 0,
                timestamp: 0,
                bits: 0,
                nonce: 0,
                plotseed: 0,
                prev_block_hash: Hash256::ZERO,
                merkle_root: Hash256::ZERO,
            },
        }
    }

    /// Set the header version
    pub fn version(mut self, version: u32) -> Self {
        self.header.version = version;
        self
    }

    /// Set the block timestamp
    pub fn timestamp(mut self, timestamp: u32) -> Self {
        self.header.timestamp = timestamp;
        self
    }

    /// Set the base target
    pub fn bits(mut self, bits: u64) -> Self {
        self.header.bits = bits;
        self
    }

    /// Set the nonce
    pub fn nonce(mut self, nonce: u64) -> Self {
        self.header.nonce = nonce;
        self
    }

    /// Set the plot seed
    pub fn plotseed(mut self, plotseed: u64) -> Self {
        self.header.plotseed = plotseed;
        self
    }

    /// Set the parent block hash
    pub fn prev_block_hash(mut self, hash: Hash256) -> Self {
        self.header.prev_block_hash = hash;
        self
    }

    /// Set the merkle root (stored order)
    pub fn merkle_root(mut self, root: Hash256) -> Self {
        self.header.merkle_root = root;
        self
    }

    /// Build the header
    pub fn build(self) -> BlockHeader {
        self.header
    }
}

impl Default for HeaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A previously-validated header plus its position in the chain.
///
/// Immutable once inserted into a chain index; the core only reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChainHeader {
    header: BlockHeader,
    height: u32,
}

impl ChainHeader {
    /// Annotate a validated header with its height
    pub fn new(header: BlockHeader, height: u32) -> Self {
        Self { header, height }
    }

    /// The underlying header
    pub fn header(&self) -> &BlockHeader {
        &self.header
    }

    /// Height of this block in the chain
    pub fn height(&self) -> u32 {
        self.height
    }

    /// The 64-bit base target
    pub fn bits(&self) -> u64 {
        self.header.bits
    }

    /// Block time in seconds since the Unix epoch
    pub fn timestamp(&self) -> u32 {
        self.header.timestamp
    }

    /// Hash identifying the parent block
    pub fn prev_block_hash(&self) -> &Hash256 {
        self.header.prev_block_hash()
    }
}

/// Host-supplied ancestor resolution.
///
/// `ancestor` maps a parent id (the `prev_block_hash` of some header) to
/// the corresponding validated [`ChainHeader`], or `None` when the block
/// is unknown. Implementations must not mutate chain state and must not
/// re-enter the verifier. During retargeting a `None` stops the backward
/// walk; it is never an error by itself.
pub trait AncestorLookup {
    /// Resolve the header identified by `prev_hash`
    fn ancestor(&self, prev_hash: &Hash256) -> Option<&ChainHeader>;
}

/// A `HashMap`-backed chain index keyed by block id.
///
/// Suitable for tests and for hosts that keep the recent chain in memory.
#[derive(Debug, Clone, Default)]
pub struct HeaderIndex {
    headers: HashMap<Hash256, ChainHeader>,
}

impl HeaderIndex {
    /// Create an empty index
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a header under its block id
    pub fn insert(&mut self, id: Hash256, header: ChainHeader) {
        self.headers.insert(id, header);
    }

    /// Number of indexed headers
    pub fn len(&self) -> usize {
        self.headers.len()
    }

    /// Whether the index is empty
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }
}

impl AncestorLookup for HeaderIndex {
    fn ancestor(&self, prev_hash: &Hash256) -> Option<&ChainHeader> {
        self.headers.get(prev_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_header() -> BlockHeader {
        HeaderBuilder::new()
            .version(2)
            .timestamp(1_600_000_000)
            .bits(18_325_193_796)
            .nonce(77)
            .plotseed(0xdead_beef)
            .prev_block_hash(Hash256::from_bytes([1u8; 32]))
            .merkle_root(Hash256::from_bytes([2u8; 32]))
            .build()
    }

    #[test]
    fn test_builder_and_accessors() {
        let header = sample_header();
        assert_eq!(header.version(), 2);
        assert_eq!(header.timestamp(), 1_600_000_000);
        assert_eq!(header.bits(), 18_325_193_796);
        assert_eq!(header.nonce(), 77);
        assert_eq!(header.plotseed(), 0xdead_beef);
        assert_eq!(header.prev_block_hash(), &Hash256::from_bytes([1u8; 32]));
        assert_eq!(header.merkle_root(), &Hash256::from_bytes([2u8; 32]));
    }

    #[test]
    fn test_chain_header() {
        let chained = ChainHeader::new(sample_header(), 1234);
        assert_eq!(chained.height(), 1234);
        assert_eq!(chained.bits(), 18_325_193_796);
        assert_eq!(chained.timestamp(), 1_600_000_000);
        assert_eq!(chained.prev_block_hash(), &Hash256::from_bytes([1u8; 32]));
    }

    #[test]
    fn test_header_index_lookup() {
        let mut index = HeaderIndex::new();
        assert!(index.is_empty());

        let id = Hash256::from_bytes([9u8; 32]);
        index.insert(id, ChainHeader::new(sample_header(), 10));
        assert_eq!(index.len(), 1);

        let found = index.ancestor(&id).expect("indexed header");
        assert_eq!(found.height(), 10);
        assert!(index.ancestor(&Hash256::ZERO).is_none());
    }

    #[test]
    fn test_header_serde() {
        let header = sample_header();
        let json = serde_json::to_string(&header).unwrap();
        let back: BlockHeader = serde_json::from_str(&json).unwrap();
        assert_eq!(back, header);

        let chained = ChainHeader::new(header, 5);
        let json = serde_json::to_string(&chained).unwrap();
        let back: ChainHeader = serde_json::from_str(&json).unwrap();
        assert_eq!(back, chained);
    }
}
