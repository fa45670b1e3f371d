//! Core types and algorithms for PoC validation
//!
//! This module contains the arithmetic and digest primitives, the plot
//! reconstruction engine, and the retargeting and verification logic.

pub mod deadline;
pub mod gensig;
mod hash256;
mod header;
pub mod retarget;
mod uint256;
pub mod verify;

pub use deadline::{calculate_deadline, scoop_number};
pub use gensig::{generation_signature, shabal_mix};
pub use hash256::Hash256;
pub use header::{AncestorLookup, BlockHeader, ChainHeader, HeaderBuilder, HeaderIndex};
pub use retarget::calculate_base_target;
pub use uint256::Uint256;
pub use verify::{is_valid_block, verify_block};

/// Constants fixed by the plot format
pub mod constants {
    /// Size of a Shabal-256 digest in bytes
    pub const HASH_SIZE: usize = 32;

    /// Number of hashes forming one scoop
    pub const HASHES_PER_SCOOP: usize = 2;

    /// Size of a scoop in bytes
    pub const SCOOP_SIZE: usize = HASHES_PER_SCOOP * HASH_SIZE;

    /// Number of scoops in a plot
    pub const SCOOPS_PER_PLOT: usize = 4096;

    /// Size of a plot in bytes (256 KiB)
    pub const PLOT_SIZE: usize = SCOOPS_PER_PLOT * SCOOP_SIZE;

    /// Upper bound on the input length of one fill-loop hash
    pub const HASH_CAP: usize = 4096;

    /// Starting base target of the PoC fork
    pub const INITIAL_BASE_TARGET: u64 = 18_325_193_796;

    /// Hard upper bound on the base target
    pub const MAX_BASE_TARGET: u64 = 18_325_193_796;
}
