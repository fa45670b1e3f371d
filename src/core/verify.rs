//! Candidate header verification
//!
//! Stateless: each call works only from the `(prev, block, lookup)`
//! triple. Rejections are returned as [`InvalidBlock`] values; the core
//! neither logs nor panics on bad input data.

use crate::config::ChainParams;
use crate::core::{
    calculate_base_target, calculate_deadline, AncestorLookup, BlockHeader, ChainHeader,
};
use crate::error::InvalidBlock;

/// Check whether `block` is a valid PoC solution extending `prev`.
///
/// The predicates run in order: minimum timestamp, base-target equality
/// against the retarget, god-mode acceptance for heights below the PoC
/// genesis, and finally the deadline. The first failed predicate is
/// returned.
pub fn verify_block(
    params: &ChainParams,
    prev: &ChainHeader,
    block: &BlockHeader,
    lookup: &dyn AncestorLookup,
) -> Result<(), InvalidBlock> {
    if block.timestamp() < params.min_block_timestamp {
        return Err(InvalidBlock::TimestampTooLow {
            timestamp: block.timestamp(),
            minimum: params.min_block_timestamp,
        });
    }

    let expected = calculate_base_target(params, prev, block, lookup);
    if block.bits() != expected {
        return Err(InvalidBlock::BitsMismatch {
            bits: block.bits(),
            expected,
        });
    }

    if prev.height() + 1 < params.poc_genesis_height() {
        // god mode: any well-formed header is accepted
        return Ok(());
    }

    let deadline = calculate_deadline(params, prev, block);
    if u64::from(block.timestamp()) <= u64::from(prev.timestamp()).wrapping_add(deadline) {
        return Err(InvalidBlock::DeadlineNotMet {
            deadline,
            timestamp: block.timestamp(),
            parent_timestamp: prev.timestamp(),
        });
    }

    Ok(())
}

/// Boolean form of [`verify_block`]
pub fn is_valid_block(
    params: &ChainParams,
    prev: &ChainHeader,
    block: &BlockHeader,
    lookup: &dyn AncestorLookup,
) -> bool {
    verify_block(params, prev, block, lookup).is_ok()
}
