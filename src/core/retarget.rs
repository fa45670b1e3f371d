//! Base-target retargeting
//!
//! The required base target for a candidate block depends on where its
//! height falls relative to the PoC genesis height `g` (fork height plus
//! the god-mode bootstrap):
//!
//! - up to `g + 3`: the fixed initial base target;
//! - below `g + 2700`: a four-block average scaled by the time the four
//!   blocks took, clamped to ±10% per step;
//! - from `g + 2700`: a 24-block incremental average scaled by a clamped
//!   timespan, bounded to ±20% of the parent's target.
//!
//! Ancestors are resolved through [`AncestorLookup`]; an unknown ancestor
//! stops the walk and the accumulator gathered so far is used.

use crate::config::ChainParams;
use crate::core::{AncestorLookup, BlockHeader, ChainHeader};
use tracing::trace;

/// Number of blocks averaged by the short-window regime
const SHORT_WINDOW: u64 = 4;

/// Expected seconds per block
const BLOCK_SECONDS: i64 = 5 * 60;

/// Compute the base target required of the block extending `prev`.
///
/// The result is always positive and never exceeds
/// [`ChainParams::max_base_target`]. `lookup` may be consulted for up to
/// 24 ancestors; it is never consulted in the bootstrap regime.
pub fn calculate_base_target(
    params: &ChainParams,
    prev: &ChainHeader,
    block: &BlockHeader,
    lookup: &dyn AncestorLookup,
) -> u64 {
    debug_assert!(prev.height() + 1 >= params.fork_height);
    let genesis_height = params.poc_genesis_height();
    let height = prev.height() + 1;

    if height <= genesis_height || height < genesis_height + 4 {
        // genesis and god-mode blocks, plus the first three PoC blocks
        return params.initial_base_target;
    }

    if height < genesis_height + 2700 {
        short_window_target(params, prev, block, lookup)
    } else {
        long_window_target(params, prev, block, lookup)
    }
}

/// Average the last four base targets and scale by the observed timespan.
///
/// The walk always divides by four, even when it was cut short by an
/// unknown ancestor; the resulting under-average matches the deployed
/// network.
fn short_window_target(
    params: &ChainParams,
    prev: &ChainHeader,
    block: &BlockHeader,
    lookup: &dyn AncestorLookup,
) -> u64 {
    let mut avg = prev.bits();
    let mut last = prev;
    for _ in 1..SHORT_WINDOW {
        match lookup.ancestor(last.prev_block_hash()) {
            Some(parent) => {
                last = parent;
                avg += parent.bits();
            }
            None => break,
        }
    }
    avg /= SHORT_WINDOW;

    let cur = avg;
    let diff_time = i64::from(block.timestamp()) - i64::from(last.timestamp());

    let mut new = cur.wrapping_mul(diff_time as u64) / (BLOCK_SECONDS as u64 * SHORT_WINDOW);
    if new > params.max_base_target {
        new = params.max_base_target;
    }
    if new < cur * 9 / 10 {
        new = cur * 9 / 10;
    }
    if new == 0 {
        new = 1;
    }
    if new > cur * 11 / 10 {
        new = cur * 11 / 10;
    }
    trace!(cur, diff_time, new, "short-window retarget");
    new
}

/// Incrementally average up to 24 ancestor base targets and scale by the
/// clamped timespan since the oldest block reached.
fn long_window_target(
    params: &ChainParams,
    prev: &ChainHeader,
    block: &BlockHeader,
    lookup: &dyn AncestorLookup,
) -> u64 {
    let mut avg = prev.bits();
    let mut last = prev;
    for counter in 1..=24u64 {
        match lookup.ancestor(last.prev_block_hash()) {
            Some(parent) => {
                last = parent;
                avg = (avg * counter + parent.bits()) / (counter + 1);
            }
            None => break,
        }
    }

    let target_timespan = BLOCK_SECONDS * 24;
    let mut diff_time = i64::from(block.timestamp()) - i64::from(last.timestamp());
    if diff_time < target_timespan / 2 {
        diff_time = target_timespan / 2;
    }
    if diff_time > target_timespan * 2 {
        diff_time = target_timespan * 2;
    }

    let cur = prev.bits();
    let mut new = avg * diff_time as u64 / target_timespan as u64;
    if new > params.max_base_target {
        new = params.max_base_target;
    }
    if new == 0 {
        new = 1;
    }
    if new < cur * 8 / 10 {
        new = cur * 8 / 10;
    }
    if new > cur * 12 / 10 {
        new = cur * 12 / 10;
    }
    trace!(cur, avg, diff_time, new, "long-window retarget");
    new
}
