//! Plot reconstruction and deadline evaluation
//!
//! A verifier cannot trust the miner's plot file, so it rebuilds the
//! relevant plot from `(plotseed, nonce)` and scores the candidate scoop
//! against the parent's base target. The whole computation is one
//! synchronous pass over a 256 KiB working buffer.

use crate::config::ChainParams;
use crate::core::constants::{HASH_CAP, HASH_SIZE, PLOT_SIZE, SCOOPS_PER_PLOT, SCOOP_SIZE};
use crate::core::{generation_signature, shabal_mix, BlockHeader, ChainHeader, Hash256, Uint256};
use shabal::{Digest, Shabal256};
use tracing::trace;

/// Select the scoop index for a height.
///
/// The height enters the mix big-endian; the digest is reinterpreted as a
/// little-endian integer and reduced modulo the scoop count. The result is
/// always in `[0, 4096)`.
pub fn scoop_number(gen_sig: &Hash256, height: u32) -> u32 {
    let mix = i64::from_le_bytes((height as i64).to_be_bytes());
    let digest = shabal_mix(gen_sig, mix);
    Uint256::from(&digest).rem_u32(SCOOPS_PER_PLOT as u32)
}

/// Compute the deadline, in seconds, of a candidate block.
///
/// Heights up to and including the PoC genesis height are god-mode blocks
/// with a deadline of zero. Otherwise the plot for the candidate's
/// `(plotseed, nonce)` is reconstructed and the scoop selected by the
/// parent's generation signature is scored: the deadline is the scoop
/// digest's low 64 bits divided by the parent's base target.
///
/// Deterministic for fixed inputs on every platform; byte order never
/// depends on the host.
pub fn calculate_deadline(params: &ChainParams, prev: &ChainHeader, block: &BlockHeader) -> u64 {
    if prev.height() + 1 <= params.poc_genesis_height() {
        // genesis and god-mode blocks
        return 0;
    }

    let gen_sig = generation_signature(prev.header());
    let scoop = scoop_number(&gen_sig, prev.height() + 1) as usize;
    let addr = block.plotseed().to_be_bytes();
    let nonce = block.nonce().to_be_bytes();
    trace!(gen_sig = %gen_sig, scoop, "reconstructing plot");

    // working buffer: plot followed by the 16-byte (addr, nonce) seed
    let mut gendata = vec![0u8; PLOT_SIZE + 16];
    gendata[PLOT_SIZE..PLOT_SIZE + 8].copy_from_slice(&addr);
    gendata[PLOT_SIZE + 8..].copy_from_slice(&nonce);

    // fill backwards: each hash covers at most HASH_CAP trailing bytes
    let mut i = PLOT_SIZE;
    while i > 0 {
        let len = (PLOT_SIZE + 16 - i).min(HASH_CAP);
        let mut hasher = Shabal256::new();
        hasher.update(&gendata[i..i + len]);
        let digest: [u8; 32] = hasher.finalize().into();
        gendata[i - HASH_SIZE..i].copy_from_slice(&digest);
        i -= HASH_SIZE;
    }

    let mut hasher = Shabal256::new();
    hasher.update(&gendata[..]);
    let base: [u8; 32] = hasher.finalize().into();

    // whiten the plot in place
    for (i, byte) in gendata[..PLOT_SIZE].iter_mut().enumerate() {
        *byte ^= base[i % HASH_SIZE];
    }

    let mut hasher = Shabal256::new();
    hasher.update(gen_sig.as_bytes());
    hasher.update(&gendata[scoop * SCOOP_SIZE..(scoop + 1) * SCOOP_SIZE]);
    let hit = Hash256::from_bytes(hasher.finalize().into()).read_u64_le(0);

    let deadline = hit / prev.bits();
    trace!(hit, base_target = prev.bits(), deadline, "deadline computed");
    deadline
}
