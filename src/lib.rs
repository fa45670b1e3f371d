//! # PoC Consensus Core
//!
//! Proof-of-Capacity consensus validation for a Bitcoin-family chain.
//! For every candidate block extending a known tip this crate answers one
//! question: is the header a valid PoC solution, and what is the next
//! required base target?
//!
//! ## Features
//!
//! - **Fixed-width 256-bit arithmetic** with the compact difficulty codec
//! - **Shabal-256 plot reconstruction** and deadline evaluation
//! - **Base-target retargeting** across three height regimes
//! - **Typed rejection reasons** for every failed verification predicate
//!
//! ## Architecture
//!
//! The crate is layered bottom-up: [`Uint256`] and [`Hash256`] are the
//! arithmetic and digest primitives, [`crate::core::gensig`] composes the
//! Shabal-256 stream, [`crate::core::deadline`] reconstructs the plot and
//! scores the candidate, and [`crate::core::retarget`] /
//! [`crate::core::verify`] make the consensus decision. Ancestor headers
//! are reached through the [`crate::core::AncestorLookup`] seam supplied
//! by the host.

#![warn(
    missing_docs,
    rust_2018_idioms,
    unused_lifetimes,
    unused_qualifications,
    clippy::all
)]
#![forbid(unsafe_code)]

pub mod config;
pub mod core;
pub mod error;
pub mod utils;

pub use crate::config::ChainParams;
pub use crate::core::{BlockHeader, ChainHeader, Hash256, Uint256};
pub use crate::error::{Error, InvalidBlock, Result};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        config::ChainParams,
        core::{
            calculate_base_target, calculate_deadline, is_valid_block, verify_block,
            AncestorLookup, BlockHeader, ChainHeader, Hash256, HeaderBuilder, HeaderIndex,
            Uint256,
        },
        error::{Error, InvalidBlock, Result},
    };
}
