//! Pietrzak VDF prover over the RSA-2048 group.
//!
//! Given a difficulty `t` and a seed `x`, [`evaluate`] computes
//! `y = (x²)^(2^(2^t)) mod N` together with the halving proof
//! `u₁, …, u_{t−1}` that lets a verifier check the claim in `O(t)` modular
//! exponentiations instead of redoing the `2^t` sequential squarings.
//!
//! Challenges are derived by Fiat–Shamir over Keccak-256 (the Ethereum
//! variant, not SHA3-256) with a byte layout that is bit-exact with the
//! on-chain verifier; see [`transcript`] and [`codec`] for the exact
//! packing rules.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod codec;
pub mod constants;
pub mod crypto;
pub mod evaluator;
mod exponent;
pub mod transcript;

pub use constants::{modulus, MODULUS_BYTES, MODULUS_SIZE, UINT256_SIZE};
pub use crypto::{Crypto, DefaultCrypto};
pub use evaluator::{evaluate, Evaluation};
pub use transcript::Transcript;

use core::fmt;

/// Errors surfaced while evaluating the delay function.
///
/// Exponent construction is the only fallible step of the protocol; the
/// Keccak oracle and the modular arithmetic are total.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum VdfError {
    /// The halving exponent `2^(2^k − s)` cannot be materialized because the
    /// shift amount `2^k − s` exceeds the big-integer backend's capacity.
    ExponentOverflow {
        /// The failing `k = t − i`.
        log2: u64,
    },
}

impl fmt::Display for VdfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExponentOverflow { log2 } => {
                write!(f, "exponent 2^(2^{log2}) exceeds big-integer capacity")
            }
        }
    }
}

impl core::error::Error for VdfError {}
