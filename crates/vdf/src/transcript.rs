//! Fiat–Shamir transcript for the halving rounds.

use crate::{
    codec::{pack, pack_residue, pack_round},
    constants::{MODULUS_SIZE, UINT256_SIZE},
    crypto::Crypto,
};
use num_bigint::BigUint;

const DIGEST_SIZE: usize = 32;

/// Transcript bound to one `(x, y)` claim.
///
/// The prefix digest `H(pack32(x) ∥ pack256(y))` is computed once and reused
/// by every round challenge, mirroring the verifier's transcript exactly.
#[derive(Clone, Debug)]
pub struct Transcript {
    xy_digest: [u8; DIGEST_SIZE],
}

impl Transcript {
    /// Binds the transcript to the seed `x` and the claimed output `y`.
    pub fn new(crypto: &dyn Crypto, x: &BigUint, y: &BigUint) -> Self {
        let mut input = [0u8; UINT256_SIZE + MODULUS_SIZE];
        input[..UINT256_SIZE].copy_from_slice(&pack::<UINT256_SIZE>(x));
        input[UINT256_SIZE..].copy_from_slice(&pack_residue(y));
        Self {
            xy_digest: crypto.keccak256(&input),
        }
    }

    /// Derives the round-`round` challenge from the midpoint `u`.
    ///
    /// The digest of `H_xy ∥ pack256(u) ∥ pack32(round)` is interpreted as a
    /// 256-bit big-endian integer. It is deliberately not reduced modulo `N`;
    /// the modular exponentiations that consume it reduce as needed.
    pub fn challenge(&self, crypto: &dyn Crypto, u: &BigUint, round: u64) -> BigUint {
        let mut input = [0u8; DIGEST_SIZE + MODULUS_SIZE + UINT256_SIZE];
        input[..DIGEST_SIZE].copy_from_slice(&self.xy_digest);
        input[DIGEST_SIZE..DIGEST_SIZE + MODULUS_SIZE].copy_from_slice(&pack_residue(u));
        input[DIGEST_SIZE + MODULUS_SIZE..].copy_from_slice(&pack_round(round));
        BigUint::from_bytes_be(&crypto.keccak256(&input))
    }
}
