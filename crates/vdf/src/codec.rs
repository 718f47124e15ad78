//! Fixed-width big-endian packing of transcript fields.
//!
//! Every value hashed into the Fiat–Shamir transcript is packed into a
//! fixed-width, left-zero-padded big-endian buffer: residues modulo `N`
//! into [`MODULUS_SIZE`] bytes, the seed and the round index into
//! [`UINT256_SIZE`] bytes. Packing goes through the big integer's byte
//! export, so values whose hex form has an odd digit count keep their
//! leading nibble.

use crate::constants::{MODULUS_SIZE, UINT256_SIZE};
use core::cmp::min;
use num_bigint::BigUint;

/// Left padding until `LEN`. If data is more than `LEN`, the leading bytes
/// are truncated and the value is kept modulo `2^(8 * LEN)`.
#[inline]
pub fn left_pad<const LEN: usize>(data: &[u8]) -> [u8; LEN] {
    let mut padded = [0; LEN];
    let end = min(LEN, data.len());
    padded[LEN - end..].copy_from_slice(&data[data.len() - end..]);
    padded
}

/// Packs `v` big-endian into a `LEN`-byte buffer, left-padded with zeros.
///
/// Callers guarantee `v < 2^(8 * LEN)`; larger values are truncated to their
/// low `LEN` bytes.
#[inline]
pub fn pack<const LEN: usize>(v: &BigUint) -> [u8; LEN] {
    left_pad::<LEN>(&v.to_bytes_be())
}

/// Packs a residue modulo `N` into its transcript width.
#[inline]
pub fn pack_residue(v: &BigUint) -> [u8; MODULUS_SIZE] {
    pack::<MODULUS_SIZE>(v)
}

/// Packs a round index into its transcript width, big-endian.
#[inline]
pub fn pack_round(round: u64) -> [u8; UINT256_SIZE] {
    let mut padded = [0; UINT256_SIZE];
    padded[UINT256_SIZE - 8..].copy_from_slice(&round.to_be_bytes());
    padded
}
