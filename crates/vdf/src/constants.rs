//! Process-wide constants of the evaluation group.

use hex_literal::hex;
use num_bigint::BigUint;

/// Byte width of a residue modulo [`MODULUS_BYTES`] in the transcript.
pub const MODULUS_SIZE: usize = 256;

/// Byte width of the seed and of the round index in the transcript.
pub const UINT256_SIZE: usize = 32;

/// The 2048-bit modulus `N`, big-endian.
///
/// This is RSA-2048 from the [RSA Factoring Challenge], a composite of
/// unknown factorization, which makes the residues a group of unknown order.
///
/// [RSA Factoring Challenge]: https://en.wikipedia.org/wiki/RSA_Factoring_Challenge
pub const MODULUS_BYTES: [u8; MODULUS_SIZE] = hex!(
    "c7970ceedcc3b0754490201a7aa613cd73911081c790f5f1a8726f463550bb5b"
    "7ff0db8e1ea1189ec72f93d1650011bd721aeeacc2acde32a04107f0648c2813"
    "a31f5b0b7765ff8b44b4b6ffc93384b646eb09c7cf5e8592d40ea33c80039f35"
    "b4f14a04b51f7bfd781be4d1673164ba8eb991c2c4d730bbbe35f592bdef524a"
    "f7e8daefd26c66fc02c479af89d64d373f442709439de66ceb955f3ea37d5159"
    "f6135809f85334b5cb1813addc80cd05609f10ac6a95ad65872c909525bdad32"
    "bc729592642920f24c61dc5b3c3b7923e56b16a4d9d373d8721f24a3fc0f1b31"
    "31f55615172866bccc30f95054c824e733a5eb6817f7bc16399d48c6361cc7e5"
);

/// Returns the modulus `N` as a big integer.
pub fn modulus() -> BigUint {
    BigUint::from_bytes_be(&MODULUS_BYTES)
}
