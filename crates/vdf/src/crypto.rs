//! Hash oracle used for Fiat–Shamir challenge derivation.

/// Hash oracle for the transcript.
///
/// The protocol treats the hash as a black box `H(bytes) → 32 bytes`. The
/// only requirement for interoperability is that it matches the verifier's
/// primitive: Keccak-256 with the original (pre-NIST) padding, the Ethereum
/// variant, not SHA3-256.
pub trait Crypto {
    /// Compute the Keccak-256 digest of `input`.
    fn keccak256(&self, input: &[u8]) -> [u8; 32];
}

/// Default oracle backed by [`alloy_primitives::keccak256`].
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultCrypto;

impl Crypto for DefaultCrypto {
    fn keccak256(&self, input: &[u8]) -> [u8; 32] {
        alloy_primitives::keccak256(input).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn keccak_not_sha3() {
        // Keccak-256 of the empty string differs from SHA3-256 of the empty
        // string in the padding byte.
        assert_eq!(
            DefaultCrypto.keccak256(b""),
            hex!("c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470")
        );
        assert_eq!(
            DefaultCrypto.keccak256(b"hello"),
            hex!("1c8aff950685c2ed4bc3174f3472287b56d9517b9c948127319a09a7a36deac8")
        );
    }
}
