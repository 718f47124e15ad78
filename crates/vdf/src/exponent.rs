//! Construction of the per-round halving exponents.

use crate::VdfError;
use num_bigint::BigUint;
use num_traits::One;

/// Returns `2^(2^(t - i) - s)` with `s ∈ {0, 1}` encoded by `sqrt`.
///
/// With `i = 0, sqrt = false` this is the full exponent `2^(2^t)` that
/// produces the output `y`; with `i ≥ 1, sqrt = true` it is the round-`i`
/// exponent `2^(2^(t-i) - 1)`, half the remaining squarings minus one.
///
/// The result is materialized as a `2^(t-i)`-bit integer. Shift amounts
/// beyond 63 bits are rejected up front; below that bound the allocation
/// itself is the backend's limit.
pub(crate) fn round_exponent(t: u64, i: u64, sqrt: bool) -> Result<BigUint, VdfError> {
    debug_assert!(i <= t);
    let log2 = t - i;
    if log2 >= u64::BITS as u64 {
        return Err(VdfError::ExponentOverflow { log2 });
    }
    let tau = 1u64 << log2;
    Ok(BigUint::one() << (tau - sqrt as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_exponents() {
        // 2^(2^3)
        assert_eq!(round_exponent(3, 0, false).unwrap(), BigUint::from(256u32));
        // 2^(2^2 - 1)
        assert_eq!(round_exponent(3, 1, true).unwrap(), BigUint::from(8u32));
        // 2^(2^1 - 1)
        assert_eq!(round_exponent(3, 2, true).unwrap(), BigUint::from(2u32));
        // i = t collapses to 2^(2^0 - 1) = 1
        assert_eq!(round_exponent(3, 3, true).unwrap(), BigUint::one());
        assert_eq!(round_exponent(1, 0, false).unwrap(), BigUint::from(4u32));
    }

    #[test]
    fn exponent_bit_width() {
        // 2^(2^20) occupies exactly 2^20 + 1 bits.
        let e = round_exponent(20, 0, false).unwrap();
        assert_eq!(e.bits(), (1 << 20) + 1);
    }

    #[test]
    fn oversized_shift_is_rejected() {
        assert_eq!(
            round_exponent(64, 0, false),
            Err(VdfError::ExponentOverflow { log2: 64 })
        );
        assert_eq!(
            round_exponent(100, 20, true),
            Err(VdfError::ExponentOverflow { log2: 80 })
        );
    }
}
