//! The prover: sequential squaring plus the Pietrzak halving recursion.

use crate::{
    constants::modulus, crypto::Crypto, exponent::round_exponent, transcript::Transcript, VdfError,
};
use alloc::vec::Vec;
use num_bigint::BigUint;

/// Result of one evaluation: the delay output and its halving proof.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Evaluation {
    /// The output `y = (x²)^(2^(2^t)) mod N`.
    pub output: BigUint,
    /// The midpoints `u₁, …, u_{t−1}` in round order; empty for `t = 1`.
    pub proof: Vec<BigUint>,
}

/// Evaluates the delay function at seed `x` and difficulty `t`.
///
/// Computes `y = (x²)^(2^(2^t)) mod N` and then bisects the remaining
/// squarings `t − 1` times: round `i` emits the midpoint
/// `uᵢ = x_cur^(2^(2^(t−i) − 1))` and folds the two halves together with the
/// Fiat–Shamir challenge `rᵢ`, so that every `(x_cur, y_cur)` pair keeps the
/// shape of the original claim at half the difficulty.
///
/// The caller is expected to supply `x < N`; the arithmetic is modular
/// throughout either way. Fails only if a halving exponent cannot be
/// materialized (see [`VdfError::ExponentOverflow`]).
pub fn evaluate(x: &BigUint, t: u64, crypto: &dyn Crypto) -> Result<Evaluation, VdfError> {
    let n = modulus();
    let two = BigUint::from(2u32);

    let mut x_cur = x.modpow(&two, &n);
    // The full exponent is a 2^t-bit integer that dominates peak memory;
    // confine it so it is freed before the halving loop runs.
    let output = {
        let e = round_exponent(t, 0, false)?;
        x_cur.modpow(&e, &n)
    };

    let transcript = Transcript::new(crypto, x, &output);
    let mut y_cur = output.clone();
    let mut proof = Vec::with_capacity(t.saturating_sub(1) as usize);

    for round in 1..t {
        let e = round_exponent(t, round, true)?;
        let u = x_cur.modpow(&e, &n);
        let u_squared = u.modpow(&two, &n);
        let r = transcript.challenge(crypto, &u, round);

        // x_{i+1} = x_i^r · u², y_{i+1} = u²^r · y_i. Only the output leaves
        // the function, but y_cur is kept in step with the verifier's state.
        x_cur = x_cur.modpow(&r, &n) * &u_squared % &n;
        y_cur = u_squared.modpow(&r, &n) * y_cur % &n;

        proof.push(u);
    }

    Ok(Evaluation { output, proof })
}
