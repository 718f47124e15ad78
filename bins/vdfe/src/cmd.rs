//! Command-line surface of the prover.

use clap::Parser;
use num_bigint::BigUint;
use num_traits::Num;
use std::io::{self, Write};
use std::time::Instant;
use vdf::DefaultCrypto;

/// Errors reported on stderr with a non-zero exit code.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("seed is not an unprefixed hexadecimal integer")]
    InvalidSeed,
    #[error(transparent)]
    Vdf(#[from] vdf::VdfError),
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Evaluates the delay function and prints `y` followed by the proof
/// elements, one lowercase hex value per line.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cmd {
    /// Difficulty parameter `t`; the output attests 2^t sequential squarings
    #[arg(value_parser = clap::value_parser!(u64).range(1..))]
    difficulty: u64,
    /// Seed `x` as a hexadecimal integer, no 0x prefix, reduced below N
    seed: String,
}

impl Cmd {
    /// Runs the evaluation.
    pub fn run(&self) -> Result<(), Error> {
        let x = BigUint::from_str_radix(self.seed.trim(), 16).map_err(|_| Error::InvalidSeed)?;

        let started = Instant::now();
        let evaluation = vdf::evaluate(&x, self.difficulty, &DefaultCrypto)?;
        eprintln!(
            "difficulty {} evaluated in {:?}",
            self.difficulty,
            started.elapsed()
        );

        let mut stdout = io::stdout().lock();
        writeln!(stdout, "{}", evaluation.output.to_str_radix(16))?;
        for u in &evaluation.proof {
            writeln!(stdout, "{}", u.to_str_radix(16))?;
        }
        Ok(())
    }
}
