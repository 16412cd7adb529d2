//! Weighted (categorical) selection of a single contestant from a [Distribution].
//!
//! The random source is always supplied by the caller: [seeded] yields a reproducible source, so the same
//! distribution and seed always select the same contestant; [entropy] yields one seeded from the clock.

use tinyrand::{Rand, Seeded, StdRand};
use tinyrand_std::clock_seed::ClockSeed;
use tracing::debug;

use crate::error::{InvalidField, WrongBooksum};
use crate::odds::Distribution;
use crate::probs::SliceExt;

/// Permitted departure of a distribution's sum from 1.
pub const TOLERANCE: f64 = 1e-6;

pub fn seeded(seed: u64) -> StdRand {
    StdRand::seed(seed)
}

pub fn entropy() -> StdRand {
    StdRand::seed(ClockSeed::default().next_u64())
}

/// Draws one contestant from `dist`, walking the entries in declaration order and returning the
/// first whose cumulative probability exceeds a uniform variate in `[0, 1)`.
pub fn select<'a>(dist: &'a Distribution, rand: &mut impl Rand) -> Result<&'a str, InvalidField> {
    if dist.is_empty() {
        return Err(InvalidField::EmptyField);
    }
    let probs = dist.probs();
    check_booksum(&probs)?;
    validate_probs(dist)?;

    let random = random_f64(rand);
    let cumulative = probs.cumulative();
    let index = cumulative
        .iter()
        .position(|&cumulative| cumulative > random)
        // the final cumulative value may fall marginally short of 1
        .unwrap_or_else(|| probs.iter().rposition(|&prob| prob > 0.0).unwrap_or(probs.len() - 1));

    let winner = dist.entries()[index].name.as_str();
    debug!("random: {random:.6}, selected {winner} at index {index}");
    Ok(winner)
}

/// Draws from `dist` using a source seeded with `seed`, or an entropy-backed source if no seed is given.
pub fn predict_winner(dist: &Distribution, seed: Option<u64>) -> Result<&str, InvalidField> {
    match seed {
        None => select(dist, &mut entropy()),
        Some(seed) => select(dist, &mut seeded(seed)),
    }
}

fn check_booksum(probs: &[f64]) -> Result<(), WrongBooksum> {
    let actual = probs.sum();
    if !actual.is_finite() || (actual - 1.0).abs() > TOLERANCE {
        Err(WrongBooksum {
            actual,
            tolerance: TOLERANCE,
        })
    } else {
        Ok(())
    }
}

/// Every probability must lie in `[0, 1]`; NaN fails the range check.
fn validate_probs(dist: &Distribution) -> Result<(), InvalidField> {
    match dist
        .entries()
        .iter()
        .find(|entry| !(0.0..=1.0).contains(&entry.prob))
    {
        None => Ok(()),
        Some(entry) => Err(InvalidField::InvalidProbability {
            name: entry.name.clone(),
            prob: entry.prob,
        }),
    }
}

/// A uniform variate in `[0, 1)` built from the upper 53 bits of the next `u64`.
#[inline]
fn random_f64(rand: &mut impl Rand) -> f64 {
    (rand.next_u64() >> 11) as f64 / (1u64 << 53) as f64
}
