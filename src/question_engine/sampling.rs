//! Random primitives shared by the generators: a bounded integer draw and a
//! weighted choice over a [`ProbabilityMap`].
//!
//! Both take the RNG by `&mut` so a seeded `StdRng` reproduces the exact same
//! sequence of draws.

use rand::Rng;
use tracing::{debug, trace};

use crate::question_engine::{
    error::{QuestionError, Result},
    models::ProbabilityMap,
};

/// Uniform integer in `[min, max)`, computed as `min + floor(u * (max - min))`.
///
/// Both bounds must be whole numbers inside the `i64` range with `min < max`.
/// Consumes exactly one `f64` sample from `rng`.
pub fn random_in_range<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> Result<i64> {
    if !is_whole(min) || !is_whole(max) || min >= max {
        return Err(QuestionError::invalid_range(min, max));
    }

    let u: f64 = rng.gen();
    let value = min + (u * (max - min)).floor();
    Ok(value as i64)
}

// i64::MAX is not representable; as f64 it rounds up to 2^63, hence `<`.
fn is_whole(x: f64) -> bool {
    x.is_finite() && x.fract() == 0.0 && x >= i64::MIN as f64 && x < i64::MAX as f64
}

/// Pick one label with probability proportional to its weight.
///
/// Entries with a non-finite or non-positive weight are skipped; `weights`
/// itself is left untouched. Labels are walked in insertion order, so the
/// result is a pure function of the map and the single sample drawn.
pub fn choose_weighted<R, T>(rng: &mut R, weights: &ProbabilityMap<T>) -> Result<T>
where
    R: Rng + ?Sized,
    T: Clone,
{
    let valid = weights.valid_entries();
    if valid.len() < weights.len() {
        debug!(
            dropped = weights.len() - valid.len(),
            kept = valid.len(),
            "ignoring invalid weights"
        );
    }

    let Some(&(last, _)) = valid.last() else {
        return Err(QuestionError::configuration(
            "probability map must contain at least one finite, positive weight",
        ));
    };

    let total: f64 = valid.iter().map(|(_, w)| w).sum();
    let r: f64 = rng.gen();

    match cumulative_pick(valid.iter().map(|(_, w)| w / total), r) {
        Some(idx) => Ok(valid[idx].0.clone()),
        None => {
            // Rounding kept the running total at or below r.
            trace!(r, "weighted choice fell back to last entry");
            Ok(last.clone())
        }
    }
}

/// Index of the first normalized weight whose running total strictly exceeds `r`.
fn cumulative_pick(normalized: impl Iterator<Item = f64>, r: f64) -> Option<usize> {
    let mut running = 0.0;
    for (idx, p) in normalized.enumerate() {
        running += p;
        if running > r {
            return Some(idx);
        }
    }
    None
}
