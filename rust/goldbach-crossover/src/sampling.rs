//! Stratified sampling of even N across logarithmic scales.
//!
//! Density is highest around the crossover region (10^4 .. 10^6) and falls
//! off towards the extremes, with a few fixed milestones always included
//! when in range.

use crate::error::CrossoverError;
use std::collections::BTreeSet;

/// Half-open strata `[start, end)` sampled every `step`.
const STRATA: [(u64, u64, u64); 5] = [
    (1_000, 10_000, 500),
    (10_000, 100_000, 1_000),
    (100_000, 1_000_000, 5_000),
    (1_000_000, 10_000_000, 50_000),
    (10_000_000, 100_000_000, 500_000),
];

const MILESTONES: [u64; 9] = [
    1_000,
    10_000,
    100_000,
    1_000_000,
    10_000_000,
    54_950_000,
    70_000_000,
    97_000_000,
    100_000_000,
];

/// Even sampling points within `[min_n, max_n]`, ascending and distinct.
pub fn generate_sampling_points(min_n: u64, max_n: u64) -> Result<Vec<u64>, CrossoverError> {
    if min_n > max_n {
        return Err(CrossoverError::InvalidRange {
            min: min_n,
            max: max_n,
        });
    }

    let points: BTreeSet<u64> = STRATA
        .iter()
        .flat_map(|&(start, end, step)| (start..end).step_by(step as usize))
        .chain(MILESTONES)
        .filter(|&n| n % 2 == 0 && (min_n..=max_n).contains(&n))
        .collect();

    Ok(points.into_iter().collect())
}
