//! # Goldbach Core
//!
//! Exact ordered Goldbach representation counts G(N) and the two
//! Hardy-Littlewood predictors they are compared against:
//!
//! - a truncated series expansion around the leading term 2 C2 S(N) N / ln^2 N;
//! - the logarithmic integral 2 C2 S(N) * integral_2^{N-2} dt / (ln t ln(N - t)).
//!
//! A [`PrimeTable`] is sieved once at the largest N of a run and shared
//! read-only; everything else is a pure function of N, so different N can be
//! evaluated on different threads without coordination.

pub mod bias;
pub mod error;
pub mod integral;
pub mod pairs;
pub mod quadrature;
pub mod series;
pub mod sieve;
pub mod singular;

pub use bias::{evaluate_bias, relative_bias, Bias, BiasReport};
pub use error::{GoldbachError, Result};
pub use integral::{
    hardy_littlewood_integral, hardy_littlewood_integral_with, IntegralEstimate,
    DEFAULT_QUADRATURE_LIMIT,
};
pub use pairs::{count_goldbach_batch, count_goldbach_batch_with, count_goldbach_ordered};
pub use quadrature::{GaussKronrod, Integrator, QuadratureResult};
pub use series::{hardy_littlewood_series, DEFAULT_SERIES_ORDER};
pub use sieve::{generate_primes, PrimeBitmap, PrimeTable};
pub use singular::singular_series;

use serde::{Deserialize, Serialize};

/// Twin-prime constant C2 = prod over odd primes p of (1 - 1/(p-1)^2).
pub const TWIN_PRIME_CONSTANT: f64 = 0.660_161_815_846_869_57;

/// Both predictions and S(N) for one N, at default order and quadrature limit.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MethodComparison {
    pub n: u64,
    pub series: f64,
    pub integral: f64,
    pub singular_series: f64,
}

impl MethodComparison {
    /// |series - integral| / integral.
    pub fn relative_difference(&self) -> f64 {
        (self.series - self.integral).abs() / self.integral
    }
}

/// Evaluate both predictors for N side by side.
pub fn compare_methods(n: u64) -> Result<MethodComparison> {
    Ok(MethodComparison {
        n,
        series: hardy_littlewood_series(n, DEFAULT_SERIES_ORDER)?,
        integral: hardy_littlewood_integral(n, DEFAULT_QUADRATURE_LIMIT)?,
        singular_series: singular_series(n)?,
    })
}

/// Exact count, both predictions and their biases for one N, reusing a
/// shared prime table.
pub fn evaluate_n(
    n: u64,
    table: &PrimeTable,
    series_order: usize,
    quadrature_limit: usize,
) -> Result<BiasReport> {
    let exact = count_goldbach_ordered(n, Some(table))?;
    let series = hardy_littlewood_series(n, series_order)?;
    let integral = hardy_littlewood_integral(n, quadrature_limit)?;
    evaluate_bias(n, exact, series, integral)
}
