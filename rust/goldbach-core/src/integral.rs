//! Logarithmic-integral form of the Hardy-Littlewood prediction.
//!
//!   r(N) ~ 2 C2 S(N) * integral_2^{N-2} dt / (ln t * ln(N - t))

use crate::error::{ensure_goldbach_domain, GoldbachError, Result};
use crate::quadrature::{GaussKronrod, Integrator, QuadratureResult};
use crate::singular::singular_series;
use crate::TWIN_PRIME_CONSTANT;
use serde::{Deserialize, Serialize};

pub const DEFAULT_QUADRATURE_LIMIT: usize = 200;

/// Integral prediction together with the quadrature diagnostics behind it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IntegralEstimate {
    pub n: u64,
    pub prediction: f64,
    pub quadrature: QuadratureResult,
}

/// Kernel 1 / (ln t * ln(N - t)), defined as zero at and outside the open
/// interval (2, N - 2).
pub fn kernel(n: f64, t: f64) -> f64 {
    if t <= 2.0 || t >= n - 2.0 {
        return 0.0;
    }
    1.0 / (t.ln() * (n - t).ln())
}

/// Integral prediction of G(N) using adaptive quadrature with at most
/// `quadrature_limit` subintervals.
pub fn hardy_littlewood_integral(n: u64, quadrature_limit: usize) -> Result<f64> {
    if quadrature_limit == 0 {
        return Err(GoldbachError::InvalidArgument(
            "quadrature limit must be positive".into(),
        ));
    }
    let estimate = hardy_littlewood_integral_with(n, &GaussKronrod::with_limit(quadrature_limit))?;
    Ok(estimate.prediction)
}

/// Integral prediction with a caller-supplied integrator.
///
/// N = 4 is rejected: the integration interval [2, N - 2] collapses to a
/// point and the prediction would be zero.
pub fn hardy_littlewood_integral_with<I: Integrator>(
    n: u64,
    integrator: &I,
) -> Result<IntegralEstimate> {
    ensure_goldbach_domain(n)?;
    if n < 6 {
        return Err(GoldbachError::InvalidArgument(format!(
            "integral prediction needs N >= 6 for a non-empty interval, got {n}"
        )));
    }

    let s = singular_series(n)?;
    let upper = n as f64 - 2.0;
    let quadrature = integrator.integrate(|t| kernel(n as f64, t), 2.0, upper);

    if quadrature.converged {
        log::debug!(
            "N = {}: integral {:.6} over {} subintervals (abs error {:.2e})",
            n,
            quadrature.value,
            quadrature.intervals,
            quadrature.abs_error
        );
    } else {
        log::warn!(
            "N = {}: quadrature stopped at {} subintervals without meeting tolerance (abs error {:.2e})",
            n,
            quadrature.intervals,
            quadrature.abs_error
        );
    }

    Ok(IntegralEstimate {
        n,
        prediction: 2.0 * TWIN_PRIME_CONSTANT * s * quadrature.value,
        quadrature,
    })
}
