//! Truncated series form of the Hardy-Littlewood prediction.
//!
//!   r(N) ~ 2 C2 S(N) N / ln^2 N * prod_{k=1..order} (1 + a_k / ln^k N)
//!
//! The corrections compound multiplicatively onto the leading term. No
//! convergence check is made; the expansion is simply cut at `order`.

use crate::error::{ensure_goldbach_domain, GoldbachError, Result};
use crate::singular::singular_series;
use crate::TWIN_PRIME_CONSTANT;

/// Correction coefficients a_1 .. a_4.
pub const SERIES_COEFFICIENTS: [f64; 4] = [2.0, 2.0, 4.0 / 3.0, 2.0 / 3.0];

pub const DEFAULT_SERIES_ORDER: usize = 4;

/// Series prediction of G(N) with `order` corrections (0 = leading term).
pub fn hardy_littlewood_series(n: u64, order: usize) -> Result<f64> {
    ensure_goldbach_domain(n)?;
    if order > SERIES_COEFFICIENTS.len() {
        return Err(GoldbachError::InvalidArgument(format!(
            "series order must be in 0..={}, got {order}",
            SERIES_COEFFICIENTS.len()
        )));
    }

    let log_n = (n as f64).ln();
    let s = singular_series(n)?;
    let leading = 2.0 * TWIN_PRIME_CONSTANT * s * n as f64 / (log_n * log_n);

    Ok(SERIES_COEFFICIENTS
        .iter()
        .take(order)
        .zip(1..)
        .fold(leading, |acc, (&a, k)| acc * (1.0 + a / log_n.powi(k))))
}
