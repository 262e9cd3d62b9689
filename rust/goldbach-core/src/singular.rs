//! Singular series S(N) of the Hardy-Littlewood Goldbach formula.
//!
//!   S(N) = prod over odd primes p | N of (1 - 1/(p-1)^2) / (1 - 2/(p-1)^2)
//!
//! The product depends only on the distinct odd primes dividing N, so it is
//! evaluated from its own trial-division factorization of the odd part of
//! N/2 and never consults a prime table.

use crate::error::{GoldbachError, Result};
use num_integer::Integer;

/// Compute S(N) for even N.
///
/// Factors are multiplied in ascending order of discovery so repeated calls
/// round identically.
pub fn singular_series(n: u64) -> Result<f64> {
    if n.is_odd() {
        return Err(GoldbachError::InvalidArgument(format!(
            "singular series requires even N, got {n}"
        )));
    }
    if n == 0 {
        return Err(GoldbachError::InvalidArgument(
            "singular series requires positive N".into(),
        ));
    }
    Ok(odd_prime_factors(n / 2)
        .into_iter()
        .map(local_factor)
        .product())
}

/// The local factor contributed by one odd prime p.
pub fn local_factor(p: u64) -> f64 {
    debug_assert!(p >= 3 && p.is_odd());
    let d = ((p - 1) as f64).powi(2);
    (1.0 - 1.0 / d) / (1.0 - 2.0 / d)
}

/// Distinct odd prime factors of `m`, ascending.
pub fn odd_prime_factors(mut m: u64) -> Vec<u64> {
    let mut factors = Vec::new();
    if m == 0 {
        return factors;
    }
    while m.is_even() {
        m /= 2;
    }

    let mut p = 3u64;
    while p * p <= m {
        if m % p == 0 {
            factors.push(p);
            while m % p == 0 {
                m /= p;
            }
        }
        p += 2;
    }

    // Whatever survives trial division up to its square root is prime.
    if m > 1 {
        factors.push(m);
    }
    factors
}
