//! Exact ordered Goldbach pair counts.
//!
//! G(N) counts ordered pairs (p, q) of primes with p + q = N. For N = 10 the
//! pairs (3, 7), (5, 5) and (7, 3) give G(10) = 3: distinct primes count in
//! both orders and a prime N/2 counts once.

use crate::error::{ensure_goldbach_domain, GoldbachError, Result};
use crate::sieve::{generate_primes, PrimeTable};
use rayon::prelude::*;

/// Count ordered Goldbach pairs for a single even N >= 4.
///
/// With `primes = None` a table up to N is sieved for this call only; pass a
/// shared table when counting many N.
pub fn count_goldbach_ordered(n: u64, primes: Option<&PrimeTable>) -> Result<u64> {
    ensure_goldbach_domain(n)?;
    match primes {
        Some(table) => {
            ensure_covers(table, n)?;
            Ok(count_with_table(n, table))
        }
        None => Ok(count_with_table(n, &generate_primes(n))),
    }
}

/// Count ordered pairs for every N in `n_values`, sieving once up to
/// `max_n` (or the largest N when `None`).
///
/// Counts are returned positionally aligned with `n_values`.
pub fn count_goldbach_batch(n_values: &[u64], max_n: Option<u64>) -> Result<Vec<u64>> {
    for &n in n_values {
        ensure_goldbach_domain(n)?;
    }
    let Some(&largest) = n_values.iter().max() else {
        return Ok(Vec::new());
    };
    let limit = max_n.unwrap_or(largest);
    let table = generate_primes(limit);
    count_goldbach_batch_with(n_values, &table)
}

/// Batch count against a caller-owned table.
pub fn count_goldbach_batch_with(n_values: &[u64], table: &PrimeTable) -> Result<Vec<u64>> {
    for &n in n_values {
        ensure_goldbach_domain(n)?;
        ensure_covers(table, n)?;
    }
    Ok(n_values
        .par_iter()
        .map(|&n| count_with_table(n, table))
        .collect())
}

/// Core scan: every prime p < N with p <= N - 2, test N - p for membership.
///
/// Caller guarantees N is in the Goldbach domain and `table` covers N - 2.
pub(crate) fn count_with_table(n: u64, table: &PrimeTable) -> u64 {
    table
        .primes_below(n)
        .iter()
        .take_while(|&&p| p <= n - 2)
        .filter(|&&p| table.is_prime(n - p))
        .count() as u64
}

/// The largest partner any pair can need is N - 2.
fn ensure_covers(table: &PrimeTable, n: u64) -> Result<()> {
    if table.covers(n - 2) {
        Ok(())
    } else {
        Err(GoldbachError::InvalidArgument(format!(
            "prime table up to {} does not cover N - 2 = {}",
            table.limit(),
            n - 2
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smallest_values() {
        // 4 = 2 + 2
        assert_eq!(count_goldbach_ordered(4, None).unwrap(), 1);
        // 6 = 3 + 3
        assert_eq!(count_goldbach_ordered(6, None).unwrap(), 1);
        // 8 = 3 + 5 = 5 + 3
        assert_eq!(count_goldbach_ordered(8, None).unwrap(), 2);
        // 10 = 3 + 7 = 5 + 5 = 7 + 3
        assert_eq!(count_goldbach_ordered(10, None).unwrap(), 3);
    }

    #[test]
    fn test_reference_counts() {
        let table = generate_primes(10_000);
        let expected = [(10u64, 3u64), (100, 12), (1_000, 56), (10_000, 254)];
        for (n, g) in expected {
            assert_eq!(count_goldbach_ordered(n, Some(&table)).unwrap(), g, "G({})", n);
        }
    }

    #[test]
    fn test_invalid_inputs() {
        for n in [0u64, 2, 3, 7, 99] {
            assert!(
                matches!(count_goldbach_ordered(n, None), Err(GoldbachError::InvalidArgument(_))),
                "N = {} should be rejected",
                n
            );
        }
    }

    #[test]
    fn test_table_must_cover_n_minus_two() {
        let table = generate_primes(98);
        assert_eq!(count_goldbach_ordered(100, Some(&table)).unwrap(), 12);

        let short = generate_primes(97);
        assert!(matches!(
            count_goldbach_ordered(100, Some(&short)),
            Err(GoldbachError::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_larger_table_gives_same_count() {
        let big = generate_primes(50_000);
        for n in (4..2_000u64).step_by(2) {
            assert_eq!(
                count_goldbach_ordered(n, Some(&big)).unwrap(),
                count_goldbach_ordered(n, None).unwrap(),
                "N = {}",
                n
            );
        }
    }

    #[test]
    fn test_count_parity() {
        // Pairs with p != q come in mirrored couples, so G(N) is odd exactly
        // when N/2 is prime.
        let table = generate_primes(5_000);
        for n in (4..5_000u64).step_by(2) {
            let g = count_with_table(n, &table);
            assert_eq!(g % 2 == 1, table.is_prime(n / 2), "N = {}", n);
        }
    }

    #[test]
    fn test_batch_matches_single() {
        let n_values = vec![10u64, 100, 1_000, 4, 10_000, 100];
        let counts = count_goldbach_batch(&n_values, None).unwrap();
        assert_eq!(counts, vec![3, 12, 56, 1, 254, 12]);
    }

    #[test]
    fn test_batch_with_explicit_max() {
        let counts = count_goldbach_batch(&[10, 20], Some(1_000)).unwrap();
        assert_eq!(counts, vec![3, 4]);
    }

    #[test]
    fn test_batch_empty_and_invalid() {
        assert_eq!(count_goldbach_batch(&[], None).unwrap(), Vec::<u64>::new());
        assert!(count_goldbach_batch(&[10, 11], None).is_err());
        assert!(count_goldbach_batch(&[10, 1_000], Some(500)).is_err());
    }
}
