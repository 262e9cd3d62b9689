//! Integration tests for the Goldbach core crate.

use goldbach_core::singular::{local_factor, odd_prime_factors};
use goldbach_core::{
    count_goldbach_batch, count_goldbach_ordered, evaluate_n, generate_primes,
    hardy_littlewood_integral, hardy_littlewood_series, singular_series, GoldbachError,
    DEFAULT_QUADRATURE_LIMIT, DEFAULT_SERIES_ORDER,
};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

fn is_prime_trial(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    let mut d = 2u64;
    while d * d <= n {
        if n % d == 0 {
            return false;
        }
        d += 1;
    }
    true
}

fn random_even(rng: &mut StdRng, max: u64) -> u64 {
    2 * rng.gen_range(2..=max / 2)
}

#[test]
fn test_reference_ordered_counts() {
    assert_eq!(count_goldbach_ordered(10, None).unwrap(), 3);
    assert_eq!(count_goldbach_ordered(100, None).unwrap(), 12);
    assert_eq!(count_goldbach_ordered(1_000, None).unwrap(), 56);
    assert_eq!(count_goldbach_ordered(10_000, None).unwrap(), 254);
}

#[test]
fn test_boundary_and_error_cases() {
    assert_eq!(count_goldbach_ordered(4, None).unwrap(), 1);
    assert!(matches!(
        count_goldbach_ordered(7, None),
        Err(GoldbachError::InvalidArgument(_))
    ));
    assert!(matches!(
        count_goldbach_ordered(2, None),
        Err(GoldbachError::InvalidArgument(_))
    ));
}

#[test]
fn test_precomputed_table_agrees_with_self_sieving() {
    let mut rng = StdRng::seed_from_u64(0x601d_bac4);
    for _ in 0..200 {
        let n = random_even(&mut rng, 20_000);
        let own = count_goldbach_ordered(n, None).unwrap();
        let table = generate_primes(n);
        assert_eq!(own, count_goldbach_ordered(n, Some(&table)).unwrap(), "N = {}", n);
    }
}

#[test]
fn test_singleton_batch_agrees_with_single_count() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..100 {
        let n = random_even(&mut rng, 20_000);
        let batch = count_goldbach_batch(&[n], Some(n)).unwrap();
        assert_eq!(batch[0], count_goldbach_ordered(n, None).unwrap(), "N = {}", n);
    }
}

#[test]
fn test_batch_preserves_input_order() {
    let mut rng = StdRng::seed_from_u64(11);
    let n_values: Vec<u64> = (0..300).map(|_| random_even(&mut rng, 30_000)).collect();
    let counts = count_goldbach_batch(&n_values, None).unwrap();
    let table = generate_primes(30_000);
    for (&n, &g) in n_values.iter().zip(&counts) {
        assert_eq!(g, count_goldbach_ordered(n, Some(&table)).unwrap(), "N = {}", n);
    }
}

#[test]
fn test_sieve_against_trial_division() {
    let limit = 100_000u64;
    let table = generate_primes(limit);
    let primes = table.primes();

    assert!(primes.windows(2).all(|w| w[0] < w[1]), "not strictly increasing");
    assert!(primes.iter().all(|&p| is_prime_trial(p)), "composite in table");

    let expected: Vec<u64> = (0..=limit).filter(|&n| is_prime_trial(n)).collect();
    assert_eq!(primes, expected.as_slice());
}

#[test]
fn test_singular_series_independent_of_factor_order() {
    let mut rng = StdRng::seed_from_u64(3);
    let n_values = [2 * 3 * 5 * 7 * 11 * 13 * 17 * 19u64, 2 * 3 * 3 * 101 * 9973, 30_030 * 2, 999_999 * 2];
    for n in n_values {
        let ascending = singular_series(n).unwrap();
        let mut factors = odd_prime_factors(n / 2);
        factors.reverse();
        let descending: f64 = factors.iter().map(|&p| local_factor(p)).product();
        factors.shuffle(&mut rng);
        let shuffled: f64 = factors.iter().map(|&p| local_factor(p)).product();
        assert!((ascending - descending).abs() < 1e-9, "N = {}", n);
        assert!((ascending - shuffled).abs() < 1e-9, "N = {}", n);
    }
    assert!(matches!(singular_series(9), Err(GoldbachError::InvalidArgument(_))));
}

#[test]
fn test_predictions_positive_and_finite() {
    let mut n_values: Vec<u64> = (6..=200).step_by(2).collect();
    n_values.extend([1_000, 12_346, 65_536, 99_990, 1_000_000]);
    for n in n_values {
        let s = hardy_littlewood_series(n, DEFAULT_SERIES_ORDER).unwrap();
        let i = hardy_littlewood_integral(n, DEFAULT_QUADRATURE_LIMIT).unwrap();
        assert!(s.is_finite() && s > 0.0, "series({}) = {}", n, s);
        assert!(i.is_finite() && i > 0.0, "integral({}) = {}", n, i);
    }
    let s4 = hardy_littlewood_series(4, DEFAULT_SERIES_ORDER).unwrap();
    assert!(s4.is_finite() && s4 > 0.0);
}

/// Biases stay bounded and the two predictors draw together as N grows;
/// above 10^4 the integral form is the more accurate one.
fn check_trend(n_values: &[u64]) {
    let table = generate_primes(*n_values.iter().max().unwrap());
    let reports: Vec<_> = n_values
        .iter()
        .map(|&n| evaluate_n(n, &table, DEFAULT_SERIES_ORDER, DEFAULT_QUADRATURE_LIMIT).unwrap())
        .collect();

    for r in &reports {
        assert!(r.series_bias.absolute < 0.3, "N = {}: {:?}", r.n, r.series_bias);
        assert!(r.integral_bias.absolute < 0.3, "N = {}: {:?}", r.n, r.integral_bias);
        assert!(r.integral_wins(), "N = {}", r.n);
    }

    let gaps: Vec<f64> = reports
        .iter()
        .map(|r| (r.series - r.integral).abs() / r.exact as f64)
        .collect();
    assert!(
        gaps.windows(2).all(|w| w[1] < w[0]),
        "predictor gap should shrink with N: {:?}",
        gaps
    );
}

#[test]
fn test_bias_trend_up_to_one_million() {
    check_trend(&[10_000, 100_000, 1_000_000]);
}

// Sieves to 10^7; run with `cargo test --release -- --ignored`.
#[test]
#[ignore]
fn test_bias_trend_up_to_ten_million() {
    check_trend(&[10_000, 100_000, 1_000_000, 10_000_000]);
}
