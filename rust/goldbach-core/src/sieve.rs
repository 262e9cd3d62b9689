//! Prime generation and O(1) prime membership.
//!
//! A [`PrimeTable`] is built once per run at the largest N of interest and
//! then shared read-only by every per-N computation. Membership queries go
//! through a packed [`PrimeBitmap`] derived from the table's prime list, so
//! the two views can never disagree.

use num_integer::Roots;

/// Generate all primes up to and including `limit` with the Sieve of
/// Eratosthenes.
///
/// Returns an empty table when `limit < 2`. Time O(limit log log limit),
/// space O(limit).
pub fn generate_primes(limit: u64) -> PrimeTable {
    let primes = sieve_primes(limit);
    log::debug!("sieved {} primes up to {}", primes.len(), limit);
    PrimeTable::from_sieved(limit, primes)
}

fn sieve_primes(limit: u64) -> Vec<u64> {
    if limit < 2 {
        return Vec::new();
    }
    let size = (limit + 1) as usize;
    let mut is_prime = vec![true; size];
    is_prime[0] = false;
    is_prime[1] = false;

    let root = limit.sqrt() as usize;
    for i in 2..=root {
        if is_prime[i] {
            for j in (i * i..size).step_by(i) {
                is_prime[j] = false;
            }
        }
    }

    is_prime
        .iter()
        .enumerate()
        .filter(|(_, &p)| p)
        .map(|(i, _)| i as u64)
        .collect()
}

/// Packed bitset over `[0, limit]`, one bit per integer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeBitmap {
    words: Vec<u64>,
    limit: u64,
}

impl PrimeBitmap {
    fn from_primes(limit: u64, primes: &[u64]) -> Self {
        let n_words = if primes.is_empty() {
            0
        } else {
            (limit / 64 + 1) as usize
        };
        let mut words = vec![0u64; n_words];
        for &p in primes {
            words[(p / 64) as usize] |= 1u64 << (p % 64);
        }
        PrimeBitmap { words, limit }
    }

    /// Whether `n` is marked. Values beyond the bitmap are never marked.
    #[inline]
    pub fn contains(&self, n: u64) -> bool {
        if n > self.limit {
            return false;
        }
        self.words
            .get((n / 64) as usize)
            .map_or(false, |w| w & (1u64 << (n % 64)) != 0)
    }
}

/// Every prime `<= limit`, ascending, together with its membership bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeTable {
    limit: u64,
    primes: Vec<u64>,
    membership: PrimeBitmap,
}

impl PrimeTable {
    fn from_sieved(limit: u64, primes: Vec<u64>) -> Self {
        let membership = PrimeBitmap::from_primes(limit, &primes);
        PrimeTable {
            limit,
            primes,
            membership,
        }
    }

    /// The sieve bound the table was built for.
    pub fn limit(&self) -> u64 {
        self.limit
    }

    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    pub fn len(&self) -> usize {
        self.primes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.primes.is_empty()
    }

    /// Whether the table is complete up to `n`.
    pub fn covers(&self, n: u64) -> bool {
        n <= self.limit
    }

    /// O(1) primality lookup. Only meaningful for `n <= limit()`; anything
    /// larger reports `false`.
    #[inline]
    pub fn is_prime(&self, n: u64) -> bool {
        self.membership.contains(n)
    }

    /// The ascending prefix of primes strictly below `bound`.
    pub fn primes_below(&self, bound: u64) -> &[u64] {
        let end = self.primes.partition_point(|&p| p < bound);
        &self.primes[..end]
    }

    pub fn membership(&self) -> &PrimeBitmap {
        &self.membership
    }
}

impl<'a> IntoIterator for &'a PrimeTable {
    type Item = &'a u64;
    type IntoIter = std::slice::Iter<'a, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.primes.iter()
    }
}
