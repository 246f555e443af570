use tracing::debug;

/// Upper bound on the number of candidate factors collected for a domain.
///
/// A domain whose half-range has more coprimes than this is truncated, so
/// the number of composed rounds never exceeds `MAX_ROUND_FACTORS - 1`.
/// Small domains never reach the cap and are unaffected by it.
pub const MAX_ROUND_FACTORS: usize = 10_000;

pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        (a, b) = (b, a % b);
    }
    a
}

/// Collects, in ascending order, up to `limit` integers in `1..n` that are
/// coprime to `n`.
pub fn find_coprime_numbers(n: u64, limit: usize) -> Vec<u64> {
    (1..n).filter(|&i| gcd(i, n) == 1).take(limit).collect()
}

pub fn is_coprime_with_all(x: u64, numbers: &[u64]) -> bool {
    numbers.iter().all(|&m| gcd(x, m) == 1)
}

/// Per-round multipliers and offsets for one domain size.
///
/// `factors[i]` is the multiplier and `constants[i]` the offset of round `i`.
/// `constants` is always `factors` in reverse order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundConstants {
    pub factors: Vec<u64>,
    pub constants: Vec<u64>,
}

impl RoundConstants {
    pub fn derive(n: u64) -> Self {
        Self::derive_with_limit(n, MAX_ROUND_FACTORS)
    }

    /// Every factor is coprime to `n / 2`. For odd `n` the upper half-range is
    /// `n / 2 + 1` wide, so factors must also be coprime to that and to `n`.
    pub fn derive_with_limit(n: u64, limit: usize) -> Self {
        let half = n / 2;
        let mut factors = find_coprime_numbers(half, limit);
        if n % 2 == 1 {
            factors.retain(|&v| is_coprime_with_all(v, &[half + 1, n]));
        }
        let constants = factors.iter().rev().copied().collect();
        debug!(n, limit, factors = factors.len(), "derived round constants");
        Self { factors, constants }
    }

    pub fn len(&self) -> usize {
        self.factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factors.is_empty()
    }

    /// Number of rounds the composition applies: one fewer than the factor
    /// count, zero for an empty list.
    pub fn round_count(&self) -> usize {
        self.factors.len().saturating_sub(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gcd() {
        assert_eq!(gcd(12, 18), 6);
        assert_eq!(gcd(17, 5), 1);
        assert_eq!(gcd(7, 0), 7);
        assert_eq!(gcd(0, 7), 7);
        assert_eq!(gcd(0, 0), 0);
    }

    #[test]
    fn test_find_coprime_numbers() {
        assert_eq!(find_coprime_numbers(10, 100), vec![1, 3, 7, 9]);
        assert_eq!(find_coprime_numbers(10, 2), vec![1, 3]);
        assert_eq!(find_coprime_numbers(7, 100), vec![1, 2, 3, 4, 5, 6]);
        assert!(find_coprime_numbers(1, 100).is_empty());
        assert!(find_coprime_numbers(0, 100).is_empty());
        assert_eq!(find_coprime_numbers(2, 100), vec![1]);
    }

    #[test]
    fn test_is_coprime_with_all() {
        assert!(is_coprime_with_all(7, &[3, 4, 5]));
        assert!(!is_coprime_with_all(6, &[5, 9]));
        assert!(is_coprime_with_all(6, &[]));
    }

    #[test]
    fn test_derive_even_domain() {
        let rc = RoundConstants::derive(16);
        assert_eq!(rc.factors, vec![1, 3, 5, 7]);
        assert_eq!(rc.constants, vec![7, 5, 3, 1]);
        assert_eq!(rc.round_count(), 3);
    }

    #[test]
    fn test_derive_odd_domain() {
        // half = 8, upper half-range = 9, n = 17: 3 is dropped (gcd(3, 9) = 3)
        let rc = RoundConstants::derive(17);
        assert_eq!(rc.factors, vec![1, 5, 7]);
        assert_eq!(rc.constants, vec![7, 5, 1]);
    }

    #[test]
    fn test_derive_tiny_domains() {
        for n in 1..4 {
            let rc = RoundConstants::derive(n);
            assert!(rc.is_empty(), "n = {} should have no factors", n);
            assert_eq!(rc.round_count(), 0);
        }
        assert_eq!(RoundConstants::derive(4).factors, vec![1]);
        assert_eq!(RoundConstants::derive(5).factors, vec![1]);
    }

    #[test]
    fn test_derive_with_limit() {
        let rc = RoundConstants::derive_with_limit(1000, 3);
        assert_eq!(rc.factors, vec![1, 3, 7]);
        assert!(RoundConstants::derive_with_limit(1000, 0).is_empty());
    }
}
