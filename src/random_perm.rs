use tracing::debug;

use crate::coprime::{MAX_ROUND_FACTORS, RoundConstants};
use crate::error::{PermutationError, validate_domain, validate_position};

/// One affine round: `(a * x + b) mod n`, a bijection on `[0, n)` whenever
/// `gcd(a, n) == 1`. The product is taken in `u128` so it cannot wrap.
pub fn rand_swap(a: u64, b: u64, x: u64, n: u64) -> u64 {
    ((a as u128 * x as u128 + b as u128) % n as u128) as u64
}

/// Composes the affine rounds over `[0, n)`.
///
/// Even rounds split `x` by parity: even values are permuted among the
/// `ceil(n/2)` even slots, odd values among the `floor(n/2)` odd slots.
/// Odd rounds split by magnitude: the upper `n - n/2` values and the lower
/// `n/2` values are permuted in place. Every factor is coprime to both
/// half-range widths, so each round is a bijection and so is the whole.
///
/// A factor list of length `k` applies `k - 1` rounds.
pub fn swap_group(factors: &[u64], constants: &[u64], mut x: u64, n: u64) -> u64 {
    debug_assert_eq!(factors.len(), constants.len());
    let half = n / 2;
    for i in 0..factors.len().saturating_sub(1) {
        if i % 2 == 0 {
            if x % 2 == 0 {
                x = rand_swap(factors[i], constants[i], x / 2, n.div_ceil(2)) * 2;
            } else {
                x = rand_swap(factors[i + 1], constants[i + 1], x / 2, half) * 2 + 1;
            }
        } else if x >= half {
            x = rand_swap(factors[i], constants[i], x - half, n - half) + half;
        } else {
            x = rand_swap(factors[i + 1], constants[i + 1], x, half);
        }
    }
    x
}

/// Returns the image of `position` under the permutation of `[0, n)`.
///
/// Round constants are derived afresh on every call. Use [`Permuter`] or
/// [`crate::cache::PermuterCache`] when evaluating many positions of the
/// same domain.
pub fn get_position(n: i64, position: i64) -> Result<u64, PermutationError> {
    let domain = validate_domain(n)?;
    let x = validate_position(position, domain)?;
    let rc = RoundConstants::derive(domain);
    Ok(swap_group(&rc.factors, &rc.constants, x, domain))
}

/// A permutation of `[0, n)` with its round constants derived once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permuter {
    n: u64,
    rounds: RoundConstants,
}

impl Permuter {
    pub fn new(n: i64) -> Result<Self, PermutationError> {
        Self::with_max_factors(n, MAX_ROUND_FACTORS)
    }

    /// Caps the coprime search at `limit` candidates instead of
    /// [`MAX_ROUND_FACTORS`]. A different cap yields a different (still
    /// bijective) permutation once the domain has more coprimes than either
    /// cap.
    pub fn with_max_factors(n: i64, limit: usize) -> Result<Self, PermutationError> {
        let n = validate_domain(n)?;
        let rounds = RoundConstants::derive_with_limit(n, limit);
        debug!(n, rounds = rounds.round_count(), "built permuter");
        Ok(Self { n, rounds })
    }

    pub fn domain_size(&self) -> u64 {
        self.n
    }

    pub fn round_count(&self) -> usize {
        self.rounds.round_count()
    }

    pub fn constants(&self) -> &RoundConstants {
        &self.rounds
    }

    /// Maps `position ∈ 0..n` to its place in the permutation.
    pub fn permute(&self, position: i64) -> Result<u64, PermutationError> {
        let x = validate_position(position, self.n)?;
        Ok(self.apply(x))
    }

    fn apply(&self, x: u64) -> u64 {
        swap_group(&self.rounds.factors, &self.rounds.constants, x, self.n)
    }

    /// Images of `0, 1, .., n - 1`, in input order.
    pub fn iter(&self) -> impl Iterator<Item = u64> + '_ {
        (0..self.n).map(|x| self.apply(x))
    }
}
