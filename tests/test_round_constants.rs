use index_permute::coprime::{MAX_ROUND_FACTORS, RoundConstants, gcd};
use itertools::Itertools;

#[test]
fn test_round_constants_contract() {
    for n in 1..2000u64 {
        let rc = RoundConstants::derive(n);
        assert_eq!(rc.factors.len(), rc.constants.len());
        assert!(
            rc.factors.iter().rev().eq(rc.constants.iter()),
            "n = {}: constants are not the reversed factors",
            n
        );
        assert!(rc.factors.iter().all_unique(), "n = {}: duplicate factor", n);
        assert_eq!(rc.is_empty(), n / 2 < 2, "n = {}", n);
    }
}

#[test]
fn test_factors_coprime_to_both_half_ranges() {
    for n in 4..2000u64 {
        let lower = n / 2;
        let upper = n - n / 2;
        for &a in &RoundConstants::derive(n).factors {
            assert_eq!(gcd(a, lower), 1, "n = {}: {} shares a factor with {}", n, a, lower);
            assert_eq!(gcd(a, upper), 1, "n = {}: {} shares a factor with {}", n, a, upper);
        }
    }
}

#[test]
fn test_factor_cap() {
    let rc = RoundConstants::derive(1 << 20);
    assert_eq!(rc.len(), MAX_ROUND_FACTORS);
    assert_eq!(rc.round_count(), MAX_ROUND_FACTORS - 1);
    assert!(rc.factors.iter().all(|a| a % 2 == 1));

    let capped = RoundConstants::derive_with_limit(1 << 20, 16);
    assert_eq!(capped.factors, &rc.factors[..16]);
}
