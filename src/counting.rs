//! Factorials, permutations and combinations as `f64`, so that magnitudes far
//! beyond the exact integer range stay representable.
//!
//! `permutations` and `combinations` are total over the integers: any `r`
//! outside `0..=n` yields 0. The dice frequency sum truncates itself on that.

use crate::Audit;

pub fn factorial(x: u32, audit: &mut Audit) -> f64 {
    let product = (1..=x).fold(1.0, |acc, i| acc * f64::from(i));
    audit.factorial_seen(product);
    product
}

pub fn permutations(n: i64, r: i64, audit: &mut Audit) -> f64 {
    if r < 0 || r > n {
        return 0.0;
    }
    let product = (n - r + 1..=n).fold(1.0, |acc, i| acc * i as f64);
    audit.permutation_seen(product);
    product
}

pub fn combinations(n: i64, r: i64, audit: &mut Audit) -> f64 {
    let Ok(k) = u32::try_from(r) else {
        return 0.0;
    };
    if r > n {
        return 0.0;
    }
    let ratio = permutations(n, r, audit) / factorial(k, audit);
    audit.combination_seen(ratio);
    ratio
}
