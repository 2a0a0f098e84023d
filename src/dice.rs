//! Closed-form distribution of the sum of `n` dice with `s` sides.

use crate::counting::combinations;
use crate::Audit;

/// `(-1)^i`.
#[must_use]
pub fn neg_one_pow(i: i64) -> i64 {
    if i % 2 == 0 {
        1
    } else {
        -1
    }
}

/// Number of ways `n` dice of `s` sides can total `k`.
///
/// Uses the alternating sum
/// `Σ_{i=0}^{⌊(k−n)/s⌋} (−1)^i · C(n, i) · C(k − s·i − 1, n − 1)`;
/// terms whose binomials leave their domain contribute 0. Rolling no dice
/// makes a total of 0 in exactly one way.
pub fn dice_frequency(n: i64, s: i64, k: i64, audit: &mut Audit) -> f64 {
    if k < n {
        return 0.0;
    }
    if n == 0 {
        return if k == 0 { 1.0 } else { 0.0 };
    }
    let mut sum = 0.0;
    for i in 0..=(k - n) / s {
        sum += neg_one_pow(i) as f64
            * combinations(n, i, audit)
            * combinations(k - s * i - 1, n - 1, audit);
    }
    audit.dice_frequency_seen(sum);
    sum
}

/// Probability that `n` dice of `s` sides total exactly `k`.
pub fn dice_probability(n: i64, s: i64, k: i64, audit: &mut Audit) -> f64 {
    let outcomes = (s as f64).powi(n as i32);
    dice_frequency(n, s, k, audit) / outcomes
}
