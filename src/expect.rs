//! Exact expected hits-to-kill.
//!
//! `P(h, n)` is the chance that `n` damage dice take `h` hit points to zero or
//! below. For fixed `h` it is a CDF over the number of hits, reaching 1 at
//! `n = h`, so the expectation over hits is a finite sum of its increments.
//! The per-hit-dice value then weighs those expectations by the hit point
//! distribution of `d` hit dice.

use tracing::trace;

use crate::dice::dice_probability;
use crate::util::{HitDice, HitPoints, Hits};
use crate::{Audit, DD_SIDES, HD_SIDES};

/// Probability that `hits` damage rolls reduce `hit_points` to zero or less.
pub fn probability_killed_within_hits(
    hit_points: HitPoints,
    hits: Hits,
    audit: &mut Audit,
) -> f64 {
    let n = i64::from(hits);
    let survive: f64 = (0..i64::from(hit_points))
        .map(|k| dice_probability(n, DD_SIDES, k, audit))
        .sum();
    1.0 - survive
}

pub fn mean_hits_to_kill_for_hit_points(hit_points: HitPoints, audit: &mut Audit) -> f64 {
    let mut sum = 0.0;
    let mut prior = 0.0;
    for n in 1..=hit_points {
        let cumulative = probability_killed_within_hits(hit_points, n, audit);
        sum += f64::from(n) * (cumulative - prior);
        prior = cumulative;
    }
    trace!(hit_points, mean = sum, "expected hits for fixed hit points");
    sum
}

pub fn mean_hits_to_kill_for_hit_dice(hit_dice: HitDice, audit: &mut Audit) -> f64 {
    let d = i64::from(hit_dice);
    let mut sum = 0.0;
    for h in hit_dice..=hit_dice * HD_SIDES as u32 {
        sum += dice_probability(d, HD_SIDES, i64::from(h), audit)
            * mean_hits_to_kill_for_hit_points(h, audit);
    }
    sum
}

/// Exact expectation strategy for the report; owns the run's audit.
#[derive(Debug, Clone, Default)]
pub struct Exact {
    audit: Audit,
}

impl Exact {
    #[must_use]
    pub fn new(audit: Audit) -> Self {
        Self { audit }
    }

    #[must_use]
    pub fn audit(&self) -> &Audit {
        &self.audit
    }

    pub fn audit_mut(&mut self) -> &mut Audit {
        &mut self.audit
    }

    #[must_use]
    pub fn into_audit(self) -> Audit {
        self.audit
    }
}
