use std::collections::btree_map::Entry;
use std::collections::BTreeMap;

use num::rational::Ratio;
use num::traits::One;
use num::{BigUint, ToPrimitive};

use crate::util::Count;

type DieMap = BTreeMap<u32, Count>;

/// Exact distribution of a dice total, kept as integer outcome counts over a
/// common denominator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Die {
    outcomes: Vec<(u32, Count)>,
    denom: Count,
}

impl Die {
    #[must_use]
    pub fn single(value: u32) -> Self {
        Self::new(Count::one(), vec![(value, Count::one())])
    }

    /// A fair die showing `1..=sides`.
    #[must_use]
    pub fn uniform(sides: u32) -> Self {
        Self::new(
            BigUint::from(sides),
            (1..=sides).map(|x| (x, Count::one())).collect(),
        )
    }

    #[must_use]
    pub fn combine_with<F>(&self, other: &Die, op: F) -> Die
    where
        F: Fn(u32, u32) -> u32,
    {
        let mut outcomes = DieMap::new();
        for (k1, c1) in &self.outcomes {
            for (k2, c2) in &other.outcomes {
                match outcomes.entry(op(*k1, *k2)) {
                    Entry::Vacant(e) => {
                        e.insert(c1 * c2);
                    }
                    Entry::Occupied(mut e) => {
                        *e.get_mut() += c1 * c2;
                    }
                }
            }
        }
        Die::from_map(&self.denom * &other.denom, outcomes)
    }

    #[must_use]
    pub fn repeat<F>(&self, count: u32, op: F) -> Self
    where
        F: Fn(u32, u32) -> u32 + Copy,
    {
        let mut result = self.clone();
        for _ in 1..count {
            result = result.combine_with(self, op);
        }
        result
    }

    /// Total of `count` independent rolls. Zero rolls always total 0.
    #[must_use]
    pub fn sum_of(&self, count: u32) -> Self {
        if count == 0 {
            return Self::single(0);
        }
        self.repeat(count, |x, y| x + y)
    }

    #[must_use]
    pub fn denom(&self) -> &Count {
        &self.denom
    }

    #[must_use]
    pub fn frequency(&self, total: u32) -> Count {
        self.outcomes
            .binary_search_by_key(&total, |(k, _)| *k)
            .map(|i| self.outcomes[i].1.clone())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn frequency_f64(&self, total: u32) -> f64 {
        self.frequency(total).to_f64().unwrap_or(f64::INFINITY)
    }

    #[must_use]
    pub fn probability(&self, total: u32) -> f64 {
        Ratio::new(self.frequency(total), self.denom.clone())
            .to_f64()
            .unwrap_or(0.0)
    }

    #[must_use]
    pub fn probabilities(&self) -> Vec<(u32, f64)> {
        self.outcomes
            .iter()
            .map(|(k, _)| (*k, self.probability(*k)))
            .collect()
    }

    #[must_use]
    pub fn mean(&self) -> f64 {
        self.probabilities()
            .into_iter()
            .map(|(k, p)| f64::from(k) * p)
            .sum()
    }

    fn from_map(denom: Count, value: DieMap) -> Self {
        Self::new(denom, value.into_iter().collect())
    }

    fn new(denom: Count, outcomes: Vec<(u32, Count)>) -> Self {
        Self { outcomes, denom }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_d6() {
        let d = Die::uniform(6).sum_of(2);
        assert_eq!(d.denom(), &BigUint::from(36u32));
        assert_eq!(d.frequency(7), BigUint::from(6u32));
        assert_eq!(d.frequency(1), BigUint::ZERO);
        assert!((d.mean() - 7.0).abs() < 1e-12);
    }

    #[test]
    fn probabilities_cover_support() {
        let d = Die::uniform(6).sum_of(3);
        let pb = d.probabilities();
        assert_eq!(pb.first().map(|x| x.0), Some(3));
        assert_eq!(pb.last().map(|x| x.0), Some(18));
        let total: f64 = pb.iter().map(|x| x.1).sum();
        assert!((total - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_rolls() {
        let d = Die::uniform(6).sum_of(0);
        assert_eq!(d.probability(0), 1.0);
        assert_eq!(d.mean(), 0.0);
    }
}
