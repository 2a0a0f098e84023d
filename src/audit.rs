use std::fmt;

use crate::util::sci;

/// Running maxima of every counting value produced during a run.
///
/// Purely diagnostic: nothing reads these to steer a computation.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Audit {
    factorial: f64,
    permutation: f64,
    combination: f64,
    dice_frequency: f64,
}

impl Audit {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn factorial_seen(&mut self, value: f64) {
        raise(&mut self.factorial, value);
    }

    pub(crate) fn permutation_seen(&mut self, value: f64) {
        raise(&mut self.permutation, value);
    }

    pub(crate) fn combination_seen(&mut self, value: f64) {
        raise(&mut self.combination, value);
    }

    pub(crate) fn dice_frequency_seen(&mut self, value: f64) {
        raise(&mut self.dice_frequency, value);
    }

    #[must_use]
    pub fn max_factorial(&self) -> f64 {
        self.factorial
    }

    #[must_use]
    pub fn max_permutation(&self) -> f64 {
        self.permutation
    }

    #[must_use]
    pub fn max_combination(&self) -> f64 {
        self.combination
    }

    #[must_use]
    pub fn max_dice_frequency(&self) -> f64 {
        self.dice_frequency
    }
}

fn raise(slot: &mut f64, value: f64) {
    if value > *slot {
        *slot = value;
    }
}

impl fmt::Display for Audit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Max Factorial  : {}", sci(self.factorial))?;
        writeln!(f, "Max Permutation: {}", sci(self.permutation))?;
        writeln!(f, "Max Combination: {}", sci(self.combination))?;
        writeln!(f, "Max Dice Freq. : {}", sci(self.dice_frequency))?;
        writeln!(f)
    }
}
