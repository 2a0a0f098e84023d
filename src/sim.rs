use bon::Builder;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use crate::util::{HitDice, Hits};
use crate::{DD_SIDES, HD_SIDES, NUM_TRIALS};

/// Monte Carlo estimate of hits-to-kill.
#[derive(Debug, Builder)]
pub struct Simulator<G = StdRng>
where
    G: Rng,
{
    #[builder(finish_fn)]
    rng: G,
    #[builder(default = NUM_TRIALS)]
    trials: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Estimate {
    pub mean: f64,
    pub trials: u32,
    /// Standard error of `mean`.
    pub std_error: f64,
}

impl Default for Simulator<StdRng> {
    fn default() -> Self {
        Self::builder().build(StdRng::from_entropy())
    }
}

impl<G> Simulator<G>
where
    G: Rng,
{
    #[must_use]
    pub fn trials(&self) -> u32 {
        self.trials
    }

    pub fn roll_die(&mut self, sides: u32) -> u32 {
        assert!(sides >= 1, "a die needs at least one side");
        self.rng.gen_range(1..=sides)
    }

    pub fn roll_dice(&mut self, count: u32, sides: u32) -> u32 {
        (0..count).map(|_| self.roll_die(sides)).sum()
    }

    /// Rolls hit points for `hit_dice` and counts damage rolls until they
    /// drop to zero or below.
    pub fn hits_to_kill(&mut self, hit_dice: HitDice) -> Hits {
        let mut hit_points = i64::from(self.roll_dice(hit_dice, HD_SIDES as u32));
        let mut hits = 0;
        while hit_points > 0 {
            hit_points -= i64::from(self.roll_die(DD_SIDES as u32));
            hits += 1;
        }
        hits
    }

    pub fn estimate(&mut self, hit_dice: HitDice) -> Estimate {
        assert_ne!(self.trials, 0, "trial count cannot be zero");
        let mut total = 0u64;
        let mut squares = 0u64;
        for _ in 0..self.trials {
            let hits = u64::from(self.hits_to_kill(hit_dice));
            total += hits;
            squares += hits * hits;
        }

        let n = f64::from(self.trials);
        let mean = total as f64 / n;
        let variance = (squares as f64 / n - mean * mean).max(0.0);
        let std_error = (variance / n).sqrt();
        debug!(hit_dice, trials = self.trials, mean, std_error, "simulated");

        Estimate {
            mean,
            trials: self.trials,
            std_error,
        }
    }

    pub fn average_hits_to_kill(&mut self, hit_dice: HitDice) -> f64 {
        self.estimate(hit_dice).mean
    }
}

#[cfg(test)]
mod tests {
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn seeded(trials: u32) -> Simulator<ChaCha8Rng> {
        Simulator::builder()
            .trials(trials)
            .build(ChaCha8Rng::seed_from_u64(0x5eed))
    }

    #[test]
    fn rolls_stay_on_the_die() {
        let mut sim = seeded(1);
        for _ in 0..1000 {
            assert!((1..=6).contains(&sim.roll_die(6)));
        }
        assert_eq!(sim.roll_die(1), 1);
        assert_eq!(sim.roll_dice(0, 6), 0);
        for _ in 0..1000 {
            assert!((3..=18).contains(&sim.roll_dice(3, 6)));
        }
    }

    #[test]
    fn hits_are_bounded_by_hit_points() {
        let mut sim = seeded(1);
        for _ in 0..1000 {
            let hits = sim.hits_to_kill(1);
            assert!((1..=6).contains(&hits), "{hits}");
        }
        for _ in 0..1000 {
            let hits = sim.hits_to_kill(4);
            assert!((1..=24).contains(&hits), "{hits}");
        }
    }

    #[test]
    fn same_seed_same_estimate() {
        let a = seeded(5_000).estimate(3);
        let b = seeded(5_000).estimate(3);
        assert_eq!(a, b);
        assert_eq!(a.trials, 5_000);
        assert!(a.std_error > 0.0);
    }

    #[test]
    fn default_runs_reference_trial_count() {
        assert_eq!(Simulator::default().trials(), NUM_TRIALS);
    }

    #[test]
    #[should_panic(expected = "trial count cannot be zero")]
    fn zero_trials_rejected() {
        seeded(0).estimate(1);
    }
}
