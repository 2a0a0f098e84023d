use std::fmt;

use bon::Builder;
use itertools::Itertools;
use rand::Rng;
use tracing::debug;

use crate::expect::{mean_hits_to_kill_for_hit_dice, Exact};
use crate::sim::Simulator;
use crate::util::HitDice;
use crate::{FIRST_HIT_DICE, LAST_HIT_DICE};

const TITLE: &str = "Hit die equivalence for different HD:";
const HEADER: [&str; 4] = ["HD", "Hits to Kill", "Hits per HD", "Pro-Rated"];
const RULE: &str = "----------------------------------------------------";

/// A way of producing the expected hits to kill a creature of given hit dice.
pub trait Expectation {
    fn expected_hits(&mut self, hit_dice: HitDice) -> f64;
}

impl<G> Expectation for Simulator<G>
where
    G: Rng,
{
    fn expected_hits(&mut self, hit_dice: HitDice) -> f64 {
        self.average_hits_to_kill(hit_dice)
    }
}

impl Expectation for Exact {
    fn expected_hits(&mut self, hit_dice: HitDice) -> f64 {
        mean_hits_to_kill_for_hit_dice(hit_dice, self.audit_mut())
    }
}

impl<F> Expectation for F
where
    F: FnMut(HitDice) -> f64,
{
    fn expected_hits(&mut self, hit_dice: HitDice) -> f64 {
        self(hit_dice)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Row {
    pub hit_dice: HitDice,
    pub hits: f64,
    pub hits_per_hit_die: f64,
    pub pro_rated: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    rows: Vec<Row>,
}

#[derive(Debug, Clone, Builder)]
pub struct Report {
    #[builder(default = FIRST_HIT_DICE)]
    first: HitDice,
    #[builder(default = LAST_HIT_DICE)]
    last: HitDice,
}

impl Default for Report {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl Report {
    /// Evaluates `source` once per hit dice value. The pro-rated column is
    /// relative to one hit die, which is evaluated separately only when the
    /// range does not start there.
    pub fn table<E>(&self, source: &mut E) -> Table
    where
        E: Expectation + ?Sized,
    {
        let mut baseline = (self.first != 1).then(|| source.expected_hits(1));
        let rows = (self.first..=self.last)
            .map(|hit_dice| {
                let hits = source.expected_hits(hit_dice);
                let base = *baseline.get_or_insert(hits);
                let row = Row {
                    hit_dice,
                    hits,
                    hits_per_hit_die: hits / f64::from(hit_dice),
                    pro_rated: hits / base,
                };
                debug!(?row, "table row");
                row
            })
            .collect();
        Table { rows }
    }
}

impl Table {
    #[must_use]
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TITLE}")?;
        writeln!(f)?;
        writeln!(f, "{}", HEADER.iter().join("\t"))?;
        writeln!(f, "{RULE}")?;
        for row in &self.rows {
            let cells = [row.hits, row.hits_per_hit_die, row.pro_rated];
            writeln!(
                f,
                "{}\t{}\t",
                row.hit_dice,
                cells.iter().map(|x| format!("{x:.6}")).join("\t")
            )?;
        }
        writeln!(f)?;
        writeln!(f)
    }
}
