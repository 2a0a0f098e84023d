mod audit;
pub mod counting;
pub mod dice;
mod die;
pub mod expect;
pub mod program;
pub mod report;
pub mod sim;
mod util;

pub use audit::Audit;
pub use die::Die;
pub use expect::Exact;
pub use report::{Expectation, Report, Row, Table};
pub use sim::{Estimate, Simulator};
pub use util::{
    sci, HitDice, HitPoints, Hits, ProgramError, ProgramResult, SelfTestError, SelfTestResult,
};

/// Sides of a hit die.
pub const HD_SIDES: i64 = 6;
/// Sides of a damage die.
pub const DD_SIDES: i64 = 6;
pub const NUM_TRIALS: u32 = 100_000;
pub const FIRST_HIT_DICE: HitDice = 1;
pub const LAST_HIT_DICE: HitDice = 15;
pub const SELF_TEST_EPSILON: f64 = 0.001;
