use thiserror::Error;

pub type HitDice = u32;
pub type HitPoints = u32;
pub type Hits = u32;
pub type Count = num::BigUint;

#[derive(Debug, Clone, PartialEq, Error)]
#[error("self-test `{check}` failed: expected {expected}, got {actual}")]
pub struct SelfTestError {
    pub check: &'static str,
    pub expected: f64,
    pub actual: f64,
}

pub type SelfTestResult<T> = Result<T, SelfTestError>;

#[derive(Debug, Error)]
pub enum ProgramError {
    #[error(transparent)]
    SelfTest(#[from] SelfTestError),
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type ProgramResult<T> = Result<T, ProgramError>;

/// Renders `value` the way C's `%e` does: six fractional digits and a signed,
/// at least two-digit exponent.
pub fn sci(value: f64) -> String {
    let s = format!("{value:.6e}");
    match s.split_once('e') {
        Some((mantissa, exp)) => {
            let (sign, digits) = match exp.strip_prefix('-') {
                Some(d) => ('-', d),
                None => ('+', exp),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => s,
    }
}
