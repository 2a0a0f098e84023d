//! Bodies of the two comparison programs, writing to any output.

use std::io::{self, Write};

use rand::Rng;

use crate::util::{ProgramResult, SelfTestResult};
use crate::{Audit, Exact, Report, Simulator};

/// Runs `self_test`, then prints the exact table and the audit block. Nothing
/// is written when the battery fails.
pub fn run_exact<W, T>(out: &mut W, report: &Report, self_test: T) -> ProgramResult<Audit>
where
    W: Write,
    T: FnOnce(&mut Audit) -> SelfTestResult<()>,
{
    let mut audit = Audit::new();
    self_test(&mut audit)?;
    writeln!(out, "Test suite SUCCESS.")?;

    let mut exact = Exact::new(audit);
    let table = report.table(&mut exact);
    write!(out, "{table}")?;
    write!(out, "{}", exact.audit())?;
    out.flush()?;
    Ok(exact.into_audit())
}

pub fn run_simulated<W, G>(
    out: &mut W,
    report: &Report,
    simulator: &mut Simulator<G>,
) -> io::Result<()>
where
    W: Write,
    G: Rng,
{
    let table = report.table(simulator);
    write!(out, "{table}")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::{self_test, ProgramError, SelfTestError};

    #[test]
    fn failed_battery_writes_nothing() {
        let mut out = Vec::new();
        let err = run_exact(&mut out, &Report::default(), |_| {
            Err(SelfTestError {
                check: "factorial(5)",
                expected: 120.0,
                actual: 119.0,
            })
        })
        .unwrap_err();
        assert!(out.is_empty());
        assert!(matches!(err, ProgramError::SelfTest(ref e) if e.check == "factorial(5)"));
        assert_eq!(
            err.to_string(),
            "self-test `factorial(5)` failed: expected 120, got 119"
        );
    }

    #[test]
    fn exact_program_output() {
        let mut out = Vec::new();
        let report = Report::builder().last(2).build();
        let audit = run_exact(&mut out, &report, self_test::run).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("Test suite SUCCESS.\nHit die equivalence for different HD:\n"));
        assert!(text.contains("\n1\t"));
        assert!(text.contains("\t1.000000\t\n2\t"));
        assert!(text.ends_with(&format!("\t\n\n\n{audit}")));
        assert!(text.contains("Max Dice Freq. : "));
    }

    #[test]
    fn simulated_program_output() {
        let mut out = Vec::new();
        let mut simulator = Simulator::builder()
            .trials(1_000)
            .build(ChaCha8Rng::seed_from_u64(7));
        run_simulated(&mut out, &Report::default(), &mut simulator).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 4 + 15 + 2);
        assert!(!text.contains("Test suite"));
        assert!(!text.contains("Max Factorial"));
    }
}
