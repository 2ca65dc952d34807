//! FP17 supplier test cases.
//!
//! Each numbered case builds one claim from a base record and hands it to [`output`]. Cases
//! are numbered as in the supplier test pack and registered in [`build_case`].

pub mod cases;

use fp17::{Bcds1, Fp17Error, Fp17Result, OutputFormat, SubmitterConfig};

/// Base record for a test case: submitter details filled in, everything else blank.
pub fn get_base(submitter: &SubmitterConfig) -> Bcds1 {
    Bcds1::new(submitter)
}

/// Validates and renders a finished test case.
pub fn output(bcds1: &Bcds1, format: OutputFormat) -> Fp17Result<String> {
    fp17::output(bcds1, format)
}

/// Case numbers with a registered builder.
pub const CASES: &[u32] = &[11];

/// Builds supplier test case `number`.
///
/// The transaction number is set to the case number so every case is distinct.
///
/// # Errors
///
/// Returns [`Fp17Error::InvalidInput`] if no case is registered under `number`.
pub fn build_case(number: u32, submitter: &SubmitterConfig) -> Fp17Result<Bcds1> {
    let mut bcds1 = match number {
        11 => cases::case_11(submitter),
        other => {
            return Err(Fp17Error::InvalidInput(format!(
                "no supplier test case {other} (available: {CASES:?})"
            )))
        }
    };

    bcds1.transaction_number = number;
    tracing::debug!(case = number, "built supplier test case");
    Ok(bcds1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_registered_case_builds_and_validates() {
        let submitter = SubmitterConfig::default();
        for &number in CASES {
            let bcds1 = build_case(number, &submitter).expect("registered case");
            assert_eq!(bcds1.transaction_number, number);
            let errors = bcds1.get_errors();
            assert!(errors.is_empty(), "case {number} invalid:\n{errors}");
        }
    }

    #[test]
    fn unknown_case_is_rejected() {
        let err = build_case(99, &SubmitterConfig::default()).expect_err("no case 99");
        assert!(matches!(err, Fp17Error::InvalidInput(msg) if msg.contains("99")));
    }

    #[test]
    fn base_uses_submitter() {
        let submitter = SubmitterConfig::new(42, 1, 2, 3, None).expect("valid submitter");
        let bcds1 = get_base(&submitter);
        assert_eq!(bcds1.contract_number, 42);
        assert_eq!(bcds1.dpb_pin, 3);
    }
}
