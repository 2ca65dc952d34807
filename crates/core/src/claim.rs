//! The BCDS1 claim record.

use crate::config::SubmitterConfig;
use crate::exemptions::ExemptionRemission;
use crate::patient::Patient;
use crate::treatments::Treatment;
use crate::validation::{self, ValidationErrors};
use crate::{Fp17Error, Fp17Result};
use chrono::NaiveDate;

/// One FP17 claim for a completed course of dental treatment.
///
/// Start from [`Bcds1::new`], which fills in the submitter, then assign the patient, dates,
/// exemption and treatments directly. Nothing is checked until [`Bcds1::get_errors`] or
/// [`Bcds1::validate`] is called.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Bcds1 {
    pub contract_number: u64,
    pub provider_number: u32,
    pub performer_number: u32,
    pub dpb_pin: u32,
    pub site: Option<String>,

    pub transaction_number: u32,
    pub resubmission_count: u8,

    pub patient: Patient,

    pub date_of_acceptance: Option<NaiveDate>,
    pub date_of_completion: Option<NaiveDate>,

    /// `None` for a fee-paying adult.
    pub exemption_remission: Option<ExemptionRemission>,
    pub patient_charge_pence: u32,

    /// Treatment entries in the order they were recorded.
    pub treatments: Vec<Treatment>,
}

impl Bcds1 {
    /// Creates a base record for `submitter` with a blank patient and no treatments.
    pub fn new(submitter: &SubmitterConfig) -> Self {
        Self {
            contract_number: submitter.contract_number(),
            provider_number: submitter.provider_number(),
            performer_number: submitter.performer_number(),
            dpb_pin: submitter.dpb_pin(),
            site: submitter.site().map(str::to_owned),
            transaction_number: 1,
            resubmission_count: 0,
            patient: Patient::blank(),
            date_of_acceptance: None,
            date_of_completion: None,
            exemption_remission: None,
            patient_charge_pence: 0,
            treatments: Vec::new(),
        }
    }

    /// Collects every validation error on the record, keyed by field path.
    pub fn get_errors(&self) -> ValidationErrors {
        validation::validate_claim(self)
    }

    /// Checks the record.
    ///
    /// # Errors
    ///
    /// Returns [`Fp17Error::Validation`] carrying all field errors if any rule fails.
    pub fn validate(&self) -> Fp17Result<()> {
        let errors = self.get_errors();
        if errors.is_empty() {
            Ok(())
        } else {
            Err(Fp17Error::Validation(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_copies_submitter_details() {
        let submitter =
            SubmitterConfig::new(1_234_567, 42, 654_321, 111_111, Some("S1".into()))
                .expect("valid submitter");
        let claim = Bcds1::new(&submitter);

        assert_eq!(claim.contract_number, 1_234_567);
        assert_eq!(claim.provider_number, 42);
        assert_eq!(claim.performer_number, 654_321);
        assert_eq!(claim.dpb_pin, 111_111);
        assert_eq!(claim.site.as_deref(), Some("S1"));
        assert_eq!(claim.transaction_number, 1);
        assert!(claim.treatments.is_empty());
        assert!(claim.exemption_remission.is_none());
    }

    #[test]
    fn base_record_is_not_valid_until_populated() {
        let claim = Bcds1::new(&SubmitterConfig::default());
        let err = claim.validate().expect_err("blank record");
        match err {
            Fp17Error::Validation(errors) => {
                assert!(errors.get("patient.surname").is_some());
                assert!(errors.get("date_of_acceptance").is_some());
                assert!(errors.get("treatments").is_some());
            }
            other => panic!("expected Validation error, got {other:?}"),
        }
    }
}
