//! Claim validation.
//!
//! Validation collects every problem on a record rather than stopping at the first one, so a
//! caller can show all of them at once. Errors are keyed by field path (`patient.surname`,
//! `treatments.3`), with `treatments` itself used for rules about the list as a whole.

use crate::claim::Bcds1;
use crate::config::is_valid_site;
use crate::constants::{
    MAX_ADDRESS_LINES, MAX_ADDRESS_LINE_LEN, MAX_CONTRACT_NUMBER, MAX_NAME_LEN,
    MAX_RESUBMISSION_COUNT, MAX_SITE_LEN, MAX_SIX_DIGIT_NUMBER, MAX_TRANSACTION_NUMBER,
};
use crate::exemptions::ExemptionCode;
use crate::patient::{Patient, Sex};
use crate::treatments::{CountRule, TreatmentGroup};
use serde::Serialize;
use std::collections::{BTreeMap, HashSet};

/// Validation errors keyed by field path, in path order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ValidationErrors(BTreeMap<String, Vec<String>>);

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Messages recorded against `field`, if any.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one error.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

impl std::fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (field, messages) in self.iter() {
            for message in messages {
                writeln!(f, "  {field}: {message}")?;
            }
        }
        Ok(())
    }
}

/// Validates a whole claim record.
pub fn validate_claim(claim: &Bcds1) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    validate_submitter(claim, &mut errors);
    validate_patient(&claim.patient, &mut errors);
    validate_dates(claim, &mut errors);
    validate_treatments(claim, &mut errors);
    validate_exemption(claim, &mut errors);

    errors
}

fn validate_submitter(claim: &Bcds1, errors: &mut ValidationErrors) {
    if !(1..=MAX_CONTRACT_NUMBER).contains(&claim.contract_number) {
        errors.add(
            "contract_number",
            format!("must be between 1 and {MAX_CONTRACT_NUMBER}"),
        );
    }

    for (field, value) in [
        ("provider_number", claim.provider_number),
        ("performer_number", claim.performer_number),
        ("dpb_pin", claim.dpb_pin),
    ] {
        if !(1..=MAX_SIX_DIGIT_NUMBER).contains(&value) {
            errors.add(field, format!("must be between 1 and {MAX_SIX_DIGIT_NUMBER}"));
        }
    }

    if let Some(site) = &claim.site {
        if !is_valid_site(site) {
            errors.add(
                "site",
                format!("must be 1 to {MAX_SITE_LEN} ASCII alphanumeric characters"),
            );
        }
    }

    if !(1..=MAX_TRANSACTION_NUMBER).contains(&claim.transaction_number) {
        errors.add(
            "transaction_number",
            format!("must be between 1 and {MAX_TRANSACTION_NUMBER}"),
        );
    }

    if claim.resubmission_count > MAX_RESUBMISSION_COUNT {
        errors.add(
            "resubmission_count",
            format!("must be at most {MAX_RESUBMISSION_COUNT}"),
        );
    }
}

fn is_name_char(c: char) -> bool {
    c.is_ascii_uppercase() || matches!(c, ' ' | '-' | '\'')
}

fn is_address_char(c: char) -> bool {
    c.is_ascii_uppercase()
        || c.is_ascii_digit()
        || matches!(c, ' ' | '-' | '\'' | ',' | '.' | '/' | '&')
}

fn check_name(field: &str, value: &str, errors: &mut ValidationErrors) {
    if value.trim().is_empty() {
        errors.add(field, "is required");
        return;
    }

    if value.chars().count() > MAX_NAME_LEN {
        errors.add(field, format!("must be at most {MAX_NAME_LEN} characters"));
    }

    if !value.chars().all(is_name_char) {
        errors.add(
            field,
            "must contain only uppercase letters, spaces, hyphens and apostrophes",
        );
    }
}

fn validate_patient(patient: &Patient, errors: &mut ValidationErrors) {
    check_name("patient.surname", &patient.surname, errors);
    check_name("patient.forename", &patient.forename, errors);
    if let Some(previous) = &patient.previous_surname {
        check_name("patient.previous_surname", previous, errors);
    }

    if patient.address.is_empty() {
        errors.add("patient.address", "at least one address line is required");
    } else if patient.address.len() > MAX_ADDRESS_LINES {
        errors.add(
            "patient.address",
            format!("must have at most {MAX_ADDRESS_LINES} lines"),
        );
    }

    for (i, line) in patient.address.iter().enumerate() {
        let field = format!("patient.address.{i}");
        if line.trim().is_empty() {
            errors.add(field, "address line cannot be empty");
            continue;
        }
        if line.chars().count() > MAX_ADDRESS_LINE_LEN {
            errors.add(
                field.clone(),
                format!("must be at most {MAX_ADDRESS_LINE_LEN} characters"),
            );
        }
        if !line.chars().all(is_address_char) {
            errors.add(
                field,
                "must contain only uppercase letters, digits, spaces and -',./&",
            );
        }
    }

    if patient.sex.is_none() {
        errors.add("patient.sex", "is required");
    }

    if patient.date_of_birth.is_none() {
        errors.add("patient.date_of_birth", "is required");
    }
}

fn validate_dates(claim: &Bcds1, errors: &mut ValidationErrors) {
    let Some(accepted) = claim.date_of_acceptance else {
        errors.add("date_of_acceptance", "is required");
        if claim.date_of_completion.is_none() {
            errors.add("date_of_completion", "is required");
        }
        return;
    };

    match claim.date_of_completion {
        Some(completed) if completed < accepted => {
            errors.add("date_of_completion", "must not be before date of acceptance");
        }
        Some(_) => {}
        None => errors.add("date_of_completion", "is required"),
    }

    if let Some(dob) = claim.patient.date_of_birth {
        if dob > accepted {
            errors.add(
                "patient.date_of_birth",
                "must not be after date of acceptance",
            );
        }
    }
}

fn validate_treatments(claim: &Bcds1, errors: &mut ValidationErrors) {
    if claim.treatments.is_empty() {
        errors.add("treatments", "at least one treatment is required");
        return;
    }

    let mut seen = HashSet::new();
    let mut categories = 0usize;
    let mut ethnic_origins = 0usize;

    for (i, treatment) in claim.treatments.iter().enumerate() {
        let field = format!("treatments.{i}");
        let code = treatment.code;

        if !seen.insert(code) {
            errors.add(field.clone(), format!("treatment {code} appears more than once"));
        }

        let Some(def) = treatment.definition() else {
            errors.add(field, format!("unknown treatment code {code}"));
            continue;
        };

        match def.group {
            TreatmentGroup::Category => categories += 1,
            TreatmentGroup::EthnicOrigin => ethnic_origins += 1,
            TreatmentGroup::ClinicalDataSet | TreatmentGroup::RecallInterval => {}
        }

        match (def.count, treatment.instance_count) {
            (CountRule::None, Some(_)) => {
                errors.add(
                    field,
                    format!("treatment {code} does not take an instance count"),
                );
            }
            (CountRule::Required { .. }, None) => {
                errors.add(field, format!("treatment {code} requires an instance count"));
            }
            (CountRule::Required { min, max }, Some(n)) if !(min..=max).contains(&n) => {
                errors.add(
                    field,
                    format!("instance count for treatment {code} must be between {min} and {max}"),
                );
            }
            _ => {}
        }
    }

    match categories {
        0 => errors.add("treatments", "a treatment category is required"),
        1 => {}
        _ => errors.add("treatments", "only one treatment category is allowed"),
    }

    if ethnic_origins > 1 {
        errors.add("treatments", "only one ethnic origin is allowed");
    }
}

fn validate_exemption(claim: &Bcds1, errors: &mut ValidationErrors) {
    let Some(exemption) = claim.exemption_remission else {
        return;
    };

    let age = claim
        .date_of_acceptance
        .and_then(|accepted| claim.patient.age_on(accepted));

    match exemption.code {
        ExemptionCode::PatientUnder18 => {
            if matches!(age, Some(years) if years >= 18) {
                errors.add(
                    "exemption_remission",
                    "patient must be under 18 on the date of acceptance",
                );
            }
        }
        ExemptionCode::Aged18InFullTimeEducation => {
            if matches!(age, Some(years) if years != 18) {
                errors.add(
                    "exemption_remission",
                    "patient must be aged 18 on the date of acceptance",
                );
            }
        }
        ExemptionCode::ExpectantMother | ExemptionCode::NursingMother => {
            if claim.patient.sex == Some(Sex::Male) {
                errors.add(
                    "exemption_remission",
                    format!("{} requires a female patient", exemption.code.description()),
                );
            }
        }
        _ => {}
    }

    if exemption.code.is_full_remission()
        && exemption.evidence_seen
        && claim.patient_charge_pence > 0
    {
        errors.add(
            "patient_charge_pence",
            "must be 0 when a full exemption applies and evidence was seen",
        );
    }
}
