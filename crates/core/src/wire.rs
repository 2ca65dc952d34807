//! YAML and JSON translation for claim records.
//!
//! Responsibilities:
//! - Define a strict wire model for serialisation/deserialisation
//! - Provide translation helpers between [`Bcds1`] and the wire model
//! - Reject documents that are not BCDS1 claims
//!
//! Notes:
//! - Parsing checks shape only. A parsed claim can still fail [`Bcds1::validate`].

use crate::claim::Bcds1;
use crate::exemptions::ExemptionRemission;
use crate::patient::{Patient, Sex};
use crate::treatments::Treatment;
use crate::{Fp17Error, Fp17Result};
use chrono::NaiveDate;
use fp17_types::{NhsNumber, Postcode};
use serde::{Deserialize, Serialize};
use std::path::Path;

const MESSAGE_TYPE: &str = "BCDS1";

// ============================================================================
// Public Claim operations
// ============================================================================

/// Claim document operations.
///
/// This is a zero-sized type used for namespacing claim translation.
/// All methods are associated functions.
pub struct Claim;

impl Claim {
    /// Parse a claim from YAML text.
    ///
    /// This uses `serde_path_to_error` to surface a best-effort "path" (e.g.
    /// `patient.date_of_birth`) to the failing field when the YAML does not match the wire
    /// schema.
    ///
    /// # Errors
    ///
    /// Returns [`Fp17Error`] if:
    /// - the YAML does not represent a claim,
    /// - any field has an unexpected type or value,
    /// - any unknown keys are present (due to `#[serde(deny_unknown_fields)]`),
    /// - message_type is not "BCDS1".
    pub fn parse_yaml(yaml_text: &str) -> Fp17Result<Bcds1> {
        let deserializer = serde_yaml::Deserializer::from_str(yaml_text);
        let wire = serde_path_to_error::deserialize::<_, ClaimWire>(deserializer)
            .map_err(|err| schema_mismatch(err.path().to_string(), err.into_inner()))?;

        wire_to_domain(wire)
    }

    /// Parse a claim from JSON text. Same rules as [`Claim::parse_yaml`].
    pub fn parse_json(json_text: &str) -> Fp17Result<Bcds1> {
        let mut deserializer = serde_json::Deserializer::from_str(json_text);
        let wire = serde_path_to_error::deserialize::<_, ClaimWire>(&mut deserializer)
            .map_err(|err| schema_mismatch(err.path().to_string(), err.into_inner()))?;

        wire_to_domain(wire)
    }

    /// Read and parse a claim file. Files ending in `.json` are read as JSON, anything else
    /// as YAML.
    pub fn read_file(path: &Path) -> Fp17Result<Bcds1> {
        let text = std::fs::read_to_string(path).map_err(Fp17Error::FileRead)?;
        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        if is_json {
            Self::parse_json(&text)
        } else {
            Self::parse_yaml(&text)
        }
    }

    /// Render a claim as YAML text.
    pub fn render_yaml(claim: &Bcds1) -> Fp17Result<String> {
        let wire = domain_to_wire(claim);
        Ok(serde_yaml::to_string(&wire)?)
    }

    /// Render a claim as pretty-printed JSON text.
    pub fn render_json(claim: &Bcds1) -> Fp17Result<String> {
        let wire = domain_to_wire(claim);
        Ok(serde_json::to_string_pretty(&wire)?)
    }
}

fn schema_mismatch(path: String, source: impl std::fmt::Display) -> Fp17Error {
    let path = if path.is_empty() || path == "." {
        "<root>".to_string()
    } else {
        path
    };
    Fp17Error::Translation(format!("Claim schema mismatch at {path}: {source}"))
}

// ============================================================================
// Wire types (internal)
// ============================================================================

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct ClaimWire {
    message_type: String,

    contract_number: u64,
    provider_number: u32,
    performer_number: u32,
    dpb_pin: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    site: Option<String>,

    transaction_number: u32,
    #[serde(default)]
    resubmission_count: u8,

    patient: PatientWire,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    date_of_acceptance: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date_of_completion: Option<NaiveDate>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    exemption_remission: Option<ExemptionRemission>,
    #[serde(default)]
    patient_charge_pence: u32,

    #[serde(default)]
    treatments: Vec<Treatment>,
}

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
struct PatientWire {
    #[serde(default)]
    surname: String,
    #[serde(default)]
    forename: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    previous_surname: Option<String>,
    #[serde(default)]
    address: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    postcode: Option<Postcode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sex: Option<Sex>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    date_of_birth: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    nhs_number: Option<NhsNumber>,
}

// ============================================================================
// Helper functions (internal)
// ============================================================================

fn wire_to_domain(wire: ClaimWire) -> Fp17Result<Bcds1> {
    if wire.message_type != MESSAGE_TYPE {
        return Err(Fp17Error::InvalidInput(format!(
            "Expected message_type '{MESSAGE_TYPE}', got '{}'",
            wire.message_type
        )));
    }

    let patient = Patient {
        surname: wire.patient.surname,
        forename: wire.patient.forename,
        previous_surname: wire.patient.previous_surname,
        address: wire.patient.address,
        postcode: wire.patient.postcode,
        sex: wire.patient.sex,
        date_of_birth: wire.patient.date_of_birth,
        nhs_number: wire.patient.nhs_number,
    };

    Ok(Bcds1 {
        contract_number: wire.contract_number,
        provider_number: wire.provider_number,
        performer_number: wire.performer_number,
        dpb_pin: wire.dpb_pin,
        site: wire.site,
        transaction_number: wire.transaction_number,
        resubmission_count: wire.resubmission_count,
        patient,
        date_of_acceptance: wire.date_of_acceptance,
        date_of_completion: wire.date_of_completion,
        exemption_remission: wire.exemption_remission,
        patient_charge_pence: wire.patient_charge_pence,
        treatments: wire.treatments,
    })
}

fn domain_to_wire(claim: &Bcds1) -> ClaimWire {
    let patient = &claim.patient;

    ClaimWire {
        message_type: MESSAGE_TYPE.to_string(),
        contract_number: claim.contract_number,
        provider_number: claim.provider_number,
        performer_number: claim.performer_number,
        dpb_pin: claim.dpb_pin,
        site: claim.site.clone(),
        transaction_number: claim.transaction_number,
        resubmission_count: claim.resubmission_count,
        patient: PatientWire {
            surname: patient.surname.clone(),
            forename: patient.forename.clone(),
            previous_surname: patient.previous_surname.clone(),
            address: patient.address.clone(),
            postcode: patient.postcode.clone(),
            sex: patient.sex,
            date_of_birth: patient.date_of_birth,
            nhs_number: patient.nhs_number.clone(),
        },
        date_of_acceptance: claim.date_of_acceptance,
        date_of_completion: claim.date_of_completion,
        exemption_remission: claim.exemption_remission,
        patient_charge_pence: claim.patient_charge_pence,
        treatments: claim.treatments.clone(),
    }
}
