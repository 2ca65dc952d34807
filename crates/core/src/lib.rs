//! # FP17 Core
//!
//! Record library for NHS dental claims: the BCDS1 message of the FP17 scheme.
//!
//! This crate contains pure data operations:
//! - The claim record ([`Bcds1`]) and its [`Patient`]
//! - The treatment code library ([`treatments`]) and exemption codes ([`exemptions`])
//! - Validation collecting every field error on a record
//! - Translation to and from YAML/JSON claim documents
//!
//! **No transport concerns**: submitting claims to the NHS is outside this crate.
//!
//! ```
//! use chrono::NaiveDate;
//! use fp17::{treatments, Bcds1, OutputFormat, Sex, SubmitterConfig};
//!
//! let mut claim = Bcds1::new(&SubmitterConfig::default());
//! claim.patient.surname = "BINGHAM".into();
//! claim.patient.forename = "AVRIL".into();
//! claim.patient.address = vec!["11 HIGH STREET".into()];
//! claim.patient.sex = Some(Sex::Female);
//! claim.patient.date_of_birth = NaiveDate::from_ymd_opt(1969, 10, 7);
//! claim.date_of_acceptance = NaiveDate::from_ymd_opt(2017, 4, 1);
//! claim.date_of_completion = NaiveDate::from_ymd_opt(2017, 5, 1);
//! claim.treatments = vec![treatments::TREATMENT_CATEGORY_BAND_1, treatments::EXAMINATION];
//!
//! let yaml = fp17::output(&claim, OutputFormat::Yaml)?;
//! assert!(yaml.contains("surname: BINGHAM"));
//! # Ok::<(), fp17::Fp17Error>(())
//! ```

pub mod claim;
pub mod config;
pub mod constants;
pub mod error;
pub mod exemptions;
pub mod output;
pub mod patient;
pub mod treatments;
pub mod validation;
pub mod wire;

pub use claim::Bcds1;
pub use config::{submitter_config_from_env_values, SubmitterConfig, SubmitterEnvValues};
pub use error::{Fp17Error, Fp17Result};
pub use exemptions::{ExemptionCode, ExemptionRemission};
pub use output::{output, OutputFormat};
pub use patient::{Patient, Sex};
pub use treatments::Treatment;
pub use validation::ValidationErrors;
pub use wire::Claim;

pub use fp17_types::{NhsNumber, Postcode};
