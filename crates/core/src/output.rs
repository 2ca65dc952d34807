//! Validate-and-render entry point for finished claims.

use crate::claim::Bcds1;
use crate::wire::Claim;
use crate::{Fp17Error, Fp17Result};

/// Serialisation used by [`output`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Yaml,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = Fp17Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            "json" => Ok(OutputFormat::Json),
            other => Err(Fp17Error::InvalidInput(format!(
                "unknown output format '{other}' (expected yaml or json)"
            ))),
        }
    }
}

/// Validates `claim` and renders it.
///
/// # Errors
///
/// Returns [`Fp17Error::Validation`] with every field error if the claim is invalid, or a
/// serialisation error if rendering fails.
pub fn output(claim: &Bcds1, format: OutputFormat) -> Fp17Result<String> {
    let errors = claim.get_errors();
    if !errors.is_empty() {
        tracing::warn!(
            transaction_number = claim.transaction_number,
            fields = errors.len(),
            "claim failed validation"
        );
        return Err(Fp17Error::Validation(errors));
    }

    let rendered = match format {
        OutputFormat::Yaml => Claim::render_yaml(claim)?,
        OutputFormat::Json => Claim::render_json(claim)?,
    };

    tracing::debug!(
        transaction_number = claim.transaction_number,
        treatments = claim.treatments.len(),
        ?format,
        "rendered claim"
    );

    Ok(rendered)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patient::Sex;
    use crate::{treatments, SubmitterConfig};
    use chrono::NaiveDate;

    fn claim() -> Bcds1 {
        let mut claim = Bcds1::new(&SubmitterConfig::default());
        claim.patient.surname = "JONES".into();
        claim.patient.forename = "MEGAN".into();
        claim.patient.address = vec!["2 CHURCH LANE".into()];
        claim.patient.sex = Some(Sex::Female);
        claim.patient.date_of_birth = NaiveDate::from_ymd_opt(1990, 2, 3);
        claim.date_of_acceptance = NaiveDate::from_ymd_opt(2017, 6, 1);
        claim.date_of_completion = NaiveDate::from_ymd_opt(2017, 6, 1);
        claim.treatments = vec![treatments::TREATMENT_CATEGORY_URGENT];
        claim
    }

    #[test]
    fn renders_valid_claim_in_requested_format() {
        let yaml = output(&claim(), OutputFormat::Yaml).expect("yaml output");
        assert!(yaml.contains("surname: JONES"));

        let json = output(&claim(), OutputFormat::Json).expect("json output");
        assert!(json.contains("\"surname\": \"JONES\""));
    }

    #[test]
    fn refuses_invalid_claim() {
        let mut claim = claim();
        claim.treatments.clear();

        let err = output(&claim, OutputFormat::Yaml).expect_err("no treatments");
        match err {
            Fp17Error::Validation(errors) => assert!(errors.get("treatments").is_some()),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("YAML".parse::<OutputFormat>().expect("yaml"), OutputFormat::Yaml);
        assert_eq!("yml".parse::<OutputFormat>().expect("yml"), OutputFormat::Yaml);
        assert_eq!(" json ".parse::<OutputFormat>().expect("json"), OutputFormat::Json);
        assert!(matches!(
            "xml".parse::<OutputFormat>(),
            Err(Fp17Error::InvalidInput(msg)) if msg.contains("xml")
        ));
    }
}
