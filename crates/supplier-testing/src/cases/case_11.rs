use crate::get_base;
use chrono::NaiveDate;
use fp17::{treatments, Bcds1, ExemptionCode, Sex, SubmitterConfig};

/// Band 3 course for an adult nursing mother whose evidence was not seen.
///
/// Treatments: band 3, radiographs x 2, fillings x 2, extractions x 6, referral for advanced
/// mandatory services, recall interval 12 months, ethnic origin 11. The examination is covered
/// by the band and is not coded separately.
pub fn case_11(submitter: &SubmitterConfig) -> Bcds1 {
    let mut bcds1 = get_base(submitter);

    bcds1.patient.surname = "BINGHAM".into();
    bcds1.patient.forename = "AVRIL".into();
    bcds1.patient.address = vec!["11 HIGH STREET".into()];
    bcds1.patient.sex = Some(Sex::Female);
    bcds1.patient.date_of_birth = NaiveDate::from_ymd_opt(1969, 10, 7);

    bcds1.date_of_acceptance = NaiveDate::from_ymd_opt(2017, 4, 1);
    bcds1.date_of_completion = NaiveDate::from_ymd_opt(2017, 5, 1);

    bcds1.exemption_remission = Some(ExemptionCode::NursingMother.evidence_not_seen());

    bcds1.treatments = vec![
        treatments::TREATMENT_CATEGORY_BAND_3,
        treatments::radiographs(2),
        treatments::permanent_fillings_and_sealant_restorations(2),
        treatments::extraction(6),
        treatments::REFERRAL_FOR_ADVANCED_MANDATORY_SERVICES_LEGACY,
        treatments::recall_interval(12),
        treatments::ETHNIC_ORIGIN_11_OTHER_ASIAN_BACKGROUND,
    ];

    bcds1
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output;
    use fp17::{Claim, OutputFormat};

    #[test]
    fn populates_patient_and_dates() {
        let bcds1 = case_11(&SubmitterConfig::default());

        assert_eq!(bcds1.patient.surname, "BINGHAM");
        assert_eq!(bcds1.patient.forename, "AVRIL");
        assert_eq!(bcds1.patient.address, vec!["11 HIGH STREET".to_string()]);
        assert_eq!(bcds1.patient.sex, Some(Sex::Female));
        assert_eq!(
            bcds1.patient.date_of_birth,
            NaiveDate::from_ymd_opt(1969, 10, 7)
        );
        assert_eq!(bcds1.date_of_acceptance, NaiveDate::from_ymd_opt(2017, 4, 1));
        assert_eq!(bcds1.date_of_completion, NaiveDate::from_ymd_opt(2017, 5, 1));
    }

    #[test]
    fn treatments_keep_recorded_order() {
        let bcds1 = case_11(&SubmitterConfig::default());
        let codes: Vec<String> = bcds1.treatments.iter().map(ToString::to_string).collect();

        assert_eq!(
            codes,
            vec!["9150 3", "9304 2", "9306 2", "9307 6", "9316", "9172 12", "9035"]
        );
    }

    #[test]
    fn exemption_is_nursing_mother_without_evidence() {
        let bcds1 = case_11(&SubmitterConfig::default());
        let exemption = bcds1.exemption_remission.expect("exemption set");

        assert_eq!(exemption.code, ExemptionCode::NursingMother);
        assert!(!exemption.evidence_seen);
    }

    #[test]
    fn output_round_trips() {
        let bcds1 = case_11(&SubmitterConfig::default());
        let yaml = output(&bcds1, OutputFormat::Yaml).expect("valid case");

        assert!(yaml.contains("surname: BINGHAM"));
        assert_eq!(Claim::parse_yaml(&yaml).expect("reparse"), bcds1);
    }
}
