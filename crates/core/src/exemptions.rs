//! Exemption and remission classifications.
//!
//! A claim records why a patient is exempt from, or pays less than, the NHS dental charge,
//! and whether the practice saw evidence of it. A claim with no exemption is a fee-paying
//! adult.

use serde::{Deserialize, Serialize};

/// Reason for exemption from or remission of patient charges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ExemptionCode {
    PatientUnder18,
    FullRemissionHc2,
    PartialRemissionHc3,
    ExpectantMother,
    NursingMother,
    Aged18InFullTimeEducation,
    IncomeSupport,
    JobseekersAllowance,
    PensionCreditGuaranteeCredit,
    Prisoner,
    UniversalCredit,
    IncomeRelatedEmploymentAndSupportAllowance,
    TaxCreditExemptionCertificate,
}

impl ExemptionCode {
    pub const ALL: [ExemptionCode; 13] = [
        ExemptionCode::PatientUnder18,
        ExemptionCode::FullRemissionHc2,
        ExemptionCode::PartialRemissionHc3,
        ExemptionCode::ExpectantMother,
        ExemptionCode::NursingMother,
        ExemptionCode::Aged18InFullTimeEducation,
        ExemptionCode::IncomeSupport,
        ExemptionCode::JobseekersAllowance,
        ExemptionCode::PensionCreditGuaranteeCredit,
        ExemptionCode::Prisoner,
        ExemptionCode::UniversalCredit,
        ExemptionCode::IncomeRelatedEmploymentAndSupportAllowance,
        ExemptionCode::TaxCreditExemptionCertificate,
    ];

    /// Numeric code written to the record.
    pub fn code(self) -> u8 {
        match self {
            ExemptionCode::PatientUnder18 => 1,
            ExemptionCode::FullRemissionHc2 => 2,
            ExemptionCode::PartialRemissionHc3 => 3,
            ExemptionCode::ExpectantMother => 4,
            ExemptionCode::NursingMother => 5,
            ExemptionCode::Aged18InFullTimeEducation => 6,
            ExemptionCode::IncomeSupport => 7,
            ExemptionCode::JobseekersAllowance => 8,
            ExemptionCode::PensionCreditGuaranteeCredit => 9,
            ExemptionCode::Prisoner => 10,
            ExemptionCode::UniversalCredit => 11,
            ExemptionCode::IncomeRelatedEmploymentAndSupportAllowance => 12,
            ExemptionCode::TaxCreditExemptionCertificate => 13,
        }
    }

    /// Parses a numeric code.
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.code() == code)
    }

    pub fn description(self) -> &'static str {
        match self {
            ExemptionCode::PatientUnder18 => "Patient under 18",
            ExemptionCode::FullRemissionHc2 => "Full remission (HC2 certificate)",
            ExemptionCode::PartialRemissionHc3 => "Partial remission (HC3 certificate)",
            ExemptionCode::ExpectantMother => "Expectant mother",
            ExemptionCode::NursingMother => "Nursing mother",
            ExemptionCode::Aged18InFullTimeEducation => "Aged 18 in full time education",
            ExemptionCode::IncomeSupport => "Income support",
            ExemptionCode::JobseekersAllowance => "Income-based jobseeker's allowance",
            ExemptionCode::PensionCreditGuaranteeCredit => "Pension credit guarantee credit",
            ExemptionCode::Prisoner => "Prisoner",
            ExemptionCode::UniversalCredit => "Universal credit",
            ExemptionCode::IncomeRelatedEmploymentAndSupportAllowance => {
                "Income-related employment and support allowance"
            }
            ExemptionCode::TaxCreditExemptionCertificate => "Tax credit exemption certificate",
        }
    }

    /// Whether this reason removes the whole charge. Only an HC3 certificate leaves part of it.
    pub fn is_full_remission(self) -> bool {
        self != ExemptionCode::PartialRemissionHc3
    }

    pub fn evidence_seen(self) -> ExemptionRemission {
        ExemptionRemission {
            code: self,
            evidence_seen: true,
        }
    }

    pub fn evidence_not_seen(self) -> ExemptionRemission {
        ExemptionRemission {
            code: self,
            evidence_seen: false,
        }
    }
}

impl Serialize for ExemptionCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u8(self.code())
    }
}

impl<'de> Deserialize<'de> for ExemptionCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let code = u8::deserialize(deserializer)?;
        ExemptionCode::from_code(code)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown exemption code {code}")))
    }
}

/// The exemption/remission classification of a claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExemptionRemission {
    pub code: ExemptionCode,
    pub evidence_seen: bool,
}

impl std::fmt::Display for ExemptionRemission {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let evidence = if self.evidence_seen {
            "Evidence Seen"
        } else {
            "Evidence Not Seen"
        };
        write!(f, "{} ({evidence})", self.code.description())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_round_trip_through_numbers() {
        for code in ExemptionCode::ALL {
            assert_eq!(ExemptionCode::from_code(code.code()), Some(code));
        }
        assert_eq!(ExemptionCode::from_code(0), None);
        assert_eq!(ExemptionCode::from_code(14), None);
    }

    #[test]
    fn only_hc3_is_partial() {
        let partial: Vec<_> = ExemptionCode::ALL
            .into_iter()
            .filter(|c| !c.is_full_remission())
            .collect();
        assert_eq!(partial, vec![ExemptionCode::PartialRemissionHc3]);
    }

    #[test]
    fn displays_evidence_state() {
        let exemption = ExemptionCode::NursingMother.evidence_not_seen();
        assert_eq!(exemption.to_string(), "Nursing mother (Evidence Not Seen)");
        assert!(!exemption.evidence_seen);
    }

    #[test]
    fn rejects_unknown_numeric_code() {
        let err = serde_json::from_str::<ExemptionRemission>(
            r#"{"code": 42, "evidence_seen": true}"#,
        )
        .expect_err("unknown code");
        assert!(err.to_string().contains("unknown exemption code 42"));
    }
}
