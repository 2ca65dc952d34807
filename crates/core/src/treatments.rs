//! BCDS1 treatment codes.
//!
//! A claim lists its treatments as coded entries. Some codes stand alone (an examination),
//! others carry an instance count: the number of items provided (radiographs, fillings), the
//! treatment band, or a parameter such as the recall interval in months.
//!
//! Un-parameterised treatments are constants; parameterised ones are built with a function
//! taking the count:
//!
//! ```
//! use fp17::treatments;
//!
//! let entries = vec![
//!     treatments::TREATMENT_CATEGORY_BAND_3,
//!     treatments::radiographs(2),
//!     treatments::recall_interval(12),
//! ];
//! assert_eq!(entries[1].instance_count, Some(2));
//! ```
//!
//! [`CATALOGUE`] lists every code this crate knows, with the count rule validation applies.

use serde::{Deserialize, Serialize};

/// One coded treatment entry on a claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Treatment {
    pub code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub instance_count: Option<u16>,
}

impl Treatment {
    /// A treatment entry without an instance count.
    pub const fn new(code: u16) -> Self {
        Self {
            code,
            instance_count: None,
        }
    }

    /// A treatment entry carrying an instance count.
    pub const fn counted(code: u16, instance_count: u16) -> Self {
        Self {
            code,
            instance_count: Some(instance_count),
        }
    }

    /// Looks up this entry's code in the catalogue.
    pub fn definition(&self) -> Option<&'static TreatmentDefinition> {
        definition(self.code)
    }

    /// Human readable description, e.g. `Radiographs x 2` or `Treatment category: Band 3`.
    pub fn describe(&self) -> String {
        let Some(def) = self.definition() else {
            return format!("Unknown treatment {}", self.code);
        };

        match (def.group, self.instance_count) {
            (TreatmentGroup::Category, Some(n)) => match category_name(n) {
                Some(name) => format!("{}: {name}", def.name),
                None => format!("{}: {n}", def.name),
            },
            (TreatmentGroup::RecallInterval, Some(n)) => format!("{} ({n} months)", def.name),
            (_, Some(n)) => format!("{} x {n}", def.name),
            (_, None) => def.name.to_string(),
        }
    }
}

impl std::fmt::Display for Treatment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.instance_count {
            Some(n) => write!(f, "{} {}", self.code, n),
            None => write!(f, "{}", self.code),
        }
    }
}

/// Which part of the claim a code belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TreatmentGroup {
    /// The treatment band or category of the course of treatment.
    Category,
    /// An item of the clinical data set.
    ClinicalDataSet,
    /// Recommended recall interval.
    RecallInterval,
    /// Patient ethnic origin, recorded as a treatment code.
    EthnicOrigin,
}

/// Whether an entry for a code carries an instance count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountRule {
    /// The code stands alone.
    None,
    /// An instance count between `min` and `max` inclusive is required.
    Required { min: u16, max: u16 },
}

/// Catalogue entry for one treatment code.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TreatmentDefinition {
    pub code: u16,
    pub name: &'static str,
    pub group: TreatmentGroup,
    pub count: CountRule,
}

pub const TREATMENT_CATEGORY_CODE: u16 = 9150;
pub const RECALL_INTERVAL_CODE: u16 = 9172;

const ITEM_COUNT: CountRule = CountRule::Required { min: 1, max: 99 };

const fn item(code: u16, name: &'static str, count: CountRule) -> TreatmentDefinition {
    TreatmentDefinition {
        code,
        name,
        group: TreatmentGroup::ClinicalDataSet,
        count,
    }
}

const fn ethnic(code: u16, name: &'static str) -> TreatmentDefinition {
    TreatmentDefinition {
        code,
        name,
        group: TreatmentGroup::EthnicOrigin,
        count: CountRule::None,
    }
}

/// Every treatment code known to this crate.
pub static CATALOGUE: &[TreatmentDefinition] = &[
    TreatmentDefinition {
        code: TREATMENT_CATEGORY_CODE,
        name: "Treatment category",
        group: TreatmentGroup::Category,
        count: CountRule::Required { min: 1, max: 10 },
    },
    TreatmentDefinition {
        code: RECALL_INTERVAL_CODE,
        name: "Recall interval",
        group: TreatmentGroup::RecallInterval,
        count: CountRule::Required { min: 3, max: 24 },
    },
    item(9301, "Scale and polish", CountRule::None),
    item(9302, "Fluoride varnish", CountRule::None),
    item(9303, "Fissure sealants", ITEM_COUNT),
    item(9304, "Radiographs", ITEM_COUNT),
    item(9305, "Endodontic treatment", ITEM_COUNT),
    item(9306, "Permanent fillings and sealant restorations", ITEM_COUNT),
    item(9307, "Extraction", ITEM_COUNT),
    item(9308, "Crown", ITEM_COUNT),
    item(9309, "Upper denture: acrylic", ITEM_COUNT),
    item(9310, "Lower denture: acrylic", ITEM_COUNT),
    item(9311, "Upper denture: metal", ITEM_COUNT),
    item(9312, "Lower denture: metal", ITEM_COUNT),
    item(9313, "Veneers applied", ITEM_COUNT),
    item(9314, "Inlays", ITEM_COUNT),
    item(9315, "Bridges fitted", ITEM_COUNT),
    item(
        9316,
        "Referral for advanced mandatory services (legacy)",
        CountRule::None,
    ),
    item(9317, "Examination", CountRule::None),
    item(9318, "Antibiotic items prescribed", ITEM_COUNT),
    item(9319, "Other treatment", CountRule::None),
    item(9320, "Best practice prevention", CountRule::None),
    ethnic(9025, "Ethnic origin 1: White British"),
    ethnic(9026, "Ethnic origin 2: White Irish"),
    ethnic(9027, "Ethnic origin 3: White other"),
    ethnic(9028, "Ethnic origin 4: White and Black Caribbean"),
    ethnic(9029, "Ethnic origin 5: White and Black African"),
    ethnic(9030, "Ethnic origin 6: White and Asian"),
    ethnic(9031, "Ethnic origin 7: Other mixed background"),
    ethnic(9032, "Ethnic origin 8: Asian or Asian British Indian"),
    ethnic(9033, "Ethnic origin 9: Asian or Asian British Pakistani"),
    ethnic(9034, "Ethnic origin 10: Asian or Asian British Bangladeshi"),
    ethnic(9035, "Ethnic origin 11: Other Asian background"),
    ethnic(9036, "Ethnic origin 12: Black or Black British Caribbean"),
    ethnic(9037, "Ethnic origin 13: Black or Black British African"),
    ethnic(9038, "Ethnic origin 14: Other Black background"),
    ethnic(9039, "Ethnic origin 15: Chinese"),
    ethnic(9040, "Ethnic origin 16: Any other ethnic group"),
    ethnic(9041, "Ethnic origin 99: Patient declined"),
];

/// Looks up a treatment code.
pub fn definition(code: u16) -> Option<&'static TreatmentDefinition> {
    CATALOGUE.iter().find(|def| def.code == code)
}

/// Name of a treatment category instance count.
pub fn category_name(instance_count: u16) -> Option<&'static str> {
    let name = match instance_count {
        1 => "Band 1",
        2 => "Band 2",
        3 => "Band 3",
        4 => "Urgent treatment",
        5 => "Regulation 11 replacement appliance",
        6 => "Prescription only",
        7 => "Denture repairs",
        8 => "Bridge repairs",
        9 => "Arrest of bleeding",
        10 => "Removal of sutures",
        _ => return None,
    };
    Some(name)
}

// Treatment category

pub const fn treatment_category(instance_count: u16) -> Treatment {
    Treatment::counted(TREATMENT_CATEGORY_CODE, instance_count)
}

pub const TREATMENT_CATEGORY_BAND_1: Treatment = treatment_category(1);
pub const TREATMENT_CATEGORY_BAND_2: Treatment = treatment_category(2);
pub const TREATMENT_CATEGORY_BAND_3: Treatment = treatment_category(3);
pub const TREATMENT_CATEGORY_URGENT: Treatment = treatment_category(4);
pub const REGULATION_11_REPLACEMENT_APPLIANCE: Treatment = treatment_category(5);
pub const PRESCRIPTION_ONLY: Treatment = treatment_category(6);
pub const DENTURE_REPAIRS: Treatment = treatment_category(7);
pub const BRIDGE_REPAIRS: Treatment = treatment_category(8);
pub const ARREST_OF_BLEEDING: Treatment = treatment_category(9);
pub const REMOVAL_OF_SUTURES: Treatment = treatment_category(10);

// Clinical data set

pub const SCALE_AND_POLISH: Treatment = Treatment::new(9301);
pub const FLUORIDE_VARNISH: Treatment = Treatment::new(9302);

pub const fn fissure_sealants(count: u16) -> Treatment {
    Treatment::counted(9303, count)
}

pub const fn radiographs(count: u16) -> Treatment {
    Treatment::counted(9304, count)
}

pub const fn endodontic_treatment(count: u16) -> Treatment {
    Treatment::counted(9305, count)
}

pub const fn permanent_fillings_and_sealant_restorations(count: u16) -> Treatment {
    Treatment::counted(9306, count)
}

pub const fn extraction(count: u16) -> Treatment {
    Treatment::counted(9307, count)
}

pub const fn crown(count: u16) -> Treatment {
    Treatment::counted(9308, count)
}

pub const fn upper_denture_acrylic(count: u16) -> Treatment {
    Treatment::counted(9309, count)
}

pub const fn lower_denture_acrylic(count: u16) -> Treatment {
    Treatment::counted(9310, count)
}

pub const fn upper_denture_metal(count: u16) -> Treatment {
    Treatment::counted(9311, count)
}

pub const fn lower_denture_metal(count: u16) -> Treatment {
    Treatment::counted(9312, count)
}

pub const fn veneers_applied(count: u16) -> Treatment {
    Treatment::counted(9313, count)
}

pub const fn inlays(count: u16) -> Treatment {
    Treatment::counted(9314, count)
}

pub const fn bridges_fitted(count: u16) -> Treatment {
    Treatment::counted(9315, count)
}

pub const REFERRAL_FOR_ADVANCED_MANDATORY_SERVICES_LEGACY: Treatment = Treatment::new(9316);
pub const EXAMINATION: Treatment = Treatment::new(9317);

pub const fn antibiotic_items(count: u16) -> Treatment {
    Treatment::counted(9318, count)
}

pub const OTHER_TREATMENT: Treatment = Treatment::new(9319);
pub const BEST_PRACTICE_PREVENTION: Treatment = Treatment::new(9320);

// Recall interval

/// Recommended recall interval in months (NICE guidance allows 3 to 24).
pub const fn recall_interval(num_months: u16) -> Treatment {
    Treatment::counted(RECALL_INTERVAL_CODE, num_months)
}

// Ethnic origin

pub const ETHNIC_ORIGIN_1_WHITE_BRITISH: Treatment = Treatment::new(9025);
pub const ETHNIC_ORIGIN_2_WHITE_IRISH: Treatment = Treatment::new(9026);
pub const ETHNIC_ORIGIN_3_WHITE_OTHER: Treatment = Treatment::new(9027);
pub const ETHNIC_ORIGIN_4_WHITE_AND_BLACK_CARIBBEAN: Treatment = Treatment::new(9028);
pub const ETHNIC_ORIGIN_5_WHITE_AND_BLACK_AFRICAN: Treatment = Treatment::new(9029);
pub const ETHNIC_ORIGIN_6_WHITE_AND_ASIAN: Treatment = Treatment::new(9030);
pub const ETHNIC_ORIGIN_7_OTHER_MIXED_BACKGROUND: Treatment = Treatment::new(9031);
pub const ETHNIC_ORIGIN_8_ASIAN_OR_ASIAN_BRITISH_INDIAN: Treatment = Treatment::new(9032);
pub const ETHNIC_ORIGIN_9_ASIAN_OR_ASIAN_BRITISH_PAKISTANI: Treatment = Treatment::new(9033);
pub const ETHNIC_ORIGIN_10_ASIAN_OR_ASIAN_BRITISH_BANGLADESHI: Treatment = Treatment::new(9034);
pub const ETHNIC_ORIGIN_11_OTHER_ASIAN_BACKGROUND: Treatment = Treatment::new(9035);
pub const ETHNIC_ORIGIN_12_BLACK_OR_BLACK_BRITISH_CARIBBEAN: Treatment = Treatment::new(9036);
pub const ETHNIC_ORIGIN_13_BLACK_OR_BLACK_BRITISH_AFRICAN: Treatment = Treatment::new(9037);
pub const ETHNIC_ORIGIN_14_OTHER_BLACK_BACKGROUND: Treatment = Treatment::new(9038);
pub const ETHNIC_ORIGIN_15_CHINESE: Treatment = Treatment::new(9039);
pub const ETHNIC_ORIGIN_16_ANY_OTHER_ETHNIC_GROUP: Treatment = Treatment::new(9040);
pub const ETHNIC_ORIGIN_PATIENT_DECLINED: Treatment = Treatment::new(9041);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn catalogue_codes_are_unique() {
        let mut seen = HashSet::new();
        for def in CATALOGUE {
            assert!(seen.insert(def.code), "duplicate code {}", def.code);
        }
    }

    #[test]
    fn constructors_agree_with_catalogue_count_rules() {
        let samples = [
            TREATMENT_CATEGORY_BAND_1,
            SCALE_AND_POLISH,
            radiographs(2),
            extraction(6),
            REFERRAL_FOR_ADVANCED_MANDATORY_SERVICES_LEGACY,
            EXAMINATION,
            recall_interval(12),
            ETHNIC_ORIGIN_11_OTHER_ASIAN_BACKGROUND,
            ETHNIC_ORIGIN_PATIENT_DECLINED,
        ];

        for treatment in samples {
            let def = treatment.definition().expect("known code");
            match def.count {
                CountRule::None => assert!(treatment.instance_count.is_none()),
                CountRule::Required { min, max } => {
                    let n = treatment.instance_count.expect("count required");
                    assert!((min..=max).contains(&n));
                }
            }
        }
    }

    #[test]
    fn describes_entries() {
        assert_eq!(
            TREATMENT_CATEGORY_BAND_3.describe(),
            "Treatment category: Band 3"
        );
        assert_eq!(radiographs(2).describe(), "Radiographs x 2");
        assert_eq!(recall_interval(12).describe(), "Recall interval (12 months)");
        assert_eq!(EXAMINATION.describe(), "Examination");
        assert_eq!(Treatment::new(1234).describe(), "Unknown treatment 1234");
    }

    #[test]
    fn display_shows_code_and_count() {
        assert_eq!(recall_interval(12).to_string(), "9172 12");
        assert_eq!(EXAMINATION.to_string(), "9317");
    }

    #[test]
    fn ethnic_origin_constants_are_grouped() {
        let def = ETHNIC_ORIGIN_11_OTHER_ASIAN_BACKGROUND
            .definition()
            .expect("known code");
        assert_eq!(def.group, TreatmentGroup::EthnicOrigin);
        assert!(def.name.contains("Other Asian background"));
    }
}
