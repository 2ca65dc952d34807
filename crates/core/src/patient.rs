//! Patient demographics carried on a claim.

use chrono::{Datelike, NaiveDate};
use fp17_types::{NhsNumber, Postcode};
use serde::{Deserialize, Serialize};

/// Patient sex as recorded on the claim.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "M")]
    Male,
    #[serde(rename = "F")]
    Female,
}

/// The patient a claim is made for.
///
/// Fields are public and assigned directly once a base record exists. Text fields are not
/// checked on assignment; [`crate::Bcds1::get_errors`] reports anything out of range.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Patient {
    pub surname: String,
    pub forename: String,
    pub previous_surname: Option<String>,
    /// Address lines, first line first. The postcode is held separately.
    pub address: Vec<String>,
    pub postcode: Option<Postcode>,
    pub sex: Option<Sex>,
    pub date_of_birth: Option<NaiveDate>,
    pub nhs_number: Option<NhsNumber>,
}

impl Patient {
    /// Creates a patient with no details filled in.
    pub fn blank() -> Self {
        Self {
            surname: String::new(),
            forename: String::new(),
            previous_surname: None,
            address: Vec::new(),
            postcode: None,
            sex: None,
            date_of_birth: None,
            nhs_number: None,
        }
    }

    /// Age in completed years on `date`, or `None` if the date of birth is unknown or later
    /// than `date`.
    pub fn age_on(&self, date: NaiveDate) -> Option<u32> {
        let dob = self.date_of_birth?;
        if dob > date {
            return None;
        }

        let mut years = date.year() - dob.year();
        if (date.month(), date.day()) < (dob.month(), dob.day()) {
            years -= 1;
        }
        u32::try_from(years).ok()
    }
}

impl Default for Patient {
    fn default() -> Self {
        Self::blank()
    }
}
