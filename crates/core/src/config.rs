//! Submitter configuration.
//!
//! Every BCDS1 record carries the identity of whoever is making the claim: the contract, the
//! provider, the performer and their DPB PIN. These are resolved once at process startup and
//! passed into record construction, so core code never reads process-wide environment
//! variables.

use crate::constants::{
    DEFAULT_CONTRACT_NUMBER, DEFAULT_DPB_PIN, DEFAULT_PERFORMER_NUMBER, DEFAULT_PROVIDER_NUMBER,
    MAX_CONTRACT_NUMBER, MAX_SITE_LEN, MAX_SIX_DIGIT_NUMBER,
};
use crate::{Fp17Error, Fp17Result};

/// Submitter details resolved at startup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitterConfig {
    contract_number: u64,
    provider_number: u32,
    performer_number: u32,
    dpb_pin: u32,
    site: Option<String>,
}

impl SubmitterConfig {
    /// Create a new `SubmitterConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`Fp17Error::InvalidInput`] if any number is zero or exceeds its digit limit,
    /// or if `site` is not one to five ASCII alphanumerics.
    pub fn new(
        contract_number: u64,
        provider_number: u32,
        performer_number: u32,
        dpb_pin: u32,
        site: Option<String>,
    ) -> Fp17Result<Self> {
        if !(1..=MAX_CONTRACT_NUMBER).contains(&contract_number) {
            return Err(Fp17Error::InvalidInput(format!(
                "contract_number must be between 1 and {MAX_CONTRACT_NUMBER}"
            )));
        }

        for (name, value) in [
            ("provider_number", provider_number),
            ("performer_number", performer_number),
            ("dpb_pin", dpb_pin),
        ] {
            if !(1..=MAX_SIX_DIGIT_NUMBER).contains(&value) {
                return Err(Fp17Error::InvalidInput(format!(
                    "{name} must be between 1 and {MAX_SIX_DIGIT_NUMBER}"
                )));
            }
        }

        if let Some(site) = &site {
            if !is_valid_site(site) {
                return Err(Fp17Error::InvalidInput(format!(
                    "site must be 1 to {MAX_SITE_LEN} ASCII alphanumeric characters"
                )));
            }
        }

        Ok(Self {
            contract_number,
            provider_number,
            performer_number,
            dpb_pin,
            site,
        })
    }

    pub fn contract_number(&self) -> u64 {
        self.contract_number
    }

    pub fn provider_number(&self) -> u32 {
        self.provider_number
    }

    pub fn performer_number(&self) -> u32 {
        self.performer_number
    }

    pub fn dpb_pin(&self) -> u32 {
        self.dpb_pin
    }

    pub fn site(&self) -> Option<&str> {
        self.site.as_deref()
    }
}

impl Default for SubmitterConfig {
    /// The supplier-testing submitter.
    fn default() -> Self {
        Self {
            contract_number: DEFAULT_CONTRACT_NUMBER,
            provider_number: DEFAULT_PROVIDER_NUMBER,
            performer_number: DEFAULT_PERFORMER_NUMBER,
            dpb_pin: DEFAULT_DPB_PIN,
            site: None,
        }
    }
}

pub(crate) fn is_valid_site(site: &str) -> bool {
    (1..=MAX_SITE_LEN).contains(&site.len()) && site.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Raw, optional string values for each submitter field, typically read from the environment.
#[derive(Clone, Debug, Default)]
pub struct SubmitterEnvValues {
    pub contract_number: Option<String>,
    pub provider_number: Option<String>,
    pub performer_number: Option<String>,
    pub dpb_pin: Option<String>,
    pub site: Option<String>,
}

/// Build a [`SubmitterConfig`] from optional string values.
///
/// Missing or empty/whitespace values fall back to the supplier-testing defaults.
pub fn submitter_config_from_env_values(
    values: SubmitterEnvValues,
) -> Fp17Result<SubmitterConfig> {
    fn non_empty(value: Option<String>) -> Option<String> {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_number<T: std::str::FromStr>(
        name: &str,
        value: Option<String>,
        default: T,
    ) -> Fp17Result<T> {
        match non_empty(value) {
            Some(v) => v.parse::<T>().map_err(|_| {
                Fp17Error::InvalidInput(format!("{name} is not a valid number: {v:?}"))
            }),
            None => Ok(default),
        }
    }

    let defaults = SubmitterConfig::default();

    SubmitterConfig::new(
        parse_number(
            "FP17_CONTRACT_NUMBER",
            values.contract_number,
            defaults.contract_number,
        )?,
        parse_number(
            "FP17_PROVIDER_NUMBER",
            values.provider_number,
            defaults.provider_number,
        )?,
        parse_number(
            "FP17_PERFORMER_NUMBER",
            values.performer_number,
            defaults.performer_number,
        )?,
        parse_number("FP17_DPB_PIN", values.dpb_pin, defaults.dpb_pin)?,
        non_empty(values.site).map(|s| s.to_ascii_uppercase()),
    )
}
