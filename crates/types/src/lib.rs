//! Validated value types shared by FP17 claim records.
//!
//! These wrap identifiers that carry their own format rules, so a record holding one of them
//! never needs to re-check it.

/// Errors that can occur when creating validated value types.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum TypeError {
    /// The input was empty or contained only whitespace
    #[error("value cannot be empty")]
    Empty,

    /// An NHS number did not have exactly ten digits
    #[error("NHS number must be 10 digits, got {0:?}")]
    NhsNumberFormat(String),

    /// An NHS number failed the modulus 11 check
    #[error("NHS number {0} has an invalid check digit")]
    NhsNumberCheckDigit(String),

    /// A postcode did not match the UK postcode shape
    #[error("invalid postcode: {0:?}")]
    Postcode(String),
}

/// A ten digit NHS number whose check digit has been verified.
///
/// Spaces and hyphens in the input are ignored, so `943 476 5919` and `943-476-5919` both
/// parse to `9434765919`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NhsNumber(String);

impl NhsNumber {
    /// Parses and checks an NHS number.
    ///
    /// # Errors
    ///
    /// Returns [`TypeError::NhsNumberFormat`] if the input is not ten digits once separators
    /// are removed, or [`TypeError::NhsNumberCheckDigit`] if the modulus 11 check fails.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TypeError> {
        let raw = input.as_ref().trim();
        if raw.is_empty() {
            return Err(TypeError::Empty);
        }

        let digits: String = raw.chars().filter(|c| !matches!(c, ' ' | '-')).collect();
        if digits.len() != 10 || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(TypeError::NhsNumberFormat(raw.to_owned()));
        }

        let values: Vec<u32> = digits.bytes().map(|b| u32::from(b - b'0')).collect();
        let sum: u32 = values[..9]
            .iter()
            .zip((2..=10).rev())
            .map(|(digit, weight)| digit * weight)
            .sum();

        let check = match 11 - (sum % 11) {
            11 => 0,
            10 => return Err(TypeError::NhsNumberCheckDigit(digits)),
            other => other,
        };

        if check != values[9] {
            return Err(TypeError::NhsNumberCheckDigit(digits));
        }

        Ok(Self(digits))
    }

    /// Returns the ten digits without separators.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for NhsNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for NhsNumber {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl serde::Serialize for NhsNumber {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for NhsNumber {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        NhsNumber::new(&s).map_err(serde::de::Error::custom)
    }
}

/// A UK postcode in canonical form: uppercase, with one space before the inward code.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Postcode(String);

impl Postcode {
    /// Parses a UK postcode, normalising case and spacing.
    ///
    /// The outward code is two to four characters starting with a letter and containing a
    /// digit. The inward code is a digit followed by two letters.
    pub fn new(input: impl AsRef<str>) -> Result<Self, TypeError> {
        let raw = input.as_ref().trim();
        if raw.is_empty() {
            return Err(TypeError::Empty);
        }

        let compact: String = raw
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| c.to_ascii_uppercase())
            .collect();

        if !(5..=7).contains(&compact.len()) || !compact.bytes().all(|b| b.is_ascii_alphanumeric())
        {
            return Err(TypeError::Postcode(raw.to_owned()));
        }

        let (outward, inward) = compact.split_at(compact.len() - 3);
        let inward_ok = matches!(
            inward.as_bytes(),
            [d, a, b] if d.is_ascii_digit() && a.is_ascii_alphabetic() && b.is_ascii_alphabetic()
        );
        let outward_ok = outward
            .bytes()
            .next()
            .is_some_and(|b| b.is_ascii_alphabetic())
            && outward.bytes().any(|b| b.is_ascii_digit());

        if !inward_ok || !outward_ok {
            return Err(TypeError::Postcode(raw.to_owned()));
        }

        Ok(Self(format!("{outward} {inward}")))
    }

    /// Returns the canonical postcode.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Postcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for Postcode {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl serde::Serialize for Postcode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Postcode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Postcode::new(&s).map_err(serde::de::Error::custom)
    }
}
