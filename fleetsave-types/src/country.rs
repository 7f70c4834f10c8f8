use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// ISO 3166-1 alpha-2 country code, stored uppercase.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CountryCode(String);

/// Belgium, the only single-country restriction that yields savings.
pub const BELGIUM: &str = "BE";

/// Countries the fleet can be restricted to.
pub const EURO_COUNTRIES: &[&str] = &[
    "AT", "BE", "BG", "CH", "CY", "CZ", "DE", "DK", "EE", "ES", "FI", "FR", "GB", "GR", "HR",
    "HU", "IE", "IS", "IT", "LI", "LT", "LU", "LV", "MT", "NL", "NO", "PL", "PT", "RO", "SE",
    "SI", "SK",
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid country code '{input}': expected two ASCII letters")]
pub struct ParseCountryCodeError {
    pub input: String,
}

impl CountryCode {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_belgium(&self) -> bool {
        self.0 == BELGIUM
    }

    /// Whether the code is one of [`EURO_COUNTRIES`].
    pub fn is_selectable(&self) -> bool {
        EURO_COUNTRIES.contains(&self.0.as_str())
    }
}

impl FromStr for CountryCode {
    type Err = ParseCountryCodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(ParseCountryCodeError {
                input: s.to_string(),
            });
        }
        Ok(CountryCode(trimmed.to_ascii_uppercase()))
    }
}

impl TryFrom<String> for CountryCode {
    type Error = ParseCountryCodeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CountryCode> for String {
    fn from(code: CountryCode) -> Self {
        code.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
