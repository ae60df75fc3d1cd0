use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::ChainError;

fn codon_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new("^[UCAG]{3}$").expect("codon pattern is valid"))
}

/// A single RNA codon: exactly three bases from {U, C, A, G}.
///
/// Only constructible through [`Codon::parse`], so a `Codon` held anywhere
/// in the system is known to be well-formed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Codon(String);

impl Codon {
    pub fn parse(s: &str) -> Result<Self, ChainError> {
        if codon_pattern().is_match(s) {
            Ok(Codon(s.to_string()))
        } else {
            Err(ChainError::InvalidCodon(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Codon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Codon {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Codon {
    type Error = ChainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Codon::parse(&s)
    }
}

impl From<Codon> for String {
    fn from(codon: Codon) -> String {
        codon.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_codons() {
        assert_eq!(Codon::parse("AUG").unwrap().as_str(), "AUG");
        assert_eq!(Codon::parse("UUU").unwrap().as_str(), "UUU");
        assert_eq!(Codon::parse("GCA").unwrap().as_str(), "GCA");
    }

    #[test]
    fn test_parse_rejects_bad_alphabet() {
        assert_eq!(
            Codon::parse("ZZZ"),
            Err(ChainError::InvalidCodon("ZZZ".to_string()))
        );
        // DNA alphabet is not accepted, the model is RNA only
        assert!(Codon::parse("ATG").is_err());
        // lowercase is not accepted either
        assert!(Codon::parse("aug").is_err());
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert!(Codon::parse("").is_err());
        assert!(Codon::parse("AU").is_err());
        assert!(Codon::parse("AUGC").is_err());
    }

    #[test]
    fn test_serde_round_trip() {
        let codon = Codon::parse("AUG").unwrap();
        let json = serde_json::to_string(&codon).unwrap();
        assert_eq!(json, "\"AUG\"");
        let back: Codon = serde_json::from_str(&json).unwrap();
        assert_eq!(back, codon);
    }

    #[test]
    fn test_serde_rejects_invalid() {
        let result: Result<Codon, _> = serde_json::from_str("\"XYZ\"");
        assert!(result.is_err());
    }
}
