use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ChainError;

/// Three-letter symbol, one-letter code, and full name for every amino acid
/// the system knows about: the 20 proteinogenic acids plus Stop.
static AMINO_ACID_KEY: [(&str, char, &str); 21] = [
    ("Ala", 'A', "Alanine"),
    ("Arg", 'R', "Arginine"),
    ("Asn", 'N', "Asparagine"),
    ("Asp", 'D', "Aspartic acid"),
    ("Cys", 'C', "Cysteine"),
    ("Gln", 'Q', "Glutamine"),
    ("Glu", 'E', "Glutamic acid"),
    ("Gly", 'G', "Glycine"),
    ("His", 'H', "Histidine"),
    ("Ile", 'I', "Isoleucine"),
    ("Leu", 'L', "Leucine"),
    ("Lys", 'K', "Lysine"),
    ("Met", 'M', "Methionine"),
    ("Phe", 'F', "Phenylalanine"),
    ("Pro", 'P', "Proline"),
    ("Ser", 'S', "Serine"),
    ("Thr", 'T', "Threonine"),
    ("Trp", 'W', "Tryptophan"),
    ("Tyr", 'Y', "Tyrosine"),
    ("Val", 'V', "Valine"),
    ("Stop", '*', "Stop"),
];

fn key_entry(symbol: &str) -> Option<&'static (&'static str, char, &'static str)> {
    AMINO_ACID_KEY.iter().find(|(s, _, _)| *s == symbol)
}

/// An amino acid, identified by its three-letter symbol (e.g. "Met").
///
/// The symbol must come from the closed key above; [`AminoAcid::parse`] is
/// the only way in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct AminoAcid(String);

impl AminoAcid {
    pub fn parse(symbol: &str) -> Result<Self, ChainError> {
        if key_entry(symbol).is_some() {
            Ok(AminoAcid(symbol.to_string()))
        } else {
            Err(ChainError::UnknownAminoAcid(symbol.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// One-letter IUPAC code ('*' for Stop)
    pub fn code(&self) -> char {
        key_entry(&self.0).map(|(_, code, _)| *code).unwrap_or('X')
    }

    pub fn full_name(&self) -> &'static str {
        key_entry(&self.0).map(|(_, _, name)| *name).unwrap_or("Unknown")
    }
}

impl fmt::Display for AminoAcid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for AminoAcid {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for AminoAcid {
    type Error = ChainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        AminoAcid::parse(&s)
    }
}

impl From<AminoAcid> for String {
    fn from(amino_acid: AminoAcid) -> String {
        amino_acid.0
    }
}
