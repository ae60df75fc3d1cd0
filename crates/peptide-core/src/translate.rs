use crate::amino_acid::AminoAcid;
use crate::codon::Codon;
use crate::table::CodonTable;
use crate::ChainError;

/// Deterministic codon to amino-acid translation over an injected table.
#[derive(Debug, Clone)]
pub struct Translator {
    table: CodonTable,
}

impl Translator {
    pub fn new(table: CodonTable) -> Self {
        Self { table }
    }

    /// Translator over the standard genetic code, the variant the
    /// application selects at startup.
    pub fn standard() -> Self {
        Self::new(CodonTable::standard())
    }

    pub fn table(&self) -> &CodonTable {
        &self.table
    }

    /// Translate one codon.
    ///
    /// Exactly one candidate must exist in the table; zero or several
    /// candidates means the bundled table data is defective, which is
    /// reported as `TableCorrupted` rather than an input error. The single
    /// candidate is checked against the closed amino-acid key before it is
    /// returned.
    pub fn translate(&self, codon: &Codon) -> Result<AminoAcid, ChainError> {
        let candidates = self.table.candidates(codon);
        if candidates.len() != 1 {
            return Err(ChainError::TableCorrupted {
                table: self.table.name.clone(),
                codon: codon.to_string(),
                count: candidates.len(),
            });
        }
        AminoAcid::parse(&candidates[0])
    }
}
