use serde::Serialize;
use uuid::Uuid;

use crate::amino_acid::AminoAcid;
use crate::codon::Codon;
use crate::translate::Translator;
use crate::ChainError;

/// Longest chain the display layer is prepared to render.
pub const MAX_DISPLAY_LEN: usize = 9999;

/// An ordered codon chain paired with its translated amino acids.
///
/// The two sequences always have the same length, and amino acid `i` is the
/// translation of codon `i`. Every mutation validates its inputs and runs
/// the translation before touching either sequence, so a failed call leaves
/// the chain exactly as it was.
#[derive(Debug, Clone, Serialize)]
pub struct CodonChain {
    pub id: Uuid,
    codons: Vec<Codon>,
    amino_acids: Vec<AminoAcid>,
    #[serde(skip)]
    translator: Translator,
    max_len: Option<usize>,
}

impl CodonChain {
    /// An empty, unbounded chain using the given translator.
    pub fn new(translator: Translator) -> Self {
        Self {
            id: Uuid::new_v4(),
            codons: Vec::new(),
            amino_acids: Vec::new(),
            translator,
            max_len: None,
        }
    }

    /// An empty chain that refuses to grow past `max` codons.
    pub fn with_max_len(translator: Translator, max: usize) -> Self {
        Self {
            max_len: Some(max),
            ..Self::new(translator)
        }
    }

    /// Append a codon and its translation.
    pub fn push(&mut self, codon: &str) -> Result<(), ChainError> {
        let codon = Codon::parse(codon)?;
        self.check_capacity()?;
        let amino_acid = self.translator.translate(&codon)?;
        self.codons.push(codon);
        self.amino_acids.push(amino_acid);
        self.check_sync();
        Ok(())
    }

    /// Splice a codon and its translation in at `index`. `index == len()`
    /// appends; anything larger is out of range.
    pub fn insert(&mut self, index: usize, codon: &str) -> Result<(), ChainError> {
        let codon = Codon::parse(codon)?;
        if index > self.codons.len() {
            return Err(self.out_of_range(index));
        }
        self.check_capacity()?;
        let amino_acid = self.translator.translate(&codon)?;
        self.codons.insert(index, codon);
        self.amino_acids.insert(index, amino_acid);
        self.check_sync();
        Ok(())
    }

    /// Replace the codon at `index`, retranslating in place.
    pub fn set(&mut self, index: usize, codon: &str) -> Result<(), ChainError> {
        if index >= self.codons.len() {
            return Err(self.out_of_range(index));
        }
        let codon = Codon::parse(codon)?;
        let amino_acid = self.translator.translate(&codon)?;
        self.codons[index] = codon;
        self.amino_acids[index] = amino_acid;
        self.check_sync();
        Ok(())
    }

    /// Remove the codon and amino acid at `index`, shifting the rest down.
    pub fn delete(&mut self, index: usize) -> Result<(), ChainError> {
        if index >= self.codons.len() {
            return Err(self.out_of_range(index));
        }
        self.codons.remove(index);
        self.amino_acids.remove(index);
        self.check_sync();
        Ok(())
    }

    pub fn get(&self, index: usize) -> Result<&Codon, ChainError> {
        self.codons.get(index).ok_or_else(|| self.out_of_range(index))
    }

    pub fn get_amino_acid(&self, index: usize) -> Result<&AminoAcid, ChainError> {
        self.amino_acids
            .get(index)
            .ok_or_else(|| self.out_of_range(index))
    }

    pub fn codons(&self) -> &[Codon] {
        &self.codons
    }

    pub fn amino_acids(&self) -> &[AminoAcid] {
        &self.amino_acids
    }

    pub fn len(&self) -> usize {
        self.codons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codons.is_empty()
    }

    pub fn max_len(&self) -> Option<usize> {
        self.max_len
    }

    /// Empty both sequences. Infallible and idempotent.
    pub fn clear(&mut self) {
        self.codons.clear();
        self.amino_acids.clear();
    }

    fn check_capacity(&self) -> Result<(), ChainError> {
        match self.max_len {
            Some(max) if self.codons.len() >= max => Err(ChainError::CapacityExceeded(max)),
            _ => Ok(()),
        }
    }

    fn out_of_range(&self, index: usize) -> ChainError {
        ChainError::IndexOutOfRange {
            index,
            len: self.codons.len(),
        }
    }

    // Stored values are valid by construction; only the pairing of the two
    // sequences can drift, and drifting here means a bug in this file.
    fn check_sync(&self) {
        debug_assert_eq!(self.codons.len(), self.amino_acids.len());
    }
}
