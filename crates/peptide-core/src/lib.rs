pub mod amino_acid;
pub mod chain;
pub mod codon;
pub mod table;
pub mod translate;

pub use amino_acid::AminoAcid;
pub use chain::{CodonChain, MAX_DISPLAY_LEN};
pub use codon::Codon;
pub use table::CodonTable;
pub use translate::Translator;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ChainError {
    #[error("Invalid codon {0:?}: expected 3 bases from {{U, C, A, G}}")]
    InvalidCodon(String),
    #[error("Index {index} is out of range for chain of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Chain is already at its maximum length of {0}")]
    CapacityExceeded(usize),
    #[error("Codon table {table:?} is corrupt: {count} candidates for codon {codon}")]
    TableCorrupted {
        table: String,
        codon: String,
        count: usize,
    },
    #[error("Unknown amino acid symbol {0:?}")]
    UnknownAminoAcid(String),
}
