use std::collections::HashMap;

use crate::codon::Codon;

/// Standard and organelle-specific codon tables.
///
/// A table maps each codon to its candidate amino-acid symbols. In a
/// well-formed table every codon has exactly one candidate; the candidate
/// lists only exist so the translator can detect a corrupt table instead of
/// silently picking a winner.
#[derive(Debug, Clone)]
pub struct CodonTable {
    pub name: String,
    pub id: u8,
    table: HashMap<String, Vec<String>>,
}

impl CodonTable {
    /// Standard genetic code (NCBI table 1)
    pub fn standard() -> Self {
        let codons = [
            ("UUU", "Phe"), ("UUC", "Phe"), ("UUA", "Leu"), ("UUG", "Leu"),
            ("CUU", "Leu"), ("CUC", "Leu"), ("CUA", "Leu"), ("CUG", "Leu"),
            ("AUU", "Ile"), ("AUC", "Ile"), ("AUA", "Ile"), ("AUG", "Met"),
            ("GUU", "Val"), ("GUC", "Val"), ("GUA", "Val"), ("GUG", "Val"),
            ("UCU", "Ser"), ("UCC", "Ser"), ("UCA", "Ser"), ("UCG", "Ser"),
            ("CCU", "Pro"), ("CCC", "Pro"), ("CCA", "Pro"), ("CCG", "Pro"),
            ("ACU", "Thr"), ("ACC", "Thr"), ("ACA", "Thr"), ("ACG", "Thr"),
            ("GCU", "Ala"), ("GCC", "Ala"), ("GCA", "Ala"), ("GCG", "Ala"),
            ("UAU", "Tyr"), ("UAC", "Tyr"), ("UAA", "Stop"), ("UAG", "Stop"),
            ("CAU", "His"), ("CAC", "His"), ("CAA", "Gln"), ("CAG", "Gln"),
            ("AAU", "Asn"), ("AAC", "Asn"), ("AAA", "Lys"), ("AAG", "Lys"),
            ("GAU", "Asp"), ("GAC", "Asp"), ("GAA", "Glu"), ("GAG", "Glu"),
            ("UGU", "Cys"), ("UGC", "Cys"), ("UGA", "Stop"), ("UGG", "Trp"),
            ("CGU", "Arg"), ("CGC", "Arg"), ("CGA", "Arg"), ("CGG", "Arg"),
            ("AGU", "Ser"), ("AGC", "Ser"), ("AGA", "Arg"), ("AGG", "Arg"),
            ("GGU", "Gly"), ("GGC", "Gly"), ("GGA", "Gly"), ("GGG", "Gly"),
        ];

        let mut table = HashMap::new();
        for (codon, aa) in &codons {
            table.insert(codon.to_string(), vec![aa.to_string()]);
        }

        CodonTable {
            name: "Standard".to_string(),
            id: 1,
            table,
        }
    }

    /// Vertebrate mitochondrial genetic code (NCBI table 2)
    pub fn vertebrate_mitochondrial() -> Self {
        // Same as standard apart from four reassigned codons
        let mut ct = Self::standard();
        ct.name = "Vertebrate Mitochondrial".to_string();
        ct.id = 2;
        for (codon, aa) in [
            ("AGA", "Stop"),
            ("AGG", "Stop"),
            ("AUA", "Met"),
            ("UGA", "Trp"),
        ] {
            ct.table.insert(codon.to_string(), vec![aa.to_string()]);
        }
        ct
    }

    /// Build a table from explicit entries. Mostly useful for test doubles,
    /// including deliberately corrupt tables.
    pub fn from_entries(name: &str, id: u8, entries: &[(&str, &[&str])]) -> Self {
        let mut table = HashMap::new();
        for (codon, candidates) in entries {
            table.insert(
                codon.to_string(),
                candidates.iter().map(|aa| aa.to_string()).collect(),
            );
        }
        CodonTable {
            name: name.to_string(),
            id,
            table,
        }
    }

    /// Candidate amino-acid symbols for a codon; empty if the codon is absent.
    pub fn candidates(&self, codon: &Codon) -> &[String] {
        self.table
            .get(codon.as_str())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
