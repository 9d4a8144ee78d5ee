//! Structured breakdown of a matched variant notation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which coding-DNA edit alternative matched
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EditKind {
    /// e.g. `c.989G>T`
    Substitution,
    /// e.g. `c.1893delC`
    Deletion,
    /// e.g. `c.1893dupC`
    Duplication,
    /// e.g. `c.112_117insTG`
    Insertion,
    /// e.g. `c.112_117delinsTG`
    DeletionInsertion,
}

impl EditKind {
    /// Get the string representation of the edit kind
    pub fn as_str(&self) -> &'static str {
        match self {
            EditKind::Substitution => "substitution",
            EditKind::Deletion => "deletion",
            EditKind::Duplication => "duplication",
            EditKind::Insertion => "insertion",
            EditKind::DeletionInsertion => "deletion_insertion",
        }
    }
}

impl fmt::Display for EditKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Structural parts of a matched variant notation
///
/// Produced only when the whole pattern matched; there is no partial form.
/// Fields hold the captured substrings verbatim: no case normalization and no
/// numeric parsing (the accession embeds a dotted version, not an integer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantBreakdown {
    /// RefSeq transcript accession with version, e.g. `NM_000410.4`
    pub refseq: String,
    /// Gene symbol, e.g. `HFE`
    pub gene: String,
    /// Coding-DNA change including the `c.` prefix, e.g. `c.989G>T`
    pub cdna: String,
    /// Protein change without the `p.` prefix, e.g. `Arg330Met` or `Phe631Leufs`
    pub protein: String,
    /// Which edit alternative the coding-DNA change matched
    pub kind: EditKind,
}

impl VariantBreakdown {
    /// Whether the protein change is marked as a frameshift
    pub fn is_frameshift(&self) -> bool {
        self.protein.ends_with("fs")
    }
}

impl fmt::Display for VariantBreakdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}({}):{} (p.{})",
            self.refseq, self.gene, self.cdna, self.protein
        )
    }
}
