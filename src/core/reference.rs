use serde::{Deserialize, Serialize};

/// A reference sequence, reduced to what coverage tracking needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSequence {
    /// Sequence identifier (FASTA name, up to the first whitespace)
    pub id: String,

    /// Sequence length in bases
    pub length: u64,
}

impl ReferenceSequence {
    pub fn new(id: impl Into<String>, length: u64) -> Self {
        Self {
            id: id.into(),
            length,
        }
    }
}

/// Total number of reference bases across a set of sequences.
#[must_use]
pub fn total_length(references: &[ReferenceSequence]) -> u64 {
    references.iter().map(|r| r.length).sum()
}
