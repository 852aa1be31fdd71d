use serde::{Deserialize, Serialize};

/// Analysis mode, selected by the subcommand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Plain contigs, no reference
    Denovo,
    /// Contigs carrying mapping metadata against a reference set
    Mapped,
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Denovo => write!(f, "denovo"),
            Self::Mapped => write!(f, "mapped"),
        }
    }
}

/// Contig inclusion cutoffs.
///
/// A value of zero disables the corresponding filter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Cutoffs {
    /// Minimum contig length in bases
    pub min_length: u64,

    /// Minimum mapping identity, `1 - EditDistance / MappedLength`, in `[0, 1]`
    pub min_identity: f64,
}

impl Cutoffs {
    #[must_use]
    pub fn new(min_length: u64, min_identity: f64) -> Self {
        Self {
            min_length,
            min_identity,
        }
    }

    /// True when at least one filter was requested.
    ///
    /// Only an active cutoff set produces a filtered FASTA.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.min_length != 0 || self.min_identity != 0.0
    }
}
