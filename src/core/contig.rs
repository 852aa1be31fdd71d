use serde::{Deserialize, Serialize};

/// Alignment metadata carried in a mapped-mode contig description.
///
/// Only the four fields used for filtering and coverage are kept; the
/// remaining six fields of the description are validated for presence only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingInfo {
    /// Reference sequence the contig was mapped to (`ReferenceID`)
    pub reference_id: String,

    /// 1-based start of the mapped span on the reference (`MappedStartPositionInReference`)
    pub mapped_start: u64,

    /// Length of the mapped span (`MappedLength`), never less than 1
    pub mapped_length: u64,

    /// Edit distance of the alignment (`EditDistance`)
    pub edit_distance: u64,
}

impl MappingInfo {
    /// Mapping identity, `1 - edit_distance / mapped_length`.
    ///
    /// May be negative when the edit distance exceeds the mapped length.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn identity(&self) -> f64 {
        1.0 - (self.edit_distance as f64 / self.mapped_length.max(1) as f64)
    }
}

/// A single contig read from the assembly FASTA
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContigRecord {
    /// Record name
    pub id: String,

    /// Number of bases in the sequence
    pub length: u64,

    /// Mapping metadata (mapped mode only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mapping: Option<MappingInfo>,
}

impl ContigRecord {
    pub fn new(id: impl Into<String>, length: u64) -> Self {
        Self {
            id: id.into(),
            length,
            mapping: None,
        }
    }

    #[must_use]
    pub fn with_mapping(mut self, mapping: MappingInfo) -> Self {
        self.mapping = Some(mapping);
        self
    }
}
