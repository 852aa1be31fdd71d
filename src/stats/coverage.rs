//! Reference coverage tracking.
//!
//! Each reference sequence owns a [`BitVec`] with one bit per base. Accepted
//! contigs set the bits of their mapped span; coverage is the population count
//! across all maps divided by the total reference length. Only covered versus
//! uncovered is tracked, never depth.

use std::collections::HashMap;

use bit_vec::BitVec;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::reference::ReferenceSequence;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CoverageError {
    #[error("Unknown reference sequence '{0}'")]
    UnknownReference(String),

    #[error(
        "Mapped span {start}-{end} (1-based, length {length}) lies outside reference '{reference}' of length {reference_length}"
    )]
    OutOfBounds {
        reference: String,
        start: u64,
        end: u64,
        length: u64,
        reference_length: u64,
    },
}

/// Occupancy bitmap for one reference sequence
#[derive(Debug, Clone)]
struct CoverageMap {
    id: String,
    bits: BitVec,
}

impl CoverageMap {
    fn covered(&self) -> u64 {
        // bit-vec keeps the unused tail of the last block cleared
        self.bits
            .blocks()
            .map(|block| u64::from(block.count_ones()))
            .sum()
    }
}

/// Covered-base bookkeeping for a fixed set of reference sequences
#[derive(Debug, Clone)]
pub struct CoverageTracker {
    maps: Vec<CoverageMap>,
    index: HashMap<String, usize>,
    total_length: u64,
}

impl CoverageTracker {
    /// Allocate one all-uncovered map per reference.
    ///
    /// When an identifier repeats, coverage is routed to its first occurrence,
    /// but every occurrence still counts towards the total reference length.
    #[must_use]
    pub fn new(references: &[ReferenceSequence]) -> Self {
        let mut maps = Vec::with_capacity(references.len());
        let mut index = HashMap::with_capacity(references.len());
        let mut total_length = 0u64;

        for reference in references {
            total_length += reference.length;
            if index.contains_key(&reference.id) {
                warn!(
                    "Duplicate reference sequence '{}'; coverage goes to the first occurrence",
                    reference.id
                );
            } else {
                index.insert(reference.id.clone(), maps.len());
            }

            maps.push(CoverageMap {
                id: reference.id.clone(),
                bits: BitVec::from_elem(reference.length as usize, false),
            });
        }

        debug!(
            "Allocated coverage maps for {} references ({total_length} bp)",
            maps.len()
        );

        Self {
            maps,
            index,
            total_length,
        }
    }

    /// Number of reference sequences tracked
    #[must_use]
    pub fn len(&self) -> usize {
        self.maps.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.maps.is_empty()
    }

    /// Sum of all reference lengths
    #[must_use]
    pub fn total_length(&self) -> u64 {
        self.total_length
    }

    /// Mark `span` bases starting at the 1-based position `start` as covered.
    ///
    /// Marking an already covered base has no effect.
    ///
    /// # Errors
    ///
    /// Returns `CoverageError::UnknownReference` if `reference_id` is not tracked,
    /// or `CoverageError::OutOfBounds` if the span does not fit inside the reference.
    pub fn record_coverage(
        &mut self,
        reference_id: &str,
        start: u64,
        span: u64,
    ) -> Result<(), CoverageError> {
        let slot = *self
            .index
            .get(reference_id)
            .ok_or_else(|| CoverageError::UnknownReference(reference_id.to_string()))?;
        let map = &mut self.maps[slot];
        let reference_length = map.bits.len() as u64;

        let begin = start.checked_sub(1);
        let end = begin.and_then(|b| b.checked_add(span));
        let (begin, end) = match (begin, end) {
            (Some(begin), Some(end)) if end <= reference_length => (begin, end),
            _ => {
                return Err(CoverageError::OutOfBounds {
                    reference: reference_id.to_string(),
                    start,
                    end: start.saturating_sub(1).saturating_add(span),
                    length: span,
                    reference_length,
                })
            }
        };

        for position in begin as usize..end as usize {
            map.bits.set(position, true);
        }
        Ok(())
    }

    /// Covered bases across all references
    #[must_use]
    pub fn covered_bases(&self) -> u64 {
        self.maps.iter().map(CoverageMap::covered).sum()
    }

    /// `100 * covered / total`, or 0 when the references have no bases.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn total_coverage_percent(&self) -> f64 {
        if self.total_length == 0 {
            return 0.0;
        }
        100.0 * (self.covered_bases() as f64 / self.total_length as f64)
    }

    /// Per-reference `(id, covered, length)` triples, in reference order
    pub fn per_reference(&self) -> impl Iterator<Item = (&str, u64, u64)> + '_ {
        self.maps
            .iter()
            .map(|map| (map.id.as_str(), map.covered(), map.bits.len() as u64))
    }
}
