//! Contig inclusion filtering.
//!
//! A contig is accepted when it passes both the length cutoff and, in mapped
//! mode, the identity cutoff. A cutoff of zero always passes. Accepted records
//! can be copied verbatim to a filtered FASTA stream.

use std::io::Write;

use noodles::fasta;

use crate::core::contig::ContigRecord;
use crate::core::types::{Cutoffs, Mode};

/// Outcome of filtering a single contig
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Reject,
}

/// Length and identity filter, with an optional filtered-FASTA sink
pub struct FilterPipeline<W: Write> {
    mode: Mode,
    cutoffs: Cutoffs,
    output: Option<fasta::io::Writer<W>>,
    accepted: usize,
    rejected: usize,
}

impl<W: Write> FilterPipeline<W> {
    /// Create a filter without an output sink.
    ///
    /// The identity cutoff is ignored in de novo mode.
    #[must_use]
    pub fn new(mode: Mode, cutoffs: Cutoffs) -> Self {
        Self {
            mode,
            cutoffs,
            output: None,
            accepted: 0,
            rejected: 0,
        }
    }

    /// Copy every accepted record to `writer` as FASTA.
    #[must_use]
    pub fn with_output(mut self, writer: W) -> Self {
        self.output = Some(fasta::io::Writer::new(writer));
        self
    }

    /// Number of contigs accepted so far
    #[must_use]
    pub fn accepted(&self) -> usize {
        self.accepted
    }

    /// Number of contigs rejected so far
    #[must_use]
    pub fn rejected(&self) -> usize {
        self.rejected
    }

    /// Decide whether `contig` passes the cutoffs. Pure; no counters change.
    #[must_use]
    pub fn decide(&self, contig: &ContigRecord) -> Decision {
        let Cutoffs {
            min_length,
            min_identity,
        } = self.cutoffs;

        let identity_ok = self.mode == Mode::Denovo
            || min_identity == 0.0
            || contig
                .mapping
                .as_ref()
                .is_some_and(|mapping| mapping.identity() >= min_identity);
        let length_ok = min_length == 0 || contig.length >= min_length;

        if identity_ok && length_ok {
            Decision::Accept
        } else {
            Decision::Reject
        }
    }

    /// Filter one contig, writing its source `record` to the sink when accepted.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the filtered record cannot be written.
    pub fn apply(
        &mut self,
        record: &fasta::Record,
        contig: &ContigRecord,
    ) -> std::io::Result<Decision> {
        let decision = self.decide(contig);
        match decision {
            Decision::Accept => {
                self.accepted += 1;
                if let Some(writer) = self.output.as_mut() {
                    writer.write_record(record)?;
                }
            }
            Decision::Reject => self.rejected += 1,
        }
        Ok(decision)
    }
}
