//! The assembly analyzer state machine.
//!
//! ```text
//! denovo: Start -> ParsingContigs -> Aggregating -> Reporting -> Done
//! mapped: Start -> ParsingReferences -> ParsingContigs -> Aggregating -> Reporting -> Done
//! ```
//!
//! Any error moves the analyzer to `Failed` and no report is produced.

use std::io::{BufRead, Write};

use noodles::fasta;
use tracing::{debug, info};

use crate::analysis::filter::{Decision, FilterPipeline};
use crate::analysis::report::AssemblyReport;
use crate::analysis::AnalysisError;
use crate::core::contig::ContigRecord;
use crate::core::reference::ReferenceSequence;
use crate::core::types::Mode;
use crate::parsing::fasta::{contig_from_record, read_references, ParseError};
use crate::stats::coverage::CoverageTracker;
use crate::stats::length::{milestones, LengthDistribution, LengthStatistics};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalyzerState {
    Start,
    ParsingReferences,
    ParsingContigs,
    Aggregating,
    Reporting,
    Done,
    Failed(String),
}

impl std::fmt::Display for AnalyzerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Start => write!(f, "starting"),
            Self::ParsingReferences => write!(f, "parsing references"),
            Self::ParsingContigs => write!(f, "parsing contigs"),
            Self::Aggregating => write!(f, "aggregating"),
            Self::Reporting => write!(f, "reporting"),
            Self::Done => write!(f, "done"),
            Self::Failed(reason) => write!(f, "failed ({reason})"),
        }
    }
}

/// Single-invocation owner of the filter, length accumulator and coverage maps
pub struct AssemblyAnalyzer<W: Write> {
    mode: Mode,
    state: AnalyzerState,
    filter: FilterPipeline<W>,
    coverage: Option<CoverageTracker>,
    lengths: Vec<u64>,
    sum: u64,
}

impl<W: Write> AssemblyAnalyzer<W> {
    #[must_use]
    pub fn new(mode: Mode, filter: FilterPipeline<W>) -> Self {
        Self {
            mode,
            state: AnalyzerState::Start,
            filter,
            coverage: None,
            lengths: Vec::new(),
            sum: 0,
        }
    }

    #[must_use]
    pub fn state(&self) -> &AnalyzerState {
        &self.state
    }

    /// Read every reference record and size one coverage map per sequence.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidState` outside mapped mode or after
    /// contigs were processed, and `AnalysisError::Parse` on a malformed record.
    pub fn load_references<R: BufRead>(
        &mut self,
        reader: &mut fasta::io::Reader<R>,
    ) -> Result<(), AnalysisError> {
        self.expect_reference_phase("load references")?;
        self.state = AnalyzerState::ParsingReferences;

        let references = read_references(reader).map_err(|e| self.fail(e.into()))?;
        self.install_references(&references);
        Ok(())
    }

    /// Use an already loaded reference set.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidState` outside mapped mode or after
    /// contigs were processed.
    pub fn set_references(
        &mut self,
        references: &[ReferenceSequence],
    ) -> Result<(), AnalysisError> {
        self.expect_reference_phase("set references")?;
        self.state = AnalyzerState::ParsingReferences;
        self.install_references(references);
        Ok(())
    }

    fn expect_reference_phase(&self, action: &'static str) -> Result<(), AnalysisError> {
        if self.mode == Mode::Mapped && self.state == AnalyzerState::Start {
            Ok(())
        } else {
            Err(self.invalid(action))
        }
    }

    fn install_references(&mut self, references: &[ReferenceSequence]) {
        let tracker = CoverageTracker::new(references);
        info!(
            "Loaded {} reference sequences ({} bp)",
            tracker.len(),
            tracker.total_length()
        );
        self.coverage = Some(tracker);
    }

    /// Stream every contig record through the filter and fold accepted ones in.
    ///
    /// May be called more than once to process several contig sources.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidState` if references are still missing in
    /// mapped mode, or any parse, coverage or output error. Errors leave the
    /// analyzer in `Failed`.
    pub fn process_contigs<R: BufRead>(
        &mut self,
        reader: &mut fasta::io::Reader<R>,
    ) -> Result<(), AnalysisError> {
        let ready = match (self.mode, &self.state) {
            (Mode::Denovo, AnalyzerState::Start) => true,
            (Mode::Mapped, AnalyzerState::ParsingReferences) => self.coverage.is_some(),
            (_, AnalyzerState::ParsingContigs) => true,
            _ => false,
        };
        if !ready {
            return Err(self.invalid("process contigs"));
        }
        self.state = AnalyzerState::ParsingContigs;

        for result in reader.records() {
            let record = result
                .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))
                .map_err(|e| self.fail(e.into()))?;
            self.process_record(&record)
                .map_err(|e| self.fail(e))?;
        }

        debug!(
            "Processed contigs: {} accepted, {} rejected",
            self.filter.accepted(),
            self.filter.rejected()
        );
        Ok(())
    }

    fn process_record(&mut self, record: &fasta::Record) -> Result<(), AnalysisError> {
        let contig = contig_from_record(record, self.mode)?;
        let decision = self
            .filter
            .apply(record, &contig)
            .map_err(AnalysisError::FilteredOutput)?;

        if decision == Decision::Accept {
            self.fold(&contig)?;
        }
        Ok(())
    }

    fn fold(&mut self, contig: &ContigRecord) -> Result<(), AnalysisError> {
        if let (Some(tracker), Some(mapping)) = (self.coverage.as_mut(), contig.mapping.as_ref()) {
            tracker
                .record_coverage(
                    &mapping.reference_id,
                    mapping.mapped_start,
                    mapping.mapped_length,
                )
                .map_err(|source| AnalysisError::Coverage {
                    contig: contig.id.clone(),
                    source,
                })?;
        }

        self.sum += contig.length;
        self.lengths.push(contig.length);
        Ok(())
    }

    /// Compute the statistics and build the report for `filename`.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidState` unless contigs were processed.
    pub fn finish(&mut self, filename: &str) -> Result<AssemblyReport, AnalysisError> {
        if self.state != AnalyzerState::ParsingContigs {
            return Err(self.invalid("finish"));
        }

        self.state = AnalyzerState::Aggregating;
        let distribution = LengthDistribution::from_lengths(std::mem::take(&mut self.lengths));
        let lengths = LengthStatistics::compute(&distribution, self.sum);
        if let Some(coverage) = &self.coverage {
            for (id, covered, length) in coverage.per_reference() {
                debug!("{id}: {covered} of {length} bases covered");
            }
        }
        let coverage_percent = self
            .coverage
            .as_ref()
            .map(CoverageTracker::total_coverage_percent);

        self.state = AnalyzerState::Reporting;
        let report = AssemblyReport {
            mode: self.mode,
            filename: filename.to_string(),
            lengths,
            milestones: match self.mode {
                Mode::Denovo => Some(milestones(&distribution)),
                Mode::Mapped => None,
            },
            coverage_percent,
            rejected: self.filter.rejected(),
        };

        self.state = AnalyzerState::Done;
        info!(
            "{} contigs accepted, {} bp, N50 {}",
            report.lengths.count, report.lengths.sum, report.lengths.n50
        );
        Ok(report)
    }

    fn invalid(&self, action: &'static str) -> AnalysisError {
        AnalysisError::InvalidState {
            action,
            state: self.state.to_string(),
        }
    }

    fn fail(&mut self, err: AnalysisError) -> AnalysisError {
        self.state = AnalyzerState::Failed(err.to_string());
        err
    }
}
