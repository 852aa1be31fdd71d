//! Assembly analysis: filtering, accumulation and reporting.
//!
//! - [`filter`]: Length and identity cutoffs, with the optional filtered FASTA sink
//! - [`analyzer`]: The [`AssemblyAnalyzer`] state machine that folds contigs into
//!   the length distribution and the coverage tracker
//! - [`report`]: The fixed-column statistics table and output file naming
//! - [`runner`]: File-level driver used by the CLI
//!
//! ## Example
//!
//! ```rust,no_run
//! use assembly_stats::analysis::runner::{run_analysis, AnalysisConfig};
//! use assembly_stats::core::types::Cutoffs;
//!
//! let config = AnalysisConfig::denovo("contigs.fa", Cutoffs::new(500, 0.0));
//! let outcome = run_analysis(&config).unwrap();
//! println!("N50 = {}", outcome.report.lengths.n50);
//! ```
//!
//! [`AssemblyAnalyzer`]: analyzer::AssemblyAnalyzer

use std::path::PathBuf;

use thiserror::Error;

use crate::parsing::fasta::ParseError;
use crate::stats::coverage::CoverageError;
use crate::utils::validation::ValidationError;

pub mod analyzer;
pub mod filter;
pub mod report;
pub mod runner;

#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Contig '{contig}': {source}")]
    Coverage {
        contig: String,
        #[source]
        source: CoverageError,
    },

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Mapped mode requires a reference FASTA")]
    MissingReference,

    #[error("Cannot {action} while analyzer is {state}")]
    InvalidState { action: &'static str, state: String },

    #[error("Failed to write filtered contigs: {0}")]
    FilteredOutput(#[source] std::io::Error),

    #[error("Failed to write {path}: {source}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
