//! # assembly-stats
//!
//! Summary statistics for genome and transcriptome assemblies stored as FASTA contigs.
//!
//! Two modes are supported:
//!
//! - **De novo**: length statistics over a plain contig set (N20/N50/N80, min, max,
//!   sum, and fixed-size milestones from N50M to N1000M)
//! - **Mapped**: the same length statistics for contigs whose FASTA description
//!   records where they align on a reference, plus the percentage of reference
//!   bases covered by at least one accepted contig
//!
//! Contigs can be filtered by a minimum length and, in mapped mode, a minimum
//! mapping identity (`1 - EditDistance / MappedLength`).
//!
//! ## Example
//!
//! ```rust
//! use assembly_stats::stats::length::{LengthDistribution, LengthStatistics};
//!
//! let lengths = LengthDistribution::from_lengths(vec![25, 100, 50]);
//! let stats = LengthStatistics::compute(&lengths, 175);
//!
//! assert_eq!(stats.n50, 100);
//! assert_eq!(stats.n80, 50);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Contig, mapping and reference data types
//! - [`parsing`]: FASTA sources and the mapping description parser
//! - [`stats`]: Length statistics and reference coverage tracking
//! - [`analysis`]: Filtering, the analyzer state machine, and report output
//! - [`cli`]: Command-line interface implementation

pub mod analysis;
pub mod cli;
pub mod core;
pub mod parsing;
pub mod stats;
pub mod utils;

// Re-export commonly used types for convenience
pub use analysis::analyzer::{AnalyzerState, AssemblyAnalyzer};
pub use analysis::filter::{Decision, FilterPipeline};
pub use analysis::report::AssemblyReport;
pub use analysis::runner::{run_analysis, AnalysisConfig};
pub use core::contig::{ContigRecord, MappingInfo};
pub use core::reference::ReferenceSequence;
pub use core::types::*;
pub use stats::coverage::CoverageTracker;
pub use stats::length::{LengthDistribution, LengthStatistics};
