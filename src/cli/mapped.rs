use std::path::PathBuf;

use clap::Args;

use crate::analysis::runner::AnalysisConfig;
use crate::cli::OutputFormat;
use crate::core::types::Cutoffs;
use crate::utils::validation::{parse_identity, parse_min_length};

#[derive(Args)]
pub struct MappedArgs {
    /// Contig FASTA file whose descriptions carry the 10-field mapping record
    #[arg(short = 'i', long = "input", required = true)]
    pub input: PathBuf,

    /// Reference FASTA file the contigs were mapped to
    #[arg(short = 'r', long = "reference", required = true)]
    pub reference: PathBuf,

    /// Minimum contig length; 0 disables length filtering
    #[arg(short = 'm', long = "min-length", default_value = "0", value_parser = parse_min_length)]
    pub min_length: u64,

    /// Minimum mapping identity, 1 - (EditDistance / MappedLength), in [0, 1];
    /// 0 disables identity filtering
    #[arg(short = 'q', long = "min-identity", default_value = "0", value_parser = parse_identity)]
    pub min_identity: f64,
}

/// Execute mapped subcommand
///
/// # Errors
///
/// Returns an error if any input cannot be read, a contig description is
/// malformed, a mapped span does not fit its reference, or the outputs cannot
/// be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: MappedArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let cutoffs = Cutoffs::new(args.min_length, args.min_identity);
    let config = AnalysisConfig::mapped(&args.input, &args.reference, cutoffs);

    if verbose {
        eprintln!(
            "Mapped statistics for {} against {} (minimum length {}, minimum identity {})",
            args.input.display(),
            args.reference.display(),
            cutoffs.min_length,
            cutoffs.min_identity
        );
    }

    super::execute(&config, format, verbose)
}
