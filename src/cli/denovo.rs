use std::path::PathBuf;

use clap::Args;

use crate::analysis::runner::AnalysisConfig;
use crate::cli::OutputFormat;
use crate::core::types::Cutoffs;
use crate::utils::validation::parse_min_length;

#[derive(Args)]
pub struct DenovoArgs {
    /// Contig FASTA file (optionally gzip compressed)
    #[arg(short = 'i', long = "input", required = true)]
    pub input: PathBuf,

    /// Minimum contig length; 0 disables length filtering
    #[arg(short = 'm', long = "min-length", default_value = "0", value_parser = parse_min_length)]
    pub min_length: u64,
}

/// Execute denovo subcommand
///
/// # Errors
///
/// Returns an error if the contigs cannot be read or the outputs cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DenovoArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let config = AnalysisConfig::denovo(&args.input, Cutoffs::new(args.min_length, 0.0));

    if verbose {
        eprintln!(
            "De novo statistics for {} (minimum length {})",
            args.input.display(),
            args.min_length
        );
    }

    super::execute(&config, format, verbose)
}
