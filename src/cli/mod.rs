//! Command-line interface for assembly-stats.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **denovo**: Length statistics for an assembly, optionally filtered by length
//! - **mapped**: Length statistics plus reference coverage for contigs carrying
//!   mapping descriptions, optionally filtered by length and identity
//!
//! ## Usage
//!
//! ```text
//! # De novo contigs
//! assembly-stats denovo -i contigs.fa
//!
//! # Keep contigs of at least 500 bp, also writes contigs.filtered.fasta
//! assembly-stats denovo -i contigs.fa -m 500
//!
//! # Mapped contigs against a reference, keeping alignments with identity >= 0.95
//! assembly-stats mapped -i mapped_contigs.fa -r reference.fa -q 0.95
//!
//! # JSON on stdout for scripting
//! assembly-stats --format json denovo -i contigs.fa
//! ```
//!
//! ## Exit status
//!
//! `-h/--help` and usage errors exit with status 2, `-v/-V/--version` with 0,
//! and any failure during the analysis with 1.

use std::time::Instant;

use clap::error::ErrorKind;
use clap::{Arg, ArgAction, CommandFactory, FromArgMatches, Parser, Subcommand};
use tracing::info;

use crate::analysis::runner::{run_analysis, AnalysisConfig, AnalysisOutcome};

pub mod denovo;
pub mod mapped;

/// Exit status for usage errors and explicit help requests
pub const USAGE_EXIT_CODE: i32 = 2;

#[derive(Parser)]
#[command(name = "assembly-stats")]
#[command(author = "Fulcrum Genomics")]
#[command(version)]
#[command(about = "Report assembly statistics (N50, N20, N80) and reference coverage")]
#[command(
    long_about = "assembly-stats reports length statistics for a FASTA file of assembled contigs.\n\nTwo modes are available:\n- denovo: N20/N50/N80, min, max, sum and fixed-size milestones (N50M..N1000M)\n- mapped: the same length statistics plus the percentage of reference bases covered, for contigs whose description carries their mapping\n\nResults are written to <base>.stat.txt next to the input; with -m or -q the accepted contigs are also written to <base>.filtered.fasta."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Console output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Statistics for de novo assembly contigs
    Denovo(denovo::DenovoArgs),

    /// Statistics and reference coverage for mapped contigs
    Mapped(mapped::MappedArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

impl Cli {
    /// The clap command, with `-v`, `-V` and `--version` all printing the version.
    pub fn command_with_version() -> clap::Command {
        <Self as CommandFactory>::command()
            .disable_version_flag(true)
            .propagate_version(true)
            .arg(
                Arg::new("version")
                    .short('v')
                    .short_alias('V')
                    .long("version")
                    .help("Print version")
                    .action(ArgAction::Version)
                    .global(true),
            )
    }

    /// Parse process arguments, exiting on help, version, or usage errors.
    ///
    /// Help exits with status 2 on stderr, like any other usage error.
    pub fn parse_or_exit() -> Self {
        let parsed = Self::command_with_version()
            .try_get_matches()
            .and_then(|matches| Self::from_arg_matches(&matches));

        match parsed {
            Ok(cli) => cli,
            Err(err) => {
                if err.kind() == ErrorKind::DisplayVersion {
                    // Nothing useful left to do if the terminal is gone
                    let _ = err.print();
                    std::process::exit(0);
                }
                eprint!("{}", err.render());
                std::process::exit(USAGE_EXIT_CODE);
            }
        }
    }
}

/// Run an analysis with the run banner, then print the report.
///
/// # Errors
///
/// Returns an error if the analysis fails or the report cannot be rendered.
pub fn execute(config: &AnalysisConfig, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let started = Instant::now();
    info!(
        "Beginning {} run (v{}) at {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    let outcome = run_analysis(config)?;

    if verbose {
        eprintln!(
            "Accepted {} contigs ({} rejected), {} bp",
            outcome.report.lengths.count, outcome.report.rejected, outcome.report.lengths.sum
        );
        eprintln!("Statistics written to {}", outcome.stat_path.display());
        if let Some(path) = &outcome.filtered_path {
            eprintln!("Filtered contigs written to {}", path.display());
        }
    }

    print_outcome(&outcome, format)?;

    info!(
        "Ending {} run, total elapsed time {:.3} seconds",
        env!("CARGO_PKG_NAME"),
        started.elapsed().as_secs_f64()
    );
    Ok(())
}

fn print_outcome(outcome: &AnalysisOutcome, format: OutputFormat) -> anyhow::Result<()> {
    match format {
        OutputFormat::Text => outcome.report.write_table(std::io::stdout().lock())?,
        OutputFormat::Json => {
            let output = serde_json::json!({
                "report": outcome.report,
                "stat_file": outcome.stat_path.display().to_string(),
                "filtered_file": outcome.filtered_path.as_ref().map(|p| p.display().to_string()),
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
    }
    Ok(())
}
