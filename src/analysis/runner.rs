//! File-level driver: opens sources, runs the analyzer, and persists outputs.
//!
//! Outputs are staged in temporary files beside their destination and renamed
//! into place only after the whole run succeeds, so a failed run leaves no
//! partial `.stat.txt` or `.filtered.fasta` behind.

use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

use crate::analysis::analyzer::AssemblyAnalyzer;
use crate::analysis::filter::FilterPipeline;
use crate::analysis::report::{AssemblyReport, OutputPaths};
use crate::analysis::AnalysisError;
use crate::core::types::{Cutoffs, Mode};
use crate::parsing::fasta::{is_fasta_file, open_fasta};
use crate::utils::validation::validate_cutoffs;

/// Everything one invocation needs
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    pub mode: Mode,
    pub input: PathBuf,
    pub reference: Option<PathBuf>,
    pub cutoffs: Cutoffs,
}

impl AnalysisConfig {
    pub fn denovo(input: impl Into<PathBuf>, cutoffs: Cutoffs) -> Self {
        Self {
            mode: Mode::Denovo,
            input: input.into(),
            reference: None,
            cutoffs: Cutoffs {
                min_identity: 0.0,
                ..cutoffs
            },
        }
    }

    pub fn mapped(
        input: impl Into<PathBuf>,
        reference: impl Into<PathBuf>,
        cutoffs: Cutoffs,
    ) -> Self {
        Self {
            mode: Mode::Mapped,
            input: input.into(),
            reference: Some(reference.into()),
            cutoffs,
        }
    }
}

/// Result of a successful run
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub report: AssemblyReport,
    pub stat_path: PathBuf,
    /// Set only when a cutoff was active
    pub filtered_path: Option<PathBuf>,
}

/// Run a complete analysis and write its output files.
///
/// # Errors
///
/// Returns `AnalysisError::Validation` for invalid cutoffs (before any I/O),
/// `AnalysisError::MissingReference` for mapped mode without a reference, and
/// any parse, coverage or output error raised during the run.
pub fn run_analysis(config: &AnalysisConfig) -> Result<AnalysisOutcome, AnalysisError> {
    validate_cutoffs(&config.cutoffs)?;
    let reference = match config.mode {
        Mode::Mapped => Some(
            config
                .reference
                .as_deref()
                .ok_or(AnalysisError::MissingReference)?,
        ),
        Mode::Denovo => None,
    };

    let paths = OutputPaths::for_input(&config.input);
    let out_dir = paths.directory().to_path_buf();
    for path in std::iter::once(config.input.as_path()).chain(reference) {
        if !is_fasta_file(path) {
            warn!("{} does not have a FASTA extension", path.display());
        }
    }

    let mut filtered_sink = if config.cutoffs.is_active() {
        let staged = stage_in(&out_dir).map_err(|source| AnalysisError::Output {
            path: paths.filtered.clone(),
            source,
        })?;
        debug!("Staging filtered contigs in {}", staged.path().display());
        Some(BufWriter::new(staged))
    } else {
        None
    };

    let report = {
        let mut filter = FilterPipeline::new(config.mode, config.cutoffs);
        if let Some(sink) = filtered_sink.as_mut() {
            filter = filter.with_output(sink);
        }
        let mut analyzer = AssemblyAnalyzer::new(config.mode, filter);

        if let Some(reference) = reference {
            info!("Reading reference sequences from {}", reference.display());
            let mut reader = open_fasta(reference)?;
            analyzer.load_references(&mut reader)?;
        }

        info!("Reading contigs from {}", config.input.display());
        let mut reader = open_fasta(&config.input)?;
        analyzer.process_contigs(&mut reader)?;
        analyzer.finish(&config.input.display().to_string())?
    };

    let filtered_path = match filtered_sink {
        Some(sink) => {
            let staged = sink
                .into_inner()
                .map_err(|e| AnalysisError::FilteredOutput(e.into_error()))?;
            persist(staged, &paths.filtered)?;
            Some(paths.filtered.clone())
        }
        None => None,
    };

    write_stat_file(&report, &paths.stat, &out_dir)?;

    Ok(AnalysisOutcome {
        report,
        stat_path: paths.stat,
        filtered_path,
    })
}

fn write_stat_file(report: &AssemblyReport, path: &Path, dir: &Path) -> Result<(), AnalysisError> {
    let output_error = |source| AnalysisError::Output {
        path: path.to_path_buf(),
        source,
    };

    let mut staged = stage_in(dir).map_err(output_error)?;
    report.write_table(&mut staged).map_err(output_error)?;
    staged.as_file().sync_all().map_err(output_error)?;
    persist(staged, path)
}

/// Create a staging file in `dir` that ends up with the same mode a plain
/// `File::create` would give it (0666 less the umask), not tempfile's 0600.
#[cfg(unix)]
fn stage_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    use std::fs::Permissions;
    use std::os::unix::fs::PermissionsExt;

    tempfile::Builder::new()
        .permissions(Permissions::from_mode(0o666))
        .tempfile_in(dir)
}

#[cfg(not(unix))]
fn stage_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    NamedTempFile::new_in(dir)
}

fn persist(mut staged: NamedTempFile, path: &Path) -> Result<(), AnalysisError> {
    let output_error = |source| AnalysisError::Output {
        path: path.to_path_buf(),
        source,
    };

    staged.flush().map_err(output_error)?;
    staged.persist(path).map_err(|e| output_error(e.error))?;
    info!("Wrote {}", path.display());
    Ok(())
}
