//! Statistics report and output file naming.
//!
//! The `.stat.txt` file is a tab-separated table with one header row and one
//! data row. Columns depend on the mode:
//!
//! | Mode | Columns |
//! |------|---------|
//! | denovo | `n n:N50 min N80 N50 N20 N50M N100M N200M N300M N500M N800M N1000M max sum filename` |
//! | mapped | `n n:N50 min N80 N50 N20 max sum coverage(%) filename` |

use std::io::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::core::types::Mode;
use crate::stats::length::{LengthStatistics, Milestone, MILESTONES};

/// Final statistics for one assembly
#[derive(Debug, Clone, Serialize)]
pub struct AssemblyReport {
    pub mode: Mode,

    /// Input contig file, as given on the command line
    pub filename: String,

    #[serde(flatten)]
    pub lengths: LengthStatistics,

    /// Fixed-size milestones (de novo only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub milestones: Option<Vec<Milestone>>,

    /// Percentage of reference bases covered (mapped only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_percent: Option<f64>,

    /// Contigs that failed a cutoff
    pub rejected: usize,
}

impl AssemblyReport {
    /// Column names for this report's mode
    #[must_use]
    pub fn header(&self) -> Vec<&'static str> {
        let mut columns = vec!["n", "n:N50", "min", "N80", "N50", "N20"];
        if self.mode == Mode::Denovo {
            columns.extend(MILESTONES.iter().map(|&(label, _)| label));
        }
        columns.extend(["max", "sum"]);
        if self.mode == Mode::Mapped {
            columns.push("coverage(%)");
        }
        columns.push("filename");
        columns
    }

    /// Values in the same order as [`header`](Self::header)
    #[must_use]
    pub fn row(&self) -> Vec<String> {
        let stats = &self.lengths;
        let mut values = vec![
            stats.count.to_string(),
            stats.rank_n50.to_string(),
            stats.min.to_string(),
            stats.n80.to_string(),
            stats.n50.to_string(),
            stats.n20.to_string(),
        ];
        if self.mode == Mode::Denovo {
            match &self.milestones {
                Some(milestones) => values.extend(milestones.iter().map(|m| m.length.to_string())),
                None => values.extend(MILESTONES.iter().map(|_| "0".to_string())),
            }
        }
        values.push(stats.max.to_string());
        values.push(stats.sum.to_string());
        if self.mode == Mode::Mapped {
            values.push(format!("{:.2}", self.coverage_percent.unwrap_or(0.0)));
        }
        values.push(self.filename.clone());
        values
    }

    /// Write the two-row tab-separated table.
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_table<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        writeln!(writer, "{}", self.header().join("\t"))?;
        writeln!(writer, "{}", self.row().join("\t"))?;
        writer.flush()
    }
}

/// Output file locations derived from the contig file name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    /// `<base>.stat.txt`
    pub stat: PathBuf,
    /// `<base>.filtered.fasta`
    pub filtered: PathBuf,
}

impl OutputPaths {
    /// Place outputs beside `input`, named after its base name.
    ///
    /// A trailing `.gz`/`.bgz` is dropped before the extension, so
    /// `asm/contigs.fa.gz` gives `asm/contigs.stat.txt`.
    #[must_use]
    pub fn for_input(input: &Path) -> Self {
        let dir = input.parent().unwrap_or_else(|| Path::new(""));
        let base = base_name(input);
        Self {
            stat: dir.join(format!("{base}.stat.txt")),
            filtered: dir.join(format!("{base}.filtered.fasta")),
        }
    }

    /// Directory that receives both outputs
    #[must_use]
    pub fn directory(&self) -> &Path {
        match self.stat.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        }
    }
}

fn base_name(input: &Path) -> String {
    let name = input
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default();

    let lower = name.to_lowercase();
    let uncompressed = [".gz", ".bgz"]
        .iter()
        .find(|suffix| lower.ends_with(*suffix))
        .map_or(name.as_str(), |suffix| &name[..name.len() - suffix.len()]);

    Path::new(uncompressed)
        .file_stem()
        .map_or_else(|| uncompressed.to_string(), |s| s.to_string_lossy().to_string())
}
