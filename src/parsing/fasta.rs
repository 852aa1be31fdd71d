//! FASTA sources built on noodles.
//!
//! Opens contig and reference files, uncompressed or gzip/bgzip compressed,
//! and adapts noodles records to [`ContigRecord`] and [`ReferenceSequence`].
//!
//! Supported extensions:
//! - `.fa`, `.fasta`, `.fna` (uncompressed)
//! - `.fa.gz`, `.fasta.gz`, `.fna.gz` (gzip compressed)
//! - `.fa.bgz`, `.fasta.bgz`, `.fna.bgz` (bgzip compressed)

use std::ffi::OsStr;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use noodles::fasta;
use thiserror::Error;
use tracing::debug;

use crate::core::contig::ContigRecord;
use crate::core::reference::ReferenceSequence;
use crate::core::types::Mode;
use crate::parsing::mapping::{parse_mapping_description, DescriptionError};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("noodles error: {0}")]
    Noodles(String),

    #[error("Malformed mapping description for contig '{contig}': {source}")]
    Description {
        contig: String,
        #[source]
        source: DescriptionError,
    },
}

/// A noodles FASTA reader over a plain or decompressed stream
pub type FastaReader = fasta::io::Reader<Box<dyn BufRead>>;

/// Check if the path has a FASTA extension
pub fn is_fasta_file(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();

    if path_str.ends_with(".fa.gz")
        || path_str.ends_with(".fasta.gz")
        || path_str.ends_with(".fna.gz")
        || path_str.ends_with(".fa.bgz")
        || path_str.ends_with(".fasta.bgz")
        || path_str.ends_with(".fna.bgz")
    {
        return true;
    }

    matches!(
        path.extension()
            .and_then(OsStr::to_str)
            .map(str::to_lowercase)
            .as_deref(),
        Some("fa" | "fasta" | "fna")
    )
}

/// Check if the path is a gzipped file
#[allow(clippy::case_sensitive_file_extension_comparisons)] // Already lowercased
pub fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

/// Open a FASTA file for sequential reading.
///
/// bgzip files are a series of gzip members, so a multi-member decoder
/// handles both gzip and bgzip.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened.
pub fn open_fasta(path: &Path) -> Result<FastaReader, ParseError> {
    let file = File::open(path)?;

    let inner: Box<dyn BufRead> = if is_gzipped(path) {
        Box::new(BufReader::new(MultiGzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };

    Ok(fasta::io::Reader::new(inner))
}

/// Load the identifier and length of every sequence in a reference FASTA.
///
/// An empty file yields an empty list.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read or `ParseError::Noodles`
/// if a record fails to parse.
pub fn load_references(path: &Path) -> Result<Vec<ReferenceSequence>, ParseError> {
    let mut reader = open_fasta(path)?;
    read_references(&mut reader)
}

/// Read reference sequences from a noodles FASTA reader
///
/// # Errors
///
/// Returns `ParseError::Noodles` if a record fails to parse.
pub fn read_references<R: BufRead>(
    reader: &mut fasta::io::Reader<R>,
) -> Result<Vec<ReferenceSequence>, ParseError> {
    let mut references = Vec::new();

    for result in reader.records() {
        let record = result
            .map_err(|e| ParseError::Noodles(format!("Failed to parse FASTA record: {e}")))?;

        let id = String::from_utf8_lossy(record.name()).to_string();
        let length = record.sequence().len() as u64;
        debug!("Reference {id}: {length} bp");

        references.push(ReferenceSequence::new(id, length));
    }

    Ok(references)
}

/// The full definition line of a record, without the leading `>`.
pub fn definition_line(record: &fasta::Record) -> String {
    let name = String::from_utf8_lossy(record.name());
    match record.description() {
        Some(description) => format!("{name} {}", String::from_utf8_lossy(description)),
        None => name.to_string(),
    }
}

/// Convert a FASTA record into a [`ContigRecord`].
///
/// In mapped mode the whole definition line must be a valid mapping description.
///
/// # Errors
///
/// Returns `ParseError::Description` if a mapped-mode record does not carry a
/// well-formed mapping description.
pub fn contig_from_record(record: &fasta::Record, mode: Mode) -> Result<ContigRecord, ParseError> {
    let id = String::from_utf8_lossy(record.name()).to_string();
    let length = record.sequence().len() as u64;
    let contig = ContigRecord::new(id, length);

    match mode {
        Mode::Denovo => Ok(contig),
        Mode::Mapped => {
            let mapping =
                parse_mapping_description(&definition_line(record)).map_err(|source| {
                    ParseError::Description {
                        contig: contig.id.clone(),
                        source,
                    }
                })?;
            Ok(contig.with_mapping(mapping))
        }
    }
}
