//! Adapters from sequence files to the core data model.
//!
//! This module provides:
//!
//! - **FASTA sources**: Open plain or gzip/bgzip FASTA files with noodles, load
//!   reference sequence lengths, and turn records into [`ContigRecord`]s
//! - **Mapping descriptions**: Parse the 10-field `key=value` description that
//!   mapped-mode contigs carry
//!
//! ## Mapping description layout
//!
//! | # | Key | Used |
//! |---|-----|------|
//! | 1 | ContigName | No |
//! | 2 | ContigLength | No |
//! | 3 | MappedStartPositionInContig | No |
//! | 4 | ReferenceID | Yes |
//! | 5 | MappedStartPositionInReference | Yes |
//! | 6 | MappedLength | Yes |
//! | 7 | Insertion | No |
//! | 8 | Deletion | No |
//! | 9 | Mismatch | No |
//! | 10 | EditDistance | Yes |
//!
//! [`ContigRecord`]: crate::core::contig::ContigRecord

pub mod fasta;
pub mod mapping;
