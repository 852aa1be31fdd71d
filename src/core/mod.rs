//! Core data types for assembly statistics.
//!
//! This module provides the fundamental types used throughout the library:
//!
//! - [`ContigRecord`]: One assembled sequence, with its length and optional mapping metadata
//! - [`MappingInfo`]: Where a contig was placed on the reference and how well it aligned
//! - [`ReferenceSequence`]: A reference sequence used to size a coverage map
//! - [`Mode`], [`Cutoffs`]: Run configuration shared by the analyzer and the CLI
//!
//! ## Modes
//!
//! | Mode     | Contig description     | Filters applied          | Coverage |
//! |----------|------------------------|--------------------------|----------|
//! | `denovo` | free text, ignored     | minimum length           | no       |
//! | `mapped` | 10 `key=value` fields  | minimum length, identity | yes      |
//!
//! [`ContigRecord`]: contig::ContigRecord
//! [`MappingInfo`]: contig::MappingInfo
//! [`ReferenceSequence`]: reference::ReferenceSequence
//! [`Mode`]: types::Mode
//! [`Cutoffs`]: types::Cutoffs

pub mod contig;
pub mod reference;
pub mod types;
