//! Parser for the comma-separated mapping description of mapped-mode contigs.
//!
//! Example definition line:
//!
//! ```text
//! >ContigName=contig_11,ContigLength=525700,MappedStartPositionInContig=524968,ReferenceID=gi|283856168|ref|NC_006526.2|,MappedStartPositionInReference=2437351,MappedLength=388,Insertion=1,Deletion=1,Mismatch=49,EditDistance=51
//! ```
//!
//! Fields are positional. Keys are not checked, only the value after `=`.

use thiserror::Error;

use crate::core::contig::MappingInfo;

/// Number of fields a mapping description must contain
pub const FIELD_COUNT: usize = 10;

/// Field names in positional order
pub const FIELD_NAMES: [&str; FIELD_COUNT] = [
    "ContigName",
    "ContigLength",
    "MappedStartPositionInContig",
    "ReferenceID",
    "MappedStartPositionInReference",
    "MappedLength",
    "Insertion",
    "Deletion",
    "Mismatch",
    "EditDistance",
];

const REFERENCE_ID: usize = 3;
const MAPPED_START: usize = 4;
const MAPPED_LENGTH: usize = 5;
const EDIT_DISTANCE: usize = 9;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum DescriptionError {
    #[error("expected {FIELD_COUNT} comma-separated fields, found {0}")]
    FieldCount(usize),

    #[error("field {field} has no '=' value")]
    MissingValue { field: &'static str },

    #[error("field {field} is not a valid integer: '{value}'")]
    InvalidInteger { field: &'static str, value: String },
}

/// Parse a mapping description into [`MappingInfo`].
///
/// A `MappedLength` below 1 is raised to 1.
///
/// # Errors
///
/// Returns `DescriptionError::FieldCount` unless there are exactly ten fields,
/// `DescriptionError::MissingValue` if a consumed field lacks `=`, or
/// `DescriptionError::InvalidInteger` if a numeric field does not parse.
pub fn parse_mapping_description(text: &str) -> Result<MappingInfo, DescriptionError> {
    let fields: Vec<&str> = text.split(',').collect();
    if fields.len() != FIELD_COUNT {
        return Err(DescriptionError::FieldCount(fields.len()));
    }

    let reference_id = field_value(&fields, REFERENCE_ID)?.to_string();
    let mapped_start = parse_integer::<u64>(&fields, MAPPED_START)?;
    let mapped_length = parse_integer::<i64>(&fields, MAPPED_LENGTH)?;
    let edit_distance = parse_integer::<u64>(&fields, EDIT_DISTANCE)?;

    Ok(MappingInfo {
        reference_id,
        mapped_start,
        mapped_length: u64::try_from(mapped_length.max(1)).unwrap_or(1),
        edit_distance,
    })
}

/// Text between the first and second `=` of a field, trimmed
fn field_value<'a>(fields: &[&'a str], index: usize) -> Result<&'a str, DescriptionError> {
    fields[index]
        .split('=')
        .nth(1)
        .map(str::trim)
        .ok_or(DescriptionError::MissingValue {
            field: FIELD_NAMES[index],
        })
}

fn parse_integer<T: std::str::FromStr>(
    fields: &[&str],
    index: usize,
) -> Result<T, DescriptionError> {
    let value = field_value(fields, index)?;
    value.parse().map_err(|_| DescriptionError::InvalidInteger {
        field: FIELD_NAMES[index],
        value: value.to_string(),
    })
}
