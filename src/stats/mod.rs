//! Assembly metrics.
//!
//! - [`length`]: N-style statistics over the descending distribution of accepted contig lengths
//! - [`coverage`]: Per-reference occupancy bitmaps and aggregate coverage percentage

pub mod coverage;
pub mod length;
