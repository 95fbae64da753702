//! Flattening core for widebook.
//!
//! Each sheet of the source workbook is pivoted into a single wide row:
//! every `Nerve` record crossed with every metric column produces one
//! `{nerve}_{metric}` output column. The combined table carries the sorted
//! union of all column names seen across sheets.

pub mod flatten;

pub use flatten::{FlattenOutcome, flatten};
