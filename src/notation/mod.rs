//! Variant-notation extraction
//!
//! Recognizes clinical HGVS-style variant descriptions embedded in free text:
//!
//! ```text
//! NM_<digits>.<digits>(<GENE>):c.<edit> (p.<Aaa><digits><Aaa>[fs])
//! ```
//!
//! The match is atomic: all four segments (accession, gene, coding-DNA change,
//! protein change) must be present as a contiguous unit, with whitespace
//! between tokens insignificant. Surrounding prose is ignored. The extractor
//! is a pure function with no state, no I/O, and a single negative outcome.

pub mod breakdown;
pub mod parser;

pub use breakdown::{EditKind, VariantBreakdown};
pub use parser::{contains_notation, extract, extract_all, parse};
