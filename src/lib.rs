//! hgvs-intake: clinical variant notation extraction and intake gating
//!
//! The core of this crate is [`extract`]: a scanner that finds an HGVS-style
//! variant description anywhere inside free-form intake text and breaks it
//! into its structural parts (RefSeq accession, gene symbol, coding-DNA
//! change, protein change). Around it sit the intake-form gating helpers,
//! the mocked clinical-annotation payload, and an optional web service.
//!
//! # Example
//!
//! ```
//! use hgvs_intake::extract;
//!
//! let text = "Report: NM_000410.4(HFE):c.989G>T (p.Arg330Met) — reviewed.";
//! let breakdown = extract(text).unwrap();
//!
//! assert_eq!(breakdown.refseq, "NM_000410.4");
//! assert_eq!(breakdown.gene, "HFE");
//! assert_eq!(breakdown.cdna, "c.989G>T");
//! assert_eq!(breakdown.protein, "Arg330Met");
//! ```

pub mod annotation;
pub mod cli;
pub mod error;
pub mod intake;
pub mod notation;
#[cfg(feature = "web-service")]
pub mod service;

// Re-export commonly used types
pub use error::IntakeError;
pub use notation::breakdown::{EditKind, VariantBreakdown};
pub use notation::parser::{contains_notation, extract, extract_all, parse};

/// Result type alias for hgvs-intake operations
pub type Result<T> = std::result::Result<T, IntakeError>;
