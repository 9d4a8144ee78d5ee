//! Notation matcher and free-text scanner
//!
//! [`notation`] matches the full composite pattern at a single position;
//! [`extract`] scans the input for candidate `NM_` anchors and reports the
//! first position where the whole pattern matches. Whitespace (including
//! newlines) between tokens is insignificant, so a notation split across
//! lines still matches.

pub mod accession;
pub mod edit;
pub mod protein;

use crate::error::IntakeError;
use crate::notation::breakdown::VariantBreakdown;
use memchr::memmem;
use nom::{
    bytes::complete::tag,
    character::complete::multispace0,
    IResult, Parser,
};

/// Match a complete variant notation starting at the beginning of `input`
///
/// All four segments must match as a unit; there is no partial result.
pub(crate) fn notation(input: &str) -> IResult<&str, VariantBreakdown> {
    let (rest, refseq) = accession::refseq_accession(input)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, gene) = accession::gene_symbol(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, _) = tag(":").parse(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, (cdna, kind)) = cdna_change(rest)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, protein) = protein::protein_change(rest)?;

    Ok((
        rest,
        VariantBreakdown {
            refseq: refseq.to_string(),
            gene: gene.to_string(),
            cdna,
            protein: protein.to_string(),
            kind,
        },
    ))
}

/// Parse the coding-DNA change, returning the captured text with its `c.` prefix
///
/// Whitespace after `c.` is tolerated; the returned text is always the tight
/// `c.<edit>` form regardless.
fn cdna_change(input: &str) -> IResult<&str, (String, crate::notation::breakdown::EditKind)> {
    let (rest, _) = tag("c.").parse(input)?;
    let (rest, _) = multispace0(rest)?;
    let (rest, (edit, kind)) = edit::cdna_edit(rest)?;
    Ok((rest, (format!("c.{}", edit), kind)))
}

/// Extract the first well-formed variant notation from free text
///
/// Surrounding prose is ignored; only the matched span is decomposed. Returns
/// `None` when no well-formed notation is present anywhere in the input. This
/// is the single negative outcome: the function is total over all strings and
/// never panics.
pub fn extract(input: &str) -> Option<VariantBreakdown> {
    // `NM_` is pure ASCII, so a match offset always lands on a char boundary.
    memmem::find_iter(input.as_bytes(), b"NM_")
        .find_map(|at| notation(&input[at..]).ok().map(|(_, breakdown)| breakdown))
}

/// Extract every non-overlapping variant notation, in order of appearance
pub fn extract_all(input: &str) -> Vec<VariantBreakdown> {
    let mut found = Vec::new();
    let mut at = 0;
    while let Some(offset) = memmem::find(input[at..].as_bytes(), b"NM_") {
        let start = at + offset;
        match notation(&input[start..]) {
            Ok((rest, breakdown)) => {
                found.push(breakdown);
                at = input.len() - rest.len();
            }
            Err(_) => at = start + 3,
        }
    }
    found
}

/// Check whether the input contains a well-formed variant notation
pub fn contains_notation(input: &str) -> bool {
    extract(input).is_some()
}

/// Result-flavored wrapper around [`extract`]
///
/// Maps the absent case to [`IntakeError::NotationNotFound`] for callers that
/// thread errors with `?`.
pub fn parse(input: &str) -> Result<VariantBreakdown, IntakeError> {
    extract(input).ok_or(IntakeError::NotationNotFound)
}
