//! Accession and gene-symbol parsing
//!
//! The grammar accepts only versioned RefSeq mRNA accessions (`NM_` prefix),
//! since the intake form collects transcript-level variant descriptions.

use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::{digit1, multispace0},
    combinator::recognize,
    sequence::delimited,
    IResult, Parser,
};

/// Parse a versioned RefSeq transcript accession, e.g. `NM_000410.4`
///
/// The version is required: `NM_000410` alone does not match. The accession is
/// kept as the captured substring; the dotted version is not split out.
pub fn refseq_accession(input: &str) -> IResult<&str, &str> {
    recognize((tag("NM_"), digit1, tag("."), digit1)).parse(input)
}

/// Parse a parenthesized gene symbol, e.g. `(HFE)`
///
/// The symbol itself is alphanumeric and returned without the parentheses.
/// Whitespace inside the parentheses is tolerated, as between any other
/// tokens of the notation.
pub fn gene_symbol(input: &str) -> IResult<&str, &str> {
    delimited(
        (tag("("), multispace0),
        take_while1(|c: char| c.is_ascii_alphanumeric()),
        (multispace0, tag(")")),
    )
    .parse(input)
}
