//! Protein-change parsing
//!
//! Matches `p.<Aaa><digits><Aaa>` with an optional trailing `fs` marker.
//! The amino-acid tokens are any three ASCII letters: they are deliberately
//! NOT checked against the 20 canonical three-letter codes, preserving the
//! permissive behavior of the original intake validator.

use nom::{
    bytes::complete::{tag, take_while_m_n},
    character::complete::{digit1, multispace0},
    combinator::{opt, recognize},
    IResult, Parser,
};

/// Three-letter amino-acid token (any alphabetic triple)
fn amino_acid3(input: &str) -> IResult<&str, &str> {
    take_while_m_n(3, 3, |c: char| c.is_ascii_alphabetic()).parse(input)
}

/// Parse a protein change, e.g. `(p.Arg330Met)` or `p.Phe631Leufs`
///
/// Each surrounding parenthesis is independently optional, and whitespace
/// around the `p.` prefix is tolerated. The returned substring excludes the
/// prefix and the parentheses but keeps the `fs` marker when present.
pub fn protein_change(input: &str) -> IResult<&str, &str> {
    let (input, _) = opt((tag("("), multispace0)).parse(input)?;
    let (input, _) = tag("p.").parse(input)?;
    let (input, _) = multispace0(input)?;
    let (input, change) =
        recognize((amino_acid3, digit1, amino_acid3, opt(tag("fs")))).parse(input)?;
    // Only consume trailing whitespace when it closes a parenthesis
    let (input, _) = opt((multispace0, tag(")"))).parse(input)?;
    Ok((input, change))
}
