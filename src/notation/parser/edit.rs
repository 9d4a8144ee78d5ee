//! Coding-DNA edit parsing
//!
//! The five edit alternatives are tried in a fixed order and the first whose
//! shape fits wins. The alternatives are prefix-disjoint wherever more than
//! one could complete the surrounding pattern, so plain ordered alternation
//! reproduces the original single-pattern matching exactly.

use crate::notation::breakdown::EditKind;
use nom::{
    branch::alt,
    bytes::complete::{tag, take_while, take_while1},
    character::complete::{char, digit1, satisfy},
    combinator::{map, recognize},
    IResult, Parser,
};

fn uppercase(input: &str) -> IResult<&str, char> {
    satisfy(|c| c.is_ascii_uppercase()).parse(input)
}

/// Substitution: `989G>T`
fn substitution(input: &str) -> IResult<&str, &str> {
    recognize((digit1, uppercase, char('>'), uppercase)).parse(input)
}

/// Deletion: `1893delC` (deleted bases optional)
fn deletion(input: &str) -> IResult<&str, &str> {
    recognize((
        digit1,
        tag("del"),
        take_while(|c: char| c.is_ascii_uppercase()),
    ))
    .parse(input)
}

/// Duplication: `1893dupC` (duplicated bases optional)
fn duplication(input: &str) -> IResult<&str, &str> {
    recognize((
        digit1,
        tag("dup"),
        take_while(|c: char| c.is_ascii_uppercase()),
    ))
    .parse(input)
}

/// Insertion: `112_117insTG`
fn insertion(input: &str) -> IResult<&str, &str> {
    recognize((
        digit1,
        char('_'),
        digit1,
        tag("ins"),
        take_while1(|c: char| c.is_ascii_uppercase()),
    ))
    .parse(input)
}

/// Deletion-insertion: `112_117delinsTG`
///
/// Requires the range form; a single-position `delins` is not in the grammar.
fn deletion_insertion(input: &str) -> IResult<&str, &str> {
    recognize((
        digit1,
        char('_'),
        digit1,
        tag("delins"),
        take_while1(|c: char| c.is_ascii_uppercase()),
    ))
    .parse(input)
}

/// Parse one coding-DNA edit, trying the alternatives in grammar order
pub fn cdna_edit(input: &str) -> IResult<&str, (&str, EditKind)> {
    alt((
        map(substitution, |s| (s, EditKind::Substitution)),
        map(deletion, |s| (s, EditKind::Deletion)),
        map(duplication, |s| (s, EditKind::Duplication)),
        map(insertion, |s| (s, EditKind::Insertion)),
        map(deletion_insertion, |s| (s, EditKind::DeletionInsertion)),
    ))
    .parse(input)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_substitution() {
        let (remaining, (edit, kind)) = cdna_edit("989G>T (p.Arg330Met)").unwrap();
        assert_eq!(edit, "989G>T");
        assert_eq!(kind, EditKind::Substitution);
        assert_eq!(remaining, " (p.Arg330Met)");
    }

    #[test]
    fn test_substitution_rejects_lowercase_bases() {
        assert!(cdna_edit("989g>t").is_err());
    }

    #[test]
    fn test_deletion_with_bases() {
        let (_, (edit, kind)) = cdna_edit("1893delC").unwrap();
        assert_eq!(edit, "1893delC");
        assert_eq!(kind, EditKind::Deletion);
    }

    #[test]
    fn test_deletion_without_bases() {
        let (remaining, (edit, kind)) = cdna_edit("459del (p.Gly154Ter)").unwrap();
        assert_eq!(edit, "459del");
        assert_eq!(kind, EditKind::Deletion);
        assert_eq!(remaining, " (p.Gly154Ter)");
    }

    #[test]
    fn test_duplication() {
        let (_, (edit, kind)) = cdna_edit("1893dupC").unwrap();
        assert_eq!(edit, "1893dupC");
        assert_eq!(kind, EditKind::Duplication);
    }

    #[test]
    fn test_insertion() {
        let (_, (edit, kind)) = cdna_edit("112_117insTG").unwrap();
        assert_eq!(edit, "112_117insTG");
        assert_eq!(kind, EditKind::Insertion);
    }

    #[test]
    fn test_insertion_requires_bases() {
        assert!(cdna_edit("112_117ins").is_err());
    }

    #[test]
    fn test_deletion_insertion() {
        let (_, (edit, kind)) = cdna_edit("112_117delinsTG").unwrap();
        assert_eq!(edit, "112_117delinsTG");
        assert_eq!(kind, EditKind::DeletionInsertion);
    }

    #[test]
    fn test_single_position_delins_parses_as_deletion() {
        // `del` wins the alternation; the trailing `insGA` is left unconsumed
        // and makes the surrounding whole-pattern match fail, exactly as the
        // original single-pattern grammar behaves.
        let (remaining, (edit, kind)) = cdna_edit("6775delinsGA").unwrap();
        assert_eq!(edit, "6775del");
        assert_eq!(kind, EditKind::Deletion);
        assert_eq!(remaining, "insGA");
    }
}
