//! CLI utilities for hgvs-intake
//!
//! Testable functions used by the command-line binary. Input is always read
//! whole rather than line by line, since a notation may span newlines.

use crate::error::IntakeError;
use crate::notation::breakdown::VariantBreakdown;
use std::io::Read;
use std::path::Path;

/// Resolve CLI input: positional text, a file (`-` for stdin), or stdin
pub fn read_input(text: Option<String>, input: Option<&Path>) -> Result<String, IntakeError> {
    if let Some(text) = text {
        return Ok(text);
    }

    match input {
        Some(path) if path.as_os_str() == "-" => read_stdin(),
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => read_stdin(),
    }
}

fn read_stdin() -> Result<String, IntakeError> {
    let mut buffer = String::new();
    std::io::stdin().read_to_string(&mut buffer)?;
    Ok(buffer)
}

/// Format a breakdown for terminal or JSON output
pub fn format_breakdown(breakdown: &VariantBreakdown, format: &str) -> Result<String, IntakeError> {
    match format {
        "json" => Ok(serde_json::to_string_pretty(breakdown)?),
        _ => Ok(format!(
            "refseq:  {}\ngene:    {}\ncdna:    {}\nprotein: {}\nkind:    {}",
            breakdown.refseq, breakdown.gene, breakdown.cdna, breakdown.protein, breakdown.kind
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notation::parser::extract;

    fn breakdown() -> VariantBreakdown {
        extract("NM_000410.4(HFE):c.989G>T (p.Arg330Met)").unwrap()
    }

    #[test]
    fn test_read_input_prefers_positional_text() {
        let text = read_input(Some("abc".to_string()), Some(Path::new("ignored"))).unwrap();
        assert_eq!(text, "abc");
    }

    #[test]
    fn test_read_input_from_file() {
        let path = std::env::temp_dir().join("hgvs_intake_cli_test.txt");
        std::fs::write(&path, "NM_000410.4(HFE):c.989G>T (p.Arg330Met)").unwrap();
        let text = read_input(None, Some(&path)).unwrap();
        assert!(text.contains("HFE"));
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn test_read_input_missing_file() {
        let result = read_input(None, Some(Path::new("/nonexistent/path.txt")));
        assert!(matches!(result, Err(IntakeError::Io { .. })));
    }

    #[test]
    fn test_format_text() {
        let out = format_breakdown(&breakdown(), "text").unwrap();
        assert!(out.contains("refseq:  NM_000410.4"));
        assert!(out.contains("kind:    substitution"));
    }

    #[test]
    fn test_format_json() {
        let out = format_breakdown(&breakdown(), "json").unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value["gene"], "HFE");
    }
}
