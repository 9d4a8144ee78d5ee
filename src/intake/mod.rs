//! Intake-form records and submission gating
//!
//! Mirrors the patient intake flow: demographic fields, a genetic-data input,
//! a requested action, and the raw variant-notation text exactly as typed by
//! the operator (no pre-trimming is assumed). Validation gates submission on
//! the notation extractor; a failed check produces a remediation message
//! listing the accepted example formats.

use crate::notation::breakdown::VariantBreakdown;
use crate::notation::parser::extract;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Example substitution notation shown in remediation messages
pub const EXAMPLE_SUBSTITUTION: &str = "NM_000410.4(HFE):c.989G>T (p.Arg330Met)";

/// Example frameshift-deletion notation shown in remediation messages
pub const EXAMPLE_FRAMESHIFT_DELETION: &str = "NM_000218.2(KCNQ1):c.1893delC (p.Phe631Leufs)";

/// Biological sex as collected on the intake form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
    Other,
}

/// Reference genome build
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GenomeBuild {
    #[serde(rename = "GRCh37")]
    Grch37,
    #[serde(rename = "GRCh38")]
    Grch38,
}

impl fmt::Display for GenomeBuild {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenomeBuild::Grch37 => write!(f, "GRCh37"),
            GenomeBuild::Grch38 => write!(f, "GRCh38"),
        }
    }
}

/// Requested downstream action
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IntakeAction {
    /// Search the genetic sequence against the known database
    SearchSequence,
    /// Run diagnosis and generate citations
    Diagnose,
}

/// Patient demographic fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatientInfo {
    pub first_name: String,
    pub last_name: String,
    /// Date of birth; optional because paper-form transcriptions omit it
    pub dob: Option<NaiveDate>,
    pub sex: Sex,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ethnicity: Option<String>,
}

/// How the genetic data was supplied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GeneticInput {
    /// Pasted raw/FASTA sequence text
    Sequence { text: String },
    /// Pasted variant table (Chromosome,Position,Reference,Alternate,Zygosity)
    VariantTable { csv: String },
    /// Uploaded file, referenced by name only
    File { name: String },
}

/// A complete intake submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeForm {
    pub patient: PatientInfo,
    pub genome_build: GenomeBuild,
    pub input: GeneticInput,
    pub action: IntakeAction,
    /// Variant notation text exactly as typed by the operator
    pub variant_notation: String,
}

/// Why an intake submission was blocked
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntakeRejection {
    /// User-facing remediation text
    pub message: String,
}

impl fmt::Display for IntakeRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// User-facing remediation text listing the accepted notation formats
pub fn remediation_message() -> String {
    format!(
        "No valid variant notation was found. Enter the variant in HGVS form, \
         for example: {} or {}",
        EXAMPLE_SUBSTITUTION, EXAMPLE_FRAMESHIFT_DELETION
    )
}

impl IntakeForm {
    /// Gate this submission on the variant-notation extractor
    ///
    /// Returns the structured breakdown when the notation field contains a
    /// well-formed variant description, or a rejection with remediation text
    /// when it does not. Patient names must be non-empty after trimming.
    pub fn validate(&self) -> Result<VariantBreakdown, IntakeRejection> {
        if self.patient.first_name.trim().is_empty() || self.patient.last_name.trim().is_empty() {
            return Err(IntakeRejection {
                message: "Patient first and last name are required".to_string(),
            });
        }

        extract(&self.variant_notation).ok_or_else(|| IntakeRejection {
            message: remediation_message(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(notation: &str) -> IntakeForm {
        IntakeForm {
            patient: PatientInfo {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                dob: NaiveDate::from_ymd_opt(1990, 4, 2),
                sex: Sex::Female,
                ethnicity: None,
            },
            genome_build: GenomeBuild::Grch38,
            input: GeneticInput::Sequence {
                text: "ACGT".to_string(),
            },
            action: IntakeAction::Diagnose,
            variant_notation: notation.to_string(),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_notation() {
        let breakdown = form(EXAMPLE_SUBSTITUTION).validate().unwrap();
        assert_eq!(breakdown.gene, "HFE");
    }

    #[test]
    fn test_validate_accepts_untrimmed_input() {
        // Raw operator text: surrounding whitespace and prose are tolerated
        let notation = format!("  see attached:\n{}\n", EXAMPLE_FRAMESHIFT_DELETION);
        let breakdown = form(&notation).validate().unwrap();
        assert_eq!(breakdown.gene, "KCNQ1");
    }

    #[test]
    fn test_validate_blocks_on_no_match() {
        let rejection = form("chr17:41276045 AG>-").validate().unwrap_err();
        assert!(rejection.message.contains(EXAMPLE_SUBSTITUTION));
        assert!(rejection.message.contains(EXAMPLE_FRAMESHIFT_DELETION));
    }

    #[test]
    fn test_validate_requires_names() {
        let mut f = form(EXAMPLE_SUBSTITUTION);
        f.patient.first_name = "   ".to_string();
        let rejection = f.validate().unwrap_err();
        assert!(rejection.message.contains("name"));
    }

    #[test]
    fn test_form_serde_round_trip() {
        let f = form(EXAMPLE_SUBSTITUTION);
        let json = serde_json::to_string(&f).unwrap();
        let back: IntakeForm = serde_json::from_str(&json).unwrap();
        assert_eq!(f, back);
    }

    #[test]
    fn test_genome_build_wire_names() {
        let json = serde_json::to_value(GenomeBuild::Grch38).unwrap();
        assert_eq!(json, "GRCh38");
    }
}
