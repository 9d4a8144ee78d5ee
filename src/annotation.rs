//! Clinical-annotation payload
//!
//! Wire types for the annotation report returned by the inference backend,
//! plus the built-in fixed payload served when no upstream is configured.
//! Field names follow the upstream JSON keys exactly, including the
//! `Associated_Desieases` key, which upstream spells that way.

use serde::{Deserialize, Serialize};

/// Annotation report for a submitted variant
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotationReport {
    /// Narrative interpretation of the variant
    #[serde(rename = "Answer")]
    pub answer: String,
    /// Short variant summary (gene, change, locus)
    #[serde(rename = "Genome_variation")]
    pub genome_variation: String,
    /// Comma-joined condition list
    #[serde(rename = "Associated_Desieases")]
    pub associated_diseases: String,
    #[serde(rename = "patient_history")]
    pub patient_history: String,
    #[serde(rename = "Sources")]
    pub sources: Vec<SourceRecord>,
}

/// A cited evidence source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceRecord {
    pub source: String,
    pub id: String,
    pub text: String,
    pub metadata: SourceMetadata,
}

/// ClinVar-style metadata for an evidence source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMetadata {
    #[serde(rename = "VariationID")]
    pub variation_id: String,
    #[serde(rename = "GeneSymbol")]
    pub gene_symbol: String,
    #[serde(rename = "Type")]
    pub variant_type: String,
    #[serde(rename = "ClinicalSignificance")]
    pub clinical_significance: String,
    #[serde(rename = "PhenotypeList")]
    pub phenotype_list: Vec<String>,
    #[serde(rename = "ReviewStatus")]
    pub review_status: String,
    #[serde(rename = "Assembly")]
    pub assembly: String,
    #[serde(rename = "Chromosome")]
    pub chromosome: String,
    #[serde(rename = "Start")]
    pub start: u64,
    #[serde(rename = "Stop")]
    pub stop: u64,
    #[serde(rename = "ReferenceAllele")]
    pub reference_allele: String,
    #[serde(rename = "AlternateAllele")]
    pub alternate_allele: String,
}

impl AnnotationReport {
    /// The fixed BRCA1 demo payload served when no inference upstream is configured
    pub fn mock() -> Self {
        Self {
            answer: "The identified BRCA1 gene variant (c.68_69delAG) is a well-known \
                     pathogenic mutation linked to hereditary breast and ovarian cancer \
                     syndrome. The deletion results in a frameshift and premature stop \
                     codon, significantly affecting protein function."
                .to_string(),
            genome_variation: "BRCA1 c.68_69delAG, deletion, Chr17:41276045-41276046".to_string(),
            associated_diseases: "Hereditary Breast Cancer, Ovarian Cancer".to_string(),
            patient_history: "Patient has a maternal history of breast cancer diagnosed at \
                              age 42. No other known genetic conditions in the family."
                .to_string(),
            sources: vec![SourceRecord {
                source: "ClinVar_JSON".to_string(),
                id: "VCV000000123.5".to_string(),
                text: "BRCA1 variant c.68_69delAG is classified as pathogenic and is \
                       associated with an increased risk for hereditary breast and ovarian \
                       cancers."
                    .to_string(),
                metadata: SourceMetadata {
                    variation_id: "VCV000000123.5".to_string(),
                    gene_symbol: "BRCA1".to_string(),
                    variant_type: "Deletion".to_string(),
                    clinical_significance: "Pathogenic".to_string(),
                    phenotype_list: vec![
                        "Hereditary Breast Cancer".to_string(),
                        "Ovarian Cancer".to_string(),
                    ],
                    review_status: "Reviewed by expert panel".to_string(),
                    assembly: "GRCh38".to_string(),
                    chromosome: "17".to_string(),
                    start: 41276045,
                    stop: 41276046,
                    reference_allele: "AG".to_string(),
                    alternate_allele: "-".to_string(),
                },
            }],
        }
    }

    /// The condition list, split from the comma-joined field and trimmed
    pub fn diseases(&self) -> Vec<&str> {
        self.associated_diseases
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }
}
