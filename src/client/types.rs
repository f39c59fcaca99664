//! Request and response types for the drafting services.
//!
//! Field names follow the services' wire contract (`section_name`,
//! `eval_hist_payload`, stringified flags). Response types deserialize
//! defensively: a missing field defaults to empty rather than failing the
//! whole operation.

use serde::{Deserialize, Serialize};

use crate::models::{DocumentFormat, Draft, GeneratedSection, SectionSpec};

// ============================================================
// Request Types
// ============================================================

/// A section spec reduced to what the services consume. Ids stay local;
/// the Generator defines its own output identities.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SectionOutline {
    pub section_name: String,
    pub description: String,
}

impl From<&SectionSpec> for SectionOutline {
    fn from(spec: &SectionSpec) -> Self {
        Self {
            section_name: spec.name.clone(),
            description: spec.description.clone(),
        }
    }
}

/// A generated section reduced to what the Evaluator consumes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedOutline {
    pub section_name: String,
    pub content: String,
}

impl From<&GeneratedSection> for GeneratedOutline {
    fn from(section: &GeneratedSection) -> Self {
        Self {
            section_name: section.name.clone(),
            content: section.content.clone(),
        }
    }
}

/// Payload for the Generator.
#[derive(Debug, Clone, Serialize)]
pub struct GenerateRequest {
    pub main_topic: String,
    /// Wire contract: the literal strings `"true"` / `"false"`.
    pub dynamic_generation: String,
    pub sections: Vec<SectionOutline>,
    pub constraints: String,
    pub context: String,
}

impl GenerateRequest {
    pub fn from_draft(draft: &Draft) -> Self {
        Self {
            main_topic: draft.main_topic.clone(),
            dynamic_generation: flag(draft.dynamic_generation),
            sections: draft.sections.iter().map(Into::into).collect(),
            constraints: draft.constraints.clone(),
            context: draft.context.clone(),
        }
    }
}

/// Payload for the Evaluator.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluateRequest {
    pub main_topic: String,
    pub dynamic_generation: String,
    /// Expected-section-count signal, stringified per the wire contract.
    pub expected_sections_count: String,
    pub sections: Vec<SectionOutline>,
    pub constraints: String,
    pub context: String,
    pub generated_content: Vec<GeneratedOutline>,
}

impl EvaluateRequest {
    pub fn from_draft(draft: &Draft) -> Self {
        Self {
            main_topic: draft.main_topic.clone(),
            dynamic_generation: flag(draft.dynamic_generation),
            expected_sections_count: draft.sections.len().to_string(),
            sections: draft.sections.iter().map(Into::into).collect(),
            constraints: draft.constraints.clone(),
            context: draft.context.clone(),
            generated_content: draft.generated_content.iter().map(Into::into).collect(),
        }
    }
}

/// Payload for the Exporter. Generated-section ids are preserved.
#[derive(Debug, Clone, Serialize)]
pub struct ExportRequest {
    pub generated_content: Vec<GeneratedSection>,
    #[serde(rename = "type")]
    pub format: DocumentFormat,
}

impl ExportRequest {
    pub fn from_draft(draft: &Draft, format: DocumentFormat) -> Self {
        Self {
            generated_content: draft.generated_content.clone(),
            format,
        }
    }
}

fn flag(value: bool) -> String {
    if value { "true" } else { "false" }.to_string()
}

// ============================================================
// Response Types
// ============================================================

/// Generator success response.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateResponse {
    /// Missing field tolerated as an empty document.
    #[serde(default)]
    pub generated_content: Vec<GeneratedSection>,
    #[serde(default)]
    pub coherency_score: f64,
    #[serde(default, rename = "evaluator_diagnostic_summary")]
    pub diagnostic_summary: String,
}

/// One scored round reported by the Evaluator.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluationOutcome {
    #[serde(default)]
    pub coherency_score: f64,
    #[serde(default, rename = "evaluator_diagnostic_summary")]
    pub diagnostic_summary: String,
}

/// Evaluator success response.
#[derive(Debug, Clone, Deserialize)]
pub struct EvaluateResponse {
    /// Only a present field triggers replacement of the local content.
    /// Absent or `null` means "no revision"; present-but-empty clears.
    #[serde(default)]
    pub generated_content: Option<Vec<GeneratedSection>>,
    #[serde(default, rename = "eval_hist_payload")]
    pub evaluation_records: Vec<EvaluationOutcome>,
}
