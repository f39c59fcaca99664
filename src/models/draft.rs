use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{EvaluationRecord, GeneratedSection, SectionSpec};

/// The full editable drafting-session state.
///
/// Exactly one `Draft` exists per workflow session. It is exclusively owned
/// by the workflow; nothing outside the workflow mutates it. There is no
/// persistence layer: the draft lives and dies with the session and
/// synchronizes only through the remote Generator, Evaluator and Exporter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Draft {
    pub main_topic: String,
    /// Hint passed through to the Generator. Its semantics are the
    /// Generator's concern, not the workflow's.
    pub dynamic_generation: bool,
    pub constraints: String,
    pub context: String,
    /// User-authored section intents, in desired output order.
    #[serde(default)]
    pub sections: Vec<SectionSpec>,
    /// Server-produced content, wholesale-replaced on generation.
    #[serde(default)]
    pub generated_content: Vec<GeneratedSection>,
    /// Append-only evaluation history.
    #[serde(default)]
    pub evaluation_history: Vec<EvaluationRecord>,
}

impl Draft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the trimmed main topic is non-empty. Gates generation.
    pub fn has_topic(&self) -> bool {
        !self.main_topic.trim().is_empty()
    }

    /// Whether any generated content exists. Gates evaluation and export.
    pub fn has_generated_content(&self) -> bool {
        !self.generated_content.is_empty()
    }

    pub fn section(&self, id: Uuid) -> Option<&SectionSpec> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn generated_section(&self, id: &str) -> Option<&GeneratedSection> {
        self.generated_content.iter().find(|s| s.id == id)
    }
}
