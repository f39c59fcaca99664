use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One scored assessment of the generated content.
///
/// Records are immutable once appended. The sequence is append-only and
/// insertion-ordered: each generation pass appends exactly one record, each
/// evaluation pass appends one or more (the Evaluator may report a batch of
/// iterative rounds in a single call).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationRecord {
    /// Coherency score, [0, 1] by convention. Out-of-range values are
    /// tolerated and passed through untouched.
    pub coherency_score: f64,
    #[serde(rename = "evaluator_diagnostic_summary")]
    pub diagnostic_summary: String,
    /// Assigned locally when the record is appended, not by the service.
    pub timestamp: DateTime<Utc>,
}

impl EvaluationRecord {
    /// Build a record stamped with the current time.
    pub fn now(coherency_score: f64, diagnostic_summary: impl Into<String>) -> Self {
        Self {
            coherency_score,
            diagnostic_summary: diagnostic_summary.into(),
            timestamp: Utc::now(),
        }
    }
}
