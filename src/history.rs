//! Read-only projection of the evaluation history for display.
//!
//! Classification feeds presentation only; no workflow decision depends on
//! it. Selection state is ephemeral UI state and lives outside the draft.

use crate::models::EvaluationRecord;

/// Three-tier display classification of a coherency score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreBand {
    Low,
    Medium,
    High,
}

impl ScoreBand {
    /// Classify a score: `Low` below 0.5, `Medium` below 0.85, `High`
    /// otherwise. Out-of-range scores are tolerated (they fall into the
    /// nearest band); NaN degrades to `Low`.
    pub fn classify(score: f64) -> Self {
        if score >= 0.85 {
            Self::High
        } else if score >= 0.5 {
            Self::Medium
        } else {
            Self::Low
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// One display row of the evaluation history.
#[derive(Debug, Clone)]
pub struct HistoryRow<'a> {
    /// 1-based run number.
    pub run: usize,
    pub record: &'a EvaluationRecord,
    pub band: ScoreBand,
    /// Whether this row is the expanded detail view.
    pub expanded: bool,
}

/// Ephemeral selection state over the evaluation history.
///
/// At most one record is expanded at a time. Selecting a different record
/// switches to it; selecting the expanded one again collapses it.
#[derive(Debug, Clone, Default)]
pub struct HistoryView {
    expanded: Option<usize>,
}

impl HistoryView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    /// Toggle the expanded record.
    pub fn toggle(&mut self, index: usize) {
        self.expanded = if self.expanded == Some(index) {
            None
        } else {
            Some(index)
        };
    }

    /// Collapse the detail view.
    pub fn collapse(&mut self) {
        self.expanded = None;
    }

    /// Project records into display rows, in history order.
    pub fn rows<'a>(&self, records: &'a [EvaluationRecord]) -> Vec<HistoryRow<'a>> {
        records
            .iter()
            .enumerate()
            .map(|(i, record)| HistoryRow {
                run: i + 1,
                record,
                band: ScoreBand::classify(record.coherency_score),
                expanded: self.expanded == Some(i),
            })
            .collect()
    }
}
