//! The draft workflow state machine.
//!
//! [`DraftWorkflow`] owns the session's single [`Draft`] and mediates every
//! transition: configuration edits, content edits, and the three remote
//! triggers (generate, evaluate, export). Triggers are gated by local
//! preconditions and by a single shared busy flag, so at most one remote
//! operation is outstanding at a time and all wholesale mutations of the
//! generated content are serialized.
//!
//! Failure atomicity: a failed remote call leaves the draft in its
//! last-known-good state. Responses are applied only after the call has
//! succeeded, and the busy flag is cleared on every exit path.

use thiserror::Error;
use uuid::Uuid;

use crate::client::{ClientError, DraftServices, EvaluateRequest, ExportRequest, GenerateRequest};
use crate::models::{
    DocumentFormat, Draft, EvaluationRecord, ExportedDocument, GeneratedField, SectionField,
    SectionSpec,
};

/// Errors surfaced by workflow trigger operations.
///
/// The first three are local rejections that never reach the network;
/// `Client` wraps transport failures and non-success statuses from the
/// remote collaborators.
#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error("another remote operation is already in flight")]
    Busy,

    #[error("main topic must not be empty")]
    EmptyTopic,

    #[error("no generated content available")]
    NoGeneratedContent,

    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Coordinator for one drafting session.
///
/// Generic over [`DraftServices`] so the state machine can run against the
/// HTTP client in production and a scripted stand-in under test.
#[derive(Debug)]
pub struct DraftWorkflow<S> {
    draft: Draft,
    services: S,
    busy: bool,
}

impl<S> DraftWorkflow<S> {
    /// Start a session with an empty draft.
    pub fn new(services: S) -> Self {
        Self::with_draft(Draft::new(), services)
    }

    /// Start a session from an existing draft (e.g. a seed loaded by the CLI).
    pub fn with_draft(draft: Draft, services: S) -> Self {
        Self {
            draft,
            services,
            busy: false,
        }
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Whether a remote operation is outstanding.
    pub fn is_busy(&self) -> bool {
        self.busy
    }

    // ============================================================
    // Draft Configuration
    // ============================================================
    //
    // Configuration edits touch state disjoint from any in-flight remote
    // operation and are therefore permitted while busy.

    pub fn set_main_topic(&mut self, value: impl Into<String>) {
        self.draft.main_topic = value.into();
    }

    pub fn set_dynamic_generation(&mut self, value: bool) {
        self.draft.dynamic_generation = value;
    }

    pub fn set_constraints(&mut self, value: impl Into<String>) {
        self.draft.constraints = value.into();
    }

    pub fn set_context(&mut self, value: impl Into<String>) {
        self.draft.context = value.into();
    }

    /// Append a new empty section spec and return its id.
    pub fn add_section(&mut self) -> Uuid {
        let spec = SectionSpec::new();
        let id = spec.id;
        self.draft.sections.push(spec);
        id
    }

    /// Update one field of a section spec. Returns `false` if the id is
    /// unknown.
    pub fn update_section(
        &mut self,
        id: Uuid,
        field: SectionField,
        value: impl Into<String>,
    ) -> bool {
        match self.draft.sections.iter_mut().find(|s| s.id == id) {
            Some(section) => {
                match field {
                    SectionField::Name => section.name = value.into(),
                    SectionField::Description => section.description = value.into(),
                }
                true
            }
            None => false,
        }
    }

    /// Remove a section spec. Returns `false` if the id is unknown.
    /// Already-generated content is never touched.
    pub fn remove_section(&mut self, id: Uuid) -> bool {
        let before = self.draft.sections.len();
        self.draft.sections.retain(|s| s.id != id);
        self.draft.sections.len() < before
    }

    // ============================================================
    // Generated Content Editing
    // ============================================================

    /// Update one field of a generated section. Returns `false` if the id
    /// is unknown.
    pub fn update_generated_section(
        &mut self,
        id: &str,
        field: GeneratedField,
        value: impl Into<String>,
    ) -> bool {
        match self.draft.generated_content.iter_mut().find(|s| s.id == id) {
            Some(section) => {
                match field {
                    GeneratedField::Name => section.name = value.into(),
                    GeneratedField::Content => section.content = value.into(),
                }
                true
            }
            None => false,
        }
    }

    /// Remove a generated section. Returns `false` if the id is unknown.
    pub fn remove_generated_section(&mut self, id: &str) -> bool {
        let before = self.draft.generated_content.len();
        self.draft.generated_content.retain(|s| s.id != id);
        self.draft.generated_content.len() < before
    }

    // ============================================================
    // Trigger Enablement
    // ============================================================
    //
    // Mirror the trigger preconditions so a UI can disable controls
    // without attempting the operation.

    pub fn can_generate(&self) -> bool {
        !self.busy && self.draft.has_topic()
    }

    pub fn can_evaluate(&self) -> bool {
        !self.busy && self.draft.has_topic() && self.draft.has_generated_content()
    }

    pub fn can_export(&self) -> bool {
        !self.busy && self.draft.has_generated_content()
    }
}

impl<S: DraftServices> DraftWorkflow<S> {
    /// Generate content for the draft's section specs.
    ///
    /// Requires a non-empty (trimmed) main topic. On success the generated
    /// content is replaced wholesale (empty if the service returned none)
    /// and exactly one evaluation record is appended, stamped at receipt
    /// time. On failure the draft is unchanged.
    pub async fn generate(&mut self) -> Result<(), WorkflowError> {
        if self.busy {
            return Err(WorkflowError::Busy);
        }
        if !self.draft.has_topic() {
            return Err(WorkflowError::EmptyTopic);
        }

        let request = GenerateRequest::from_draft(&self.draft);
        self.busy = true;
        let result = self.services.generate(&request).await;
        self.busy = false;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("generation failed: {}", e);
                return Err(e.into());
            }
        };

        tracing::info!(
            sections = response.generated_content.len(),
            score = response.coherency_score,
            "generation complete"
        );
        self.draft.generated_content = response.generated_content;
        self.draft.evaluation_history.push(EvaluationRecord::now(
            response.coherency_score,
            response.diagnostic_summary,
        ));
        Ok(())
    }

    /// Evaluate the current generated content.
    ///
    /// Requires a non-empty main topic and non-empty generated content. The
    /// Evaluator may return a revised content sequence: a present field
    /// replaces the local one wholesale (even when empty), an absent field
    /// leaves it untouched. All returned records are appended in response
    /// order. On failure the draft is unchanged.
    pub async fn evaluate(&mut self) -> Result<(), WorkflowError> {
        if self.busy {
            return Err(WorkflowError::Busy);
        }
        if !self.draft.has_topic() {
            return Err(WorkflowError::EmptyTopic);
        }
        if !self.draft.has_generated_content() {
            return Err(WorkflowError::NoGeneratedContent);
        }

        let request = EvaluateRequest::from_draft(&self.draft);
        self.busy = true;
        let result = self.services.evaluate(&request).await;
        self.busy = false;

        let response = match result {
            Ok(response) => response,
            Err(e) => {
                tracing::warn!("evaluation failed: {}", e);
                return Err(e.into());
            }
        };

        tracing::info!(
            rounds = response.evaluation_records.len(),
            revised = response.generated_content.is_some(),
            "evaluation complete"
        );
        if let Some(content) = response.generated_content {
            self.draft.generated_content = content;
        }
        for outcome in response.evaluation_records {
            self.draft.evaluation_history.push(EvaluationRecord::now(
                outcome.coherency_score,
                outcome.diagnostic_summary,
            ));
        }
        Ok(())
    }

    /// Export the generated content to a binary document.
    ///
    /// Requires non-empty generated content. Export never mutates the
    /// draft; the returned payload is opaque and ready for delivery (file
    /// save).
    pub async fn export(
        &mut self,
        format: DocumentFormat,
    ) -> Result<ExportedDocument, WorkflowError> {
        if self.busy {
            return Err(WorkflowError::Busy);
        }
        if !self.draft.has_generated_content() {
            return Err(WorkflowError::NoGeneratedContent);
        }

        let request = ExportRequest::from_draft(&self.draft, format);
        self.busy = true;
        let result = self.services.export(&request).await;
        self.busy = false;

        let bytes = match result {
            Ok(bytes) => bytes,
            Err(e) => {
                tracing::warn!("export failed: {}", e);
                return Err(e.into());
            }
        };

        tracing::info!(bytes = bytes.len(), format = format.as_str(), "export complete");
        Ok(ExportedDocument {
            file_name: format.file_name().to_string(),
            bytes,
        })
    }
}
