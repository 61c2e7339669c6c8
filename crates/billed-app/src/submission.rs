//! New-bill submission workflow.
//!
//! Drives one form interaction end to end: validate the selected receipt,
//! upload it, assemble the bill payload from the raw form values, send it
//! to the store, and navigate to the bill list on success. The two remote
//! phases are linked by the key returned from the upload; a submission
//! racing an unresolved upload proceeds with empty file fields rather than
//! waiting.

use std::sync::Arc;

use billed_core::constants::routes;
use billed_core::models::{coerce_int, BillForm, BillPayload, BillStatus, SessionIdentity};
use billed_core::store::{BillsStore, CreateFileRequest};
use billed_core::validation::UploadPolicy;
use tracing::{error, warn};

use crate::context::{Navigator, SessionProvider};

/// A file picked in the form's file input.
#[derive(Debug, Clone)]
pub struct SelectedFile {
    pub name: String,
    pub content: Vec<u8>,
    pub content_type: String,
}

/// Receipt that passed the extension check, retained until the form is
/// discarded or an invalid selection clears it.
#[derive(Debug, Clone)]
pub struct StagedReceipt {
    pub file_name: String,
}

/// Resolved upload paired with the name of the file it was created from.
/// The three fields are set together when the upload lands, so the payload
/// never mixes one file's name with another file's URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedReceipt {
    pub file_url: String,
    pub file_name: String,
    pub key: String,
}

/// Progress of one form interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    FileValidated,
    FileUploaded,
    Submitting,
    Submitted,
    Failed,
}

/// Result of one file-change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileChangeOutcome {
    /// Empty selection; nothing validated, nothing changed.
    NoFile,
    /// Extension rejected; the staged input was cleared, no network call.
    Rejected,
    /// Upload resolved; file URL and record key stored.
    Uploaded,
    /// Upload failed; logged, staged receipt retained.
    UploadFailed,
}

/// Result of one submit event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Submitted,
    Failed,
}

/// Orchestrates the two-step bill submission against the remote store.
///
/// Owns the draft state exclusively; collaborators (store, navigator,
/// session) are injected at construction.
pub struct BillSubmissionService {
    store: Arc<dyn BillsStore>,
    navigator: Arc<dyn Navigator>,
    policy: UploadPolicy,
    session: SessionIdentity,
    state: SubmissionState,
    staged: Option<StagedReceipt>,
    upload: Option<ResolvedReceipt>,
}

impl BillSubmissionService {
    pub fn new(
        store: Arc<dyn BillsStore>,
        navigator: Arc<dyn Navigator>,
        session_provider: &dyn SessionProvider,
    ) -> Self {
        Self {
            store,
            navigator,
            policy: UploadPolicy::default(),
            session: session_provider.current(),
            state: SubmissionState::Idle,
            staged: None,
            upload: None,
        }
    }

    pub fn with_policy(mut self, policy: UploadPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Receipt currently staged in the file input, if any.
    pub fn staged_receipt(&self) -> Option<&StagedReceipt> {
        self.staged.as_ref()
    }

    /// Resolved upload result, once the create-file call has landed.
    pub fn uploaded_receipt(&self) -> Option<&ResolvedReceipt> {
        self.upload.as_ref()
    }

    /// Handle a change event on the file input.
    ///
    /// An empty selection is a no-op. A rejected extension clears the
    /// staged input so a stale invalid file is never retained; no network
    /// call is made. An accepted file is staged and uploaded immediately
    /// with the session email as metadata. If two uploads race, the last
    /// one to resolve wins; there is no cancellation.
    pub async fn handle_file_change(&mut self, files: &[SelectedFile]) -> FileChangeOutcome {
        let Some(file) = files.first() else {
            return FileChangeOutcome::NoFile;
        };

        if let Err(err) = self.policy.validate(&file.name) {
            warn!(file_name = %file.name, "receipt rejected: {}", err);
            self.staged = None;
            return FileChangeOutcome::Rejected;
        }

        self.staged = Some(StagedReceipt {
            file_name: file.name.clone(),
        });
        if self.upload.is_none() {
            self.state = SubmissionState::FileValidated;
        }

        let request = CreateFileRequest {
            file_name: file.name.clone(),
            content: file.content.clone(),
            content_type: file.content_type.clone(),
            email: self.session.email.clone(),
        };

        match self.store.create_file(request).await {
            Ok(receipt) => {
                // Name and upload result are recorded together so the
                // payload's file reference always describes one file.
                self.upload = Some(ResolvedReceipt {
                    file_url: receipt.file_url,
                    file_name: file.name.clone(),
                    key: receipt.key,
                });
                self.state = SubmissionState::FileUploaded;
                FileChangeOutcome::Uploaded
            }
            Err(err) => {
                error!("receipt upload failed: {}", err);
                FileChangeOutcome::UploadFailed
            }
        }
    }

    /// Handle the form submit event.
    ///
    /// Assembles the payload from the raw form values plus whatever upload
    /// result is available, then issues the update call. On success the
    /// navigator is pointed at the bill list; on failure the service stops
    /// without retrying and the error stays with the list view's fetch
    /// contract.
    pub async fn handle_submit(&mut self, form: &BillForm) -> SubmitOutcome {
        self.state = SubmissionState::Submitting;
        let payload = self.assemble_payload(form);
        let bill_id = self.upload.as_ref().map(|u| u.key.clone());

        match self.store.update_bill(&payload, bill_id.as_deref()).await {
            Ok(_) => {
                self.state = SubmissionState::Submitted;
                self.navigator.navigate(routes::BILLS);
                SubmitOutcome::Submitted
            }
            Err(err) => {
                error!("bill submission failed: {}", err);
                self.state = SubmissionState::Failed;
                SubmitOutcome::Failed
            }
        }
    }

    fn assemble_payload(&self, form: &BillForm) -> BillPayload {
        BillPayload {
            email: self.session.email.clone(),
            expense_type: form.expense_type.clone(),
            name: form.expense_name.clone(),
            amount: coerce_int(&form.amount),
            date: form.date.clone(),
            vat: form.vat.clone(),
            pct: coerce_int(&form.pct),
            commentary: form.commentary.clone(),
            file_url: self.upload.as_ref().map(|u| u.file_url.clone()),
            file_name: self.upload.as_ref().map(|u| u.file_name.clone()),
            status: BillStatus::Pending,
        }
    }
}
