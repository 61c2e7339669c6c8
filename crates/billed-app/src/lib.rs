//! Billed client application services.
//!
//! `submission` drives the new-bill workflow: receipt validation, upload,
//! payload assembly, and navigation on success. `list` renders the bill
//! list and its error contract. Both talk to the backend through
//! `billed_core::BillsStore`, so they run unchanged over the HTTP client
//! or a test double.

pub mod context;
pub mod list;
pub mod submission;

pub use context::{Navigator, SessionProvider, StaticSession};
pub use list::{BillsListService, ListViewState};
pub use submission::{
    BillSubmissionService, FileChangeOutcome, ResolvedReceipt, SelectedFile, StagedReceipt,
    SubmissionState, SubmitOutcome,
};
