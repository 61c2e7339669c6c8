//! Remote-store abstraction
//!
//! The submission and list services talk to the backend through this trait
//! so the HTTP client and test doubles are interchangeable. The two-phase
//! submission is expressed in the types: `create_file` returns an
//! [`UploadedReceipt`] whose `key` the `update_bill` phase targets.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::StoreError;
use crate::models::{Bill, BillPayload};

/// Receipt file staged for upload, plus the session email sent as form
/// metadata alongside it.
#[derive(Debug, Clone)]
pub struct CreateFileRequest {
    pub file_name: String,
    pub content: Vec<u8>,
    pub content_type: String,
    pub email: String,
}

/// Result of the upload phase: the stored file URL and the key of the bill
/// record the second phase must update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedReceipt {
    pub file_url: String,
    pub key: String,
}

#[async_trait]
pub trait BillsStore: Send + Sync {
    /// Upload the receipt file and create the backing bill record.
    async fn create_file(&self, req: CreateFileRequest) -> Result<UploadedReceipt, StoreError>;

    /// Update the bill record with the assembled payload. `bill_id` is the
    /// key from the upload phase when that phase has resolved.
    async fn update_bill(
        &self,
        payload: &BillPayload,
        bill_id: Option<&str>,
    ) -> Result<Bill, StoreError>;

    /// List the bills previously submitted by the current user.
    async fn list_bills(&self) -> Result<Vec<Bill>, StoreError>;
}
