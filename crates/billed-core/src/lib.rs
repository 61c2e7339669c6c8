//! Billed Core Library
//!
//! This crate provides the domain models, error types, receipt validation,
//! and the remote-store abstraction shared across all Billed client
//! components.

pub mod constants;
pub mod error;
pub mod models;
pub mod store;
pub mod validation;

// Re-export commonly used types
pub use error::{AppError, StoreError};
pub use store::{BillsStore, CreateFileRequest, UploadedReceipt};
pub use validation::UploadPolicy;
