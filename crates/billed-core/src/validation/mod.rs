//! Validation modules

pub mod receipt;

pub use receipt::UploadPolicy;
