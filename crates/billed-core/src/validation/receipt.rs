//! Receipt file validation
//!
//! The upload guard checks a selected file against the allowed-extension
//! policy before any network call. Validation is a pure function of the
//! filename; clearing a rejected selection belongs to the caller.

use crate::constants::ALLOWED_RECEIPT_EXTENSIONS;
use crate::error::AppError;

/// Allowed-extension policy for receipt uploads.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    allowed_extensions: Vec<String>,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::new(ALLOWED_RECEIPT_EXTENSIONS.iter().map(|e| e.to_string()))
    }
}

impl UploadPolicy {
    pub fn new(allowed_extensions: impl IntoIterator<Item = String>) -> Self {
        Self {
            allowed_extensions: allowed_extensions
                .into_iter()
                .map(|e| e.to_lowercase())
                .collect(),
        }
    }

    /// Validate a filename against the policy. Returns the normalized
    /// (lowercased) extension on acceptance.
    ///
    /// A filename without an extension is rejected.
    pub fn validate(&self, filename: &str) -> Result<String, AppError> {
        let extension = match filename.rsplit_once('.') {
            Some((_, ext)) if !ext.is_empty() => ext.to_lowercase(),
            _ => {
                return Err(AppError::InvalidInput(format!(
                    "File '{}' has no extension",
                    filename
                )))
            }
        };

        if !self.allowed_extensions.contains(&extension) {
            return Err(AppError::InvalidInput(format!(
                "Invalid file extension .{}. Allowed extensions: {}",
                extension,
                self.allowed_extensions.join(", ")
            )));
        }

        Ok(extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_the_allowed_image_extensions() {
        let policy = UploadPolicy::default();
        for filename in ["receipt.jpg", "receipt.jpeg", "receipt.png"] {
            assert!(policy.validate(filename).is_ok(), "{} should pass", filename);
        }
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        let policy = UploadPolicy::default();
        assert_eq!(policy.validate("Receipt.JPG").unwrap(), "jpg");
        assert_eq!(policy.validate("receipt.Png").unwrap(), "png");
        assert_eq!(policy.validate("RECEIPT.JPEG").unwrap(), "jpeg");
    }

    #[test]
    fn rejects_other_extensions() {
        let policy = UploadPolicy::default();
        for filename in ["test.txt", "receipt.pdf", "receipt.gif", "archive.tar.gz"] {
            let err = policy.validate(filename).unwrap_err();
            assert!(
                err.to_string().contains("Invalid file extension"),
                "{} should be rejected, got: {}",
                filename,
                err
            );
        }
    }

    #[test]
    fn rejects_a_filename_without_extension() {
        let policy = UploadPolicy::default();
        let err = policy.validate("receipt").unwrap_err();
        assert!(err.to_string().contains("no extension"));
        assert!(policy.validate("receipt.").is_err());
    }

    #[test]
    fn validation_is_idempotent() {
        let policy = UploadPolicy::default();
        let first = policy.validate("receipt.jpg").unwrap();
        let second = policy.validate("receipt.jpg").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn custom_policy_overrides_the_default_list() {
        let policy = UploadPolicy::new(["pdf".to_string()]);
        assert!(policy.validate("receipt.pdf").is_ok());
        assert!(policy.validate("receipt.jpg").is_err());
    }
}
