//! Error types module
//!
//! All client-side errors are unified under `AppError`; failures coming
//! back from the remote store are the typed `StoreError`, whose `Display`
//! output is exactly what the list view surfaces to the user.

use thiserror::Error;

/// Errors reported by the remote store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Non-success HTTP status. The message carried to the user is the
    /// literal `Erreur {status}` string the list view renders.
    #[error("Erreur {status}")]
    Status { status: u16, body: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_displays_the_literal_erreur_message() {
        let err = StoreError::Status {
            status: 404,
            body: "not found".to_string(),
        };
        assert_eq!(err.to_string(), "Erreur 404");

        let err = StoreError::Status {
            status: 500,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "Erreur 500");
    }

    #[test]
    fn store_error_converts_into_app_error() {
        let err: AppError = StoreError::Network("connection reset".to_string()).into();
        assert_eq!(err.to_string(), "Network error: connection reset");
    }
}
