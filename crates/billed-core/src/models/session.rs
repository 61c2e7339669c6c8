use serde::{Deserialize, Serialize};

/// Identity of the authenticated employee. Resolved once when a service is
/// constructed; the session record is assumed present at that point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionIdentity {
    pub email: String,
    #[serde(rename = "type", default)]
    pub role: Option<String>,
}

impl SessionIdentity {
    pub fn employee(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            role: Some("Employee".to_string()),
        }
    }
}
