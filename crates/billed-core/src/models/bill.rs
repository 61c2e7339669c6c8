use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Lifecycle of a bill on the server. A bill is created `Pending` and is
/// moved to `Accepted` or `Refused` server-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

/// Server-side bill entity, referenced by its store key.
///
/// `amount` and `pct` are usually integers but may carry the raw form
/// input when a client passed an uncoercible value through.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: Value,
    pub date: String,
    pub vat: String,
    pub pct: Value,
    #[serde(default)]
    pub commentary: String,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    pub status: BillStatus,
}

/// JSON body of the bill update call, assembled from the form values and
/// the upload result. Field names follow the wire format.
///
/// `file_url` and `file_name` are null when the upload phase has not
/// resolved at submission time; the store call proceeds anyway.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillPayload {
    pub email: String,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: Value,
    pub date: String,
    pub vat: String,
    pub pct: Value,
    pub commentary: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: BillStatus,
}
