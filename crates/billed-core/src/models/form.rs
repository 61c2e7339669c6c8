use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Raw values of the new-bill form, keyed by the stable field identifiers.
///
/// Every field arrives as the string the user typed; integer coercion of
/// `amount` and `pct` happens at payload-assembly time.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BillForm {
    #[serde(rename = "expense-type")]
    pub expense_type: String,
    #[serde(rename = "expense-name")]
    pub expense_name: String,
    pub amount: String,
    #[serde(rename = "datepicker")]
    pub date: String,
    pub vat: String,
    pub pct: String,
    #[serde(default)]
    pub commentary: String,
}

/// Coerce a raw form value to an integer JSON value. Non-numeric input is
/// passed through uncoerced as a string; the store decides what to do with
/// it. There is no client-side numeric validation beyond this coercion.
pub fn coerce_int(raw: &str) -> Value {
    raw.trim()
        .parse::<i64>()
        .map(Value::from)
        .unwrap_or_else(|_| Value::String(raw.to_string()))
}
