//! Shared constants: the receipt extension policy, route paths, and the
//! stable form-field identifiers used by tests and automation.

/// Receipt file extensions accepted by the upload guard (lowercase).
pub const ALLOWED_RECEIPT_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// Route paths understood by the navigation collaborator.
pub mod routes {
    /// Bill list view, target of a successful submission.
    pub const BILLS: &str = "/employee/bills";
}

/// Stable lookup keys for the new-bill form fields.
pub mod form_fields {
    pub const FILE: &str = "file";
    pub const EXPENSE_TYPE: &str = "expense-type";
    pub const EXPENSE_NAME: &str = "expense-name";
    pub const AMOUNT: &str = "amount";
    pub const DATEPICKER: &str = "datepicker";
    pub const VAT: &str = "vat";
    pub const PCT: &str = "pct";
    pub const COMMENTARY: &str = "commentary";
    pub const FORM_NEW_BILL: &str = "form-new-bill";
}
