//! Bill list view service and its error contract.
//!
//! A fetch failure is surfaced verbatim: whatever message the store error
//! carries is the message the rendered view contains. The presenter never
//! dispatches on specific error codes.

use std::sync::Arc;

use billed_core::models::Bill;
use billed_core::store::BillsStore;
use tracing::error;

/// View state of the bill list: rows on success, the error's literal text
/// on failure.
#[derive(Debug, Clone, Default)]
pub struct ListViewState {
    pub bills: Vec<Bill>,
    pub error: Option<String>,
}

impl ListViewState {
    /// Text rendition of the view. On failure the output contains the
    /// error message exactly as the store reported it.
    pub fn render(&self) -> String {
        let mut out = String::from("Mes notes de frais\n");
        if let Some(error) = &self.error {
            out.push('\n');
            out.push_str(error);
            return out;
        }
        for bill in &self.bills {
            out.push_str(&format!(
                "{}\t{}\t{}\t{}\n",
                bill.expense_type, bill.name, bill.date, bill.amount
            ));
        }
        out
    }
}

/// Fetches the bill list and folds the result into a view state.
pub struct BillsListService {
    store: Arc<dyn BillsStore>,
}

impl BillsListService {
    pub fn new(store: Arc<dyn BillsStore>) -> Self {
        Self { store }
    }

    pub async fn fetch(&self) -> ListViewState {
        match self.store.list_bills().await {
            Ok(bills) => ListViewState { bills, error: None },
            Err(err) => {
                error!("failed to fetch bills: {}", err);
                ListViewState {
                    bills: Vec::new(),
                    error: Some(err.to_string()),
                }
            }
        }
    }
}
