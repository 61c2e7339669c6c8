pub mod bill;
pub mod form;
pub mod session;

pub use bill::{Bill, BillPayload, BillStatus};
pub use form::{coerce_int, BillForm};
pub use session::SessionIdentity;
