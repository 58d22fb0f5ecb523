//! Core module containing the invoice domain types and validation

pub mod clock;
pub mod error;
pub mod invoice;
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{ConfigError, StoreError};
pub use invoice::{Invoice, InvoiceChangeset, InvoiceStatus, NewInvoice};
pub use validation::{FieldErrors, RawInvoiceForm, ValidatedInvoiceFields};
