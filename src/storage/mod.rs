//! Storage backends for invoices

pub mod in_memory;
pub mod postgres;

pub use in_memory::InMemoryInvoiceStore;
pub use postgres::PostgresInvoiceStore;

use async_trait::async_trait;
use uuid::Uuid;

use crate::core::error::StoreError;
use crate::core::invoice::{Invoice, InvoiceChangeset, NewInvoice};

/// Persistence seam for invoice rows.
///
/// The store is the sole owner of record state; the action pipeline holds
/// nothing between calls. Implementations must issue a single atomic
/// statement per operation.
#[async_trait]
pub trait InvoiceStore: Send + Sync {
    /// Insert one invoice row. The store assigns the id.
    async fn insert(&self, invoice: NewInvoice) -> Result<(), StoreError>;

    /// Set customer, amount and status for `id`, leaving the issue date
    /// untouched. An id that matches no row affects zero rows and is not
    /// an error.
    async fn update(&self, id: Uuid, changes: InvoiceChangeset) -> Result<(), StoreError>;

    /// Delete the row for `id`, whether or not it exists.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;

    /// All invoice rows, newest issue date first, for the listing view.
    async fn list(&self) -> Result<Vec<Invoice>, StoreError>;
}
