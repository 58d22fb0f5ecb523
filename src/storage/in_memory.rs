//! In-memory invoice store for testing and development
//!
//! Uses RwLock for thread-safe access, and can be switched into a failing
//! mode so the store-error paths of the pipeline can be exercised.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use uuid::Uuid;

use super::InvoiceStore;
use crate::core::error::StoreError;
use crate::core::invoice::{Invoice, InvoiceChangeset, NewInvoice};

/// In-memory invoice store.
#[derive(Clone, Default)]
pub struct InMemoryInvoiceStore {
    rows: Arc<RwLock<HashMap<Uuid, Invoice>>>,
    unavailable: Arc<AtomicBool>,
}

impl InMemoryInvoiceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every subsequent call fail with [`StoreError::Unavailable`].
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    /// Snapshot of all rows, for assertions.
    pub fn rows(&self) -> Vec<Invoice> {
        self.rows
            .read()
            .map(|rows| rows.values().cloned().collect())
            .unwrap_or_default()
    }

    fn check_available(&self) -> Result<(), StoreError> {
        if self.unavailable.load(Ordering::SeqCst) {
            Err(StoreError::Unavailable)
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl InvoiceStore for InMemoryInvoiceStore {
    async fn insert(&self, invoice: NewInvoice) -> Result<(), StoreError> {
        self.check_available()?;
        let mut rows = self.rows.write().map_err(|_| StoreError::Unavailable)?;

        let id = Uuid::new_v4();
        rows.insert(
            id,
            Invoice {
                id,
                customer_id: invoice.customer_id,
                amount: invoice.amount_cents,
                status: invoice.status,
                date: invoice.date,
            },
        );
        Ok(())
    }

    async fn update(&self, id: Uuid, changes: InvoiceChangeset) -> Result<(), StoreError> {
        self.check_available()?;
        let mut rows = self.rows.write().map_err(|_| StoreError::Unavailable)?;

        // Missing id: zero rows affected, still a success.
        if let Some(row) = rows.get_mut(&id) {
            row.customer_id = changes.customer_id;
            row.amount = changes.amount_cents;
            row.status = changes.status;
        }
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.check_available()?;
        let mut rows = self.rows.write().map_err(|_| StoreError::Unavailable)?;

        rows.remove(&id);
        Ok(())
    }

    async fn list(&self) -> Result<Vec<Invoice>, StoreError> {
        self.check_available()?;
        let rows = self.rows.read().map_err(|_| StoreError::Unavailable)?;

        let mut invoices: Vec<Invoice> = rows.values().cloned().collect();
        invoices.sort_by(|a, b| b.date.cmp(&a.date).then(a.id.cmp(&b.id)));
        Ok(invoices)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::invoice::InvoiceStatus;
    use chrono::NaiveDate;

    fn new_invoice(customer: &str, cents: i64) -> NewInvoice {
        NewInvoice {
            customer_id: customer.to_string(),
            amount_cents: cents,
            status: InvoiceStatus::Pending,
            date: NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id_and_stores_row() {
        let store = InMemoryInvoiceStore::new();
        store.insert(new_invoice("c1", 4250)).await.unwrap();

        let rows = store.rows();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].customer_id, "c1");
        assert_eq!(rows[0].amount, 4250);
    }

    #[tokio::test]
    async fn test_update_changes_fields_but_not_date() {
        let store = InMemoryInvoiceStore::new();
        store.insert(new_invoice("c1", 100)).await.unwrap();
        let original = store.rows().remove(0);

        store
            .update(
                original.id,
                InvoiceChangeset {
                    customer_id: "c2".to_string(),
                    amount_cents: 9999,
                    status: InvoiceStatus::Paid,
                },
            )
            .await
            .unwrap();

        let updated = store.rows().remove(0);
        assert_eq!(updated.customer_id, "c2");
        assert_eq!(updated.amount, 9999);
        assert_eq!(updated.status, InvoiceStatus::Paid);
        assert_eq!(updated.date, original.date);
    }

    #[tokio::test]
    async fn test_update_missing_id_is_not_an_error() {
        let store = InMemoryInvoiceStore::new();
        let result = store
            .update(
                Uuid::new_v4(),
                InvoiceChangeset {
                    customer_id: "c1".to_string(),
                    amount_cents: 1,
                    status: InvoiceStatus::Pending,
                },
            )
            .await;
        assert!(result.is_ok());
        assert!(store.rows().is_empty());
    }

    #[tokio::test]
    async fn test_delete_is_unconditional() {
        let store = InMemoryInvoiceStore::new();
        store.insert(new_invoice("c1", 100)).await.unwrap();
        let id = store.rows().remove(0).id;

        store.delete(id).await.unwrap();
        assert!(store.rows().is_empty());

        // Deleting again affects zero rows, no error
        store.delete(id).await.unwrap();
    }

    #[tokio::test]
    async fn test_list_orders_newest_first() {
        let store = InMemoryInvoiceStore::new();
        let mut older = new_invoice("c1", 100);
        older.date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        store.insert(older).await.unwrap();
        store.insert(new_invoice("c2", 200)).await.unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].customer_id, "c2");
        assert_eq!(listed[1].customer_id, "c1");
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_every_call() {
        let store = InMemoryInvoiceStore::new();
        store.set_unavailable(true);

        let err = store.insert(new_invoice("c1", 100)).await.unwrap_err();
        assert!(matches!(err, StoreError::Unavailable));
        assert!(store.list().await.is_err());

        store.set_unavailable(false);
        assert!(store.insert(new_invoice("c1", 100)).await.is_ok());
    }
}
