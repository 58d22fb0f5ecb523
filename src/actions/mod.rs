//! The validated-write pipeline: create, update and delete invoice actions
//!
//! Each action is a single-shot, stateless call: parse and validate the
//! submitted fields, issue exactly one parameterized write, invalidate the
//! cached listing view, and hand a redirect back to the framework layer.
//! A failed validation never reaches the store. A failed write is logged
//! and reported as a structured message rather than an escaping error,
//! with one deliberate exception: `delete` lets store failures propagate.

mod outcome;

pub use outcome::{ActionResult, ActionState};

use std::sync::Arc;
use tracing::{debug, error};
use uuid::Uuid;

use crate::core::clock::Clock;
use crate::core::error::StoreError;
use crate::core::invoice::{InvoiceChangeset, NewInvoice};
use crate::core::validation::{parse_and_validate, RawInvoiceForm};
use crate::storage::InvoiceStore;

/// Listing view targeted by cache invalidation and post-write redirects.
pub const INVOICES_PATH: &str = "/dashboard/invoices";

/// Summary message when create validation fails.
pub const CREATE_MISSING_FIELDS: &str = "Missing Fields. Failed to Create Invoice.";
/// Summary message when update validation fails.
pub const UPDATE_MISSING_FIELDS: &str = "Missing Fields. Failed to Update Invoice.";
/// Summary message when the insert fails at the store.
pub const CREATE_DB_ERROR: &str = "Database Error: Unable to create invoice.";
/// Summary message when the update fails at the store.
pub const UPDATE_DB_ERROR: &str = "Database Error: Unable to update invoice.";

/// Cache-invalidation seam for the listing view.
///
/// The server layer provides the real page cache; tests record calls.
pub trait Revalidator: Send + Sync {
    fn revalidate(&self, path: &str);
}

/// The invoice action pipeline. Holds its collaborators as injected
/// dependencies and no other state; every call is independent.
pub struct InvoiceActions {
    store: Arc<dyn InvoiceStore>,
    clock: Arc<dyn Clock>,
    cache: Arc<dyn Revalidator>,
}

impl InvoiceActions {
    pub fn new(
        store: Arc<dyn InvoiceStore>,
        clock: Arc<dyn Clock>,
        cache: Arc<dyn Revalidator>,
    ) -> Self {
        Self {
            store,
            clock,
            cache,
        }
    }

    /// Create an invoice from submitted form fields.
    ///
    /// The amount is converted to minor units and the issue date stamped
    /// with today's calendar date. Exactly one insert is issued; the store
    /// assigns the id.
    pub async fn create(&self, form: RawInvoiceForm) -> ActionResult {
        let fields = match parse_and_validate(&form) {
            Ok(fields) => fields,
            Err(errors) => {
                return ActionResult::Failure(ActionState::invalid(CREATE_MISSING_FIELDS, errors));
            }
        };

        let invoice = NewInvoice {
            customer_id: fields.customer_id,
            amount_cents: fields.amount_cents,
            status: fields.status,
            date: self.clock.today(),
        };
        debug!(
            customer_id = %invoice.customer_id,
            amount_cents = invoice.amount_cents,
            status = %invoice.status,
            date = %invoice.date,
            "creating invoice"
        );

        if let Err(err) = self.store.insert(invoice).await {
            error!(error = %err, "failed to insert invoice");
            return ActionResult::Failure(ActionState::store_failure(CREATE_DB_ERROR));
        }

        self.cache.revalidate(INVOICES_PATH);
        ActionResult::Redirect(INVOICES_PATH.to_string())
    }

    /// Update customer, amount and status for an existing invoice.
    ///
    /// The issue date is never touched. An id that matches no row affects
    /// zero rows and still counts as success.
    pub async fn update(&self, id: Uuid, form: RawInvoiceForm) -> ActionResult {
        let fields = match parse_and_validate(&form) {
            Ok(fields) => fields,
            Err(errors) => {
                return ActionResult::Failure(ActionState::invalid(UPDATE_MISSING_FIELDS, errors));
            }
        };

        let changes = InvoiceChangeset {
            customer_id: fields.customer_id,
            amount_cents: fields.amount_cents,
            status: fields.status,
        };
        debug!(invoice_id = %id, amount_cents = changes.amount_cents, "updating invoice");

        if let Err(err) = self.store.update(id, changes).await {
            error!(error = %err, invoice_id = %id, "failed to update invoice");
            return ActionResult::Failure(ActionState::store_failure(UPDATE_DB_ERROR));
        }

        self.cache.revalidate(INVOICES_PATH);
        ActionResult::Redirect(INVOICES_PATH.to_string())
    }

    /// Delete an invoice unconditionally. A missing id affects zero rows.
    ///
    /// Unlike create and update, store failures are not intercepted here;
    /// the caller sees them as-is.
    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        self.store.delete(id).await?;
        self.cache.revalidate(INVOICES_PATH);
        Ok(())
    }
}
