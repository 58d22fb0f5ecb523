//! Invoice domain model
//!
//! Amounts are persisted in minor currency units (cents) to keep
//! floating-point rounding out of the store; conversion from the
//! major-unit form entered on the form happens exactly once, in
//! [`dollars_to_cents`].

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Lifecycle status of an invoice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvoiceStatus {
    Pending,
    Paid,
}

impl InvoiceStatus {
    /// The textual form stored in the `status` column and submitted by forms.
    pub fn as_str(&self) -> &'static str {
        match self {
            InvoiceStatus::Pending => "pending",
            InvoiceStatus::Paid => "paid",
        }
    }

    /// Parse a submitted status value. Anything outside the two defined
    /// values is rejected.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "pending" => Some(InvoiceStatus::Pending),
            "paid" => Some(InvoiceStatus::Paid),
            _ => None,
        }
    }
}

impl fmt::Display for InvoiceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated payload for an insert. The store assigns the id; the issue
/// date is stamped by the pipeline at creation time and never changes
/// afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct NewInvoice {
    pub customer_id: String,
    pub amount_cents: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// Validated payload for an update. Deliberately has no date field:
/// the issue date is immutable after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceChangeset {
    pub customer_id: String,
    pub amount_cents: i64,
    pub status: InvoiceStatus,
}

/// A persisted invoice row. `amount` is in minor units.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Invoice {
    pub id: Uuid,
    pub customer_id: String,
    pub amount: i64,
    pub status: InvoiceStatus,
    pub date: NaiveDate,
}

/// Convert a major-unit amount to minor units, rounding to the nearest
/// cent so decimal text like "42.505" cannot yield a fractional unit.
pub fn dollars_to_cents(amount: f64) -> i64 {
    (amount * 100.0).round() as i64
}
