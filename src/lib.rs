//! # Acme Invoices
//!
//! A small invoicing backend built around a validated-write pipeline:
//! untyped form fields come in, get parsed and validated in two distinct
//! stages, and either become exactly one parameterized write followed by a
//! cache invalidation and a redirect, or come back as a field-keyed error
//! map the form can render.
//!
//! ## Shape of the crate
//!
//! - [`core`]: invoice domain types, two-stage validation, clock and errors
//! - [`actions`]: the create/update/delete pipeline itself
//! - [`storage`]: the `InvoiceStore` seam with PostgreSQL and in-memory
//!   backends
//! - [`server`]: axum routes, the listing page cache and redirect handling
//! - [`config`]: environment-derived startup configuration
//!
//! ## Example
//!
//! ```rust,ignore
//! use acme_invoices::prelude::*;
//!
//! let store = Arc::new(InMemoryInvoiceStore::new());
//! let cache = Arc::new(ListingCache::new());
//! let actions = InvoiceActions::new(store, Arc::new(SystemClock), cache);
//!
//! match actions.create(RawInvoiceForm::new("c1", "42.50", "pending")).await {
//!     ActionResult::Redirect(target) => println!("navigate to {target}"),
//!     ActionResult::Failure(state) => println!("{:?}", state.errors),
//! }
//! ```

pub mod actions;
pub mod config;
pub mod core;
pub mod server;
pub mod storage;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Pipeline ===
    pub use crate::actions::{
        ActionResult, ActionState, InvoiceActions, Revalidator, INVOICES_PATH,
    };

    // === Domain ===
    pub use crate::core::{
        clock::{Clock, FixedClock, SystemClock},
        error::{ConfigError, StoreError},
        invoice::{Invoice, InvoiceChangeset, InvoiceStatus, NewInvoice},
        validation::{FieldErrors, RawInvoiceForm},
    };

    // === Storage ===
    pub use crate::storage::{InMemoryInvoiceStore, InvoiceStore, PostgresInvoiceStore};

    // === Server ===
    pub use crate::server::{cache::ListingCache, router, AppState};

    // === Config ===
    pub use crate::config::AppConfig;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use async_trait::async_trait;
    pub use chrono::NaiveDate;
    pub use std::sync::Arc;
    pub use uuid::Uuid;
}
