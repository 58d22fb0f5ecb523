//! HTTP surface for the invoice actions
//!
//! Assembles the router over any [`InvoiceStore`] and owns the black-box
//! collaborators the pipeline depends on: the listing page cache and the
//! redirect performed after a committed write.

pub mod cache;
pub mod handlers;

use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::actions::InvoiceActions;
use crate::core::clock::SystemClock;
use crate::storage::InvoiceStore;
use self::cache::ListingCache;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub actions: Arc<InvoiceActions>,
    pub store: Arc<dyn InvoiceStore>,
    pub cache: ListingCache,
}

/// Build the invoice router over the given store.
pub fn router(store: Arc<dyn InvoiceStore>) -> Router {
    let cache = ListingCache::new();
    let actions = Arc::new(InvoiceActions::new(
        store.clone(),
        Arc::new(SystemClock),
        Arc::new(cache.clone()),
    ));
    let state = AppState {
        actions,
        store,
        cache,
    };

    Router::new()
        .route(
            "/dashboard/invoices",
            get(handlers::list_invoices).post(handlers::create_invoice),
        )
        .route("/dashboard/invoices/{id}", post(handlers::update_invoice))
        .route(
            "/dashboard/invoices/{id}/delete",
            post(handlers::delete_invoice),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
