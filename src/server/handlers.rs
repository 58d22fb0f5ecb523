//! HTTP handlers wiring form submissions to the action pipeline
//!
//! The pipeline itself is transport-agnostic; this module maps its
//! outcomes onto HTTP: a committed write becomes a `303 See Other` to the
//! listing view, a rejected form renders its field errors as JSON.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Redirect, Response};
use axum::{Form, Json};
use serde_json::json;
use tracing::error;
use uuid::Uuid;

use super::AppState;
use crate::actions::{ActionResult, INVOICES_PATH};
use crate::core::validation::RawInvoiceForm;

impl IntoResponse for ActionResult {
    fn into_response(self) -> Response {
        match self {
            ActionResult::Redirect(target) => Redirect::to(&target).into_response(),
            ActionResult::Failure(state) => {
                let status = if state.errors.is_empty() {
                    StatusCode::INTERNAL_SERVER_ERROR
                } else {
                    StatusCode::UNPROCESSABLE_ENTITY
                };
                (status, Json(state)).into_response()
            }
        }
    }
}

pub async fn create_invoice(
    State(state): State<AppState>,
    Form(form): Form<RawInvoiceForm>,
) -> ActionResult {
    state.actions.create(form).await
}

pub async fn update_invoice(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Form(form): Form<RawInvoiceForm>,
) -> ActionResult {
    state.actions.update(id, form).await
}

/// Delete propagates store failures (see the pipeline docs); here they
/// surface as a bare 500.
pub async fn delete_invoice(State(state): State<AppState>, Path(id): Path<Uuid>) -> Response {
    match state.actions.delete(id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => {
            error!(error = %err, invoice_id = %id, "failed to delete invoice");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

/// Listing view, served from the page cache when warm.
pub async fn list_invoices(State(state): State<AppState>) -> Response {
    if let Some(page) = state.cache.get(INVOICES_PATH) {
        return Json(page).into_response();
    }

    match state.store.list().await {
        Ok(invoices) => {
            let count = invoices.len();
            let page = json!({
                "invoices": invoices,
                "count": count,
            });
            state.cache.put(INVOICES_PATH, page.clone());
            Json(page).into_response()
        }
        Err(err) => {
            error!(error = %err, "failed to list invoices");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}
