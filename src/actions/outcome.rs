//! Structured outcomes of the validated-write pipeline

use serde::Serialize;
use std::collections::BTreeMap;

use crate::core::validation::FieldErrors;

/// Result of a create or update action.
///
/// `Redirect` models the terminal control-flow exit of the form framework:
/// after a committed write the pipeline never resumes, and the caller is
/// responsible for performing the actual transfer to `target`.
#[derive(Debug, Clone, PartialEq)]
pub enum ActionResult {
    /// The write committed and the listing cache was invalidated; navigate
    /// to the target path.
    Redirect(String),

    /// Validation or store failure. Nothing was written past the point of
    /// failure and no navigation happens.
    Failure(ActionState),
}

impl ActionResult {
    pub fn is_redirect(&self) -> bool {
        matches!(self, ActionResult::Redirect(_))
    }
}

/// User-facing failure state, rendered next to the form that submitted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ActionState {
    /// Summary banner message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,

    /// Field-keyed messages; fields that passed validation are absent.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub errors: FieldErrors,
}

impl ActionState {
    /// Failure state for a rejected form: per-field messages plus a summary.
    pub fn invalid(message: &str, errors: FieldErrors) -> Self {
        Self {
            message: Some(message.to_string()),
            errors,
        }
    }

    /// Failure state for an intercepted store error. The underlying cause
    /// is logged, not exposed, so there are no field entries.
    pub fn store_failure(message: &str) -> Self {
        Self {
            message: Some(message.to_string()),
            errors: FieldErrors::new(),
        }
    }
}
