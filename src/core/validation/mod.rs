//! Two-stage validation for submitted invoice fields
//!
//! Stage one coerces the raw form text into typed values; stage two applies
//! business rules over what parsed. The stages stay separate so a malformed
//! amount and a non-positive amount remain distinguishable, even though both
//! report the same user-facing message.
//!
//! All invalid fields are reported in one pass. Fields that passed carry no
//! entry in the resulting map.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::core::invoice::{dollars_to_cents, InvoiceStatus};

/// Message attached to a missing or wrongly-shaped customer reference.
pub const MSG_CUSTOMER: &str = "Please select a customer.";
/// Message attached to an unparseable or non-positive amount.
pub const MSG_AMOUNT: &str = "Please enter an amount greater than $0.";
/// Message attached to a status outside the defined values.
pub const MSG_STATUS: &str = "Please select an invoice status.";

/// Field-keyed error messages, keyed by the submitted field names.
pub type FieldErrors = BTreeMap<&'static str, Vec<String>>;

/// Raw field values exactly as submitted, before any coercion.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawInvoiceForm {
    pub customer_id: Option<String>,
    pub amount: Option<String>,
    pub status: Option<String>,
}

impl RawInvoiceForm {
    pub fn new(
        customer_id: impl Into<String>,
        amount: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            customer_id: Some(customer_id.into()),
            amount: Some(amount.into()),
            status: Some(status.into()),
        }
    }
}

/// Fields that survived both stages, ready for a write.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidatedInvoiceFields {
    pub customer_id: String,
    pub amount_cents: i64,
    pub status: InvoiceStatus,
}

/// Run both stages over a submitted form.
///
/// Returns the typed fields when everything passed, or the full field-keyed
/// error map otherwise. Never touches the store.
pub fn parse_and_validate(form: &RawInvoiceForm) -> Result<ValidatedInvoiceFields, FieldErrors> {
    let mut errors = FieldErrors::new();

    // Stage 1: coerce raw text into candidate values.
    let customer_id = match form.customer_id.as_deref() {
        Some(id) if !id.trim().is_empty() => Some(id.to_string()),
        _ => {
            push_error(&mut errors, "customerId", MSG_CUSTOMER);
            None
        }
    };

    let amount = match form.amount.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => match text.parse::<f64>() {
            Ok(value) => Some(value),
            Err(_) => {
                push_error(&mut errors, "amount", MSG_AMOUNT);
                None
            }
        },
        _ => {
            push_error(&mut errors, "amount", MSG_AMOUNT);
            None
        }
    };

    let status = match form.status.as_deref().and_then(InvoiceStatus::parse) {
        Some(status) => Some(status),
        None => {
            push_error(&mut errors, "status", MSG_STATUS);
            None
        }
    };

    // Stage 2: business rules over the parsed values.
    let amount_cents = match amount {
        Some(value) if value.is_finite() && value > 0.0 => Some(dollars_to_cents(value)),
        Some(_) => {
            push_error(&mut errors, "amount", MSG_AMOUNT);
            None
        }
        None => None,
    };

    match (customer_id, amount_cents, status) {
        (Some(customer_id), Some(amount_cents), Some(status)) if errors.is_empty() => {
            Ok(ValidatedInvoiceFields {
                customer_id,
                amount_cents,
                status,
            })
        }
        _ => Err(errors),
    }
}

fn push_error(errors: &mut FieldErrors, field: &'static str, message: &str) {
    errors.entry(field).or_default().push(message.to_string());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_form_passes_both_stages() {
        let form = RawInvoiceForm::new("c1", "42.50", "pending");
        let fields = parse_and_validate(&form).unwrap();
        assert_eq!(fields.customer_id, "c1");
        assert_eq!(fields.amount_cents, 4250);
        assert_eq!(fields.status, InvoiceStatus::Pending);
    }

    #[test]
    fn test_missing_customer_reports_customer_field() {
        let form = RawInvoiceForm {
            customer_id: None,
            amount: Some("10".to_string()),
            status: Some("paid".to_string()),
        };
        let errors = parse_and_validate(&form).unwrap_err();
        assert_eq!(errors["customerId"], vec![MSG_CUSTOMER.to_string()]);
        assert!(!errors.contains_key("amount"));
        assert!(!errors.contains_key("status"));
    }

    #[test]
    fn test_empty_customer_reports_customer_field() {
        let form = RawInvoiceForm::new("", "10", "paid");
        let errors = parse_and_validate(&form).unwrap_err();
        assert!(!errors["customerId"].is_empty());
    }

    #[test]
    fn test_unparseable_amount_fails_in_parse_stage() {
        let form = RawInvoiceForm::new("c1", "ten dollars", "paid");
        let errors = parse_and_validate(&form).unwrap_err();
        assert_eq!(errors["amount"], vec![MSG_AMOUNT.to_string()]);
    }

    #[test]
    fn test_zero_amount_fails_in_rule_stage() {
        let form = RawInvoiceForm::new("c1", "0", "paid");
        let errors = parse_and_validate(&form).unwrap_err();
        assert_eq!(errors["amount"], vec![MSG_AMOUNT.to_string()]);
    }

    #[test]
    fn test_negative_amount_rejected() {
        let form = RawInvoiceForm::new("c1", "-5", "pending");
        let errors = parse_and_validate(&form).unwrap_err();
        assert_eq!(errors["amount"], vec![MSG_AMOUNT.to_string()]);
    }

    #[test]
    fn test_nan_amount_rejected() {
        // "NaN" parses as f64 but is not a usable amount
        let form = RawInvoiceForm::new("c1", "NaN", "pending");
        let errors = parse_and_validate(&form).unwrap_err();
        assert_eq!(errors["amount"], vec![MSG_AMOUNT.to_string()]);
    }

    #[test]
    fn test_unknown_status_rejected() {
        let form = RawInvoiceForm::new("c1", "10", "archived");
        let errors = parse_and_validate(&form).unwrap_err();
        assert_eq!(errors["status"], vec![MSG_STATUS.to_string()]);
    }

    #[test]
    fn test_all_invalid_fields_reported_together() {
        let form = RawInvoiceForm {
            customer_id: None,
            amount: Some("-1".to_string()),
            status: None,
        };
        let errors = parse_and_validate(&form).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_amount_is_rounded_to_nearest_cent() {
        let form = RawInvoiceForm::new("c1", "42.509", "paid");
        let fields = parse_and_validate(&form).unwrap();
        assert_eq!(fields.amount_cents, 4251);
    }
}
