//! Pure validation of raw payment input
//!
//! Every violated field is collected before returning, so a caller can
//! report all problems in one pass instead of one per submission.

use crate::payment::{
    DEFAULT_TEMPLATE, MAX_MESSAGE_LEN, MIN_ACCOUNT_NO_LEN, MIN_AMOUNT, PaymentData,
    PaymentRequest, banks,
};
use serde::Serialize;

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// Name of the offending input field
    pub field: &'static str,
    /// Human-readable description of the violation
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a raw request into immutable [`PaymentData`].
///
/// When `require_account` is true (quick-link generation), `bank_id` and
/// `account_no` become mandatory; local encoding only needs the amount
/// and message bounds.
pub fn validate(
    request: &PaymentRequest,
    require_account: bool,
) -> Result<PaymentData, Vec<FieldError>> {
    let mut errors = Vec::new();

    if request.amount == 0 {
        errors.push(FieldError::new("amount", "amount must be greater than 0"));
    } else if request.amount < MIN_AMOUNT {
        errors.push(FieldError::new(
            "amount",
            format!("minimum amount is {MIN_AMOUNT} VND"),
        ));
    }

    if let Some(message) = &request.message {
        if message.chars().count() > MAX_MESSAGE_LEN {
            errors.push(FieldError::new(
                "message",
                format!("message must not exceed {MAX_MESSAGE_LEN} characters"),
            ));
        }
    }

    let bank_id = match request.bank_id.as_deref() {
        Some(id) if !id.trim().is_empty() => match banks::bank_by_id(id) {
            Some(bank) => Some(bank.id.to_string()),
            None => {
                errors.push(FieldError::new("bank_id", format!("unknown bank '{id}'")));
                None
            }
        },
        _ => {
            if require_account {
                errors.push(FieldError::new("bank_id", "a bank must be selected"));
            }
            None
        }
    };

    let account_no = match request.account_no.as_deref() {
        Some(no) if !no.trim().is_empty() => {
            let no = no.trim();
            if no.chars().count() < MIN_ACCOUNT_NO_LEN {
                errors.push(FieldError::new(
                    "account_no",
                    format!("account number must be at least {MIN_ACCOUNT_NO_LEN} characters"),
                ));
                None
            } else {
                Some(no.to_string())
            }
        }
        _ => {
            if require_account {
                errors.push(FieldError::new("account_no", "an account number is required"));
            }
            None
        }
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(PaymentData {
        amount: request.amount,
        message: request
            .message
            .as_deref()
            .filter(|m| !m.is_empty())
            .map(str::to_string),
        bank_id,
        account_no,
        account_name: request
            .account_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string),
        template: request
            .template
            .clone()
            .filter(|t| !t.is_empty())
            .unwrap_or_else(|| DEFAULT_TEMPLATE.to_string()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn remote_request() -> PaymentRequest {
        PaymentRequest {
            amount: 50000,
            message: Some("Tra tien com".to_string()),
            bank_id: Some("vietcombank".to_string()),
            account_no: Some("0123456789".to_string()),
            account_name: None,
            template: None,
        }
    }

    #[test]
    fn test_valid_remote_request() {
        let data = validate(&remote_request(), true).expect("valid request");
        assert_eq!(data.amount, 50000);
        assert_eq!(data.bank_id.as_deref(), Some("vietcombank"));
        assert_eq!(data.template, "compact");
    }

    #[test]
    fn test_minimum_amount_boundary() {
        let mut request = remote_request();
        request.amount = MIN_AMOUNT;
        assert!(validate(&request, true).is_ok());

        request.amount = MIN_AMOUNT - 1;
        let errors = validate(&request, true).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "amount");
    }

    #[test]
    fn test_zero_amount_rejected() {
        let request = PaymentRequest {
            amount: 0,
            ..Default::default()
        };
        let errors = validate(&request, false).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "amount");
    }

    #[test]
    fn test_below_minimum_reports_single_amount_error() {
        let request = PaymentRequest {
            amount: 500,
            ..Default::default()
        };
        let errors = validate(&request, false).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "amount");
    }

    #[test]
    fn test_message_length_bound() {
        let mut request = remote_request();
        request.message = Some("a".repeat(MAX_MESSAGE_LEN));
        assert!(validate(&request, true).is_ok());

        request.message = Some("a".repeat(MAX_MESSAGE_LEN + 1));
        let errors = validate(&request, true).unwrap_err();
        assert_eq!(errors[0].field, "message");
    }

    #[test]
    fn test_message_length_counts_characters_not_bytes() {
        let mut request = remote_request();
        // 100 multi-byte characters stay within the bound
        request.message = Some("đ".repeat(MAX_MESSAGE_LEN));
        assert!(validate(&request, true).is_ok());
    }

    #[test]
    fn test_unknown_bank_rejected() {
        let mut request = remote_request();
        request.bank_id = Some("monopoly-bank".to_string());
        let errors = validate(&request, true).unwrap_err();
        assert_eq!(errors[0].field, "bank_id");
    }

    #[test]
    fn test_bank_id_normalised_to_lowercase() {
        let mut request = remote_request();
        request.bank_id = Some("VietComBank".to_string());
        let data = validate(&request, true).expect("valid");
        assert_eq!(data.bank_id.as_deref(), Some("vietcombank"));
    }

    #[test]
    fn test_short_account_no_rejected() {
        let mut request = remote_request();
        request.account_no = Some("1234".to_string());
        let errors = validate(&request, true).unwrap_err();
        assert_eq!(errors[0].field, "account_no");
    }

    #[test]
    fn test_missing_account_fields_reported_together() {
        let request = PaymentRequest {
            amount: 500,
            ..Default::default()
        };
        let errors = validate(&request, true).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["amount", "bank_id", "account_no"]);
    }

    #[test]
    fn test_local_mode_needs_no_account() {
        let request = PaymentRequest {
            amount: 20000,
            message: Some("lunch".to_string()),
            ..Default::default()
        };
        let data = validate(&request, false).expect("valid local request");
        assert!(data.bank_id.is_none());
        assert!(data.account_no.is_none());
    }

    #[test]
    fn test_empty_message_dropped() {
        let mut request = remote_request();
        request.message = Some(String::new());
        let data = validate(&request, true).expect("valid");
        assert!(data.message.is_none());
    }
}
