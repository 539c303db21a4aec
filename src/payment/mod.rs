//! Payment data model and input handling
//!
//! A [`PaymentRequest`] is the raw, unvalidated form input. Running it
//! through [`validate`] yields an immutable [`PaymentData`] that the
//! quick-link builder and local encoder consume.

pub mod banks;
mod currency;
mod validate;

pub use banks::{Bank, bank_by_id, banks};
pub use currency::format_vnd;
pub use validate::{FieldError, validate};

use serde::{Deserialize, Serialize};

/// Minimum accepted payment amount in VND
pub const MIN_AMOUNT: u64 = 1000;

/// Maximum message length in characters
pub const MAX_MESSAGE_LEN: usize = 100;

/// Minimum account number length in characters
pub const MIN_ACCOUNT_NO_LEN: usize = 5;

/// Default quick-link rendering template
pub const DEFAULT_TEMPLATE: &str = "compact";

/// Raw payment parameters as collected from the user, prior to validation
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PaymentRequest {
    /// Requested amount in VND (minor unit)
    pub amount: u64,
    /// Optional message for the recipient
    pub message: Option<String>,
    /// Bank identifier (required for quick-link generation)
    pub bank_id: Option<String>,
    /// Recipient account number (required for quick-link generation)
    pub account_no: Option<String>,
    /// Recipient account holder name
    pub account_name: Option<String>,
    /// Quick-link rendering template override
    pub template: Option<String>,
}

/// Validated payment data, immutable once constructed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentData {
    /// Amount in VND, guaranteed >= [`MIN_AMOUNT`]
    pub amount: u64,
    /// Message, guaranteed <= [`MAX_MESSAGE_LEN`] characters when present
    pub message: Option<String>,
    /// Lowercased bank identifier from the known bank table
    pub bank_id: Option<String>,
    /// Account number, guaranteed >= [`MIN_ACCOUNT_NO_LEN`] characters
    pub account_no: Option<String>,
    /// Account holder name, passed through as-is
    pub account_name: Option<String>,
    /// Rendering template, defaults to [`DEFAULT_TEMPLATE`]
    pub template: String,
}

impl PaymentData {
    /// Message text, or empty string when absent. Convenience for display.
    pub fn message_text(&self) -> &str {
        self.message.as_deref().unwrap_or("")
    }
}

/// Which builder produced a [`QrResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QrMode {
    /// Quick-link URL pointing at the hosted VietQR image service
    Remote,
    /// Locally encoded QR bitmap as a base64 data URL
    Local,
}

/// Output of a QR generation: an image reference plus display metadata
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrResult {
    /// Remote image URL or `data:image/png;base64,...` data URL
    pub reference: String,
    /// Amount carried forward for display
    pub amount: u64,
    /// Message carried forward for display
    pub message: Option<String>,
    /// Mode that produced the reference
    pub mode: QrMode,
}

impl QrResult {
    /// Formatted amount for human-readable presentation
    pub fn display_amount(&self) -> String {
        format_vnd(self.amount)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_text_absent() {
        let data = PaymentData {
            amount: 1000,
            message: None,
            bank_id: None,
            account_no: None,
            account_name: None,
            template: DEFAULT_TEMPLATE.to_string(),
        };
        assert_eq!(data.message_text(), "");
    }

    #[test]
    fn test_result_display_amount() {
        let result = QrResult {
            reference: "https://example.com/qr.png".to_string(),
            amount: 50000,
            message: None,
            mode: QrMode::Remote,
        };
        assert!(result.display_amount().contains("50.000"));
    }
}
