//! Local QR encoding
//!
//! The local mode serializes validated payment data to a canonical JSON
//! payload and renders it as a QR bitmap, returned as a base64 PNG data
//! URL that can be embedded directly in an `<img>` source.

mod encoder;

pub use encoder::{EncoderConfig, QrEncoder};

use crate::error::Result;
use crate::payment::PaymentData;
use serde::{Deserialize, Serialize};

/// JSON payload embedded in locally encoded QR codes.
///
/// Field order is fixed by the struct, so serialization is canonical and
/// identical payment data always yields an identical payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrPayload {
    /// Amount in VND
    pub amount: u64,
    /// Message for the recipient, empty string when absent
    pub message: String,
}

impl QrPayload {
    /// Build the payload for validated payment data
    pub fn from_payment(data: &PaymentData) -> Self {
        Self {
            amount: data.amount,
            message: data.message_text().to_string(),
        }
    }

    /// Canonical JSON string form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
