//! Error types for payqr operations

use crate::payment::FieldError;
use thiserror::Error;

/// Result type alias using payqr's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for payqr operations
#[derive(Error, Debug)]
pub enum Error {
    /// One or more payment fields failed validation
    #[error("Payment validation failed: {}", format_field_errors(.0))]
    Validation(Vec<FieldError>),

    /// QR code encoding failed
    #[error("Failed to encode QR code: {0}")]
    QrEncode(String),

    /// Image processing error
    #[error("Image processing error: {0}")]
    Image(String),

    /// Payload serialization error
    #[error("Payload serialization error: {0}")]
    Payload(String),

    /// A generation was requested while another is still in flight
    #[error("A QR generation is already in progress")]
    Busy,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl Error {
    /// Field-level validation errors, if this is a validation failure
    pub fn field_errors(&self) -> Option<&[FieldError]> {
        match self {
            Error::Validation(errors) => Some(errors),
            _ => None,
        }
    }
}

// Implement From conversions for common error types

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Image(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Payload(e.to_string())
    }
}

impl From<qrcode::types::QrError> for Error {
    fn from(e: qrcode::types::QrError) -> Self {
        Error::QrEncode(e.to_string())
    }
}
