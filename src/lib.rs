//! payqr - VietQR payment QR generator
//!
//! This library turns payment parameters (amount, message, bank, account)
//! into a scannable QR reference, either as a deterministic VietQR
//! quick-link URL served by the hosted image service, or as a locally
//! encoded QR bitmap wrapped in a base64 data URL.
//!
//! # Features
//!
//! - **Quick-link mode**: deterministic URL construction, no network I/O
//! - **Local mode**: qrcode/image rendering with configurable palette
//! - **Field-collecting validation**: every violated field reported at once
//! - **Session orchestration**: explicit busy/idle state, last-write-wins
//!   result slot
//!
//! # Example
//!
//! ```no_run
//! use payqr::{PaymentRequest, PayqrConfig, QrMode, Session};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let mut session = Session::new(PayqrConfig::default());
//!
//!     let request = PaymentRequest {
//!         amount: 50000,
//!         message: Some("Tra tien com".to_string()),
//!         bank_id: Some("vietcombank".to_string()),
//!         account_no: Some("0123456789".to_string()),
//!         ..Default::default()
//!     };
//!
//!     let result = session.generate(&request, QrMode::Remote).await?;
//!     println!("{}", result.reference);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod config;
pub mod error;
pub mod logging;
pub mod payment;
pub mod qr;
pub mod quicklink;
pub mod session;

// Re-exports for convenience
pub use error::{Error, Result};

pub use config::{EncoderOptions, LogRotation, LoggingOptions, PayqrConfig, ServiceOptions};
pub use payment::{
    Bank, FieldError, PaymentData, PaymentRequest, QrMode, QrResult, format_vnd, validate,
};
pub use qr::{EncoderConfig, QrEncoder, QrPayload};
pub use quicklink::build_quick_link;
pub use session::Session;
