//! Generation session orchestration
//!
//! A [`Session`] owns the busy flag and the single current-result slot.
//! Only one generation may be in flight at a time; a second request while
//! busy is rejected with [`Error::Busy`] rather than queued or superseded.
//! A failed generation leaves the previously displayed result untouched.

use crate::config::PayqrConfig;
use crate::error::{Error, Result};
use crate::payment::{PaymentRequest, QrMode, QrResult, validate};
use crate::qr::{QrEncoder, QrPayload};
use crate::quicklink;

/// Orchestrates validation, building, and result bookkeeping for a
/// single user-facing generation flow.
pub struct Session {
    config: PayqrConfig,
    encoder: QrEncoder,
    in_flight: bool,
    current: Option<QrResult>,
}

impl Session {
    /// Create an idle session from loaded configuration
    pub fn new(config: PayqrConfig) -> Self {
        let encoder = QrEncoder::new(config.encoder.to_encoder_config());
        Self {
            config,
            encoder,
            in_flight: false,
            current: None,
        }
    }

    /// True while a generation is in flight
    pub fn is_busy(&self) -> bool {
        self.in_flight
    }

    /// The most recent successful result, if any
    pub fn current(&self) -> Option<&QrResult> {
        self.current.as_ref()
    }

    /// Validate the request and produce a QR reference in the given mode.
    ///
    /// On success the current-result slot is overwritten (last write
    /// wins). Validation failures and generation failures are returned
    /// without touching the slot.
    pub async fn generate(&mut self, request: &PaymentRequest, mode: QrMode) -> Result<QrResult> {
        if self.in_flight {
            return Err(Error::Busy);
        }
        self.in_flight = true;
        let outcome = self.generate_inner(request, mode).await;
        self.in_flight = false;

        match outcome {
            Ok(result) => {
                tracing::info!(mode = ?mode, amount = result.amount, "QR generated");
                self.current = Some(result.clone());
                Ok(result)
            }
            Err(err) => {
                tracing::warn!("QR generation failed: {err}");
                Err(err)
            }
        }
    }

    async fn generate_inner(&self, request: &PaymentRequest, mode: QrMode) -> Result<QrResult> {
        let data =
            validate(request, mode == QrMode::Remote).map_err(Error::Validation)?;

        let reference = match mode {
            QrMode::Remote => quicklink::build_quick_link(&data, &self.config.service)?,
            QrMode::Local => {
                let payload = QrPayload::from_payment(&data);
                self.encoder.encode_data_url(&payload)?
            }
        };

        Ok(QrResult {
            reference,
            amount: data.amount,
            message: data.message,
            mode,
        })
    }

    /// Encode the request as PNG bytes for saving to disk (local mode only)
    pub fn encode_png(&self, request: &PaymentRequest) -> Result<Vec<u8>> {
        let data = validate(request, false).map_err(Error::Validation)?;
        self.encoder.encode_png(&QrPayload::from_payment(&data))
    }
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

    #[tokio::test]
    async fn test_remote_generation_end_to_end() {
        let mut session = Session::new(PayqrConfig::default());
        let result = session
            .generate(&remote_request(), QrMode::Remote)
            .await
            .expect("generation succeeds");
        assert_eq!(
            result.reference,
            "https://img.vietqr.io/image/vietcombank-0123456789-compact.png?amount=50000&addInfo=Tra%20tien%20com"
        );
        assert_eq!(session.current(), Some(&result));
    }

    #[tokio::test]
    async fn test_validation_failure_never_reaches_builder() {
        let mut session = Session::new(PayqrConfig::default());
        let request = PaymentRequest {
            amount: 500,
            ..Default::default()
        };
        let err = session
            .generate(&request, QrMode::Remote)
            .await
            .expect_err("below-minimum amount");
        let fields: Vec<_> = err
            .field_errors()
            .expect("validation error")
            .iter()
            .map(|e| e.field)
            .collect();
        assert!(fields.contains(&"amount"));
        assert!(session.current().is_none());
    }

    #[tokio::test]
    async fn test_failure_keeps_previous_result() {
        let mut session = Session::new(PayqrConfig::default());
        let good = session
            .generate(&remote_request(), QrMode::Remote)
            .await
            .expect("first generation");

        let mut bad = remote_request();
        bad.amount = 0;
        session
            .generate(&bad, QrMode::Remote)
            .await
            .expect_err("zero amount rejected");

        assert_eq!(session.current(), Some(&good));
    }

    #[tokio::test]
    async fn test_last_write_wins() {
        let mut session = Session::new(PayqrConfig::default());
        session
            .generate(&remote_request(), QrMode::Remote)
            .await
            .expect("first generation");

        let mut second = remote_request();
        second.amount = 75000;
        let result = session
            .generate(&second, QrMode::Remote)
            .await
            .expect("second generation");

        assert_eq!(session.current().map(|r| r.amount), Some(result.amount));
        assert_eq!(result.amount, 75000);
    }

    #[tokio::test]
    async fn test_local_generation_produces_data_url() {
        let mut session = Session::new(PayqrConfig::default());
        let request = PaymentRequest {
            amount: 20000,
            message: Some("lunch".to_string()),
            ..Default::default()
        };
        let result = session
            .generate(&request, QrMode::Local)
            .await
            .expect("local generation");
        assert!(result.reference.starts_with("data:image/png;base64,"));
        assert_eq!(result.mode, QrMode::Local);
    }

    #[tokio::test]
    async fn test_busy_session_rejects_overlap() {
        let mut session = Session::new(PayqrConfig::default());
        session
            .generate(&remote_request(), QrMode::Remote)
            .await
            .expect("first generation");

        session.in_flight = true;
        let err = session
            .generate(&remote_request(), QrMode::Remote)
            .await
            .expect_err("busy session rejects");
        assert!(matches!(err, Error::Busy));
        assert!(session.current().is_some());
    }

    #[tokio::test]
    async fn test_session_idle_after_generation() {
        let mut session = Session::new(PayqrConfig::default());
        assert!(!session.is_busy());
        session
            .generate(&remote_request(), QrMode::Remote)
            .await
            .expect("generation");
        assert!(!session.is_busy());
    }
}
