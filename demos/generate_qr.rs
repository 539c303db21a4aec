//! Generate a payment QR code and save it to a file
//!
//! Usage: cargo run --example generate_qr

use payqr::{PaymentRequest, PayqrConfig, QrMode, Session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    let mut session = Session::new(PayqrConfig::default());

    // Quick-link URL for a hosted VietQR image
    let request = PaymentRequest {
        amount: 50000,
        message: Some("Tra tien com".to_string()),
        bank_id: Some("vietcombank".to_string()),
        account_no: Some("0123456789".to_string()),
        ..Default::default()
    };

    let result = session.generate(&request, QrMode::Remote).await?;
    println!("✓ Quick-link URL: {}", result.reference);

    // Locally encoded QR saved as PNG
    let local_request = PaymentRequest {
        amount: 20000,
        message: Some("lunch".to_string()),
        ..Default::default()
    };

    let png = session.encode_png(&local_request)?;
    std::fs::write("payment_qr.png", png)?;
    println!("✓ Local QR code saved to payment_qr.png");

    Ok(())
}
