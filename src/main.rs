//! payqr CLI entrypoint

use clap::Parser;
use payqr::{
    Error, PaymentRequest, PayqrConfig, QrMode, Result, Session, format_vnd, logging, payment,
};
use serde_json::json;
use std::path::PathBuf;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "payqr",
    version,
    about = "Generate VietQR payment QR codes from the command line"
)]
struct Cli {
    /// Optional configuration file (toml/yaml). Defaults to payqr.{toml,yaml} in cwd/XDG config.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Bank identifier (e.g. vietcombank). Required for quick-link generation.
    #[arg(long, value_name = "ID")]
    bank: Option<String>,

    /// Recipient account number
    #[arg(long, value_name = "NUMBER")]
    account_no: Option<String>,

    /// Recipient account holder name
    #[arg(long, value_name = "NAME")]
    account_name: Option<String>,

    /// Payment amount in VND
    #[arg(long, value_name = "VND")]
    amount: Option<u64>,

    /// Message for the recipient
    #[arg(long, value_name = "TEXT")]
    message: Option<String>,

    /// Quick-link rendering template (compact, compact2, qr_only, print)
    #[arg(long, value_name = "TEMPLATE")]
    template: Option<String>,

    /// Encode the QR locally instead of building a quick-link URL
    #[arg(long)]
    local: bool,

    /// Save the locally encoded QR as a PNG file (implies --local)
    #[arg(long, value_name = "PATH")]
    output: Option<PathBuf>,

    /// Output results as formatted JSON instead of human-readable text
    #[arg(long)]
    json: bool,

    /// Override the quick-link service base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// List supported banks and exit
    #[arg(long)]
    list_banks: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list_banks {
        list_banks(cli.json)?;
        return Ok(());
    }

    let mut config = PayqrConfig::load(cli.config.as_deref())?;

    if let Some(ref base) = cli.base_url {
        config.service.base_url = base.clone();
        config.service.validate()?;
    }

    logging::init(&config.logging)?;

    let amount = cli
        .amount
        .ok_or_else(|| Error::Config("--amount is required".to_string()))?;

    let request = PaymentRequest {
        amount,
        message: cli.message.clone(),
        bank_id: cli.bank.clone(),
        account_no: cli.account_no.clone(),
        account_name: cli.account_name.clone(),
        template: cli
            .template
            .clone()
            .or_else(|| Some(config.service.default_template.clone())),
    };

    let mode = if cli.local || cli.output.is_some() {
        QrMode::Local
    } else {
        QrMode::Remote
    };

    info!(?mode, amount, "Generating payment QR");

    let mut session = Session::new(config);
    let result = match session.generate(&request, mode).await {
        Ok(result) => result,
        Err(Error::Validation(errors)) => {
            eprintln!("Invalid payment input:");
            for error in &errors {
                eprintln!("  {}: {}", error.field, error.message);
            }
            std::process::exit(1);
        }
        Err(err) => return Err(err),
    };

    if let Some(ref path) = cli.output {
        let png = session.encode_png(&request)?;
        std::fs::write(path, png)?;
        if !cli.json {
            println!("QR code saved to {}", path.display());
        }
    }

    if cli.json {
        let payload = json!({
            "reference": result.reference,
            "amount": result.amount,
            "amount_display": result.display_amount(),
            "message": result.message,
            "mode": result.mode,
        });
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("Payment QR code");
        println!("  Amount:  {}", format_vnd(result.amount));
        if let Some(ref message) = result.message {
            println!("  Message: \"{message}\"");
        }
        match result.mode {
            QrMode::Remote => println!("  Image:   {}", result.reference),
            QrMode::Local => println!("  Data URL ({} bytes)", result.reference.len()),
        }
    }

    Ok(())
}

fn list_banks(as_json: bool) -> Result<()> {
    if as_json {
        let entries: Vec<_> = payment::banks()
            .map(|bank| json!({ "id": bank.id, "name": bank.name }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        println!("Supported banks:");
        for bank in payment::banks() {
            println!("  {:<16} {}", bank.id, bank.name);
        }
    }
    Ok(())
}
