//! VietQR quick-link URL construction
//!
//! The quick-link convention packs bank, account, and rendering template
//! into the image path, with amount, message, and account holder name as
//! optional query parameters:
//!
//! `{base}/{bankId}-{accountNo}-{template}.png?amount=...&addInfo=...&accountName=...`
//!
//! Output is fully deterministic for identical input; the URL itself is
//! the result and no request is made here.

use crate::config::ServiceOptions;
use crate::error::{Error, Result};
use crate::payment::PaymentData;
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};

/// Characters escaped in query parameter values. Everything a browser
/// percent-escapes in a query component, with space as `%20` rather
/// than `+`.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'<')
    .add(b'>')
    .add(b'%')
    .add(b'&')
    .add(b'+')
    .add(b'=')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Build the quick-link image URL for validated payment data.
///
/// Fails with [`Error::Config`] if the data lacks the bank or account
/// fields; the validator enforces their presence for remote generation,
/// so this only trips when callers skip validation.
pub fn build_quick_link(data: &PaymentData, service: &ServiceOptions) -> Result<String> {
    let bank_id = data
        .bank_id
        .as_deref()
        .ok_or_else(|| Error::Config("quick-link generation requires a bank id".to_string()))?;
    let account_no = data.account_no.as_deref().ok_or_else(|| {
        Error::Config("quick-link generation requires an account number".to_string())
    })?;

    let base = service.base_url.trim_end_matches('/');
    let mut url = format!("{base}/{bank_id}-{account_no}-{}.png", data.template);

    let mut params: Vec<(&str, String)> = Vec::new();
    if data.amount > 0 {
        params.push(("amount", data.amount.to_string()));
    }
    if let Some(message) = data.message.as_deref().filter(|m| !m.is_empty()) {
        params.push(("addInfo", encode_value(message)));
    }
    if let Some(name) = data.account_name.as_deref().filter(|n| !n.is_empty()) {
        params.push(("accountName", encode_value(name)));
    }

    for (i, (key, value)) in params.iter().enumerate() {
        url.push(if i == 0 { '?' } else { '&' });
        url.push_str(key);
        url.push('=');
        url.push_str(value);
    }

    Ok(url)
}

fn encode_value(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}
