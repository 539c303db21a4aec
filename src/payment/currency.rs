//! Vietnamese đồng amount formatting

/// Format an amount as Vietnamese currency: `.`-separated thousands
/// groups, no fractional digits, `₫` suffix (e.g. `50000` -> `50.000 ₫`).
pub fn format_vnd(amount: u64) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 2);

    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i != 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }

    grouped.push_str(" \u{20ab}");
    grouped
}
