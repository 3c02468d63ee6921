//! Money formatting for reasons and summaries.

use rust_decimal::Decimal;

/// Locale-style rendering: thousands separators, at most three
/// fraction digits, trailing zeros dropped. `10000` → `10,000`,
/// `250000.01` → `250,000.01`.
pub fn grouped(amount: Decimal) -> String {
    let rounded = amount.round_dp(3).normalize();
    render(rounded, None)
}

/// Fixed two-decimal rendering with thousands separators, for
/// currency columns. `5500` → `5,500.00`.
pub fn currency(amount: Decimal) -> String {
    let mut rounded = amount.round_dp(2);
    rounded.rescale(2);
    render(rounded, Some(2))
}

/// Shortest plain rendering, no separators. `0.010` → `0.01`.
pub fn plain(amount: Decimal) -> String {
    amount.normalize().to_string()
}

fn render(amount: Decimal, min_fraction: Option<usize>) -> String {
    let text = amount.abs().to_string();
    let (int_part, frac_part) = match text.split_once('.') {
        Some((i, f)) => (i, f),
        None => (text.as_str(), ""),
    };

    let mut out = String::with_capacity(text.len() + int_part.len() / 3 + 1);
    if amount.is_sign_negative() && !amount.is_zero() {
        out.push('-');
    }
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    let width = min_fraction.unwrap_or(0).max(frac_part.len());
    if width > 0 {
        out.push('.');
        out.push_str(frac_part);
        for _ in frac_part.len()..width {
            out.push('0');
        }
    }
    out
}
