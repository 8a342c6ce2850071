//! Currency display formatting for product prices.

#[cfg(test)]
#[path = "currency_test.rs"]
mod currency_test;

/// Format `amount` as `"<symbol> 1,234.50"`.
///
/// Rounds to two decimals and groups the integer part in thousands.
/// Negative amounts keep their sign ahead of the digits.
pub fn format_price(amount: f64, symbol: &str) -> String {
    if !amount.is_finite() {
        return format!("{symbol} -");
    }
    let fixed = format!("{:.2}", amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let sign = if amount < 0.0 && fixed != "0.00" { "-" } else { "" };
    format!("{symbol} {sign}{}.{frac_part}", group_thousands(int_part))
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Parse user-entered price text into a non-negative amount.
///
/// Returns `None` for anything that is not a finite, non-negative number.
pub fn parse_price(input: &str) -> Option<f64> {
    match input.trim().parse::<f64>() {
        Ok(value) if value.is_finite() && value >= 0.0 => Some(value),
        _ => None,
    }
}
