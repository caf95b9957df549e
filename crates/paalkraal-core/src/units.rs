//! Display helpers
//!
//! Physical quantities are never rounded in calculations; only these
//! formatters round, for display.

/// Format a length in meters with two decimals, e.g. `"12.75m"`.
pub fn format_length(meters: f64) -> String {
    format!("{:.2}m", meters)
}

/// Format a cost with the configured currency symbol and thousands
/// separators, e.g. `"$2,090"` or `"R1,234.50"`.
///
/// Whole amounts print without decimals.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if negative { "-" } else { "" };
    if fraction == 0 {
        format!("{}{}{}", sign, symbol, grouped)
    } else {
        format!("{}{}{}.{:02}", sign, symbol, grouped, fraction)
    }
}
