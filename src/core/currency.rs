//! Brazilian Real formatting and small numeric display helpers.

/// Format an amount as Brazilian Real: `R$ 1.234,56` with `.` thousands
/// grouping and `,` decimal separator. Negative amounts render as
/// `-R$ 1.234,56`. Non-finite amounts format as zero.
pub fn format_real(amount: f64) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let negative = amount < 0.0;
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let sign = if negative && cents > 0 { "-" } else { "" };
    format!("{}R$ {},{:02}", sign, group_thousands(whole), fraction)
}

/// Format a number with two decimal places and a `,` separator: `1234,56`.
/// The sentinel `-1.0` maps to `"0,00"` (legacy "no value" marker).
pub fn format_decimal(value: f64) -> String {
    if value == -1.0 {
        return "0,00".to_string();
    }
    format!("{:.2}", value).replace('.', ",")
}

/// Round to the nearest integer, halves rounding up. The sentinel `-1.0`
/// maps to 0.
pub fn format_round(value: f64) -> i64 {
    if value == -1.0 {
        return 0;
    }
    (value + 0.5).floor() as i64
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}
