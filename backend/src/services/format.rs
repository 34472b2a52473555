//! Number formatting for chart titles.

/// Format an integer with `,` thousands separators.
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if value < 0 {
        grouped.insert(0, '-');
    }
    grouped
}

/// Thousands-separated and right-aligned to eight columns.
pub fn format_payload_bound(value: i64) -> String {
    format!("{:>8}", format_thousands(value))
}
