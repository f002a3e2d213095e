use rust_decimal::Decimal;
use std::str::FromStr;

/// Parse a Brazilian-locale amount into a Decimal.
///
/// Handles formats like:
/// - "150,00" -> 150.00
/// - "1.234,56" -> 1234.56
/// - "450,00." -> 450.00 (trailing sentence punctuation)
/// - "1.000" -> 1000
///
/// `.` is always a thousands separator and `,` the decimal separator.
/// Returns None for anything that does not parse to a non-negative number.
pub fn parse_brl_amount(s: &str) -> Option<Decimal> {
    let s = s.trim().trim_end_matches(['.', ',']);
    if s.is_empty() {
        return None;
    }

    let normalized = s.replace('.', "").replace(',', ".");
    let value = Decimal::from_str(&normalized).ok()?;
    if value.is_sign_negative() {
        return None;
    }
    Some(value)
}

/// Parse an age captured by a `\d+` group. None on overflow.
pub fn parse_age(s: &str) -> Option<u32> {
    s.trim().parse().ok()
}
