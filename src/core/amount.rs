use rust_decimal::Decimal;
use std::str::FromStr;

/// Largest magnitude accepted for any single amount (10^15).
///
/// Keeps every sum, product and ratio of the calculation well inside the
/// 96-bit mantissa of `Decimal`.
pub const MAX_ABS_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

/// Characters users type (or paste from spreadsheets) as thousands separators
const GROUP_SEPARATORS: [char; 4] = [' ', '\u{00A0}', '\u{202F}', '\u{2009}'];

/// Parse a user-entered amount such as `"1 250 000,50"` or `"-3.5e3"`.
///
/// Spaces are treated as thousands separators and a comma as the decimal
/// point. Returns `None` for blank or unparseable text.
pub fn parse_amount(raw: &str) -> Option<Decimal> {
    let cleaned: String = raw
        .trim()
        .chars()
        .filter(|c| !GROUP_SEPARATORS.contains(c))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    if cleaned.is_empty() {
        return None;
    }

    if cleaned.contains(['e', 'E']) {
        return parse_scientific(&cleaned);
    }

    Decimal::from_str(&cleaned).ok()
}

/// Scientific notation, including exponents beyond the 28-digit scale.
///
/// Tiny values underflow to zero; huge values saturate at `Decimal::MAX`
/// (or `MIN`) so range validation reports them as too large.
fn parse_scientific(text: &str) -> Option<Decimal> {
    if let Ok(value) = Decimal::from_scientific(text) {
        return Some(value);
    }

    let (mantissa, exponent) = text.split_once(['e', 'E'])?;
    let mut value = Decimal::from_str(mantissa).ok()?;
    let exponent: i64 = exponent.parse().ok()?;

    for _ in 0..exponent.unsigned_abs() {
        if value.is_zero() {
            break;
        }
        value = if exponent < 0 {
            value.checked_div(Decimal::TEN)?
        } else {
            match value.checked_mul(Decimal::TEN) {
                Some(shifted) => shifted,
                None if value.is_sign_negative() => return Some(Decimal::MIN),
                None => return Some(Decimal::MAX),
            }
        };
    }

    Some(value)
}

/// Whether an amount fits the supported magnitude range
pub fn within_range(amount: Decimal) -> bool {
    amount.abs() <= MAX_ABS_AMOUNT
}
