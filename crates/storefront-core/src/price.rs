//! Currency display in the store's locale (es-CO grouping).

use rust_decimal::Decimal;

/// Most fraction digits shown, matching the locale's default number format.
const MAX_FRACTION_DIGITS: u32 = 3;

/// Formats a price as `$` followed by the amount with `.` thousands
/// separators and a `,` decimal separator, e.g. `49900` -> `"$49.900"` and
/// `1234.5` -> `"$1.234,5"`.
#[must_use]
pub fn format_price(price: Decimal) -> String {
    let rounded = price.round_dp(MAX_FRACTION_DIGITS).normalize();
    let raw = rounded.abs().to_string();
    let (int_part, frac_part) = match raw.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (raw.as_str(), None),
    };

    let mut out = String::with_capacity(raw.len() + 4);
    if rounded.is_sign_negative() && !rounded.is_zero() {
        out.push('-');
    }
    out.push('$');
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push(',');
        out.push_str(frac);
    }
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(ch);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands_with_dots() {
        assert_eq!(format_price(Decimal::from(49_900)), "$49.900");
        assert_eq!(format_price(Decimal::from(1_250_000)), "$1.250.000");
    }

    #[test]
    fn small_amounts_have_no_separator() {
        assert_eq!(format_price(Decimal::from(999)), "$999");
        assert_eq!(format_price(Decimal::ZERO), "$0");
    }

    #[test]
    fn fractions_use_comma_and_trim_zeros() {
        assert_eq!(format_price(Decimal::new(123_450, 2)), "$1.234,5");
        assert_eq!(format_price(Decimal::new(10_000, 2)), "$100");
    }

    #[test]
    fn rounds_to_three_fraction_digits() {
        assert_eq!(format_price(Decimal::new(12_345_678, 4)), "$1.234,568");
    }

    #[test]
    fn negative_amounts_keep_sign() {
        assert_eq!(format_price(Decimal::from(-4_500)), "-$4.500");
    }
}
