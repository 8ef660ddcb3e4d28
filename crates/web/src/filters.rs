//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Formats a currency amount with thousands separators, e.g. "3,450" or
/// "1,234.56". The sign and any fractional part pass through unchanged.
///
/// Usage in templates: `{{ quote.subtotal|money }}`
#[allow(clippy::unnecessary_wraps)]
#[askama::filter_fn]
pub fn money(amount: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(group_thousands(&amount.to_string()))
}

/// Insert `,` separators into the integer part of a decimal string.
fn group_thousands(amount: &str) -> String {
    let (sign, unsigned) = amount
        .strip_prefix('-')
        .map_or(("", amount), |rest| ("-", rest));
    let (integer, fraction) = unsigned
        .split_once('.')
        .map_or((unsigned, None), |(i, f)| (i, Some(f)));

    let digits: Vec<char> = integer.chars().collect();
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (index, digit) in digits.iter().enumerate() {
        let remaining = digits.len() - index;
        if index > 0 && remaining % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*digit);
    }

    match fraction {
        Some(fraction) => format!("{sign}{grouped}.{fraction}"),
        None => format!("{sign}{grouped}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands_small_values() {
        assert_eq!(group_thousands("0"), "0");
        assert_eq!(group_thousands("345"), "345");
        assert_eq!(group_thousands("999"), "999");
    }

    #[test]
    fn test_group_thousands_grouping() {
        assert_eq!(group_thousands("3450"), "3,450");
        assert_eq!(group_thousands("3795"), "3,795");
        assert_eq!(group_thousands("123456789"), "123,456,789");
    }

    #[test]
    fn test_group_thousands_fraction_passes_through() {
        assert_eq!(group_thousands("1234.56"), "1,234.56");
        assert_eq!(group_thousands("0.5"), "0.5");
    }

    #[test]
    fn test_group_thousands_negative() {
        assert_eq!(group_thousands("-3450"), "-3,450");
    }
}
