//! Display formatting for the amount field and the computed figures.
//!
//! Grouping is a presentation transform only: the stored field value keeps
//! its separators, and `strip_separators` undoes them before parsing.

use rust_decimal::{Decimal, RoundingStrategy};

/// Currency prefix on every displayed figure.
const CURRENCY_PREFIX: &str = "£";

/// Remove thousands separators from a stored field value.
pub fn strip_separators(value: &str) -> String {
    value.replace(',', "")
}

/// Live-typing transform for the amount field.
///
/// Strips any existing separators, then accepts only "digits, at most one
/// decimal point, digits". Returns `None` when the edit contains any other
/// character, meaning the field keeps its previous value. The integer
/// portion is regrouped with commas (leading zeros normalise away); the
/// fractional portion passes through unmodified.
pub fn format_amount_input(raw: &str) -> Option<String> {
    let stripped = strip_separators(raw);
    if stripped.is_empty() {
        return Some(String::new());
    }
    if !is_amount_pattern(&stripped) {
        return None;
    }

    match stripped.split_once('.') {
        Some((int_part, frac_part)) => {
            Some(format!("{}.{}", group_thousands(int_part), frac_part))
        }
        None => Some(group_thousands(&stripped)),
    }
}

/// Two-decimal grouped display string with the currency prefix, e.g.
/// `£1,234.57`. Exactly two fraction digits regardless of the underlying
/// scale; midpoints round away from zero.
pub fn format_currency(value: Decimal) -> String {
    let rounded = value
        .abs()
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{rounded:.2}");
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let sign = if value.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!(
        "{CURRENCY_PREFIX}{sign}{}.{frac_part}",
        group_thousands(int_part)
    )
}

/// Digits with at most one decimal point, nothing else.
fn is_amount_pattern(value: &str) -> bool {
    let mut seen_point = false;
    for c in value.chars() {
        match c {
            '0'..='9' => {}
            '.' if !seen_point => seen_point = true,
            _ => return false,
        }
    }
    true
}

/// Insert a comma every three digits from the right. Leading zeros collapse
/// the way `Number()` conversion did in the original form ("007" -> "7",
/// "" -> "0").
fn group_thousands(digits: &str) -> String {
    let significant = digits.trim_start_matches('0');
    let significant = if significant.is_empty() {
        "0"
    } else {
        significant
    };

    let mut grouped = String::with_capacity(significant.len() + significant.len() / 3);
    let offset = significant.len() % 3;
    for (i, c) in significant.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    #[test]
    fn groups_integer_amounts() {
        assert_eq!(format_amount_input("1000000").as_deref(), Some("1,000,000"));
        assert_eq!(format_amount_input("300000").as_deref(), Some("300,000"));
        assert_eq!(format_amount_input("999").as_deref(), Some("999"));
        assert_eq!(format_amount_input("1000").as_deref(), Some("1,000"));
    }

    #[test]
    fn leaves_fraction_unmodified() {
        assert_eq!(format_amount_input("1234.5678").as_deref(), Some("1,234.5678"));
        assert_eq!(format_amount_input("1000.").as_deref(), Some("1,000."));
        assert_eq!(format_amount_input(".5").as_deref(), Some("0.5"));
    }

    #[test]
    fn regroups_already_grouped_input() {
        // The stored value is fed back through on every keystroke.
        assert_eq!(format_amount_input("1,0000").as_deref(), Some("10,000"));
        assert_eq!(format_amount_input("300,000").as_deref(), Some("300,000"));
    }

    #[test]
    fn normalises_leading_zeros() {
        assert_eq!(format_amount_input("007").as_deref(), Some("7"));
        assert_eq!(format_amount_input("0").as_deref(), Some("0"));
    }

    #[test]
    fn empty_input_clears_the_field() {
        assert_eq!(format_amount_input("").as_deref(), Some(""));
    }

    #[test]
    fn rejects_non_numeric_edits() {
        assert_eq!(format_amount_input("12a3"), None);
        assert_eq!(format_amount_input("1.2.3"), None);
        assert_eq!(format_amount_input("-100"), None);
        assert_eq!(format_amount_input("1 000"), None);
    }

    #[test]
    fn round_trip_recovers_the_number() {
        let grouped = format_amount_input("1000000").unwrap();
        assert_eq!(grouped, "1,000,000");
        assert_eq!(strip_separators(&grouped), "1000000");
    }

    #[test]
    fn currency_has_exactly_two_fraction_digits() {
        assert_eq!(format_currency(dec!(584.5908)), "£584.59");
        assert_eq!(format_currency(dec!(60000)), "£60,000.00");
        assert_eq!(format_currency(dec!(175377.1)), "£175,377.10");
        assert_eq!(format_currency(dec!(0)), "£0.00");
    }

    #[test]
    fn currency_rounds_midpoints_away_from_zero() {
        assert_eq!(format_currency(dec!(0.125)), "£0.13");
        assert_eq!(format_currency(dec!(2.005)), "£2.01");
    }

    #[test]
    fn currency_keeps_the_sign_inside_the_prefix() {
        assert_eq!(format_currency(dec!(-1234.5)), "£-1,234.50");
    }
}
