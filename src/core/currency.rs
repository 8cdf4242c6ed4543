//! Currency and number formatting used when building display labels.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// A pure `amount -> display string` formatter.
///
/// Prices are handed over unmodified and the returned string is treated as opaque.
/// Any `Fn(f64) -> String` closure is a formatter as well.
pub trait CurrencyFormatter: Send + Sync {
    /// Renders `amount` for display.
    fn format(&self, amount: f64) -> String;
}

impl<F> CurrencyFormatter for F
where
    F: Fn(f64) -> String + Send + Sync,
{
    fn format(&self, amount: f64) -> String {
        self(amount)
    }
}

/// Indian rupee formatter: `₹` prefix, lakh/crore digit grouping, two decimals.
///
/// ```
/// use market_overview::{CurrencyFormatter, InrFormatter};
///
/// assert_eq!(InrFormatter.format(12_345_678.9), "₹1,23,45,678.90");
/// assert_eq!(InrFormatter.format(-1234.5), "-₹1,234.50");
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InrFormatter;

impl CurrencyFormatter for InrFormatter {
    fn format(&self, amount: f64) -> String {
        let (negative, digits) = rounded_parts(amount, 2);
        let (int, frac) = digits.split_once('.').unwrap_or((digits.as_str(), ""));
        let sign = if negative { "-" } else { "" };
        format!("{sign}₹{}.{frac:0<2}", group_indian(int))
    }
}

/// Renders an index level the way the dashboard shows it: Western thousands grouping and
/// at most three fractional digits with trailing zeros trimmed (`21,845.25`).
#[must_use]
pub fn format_index_value(value: f64) -> String {
    let (negative, digits) = rounded_parts(value, 3);
    let sign = if negative { "-" } else { "" };
    match digits.split_once('.') {
        Some((int, frac)) => {
            let frac = frac.trim_end_matches('0');
            if frac.is_empty() {
                format!("{sign}{}", group_thousands(int))
            } else {
                format!("{sign}{}.{frac}", group_thousands(int))
            }
        }
        None => format!("{sign}{}", group_thousands(&digits)),
    }
}

/// Sign and unsigned digits of `value` rounded half away from zero to `dp` places.
///
/// Non-finite values render as zero. Finite values outside `Decimal`'s range (about
/// ±7.9e28) skip rounding and use the shortest `f64` representation, which has no
/// fractional part at that magnitude.
fn rounded_parts(value: f64, dp: u32) -> (bool, String) {
    if !value.is_finite() {
        return (false, "0".to_string());
    }
    match f64_to_decimal(value) {
        Some(decimal) => {
            let mut rounded =
                decimal.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
            let negative = rounded.is_sign_negative() && !rounded.is_zero();
            rounded.set_sign_positive(true);
            (negative, rounded.to_string())
        }
        None => (value < 0.0, value.abs().to_string()),
    }
}

fn f64_to_decimal(value: f64) -> Option<Decimal> {
    Decimal::from_str(&value.to_string())
        .or_else(|_| Decimal::from_str(&format!("{value:.4}")))
        .ok()
}

/// `12345678` -> `1,23,45,678`
fn group_indian(int: &str) -> String {
    if int.len() <= 3 {
        return int.to_string();
    }
    let (head, tail) = int.split_at(int.len() - 3);
    let mut groups = Vec::with_capacity(head.len() / 2 + 1);
    let mut end = head.len();
    while end > 2 {
        groups.push(&head[end - 2..end]);
        end -= 2;
    }
    groups.push(&head[..end]);
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

/// `1234567` -> `1,234,567`
fn group_thousands(int: &str) -> String {
    let mut out = String::with_capacity(int.len() + int.len() / 3);
    for (i, ch) in int.chars().enumerate() {
        if i > 0 && (int.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
