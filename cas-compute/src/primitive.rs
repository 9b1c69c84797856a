//! Functions to construct [`Integer`]s and [`Rational`]s from the number literals found in a
//! step.

use rug::{Integer, Rational};

/// Creates a [`Rational`] with the given value.
pub fn rational<T>(n: T) -> Rational
where
    Rational: From<T>,
{
    Rational::from(n)
}

/// Parses a decimal literal, such as `12`, `2.5`, `3.`, or `.75`, into an exact [`Rational`].
///
/// Returns [`None`] if the string is not made of ASCII digits with at most one decimal point.
pub fn rational_from_str(s: &str) -> Option<Rational> {
    let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
    let digits = format!("{}{}", whole, frac);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let numer = Integer::from_str_radix(&digits, 10).ok()?;
    let denom = Integer::from(Integer::u_pow_u(10, frac.len() as u32));
    Some(Rational::from((numer, denom)))
}

/// Returns the canonical text of a decimal literal: leading zeros of the integer part and
/// trailing zeros of the fractional part are removed, as is a trailing decimal point.
///
/// `007` becomes `7`, `2.50` becomes `2.5`, `3.` becomes `3`, and `.5` becomes `0.5`.
pub fn canonical_decimal(s: &str) -> String {
    let (whole, frac) = s.split_once('.').unwrap_or((s, ""));
    let whole = match whole.trim_start_matches('0') {
        "" => "0",
        whole => whole,
    };
    let frac = frac.trim_end_matches('0');

    if frac.is_empty() {
        whole.to_string()
    } else {
        format!("{}.{}", whole, frac)
    }
}
