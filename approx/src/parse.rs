//! Parsing of duration strings such as `"300ms"`, `"-1.5h"` or `"1y2M3w4d5h"`.
//!
//! A duration string is an optionally signed sequence of decimal numbers, each
//! with an optional fraction and a unit suffix. The lone string `"0"` (with or
//! without a sign) is accepted without a unit.

use crate::{ParseError, Unit};

/// Largest magnitude the parser accumulates: `|i64::MIN|`.
const MAX_MAGNITUDE: u64 = 1 << 63;

/// Parses a duration string into a [`Duration`](crate::Duration).
///
/// Takes bytes rather than `&str` so that input which is not valid UTF-8 is
/// reported with hex escapes instead of being rejected before parsing.
///
/// ```
/// use approx::{parse_duration, HOUR, MINUTE, MONTH};
///
/// assert_eq!(parse_duration("2M5m").unwrap(), MONTH * 2 + MINUTE * 5);
/// assert_eq!(parse_duration("-1.5h").unwrap(), -(HOUR + MINUTE * 30));
/// assert!(parse_duration("1d3").is_err());
/// ```
pub fn parse_duration(input: impl AsRef<[u8]>) -> Result<crate::Duration, ParseError> {
    let input = input.as_ref();
    parse(input)
        .map(crate::Duration::from_nanoseconds)
        .inspect_err(|err| tracing::trace!(%err, "rejected duration"))
}

fn parse(orig: &[u8]) -> Result<i64, ParseError> {
    let mut s = orig;

    // [-+]?
    let mut negative = false;
    if let Some((&c, rest)) = s.split_first() {
        if c == b'-' || c == b'+' {
            negative = c == b'-';
            s = rest;
        }
    }

    // The sign has no effect on zero.
    if s == b"0" {
        return Ok(0);
    }
    if s.is_empty() {
        return Err(ParseError::invalid_format(orig));
    }

    let mut magnitude: u64 = 0;
    while !s.is_empty() {
        // The next byte must be [0-9.]
        if !(s[0] == b'.' || s[0].is_ascii_digit()) {
            return Err(ParseError::invalid_format(orig));
        }

        let (whole, rest) =
            leading_int(s).ok_or_else(|| ParseError::invalid_format(orig))?;
        let has_whole = rest.len() != s.len();
        s = rest;

        let mut fraction = Fraction::default();
        let mut has_fraction = false;
        if let Some(rest) = s.strip_prefix(b".") {
            let (f, rest) = leading_fraction(rest);
            has_fraction = rest.len() != s.len() - 1;
            fraction = f;
            s = rest;
        }
        if !has_whole && !has_fraction {
            // e.g. ".s" or "-."
            return Err(ParseError::invalid_format(orig));
        }

        // Anything left after the suffix must start the next amount, so
        // "1hr" and "1h " fail on the next pass.
        let end = s
            .iter()
            .position(|&b| b == b'.' || b.is_ascii_digit())
            .unwrap_or(s.len());
        if end == 0 {
            // missing unit, e.g. "3"
            return Err(ParseError::invalid_format(orig));
        }
        let (unit, rest) = Unit::split_suffix(s)
            .ok_or_else(|| ParseError::unknown_unit(&s[..end], orig))?;
        s = rest;

        let value = scale(whole, fraction, unit.nanoseconds())
            .ok_or_else(|| ParseError::range_overflow(orig))?;
        magnitude = magnitude
            .checked_add(value)
            .filter(|&m| m <= MAX_MAGNITUDE)
            .ok_or_else(|| ParseError::range_overflow(orig))?;
    }

    match negative {
        // `0 - 2^63` wraps to exactly i64::MIN.
        true => Ok(0i64.wrapping_sub_unsigned(magnitude)),
        false => i64::try_from(magnitude).map_err(|_| ParseError::range_overflow(orig)),
    }
}

/// Digits after a decimal point: `value / scale` is the fraction.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Fraction {
    value: u64,
    scale: f64,
}

impl Default for Fraction {
    fn default() -> Self {
        Fraction {
            value: 0,
            scale: 1.0,
        }
    }
}

/// `whole * unit + fraction * unit` in nanoseconds, or `None` past `2^63`.
fn scale(whole: u64, fraction: Fraction, unit: u64) -> Option<u64> {
    if whole > MAX_MAGNITUDE / unit {
        return None;
    }
    let mut value = whole * unit;
    if fraction.value > 0 {
        // f64 keeps fractions of the largest units accurate to the nanosecond
        // and the product never exceeds `unit`.
        let part = (fraction.value as f64 * (unit as f64 / fraction.scale)) as u64;
        value = value.checked_add(part).filter(|&v| v <= MAX_MAGNITUDE)?;
    }
    Some(value)
}

/// Consumes leading `[0-9]*`. `None` once the value passes `2^63`.
fn leading_int(s: &[u8]) -> Option<(u64, &[u8])> {
    let end = s
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    let mut x: u64 = 0;
    for &c in &s[..end] {
        if x > MAX_MAGNITUDE / 10 {
            return None;
        }
        x = x * 10 + u64::from(c - b'0');
        if x > MAX_MAGNITUDE {
            return None;
        }
    }
    Some((x, &s[end..]))
}

/// Consumes leading `[0-9]*` after a decimal point.
///
/// Digits that no longer fit are consumed but stop adding precision, so
/// `"0.100000000000000000000h"` is accepted.
fn leading_fraction(s: &[u8]) -> (Fraction, &[u8]) {
    let end = s
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(s.len());
    let mut fraction = Fraction::default();
    for &c in &s[..end] {
        if fraction.value > (MAX_MAGNITUDE - 1) / 10 {
            break;
        }
        let next = fraction.value * 10 + u64::from(c - b'0');
        if next > MAX_MAGNITUDE {
            break;
        }
        fraction.value = next;
        fraction.scale *= 10.0;
    }
    (fraction, &s[end..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_int_stops_at_non_digit() {
        assert_eq!(leading_int(b"123h"), Some((123, &b"h"[..])));
        assert_eq!(leading_int(b".5s"), Some((0, &b".5s"[..])));
        assert_eq!(leading_int(b""), Some((0, &b""[..])));
    }

    #[test]
    fn leading_int_overflow() {
        assert_eq!(
            leading_int(b"9223372036854775808ns"),
            Some((1 << 63, &b"ns"[..]))
        );
        assert_eq!(leading_int(b"9223372036854775809ns"), None);
        assert_eq!(leading_int(b"99999999999999999999ns"), None);
    }

    #[test]
    fn leading_fraction_drops_excess_precision() {
        let (fraction, rest) = leading_fraction(b"5s");
        assert_eq!(fraction.value, 5);
        assert_eq!(fraction.scale, 10.0);
        assert_eq!(rest, b"s");

        let (fraction, rest) = leading_fraction(b"830103483285477580700h");
        assert_eq!(fraction.value, 8301034832854775807);
        assert_eq!(fraction.scale, 1e19);
        assert_eq!(rest, b"h");
    }

    #[test]
    fn scale_fraction_of_hour() {
        let third = Fraction {
            value: 3333333333333333333,
            scale: 1e19,
        };
        assert_eq!(
            scale(0, third, Unit::Hour.nanoseconds()),
            Some(20 * Unit::Minute.nanoseconds())
        );
    }

    #[test]
    fn scale_overflow() {
        assert_eq!(scale(3_000_000, Fraction::default(), Unit::Hour.nanoseconds()), None);
        assert_eq!(
            scale(1 << 63, Fraction::default(), 1),
            Some(1 << 63)
        );
        let tiny = Fraction {
            value: 1,
            scale: 10.0,
        };
        assert_eq!(scale(1 << 63, tiny, 1000), None);
    }
}
