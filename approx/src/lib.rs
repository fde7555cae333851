//! Approximate large units for signed nanosecond durations.
//!
//! A [`Duration`] is a signed count of nanoseconds. On top of the usual
//! `ns`/`us`/`ms`/`s`/`m`/`h` units this crate understands days, weeks, months
//! and years, each a fixed multiple of smaller units:
//!
//! - a day is 24 hours,
//! - a week is 7 days,
//! - a month is 4 weeks,
//! - a year is 365 days.
//!
//! These are not calendar aware. A month is always 28 days.
//!
//! ```
//! use approx::{format_duration, parse_duration, DAY};
//!
//! let d = parse_duration("1w4d").unwrap();
//! assert_eq!(d, DAY * 11);
//! assert_eq!(d.to_string(), "264h0m0s");
//! assert_eq!(format_duration(d, "d"), "11d0h0m0s");
//! ```

pub mod duration;
pub mod error;
pub mod format;
pub mod parse;

pub use duration::*;
pub use error::*;
pub use format::*;
pub use parse::*;

pub const NANOSECOND: Duration = Duration::NANOSECOND;
pub const MICROSECOND: Duration = Duration::MICROSECOND;
pub const MILLISECOND: Duration = Duration::MILLISECOND;
pub const SECOND: Duration = Duration::SECOND;
pub const MINUTE: Duration = Duration::MINUTE;
pub const HOUR: Duration = Duration::HOUR;
pub const DAY: Duration = Duration::DAY;
pub const WEEK: Duration = Duration::WEEK;
pub const MONTH: Duration = Duration::MONTH;
pub const YEAR: Duration = Duration::YEAR;

pub const NS_PER_MICRO: u64 = 1_000;
pub const NS_PER_MILLI: u64 = 1_000 * NS_PER_MICRO;
pub const NS_PER_SEC: u64 = 1_000 * NS_PER_MILLI;
pub const NS_PER_MIN: u64 = 60 * NS_PER_SEC;
pub const NS_PER_HOUR: u64 = 60 * NS_PER_MIN;
pub const NS_PER_DAY: u64 = 24 * NS_PER_HOUR;
pub const NS_PER_WEEK: u64 = 7 * NS_PER_DAY;
pub const NS_PER_MONTH: u64 = 4 * NS_PER_WEEK;
pub const NS_PER_YEAR: u64 = 365 * NS_PER_DAY;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Unit {
    Nanosecond,
    Microsecond,
    Millisecond,
    Second,
    Minute,
    Hour,
    Day,
    Week,
    Month,
    Year,
}

/// Every accepted suffix, longest first so that `ms` is never read as `m`.
///
/// `µs` is U+00B5 MICRO SIGN and `μs` is U+03BC GREEK SMALL LETTER MU; both are
/// accepted alongside `us`.
pub const SUFFIXES: [(&str, Unit); 12] = [
    ("\u{00B5}s", Unit::Microsecond),
    ("\u{03BC}s", Unit::Microsecond),
    ("ns", Unit::Nanosecond),
    ("us", Unit::Microsecond),
    ("ms", Unit::Millisecond),
    ("s", Unit::Second),
    ("m", Unit::Minute),
    ("h", Unit::Hour),
    ("d", Unit::Day),
    ("w", Unit::Week),
    ("M", Unit::Month),
    ("y", Unit::Year),
];

impl Unit {
    /// Nanoseconds in one of this unit.
    #[inline]
    pub const fn nanoseconds(self) -> u64 {
        match self {
            Unit::Nanosecond => 1,
            Unit::Microsecond => NS_PER_MICRO,
            Unit::Millisecond => NS_PER_MILLI,
            Unit::Second => NS_PER_SEC,
            Unit::Minute => NS_PER_MIN,
            Unit::Hour => NS_PER_HOUR,
            Unit::Day => NS_PER_DAY,
            Unit::Week => NS_PER_WEEK,
            Unit::Month => NS_PER_MONTH,
            Unit::Year => NS_PER_YEAR,
        }
    }

    #[inline]
    pub const fn duration(self) -> Duration {
        Duration::from_nanoseconds(self.nanoseconds() as i64)
    }

    /// The canonical suffix used when formatting.
    #[inline]
    pub const fn suffix(self) -> &'static str {
        match self {
            Unit::Nanosecond => "ns",
            Unit::Microsecond => "\u{00B5}s",
            Unit::Millisecond => "ms",
            Unit::Second => "s",
            Unit::Minute => "m",
            Unit::Hour => "h",
            Unit::Day => "d",
            Unit::Week => "w",
            Unit::Month => "M",
            Unit::Year => "y",
        }
    }

    /// Resolves a complete unit token. Case sensitive: `m` is minutes, `M` months.
    pub fn from_suffix(token: &[u8]) -> Option<Unit> {
        SUFFIXES
            .iter()
            .find(|(suffix, _)| suffix.as_bytes() == token)
            .map(|&(_, unit)| unit)
    }

    /// Splits the longest suffix off the front of `s`, returning the unit and
    /// whatever follows it.
    pub fn split_suffix(s: &[u8]) -> Option<(Unit, &[u8])> {
        SUFFIXES.iter().find_map(|&(suffix, unit)| {
            s.strip_prefix(suffix.as_bytes()).map(|rest| (unit, rest))
        })
    }
}

impl std::ops::Mul<i64> for Unit {
    type Output = Duration;

    #[inline]
    fn mul(self, rhs: i64) -> Self::Output {
        self.duration() * rhs
    }
}

impl std::ops::Mul<Unit> for i64 {
    type Output = Duration;

    #[inline]
    fn mul(self, rhs: Unit) -> Self::Output {
        rhs * self
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn large_units_are_fixed_multiples() {
        assert_eq!(DAY, HOUR * 24);
        assert_eq!(WEEK, DAY * 7);
        assert_eq!(MONTH, WEEK * 4);
        assert_eq!(YEAR, DAY * 365);
        assert_eq!(YEAR, WEEK * 52 + DAY);
    }

    #[test]
    fn suffixes_are_longest_first() {
        let lengths: Vec<usize> = SUFFIXES.iter().map(|(s, _)| s.len()).collect();
        let mut sorted = lengths.clone();
        sorted.sort_by(|a, b| b.cmp(a));
        assert_eq!(lengths, sorted);
    }

    #[test]
    fn micro_aliases() {
        assert_eq!(Unit::from_suffix(b"us"), Some(Unit::Microsecond));
        assert_eq!(Unit::from_suffix("\u{00B5}s".as_bytes()), Some(Unit::Microsecond));
        assert_eq!(Unit::from_suffix("\u{03BC}s".as_bytes()), Some(Unit::Microsecond));
    }

    #[test]
    fn case_sensitive() {
        assert_eq!(Unit::from_suffix(b"m"), Some(Unit::Minute));
        assert_eq!(Unit::from_suffix(b"M"), Some(Unit::Month));
        assert_eq!(Unit::from_suffix(b"ms"), Some(Unit::Millisecond));
        assert_eq!(Unit::from_suffix(b"H"), None);
        assert_eq!(Unit::from_suffix(b""), None);
    }

    #[test]
    fn split_longest_suffix() {
        assert_eq!(Unit::split_suffix(b"ms5us"), Some((Unit::Millisecond, &b"5us"[..])));
        assert_eq!(Unit::split_suffix(b"m3s"), Some((Unit::Minute, &b"3s"[..])));
        assert_eq!(Unit::split_suffix(b"hr"), Some((Unit::Hour, &b"r"[..])));
        assert_eq!(
            Unit::split_suffix("\u{03BC}s".as_bytes()),
            Some((Unit::Microsecond, &b""[..]))
        );
        assert_eq!(Unit::split_suffix(b"\xc2\xb5"), None);
        assert_eq!(Unit::split_suffix(b" s"), None);
        assert_eq!(Unit::split_suffix(b""), None);
    }

    #[test]
    fn unit_times_count() {
        assert_eq!(Unit::Week * 2, DAY * 14);
        assert_eq!(3 * Unit::Hour, MINUTE * 180);
    }

    #[test]
    #[should_panic(expected = "overflow when multiplying duration by scalar")]
    fn unit_times_count_overflow_panics() {
        let _ = Unit::Year * 300;
    }
}
