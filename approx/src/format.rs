//! Formatting of durations, with or without the approximate large units.

use std::fmt::{self, Write};

use crate::{Duration, Unit, NS_PER_HOUR, NS_PER_MICRO, NS_PER_MILLI, NS_PER_MIN, NS_PER_SEC};

/// Which large units appear in formatted output. Days are always enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Units {
    pub years: bool,
    pub months: bool,
    pub weeks: bool,
}

impl Units {
    /// Days only, the same as the `"d"` specifier.
    pub const DAYS: Units = Units {
        years: false,
        months: false,
        weeks: false,
    };

    pub const ALL: Units = Units {
        years: true,
        months: true,
        weeks: true,
    };

    /// Reads a specifier such as `"ywd"`: `y` enables years, `M` months and
    /// `w` weeks. Order, repeats and any other character are ignored.
    pub fn from_spec(spec: &str) -> Self {
        spec.chars().fold(Units::DAYS, |mut units, c| {
            match c {
                'y' => units.years = true,
                'M' => units.months = true,
                'w' => units.weeks = true,
                _ => {}
            }
            units
        })
    }

    /// The enabled large units, largest first.
    fn enabled(self) -> impl Iterator<Item = Unit> {
        [
            (self.years, Unit::Year),
            (self.months, Unit::Month),
            (self.weeks, Unit::Week),
            (true, Unit::Day),
        ]
        .into_iter()
        .filter_map(|(enabled, unit)| enabled.then_some(unit))
    }
}

impl Default for Units {
    fn default() -> Self {
        Units::DAYS
    }
}

impl From<&str> for Units {
    fn from(spec: &str) -> Self {
        Units::from_spec(spec)
    }
}

impl fmt::Display for Units {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in self.enabled() {
            f.write_str(unit.suffix())?;
        }
        Ok(())
    }
}

/// A [`Duration`] displayed with large units, see [`Duration::approx`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Approx {
    duration: Duration,
    units: Units,
}

impl Duration {
    /// Displays the duration with the enabled large units in front of the
    /// small-unit form.
    ///
    /// ```
    /// use approx::{Duration, Units};
    ///
    /// let d = Duration::YEAR * 4 + Duration::WEEK * 3 + Duration::DAY * 2 + Duration::HOUR;
    /// assert_eq!(d.approx(Units::from_spec("ywd")).to_string(), "4y3w2d1h0m0s");
    /// assert_eq!(Duration::MINUTE.approx(Units::ALL).to_string(), "1m0s");
    /// ```
    #[inline]
    pub fn approx(self, units: impl Into<Units>) -> Approx {
        Approx {
            duration: self,
            units: units.into(),
        }
    }
}

impl fmt::Display for Approx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.duration.is_negative() {
            f.write_char('-')?;
        }
        let mut remaining = self.duration.unsigned_abs();

        // Once a unit has been written every smaller enabled unit is written
        // too, even when zero, so the fields stay the same for a given `Units`.
        let mut started = false;
        for unit in self.units.enabled() {
            let scale = unit.nanoseconds();
            if remaining >= scale {
                write!(f, "{}{}", remaining / scale, unit.suffix())?;
                remaining %= scale;
                started = true;
            } else if started {
                write!(f, "0{}", unit.suffix())?;
            }
        }
        if started {
            if remaining < NS_PER_HOUR {
                f.write_str("0h")?;
            }
            if remaining < NS_PER_MIN {
                f.write_str("0m")?;
            }
        }

        write_small(f, remaining)
    }
}

/// Formats `d` with the large units named in `spec`, see [`Units::from_spec`].
///
/// ```
/// use approx::{format_duration, HOUR};
///
/// assert_eq!(format_duration(HOUR * 264, "d"), "11d0h0m0s");
/// assert_eq!(format_duration(HOUR * 264, "w"), "1w4d0h0m0s");
/// assert_eq!(format_duration(-HOUR, "ywd"), "-1h0m0s");
/// ```
pub fn format_duration(d: Duration, spec: &str) -> String {
    d.approx(spec).to_string()
}

/// Writes an unsigned nanosecond count using only `h`, `m`, `s`, `ms`, `µs`
/// and `ns`.
///
/// Below one second the largest fitting sub-second unit is used with up to
/// its full decimal precision; otherwise `[[Nh]Nm]N[.fff]s`. Trailing zeros of
/// fractions are dropped.
pub(crate) fn write_small(f: &mut impl Write, ns: u64) -> fmt::Result {
    if ns == 0 {
        return f.write_str("0s");
    }

    if ns < NS_PER_SEC {
        let (digits, suffix) = match ns {
            ns if ns < NS_PER_MICRO => (0, "ns"),
            ns if ns < NS_PER_MILLI => (3, "\u{00B5}s"),
            _ => (6, "ms"),
        };
        let (whole, fraction) = split_fraction(ns, digits);
        write!(f, "{whole}")?;
        write_fraction(f, fraction, digits)?;
        return f.write_str(suffix);
    }

    let (secs, fraction) = split_fraction(ns, 9);
    let (mins, secs) = (secs / 60, secs % 60);
    let (hours, mins) = (mins / 60, mins % 60);
    if hours > 0 {
        write!(f, "{hours}h")?;
    }
    if hours > 0 || mins > 0 {
        write!(f, "{mins}m")?;
    }
    write!(f, "{secs}")?;
    write_fraction(f, fraction, 9)?;
    f.write_char('s')
}

/// Splits off the lowest `digits` decimal digits.
#[inline]
fn split_fraction(v: u64, digits: u32) -> (u64, u64) {
    let pow = 10u64.pow(digits);
    (v / pow, v % pow)
}

/// Writes `.fff` for a fraction of `digits` decimal places, without trailing
/// zeros. Writes nothing for a zero fraction.
fn write_fraction(f: &mut impl Write, mut fraction: u64, mut digits: u32) -> fmt::Result {
    if fraction == 0 {
        return Ok(());
    }
    while fraction % 10 == 0 {
        fraction /= 10;
        digits -= 1;
    }
    write!(f, ".{fraction:0width$}", width = digits as usize)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(ns: u64) -> String {
        let mut s = String::new();
        write_small(&mut s, ns).unwrap();
        s
    }

    #[test]
    fn small_sub_second() {
        assert_eq!(small(0), "0s");
        assert_eq!(small(1), "1ns");
        assert_eq!(small(999), "999ns");
        assert_eq!(small(1_100), "1.1\u{00B5}s");
        assert_eq!(small(2_200_000), "2.2ms");
        assert_eq!(small(100_000_001), "100.000001ms");
    }

    #[test]
    fn small_seconds_and_up() {
        assert_eq!(small(3_300_000_000), "3.3s");
        assert_eq!(small(245 * NS_PER_SEC), "4m5s");
        assert_eq!(small(245 * NS_PER_SEC + NS_PER_MILLI), "4m5.001s");
        assert_eq!(small(8 * NS_PER_MIN + 1), "8m0.000000001s");
        assert_eq!(small(NS_PER_HOUR), "1h0m0s");
        assert_eq!(small(i64::MAX as u64), "2562047h47m16.854775807s");
        assert_eq!(small(1 << 63), "2562047h47m16.854775808s");
    }

    #[test]
    fn specifier_flags() {
        assert_eq!(Units::from_spec(""), Units::DAYS);
        assert_eq!(Units::from_spec("d"), Units::DAYS);
        assert_eq!(Units::from_spec("dwwy"), Units::from_spec("ywd"));
        assert_eq!(
            Units::from_spec("yMw"),
            Units::ALL
        );
        // Lowercase `m` is minutes and does not enable months.
        assert_eq!(Units::from_spec("m"), Units::DAYS);
        assert_eq!(Units::ALL.to_string(), "yMwd");
        assert_eq!(Units::DAYS.to_string(), "d");
    }

    #[test]
    fn cascade_pads_lower_units() {
        let d = Duration::YEAR + Duration::DAY * 3;
        assert_eq!(d.approx(Units::ALL).to_string(), "1y0M0w3d0h0m0s");
        assert_eq!(d.approx("yd").to_string(), "1y3d0h0m0s");
    }

    #[test]
    fn cascade_pads_hours_and_minutes() {
        let d = Duration::DAY + Duration::MINUTE * 5;
        assert_eq!(d.approx("d").to_string(), "1d0h5m0s");
        let d = Duration::DAY + Duration::MILLISECOND * 500;
        assert_eq!(d.approx("d").to_string(), "1d0h0m500ms");
    }

    #[test]
    fn no_cascade_below_a_day() {
        assert_eq!(Duration::ZERO.approx(Units::ALL).to_string(), "0s");
        assert_eq!((Duration::HOUR * 23).approx(Units::ALL).to_string(), "23h0m0s");
        assert_eq!(
            (-Duration::SECOND * 90).approx("d").to_string(),
            "-1m30s"
        );
    }

    #[test]
    fn extremes() {
        assert_eq!(
            Duration::MAX.approx(Units::ALL).to_string(),
            "292y6M0w3d23h47m16.854775807s"
        );
        assert_eq!(
            Duration::MIN.approx(Units::ALL).to_string(),
            "-292y6M0w3d23h47m16.854775808s"
        );
        assert_eq!(
            Duration::MIN.approx("d").to_string(),
            "-106751d23h47m16.854775808s"
        );
    }
}
