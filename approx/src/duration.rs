use crate::{
    ConversionError, NS_PER_DAY, NS_PER_HOUR, NS_PER_MICRO, NS_PER_MILLI, NS_PER_MIN,
    NS_PER_MONTH, NS_PER_SEC, NS_PER_WEEK, NS_PER_YEAR,
};

/// A signed count of nanoseconds.
///
/// The arithmetic operators panic on overflow in every build profile. Use
/// [`Duration::checked_add`] and friends to recover instead.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(i64);

impl Duration {
    pub const ZERO: Self = Duration(0);

    pub const MIN: Self = Duration(i64::MIN);

    pub const MAX: Self = Duration(i64::MAX);

    pub const NANOSECOND: Self = Duration(1);
    pub const MICROSECOND: Self = Duration(NS_PER_MICRO as i64);
    pub const MILLISECOND: Self = Duration(NS_PER_MILLI as i64);
    pub const SECOND: Self = Duration(NS_PER_SEC as i64);
    pub const MINUTE: Self = Duration(NS_PER_MIN as i64);
    pub const HOUR: Self = Duration(NS_PER_HOUR as i64);
    pub const DAY: Self = Duration(NS_PER_DAY as i64);
    pub const WEEK: Self = Duration(NS_PER_WEEK as i64);
    pub const MONTH: Self = Duration(NS_PER_MONTH as i64);
    pub const YEAR: Self = Duration(NS_PER_YEAR as i64);

    #[inline]
    pub const fn from_nanoseconds(nanoseconds: i64) -> Self {
        Self(nanoseconds)
    }

    #[inline]
    pub const fn as_nanoseconds(self) -> i64 {
        self.0
    }

    /// The magnitude in nanoseconds. Total over the whole range, including
    /// [`Duration::MIN`].
    #[inline]
    pub const fn unsigned_abs(self) -> u64 {
        self.0.unsigned_abs()
    }

    #[inline]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    #[inline]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(ns) => Some(Duration(ns)),
            None => None,
        }
    }

    #[inline]
    pub const fn checked_sub(self, rhs: Self) -> Option<Self> {
        match self.0.checked_sub(rhs.0) {
            Some(ns) => Some(Duration(ns)),
            None => None,
        }
    }

    #[inline]
    pub const fn checked_mul(self, rhs: i64) -> Option<Self> {
        match self.0.checked_mul(rhs) {
            Some(ns) => Some(Duration(ns)),
            None => None,
        }
    }
}

impl std::ops::Add for Duration {
    type Output = Duration;

    #[inline]
    fn add(self, rhs: Self) -> Self::Output {
        Duration(self.0.checked_add(rhs.0).expect("overflow when adding durations"))
    }
}

impl std::ops::AddAssign for Duration {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::ops::Sub for Duration {
    type Output = Duration;

    #[inline]
    fn sub(self, rhs: Self) -> Self::Output {
        Duration(
            self.0
                .checked_sub(rhs.0)
                .expect("overflow when subtracting durations"),
        )
    }
}

impl std::ops::SubAssign for Duration {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl std::ops::Mul<i64> for Duration {
    type Output = Duration;

    #[inline]
    fn mul(self, rhs: i64) -> Self::Output {
        Duration(
            self.0
                .checked_mul(rhs)
                .expect("overflow when multiplying duration by scalar"),
        )
    }
}

impl std::ops::Mul<Duration> for i64 {
    type Output = Duration;

    #[inline]
    fn mul(self, rhs: Duration) -> Self::Output {
        rhs * self
    }
}

impl std::ops::Div<i64> for Duration {
    type Output = Duration;

    #[inline]
    fn div(self, rhs: i64) -> Self::Output {
        Duration(
            self.0
                .checked_div(rhs)
                .expect("divide by zero or overflow when dividing duration by scalar"),
        )
    }
}

impl std::ops::Neg for Duration {
    type Output = Duration;

    #[inline]
    fn neg(self) -> Self::Output {
        Duration(self.0.checked_neg().expect("overflow when negating duration"))
    }
}

impl std::iter::Sum for Duration {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Duration::ZERO, |acc, d| acc + d)
    }
}

impl From<Duration> for i64 {
    #[inline]
    fn from(d: Duration) -> Self {
        d.0
    }
}

impl From<i64> for Duration {
    #[inline]
    fn from(nanoseconds: i64) -> Self {
        Duration(nanoseconds)
    }
}

impl TryFrom<std::time::Duration> for Duration {
    type Error = ConversionError;

    fn try_from(d: std::time::Duration) -> Result<Self, Self::Error> {
        i64::try_from(d.as_nanos())
            .map(Duration)
            .map_err(|_| ConversionError::TooLarge)
    }
}

impl TryFrom<Duration> for std::time::Duration {
    type Error = ConversionError;

    fn try_from(d: Duration) -> Result<Self, Self::Error> {
        u64::try_from(d.0)
            .map(std::time::Duration::from_nanos)
            .map_err(|_| ConversionError::Negative)
    }
}

#[cfg(feature = "hifitime")]
impl From<Duration> for hifitime::Duration {
    #[inline]
    fn from(d: Duration) -> Self {
        hifitime::Duration::from_total_nanoseconds(i128::from(d.0))
    }
}

#[cfg(feature = "hifitime")]
impl TryFrom<hifitime::Duration> for Duration {
    type Error = ConversionError;

    fn try_from(d: hifitime::Duration) -> Result<Self, Self::Error> {
        let nanoseconds = d.total_nanoseconds();
        i64::try_from(nanoseconds)
            .map(Duration)
            .map_err(|_| match nanoseconds.is_negative() {
                true => ConversionError::TooSmall,
                false => ConversionError::TooLarge,
            })
    }
}

impl std::str::FromStr for Duration {
    type Err = crate::ParseError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_duration(s)
    }
}

// The small-unit form, e.g. "264h0m0s". Large units go through `Duration::approx`.
impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_negative() {
            f.write_str("-")?;
        }
        crate::format::write_small(f, self.unsigned_abs())
    }
}

// Serialized with the default large-unit form so that values read back
// through the parser unchanged.
#[cfg(feature = "serde")]
impl serde::Serialize for Duration {
    #[inline]
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(&self.approx(crate::Units::default()))
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Duration {
    #[inline]
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        String::deserialize(deserializer)?
            .parse()
            .map_err(serde::de::Error::custom)
    }
}
