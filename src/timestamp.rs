//! Gregorian timestamps used by time-based UUIDs.
//!
//! A [`Timestamp`] counts 100-nanosecond intervals since 1582-10-15 00:00:00 UTC, the start of
//! the Gregorian calendar, and fits in 60 bits. The last representable instant falls in the year
//! 5236.

use time::OffsetDateTime;

use crate::Error;

/// Number of 100-nanosecond intervals between 1582-10-15 and 1970-01-01.
pub const GREGORIAN_OFFSET: u64 = 122_192_928_000_000_000;

const TICKS_PER_SECOND: i128 = 10_000_000;
const NANOS_PER_TICK: i128 = 100;

/// A 60-bit count of 100-nanosecond intervals since the Gregorian epoch.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug, Default)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The largest representable timestamp.
    pub const MAX: Self = Self((1 << 60) - 1);

    /// Creates a timestamp from a raw tick count.
    pub const fn from_ticks(ticks: u64) -> Result<Self, Error> {
        if ticks > Self::MAX.0 {
            Err(Error::TimestampOutOfRange)
        } else {
            Ok(Self(ticks))
        }
    }

    /// Returns the raw tick count.
    pub const fn ticks(&self) -> u64 {
        self.0
    }

    /// Converts a Unix time, rounding to the nearest 100-nanosecond tick.
    pub fn from_unix(secs: i64, nanos: u32) -> Result<Self, Error> {
        let ticks = i128::from(secs) * TICKS_PER_SECOND
            + (i128::from(nanos) + NANOS_PER_TICK / 2) / NANOS_PER_TICK
            + i128::from(GREGORIAN_OFFSET);
        u64::try_from(ticks)
            .map_err(|_| Error::TimestampOutOfRange)
            .and_then(Self::from_ticks)
    }

    /// Returns the Unix time as whole seconds and a sub-second nanosecond part.
    pub const fn to_unix(&self) -> (i64, u32) {
        let ticks = self.0 as i64 - GREGORIAN_OFFSET as i64;
        (
            ticks.div_euclid(TICKS_PER_SECOND as i64),
            (ticks.rem_euclid(TICKS_PER_SECOND as i64) * NANOS_PER_TICK as i64) as u32,
        )
    }

    /// Converts a calendar date and time.
    pub fn from_datetime(src: OffsetDateTime) -> Result<Self, Error> {
        Self::from_unix(src.unix_timestamp(), src.nanosecond())
    }

    /// Converts back to a calendar date and time in UTC.
    pub fn to_datetime(&self) -> Result<OffsetDateTime, Error> {
        let nanos = (i128::from(self.0) - i128::from(GREGORIAN_OFFSET)) * NANOS_PER_TICK;
        OffsetDateTime::from_unix_timestamp_nanos(nanos).map_err(|_| Error::TimestampOutOfRange)
    }

    /// Returns the current system time.
    pub fn now() -> Result<Self, Error> {
        Self::from_datetime(OffsetDateTime::now_utc())
    }
}

/// A source of the current time for time-based generators.
pub trait Clock {
    /// Returns the current timestamp.
    fn now(&mut self) -> Result<Timestamp, Error>;
}

/// The system wall clock.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&mut self) -> Result<Timestamp, Error> {
        Timestamp::now()
    }
}
