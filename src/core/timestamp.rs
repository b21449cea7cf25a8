//! Timestamp source for log lines
//!
//! Every line is stamped as `DD.MM.YYYY | HH:mm:ss`. The timezone is chosen
//! once, when the logger is built, and the wall clock sits behind the
//! [`Clock`] trait so tests can pin it.

use super::error::{LoggerError, Result};
use chrono::{DateTime, FixedOffset, Local, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// strftime pattern for `DD.MM.YYYY | HH:mm:ss`
pub const TIMESTAMP_FORMAT: &str = "%d.%m.%Y | %H:%M:%S";

/// Source of the current instant
pub trait Clock: Send + Sync + fmt::Debug {
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock frozen at one instant
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use relogger::{FixedClock, TimeZoneSpec, TimestampProvider};
/// use std::sync::Arc;
///
/// let clock = FixedClock::new(Utc.with_ymd_and_hms(2023, 5, 12, 14, 30, 45).unwrap());
/// let provider = TimestampProvider::new(TimeZoneSpec::Utc, Arc::new(clock));
/// assert_eq!(provider.now(), "12.05.2023 | 14:30:45");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(DateTime<Utc>);

impl FixedClock {
    #[must_use]
    pub fn new(instant: DateTime<Utc>) -> Self {
        Self(instant)
    }
}

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

/// Timezone used to render timestamps
///
/// Parsed from `"local"`, `"utc"` (also `"z"` and `"gmt"`), a fixed offset
/// such as `"+03:00"`, `"-0530"` or `"+02"`, or an IANA name like
/// `"Europe/Moscow"`.
///
/// ```
/// use relogger::TimeZoneSpec;
///
/// let zone: TimeZoneSpec = "America/New_York".parse().unwrap();
/// assert_eq!(zone.to_string(), "America/New_York");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum TimeZoneSpec {
    /// The host's local timezone
    #[default]
    Local,
    Utc,
    Fixed(FixedOffset),
    /// IANA database zone, daylight saving included
    Named(Tz),
}

impl TimeZoneSpec {
    /// Parse `input`, falling back to UTC when it cannot be understood
    ///
    /// Resolution never fails: an unusable timezone is reported on stderr
    /// and timestamps are rendered in UTC instead.
    #[must_use]
    pub fn resolve_or_utc(input: &str) -> Self {
        match input.parse() {
            Ok(zone) => zone,
            Err(e) => {
                eprintln!("[LOGGER WARNING] {}. Falling back to UTC timestamps.", e);
                TimeZoneSpec::Utc
            }
        }
    }

    /// Render `instant` in this timezone
    #[must_use]
    pub fn format(&self, instant: &DateTime<Utc>) -> String {
        match self {
            TimeZoneSpec::Local => instant
                .with_timezone(&Local)
                .format(TIMESTAMP_FORMAT)
                .to_string(),
            TimeZoneSpec::Utc => instant.format(TIMESTAMP_FORMAT).to_string(),
            TimeZoneSpec::Fixed(offset) => instant
                .with_timezone(offset)
                .format(TIMESTAMP_FORMAT)
                .to_string(),
            TimeZoneSpec::Named(tz) => instant
                .with_timezone(tz)
                .format(TIMESTAMP_FORMAT)
                .to_string(),
        }
    }

    fn unrecognized(input: &str) -> LoggerError {
        LoggerError::config("timezone", format!("unrecognized timezone '{}'", input))
    }

    fn parse_offset(s: &str) -> Option<FixedOffset> {
        let (sign, rest) = match s.as_bytes().first()? {
            b'+' => (1, &s[1..]),
            b'-' => (-1, &s[1..]),
            _ => return None,
        };
        let digits: String = rest.chars().filter(|c| *c != ':').collect();
        if !digits.chars().all(|c| c.is_ascii_digit()) {
            return None;
        }
        let (hours, minutes) = match digits.len() {
            2 => (digits.parse::<i32>().ok()?, 0),
            4 => (digits[..2].parse::<i32>().ok()?, digits[2..].parse::<i32>().ok()?),
            _ => return None,
        };
        if hours > 23 || minutes > 59 {
            return None;
        }
        FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60))
    }
}

impl fmt::Display for TimeZoneSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TimeZoneSpec::Local => f.write_str("local"),
            TimeZoneSpec::Utc => f.write_str("utc"),
            TimeZoneSpec::Fixed(offset) => write!(f, "{}", offset),
            TimeZoneSpec::Named(tz) => f.write_str(tz.name()),
        }
    }
}

impl FromStr for TimeZoneSpec {
    type Err = LoggerError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        match trimmed.to_lowercase().as_str() {
            "local" | "" => Ok(TimeZoneSpec::Local),
            "utc" | "z" | "gmt" => Ok(TimeZoneSpec::Utc),
            _ if trimmed.starts_with(['+', '-']) => Self::parse_offset(trimmed)
                .map(TimeZoneSpec::Fixed)
                .ok_or_else(|| Self::unrecognized(s)),
            _ => trimmed
                .parse::<Tz>()
                .map(TimeZoneSpec::Named)
                .map_err(|_| Self::unrecognized(s)),
        }
    }
}

impl TryFrom<String> for TimeZoneSpec {
    type Error = LoggerError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimeZoneSpec> for String {
    fn from(zone: TimeZoneSpec) -> Self {
        zone.to_string()
    }
}

/// Produces formatted timestamps from a clock and a resolved timezone
#[derive(Debug, Clone)]
pub struct TimestampProvider {
    zone: TimeZoneSpec,
    clock: Arc<dyn Clock>,
}

impl TimestampProvider {
    #[must_use]
    pub fn new(zone: TimeZoneSpec, clock: Arc<dyn Clock>) -> Self {
        Self { zone, clock }
    }

    /// System clock in the host's local timezone
    #[must_use]
    pub fn system() -> Self {
        Self::new(TimeZoneSpec::Local, Arc::new(SystemClock))
    }

    pub fn zone(&self) -> TimeZoneSpec {
        self.zone
    }

    /// Current time as `DD.MM.YYYY | HH:mm:ss`
    #[must_use]
    pub fn now(&self) -> String {
        self.zone.format(&self.clock.now())
    }
}

impl Default for TimestampProvider {
    fn default() -> Self {
        Self::system()
    }
}
