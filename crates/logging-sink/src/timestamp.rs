//! crates/logging-sink/src/timestamp.rs
//! Wall-clock capture and the timestamp + severity prefix.

use std::fmt;

use chrono::{DateTime, Local, Timelike};

use crate::severity::Severity;

const NANOS_PER_SECOND: u32 = 1_000_000_000;
const NANOS_PER_MILLI: u32 = 1_000_000;

/// A wall-clock instant captured once and rendered as
/// `YYYY-MM-DD HH:MM:SS:<millis>:<nanos>`.
///
/// The millisecond and nanosecond components are both taken from the
/// sub-second part of the instant and written without padding, so
/// `12:00:00.050000000` renders as `12:00:00:50:50000000`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Timestamp {
    instant: DateTime<Local>,
}

impl Timestamp {
    /// Captures the current local time.
    #[must_use]
    pub fn now() -> Self {
        Self::from_datetime(Local::now())
    }

    /// Wraps an existing instant.
    #[must_use]
    pub const fn from_datetime(instant: DateTime<Local>) -> Self {
        Self { instant }
    }

    /// Returns the wrapped instant.
    #[must_use]
    pub const fn datetime(&self) -> DateTime<Local> {
        self.instant
    }

    /// Nanosecond-of-second in `0..=999_999_999`.
    ///
    /// chrono represents a leap second as a nanosecond value past one billion;
    /// that overflow is folded back into the ordinary range.
    #[must_use]
    pub fn nanos(&self) -> u32 {
        self.instant.nanosecond() % NANOS_PER_SECOND
    }

    /// Millisecond-of-second in `0..=999`.
    #[must_use]
    pub fn millis(&self) -> u32 {
        self.nanos() / NANOS_PER_MILLI
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}",
            self.instant.format("%Y-%m-%d %H:%M:%S"),
            self.millis(),
            self.nanos()
        )
    }
}

/// The timestamp and severity tag that open every record.
///
/// A prefix is built once per emission and shared by every sink the record
/// is written to, so the file and the terminal always show the same instant.
///
/// # Examples
///
/// ```
/// use chrono::{Local, TimeZone, Timelike};
/// use logging_sink::{Prefix, Severity, Timestamp};
///
/// let instant = Local
///     .with_ymd_and_hms(2024, 3, 9, 7, 5, 2)
///     .unwrap()
///     .with_nanosecond(4_000_123)
///     .unwrap();
/// let prefix = Prefix::new(Timestamp::from_datetime(instant), Severity::Normal);
/// assert_eq!(prefix.to_string(), "2024-03-09 07:05:02:4:4000123 [ INFO ] ");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Prefix {
    timestamp: Timestamp,
    severity: Severity,
}

impl Prefix {
    /// Pairs a captured timestamp with a severity.
    #[must_use]
    pub const fn new(timestamp: Timestamp, severity: Severity) -> Self {
        Self {
            timestamp,
            severity,
        }
    }

    /// Captures the current time for `severity`.
    #[must_use]
    pub fn now(severity: Severity) -> Self {
        Self::new(Timestamp::now(), severity)
    }

    /// Returns the captured timestamp.
    #[must_use]
    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    /// Returns the severity.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        self.severity
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.timestamp, self.severity.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use proptest::prelude::*;

    fn at(nanos: u32) -> Timestamp {
        let instant = Local
            .with_ymd_and_hms(2023, 11, 28, 23, 59, 8)
            .single()
            .expect("unambiguous local time")
            .with_nanosecond(nanos)
            .expect("valid nanosecond");
        Timestamp::from_datetime(instant)
    }

    #[test]
    fn formats_date_time_and_subsecond_parts() {
        assert_eq!(at(123_456_789).to_string(), "2023-11-28 23:59:08:123:123456789");
    }

    #[test]
    fn subsecond_parts_are_not_padded() {
        assert_eq!(at(5_000_007).to_string(), "2023-11-28 23:59:08:5:5000007");
        assert_eq!(at(0).to_string(), "2023-11-28 23:59:08:0:0");
    }

    #[test]
    fn now_stays_in_range() {
        let timestamp = Timestamp::now();
        assert!(timestamp.nanos() < NANOS_PER_SECOND);
        assert!(timestamp.millis() < 1_000);
    }

    #[test]
    fn prefix_appends_tag_for_each_severity() {
        let timestamp = at(1_000_000);
        for (severity, tag) in [
            (Severity::Normal, " [ INFO ] "),
            (Severity::Warning, " [ WARN ] "),
            (Severity::Fatal, " [ ERRO ] "),
        ] {
            let prefix = Prefix::new(timestamp, severity);
            assert_eq!(prefix.to_string(), format!("2023-11-28 23:59:08:1:1000000{tag}"));
            assert_eq!(prefix.severity(), severity);
        }
    }

    proptest! {
        #[test]
        fn millis_is_nanos_truncated(nanos in 0_u32..1_000_000_000) {
            let timestamp = at(nanos);
            prop_assert_eq!(timestamp.nanos(), nanos);
            prop_assert_eq!(timestamp.millis(), nanos / 1_000_000);
            prop_assert!(timestamp.millis() <= 999);
            let expected = format!("2023-11-28 23:59:08:{}:{}", nanos / 1_000_000, nanos);
            prop_assert_eq!(timestamp.to_string(), expected);
        }
    }
}
