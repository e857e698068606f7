//! Wall-clock timestamps for log records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// A point in time as nanoseconds since the Unix epoch.
///
/// Conversions from `chrono` and `std` saturate at the `i64` range
/// (years 1677 through 2262). Serializes as the bare nanosecond count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SystemTimestamp(i64);

impl SystemTimestamp {
    /// Creates a timestamp from nanoseconds since the epoch.
    #[must_use]
    pub const fn from_nanos(nanos: i64) -> Self {
        Self(nanos)
    }

    /// Returns the current time.
    #[must_use]
    pub fn now() -> Self {
        Utc::now().into()
    }

    /// Returns nanoseconds since the epoch.
    #[must_use]
    pub const fn as_nanos(self) -> i64 {
        self.0
    }
}

impl From<DateTime<Utc>> for SystemTimestamp {
    fn from(time: DateTime<Utc>) -> Self {
        let saturated = if time.timestamp() < 0 {
            i64::MIN
        } else {
            i64::MAX
        };
        Self(time.timestamp_nanos_opt().unwrap_or(saturated))
    }
}

impl From<SystemTime> for SystemTimestamp {
    fn from(time: SystemTime) -> Self {
        DateTime::<Utc>::from(time).into()
    }
}

impl From<SystemTimestamp> for DateTime<Utc> {
    fn from(timestamp: SystemTimestamp) -> Self {
        DateTime::from_timestamp_nanos(timestamp.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, TimeZone};
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_from_system_time() {
        let time = UNIX_EPOCH + Duration::from_nanos(1_700_000_000_123_456_789);
        assert_eq!(
            SystemTimestamp::from(time).as_nanos(),
            1_700_000_000_123_456_789
        );
    }

    #[test]
    fn test_before_epoch_is_negative() {
        let time = UNIX_EPOCH - Duration::from_secs(1);
        assert_eq!(SystemTimestamp::from(time).as_nanos(), -1_000_000_000);
    }

    #[test]
    fn test_chrono_roundtrip() {
        let time = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        let back: DateTime<Utc> = SystemTimestamp::from(time).into();
        assert_eq!(back, time);
        assert_eq!(back.year(), 2024);
    }

    #[test]
    fn test_serializes_as_nanos() {
        let timestamp = SystemTimestamp::from_nanos(1_700_000_000_000_000_001);
        assert_eq!(
            serde_json::to_value(timestamp).unwrap(),
            serde_json::json!(1_700_000_000_000_000_001_i64)
        );

        let back: SystemTimestamp = serde_json::from_str("-5").unwrap();
        assert_eq!(back, SystemTimestamp::from_nanos(-5));
    }

    #[test]
    fn test_out_of_range_saturates() {
        let far = Utc.with_ymd_and_hms(3000, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(SystemTimestamp::from(far).as_nanos(), i64::MAX);

        let early = Utc.with_ymd_and_hms(1500, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(SystemTimestamp::from(early).as_nanos(), i64::MIN);
    }
}
