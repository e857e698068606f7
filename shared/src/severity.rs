//! Log severity numbers and their text labels.
//!
//! Severities follow the OpenTelemetry log data model: ordinals `1..=24` in six
//! bands of four, with `0` reserved for an unset/invalid severity. The labels
//! live in one process-wide table, [`SEVERITY_NUM_TO_TEXT`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Text label for every severity ordinal, indexed by the ordinal.
pub static SEVERITY_NUM_TO_TEXT: [&str; 25] = [
    "INVALID", "TRACE", "TRACE2", "TRACE3", "TRACE4", "DEBUG", "DEBUG2", "DEBUG3", "DEBUG4",
    "INFO", "INFO2", "INFO3", "INFO4", "WARN", "WARN2", "WARN3", "WARN4", "ERROR", "ERROR2",
    "ERROR3", "ERROR4", "FATAL", "FATAL2", "FATAL3", "FATAL4",
];

/// Severity of a log event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
#[allow(missing_docs)]
pub enum Severity {
    #[default]
    Invalid = 0,
    Trace = 1,
    Trace2 = 2,
    Trace3 = 3,
    Trace4 = 4,
    Debug = 5,
    Debug2 = 6,
    Debug3 = 7,
    Debug4 = 8,
    Info = 9,
    Info2 = 10,
    Info3 = 11,
    Info4 = 12,
    Warn = 13,
    Warn2 = 14,
    Warn3 = 15,
    Warn4 = 16,
    Error = 17,
    Error2 = 18,
    Error3 = 19,
    Error4 = 20,
    Fatal = 21,
    Fatal2 = 22,
    Fatal3 = 23,
    Fatal4 = 24,
}

const ALL: [Severity; 25] = [
    Severity::Invalid,
    Severity::Trace,
    Severity::Trace2,
    Severity::Trace3,
    Severity::Trace4,
    Severity::Debug,
    Severity::Debug2,
    Severity::Debug3,
    Severity::Debug4,
    Severity::Info,
    Severity::Info2,
    Severity::Info3,
    Severity::Info4,
    Severity::Warn,
    Severity::Warn2,
    Severity::Warn3,
    Severity::Warn4,
    Severity::Error,
    Severity::Error2,
    Severity::Error3,
    Severity::Error4,
    Severity::Fatal,
    Severity::Fatal2,
    Severity::Fatal3,
    Severity::Fatal4,
];

/// Error returned when a severity label is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown severity: {0}")]
pub struct SeverityParseError(String);

impl Severity {
    /// Maps a severity number to a severity.
    ///
    /// Numbers outside `0..=24` map to [`Severity::Invalid`].
    #[must_use]
    pub fn from_number(number: i32) -> Self {
        usize::try_from(number)
            .ok()
            .and_then(|i| ALL.get(i))
            .copied()
            .unwrap_or(Self::Invalid)
    }

    /// Returns the severity number.
    #[must_use]
    pub const fn number(self) -> u8 {
        self as u8
    }

    /// Returns the text label from [`SEVERITY_NUM_TO_TEXT`].
    #[must_use]
    pub fn as_str(self) -> &'static str {
        // Ordinals are 0..=24, the table has 25 entries.
        SEVERITY_NUM_TO_TEXT[usize::from(self.number())]
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Severity {
    type Err = SeverityParseError;

    /// Parses a label such as `INFO` or `warn3`, ignoring case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SEVERITY_NUM_TO_TEXT
            .iter()
            .position(|label| label.eq_ignore_ascii_case(s))
            .map(|i| ALL[i])
            .ok_or_else(|| SeverityParseError(s.to_string()))
    }
}

/// Returns the text label for a raw severity number.
///
/// Out-of-range numbers yield `"INVALID"` instead of indexing past the table.
#[must_use]
pub fn severity_text(number: i32) -> &'static str {
    Severity::from_number(number).as_str()
}
