//! Structured log documents.
//!
//! A [`Recordable`] receives the canonical fields of one log event.
//! [`DocumentRecordable`] accumulates them into a JSON document shaped for a
//! search/indexing backend:
//!
//! | Key | JSON type | Encoding |
//! |---|---|---|
//! | `severity` | string | label from [`SEVERITY_NUM_TO_TEXT`](crate::severity::SEVERITY_NUM_TO_TEXT) |
//! | `name` | string | verbatim |
//! | `body` | string | verbatim |
//! | `traceid` | string | 32 lowercase hex chars |
//! | `spanid` | string | 16 lowercase hex chars |
//! | `traceflags` | string | 2 lowercase hex chars |
//! | `timestamp` | integer | nanoseconds since the Unix epoch |
//! | `attributes` | object | key to scalar |
//! | `resource` | object | key to scalar |
//!
//! Keys that were never set are absent.

mod recordable;

pub use recordable::DocumentRecordable;

use crate::attribute::AttributeValue;
use crate::severity::Severity;
use crate::timestamp::SystemTimestamp;
use crate::trace::{SpanId, TraceFlags, TraceId};

/// Top-level field names of a log document.
pub mod fields {
    /// Severity label.
    pub const SEVERITY: &str = "severity";
    /// Event name.
    pub const NAME: &str = "name";
    /// Event body.
    pub const BODY: &str = "body";
    /// Trace id in hex.
    pub const TRACE_ID: &str = "traceid";
    /// Span id in hex.
    pub const SPAN_ID: &str = "spanid";
    /// Trace flags in hex.
    pub const TRACE_FLAGS: &str = "traceflags";
    /// Nanoseconds since the epoch.
    pub const TIMESTAMP: &str = "timestamp";
    /// Event attributes object.
    pub const ATTRIBUTES: &str = "attributes";
    /// Resource attributes object.
    pub const RESOURCE: &str = "resource";
}

/// Sub-object of the document that holds key/value pairs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Namespace {
    /// Attributes of the event itself.
    Attributes,
    /// Attributes describing the emitting resource.
    Resource,
}

impl Namespace {
    /// Returns the document key of this namespace.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Attributes => fields::ATTRIBUTES,
            Self::Resource => fields::RESOURCE,
        }
    }
}

/// Sink for the fields of a single log event.
///
/// Setters may be called in any order and any number of times; a later call
/// for the same field replaces the earlier value. None of them fail.
pub trait Recordable {
    /// Sets the severity.
    fn set_severity(&mut self, severity: Severity);

    /// Sets the event name.
    fn set_name(&mut self, name: &str);

    /// Sets the event body.
    fn set_body(&mut self, body: &str);

    /// Sets a resource attribute.
    fn set_resource(&mut self, key: &str, value: AttributeValue<'_>);

    /// Sets an event attribute.
    fn set_attribute(&mut self, key: &str, value: AttributeValue<'_>);

    /// Sets the trace id.
    fn set_trace_id(&mut self, trace_id: TraceId);

    /// Sets the span id.
    fn set_span_id(&mut self, span_id: SpanId);

    /// Sets the trace flags.
    fn set_trace_flags(&mut self, trace_flags: TraceFlags);

    /// Sets the event timestamp.
    fn set_timestamp(&mut self, timestamp: SystemTimestamp);
}
