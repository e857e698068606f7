//! JSON-document implementation of [`Recordable`].

use super::{fields, Namespace, Recordable};
use crate::attribute::{AttributeType, AttributeValue};
use crate::severity::Severity;
use crate::timestamp::SystemTimestamp;
use crate::trace::{SpanId, TraceFlags, TraceId};
use crate::variant::{BadVariantAccess, Variant};
use serde_json::{Map, Value};

/// Accumulates one log event into a JSON document.
///
/// # Example
///
/// ```
/// use shared::attribute::AttributeValue;
/// use shared::document::{DocumentRecordable, Recordable};
/// use shared::severity::Severity;
/// use shared::trace::TraceFlags;
///
/// let mut record = DocumentRecordable::new();
/// record.set_severity(Severity::Warn);
/// record.set_body("disk almost full");
/// record.set_attribute("disk.used_pct", AttributeValue::from(93_u32));
/// record.set_trace_flags(TraceFlags::SAMPLED);
///
/// assert_eq!(
///     record.document(),
///     serde_json::json!({
///         "severity": "WARN",
///         "body": "disk almost full",
///         "attributes": { "disk.used_pct": 93 },
///         "traceflags": "01"
///     })
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct DocumentRecordable {
    json: Map<String, Value>,
}

impl DocumentRecordable {
    /// Creates an empty document.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a copy of the document accumulated so far.
    ///
    /// The builder is left untouched and can keep receiving fields.
    #[must_use]
    pub fn document(&self) -> Value {
        Value::Object(self.json.clone())
    }

    /// Consumes the builder and returns the document without copying it.
    #[must_use]
    pub fn into_document(self) -> Value {
        Value::Object(self.json)
    }

    fn write_key_value(&mut self, namespace: Namespace, key: &str, value: AttributeValue<'_>) {
        let Some(converted) = Self::convert(value) else {
            tracing::debug!(
                namespace = namespace.as_str(),
                key,
                "Dropping attribute of unsupported kind"
            );
            return;
        };

        let slot = self
            .json
            .entry(namespace.as_str())
            .or_insert_with(|| Value::Object(Map::new()));
        if !slot.is_object() {
            *slot = Value::Object(Map::new());
        }
        if let Value::Object(map) = slot {
            map.insert(key.to_string(), converted);
        }
    }

    /// Converts an attribute value into a JSON scalar, or `None` for
    /// unsupported kinds.
    fn convert(value: AttributeValue<'_>) -> Option<Value> {
        let converted: Result<Value, BadVariantAccess> = match value.index() {
            AttributeType::Bool => value.get::<bool>().map(Value::Bool),
            AttributeType::Int => value.get::<i32>().map(Value::from),
            AttributeType::Int64 => value.get::<i64>().map(Value::from),
            AttributeType::UInt => value.get::<u32>().map(Value::from),
            AttributeType::UInt64 => value.get::<u64>().map(Value::from),
            // Non-finite doubles have no JSON number form and become null.
            AttributeType::Double => value.get::<f64>().map(Value::from),
            AttributeType::String => value
                .get::<&str>()
                .map(|text| Value::String(text.to_string())),
            AttributeType::Unsupported => return None,
        };

        match converted {
            Ok(json) => Some(json),
            Err(err) => {
                tracing::debug!(error = %err, "Attribute kind changed during conversion");
                None
            }
        }
    }
}

impl Recordable for DocumentRecordable {
    fn set_severity(&mut self, severity: Severity) {
        self.json
            .insert(fields::SEVERITY.to_string(), Value::from(severity.as_str()));
    }

    fn set_name(&mut self, name: &str) {
        self.json
            .insert(fields::NAME.to_string(), Value::from(name));
    }

    fn set_body(&mut self, body: &str) {
        self.json
            .insert(fields::BODY.to_string(), Value::from(body));
    }

    fn set_resource(&mut self, key: &str, value: AttributeValue<'_>) {
        self.write_key_value(Namespace::Resource, key, value);
    }

    fn set_attribute(&mut self, key: &str, value: AttributeValue<'_>) {
        self.write_key_value(Namespace::Attributes, key, value);
    }

    fn set_trace_id(&mut self, trace_id: TraceId) {
        self.json.insert(
            fields::TRACE_ID.to_string(),
            Value::String(trace_id.to_lower_base16()),
        );
    }

    fn set_span_id(&mut self, span_id: SpanId) {
        self.json.insert(
            fields::SPAN_ID.to_string(),
            Value::String(span_id.to_lower_base16()),
        );
    }

    fn set_trace_flags(&mut self, trace_flags: TraceFlags) {
        self.json.insert(
            fields::TRACE_FLAGS.to_string(),
            Value::String(trace_flags.to_lower_base16()),
        );
    }

    fn set_timestamp(&mut self, timestamp: SystemTimestamp) {
        self.json.insert(
            fields::TIMESTAMP.to_string(),
            Value::from(timestamp.as_nanos()),
        );
    }
}

#[cfg(test)]
#[path = "recordable_test.rs"]
mod recordable_test;
