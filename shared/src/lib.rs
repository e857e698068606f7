//! Logdoc Shared Library
//!
//! Attribute variants and structured log documents for a telemetry export
//! path.
//!
//! # Modules
//!
//! - [`variant`] - Closed sum-type access (`get`, `holds_alternative`, `index`, `visit`)
//! - [`attribute`] - Attribute values over seven scalar kinds
//! - [`severity`] - Severity numbers and their text labels
//! - [`trace`] - Trace id, span id, and trace flags
//! - [`timestamp`] - Epoch-relative timestamps
//! - [`document`] - Log document building
//!
//! # Example
//!
//! ```
//! use shared::attribute::AttributeValue;
//! use shared::document::{DocumentRecordable, Recordable};
//! use shared::severity::Severity;
//! use shared::trace::SpanId;
//!
//! let mut record = DocumentRecordable::new();
//! record.set_severity(Severity::Info);
//! record.set_body("User logged in");
//! record.set_attribute("user_id", AttributeValue::from(12345_i64));
//! record.set_span_id(SpanId::from_bytes([0xff; 8]));
//!
//! let doc = record.document();
//! assert_eq!(doc["severity"], "INFO");
//! assert_eq!(doc["attributes"]["user_id"], 12345);
//! assert_eq!(doc["spanid"], "ffffffffffffffff");
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod attribute;
pub mod document;
pub mod severity;
pub mod timestamp;
pub mod trace;
pub mod variant;

pub use attribute::{AttributeType, AttributeValue};
pub use document::{DocumentRecordable, Namespace, Recordable};
pub use severity::Severity;
pub use timestamp::SystemTimestamp;
pub use trace::{SpanId, TraceFlags, TraceId};
pub use variant::BadVariantAccess;

/// Re-export common dependencies for convenience.
pub use chrono;
pub use serde_json;
