//! Storage strategies for attribute values.
//!
//! Every strategy implements [`Backing`] and must be indistinguishable to
//! callers of [`AttributeValue`](super::AttributeValue). Exactly one of them is
//! used per build, picked by the `tagged-variant` cargo feature:
//!
//! - [`EnumBacking`] - a native Rust enum (default).
//! - [`TaggedBacking`] - a kind tag next to a single 64-bit payload word.

mod native;
mod tagged;

pub use native::EnumBacking;
pub use tagged::TaggedBacking;

use super::AttributeType;

/// Backing selected for this build.
#[cfg(not(feature = "tagged-variant"))]
pub type ActiveBacking<'a> = EnumBacking<'a>;

/// Backing selected for this build.
#[cfg(feature = "tagged-variant")]
pub type ActiveBacking<'a> = TaggedBacking<'a>;

/// Storage for one attribute payload.
///
/// Text is held as a borrowed `&'a str`; a backing never copies text bytes.
/// Each `as_*` accessor returns `Some` only while its kind is active.
pub trait Backing<'a>: Copy {
    /// The "no value" state. Reports [`AttributeType::Unsupported`].
    fn empty() -> Self;

    /// The active kind.
    fn kind(&self) -> AttributeType;

    /// Stores a boolean.
    fn from_bool(value: bool) -> Self;
    /// Stores a 32-bit signed integer.
    fn from_int(value: i32) -> Self;
    /// Stores a 64-bit signed integer.
    fn from_int64(value: i64) -> Self;
    /// Stores a 32-bit unsigned integer.
    fn from_uint(value: u32) -> Self;
    /// Stores a 64-bit unsigned integer.
    fn from_uint64(value: u64) -> Self;
    /// Stores a double.
    fn from_double(value: f64) -> Self;
    /// Stores a borrowed text view.
    fn from_text(value: &'a str) -> Self;

    /// Reads a boolean.
    fn as_bool(&self) -> Option<bool>;
    /// Reads a 32-bit signed integer.
    fn as_int(&self) -> Option<i32>;
    /// Reads a 64-bit signed integer.
    fn as_int64(&self) -> Option<i64>;
    /// Reads a 32-bit unsigned integer.
    fn as_uint(&self) -> Option<u32>;
    /// Reads a 64-bit unsigned integer.
    fn as_uint64(&self) -> Option<u64>;
    /// Reads a double.
    fn as_double(&self) -> Option<f64>;
    /// Reads the borrowed text view.
    fn as_text(&self) -> Option<&'a str>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check_backing<'a, B: Backing<'a>>(text: &'a str) {
        assert_eq!(B::empty().kind(), AttributeType::Unsupported);

        let value = B::from_bool(true);
        assert_eq!(value.kind(), AttributeType::Bool);
        assert_eq!(value.as_bool(), Some(true));
        assert_eq!(value.as_int(), None);

        let value = B::from_int(-5);
        assert_eq!(value.kind(), AttributeType::Int);
        assert_eq!(value.as_int(), Some(-5));
        assert_eq!(value.as_int64(), None);

        let value = B::from_int64(i64::MIN);
        assert_eq!(value.as_int64(), Some(i64::MIN));
        assert_eq!(value.as_uint64(), None);

        let value = B::from_uint(u32::MAX);
        assert_eq!(value.as_uint(), Some(u32::MAX));
        assert_eq!(value.as_int(), None);

        let value = B::from_uint64(u64::MAX);
        assert_eq!(value.as_uint64(), Some(u64::MAX));
        assert_eq!(value.as_int64(), None);

        let value = B::from_double(-0.25);
        assert_eq!(value.kind(), AttributeType::Double);
        assert_eq!(value.as_double(), Some(-0.25));

        let value = B::from_text(text);
        assert_eq!(value.kind(), AttributeType::String);
        assert!(std::ptr::eq(value.as_text().unwrap(), text));
        assert_eq!(value.as_bool(), None);
    }

    #[test]
    fn test_enum_backing() {
        check_backing::<EnumBacking<'_>>("checkout");
    }

    #[test]
    fn test_tagged_backing() {
        check_backing::<TaggedBacking<'_>>("checkout");
    }
}
