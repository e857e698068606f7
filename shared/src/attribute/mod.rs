//! Attribute values.
//!
//! An [`AttributeValue`] is a [`Variant`] over the seven scalar kinds used for
//! telemetry attributes and resources. Text is a borrowed view: the value never
//! copies the bytes, so it cannot outlive the caller's buffer.
//!
//! # Example
//!
//! ```
//! use shared::attribute::{AttributeType, AttributeValue};
//!
//! let name = String::from("checkout");
//! let mut value = AttributeValue::from(name.as_str());
//! assert_eq!(value.kind(), AttributeType::String);
//! assert_eq!(value.get::<&str>().unwrap(), "checkout");
//!
//! value.set(3_u32);
//! assert!(value.holds::<u32>());
//! ```

pub mod backing;

use crate::variant::{self, Alternative, BadVariantAccess, Variant, Visit};
use backing::{ActiveBacking, Backing};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;

/// Kind of an attribute value.
///
/// The ordinals are stable and match the order of the supported kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum AttributeType {
    /// Boolean.
    Bool = 0,
    /// 32-bit signed integer.
    Int = 1,
    /// 64-bit signed integer.
    Int64 = 2,
    /// 32-bit unsigned integer.
    UInt = 3,
    /// 64-bit unsigned integer.
    UInt64 = 4,
    /// Double precision float.
    Double = 5,
    /// Text.
    String = 6,
    /// Anything outside the supported kinds, including the empty value.
    Unsupported = 7,
}

impl AttributeType {
    /// Returns the stable ordinal of this kind.
    #[must_use]
    pub const fn ordinal(self) -> u8 {
        self as u8
    }

    /// Returns the lowercase name of this kind.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Int64 => "int64",
            Self::UInt => "uint",
            Self::UInt64 => "uint64",
            Self::Double => "double",
            Self::String => "string",
            Self::Unsupported => "unsupported",
        }
    }

    /// Returns `false` only for [`AttributeType::Unsupported`].
    #[must_use]
    pub const fn is_supported(self) -> bool {
        !matches!(self, Self::Unsupported)
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An attribute value stored with backing `B`.
///
/// Most code should use the [`AttributeValue`] alias, which picks the backing
/// configured for this build.
#[derive(Clone, Copy)]
pub struct AttributeValueIn<'a, B: Backing<'a>> {
    repr: B,
    text: PhantomData<&'a str>,
}

/// An attribute value using the backing selected for this build.
pub type AttributeValue<'a> = AttributeValueIn<'a, ActiveBacking<'a>>;

/// Visitor over every kind an attribute value can hold.
///
/// All methods are required, so a visitor is always total.
pub trait AttributeVisitor<'a> {
    /// Result of the visit.
    type Output;

    /// Visits a boolean.
    fn visit_bool(self, value: bool) -> Self::Output;
    /// Visits a 32-bit signed integer.
    fn visit_int(self, value: i32) -> Self::Output;
    /// Visits a 64-bit signed integer.
    fn visit_int64(self, value: i64) -> Self::Output;
    /// Visits a 32-bit unsigned integer.
    fn visit_uint(self, value: u32) -> Self::Output;
    /// Visits a 64-bit unsigned integer.
    fn visit_uint64(self, value: u64) -> Self::Output;
    /// Visits a double.
    fn visit_double(self, value: f64) -> Self::Output;
    /// Visits borrowed text.
    fn visit_str(self, value: &'a str) -> Self::Output;
    /// Visits the empty value.
    fn visit_unsupported(self) -> Self::Output;
}

impl<'a, B: Backing<'a>> AttributeValueIn<'a, B> {
    fn from_repr(repr: B) -> Self {
        Self {
            repr,
            text: PhantomData,
        }
    }

    /// Creates the empty value, which reports [`AttributeType::Unsupported`].
    #[must_use]
    pub fn empty() -> Self {
        Self::from_repr(B::empty())
    }

    /// Classifies `text` into the narrowest matching kind.
    ///
    /// `true`/`false` become booleans, integers become `Int64` (or `UInt64`
    /// when too large for `i64`), finite floats become doubles, and anything
    /// else stays text borrowed from `text`.
    ///
    /// # Example
    ///
    /// ```
    /// use shared::attribute::{AttributeType, AttributeValue};
    ///
    /// assert_eq!(AttributeValue::parse("true").kind(), AttributeType::Bool);
    /// assert_eq!(AttributeValue::parse("-12").kind(), AttributeType::Int64);
    /// assert_eq!(AttributeValue::parse("18446744073709551615").kind(), AttributeType::UInt64);
    /// assert_eq!(AttributeValue::parse("0.5").kind(), AttributeType::Double);
    /// assert_eq!(AttributeValue::parse("eu-west-1").kind(), AttributeType::String);
    /// ```
    #[must_use]
    pub fn parse(text: &'a str) -> Self {
        match text {
            "true" => return Self::from(true),
            "false" => return Self::from(false),
            _ => {}
        }
        if let Ok(value) = text.parse::<i64>() {
            return Self::from(value);
        }
        if let Ok(value) = text.parse::<u64>() {
            return Self::from(value);
        }
        match text.parse::<f64>() {
            Ok(value) if value.is_finite() => Self::from(value),
            _ => Self::from(text),
        }
    }

    /// Returns the active kind.
    #[must_use]
    pub fn kind(&self) -> AttributeType {
        self.repr.kind()
    }

    /// Returns `true` for the empty value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.kind().is_supported()
    }

    /// Returns `true` if `T` is the active kind.
    #[must_use]
    pub fn holds<T: Alternative<Self>>(&self) -> bool {
        variant::holds_alternative::<T, Self>(self)
    }

    /// Reads the payload as `T`.
    ///
    /// # Errors
    ///
    /// Returns [`BadVariantAccess`] if `T` is not the active kind.
    pub fn get<T: Alternative<Self>>(&self) -> Result<T, BadVariantAccess> {
        variant::get::<T, Self>(self)
    }

    /// Replaces the payload, possibly with a different kind.
    pub fn set(&mut self, value: impl Into<Self>) {
        *self = value.into();
    }

    /// Calls the visitor method for the active kind.
    pub fn visit<F: AttributeVisitor<'a>>(&self, visitor: F) -> F::Output {
        self.visit_with(visitor)
    }
}

impl<'a, B: Backing<'a>> Default for AttributeValueIn<'a, B> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, B: Backing<'a>> Variant for AttributeValueIn<'a, B> {
    type Kind = AttributeType;

    fn index(&self) -> AttributeType {
        self.kind()
    }

    fn kind_name(&self) -> &'static str {
        self.kind().name()
    }
}

impl<'a, B: Backing<'a>, F: AttributeVisitor<'a>> Visit<F> for AttributeValueIn<'a, B> {
    type Output = F::Output;

    fn visit_with(&self, visitor: F) -> F::Output {
        let repr = &self.repr;
        if let Some(v) = repr.as_bool() {
            visitor.visit_bool(v)
        } else if let Some(v) = repr.as_int() {
            visitor.visit_int(v)
        } else if let Some(v) = repr.as_int64() {
            visitor.visit_int64(v)
        } else if let Some(v) = repr.as_uint() {
            visitor.visit_uint(v)
        } else if let Some(v) = repr.as_uint64() {
            visitor.visit_uint64(v)
        } else if let Some(v) = repr.as_double() {
            visitor.visit_double(v)
        } else if let Some(v) = repr.as_text() {
            visitor.visit_str(v)
        } else {
            visitor.visit_unsupported()
        }
    }
}

macro_rules! scalar_alternative {
    ($ty:ty, $kind:ident, $from:ident, $as:ident) => {
        impl<'a, B: Backing<'a>> Alternative<AttributeValueIn<'a, B>> for $ty {
            const KIND: AttributeType = AttributeType::$kind;
            const NAME: &'static str = AttributeType::$kind.name();

            fn extract(variant: &AttributeValueIn<'a, B>) -> Option<Self> {
                variant.repr.$as()
            }
        }

        impl<'a, B: Backing<'a>> From<$ty> for AttributeValueIn<'a, B> {
            fn from(value: $ty) -> Self {
                Self::from_repr(B::$from(value))
            }
        }
    };
}

scalar_alternative!(bool, Bool, from_bool, as_bool);
scalar_alternative!(i32, Int, from_int, as_int);
scalar_alternative!(i64, Int64, from_int64, as_int64);
scalar_alternative!(u32, UInt, from_uint, as_uint);
scalar_alternative!(u64, UInt64, from_uint64, as_uint64);
scalar_alternative!(f64, Double, from_double, as_double);

impl<'a, B: Backing<'a>> Alternative<AttributeValueIn<'a, B>> for &'a str {
    const KIND: AttributeType = AttributeType::String;
    const NAME: &'static str = AttributeType::String.name();

    fn extract(variant: &AttributeValueIn<'a, B>) -> Option<Self> {
        variant.repr.as_text()
    }
}

impl<'a, B: Backing<'a>> From<&'a str> for AttributeValueIn<'a, B> {
    fn from(value: &'a str) -> Self {
        Self::from_repr(B::from_text(value))
    }
}

impl<'a, B: Backing<'a>> PartialEq for AttributeValueIn<'a, B> {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (&self.repr, &other.repr);
        match self.kind() {
            _ if self.kind() != other.kind() => false,
            AttributeType::Bool => a.as_bool() == b.as_bool(),
            AttributeType::Int => a.as_int() == b.as_int(),
            AttributeType::Int64 => a.as_int64() == b.as_int64(),
            AttributeType::UInt => a.as_uint() == b.as_uint(),
            AttributeType::UInt64 => a.as_uint64() == b.as_uint64(),
            AttributeType::Double => a.as_double() == b.as_double(),
            AttributeType::String => a.as_text() == b.as_text(),
            AttributeType::Unsupported => true,
        }
    }
}

struct DebugVisitor<'f, 'g>(&'f mut fmt::Formatter<'g>);

impl<'a> AttributeVisitor<'a> for DebugVisitor<'_, '_> {
    type Output = fmt::Result;

    fn visit_bool(self, value: bool) -> fmt::Result {
        self.0.debug_tuple("Bool").field(&value).finish()
    }

    fn visit_int(self, value: i32) -> fmt::Result {
        self.0.debug_tuple("Int").field(&value).finish()
    }

    fn visit_int64(self, value: i64) -> fmt::Result {
        self.0.debug_tuple("Int64").field(&value).finish()
    }

    fn visit_uint(self, value: u32) -> fmt::Result {
        self.0.debug_tuple("UInt").field(&value).finish()
    }

    fn visit_uint64(self, value: u64) -> fmt::Result {
        self.0.debug_tuple("UInt64").field(&value).finish()
    }

    fn visit_double(self, value: f64) -> fmt::Result {
        self.0.debug_tuple("Double").field(&value).finish()
    }

    fn visit_str(self, value: &'a str) -> fmt::Result {
        self.0.debug_tuple("String").field(&value).finish()
    }

    fn visit_unsupported(self) -> fmt::Result {
        self.0.write_str("Unsupported")
    }
}

impl<'a, B: Backing<'a>> fmt::Debug for AttributeValueIn<'a, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.visit(DebugVisitor(f))
    }
}

struct SerializeVisitor<S>(S);

impl<'a, S: Serializer> AttributeVisitor<'a> for SerializeVisitor<S> {
    type Output = Result<S::Ok, S::Error>;

    fn visit_bool(self, value: bool) -> Self::Output {
        self.0.serialize_bool(value)
    }

    fn visit_int(self, value: i32) -> Self::Output {
        self.0.serialize_i32(value)
    }

    fn visit_int64(self, value: i64) -> Self::Output {
        self.0.serialize_i64(value)
    }

    fn visit_uint(self, value: u32) -> Self::Output {
        self.0.serialize_u32(value)
    }

    fn visit_uint64(self, value: u64) -> Self::Output {
        self.0.serialize_u64(value)
    }

    fn visit_double(self, value: f64) -> Self::Output {
        self.0.serialize_f64(value)
    }

    fn visit_str(self, value: &'a str) -> Self::Output {
        self.0.serialize_str(value)
    }

    fn visit_unsupported(self) -> Self::Output {
        self.0.serialize_unit()
    }
}

impl<'a, B: Backing<'a>> Serialize for AttributeValueIn<'a, B> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.visit(SerializeVisitor(serializer))
    }
}
