use super::Backing;
use crate::attribute::AttributeType;

/// Attribute storage as a plain Rust enum.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EnumBacking<'a> {
    /// No value.
    #[default]
    Empty,
    /// Boolean.
    Bool(bool),
    /// 32-bit signed integer.
    Int(i32),
    /// 64-bit signed integer.
    Int64(i64),
    /// 32-bit unsigned integer.
    UInt(u32),
    /// 64-bit unsigned integer.
    UInt64(u64),
    /// Double precision float.
    Double(f64),
    /// Borrowed text.
    Text(&'a str),
}

impl<'a> Backing<'a> for EnumBacking<'a> {
    fn empty() -> Self {
        Self::Empty
    }

    fn kind(&self) -> AttributeType {
        match self {
            Self::Empty => AttributeType::Unsupported,
            Self::Bool(_) => AttributeType::Bool,
            Self::Int(_) => AttributeType::Int,
            Self::Int64(_) => AttributeType::Int64,
            Self::UInt(_) => AttributeType::UInt,
            Self::UInt64(_) => AttributeType::UInt64,
            Self::Double(_) => AttributeType::Double,
            Self::Text(_) => AttributeType::String,
        }
    }

    fn from_bool(value: bool) -> Self {
        Self::Bool(value)
    }

    fn from_int(value: i32) -> Self {
        Self::Int(value)
    }

    fn from_int64(value: i64) -> Self {
        Self::Int64(value)
    }

    fn from_uint(value: u32) -> Self {
        Self::UInt(value)
    }

    fn from_uint64(value: u64) -> Self {
        Self::UInt64(value)
    }

    fn from_double(value: f64) -> Self {
        Self::Double(value)
    }

    fn from_text(value: &'a str) -> Self {
        Self::Text(value)
    }

    fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    fn as_int64(&self) -> Option<i64> {
        match self {
            Self::Int64(v) => Some(*v),
            _ => None,
        }
    }

    fn as_uint(&self) -> Option<u32> {
        match self {
            Self::UInt(v) => Some(*v),
            _ => None,
        }
    }

    fn as_uint64(&self) -> Option<u64> {
        match self {
            Self::UInt64(v) => Some(*v),
            _ => None,
        }
    }

    fn as_double(&self) -> Option<f64> {
        match self {
            Self::Double(v) => Some(*v),
            _ => None,
        }
    }

    fn as_text(&self) -> Option<&'a str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }
}
