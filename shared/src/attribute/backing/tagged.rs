use super::Backing;
use crate::attribute::AttributeType;

/// Attribute storage as a kind tag plus one 64-bit payload word.
///
/// Scalars are packed into `word` (signed integers by two's complement,
/// doubles by their IEEE-754 bits). Text lives in its own borrowed slot.
#[derive(Debug, Clone, Copy)]
pub struct TaggedBacking<'a> {
    tag: AttributeType,
    word: u64,
    text: &'a str,
}

impl TaggedBacking<'_> {
    const fn with_word(tag: AttributeType, word: u64) -> Self {
        Self {
            tag,
            word,
            text: "",
        }
    }

    fn word_if(&self, tag: AttributeType) -> Option<u64> {
        (self.tag == tag).then_some(self.word)
    }
}

fn signed_to_word(value: i64) -> u64 {
    u64::from_ne_bytes(value.to_ne_bytes())
}

fn word_to_signed(word: u64) -> i64 {
    i64::from_ne_bytes(word.to_ne_bytes())
}

impl Default for TaggedBacking<'_> {
    fn default() -> Self {
        Self::with_word(AttributeType::Unsupported, 0)
    }
}

impl<'a> Backing<'a> for TaggedBacking<'a> {
    fn empty() -> Self {
        Self::default()
    }

    fn kind(&self) -> AttributeType {
        self.tag
    }

    fn from_bool(value: bool) -> Self {
        Self::with_word(AttributeType::Bool, u64::from(value))
    }

    fn from_int(value: i32) -> Self {
        Self::with_word(AttributeType::Int, signed_to_word(i64::from(value)))
    }

    fn from_int64(value: i64) -> Self {
        Self::with_word(AttributeType::Int64, signed_to_word(value))
    }

    fn from_uint(value: u32) -> Self {
        Self::with_word(AttributeType::UInt, u64::from(value))
    }

    fn from_uint64(value: u64) -> Self {
        Self::with_word(AttributeType::UInt64, value)
    }

    fn from_double(value: f64) -> Self {
        Self::with_word(AttributeType::Double, value.to_bits())
    }

    fn from_text(value: &'a str) -> Self {
        Self {
            tag: AttributeType::String,
            word: 0,
            text: value,
        }
    }

    fn as_bool(&self) -> Option<bool> {
        self.word_if(AttributeType::Bool).map(|w| w != 0)
    }

    fn as_int(&self) -> Option<i32> {
        self.word_if(AttributeType::Int)
            .and_then(|w| i32::try_from(word_to_signed(w)).ok())
    }

    fn as_int64(&self) -> Option<i64> {
        self.word_if(AttributeType::Int64).map(word_to_signed)
    }

    fn as_uint(&self) -> Option<u32> {
        self.word_if(AttributeType::UInt)
            .and_then(|w| u32::try_from(w).ok())
    }

    fn as_uint64(&self) -> Option<u64> {
        self.word_if(AttributeType::UInt64)
    }

    fn as_double(&self) -> Option<f64> {
        self.word_if(AttributeType::Double).map(f64::from_bits)
    }

    fn as_text(&self) -> Option<&'a str> {
        (self.tag == AttributeType::String).then_some(self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signed_word_roundtrip_extremes() {
        for value in [i64::MIN, -1, 0, 1, i64::MAX] {
            assert_eq!(word_to_signed(signed_to_word(value)), value);
        }
    }

    #[test]
    fn test_negative_int_unpacks_to_same_value() {
        let value = TaggedBacking::from_int(i32::MIN);
        assert_eq!(value.as_int(), Some(i32::MIN));
    }

    #[test]
    fn test_double_keeps_bit_pattern() {
        let value = TaggedBacking::from_double(f64::NAN);
        assert!(value.as_double().unwrap().is_nan());

        let value = TaggedBacking::from_double(-0.0);
        assert!(value.as_double().unwrap().is_sign_negative());
    }
}
