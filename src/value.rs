//! The two value sum types this codec speaks: [`Field`] for encode inputs
//! and [`Value`] for dynamic decode outputs.
//!
//! A single dynamically-typed value is introspected at encode time and
//! reconstructed by kind at decode time. Rust has no runtime type tag to
//! introspect, so the two directions are split into their own closed
//! enums: one for owned input, one for the decoded output.

use crate::number::WidenToF64;
use crate::timestamp::Timestamp;

/// A value to encode. Closed: every row of the wire-tag table has a
/// variant, plus the three sentinels that are not "values" in the usual
/// sense but still occupy a slot in an encoded key.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Field {
    /// Encodes as `NIL`.
    Null,
    /// Encodes as `VAL`, 1 byte (0x00/0x01).
    Bool(bool),
    /// Encodes as `NEG` or `POS` depending on sign, per `number.rs`.
    Number(f64),
    /// Encodes as `TME`, 8 bytes big-endian nanosecond count.
    Timestamp(Timestamp),
    /// Encodes as `STR` with 0x00 escaped, double-`END` terminated.
    Str(String),
    /// Same wire form as `Str`, for payloads that are not valid UTF-8.
    Bytes(Vec<u8>),
    /// Encodes as `ARR`, nested fields, `END` terminated.
    Array(Vec<Field>),
    /// The "lowest possible" sentinel (`PRE`, no payload).
    Prefix,
    /// The "highest possible" sentinel (`SUF`, no payload).
    Suffix,
    /// Skipped entirely: writes nothing to the output.
    Ignore,
}

macro_rules! impl_field_from_int {
    ($($t:ty),*) => {
        $(impl From<$t> for Field {
            fn from(v: $t) -> Field { Field::Number(v.widen()) }
        })*
    };
}
impl_field_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<bool> for Field {
    fn from(v: bool) -> Field {
        Field::Bool(v)
    }
}

impl From<&str> for Field {
    fn from(v: &str) -> Field {
        Field::Str(v.to_owned())
    }
}

impl From<String> for Field {
    fn from(v: String) -> Field {
        Field::Str(v)
    }
}

impl From<Timestamp> for Field {
    fn from(v: Timestamp) -> Field {
        Field::Timestamp(v)
    }
}

impl From<Vec<u8>> for Field {
    fn from(v: Vec<u8>) -> Field {
        Field::Bytes(v)
    }
}

/// A value recovered from a fully dynamic decode, where the tag byte alone
/// determines the Rust type on the other end.
///
/// Splits the numeric wire form into `Int`/`Float` per the dynamic-decode
/// rule: a decoded double that is exactly integral and fits in an `i64`
/// comes back as `Value::Int`, everything else as `Value::Float`.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Timestamp(Timestamp),
    Str(String),
    Bytes(Vec<u8>),
    Array(Vec<Value>),
    Prefix,
    Suffix,
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a.as_slice()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_primitives_widen_to_number() {
        let f: Field = 7i32.into();
        assert_eq!(f, Field::Number(7.0));
        let f: Field = 7u64.into();
        assert_eq!(f, Field::Number(7.0));
    }

    #[test]
    fn string_conversions() {
        let f: Field = "abc".into();
        assert_eq!(f, Field::Str("abc".to_owned()));
        let f: Field = String::from("abc").into();
        assert_eq!(f, Field::Str("abc".to_owned()));
    }

    #[test]
    fn value_accessors() {
        assert_eq!(Value::Int(5).as_f64(), Some(5.0));
        assert_eq!(Value::Float(5.5).as_f64(), Some(5.5));
        assert_eq!(Value::Null.as_f64(), None);
        assert_eq!(Value::Str("x".into()).as_str(), Some("x"));
    }

    #[test]
    fn field_round_trips_through_json() {
        let fields = vec![
            Field::Null,
            Field::Bool(true),
            Field::Number(-1.5),
            Field::Str("alice".to_owned()),
            Field::Array(vec![Field::Number(1.0), Field::Number(2.0)]),
            Field::Prefix,
            Field::Suffix,
            Field::Ignore,
        ];
        let json = serde_json::to_string(&fields).expect("serialize");
        let back: Vec<Field> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(fields, back);
    }

    #[test]
    fn value_round_trips_through_json() {
        let v = Value::Array(vec![Value::Int(1), Value::Str("x".into()), Value::Null]);
        let json = serde_json::to_string(&v).expect("serialize");
        let back: Value = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(v, back);
    }
}
