#![no_main]
use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use ordkey::{encode, Field, Value};

/// Mirrors [`Field`]'s non-sentinel variants so `arbitrary` can derive
/// structured inputs directly, rather than mutating raw bytes through the
/// framing (which would reject almost everything at the tag byte).
#[derive(Arbitrary, Debug)]
enum FuzzField {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Array(Vec<FuzzLeaf>),
}

/// One level of array nesting is enough to exercise [`crate::Decoder::decode_array`]
/// without the input shrinking into an unbounded recursive structure.
#[derive(Arbitrary, Debug)]
enum FuzzLeaf {
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
}

impl From<FuzzLeaf> for Field {
    fn from(v: FuzzLeaf) -> Field {
        match v {
            FuzzLeaf::Null => Field::Null,
            FuzzLeaf::Bool(b) => Field::Bool(b),
            FuzzLeaf::Number(x) => Field::Number(x),
            FuzzLeaf::Str(s) => Field::Str(s),
        }
    }
}

impl From<FuzzField> for Field {
    fn from(v: FuzzField) -> Field {
        match v {
            FuzzField::Null => Field::Null,
            FuzzField::Bool(b) => Field::Bool(b),
            FuzzField::Number(x) => Field::Number(x),
            FuzzField::Str(s) => Field::Str(s),
            FuzzField::Array(items) => {
                Field::Array(items.into_iter().map(Field::from).collect())
            }
        }
    }
}

/// `-0.0`/`0.0` collapse to the same encoding and `NaN != NaN`, so a
/// plain `==` can't check a round trip; compare normalized bit patterns
/// instead.
fn bits_eq(a: f64, b: f64) -> bool {
    let norm = |x: f64| if x == 0.0 { 0.0f64.to_bits() } else { x.to_bits() };
    norm(a) == norm(b)
}

fuzz_target!(|fields: Vec<FuzzField>| {
    let fields: Vec<Field> = fields.into_iter().map(Field::from).collect();
    let bytes = encode(&fields);
    let decoded = ordkey::decode_record(&bytes);
    assert_eq!(decoded.len(), fields.len());

    for (input, got) in fields.iter().zip(decoded.iter()) {
        match (input, got) {
            (Field::Null, Value::Null) => {}
            (Field::Bool(a), Value::Bool(b)) => assert_eq!(a, b),
            (Field::Number(a), Value::Int(b)) => assert!(bits_eq(*a, *b as f64)),
            (Field::Number(a), Value::Float(b)) => assert!(bits_eq(*a, *b)),
            (Field::Str(a), Value::Str(b)) => assert_eq!(a, b),
            (Field::Array(_), Value::Array(_)) => {}
            (a, b) => panic!("kind mismatch: {a:?} decoded as {b:?}"),
        }
    }
});
