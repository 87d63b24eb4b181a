//! Value encoder/decoder: dispatches on value kind to emit or recover the
//! byte forms of the wire format, one field at a time with no inter-field
//! delimiter (each field's own framing is sufficient).

use bytes::BufMut;

use crate::marker::Tag;
use crate::number;
use crate::reader::Reader;
use crate::timestamp::Timestamp;
use crate::value::{Field, Value};
use crate::writer::Writer;

/// Encode a sequence of fields into a freshly allocated buffer.
pub fn encode(fields: &[Field]) -> Vec<u8> {
    let mut buf = Vec::new();
    encode_into(&mut buf, fields);
    buf
}

/// Encode a sequence of fields, appending to an existing buffer. Generic
/// over any [`BufMut`] sink — a plain `Vec<u8>` or a pooled
/// `bytes::BytesMut` both work — so a buffer checked out of [`crate::Pool`]
/// can be encoded into directly.
pub fn encode_into<B: BufMut>(buf: &mut B, fields: &[Field]) {
    let mut w = Writer::new(buf);
    for field in fields {
        encode_field(&mut w, field);
    }
}

fn encode_field<B: BufMut>(w: &mut Writer<'_, B>, field: &Field) {
    match field {
        Field::Ignore => {}
        Field::Null => {
            w.write_tag(Tag::Nil);
            w.write_tag(Tag::End);
        }
        Field::Bool(b) => {
            w.write_tag(Tag::Val);
            if *b {
                w.write_tag(Tag::Val);
            }
            w.write_tag(Tag::End);
        }
        Field::Number(x) => w.write_float(*x),
        Field::Timestamp(t) => {
            w.write_tag(Tag::Time);
            w.write_time(*t);
            w.write_tag(Tag::End);
        }
        Field::Str(s) => encode_str_payload(w, s.as_bytes()),
        Field::Bytes(b) => encode_str_payload(w, b),
        Field::Array(items) => {
            w.write_tag(Tag::Arr);
            for item in items {
                encode_field(w, item);
            }
            w.write_tag(Tag::End);
        }
        Field::Prefix => {
            w.write_tag(Tag::Prefix);
            w.write_tag(Tag::End);
        }
        Field::Suffix => {
            w.write_tag(Tag::Suffix);
            w.write_tag(Tag::End);
        }
    }
}

fn encode_str_payload<B: BufMut>(w: &mut Writer<'_, B>, payload: &[u8]) {
    w.write_tag(Tag::Str);
    w.write_str_raw(&escape(payload));
    w.write_tag(Tag::End);
    w.write_tag(Tag::End);
}

/// Escape `0x00` as `0x00 0xFF` so an embedded terminator byte cannot be
/// mistaken for the double-`END` framing terminator.
fn escape(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len());
    for &b in payload {
        out.push(b);
        if b == 0x00 {
            out.push(0xFF);
        }
    }
    out
}

fn unescape(payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len());
    let mut i = 0;
    while i < payload.len() {
        let b = payload[i];
        out.push(b);
        if b == 0x00 && payload.get(i + 1) == Some(&0xFF) {
            i += 2;
        } else {
            i += 1;
        }
    }
    out
}

/// A decode cursor over an encoded byte string, with one method per
/// recognised fixed-type target plus [`Decoder::decode_value`] for the
/// fully dynamic case. Mirrors `Decode(bytes, targets…)`'s variadic shape
/// as a sequence of method calls on one decoder.
pub struct Decoder<'a> {
    reader: Reader<'a>,
}

impl<'a> Decoder<'a> {
    pub fn new(bytes: &'a [u8]) -> Decoder<'a> {
        Decoder {
            reader: Reader::new(bytes),
        }
    }

    /// `true` once every byte has been consumed.
    pub fn is_empty(&self) -> bool {
        self.reader.is_empty()
    }

    /// Decode a field known to be a null. Tag mismatch consumes no bytes.
    pub fn decode_null(&mut self) {
        if self.reader.peek() == Tag::Nil.into_u8() {
            self.reader.read_next(Tag::Nil.into_u8());
            self.reader.read_next(Tag::End.into_u8());
        }
    }

    /// Decode a field known to be a boolean. Tag mismatch returns `false`
    /// and consumes no bytes.
    pub fn decode_bool(&mut self) -> bool {
        if self.reader.peek() != Tag::Val.into_u8() {
            return false;
        }
        self.reader.read_next(Tag::Val.into_u8());
        let is_true = self.reader.read_next(Tag::Val.into_u8());
        self.reader.read_next(Tag::End.into_u8());
        is_true
    }

    /// Decode a field known to be numeric, as the unified `f64`. Tag
    /// mismatch returns `0.0` and consumes no bytes.
    pub fn decode_number(&mut self) -> f64 {
        let peeked = self.reader.peek();
        if peeked == Tag::Neg.into_u8() {
            self.reader.read_next(Tag::Neg.into_u8());
            let bits = self.reader.read_u64();
            self.reader.read_next(Tag::End.into_u8());
            number::from_neg_bits(bits)
        } else if peeked == Tag::Pos.into_u8() {
            self.reader.read_next(Tag::Pos.into_u8());
            let bits = self.reader.read_u64();
            self.reader.read_next(Tag::End.into_u8());
            number::from_pos_bits(bits)
        } else {
            0.0
        }
    }

    /// Decode a numeric field, narrowed to `i64` by truncation toward
    /// zero — lossy by design, symmetric with the encoder's widening.
    pub fn decode_i64(&mut self) -> i64 {
        number::narrow_i64(self.decode_number())
    }

    /// Decode a numeric field, narrowed to `u64` by truncation toward
    /// zero (negative values clamp to `0`).
    pub fn decode_u64(&mut self) -> u64 {
        number::narrow_u64(self.decode_number())
    }

    /// Decode a field known to be a timestamp. Tag mismatch returns the
    /// epoch and consumes no bytes.
    pub fn decode_timestamp(&mut self) -> Timestamp {
        if self.reader.peek() != Tag::Time.into_u8() {
            return Timestamp::EPOCH;
        }
        self.reader.read_next(Tag::Time.into_u8());
        let t = self.reader.read_time();
        self.reader.read_next(Tag::End.into_u8());
        t
    }

    /// Decode a field known to be a string target. The raw payload is
    /// interpreted as UTF-8, lossily substituting the replacement
    /// character for any invalid sequence (the one genuinely fallible
    /// seam in an otherwise total decoder). Tag mismatch returns an empty
    /// string and consumes no bytes.
    pub fn decode_string(&mut self) -> String {
        String::from_utf8_lossy(&self.decode_bytes()).into_owned()
    }

    /// Decode a field known to be a raw byte-string target. Tag mismatch
    /// returns an empty vector and consumes no bytes.
    pub fn decode_bytes(&mut self) -> Vec<u8> {
        if self.reader.peek() != Tag::Str.into_u8() {
            return Vec::new();
        }
        self.reader.read_next(Tag::Str.into_u8());
        let raw = self.reader.read_upto(Tag::End.into_u8());
        unescape(&raw)
    }

    /// Decode a field known to be a homogeneous array, recursing
    /// dynamically over its elements. Tag mismatch returns an empty
    /// vector and consumes no bytes.
    pub fn decode_array(&mut self) -> Vec<Value> {
        if self.reader.peek() != Tag::Arr.into_u8() {
            return Vec::new();
        }
        self.reader.read_next(Tag::Arr.into_u8());
        let mut out = Vec::new();
        while !self.reader.is_empty() && self.reader.peek() != Tag::End.into_u8() {
            out.push(self.decode_value());
        }
        self.reader.read_next(Tag::End.into_u8());
        out
    }

    /// Fully dynamic decode: peek the leading tag and build the matching
    /// [`Value`] variant.
    pub fn decode_value(&mut self) -> Value {
        match Tag::from_u8(self.reader.peek()) {
            Some(Tag::Nil) => {
                self.decode_null();
                Value::Null
            }
            Some(Tag::Val) => Value::Bool(self.decode_bool()),
            Some(Tag::Time) => Value::Timestamp(self.decode_timestamp()),
            Some(Tag::Neg) | Some(Tag::Pos) => {
                let x = self.decode_number();
                if number::is_exact_i64(x) {
                    Value::Int(number::narrow_i64(x))
                } else {
                    Value::Float(x)
                }
            }
            Some(Tag::Str) => Value::Str(self.decode_string()),
            Some(Tag::Prefix) => {
                self.reader.read_next(Tag::Prefix.into_u8());
                self.reader.read_next(Tag::End.into_u8());
                Value::Prefix
            }
            Some(Tag::Suffix) => {
                self.reader.read_next(Tag::Suffix.into_u8());
                self.reader.read_next(Tag::End.into_u8());
                Value::Suffix
            }
            Some(Tag::Arr) => Value::Array(self.decode_array()),
            Some(Tag::End) | None => {
                // Malformed input or EOF: consume one byte if any remain
                // so callers looping to EOF always make progress.
                if !self.reader.is_empty() {
                    self.reader.read_size(1);
                }
                Value::Null
            }
        }
    }
}

/// Fully dynamic decode of an entire concatenated record.
pub fn decode_record(bytes: &[u8]) -> Vec<Value> {
    let mut d = Decoder::new(bytes);
    let mut out = Vec::new();
    while !d.is_empty() {
        out.push(d.decode_value());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_round_trips() {
        let bytes = encode(&[Field::Null]);
        let mut d = Decoder::new(&bytes);
        assert_eq!(d.decode_value(), Value::Null);
        assert!(d.is_empty());
    }

    #[test]
    fn bool_round_trips() {
        let bytes = encode(&[Field::Bool(true), Field::Bool(false)]);
        let mut d = Decoder::new(&bytes);
        assert!(d.decode_bool());
        assert!(!d.decode_bool());
    }

    #[test]
    fn bool_false_sorts_before_true_sorts_before_timestamp() {
        let f = encode(&[Field::Bool(false)]);
        let t = encode(&[Field::Bool(true)]);
        let ts = encode(&[Field::Timestamp(Timestamp::from_nanos(0))]);
        assert!(f < t);
        assert!(t < ts);
    }

    #[test]
    fn number_round_trips_and_orders() {
        let neg = encode(&[Field::Number(-1.5)]);
        let pos = encode(&[Field::Number(1.5)]);
        assert!(neg < pos);

        let mut d = Decoder::new(&neg);
        assert_eq!(d.decode_number(), -1.5);
    }

    #[test]
    fn negative_zero_and_positive_zero_collapse() {
        let a = encode(&[Field::Number(0.0)]);
        let b = encode(&[Field::Number(-0.0)]);
        assert_eq!(a, b);
    }

    #[test]
    fn string_round_trips_with_embedded_nul() {
        let s = "a\u{0}b".to_owned();
        let bytes = encode(&[Field::Str(s.clone())]);
        let mut d = Decoder::new(&bytes);
        assert_eq!(d.decode_string(), s);
    }

    #[test]
    fn empty_string_is_bare_double_end() {
        let bytes = encode(&[Field::Str(String::new())]);
        assert_eq!(
            bytes,
            vec![Tag::Str.into_u8(), Tag::End.into_u8(), Tag::End.into_u8()]
        );
    }

    #[test]
    fn array_round_trips() {
        let bytes = encode(&[Field::Array(vec![
            Field::Number(1.0),
            Field::Number(2.0),
        ])]);
        let mut d = Decoder::new(&bytes);
        let v = d.decode_value();
        match v {
            Value::Array(items) => {
                assert_eq!(items, vec![Value::Int(1), Value::Int(2)]);
            }
            other => panic!("expected array, got {other:?}"),
        }
    }

    #[test]
    fn empty_array_round_trips() {
        let bytes = encode(&[Field::Array(vec![])]);
        let mut d = Decoder::new(&bytes);
        assert_eq!(d.decode_value(), Value::Array(vec![]));
    }

    #[test]
    fn ignore_writes_nothing() {
        let bytes = encode(&[Field::Ignore]);
        assert!(bytes.is_empty());
    }

    #[test]
    fn sentinels_bracket_ordinary_values() {
        let prefix = encode(&[Field::Prefix]);
        let value = encode(&[Field::Str("a".to_owned())]);
        let suffix = encode(&[Field::Suffix]);
        assert!(prefix < value);
        assert!(value < suffix);
    }

    #[test]
    fn record_decodes_sequential_fields_with_no_trailing_tail() {
        let bytes = encode(&[Field::Bool(true), Field::Number(42.0), Field::Null]);
        let values = decode_record(&bytes);
        assert_eq!(
            values,
            vec![Value::Bool(true), Value::Int(42), Value::Null]
        );
    }

    #[test]
    fn tag_mismatch_leaves_target_at_zero_and_consumes_nothing() {
        let bytes = encode(&[Field::Bool(true)]);
        let mut d = Decoder::new(&bytes);
        assert_eq!(d.decode_number(), 0.0);
        // Cursor untouched: the bool is still there to decode correctly.
        assert!(d.decode_bool());
    }

    #[test]
    fn truncated_input_reads_as_zero() {
        let mut d = Decoder::new(&[Tag::Time.into_u8(), 0x01, 0x02]);
        assert_eq!(d.decode_timestamp().as_nanos(), 0);
    }

    #[test]
    fn lexicographic_id_ordering_not_numeric() {
        let one = encode(&[Field::Str("1".to_owned())]);
        let two = encode(&[Field::Str("2".to_owned())]);
        let twelve = encode(&[Field::Str("12".to_owned())]);
        assert!(one < two);
        assert!(two < twelve);
    }

    // ========================================================================
    // Property-based tests
    // ========================================================================

    use proptest::prelude::*;

    /// `-0.0`/`0.0` collapse by design and `NaN != NaN`, so a plain `==`
    /// can't check round-trip; compare normalized bit patterns instead.
    fn bits_eq(a: f64, b: f64) -> bool {
        let norm = |x: f64| if x == 0.0 { 0.0f64.to_bits() } else { x.to_bits() };
        norm(a) == norm(b)
    }

    proptest! {
        /// Any string encodes and decodes back to itself, embedded NUL
        /// bytes included.
        #[test]
        fn prop_string_round_trips(s in ".*") {
            let bytes = encode(&[Field::Str(s.clone())]);
            let mut d = Decoder::new(&bytes);
            prop_assert_eq!(d.decode_string(), s);
            prop_assert!(d.is_empty());
        }

        /// Any f64 round-trips through the unified numeric encoding
        /// (modulo the documented NaN/zero-sign collapse).
        #[test]
        fn prop_number_round_trips(x in any::<f64>()) {
            let bytes = encode(&[Field::Number(x)]);
            let mut d = Decoder::new(&bytes);
            prop_assert!(bits_eq(d.decode_number(), x));
        }

        /// Byte-wise comparison of two encoded numbers matches their
        /// numeric comparison.
        #[test]
        fn prop_number_order_preserved(a in any::<f64>(), b in any::<f64>()) {
            prop_assume!(!a.is_nan() && !b.is_nan());
            let ea = encode(&[Field::Number(a)]);
            let eb = encode(&[Field::Number(b)]);
            prop_assert_eq!(a.partial_cmp(&b), ea.partial_cmp(&eb));
        }

        /// Byte-wise comparison of two encoded strings matches their own
        /// lexicographic byte comparison.
        #[test]
        fn prop_string_order_preserved(a in ".*", b in ".*") {
            let ea = encode(&[Field::Str(a.clone())]);
            let eb = encode(&[Field::Str(b.clone())]);
            prop_assert_eq!(a.as_bytes().cmp(b.as_bytes()), ea.cmp(&eb));
        }

        /// PREFIX sorts below and SUFFIX sorts above every ordinary
        /// string value.
        #[test]
        fn prop_sentinels_bracket_every_string(s in ".*") {
            let prefix = encode(&[Field::Prefix]);
            let value = encode(&[Field::Str(s)]);
            let suffix = encode(&[Field::Suffix]);
            prop_assert!(prefix < value);
            prop_assert!(value < suffix);
        }

        /// The decoder never panics and never reads past the end of
        /// arbitrary, possibly mis-framed input.
        #[test]
        fn prop_decode_record_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..64)) {
            let _ = decode_record(&bytes);
        }

        /// A record built from a sequence of arbitrary fields decodes
        /// back to that exact sequence of fields, one at a time, with no
        /// trailing tail.
        #[test]
        fn prop_record_of_bools_and_numbers_round_trips(
            flags in prop::collection::vec(any::<bool>(), 0..8),
            nums in prop::collection::vec(any::<i32>(), 0..8),
        ) {
            let fields: Vec<Field> = flags.iter().map(|b| Field::Bool(*b))
                .chain(nums.iter().map(|n| Field::Number(*n as f64)))
                .collect();
            let bytes = encode(&fields);
            let mut d = Decoder::new(&bytes);
            for b in &flags {
                prop_assert_eq!(d.decode_bool(), *b);
            }
            for n in &nums {
                prop_assert_eq!(d.decode_i64(), *n as i64);
            }
            prop_assert!(d.is_empty());
        }
    }
}
