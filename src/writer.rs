//! Appends raw bytes to a growing buffer. Never fails — the buffer grows
//! as required.

use bytes::BufMut;

use crate::marker::Tag;
use crate::timestamp::Timestamp;

/// Thin wrapper over any growable byte sink exposing the primitive append
/// operations the value codec is built from. Generic over [`BufMut`] so
/// the same writer works whether the caller is encoding into a plain
/// `Vec<u8>` or a pooled `bytes::BytesMut`.
pub(crate) struct Writer<'a, B: BufMut> {
    buf: &'a mut B,
}

impl<'a, B: BufMut> Writer<'a, B> {
    pub(crate) fn new(buf: &'a mut B) -> Writer<'a, B> {
        Writer { buf }
    }

    /// Append a single byte.
    pub(crate) fn write_one(&mut self, b: u8) {
        self.buf.put_u8(b);
    }

    /// Append a tag byte.
    pub(crate) fn write_tag(&mut self, tag: Tag) {
        self.buf.put_u8(tag.into_u8());
    }

    /// Append raw bytes with no framing.
    pub(crate) fn write_many(&mut self, bs: &[u8]) {
        self.buf.put_slice(bs);
    }

    /// Append the raw UTF-8 (or arbitrary) bytes of a payload, unframed.
    /// Escaping and terminators are the caller's responsibility.
    pub(crate) fn write_str_raw(&mut self, s: &[u8]) {
        self.buf.put_slice(s);
    }

    /// Append the 8 big-endian bytes of a timestamp's nanosecond count.
    pub(crate) fn write_time(&mut self, t: Timestamp) {
        self.buf.put_i64(t.as_nanos());
    }

    /// Emit the NEG/POS tag and 8-byte big-endian body for a number, using
    /// the sign to choose between the raw and bit-complemented paths.
    pub(crate) fn write_float(&mut self, x: f64) {
        if crate::number::is_negative(x) {
            self.write_tag(Tag::Neg);
            self.buf.put_u64(crate::number::neg_bits(x));
        } else {
            self.write_tag(Tag::Pos);
            self.buf.put_u64(crate::number::pos_bits(x));
        }
        self.write_tag(Tag::End);
    }
}
