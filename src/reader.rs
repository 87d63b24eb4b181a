//! A cursor over an in-memory byte slice. Never panics — a read past
//! end-of-buffer returns a zero byte or empty slice.

use byteorder::{BigEndian, ReadBytesExt};

use crate::timestamp::Timestamp;

pub(crate) struct Reader<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> Reader<'a> {
    pub(crate) fn new(data: &'a [u8]) -> Reader<'a> {
        Reader { data, pos: 0 }
    }

    /// Non-consuming lookahead. Returns 0 at EOF.
    pub(crate) fn peek(&self) -> u8 {
        self.data.get(self.pos).copied().unwrap_or(0)
    }

    /// `true` if the reader has consumed every byte.
    pub(crate) fn is_empty(&self) -> bool {
        self.pos >= self.data.len()
    }

    /// If the byte at the cursor equals `expected`, consume it and return
    /// `true`; otherwise leave the cursor untouched and return `false`.
    pub(crate) fn read_next(&mut self, expected: u8) -> bool {
        if self.peek() == expected {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    /// Consume exactly `n` bytes, or as many as remain at EOF (the tail is
    /// zero-padded so callers that always request a fixed width never
    /// panic on truncated input).
    pub(crate) fn read_size(&mut self, n: usize) -> Vec<u8> {
        let end = (self.pos + n).min(self.data.len());
        let got = &self.data[self.pos..end];
        let mut out = Vec::with_capacity(n);
        out.extend_from_slice(got);
        out.resize(n, 0);
        self.pos = end;
        out
    }

    /// Read a big-endian `u64`, zero-padding on truncated input.
    pub(crate) fn read_u64(&mut self) -> u64 {
        let bytes = self.read_size(8);
        let mut slice: &[u8] = &bytes;
        slice.read_u64::<BigEndian>().unwrap_or(0)
    }

    /// Read a big-endian `i64`, zero-padding on truncated input.
    pub(crate) fn read_i64(&mut self) -> i64 {
        let bytes = self.read_size(8);
        let mut slice: &[u8] = &bytes;
        slice.read_i64::<BigEndian>().unwrap_or(0)
    }

    pub(crate) fn read_time(&mut self) -> Timestamp {
        Timestamp::from_nanos(self.read_i64())
    }

    /// Scan forward until the two-byte terminator sequence `[term, term]`
    /// is matched; return the bytes consumed excluding the terminator.
    /// Mid-payload bytes equal to `term` but not followed by a second
    /// `term` are included in the result. At EOF without a match, the
    /// remaining bytes are returned and the cursor left at end-of-buffer.
    pub(crate) fn read_upto(&mut self, term: u8) -> Vec<u8> {
        let mut out = Vec::new();
        loop {
            if self.is_empty() {
                return out;
            }
            let b = self.data[self.pos];
            if b == term {
                // Lookahead for the second terminator byte.
                if self.data.get(self.pos + 1).copied() == Some(term) {
                    self.pos += 2;
                    return out;
                }
            }
            out.push(b);
            self.pos += 1;
        }
    }
}
