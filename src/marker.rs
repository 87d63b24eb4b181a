//! Wire-format tag bytes. For internal use only.
//!
//! Each [`Tag`] is both a type discriminator and an ordering anchor: the
//! nine tag values are chosen so that byte-wise sorting of the tag alone
//! reproduces the intended inter-type ordering (sentinels bracket
//! everything, nulls precede values, numbers precede strings precede
//! arrays).

/// A single leading byte identifying the kind of value that follows.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tag {
    /// Record/field terminator; also array terminator.
    End,
    /// "Lowest possible" sentinel.
    Prefix,
    /// Null value.
    Nil,
    /// Boolean.
    Val,
    /// Timestamp.
    Time,
    /// Negative number.
    Neg,
    /// Non-negative number.
    Pos,
    /// String/bytes.
    Str,
    /// Homogeneous array.
    Arr,
    /// "Highest possible" sentinel.
    Suffix,
}

impl Tag {
    /// Construct a tag from a single byte. Returns `None` for byte values
    /// outside the nine recognised tags.
    pub fn from_u8(n: u8) -> Option<Tag> {
        match n {
            0x00 => Some(Tag::End),
            0x01 => Some(Tag::Prefix),
            0x02 => Some(Tag::Nil),
            0x03 => Some(Tag::Val),
            0x04 => Some(Tag::Time),
            0x05 => Some(Tag::Neg),
            0x06 => Some(Tag::Pos),
            0x07 => Some(Tag::Str),
            0x08 => Some(Tag::Arr),
            0x09 => Some(Tag::Suffix),
            _ => None,
        }
    }

    /// Converts a tag into its single-byte wire representation.
    pub fn into_u8(self) -> u8 {
        match self {
            Tag::End => 0x00,
            Tag::Prefix => 0x01,
            Tag::Nil => 0x02,
            Tag::Val => 0x03,
            Tag::Time => 0x04,
            Tag::Neg => 0x05,
            Tag::Pos => 0x06,
            Tag::Str => 0x07,
            Tag::Arr => 0x08,
            Tag::Suffix => 0x09,
        }
    }
}

impl From<Tag> for u8 {
    fn from(val: Tag) -> u8 {
        val.into_u8()
    }
}
