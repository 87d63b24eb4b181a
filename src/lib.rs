//! `ordkey` is an order-preserving binary codec for composite database
//! keys: it serializes a heterogeneous, ordered sequence of primitive
//! values into a byte string such that lexicographic byte comparison of
//! two encoded outputs reproduces the intended semantic ordering of the
//! original values.
//!
//! It is a leaf layer: it performs no I/O, holds no shared mutable state
//! beyond an optional scratch-buffer [`pool::Pool`], and every input of a
//! recognised kind encodes — the codec is deliberately total rather than
//! fallible (see [`codec`]'s module documentation for the rationale).
//!
//! Three layers, leaves-first:
//! - [`writer`]/[`reader`] — byte-level primitives.
//! - [`codec`] — the value encoder/decoder built on them.
//! - [`key`] — a catalogue of composite key schemas built on the codec.

mod codec;
mod marker;
mod number;
mod pool;
mod reader;
mod timestamp;
mod value;
mod writer;

pub mod key;

pub use codec::{decode_record, encode, encode_into, Decoder};
pub use key::Key;
pub use pool::{Pool, PooledBuffer};
pub use timestamp::Timestamp;
pub use value::{Field, Value};
