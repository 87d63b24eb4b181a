//! Key schemas: a catalogue of named composite key types, each a
//! fixed-arity tuple of typed slots interleaved with literal separator
//! tokens. Every schema satisfies [`Key`] and renders a diagnostic
//! `/`-joined form via [`std::fmt::Display`].

mod database;
mod edge;
mod field;
mod index;
mod namespace;
mod table;
mod thing;
mod trail;

pub use database::Database;
pub use edge::{Edge, EdgeToken};
pub use field::FieldDef;
pub use index::{IndexDef, IndexEntry};
pub use namespace::Namespace;
pub use table::Table;
pub use thing::Thing;
pub use trail::Trail;

/// Anything encodable/decodable as a composite key and renderable in a
/// human-readable diagnostic form.
pub trait Key: Sized {
    /// Serialize this key's slots through the value codec.
    fn encode(&self) -> Vec<u8>;
    /// Repopulate a key's slots from its encoded bytes. Trailing bytes
    /// beyond this schema's own fields are silently left unconsumed,
    /// since schemas are sometimes used as fixed-length prefixes of a
    /// longer physical key.
    fn decode(bytes: &[u8]) -> Self;
}
