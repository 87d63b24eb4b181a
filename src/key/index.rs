use std::fmt;

use crate::codec::{encode, Decoder};
use crate::value::{Field, Value};

use super::Key;

/// `KV, "*", NS, "*", DB, "*", TB, "!", "i", IX` — an index definition on
/// a table, sorted alongside [`super::FieldDef`] under the same `"!"`
/// metadata prefix.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct IndexDef {
    pub kv: String,
    pub ns: String,
    pub db: String,
    pub tb: String,
    pub ix: String,
}

impl IndexDef {
    pub fn new(
        kv: impl Into<String>,
        ns: impl Into<String>,
        db: impl Into<String>,
        tb: impl Into<String>,
        ix: impl Into<String>,
    ) -> IndexDef {
        IndexDef {
            kv: kv.into(),
            ns: ns.into(),
            db: db.into(),
            tb: tb.into(),
            ix: ix.into(),
        }
    }
}

impl Key for IndexDef {
    fn encode(&self) -> Vec<u8> {
        encode(&[
            Field::Str(self.kv.clone()),
            Field::Str("*".to_owned()),
            Field::Str(self.ns.clone()),
            Field::Str("*".to_owned()),
            Field::Str(self.db.clone()),
            Field::Str("*".to_owned()),
            Field::Str(self.tb.clone()),
            Field::Str("!".to_owned()),
            Field::Str("i".to_owned()),
            Field::Str(self.ix.clone()),
        ])
    }

    fn decode(bytes: &[u8]) -> IndexDef {
        let mut d = Decoder::new(bytes);
        let kv = d.decode_string();
        let _ = d.decode_string();
        let ns = d.decode_string();
        let _ = d.decode_string();
        let db = d.decode_string();
        let _ = d.decode_string();
        let tb = d.decode_string();
        let _ = d.decode_string();
        let _ = d.decode_string();
        let ix = d.decode_string();
        IndexDef { kv, ns, db, tb, ix }
    }
}

impl fmt::Display for IndexDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/{}/{}/{}/{}/i/{}",
            self.kv, self.ns, self.db, self.tb, self.ix
        )
    }
}

/// `KV, "*", NS, "*", DB, "*", TB, "¤", IX, FD` — a single index entry,
/// keyed by the indexed value itself (`FD`, a dynamic value) so that
/// scans over one index's range visit entries in indexed-value order.
/// The `"¤"` separator is a multi-byte UTF-8 token, sorting above the
/// single-byte ASCII separators used elsewhere so a table's index entries
/// fall after its metadata and records.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct IndexEntry {
    pub kv: String,
    pub ns: String,
    pub db: String,
    pub tb: String,
    pub ix: String,
    pub fd: Value,
}

impl IndexEntry {
    pub fn new(
        kv: impl Into<String>,
        ns: impl Into<String>,
        db: impl Into<String>,
        tb: impl Into<String>,
        ix: impl Into<String>,
        fd: Value,
    ) -> IndexEntry {
        IndexEntry {
            kv: kv.into(),
            ns: ns.into(),
            db: db.into(),
            tb: tb.into(),
            ix: ix.into(),
            fd,
        }
    }

    fn fd_as_field(&self) -> Field {
        value_to_field(&self.fd)
    }
}

fn value_to_field(v: &Value) -> Field {
    match v {
        Value::Null => Field::Null,
        Value::Bool(b) => Field::Bool(*b),
        Value::Int(i) => Field::Number(*i as f64),
        Value::Float(f) => Field::Number(*f),
        Value::Timestamp(t) => Field::Timestamp(*t),
        Value::Str(s) => Field::Str(s.clone()),
        Value::Bytes(b) => Field::Bytes(b.clone()),
        Value::Array(items) => Field::Array(items.iter().map(value_to_field).collect()),
        Value::Prefix => Field::Prefix,
        Value::Suffix => Field::Suffix,
    }
}

impl Key for IndexEntry {
    fn encode(&self) -> Vec<u8> {
        let mut buf = encode(&[
            Field::Str(self.kv.clone()),
            Field::Str("*".to_owned()),
            Field::Str(self.ns.clone()),
            Field::Str("*".to_owned()),
            Field::Str(self.db.clone()),
            Field::Str("*".to_owned()),
            Field::Str(self.tb.clone()),
            Field::Str("\u{a4}".to_owned()),
            Field::Str(self.ix.clone()),
        ]);
        crate::codec::encode_into(&mut buf, &[self.fd_as_field()]);
        buf
    }

    fn decode(bytes: &[u8]) -> IndexEntry {
        let mut d = Decoder::new(bytes);
        let kv = d.decode_string();
        let _ = d.decode_string();
        let ns = d.decode_string();
        let _ = d.decode_string();
        let db = d.decode_string();
        let _ = d.decode_string();
        let tb = d.decode_string();
        let _ = d.decode_string();
        let ix = d.decode_string();
        let fd = d.decode_value();
        IndexEntry {
            kv,
            ns,
            db,
            tb,
            ix,
            fd,
        }
    }
}

impl fmt::Display for IndexEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/{}/{}/{}/{}/{}/{:?}",
            self.kv, self.ns, self.db, self.tb, self.ix, self.fd
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Table;

    #[test]
    fn index_def_round_trips() {
        let ix = IndexDef::new("surreal", "abcum", "database", "person", "by_name");
        assert_eq!(IndexDef::decode(&ix.encode()), ix);
    }

    #[test]
    fn index_entry_round_trips() {
        let e = IndexEntry::new(
            "surreal",
            "abcum",
            "database",
            "person",
            "by_name",
            Value::Str("alice".to_owned()),
        );
        assert_eq!(IndexEntry::decode(&e.encode()), e);
    }

    #[test]
    fn index_entries_sort_after_the_tables_records() {
        let e = IndexEntry::new(
            "surreal",
            "abcum",
            "database",
            "person",
            "by_name",
            Value::Str("alice".to_owned()),
        );
        let tb = Table::new("surreal", "abcum", "database", "person");
        assert!(tb.encode() < e.encode());
    }
}
