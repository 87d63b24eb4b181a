use std::fmt;

use crate::codec::{encode, Decoder};
use crate::value::Field as FieldValue;

use super::Key;

/// `KV, "*", NS, "*", DB, "*", TB, "!", "t", FT` — a field definition on a
/// table. The `"!"` separator sorts below the `"*"` used by record keys,
/// grouping a table's metadata ahead of its records.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FieldDef {
    pub kv: String,
    pub ns: String,
    pub db: String,
    pub tb: String,
    pub ft: String,
}

impl FieldDef {
    pub fn new(
        kv: impl Into<String>,
        ns: impl Into<String>,
        db: impl Into<String>,
        tb: impl Into<String>,
        ft: impl Into<String>,
    ) -> FieldDef {
        FieldDef {
            kv: kv.into(),
            ns: ns.into(),
            db: db.into(),
            tb: tb.into(),
            ft: ft.into(),
        }
    }
}

impl Key for FieldDef {
    fn encode(&self) -> Vec<u8> {
        encode(&[
            FieldValue::Str(self.kv.clone()),
            FieldValue::Str("*".to_owned()),
            FieldValue::Str(self.ns.clone()),
            FieldValue::Str("*".to_owned()),
            FieldValue::Str(self.db.clone()),
            FieldValue::Str("*".to_owned()),
            FieldValue::Str(self.tb.clone()),
            FieldValue::Str("!".to_owned()),
            FieldValue::Str("t".to_owned()),
            FieldValue::Str(self.ft.clone()),
        ])
    }

    fn decode(bytes: &[u8]) -> FieldDef {
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
        let ft = d.decode_string();
        FieldDef { kv, ns, db, tb, ft }
    }
}

impl fmt::Display for FieldDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/{}/{}/{}/{}/t/{}",
            self.kv, self.ns, self.db, self.tb, self.ft
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::Table;

    #[test]
    fn round_trips() {
        let fd = FieldDef::new("surreal", "abcum", "database", "person", "name");
        assert_eq!(FieldDef::decode(&fd.encode()), fd);
    }

    #[test]
    fn sorts_before_the_tables_own_records() {
        let fd = FieldDef::new("surreal", "abcum", "database", "person", "name");
        let tb = Table::new("surreal", "abcum", "database", "person");
        assert!(fd.encode() < tb.encode());
    }
}
