use std::fmt;

use crate::codec::{encode, Decoder};
use crate::value::Field;

use super::Key;

/// `KV, "*", NS, "*", DB`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Database {
    pub kv: String,
    pub ns: String,
    pub db: String,
}

impl Database {
    pub fn new(kv: impl Into<String>, ns: impl Into<String>, db: impl Into<String>) -> Database {
        Database {
            kv: kv.into(),
            ns: ns.into(),
            db: db.into(),
        }
    }
}

impl Key for Database {
    fn encode(&self) -> Vec<u8> {
        encode(&[
            Field::Str(self.kv.clone()),
            Field::Str("*".to_owned()),
            Field::Str(self.ns.clone()),
            Field::Str("*".to_owned()),
            Field::Str(self.db.clone()),
        ])
    }

    fn decode(bytes: &[u8]) -> Database {
        let mut d = Decoder::new(bytes);
        let kv = d.decode_string();
        let _ = d.decode_string();
        let ns = d.decode_string();
        let _ = d.decode_string();
        let db = d.decode_string();
        Database { kv, ns, db }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}/{}", self.kv, self.ns, self.db)
    }
}
