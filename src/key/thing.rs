use std::fmt;

use crate::codec::{encode, Decoder};
use crate::value::Field;

use super::Key;

/// `KV, "*", NS, "*", DB, "*", TB, "*", ID` — a single record.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Thing {
    pub kv: String,
    pub ns: String,
    pub db: String,
    pub tb: String,
    pub id: String,
}

impl Thing {
    pub fn new(
        kv: impl Into<String>,
        ns: impl Into<String>,
        db: impl Into<String>,
        tb: impl Into<String>,
        id: impl Into<String>,
    ) -> Thing {
        Thing {
            kv: kv.into(),
            ns: ns.into(),
            db: db.into(),
            tb: tb.into(),
            id: id.into(),
        }
    }
}

impl Key for Thing {
    fn encode(&self) -> Vec<u8> {
        encode(&[
            Field::Str(self.kv.clone()),
            Field::Str("*".to_owned()),
            Field::Str(self.ns.clone()),
            Field::Str("*".to_owned()),
            Field::Str(self.db.clone()),
            Field::Str("*".to_owned()),
            Field::Str(self.tb.clone()),
            Field::Str("*".to_owned()),
            Field::Str(self.id.clone()),
        ])
    }

    fn decode(bytes: &[u8]) -> Thing {
        let mut d = Decoder::new(bytes);
        let kv = d.decode_string();
        let _ = d.decode_string();
        let ns = d.decode_string();
        let _ = d.decode_string();
        let db = d.decode_string();
        let _ = d.decode_string();
        let tb = d.decode_string();
        let _ = d.decode_string();
        let id = d.decode_string();
        Thing { kv, ns, db, tb, id }
    }
}

impl fmt::Display for Thing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/{}/{}/{}/{}/{}",
            self.kv, self.ns, self.db, self.tb, self.id
        )
    }
}
