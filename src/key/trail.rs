use std::fmt;

use crate::codec::{encode, Decoder};
use crate::timestamp::Timestamp;
use crate::value::Field;

use super::Key;

/// `KV, "*", NS, "*", DB, "*", TB, "#", ID, AT` — a change-feed entry for
/// a record. `"#"` (0x23) sits between a table's metadata prefix (`"!"`,
/// 0x21) and its records and index entries (`"*"`, 0x2A), so trail
/// entries sort after metadata but before the records they describe.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Trail {
    pub kv: String,
    pub ns: String,
    pub db: String,
    pub tb: String,
    pub id: String,
    pub at: Timestamp,
}

impl Trail {
    pub fn new(
        kv: impl Into<String>,
        ns: impl Into<String>,
        db: impl Into<String>,
        tb: impl Into<String>,
        id: impl Into<String>,
        at: Timestamp,
    ) -> Trail {
        Trail {
            kv: kv.into(),
            ns: ns.into(),
            db: db.into(),
            tb: tb.into(),
            id: id.into(),
            at,
        }
    }
}

impl Key for Trail {
    fn encode(&self) -> Vec<u8> {
        encode(&[
            Field::Str(self.kv.clone()),
            Field::Str("*".to_owned()),
            Field::Str(self.ns.clone()),
            Field::Str("*".to_owned()),
            Field::Str(self.db.clone()),
            Field::Str("*".to_owned()),
            Field::Str(self.tb.clone()),
            Field::Str("#".to_owned()),
            Field::Str(self.id.clone()),
            Field::Timestamp(self.at),
        ])
    }

    fn decode(bytes: &[u8]) -> Trail {
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
        let at = d.decode_timestamp();
        Trail {
            kv,
            ns,
            db,
            tb,
            id,
            at,
        }
    }
}

impl fmt::Display for Trail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/{}/{}/{}/{}/{}@{}",
            self.kv, self.ns, self.db, self.tb, self.id, self.at
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::FieldDef;
    use crate::key::Table;

    #[test]
    fn round_trips() {
        let trail = Trail::new(
            "surreal",
            "abcum",
            "database",
            "person",
            "1",
            Timestamp::from_nanos(1_700_000_000_000_000_000),
        );
        assert_eq!(Trail::decode(&trail.encode()), trail);
    }

    #[test]
    fn sorts_between_metadata_and_records() {
        let fd = FieldDef::new("kv", "ns", "db", "tb", "name");
        let trail = Trail::new("kv", "ns", "db", "tb", "1", Timestamp::EPOCH);
        let tb = Table::new("kv", "ns", "db", "tb");
        assert!(fd.encode() < trail.encode());
        assert!(trail.encode() < tb.encode());
    }

    #[test]
    fn s6_timestamp_round_trips_bit_exactly() {
        // 1987-06-22T08:00:00.123456789Z expressed as nanoseconds since
        // the UNIX epoch.
        let nanos = 551_347_200_123_456_789;
        let trail = Trail::new("kv", "ns", "db", "tb", "1", Timestamp::from_nanos(nanos));
        let decoded = Trail::decode(&trail.encode());
        assert_eq!(decoded.at.as_nanos(), nanos);
    }
}
