use std::fmt;

use crate::codec::{encode, Decoder};
use crate::value::Field;

use super::Key;

/// The edge-direction literal token, `TK` in `KV, "*", NS, "*", DB, "*",
/// TB, "*", ID, TK, TP, FT, FK`. `Both` (`"«»"`) is the default — an edge
/// constructed with an empty token materializes it before encoding.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EdgeToken {
    /// `"«»"` — bidirectional, the default.
    #[default]
    Both,
    /// `"«"` — inbound-only open bracket.
    InOpen,
    /// `"»"` — outbound-only close bracket.
    OutClose,
    /// `"‹"` — inbound single angle bracket.
    InAngle,
    /// `"›"` — outbound single angle bracket.
    OutAngle,
}

impl EdgeToken {
    fn as_str(self) -> &'static str {
        match self {
            EdgeToken::Both => "\u{ab}\u{bb}",
            EdgeToken::InOpen => "\u{ab}",
            EdgeToken::OutClose => "\u{bb}",
            EdgeToken::InAngle => "\u{2039}",
            EdgeToken::OutAngle => "\u{203a}",
        }
    }

    fn from_str(s: &str) -> EdgeToken {
        match s {
            "\u{ab}" => EdgeToken::InOpen,
            "\u{bb}" => EdgeToken::OutClose,
            "\u{2039}" => EdgeToken::InAngle,
            "\u{203a}" => EdgeToken::OutAngle,
            // Both the canonical "«»" and an empty/unrecognised token
            // materialize to the default, per S4.
            _ => EdgeToken::Both,
        }
    }
}

/// `KV, "*", NS, "*", DB, "*", TB, "*", ID, TK, TP, FT, FK`.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Edge {
    pub kv: String,
    pub ns: String,
    pub db: String,
    pub tb: String,
    pub id: String,
    pub tk: EdgeToken,
    pub tp: String,
    pub ft: String,
    pub fk: String,
}

impl Edge {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        kv: impl Into<String>,
        ns: impl Into<String>,
        db: impl Into<String>,
        tb: impl Into<String>,
        id: impl Into<String>,
        tk: EdgeToken,
        tp: impl Into<String>,
        ft: impl Into<String>,
        fk: impl Into<String>,
    ) -> Edge {
        Edge {
            kv: kv.into(),
            ns: ns.into(),
            db: db.into(),
            tb: tb.into(),
            id: id.into(),
            tk,
            tp: tp.into(),
            ft: ft.into(),
            fk: fk.into(),
        }
    }
}

impl Key for Edge {
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
            Field::Str(self.tk.as_str().to_owned()),
            Field::Str(self.tp.clone()),
            Field::Str(self.ft.clone()),
            Field::Str(self.fk.clone()),
        ])
    }

    fn decode(bytes: &[u8]) -> Edge {
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
        let tk = EdgeToken::from_str(&d.decode_string());
        let tp = d.decode_string();
        let ft = d.decode_string();
        let fk = d.decode_string();
        Edge {
            kv,
            ns,
            db,
            tb,
            id,
            tk,
            tp,
            ft,
            fk,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "/{}/{}/{}/{}/{}{}{}/{}/{}",
            self.kv, self.ns, self.db, self.tb, self.id, self.tk.as_str(), self.tp, self.ft, self.fk
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips() {
        let e = Edge::new(
            "surreal", "abcum", "database", "person", "1", EdgeToken::Both, "likes", "person",
            "2",
        );
        assert_eq!(Edge::decode(&e.encode()), e);
    }

    #[test]
    fn s4_empty_token_materializes_to_default() {
        let explicit = Edge::new(
            "kv", "ns", "db", "tb", "1", EdgeToken::Both, "likes", "person", "2",
        );
        let via_empty = Edge::new(
            "kv",
            "ns",
            "db",
            "tb",
            "1",
            EdgeToken::from_str(""),
            "likes",
            "person",
            "2",
        );
        assert_eq!(explicit.encode(), via_empty.encode());
    }
}
