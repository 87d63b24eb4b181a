use std::fmt;

use crate::codec::{encode, Decoder};
use crate::value::Field;

use super::Key;

/// `KV, "*", NS` — the outermost addressable scope.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Namespace {
    pub kv: String,
    pub ns: String,
}

impl Namespace {
    pub fn new(kv: impl Into<String>, ns: impl Into<String>) -> Namespace {
        Namespace {
            kv: kv.into(),
            ns: ns.into(),
        }
    }
}

impl Key for Namespace {
    fn encode(&self) -> Vec<u8> {
        encode(&[
            Field::Str(self.kv.clone()),
            Field::Str("*".to_owned()),
            Field::Str(self.ns.clone()),
        ])
    }

    fn decode(bytes: &[u8]) -> Namespace {
        let mut d = Decoder::new(bytes);
        let kv = d.decode_string();
        let _star = d.decode_string();
        let ns = d.decode_string();
        Namespace { kv, ns }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}/{}", self.kv, self.ns)
    }
}
