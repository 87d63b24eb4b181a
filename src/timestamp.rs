//! Wall-clock timestamp: a flat signed nanosecond count since the UNIX
//! epoch, stored and compared as a plain `i64`.
//!
//! Carries no leap-second or TAI correction machinery — the wire form
//! (`TME`, 8 bytes big-endian, two's-complement) is a direct reading of
//! the stored integer, so there is nothing to reconcile against a
//! leap-second table.

use std::convert::TryFrom;
use std::fmt;
use std::ops;
use std::time::{SystemTime, UNIX_EPOCH};

/// Nanoseconds since `1970-01-01T00:00:00Z`, signed so that instants before
/// the epoch are representable.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct Timestamp {
    nanos: i64,
}

impl Timestamp {
    /// The UNIX epoch itself.
    pub const EPOCH: Timestamp = Timestamp { nanos: 0 };

    /// Construct a timestamp from a raw nanosecond count.
    pub fn from_nanos(nanos: i64) -> Timestamp {
        Timestamp { nanos }
    }

    /// The raw nanosecond count, as stored and as written to the wire.
    pub fn as_nanos(self) -> i64 {
        self.nanos
    }

    /// Construct from whole seconds plus a sub-second nanosecond offset.
    pub fn from_sec_nanos(secs: i64, subsec_nanos: u32) -> Timestamp {
        Timestamp {
            nanos: secs.saturating_mul(1_000_000_000).saturating_add(subsec_nanos as i64),
        }
    }

    /// Whole seconds component, truncated toward negative infinity.
    pub fn as_secs(self) -> i64 {
        self.nanos.div_euclid(1_000_000_000)
    }

    /// Sub-second nanosecond component, always non-negative.
    pub fn subsec_nanos(self) -> u32 {
        self.nanos.rem_euclid(1_000_000_000) as u32
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:09}", self.as_secs(), self.subsec_nanos())
    }
}

impl ops::Add<i64> for Timestamp {
    type Output = Timestamp;
    fn add(self, rhs: i64) -> Timestamp {
        Timestamp::from_nanos(self.nanos.saturating_add(rhs))
    }
}

impl ops::Sub<i64> for Timestamp {
    type Output = Timestamp;
    fn sub(self, rhs: i64) -> Timestamp {
        Timestamp::from_nanos(self.nanos.saturating_sub(rhs))
    }
}

impl ops::Sub<Timestamp> for Timestamp {
    type Output = i64;
    fn sub(self, rhs: Timestamp) -> i64 {
        self.nanos.saturating_sub(rhs.nanos)
    }
}

impl TryFrom<SystemTime> for Timestamp {
    type Error = std::time::SystemTimeError;

    fn try_from(t: SystemTime) -> Result<Timestamp, Self::Error> {
        match t.duration_since(UNIX_EPOCH) {
            Ok(d) => Ok(Timestamp::from_nanos(d.as_nanos() as i64)),
            Err(e) => {
                let d = e.duration();
                Ok(Timestamp::from_nanos(-(d.as_nanos() as i64)))
            }
        }
    }
}

impl From<Timestamp> for SystemTime {
    fn from(t: Timestamp) -> SystemTime {
        if t.nanos >= 0 {
            UNIX_EPOCH + std::time::Duration::from_nanos(t.nanos as u64)
        } else {
            UNIX_EPOCH - std::time::Duration::from_nanos((-t.nanos) as u64)
        }
    }
}
