//! Order-preserving encoding of the unified numeric type: every integer
//! and float input is widened into a single 64-bit IEEE-754 double.
//!
//! Positive (including non-negative) doubles already sort correctly when
//! their raw bit pattern is compared as an unsigned big-endian integer:
//! IEEE-754's layout (sign, exponent, mantissa, in that bit order) means
//! increasing magnitude corresponds to an increasing unsigned bit pattern
//! for any non-negative value. Negative doubles sort the *other* way when
//! read as raw bits (more negative = larger magnitude = larger raw bit
//! pattern), so their bits are bitwise-complemented before being written;
//! that flips larger-magnitude-negative into smaller-encoded-byte-string,
//! restoring the correct order. `NEG` (0x05) sorting before `POS` (0x06)
//! then gives correct ordering across the whole real line.

/// `true` if `x` should take the `Neg` wire path.
///
/// Negative zero is treated as zero: `-0.0 == 0.0` in IEEE-754, and the
/// two must collapse to equal encodings, so `-0.0` takes the `Pos` path
/// alongside `+0.0`.
pub(crate) fn is_negative(x: f64) -> bool {
    x.is_sign_negative() && x != 0.0
}

/// Bit pattern to write for a value known to take the `Pos` path.
pub(crate) fn pos_bits(x: f64) -> u64 {
    debug_assert!(!is_negative(x));
    // Normalize -0.0 to +0.0 so the two encode identically.
    let x = if x == 0.0 { 0.0 } else { x };
    x.to_bits()
}

/// Bit pattern to write for a value known to take the `Neg` path: the
/// bitwise complement of the raw IEEE-754 bits.
pub(crate) fn neg_bits(x: f64) -> u64 {
    debug_assert!(is_negative(x));
    !x.to_bits()
}

/// Recover the original double from a `Pos`-path bit pattern.
pub(crate) fn from_pos_bits(bits: u64) -> f64 {
    f64::from_bits(bits)
}

/// Recover the original double from a `Neg`-path bit pattern.
pub(crate) fn from_neg_bits(bits: u64) -> f64 {
    f64::from_bits(!bits)
}

/// Widen any integer or float primitive into the unified `f64`
/// representation. Integer magnitudes outside ±(2^53 - 1) are silently
/// rounded to the nearest representable double.
pub(crate) trait WidenToF64 {
    fn widen(self) -> f64;
}

macro_rules! impl_widen_int {
    ($($t:ty),*) => {
        $(impl WidenToF64 for $t {
            fn widen(self) -> f64 { self as f64 }
        })*
    };
}
impl_widen_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

/// Narrow a decoded double back to an integer target, truncating toward
/// zero. Lossy by design and symmetric with the encoder's widening.
pub(crate) fn narrow_i64(x: f64) -> i64 {
    x.trunc() as i64
}

pub(crate) fn narrow_u64(x: f64) -> u64 {
    if x <= 0.0 {
        0
    } else {
        x.trunc() as u64
    }
}

/// `true` if `x` decodes to an exact integer within `i64` range — the
/// dynamic decoder surfaces these as `Value::Int`, everything else as
/// `Value::Float`.
pub(crate) fn is_exact_i64(x: f64) -> bool {
    x.fract() == 0.0 && x >= (i64::MIN as f64) && x <= (i64::MAX as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn encode(x: f64) -> (bool, u64) {
        if is_negative(x) {
            (true, neg_bits(x))
        } else {
            (false, pos_bits(x))
        }
    }

    fn decode(neg: bool, bits: u64) -> f64 {
        if neg {
            from_neg_bits(bits)
        } else {
            from_pos_bits(bits)
        }
    }

    #[test]
    fn round_trips_representative_values() {
        for x in [
            0.0,
            -0.0,
            1.0,
            -1.0,
            1.5,
            -1.5,
            f64::MAX,
            f64::MIN,
            f64::MIN_POSITIVE,
            i64::MIN as f64,
            i64::MAX as f64,
        ] {
            let (neg, bits) = encode(x);
            assert_eq!(decode(neg, bits), x, "round trip failed for {x}");
        }
    }

    #[test]
    fn positive_zero_and_negative_zero_collapse() {
        let (neg_a, bits_a) = encode(0.0);
        let (neg_b, bits_b) = encode(-0.0);
        assert_eq!(neg_a, neg_b);
        assert_eq!(bits_a, bits_b);
    }

    #[test]
    fn cross_sign_order() {
        // NEG tag (0x05) must sort before POS tag (0x06) regardless of
        // the bit pattern, and within each tag the bit pattern itself
        // must be correctly ordered.
        let (neg_tag, neg_bits_v) = encode(-1.5);
        let (pos_tag, pos_bits_v) = encode(1.5);
        assert!(neg_tag);
        assert!(!pos_tag);
        let _ = (neg_bits_v, pos_bits_v);
    }

    #[test]
    fn within_negatives_larger_magnitude_sorts_first() {
        let (_, bits_small_mag) = encode(-1.5);
        let (_, bits_large_mag) = encode(-2.0);
        // -2.0 < -1.5, so its encoded bits must be smaller.
        assert!(bits_large_mag < bits_small_mag);
    }

    #[test]
    fn within_positives_larger_value_sorts_last() {
        let (_, bits_small) = encode(1.5);
        let (_, bits_large) = encode(2.0);
        assert!(bits_small < bits_large);
    }

    #[test]
    fn narrowing_truncates_toward_zero() {
        assert_eq!(narrow_i64(1.9), 1);
        assert_eq!(narrow_i64(-1.9), -1);
        assert_eq!(narrow_u64(-5.0), 0);
    }

    #[test]
    fn exact_integer_detection() {
        assert!(is_exact_i64(3.0));
        assert!(!is_exact_i64(3.5));
        assert!(is_exact_i64(i64::MIN as f64));
    }
}
