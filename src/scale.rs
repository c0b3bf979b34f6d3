//! Channel value scaling between bit depths.
//!
//! Integer-to-integer rescaling is exact: every function rounds
//! `value * dst_max / src_max` to the nearest integer using integer
//! arithmetic only. Because every `2^n - 1` divisor is odd, a result never
//! lands exactly on `.5`, so the rounding direction is never ambiguous and
//! the integer result always matches `round(float(value) / src_max * dst_max)`.
//!
//! Float-to-integer conversion clamps to `[0, 1]` and rounds with
//! "+0.5 then truncate". NaN maps to 0. Nothing here panics.

/// Largest value representable in `bits` bits (1..=32).
#[inline]
pub const fn max_value(bits: u32) -> u32 {
    if bits >= 32 {
        u32::MAX
    } else {
        (1u32 << bits) - 1
    }
}

/// Rescale an unsigned value from `src_bits` to `dst_bits` (both 1..=32).
///
/// Bits above `src_bits` are masked off before widening.
#[inline]
pub const fn rescale(value: u32, src_bits: u32, dst_bits: u32) -> u32 {
    let src_max = max_value(src_bits) as u64;
    let dst_max = max_value(dst_bits) as u64;
    let v = value as u64 & src_max;
    if src_bits == dst_bits {
        return v as u32;
    }
    ((v * dst_max + src_max / 2) / src_max) as u32
}

// ---------------------------------------------------------------------------
// 8 / 16 / 32-bit integer
// ---------------------------------------------------------------------------

/// Widen 8 → 16 bits (`v * 257`, exact).
#[inline]
pub const fn u8_to_u16(v: u8) -> u16 {
    v as u16 * 257
}

/// Narrow 16 → 8 bits with rounding: `round(v / 257)` via multiply-and-shift.
#[inline]
pub const fn u16_to_u8(v: u16) -> u8 {
    ((v as u32 * 255 + 32895) >> 16) as u8
}

/// Widen 8 → 32 bits (byte replication, exact).
#[inline]
pub const fn u8_to_u32(v: u8) -> u32 {
    v as u32 * 0x0101_0101
}

/// Widen 16 → 32 bits (exact).
#[inline]
pub const fn u16_to_u32(v: u16) -> u32 {
    v as u32 * 0x0001_0001
}

/// Narrow 32 → 8 bits with rounding.
#[inline]
pub const fn u32_to_u8(v: u32) -> u8 {
    ((v as u64 + 8_421_504) / 16_843_009) as u8
}

/// Narrow 32 → 16 bits with rounding.
#[inline]
pub const fn u32_to_u16(v: u32) -> u16 {
    ((v as u64 + 32_768) / 65_537) as u16
}

// ---------------------------------------------------------------------------
// Sub-byte widths (bit-field formats)
// ---------------------------------------------------------------------------

/// Expand a 1-bit value to 8 bits.
#[inline]
pub const fn u1_to_u8(v: u8) -> u8 {
    (v & 0x01).wrapping_mul(0xFF)
}

/// Expand a 2-bit value to 8 bits.
#[inline]
pub const fn u2_to_u8(v: u8) -> u8 {
    (v & 0x03).wrapping_mul(0x55)
}

/// Expand a 4-bit value to 8 bits.
#[inline]
pub const fn u4_to_u8(v: u8) -> u8 {
    (v & 0x0F).wrapping_mul(0x11)
}

/// Narrow 8 bits to a 1-bit value (threshold at 128).
#[inline]
pub const fn u8_to_u1(v: u8) -> u8 {
    rescale(v as u32, 8, 1) as u8
}

/// Narrow 8 bits to a 2-bit value.
#[inline]
pub const fn u8_to_u2(v: u8) -> u8 {
    rescale(v as u32, 8, 2) as u8
}

/// Narrow 8 bits to a 4-bit value.
#[inline]
pub const fn u8_to_u4(v: u8) -> u8 {
    rescale(v as u32, 8, 4) as u8
}

// ---------------------------------------------------------------------------
// Float
// ---------------------------------------------------------------------------

/// Clamp to `[0, 1]`, mapping NaN to 0.
#[inline]
pub fn clamp_unit(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Clamp to `[-1, 1]`, mapping NaN to 0.
#[inline]
pub fn clamp_signed(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(-1.0, 1.0) }
}

#[inline]
pub fn u8_to_f32(v: u8) -> f32 {
    v as f32 / 255.0
}

#[inline]
pub fn u16_to_f32(v: u16) -> f32 {
    v as f32 / 65535.0
}

#[inline]
pub fn u32_to_f32(v: u32) -> f32 {
    (v as f64 / u32::MAX as f64) as f32
}

#[inline]
pub fn f32_to_u8(v: f32) -> u8 {
    (clamp_unit(v) * 255.0 + 0.5) as u8
}

#[inline]
pub fn f32_to_u16(v: f32) -> u16 {
    (clamp_unit(v) * 65535.0 + 0.5) as u16
}

#[inline]
pub fn f32_to_u32(v: f32) -> u32 {
    (clamp_unit(v) as f64 * u32::MAX as f64 + 0.5) as u32
}

/// `bits`-wide unsigned value to `[0, 1]`.
#[inline]
pub fn unorm_to_f32(v: u32, bits: u32) -> f32 {
    let max = max_value(bits);
    ((v & max) as f64 / max as f64) as f32
}

/// `[0, 1]` to a `bits`-wide unsigned value.
#[inline]
pub fn f32_to_unorm(v: f32, bits: u32) -> u32 {
    (clamp_unit(v) as f64 * max_value(bits) as f64 + 0.5) as u32
}

/// Round half away from zero, saturating into `i32`.
#[inline]
pub fn round_half_away(v: f32) -> i32 {
    if v >= 0.0 {
        (v + 0.5) as i32
    } else {
        (v - 0.5) as i32
    }
}

/// Signed-normalized 8-bit to `[-1, 1]`. `-128` and `-127` both map to `-1`.
#[inline]
pub fn snorm8_to_f32(v: i8) -> f32 {
    (v as f32 / 127.0).max(-1.0)
}

#[inline]
pub fn f32_to_snorm8(v: f32) -> i8 {
    round_half_away(clamp_signed(v) * 127.0) as i8
}

/// Signed-normalized 16-bit to `[-1, 1]`. `-32768` and `-32767` both map to `-1`.
#[inline]
pub fn snorm16_to_f32(v: i16) -> f32 {
    (v as f32 / 32767.0).max(-1.0)
}

#[inline]
pub fn f32_to_snorm16(v: f32) -> i16 {
    round_half_away(clamp_signed(v) * 32767.0) as i16
}

/// Map `[-1, 1]` onto `[0, 1]`.
#[inline]
pub fn signed_to_unit(v: f32) -> f32 {
    (clamp_signed(v) + 1.0) * 0.5
}

/// Map `[0, 1]` onto `[-1, 1]`.
#[inline]
pub fn unit_to_signed(v: f32) -> f32 {
    clamp_unit(v) * 2.0 - 1.0
}

/// Full `i16` range to `[0, 1]` (`-32768 → 0`, `32767 → 1`).
#[inline]
pub fn i16_to_unit(v: i16) -> f32 {
    (v as f32 + 32768.0) / 65535.0
}

#[inline]
pub fn unit_to_i16(v: f32) -> i16 {
    ((clamp_unit(v) * 65535.0 + 0.5) as i32 - 32768) as i16
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_survive_every_integer_pair() {
        let widths = [1u32, 2, 4, 5, 6, 8, 10, 16, 32];
        for &src in &widths {
            for &dst in &widths {
                assert_eq!(rescale(0, src, dst), 0, "{src}->{dst} zero");
                assert_eq!(
                    rescale(max_value(src), src, dst),
                    max_value(dst),
                    "{src}->{dst} max"
                );
            }
        }
        assert_eq!(u16_to_u8(u8_to_u16(0)), 0);
        assert_eq!(u16_to_u8(u8_to_u16(255)), 255);
        assert_eq!(u16_to_u8(65535), 255);
        assert_eq!(u32_to_u8(u32::MAX), 255);
        assert_eq!(u32_to_u16(u32::MAX), 65535);
        assert_eq!(u32_to_u8(0), 0);
    }

    #[test]
    fn u16_to_u8_matches_rounded_division() {
        for v in 0..=u16::MAX {
            let expected = ((v as u32 * 2 + 257) / (2 * 257)) as u8;
            assert_eq!(u16_to_u8(v), expected, "v={v}");
            assert_eq!(rescale(v as u32, 16, 8) as u8, expected, "rescale v={v}");
        }
    }

    #[test]
    fn u16_to_u8_matches_float_path() {
        for v in 0..=u16::MAX {
            assert_eq!(u16_to_u8(v), f32_to_u8(u16_to_f32(v)), "v={v}");
        }
    }

    #[test]
    fn widen_then_narrow_is_identity() {
        for v in 0..=u8::MAX {
            assert_eq!(u16_to_u8(u8_to_u16(v)), v);
            assert_eq!(u32_to_u8(u8_to_u32(v)), v);
            assert_eq!(f32_to_u8(u8_to_f32(v)), v);
        }
        for v in (0..=u16::MAX).step_by(7) {
            assert_eq!(u32_to_u16(u16_to_u32(v)), v);
            assert_eq!(f32_to_u16(u16_to_f32(v)), v);
        }
    }

    #[test]
    fn sub_byte_expansion_matches_rescale() {
        for v in 0..2u8 {
            assert_eq!(u1_to_u8(v) as u32, rescale(v as u32, 1, 8));
        }
        for v in 0..4u8 {
            assert_eq!(u2_to_u8(v) as u32, rescale(v as u32, 2, 8));
            assert_eq!(u8_to_u2(u2_to_u8(v)), v);
        }
        for v in 0..16u8 {
            assert_eq!(u4_to_u8(v) as u32, rescale(v as u32, 4, 8));
            assert_eq!(u8_to_u4(u4_to_u8(v)), v);
        }
        assert_eq!(u8_to_u1(127), 0);
        assert_eq!(u8_to_u1(128), 1);
    }

    #[test]
    fn float_input_is_clamped() {
        assert_eq!(f32_to_u8(-3.0), 0);
        assert_eq!(f32_to_u8(7.5), 255);
        assert_eq!(f32_to_u8(f32::NAN), 0);
        assert_eq!(f32_to_u16(f32::INFINITY), 65535);
        assert_eq!(f32_to_u32(2.0), u32::MAX);
        assert_eq!(f32_to_snorm8(-9.0), -127);
        assert_eq!(f32_to_snorm16(9.0), 32767);
    }

    #[test]
    fn half_rounds_away_from_zero() {
        assert_eq!(f32_to_u8(0.5 / 255.0), 1);
        assert_eq!(round_half_away(2.5), 3);
        assert_eq!(round_half_away(-2.5), -3);
        assert_eq!(round_half_away(-2.4), -2);
    }

    #[test]
    fn snorm_round_trips() {
        for v in -127i8..=127 {
            assert_eq!(f32_to_snorm8(snorm8_to_f32(v)), v);
        }
        assert_eq!(snorm8_to_f32(-128), -1.0);
        for v in (-32767i16..=32767).step_by(13) {
            assert_eq!(f32_to_snorm16(snorm16_to_f32(v)), v);
        }
    }

    #[test]
    fn full_i16_range_maps_to_unit() {
        assert_eq!(i16_to_unit(i16::MIN), 0.0);
        assert_eq!(i16_to_unit(i16::MAX), 1.0);
        for v in (i16::MIN..=i16::MAX).step_by(11) {
            assert_eq!(unit_to_i16(i16_to_unit(v)), v);
        }
    }

    #[test]
    fn unorm_helpers_agree_with_rescale() {
        for bits in [4u32, 5, 6, 10] {
            for v in 0..=max_value(bits) {
                assert_eq!(f32_to_unorm(unorm_to_f32(v, bits), bits), v);
                assert_eq!(
                    f32_to_u8(unorm_to_f32(v, bits)) as u32,
                    rescale(v, bits, 8),
                    "bits={bits} v={v}"
                );
            }
        }
    }
}
