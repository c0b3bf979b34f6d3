//! Bit-field layouts.
//!
//! Each type wraps one native-endian integer. Fields are described by a
//! component list running from the least significant bit upward, and every
//! read or write goes through that list with shift and mask arithmetic.
//! Packing rounds each channel to its field width on its own before
//! placing it; unpacking masks before widening.

use crate::descriptor::{ChannelRole, Component, fields};
use crate::format::PixelFormat;
use crate::scale;

use super::{Depth, Family, PackedPixel, Pixel, Rgb24, Rgb48, Rgba32, Rgba64, ScaledVector};

/// The component playing `role`, or a zero-width component when absent.
const fn find(list: &[Component], role: ChannelRole) -> Component {
    let mut i = 0;
    while i < list.len() {
        if list[i].role as u8 == role as u8 {
            return list[i];
        }
        i += 1;
    }
    Component::new(ChannelRole::Padding, crate::descriptor::ChannelDomain::BitField, 0, 0)
}

#[inline]
const fn extract(bits: u32, c: Component) -> u32 {
    (bits >> c.offset) & c.mask()
}

#[inline]
const fn insert(bits: u32, c: Component, value: u32) -> u32 {
    let mask = c.mask() << c.offset;
    (bits & !mask) | ((value & c.mask()) << c.offset)
}

macro_rules! bit_field_pixel {
    (
        $(#[$meta:meta])*
        $name:ident($t:ty), $depth:ident, [$($role:ident $bits:literal),+ $(,)?]
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
        #[repr(transparent)]
        pub struct $name($t);

        impl $name {
            /// Fields from the least significant bit upward.
            pub(crate) const FIELDS: &'static [Component] =
                &fields([$((ChannelRole::$role, $bits)),+]);

            const R: Component = find(Self::FIELDS, ChannelRole::Red);
            const G: Component = find(Self::FIELDS, ChannelRole::Green);
            const B: Component = find(Self::FIELDS, ChannelRole::Blue);
            const A: Component = find(Self::FIELDS, ChannelRole::Alpha);
            const HAS_ALPHA: bool = Self::A.bits > 0;

            /// Build from raw field values. Bits beyond each field's width are
            /// discarded; `a` is ignored when the layout has no alpha field.
            #[inline]
            pub const fn from_fields(r: u32, g: u32, b: u32, a: u32) -> Self {
                let mut bits = insert(0, Self::R, r);
                bits = insert(bits, Self::G, g);
                bits = insert(bits, Self::B, b);
                bits = insert(bits, Self::A, a);
                Self(bits as $t)
            }

            /// Raw value of the field playing `role` (0 when absent).
            #[inline]
            pub const fn field(self, role: ChannelRole) -> u32 {
                extract(self.0 as u32, find(Self::FIELDS, role))
            }

            /// Copy with the field playing `role` replaced. No-op when absent.
            #[inline]
            pub const fn with_field(self, role: ChannelRole, value: u32) -> Self {
                Self(insert(self.0 as u32, find(Self::FIELDS, role), value) as $t)
            }

            #[inline]
            const fn channel(self, c: Component, dst_bits: u32) -> u32 {
                if c.bits == 0 {
                    return scale::max_value(dst_bits);
                }
                scale::rescale(extract(self.0 as u32, c), c.bits as u32, dst_bits)
            }

            #[inline]
            const fn from_depth(r: u32, g: u32, b: u32, a: u32, src_bits: u32) -> Self {
                Self::from_fields(
                    scale::rescale(r, src_bits, Self::R.bits as u32),
                    scale::rescale(g, src_bits, Self::G.bits as u32),
                    scale::rescale(b, src_bits, Self::B.bits as u32),
                    scale::rescale(a, src_bits, Self::A.bits as u32),
                )
            }

            #[inline]
            fn unit(self, c: Component) -> f32 {
                scale::unorm_to_f32(extract(self.0 as u32, c), c.bits as u32)
            }
        }

        impl Pixel for $name {
            const FORMAT: PixelFormat = PixelFormat::$name;
            const FAMILY: Family = Family::Color;
            const DEPTH: Depth = Depth::$depth;

            #[inline]
            fn from_scaled(v: ScaledVector) -> Self {
                Self::from_fields(
                    scale::f32_to_unorm(v.r, Self::R.bits as u32),
                    scale::f32_to_unorm(v.g, Self::G.bits as u32),
                    scale::f32_to_unorm(v.b, Self::B.bits as u32),
                    scale::f32_to_unorm(v.a, Self::A.bits as u32),
                )
            }

            #[inline]
            fn to_scaled(self) -> ScaledVector {
                let a = if Self::HAS_ALPHA { self.unit(Self::A) } else { 1.0 };
                ScaledVector::new(self.unit(Self::R), self.unit(Self::G), self.unit(Self::B), a)
            }

            #[inline]
            fn from_rgb24(v: Rgb24) -> Self {
                Self::from_depth(v.r as u32, v.g as u32, v.b as u32, 0xFF, 8)
            }
            #[inline]
            fn from_rgb48(v: Rgb48) -> Self {
                Self::from_depth(v.r as u32, v.g as u32, v.b as u32, 0xFFFF, 16)
            }
            #[inline]
            fn from_rgba32(v: Rgba32) -> Self {
                Self::from_depth(v.r as u32, v.g as u32, v.b as u32, v.a as u32, 8)
            }
            #[inline]
            fn from_rgba64(v: Rgba64) -> Self {
                Self::from_depth(v.r as u32, v.g as u32, v.b as u32, v.a as u32, 16)
            }

            #[inline]
            fn to_rgb24(self) -> Rgb24 {
                Rgb24::new(
                    self.channel(Self::R, 8) as u8,
                    self.channel(Self::G, 8) as u8,
                    self.channel(Self::B, 8) as u8,
                )
            }
            #[inline]
            fn to_rgb48(self) -> Rgb48 {
                Rgb48::new(
                    self.channel(Self::R, 16) as u16,
                    self.channel(Self::G, 16) as u16,
                    self.channel(Self::B, 16) as u16,
                )
            }
            #[inline]
            fn to_rgba32(self) -> Rgba32 {
                Rgba32::new(
                    self.channel(Self::R, 8) as u8,
                    self.channel(Self::G, 8) as u8,
                    self.channel(Self::B, 8) as u8,
                    self.channel(Self::A, 8) as u8,
                )
            }
            #[inline]
            fn to_rgba64(self) -> Rgba64 {
                Rgba64::new(
                    self.channel(Self::R, 16) as u16,
                    self.channel(Self::G, 16) as u16,
                    self.channel(Self::B, 16) as u16,
                    self.channel(Self::A, 16) as u16,
                )
            }
        }

        impl PackedPixel for $name {
            type Packed = $t;

            #[inline]
            fn pack(self) -> $t {
                self.0
            }

            #[inline]
            fn unpack(packed: $t) -> Self {
                Self(packed)
            }
        }
    };
}

bit_field_pixel!(
    /// 5-bit blue, 6-bit green, 5-bit red in one `u16` (blue in the low bits).
    Bgr565(u16), Bits8, [Blue 5, Green 6, Red 5]
);
bit_field_pixel!(
    /// 4 bits each of blue, green, red, alpha in one `u16` (blue in the low bits).
    Bgra4444(u16), Bits8, [Blue 4, Green 4, Red 4, Alpha 4]
);
bit_field_pixel!(
    /// 5-bit blue, green, red and 1-bit alpha in one `u16` (blue in the low bits).
    Bgra5551(u16), Bits8, [Blue 5, Green 5, Red 5, Alpha 1]
);
bit_field_pixel!(
    /// 10-bit red, green, blue and 2-bit alpha in one `u32` (red in the low bits).
    Rgba1010102(u32), Bits16, [Red 10, Green 10, Blue 10, Alpha 2]
);

impl Bgr565 {
    /// From field values: `r` and `b` in `0..32`, `g` in `0..64`.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self::from_fields(r as u32, g as u32, b as u32, 0)
    }
}

impl Bgra4444 {
    /// From 4-bit field values.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_fields(r as u32, g as u32, b as u32, a as u32)
    }
}

impl Bgra5551 {
    /// From field values: colour in `0..32`, `a` is 0 or 1.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self::from_fields(r as u32, g as u32, b as u32, a as u32)
    }
}

impl Rgba1010102 {
    /// From field values: colour in `0..1024`, `a` in `0..4`.
    #[inline]
    pub const fn new(r: u16, g: u16, b: u16, a: u8) -> Self {
        Self::from_fields(r as u32, g as u32, b as u32, a as u32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{Alpha8, Gray8};

    #[test]
    fn bgr565_field_positions() {
        let p = Bgr565::new(0x1F, 0, 0);
        assert_eq!(p.pack(), 0xF800);
        let p = Bgr565::new(0, 0x3F, 0);
        assert_eq!(p.pack(), 0x07E0);
        let p = Bgr565::new(0, 0, 0x1F);
        assert_eq!(p.pack(), 0x001F);
        assert_eq!(Bgr565::unpack(0x07E0).field(ChannelRole::Green), 0x3F);
    }

    #[test]
    fn bgra5551_alpha_is_top_bit() {
        assert_eq!(Bgra5551::new(0, 0, 0, 1).pack(), 0x8000);
        assert_eq!(Bgra5551::new(0x1F, 0, 0, 0).pack(), 0x7C00);
        assert_eq!(Bgra4444::new(0xF, 0, 0, 0).pack(), 0x0F00);
        assert_eq!(Bgra4444::new(0, 0, 0, 0xF).pack(), 0xF000);
    }

    #[test]
    fn rgba1010102_field_positions() {
        let p = Rgba1010102::new(0x3FF, 0, 0, 0);
        assert_eq!(p.pack(), 0x0000_03FF);
        let p = Rgba1010102::new(0, 0, 0, 3);
        assert_eq!(p.pack(), 0xC000_0000);
        assert_eq!(Rgba1010102::new(1, 2, 3, 1).field(ChannelRole::Blue), 3);
    }

    #[test]
    fn excess_bits_are_masked() {
        assert_eq!(Bgr565::new(0xFF, 0, 0), Bgr565::new(0x1F, 0, 0));
        let p = Bgr565::default().with_field(ChannelRole::Alpha, 1);
        assert_eq!(p.pack(), 0);
    }

    #[test]
    fn widening_reaches_full_range() {
        let white = Bgr565::new(0x1F, 0x3F, 0x1F);
        assert_eq!(white.to_rgba32(), Rgba32::new(255, 255, 255, 255));
        assert_eq!(white.to_rgba64(), Rgba64::new(65535, 65535, 65535, 65535));
        assert_eq!(Bgr565::default().to_rgb24(), Rgb24::new(0, 0, 0));
        assert_eq!(Bgr565::new(0x10, 0x20, 0x08).to_rgb24(), Rgb24::new(132, 130, 66));
    }

    #[test]
    fn narrowing_rounds_each_channel() {
        // 8-bit 4 -> round(4 * 31 / 255) = 0; 5 -> 1 (0.607 rounds up).
        assert_eq!(Bgr565::from_rgb24(Rgb24::new(4, 0, 5)), Bgr565::new(0, 0, 1));
        assert_eq!(Bgra5551::from_rgba32(Rgba32::new(0, 0, 0, 127)).field(ChannelRole::Alpha), 0);
        assert_eq!(Bgra5551::from_rgba32(Rgba32::new(0, 0, 0, 128)).field(ChannelRole::Alpha), 1);
    }

    #[test]
    fn every_bgr565_value_round_trips_through_bytes() {
        for raw in 0..=u16::MAX {
            let p = Bgr565::unpack(raw);
            assert_eq!(Bgr565::from_rgba32(p.to_rgba32()), p);
            assert_eq!(Bgr565::from_scaled(p.to_scaled()), p);
        }
    }

    #[test]
    fn every_bgra4444_value_round_trips() {
        for raw in 0..=u16::MAX {
            let p = Bgra4444::unpack(raw);
            assert_eq!(Bgra4444::from_rgba32(p.to_rgba32()), p);
        }
    }

    #[test]
    fn rgba1010102_round_trips_through_16_bits() {
        for v in 0..1024u16 {
            let p = Rgba1010102::new(v, 1023 - v, v / 2, (v % 4) as u8);
            assert_eq!(Rgba1010102::from_rgba64(p.to_rgba64()), p);
            assert_eq!(Rgba1010102::from_scaled(p.to_scaled()), p);
        }
    }

    #[test]
    fn opaque_bit_field_reports_full_alpha() {
        assert_eq!(Bgr565::new(1, 2, 3).to_alpha8(), Alpha8::new(255));
        assert_eq!(Bgr565::new(1, 2, 3).to_scaled().a, 1.0);
        assert_eq!(Bgr565::from_gray8(Gray8::new(255)), Bgr565::new(0x1F, 0x3F, 0x1F));
    }
}
