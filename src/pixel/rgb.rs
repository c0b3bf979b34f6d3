//! Opaque three-channel layouts, including the 32-bit padded variants.

use super::{
    Alpha8, Alpha16, Alpha32, AlphaF, Channel, Depth, Family, Gray8, Gray16, Gray32, GrayAlpha16,
    GrayAlpha32, GrayF, Pixel, Rgba32, Rgba64, Rgba128, ScaledVector, luminance,
};
use crate::format::PixelFormat;

rgb_pixel!(
    /// 8-bit R, G, B.
    #[derive(PartialEq, Eq, Hash)]
    Rgb24(u8) { r, g, b },
    Bits8
);
rgb_pixel!(
    /// 8-bit B, G, R.
    #[derive(PartialEq, Eq, Hash)]
    Bgr24(u8) { b, g, r },
    Bits8
);
rgb_pixel!(
    /// 16-bit R, G, B.
    #[derive(PartialEq, Eq, Hash)]
    Rgb48(u16) { r, g, b },
    Bits16
);
rgb_pixel!(
    /// 16-bit B, G, R.
    #[derive(PartialEq, Eq, Hash)]
    Bgr48(u16) { b, g, r },
    Bits16
);
rgb_pixel!(
    /// 32-bit R, G, B.
    #[derive(PartialEq, Eq, Hash)]
    Rgb96(u32) { r, g, b },
    Bits32
);
rgb_pixel!(
    /// `f32` R, G, B.
    RgbF(f32) { r, g, b },
    Wide
);
rgb_pixel!(
    /// 8-bit R, G, B followed by an unused byte.
    ///
    /// The padding byte is excluded from equality and hashing; `new`
    /// sets it to `0xFF`.
    Rgbx32(u8) { r, g, b, x },
    Bits8,
    pad x = 0xFF
);
rgb_pixel!(
    /// 8-bit B, G, R followed by an unused byte.
    ///
    /// The padding byte is excluded from equality and hashing; `new`
    /// sets it to `0xFF`.
    Bgrx32(u8) { b, g, r, x },
    Bits8,
    pad x = 0xFF
);
bitwise_eq!(RgbF);

macro_rules! padded_eq {
    ($($name:ident),+) => {$(
        impl PartialEq for $name {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.r == other.r && self.g == other.g && self.b == other.b
            }
        }

        impl Eq for $name {}

        impl core::hash::Hash for $name {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                [self.r, self.g, self.b].hash(state);
            }
        }
    )+};
}

padded_eq!(Rgbx32, Bgrx32);

#[cfg(test)]
mod tests {
    use super::*;
    use core::hash::{Hash, Hasher};
    use std::collections::hash_map::DefaultHasher;

    fn hash_of<T: Hash>(v: &T) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    #[test]
    fn memory_order_follows_declaration() {
        let p = Bgr24::new(1, 2, 3);
        assert_eq!(bytemuck::bytes_of(&p), &[3, 2, 1]);
        let p = Bgrx32::new(1, 2, 3);
        assert_eq!(bytemuck::bytes_of(&p), &[3, 2, 1, 0xFF]);
    }

    #[test]
    fn padding_is_not_significant() {
        let a = Rgbx32 { r: 1, g: 2, b: 3, x: 0 };
        let b = Rgbx32 { r: 1, g: 2, b: 3, x: 0xAA };
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
        assert_ne!(a, Rgbx32::new(1, 2, 4));
    }

    #[test]
    fn opaque_reports_full_alpha() {
        assert_eq!(Rgb48::new(0, 0, 0).to_alpha_f(), AlphaF::new(1.0));
        assert_eq!(Bgr24::from_rgba32(Rgba32::new(1, 2, 3, 0)), Bgr24::new(1, 2, 3));
        assert_eq!(RgbF::new(0.0, 0.0, 0.0).to_scaled().a, 1.0);
    }

    #[test]
    fn depth_conversion_is_exact_rounding() {
        assert_eq!(Rgb24::from_rgb48(Rgb48::new(0xFFFF, 0x7F7F, 0x0080)), Rgb24::new(255, 127, 0));
        assert_eq!(Bgr48::from_rgb24(Rgb24::new(1, 2, 3)), Bgr48::new(257, 514, 771));
        assert_eq!(Rgb96::from_rgb24(Rgb24::new(255, 0, 1)).to_rgb24(), Rgb24::new(255, 0, 1));
    }
}
