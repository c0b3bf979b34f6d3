//! Single-channel luminance layouts. Always opaque.

use half::f16;

use super::{
    Alpha8, Alpha16, Alpha32, AlphaF, Channel, Depth, Family, GrayAlpha16, GrayAlpha32, Pixel,
    Rgb24, Rgb48, Rgba32, Rgba64, Rgba128, ScaledVector,
};
use crate::format::PixelFormat;

gray_pixel!(
    /// 8-bit luminance.
    #[derive(PartialEq, Eq, Hash)]
    Gray8(u8),
    Bits8
);
gray_pixel!(
    /// 16-bit luminance.
    #[derive(PartialEq, Eq, Hash)]
    Gray16(u16),
    Bits16
);
gray_pixel!(
    /// 32-bit luminance.
    #[derive(PartialEq, Eq, Hash)]
    Gray32(u32),
    Bits32
);
gray_pixel!(
    /// `f32` luminance.
    GrayF(f32),
    Wide
);
gray_pixel!(
    /// Half-float luminance.
    GrayHalf(f16),
    Wide
);
bitwise_eq!(GrayF, GrayHalf);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{Bgra32, RgbaF};

    #[test]
    fn gray_replicates_into_colour() {
        assert_eq!(Gray8::new(77).to_rgba32(), Rgba32::new(77, 77, 77, 255));
        assert_eq!(Bgra32::from_gray8(Gray8::new(77)), Bgra32::new(77, 77, 77, 255));
        assert_eq!(Gray16::new(0x1234).to_rgb48(), Rgb48::new(0x1234, 0x1234, 0x1234));
        let f = RgbaF::from_gray_f(GrayF::new(0.25));
        assert_eq!(f, RgbaF::new(0.25, 0.25, 0.25, 1.0));
    }

    #[test]
    fn luminance_from_colour_ignores_alpha() {
        let opaque = Gray8::from_rgba32(Rgba32::new(200, 100, 50, 255));
        let clear = Gray8::from_rgba32(Rgba32::new(200, 100, 50, 0));
        assert_eq!(opaque, clear);
        let (r, g, b) = (200.0f32 / 255.0, 100.0f32 / 255.0, 50.0f32 / 255.0);
        let expected = 0.2126 * r + 0.7152 * g + 0.0722 * b;
        assert_eq!(opaque.l, (expected * 255.0f32 + 0.5) as u8);
    }

    #[test]
    fn gray_from_gray_colour_is_exact() {
        for v in 0..=255u8 {
            assert_eq!(Gray8::from_rgb24(Rgb24::new(v, v, v)), Gray8::new(v));
        }
    }

    #[test]
    fn depth_changes_round() {
        assert_eq!(Gray8::from_gray16(Gray16::new(0x8080)), Gray8::new(0x80));
        assert_eq!(Gray16::from_gray8(Gray8::new(0xAB)), Gray16::new(0xABAB));
        assert_eq!(Gray32::new(u32::MAX).to_gray16(), Gray16::new(65535));
    }

    #[test]
    fn half_gray_round_trips_bytes() {
        for v in 0..=255u8 {
            let h = GrayHalf::from_gray8(Gray8::new(v));
            assert_eq!(h.to_gray8(), Gray8::new(v));
        }
    }

    #[test]
    fn gray_alpha_from_gray_is_opaque() {
        assert_eq!(Gray8::new(5).to_gray_alpha16(), GrayAlpha16::new(5, 255));
        assert_eq!(Gray8::new(5).to_alpha8(), Alpha8::new(255));
    }
}
