//! Alpha-only layouts. Color is implicitly white.

use super::{
    Channel, Depth, Family, Gray8, Gray16, Gray32, GrayAlpha16, GrayAlpha32, GrayF, Pixel, Rgb24,
    Rgb48, Rgba32, Rgba64, Rgba128, ScaledVector,
};
use crate::format::PixelFormat;

alpha_pixel!(
    /// 8-bit alpha.
    #[derive(PartialEq, Eq, Hash)]
    Alpha8(u8),
    Bits8
);
alpha_pixel!(
    /// 16-bit alpha.
    #[derive(PartialEq, Eq, Hash)]
    Alpha16(u16),
    Bits16
);
alpha_pixel!(
    /// 32-bit alpha.
    #[derive(PartialEq, Eq, Hash)]
    Alpha32(u32),
    Bits32
);
alpha_pixel!(
    /// `f32` alpha.
    AlphaF(f32),
    Wide
);
bitwise_eq!(AlphaF);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{Rgba32, RgbaF};

    #[test]
    fn alpha_scales_to_white() {
        let v = Alpha8::new(51).to_scaled();
        assert_eq!((v.r, v.g, v.b), (1.0, 1.0, 1.0));
        assert!((v.a - 0.2).abs() < 1e-6);
    }

    #[test]
    fn colour_from_alpha_is_white() {
        assert_eq!(
            Rgba32::from_alpha8(Alpha8::new(7)),
            Rgba32::new(255, 255, 255, 7)
        );
        assert_eq!(Rgb24::from_alpha8(Alpha8::new(7)), Rgb24::new(255, 255, 255));
        assert_eq!(Gray8::from_alpha16(Alpha16::new(0)), Gray8::new(255));
    }

    #[test]
    fn alpha_from_opaque_is_max() {
        assert_eq!(Rgb24::new(1, 2, 3).to_alpha8(), Alpha8::new(255));
        assert_eq!(Gray16::new(9).to_alpha_f(), AlphaF::new(1.0));
        assert_eq!(Alpha8::from_gray8(Gray8::new(0)), Alpha8::new(255));
    }

    #[test]
    fn alpha_follows_colour_alpha() {
        assert_eq!(Alpha16::from_rgba32(Rgba32::new(0, 0, 0, 255)), Alpha16::new(65535));
        assert_eq!(Alpha8::from_scaled(RgbaF::new(0.0, 0.0, 0.0, 0.5).to_scaled()), Alpha8::new(128));
        assert_eq!(Alpha8::from_gray_alpha16(GrayAlpha16::new(3, 4)), Alpha8::new(4));
    }

    #[test]
    fn wide_alpha_keeps_ends() {
        assert_eq!(Alpha32::new(u32::MAX).to_alpha8(), Alpha8::new(255));
        assert_eq!(Alpha32::from_alpha8(Alpha8::new(255)), Alpha32::new(u32::MAX));
        assert_eq!(Alpha32::from_alpha16(Alpha16::new(1)), Alpha32::new(65537));
        assert_eq!(Alpha32::new(8_421_505).to_alpha8(), Alpha8::new(1));
        assert_eq!(Rgba128::from_alpha32(Alpha32::new(7)).a, 7);
        assert_eq!(Alpha32::from_rgba128(Rgba128::new(0, 0, 0, 9)), Alpha32::new(9));
    }

    #[test]
    fn float_alpha_equality_is_bitwise() {
        assert_ne!(AlphaF::new(0.0), AlphaF::new(-0.0));
        assert_eq!(AlphaF::new(f32::NAN), AlphaF::new(f32::NAN));
    }
}
