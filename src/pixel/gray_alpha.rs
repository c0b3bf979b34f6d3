//! Luminance with alpha.

use super::{
    Alpha8, Alpha16, Alpha32, AlphaF, Channel, Depth, Family, Gray8, Gray16, Gray32, GrayF, Pixel,
    Rgb24, Rgb48, Rgba32, Rgba64, Rgba128, ScaledVector,
};
use crate::format::PixelFormat;

gray_alpha_pixel!(
    /// 8-bit luminance and alpha, two bytes per pixel.
    #[derive(PartialEq, Eq, Hash)]
    GrayAlpha16(u8),
    Bits8
);
gray_alpha_pixel!(
    /// 16-bit luminance and alpha.
    #[derive(PartialEq, Eq, Hash)]
    GrayAlpha32(u16),
    Bits16
);
gray_alpha_pixel!(
    /// `f32` luminance and alpha.
    GrayAlphaF(f32),
    Wide
);
bitwise_eq!(GrayAlphaF);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_alpha_through_colour() {
        let c = GrayAlpha16::new(10, 20).to_rgba32();
        assert_eq!(c, Rgba32::new(10, 10, 10, 20));
        assert_eq!(GrayAlpha16::from_rgba32(c), GrayAlpha16::new(10, 20));
    }

    #[test]
    fn drops_alpha_into_gray() {
        assert_eq!(GrayAlpha32::new(0x0101, 0).to_gray8(), Gray8::new(1));
        assert_eq!(GrayAlpha16::new(9, 0).to_rgb24(), Rgb24::new(9, 9, 9));
    }

    #[test]
    fn alpha_role() {
        assert_eq!(GrayAlpha16::from_alpha8(Alpha8::new(3)), GrayAlpha16::new(255, 3));
        assert_eq!(GrayAlpha32::new(1, 0xFFFF).to_alpha16(), Alpha16::new(0xFFFF));
        assert_eq!(GrayAlphaF::from_gray8(Gray8::new(255)), GrayAlphaF::new(1.0, 1.0));
    }
}
