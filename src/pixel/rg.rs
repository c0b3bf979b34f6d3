//! Two-channel red/green layouts. Blue reads as zero and alpha as opaque.

use half::f16;

use super::{Channel, Depth, Family, Pixel, Rgba32, Rgba64, ScaledVector};
use crate::format::PixelFormat;

macro_rules! rg_pixel {
    ($(#[$meta:meta])* $name:ident($t:ty), $depth:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
        #[repr(C)]
        pub struct $name {
            pub r: $t,
            pub g: $t,
        }

        impl $name {
            #[inline]
            pub const fn new(r: $t, g: $t) -> Self {
                Self { r, g }
            }
        }

        impl Pixel for $name {
            const FORMAT: PixelFormat = PixelFormat::$name;
            const FAMILY: Family = Family::Color;
            const DEPTH: Depth = Depth::$depth;

            #[inline]
            fn from_scaled(v: ScaledVector) -> Self {
                Self::new(<$t as Channel>::from_unit(v.r), <$t as Channel>::from_unit(v.g))
            }
            #[inline]
            fn to_scaled(self) -> ScaledVector {
                ScaledVector::opaque(Channel::to_unit(self.r), Channel::to_unit(self.g), 0.0)
            }

            #[inline]
            fn from_rgba32(v: Rgba32) -> Self {
                Self::new(<$t as Channel>::from_u8(v.r), <$t as Channel>::from_u8(v.g))
            }
            #[inline]
            fn from_rgba64(v: Rgba64) -> Self {
                Self::new(<$t as Channel>::from_u16(v.r), <$t as Channel>::from_u16(v.g))
            }
            #[inline]
            fn to_rgba32(self) -> Rgba32 {
                Rgba32::new(Channel::to_u8(self.r), Channel::to_u8(self.g), 0, u8::MAX)
            }
            #[inline]
            fn to_rgba64(self) -> Rgba64 {
                Rgba64::new(Channel::to_u16(self.r), Channel::to_u16(self.g), 0, u16::MAX)
            }
        }
    };
}

rg_pixel!(
    /// 8-bit R, G.
    #[derive(PartialEq, Eq, Hash)]
    Rg16(u8),
    Bits8
);
rg_pixel!(
    /// 16-bit R, G.
    #[derive(PartialEq, Eq, Hash)]
    Rg32(u16),
    Bits16
);
rg_pixel!(
    /// Half-float R, G.
    RgHalf(f16),
    Wide
);
bitwise_eq!(RgHalf);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{Alpha8, Rgb24};

    #[test]
    fn blue_is_zero_and_opaque() {
        assert_eq!(Rg16::new(1, 2).to_rgba32(), Rgba32::new(1, 2, 0, 255));
        assert_eq!(Rg16::new(1, 2).to_rgb24(), Rgb24::new(1, 2, 0));
        assert_eq!(Rg32::new(0, 0).to_alpha8(), Alpha8::new(255));
    }

    #[test]
    fn drops_blue_and_alpha() {
        assert_eq!(Rg16::from_rgba32(Rgba32::new(9, 8, 7, 6)), Rg16::new(9, 8));
        assert_eq!(Rg32::from_rgba32(Rgba32::new(1, 2, 3, 4)), Rg32::new(257, 514));
    }

    #[test]
    fn half_round_trip() {
        let v = RgHalf::new(f16::from_f32(0.5), f16::from_f32(0.25));
        assert_eq!(RgHalf::from_scaled(v.to_scaled()), v);
    }
}
