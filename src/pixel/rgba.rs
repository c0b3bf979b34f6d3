//! Four-channel layouts with alpha, in every byte order the inventory uses.

use half::f16;

use super::{
    Alpha8, Alpha16, Alpha32, AlphaF, Channel, Depth, Family, Gray8, Gray16, Gray32, GrayAlpha16,
    GrayAlpha32, GrayF, PackedPixel, Pixel, Rgb24, Rgb48, ScaledVector, luminance,
};
use crate::format::PixelFormat;

rgba_pixel!(
    /// 8-bit R, G, B, A.
    #[derive(PartialEq, Eq, Hash)]
    Rgba32(u8) { r, g, b, a },
    Bits8
);
rgba_pixel!(
    /// 8-bit B, G, R, A.
    #[derive(PartialEq, Eq, Hash)]
    Bgra32(u8) { b, g, r, a },
    Bits8
);
rgba_pixel!(
    /// 8-bit A, R, G, B.
    #[derive(PartialEq, Eq, Hash)]
    Argb32(u8) { a, r, g, b },
    Bits8
);
rgba_pixel!(
    /// 8-bit A, B, G, R.
    #[derive(PartialEq, Eq, Hash)]
    Abgr32(u8) { a, b, g, r },
    Bits8
);
rgba_pixel!(
    /// 16-bit R, G, B, A.
    #[derive(PartialEq, Eq, Hash)]
    Rgba64(u16) { r, g, b, a },
    Bits16
);
rgba_pixel!(
    /// 16-bit B, G, R, A.
    #[derive(PartialEq, Eq, Hash)]
    Bgra64(u16) { b, g, r, a },
    Bits16
);
rgba_pixel!(
    /// 32-bit R, G, B, A.
    #[derive(PartialEq, Eq, Hash)]
    Rgba128(u32) { r, g, b, a },
    Bits32
);
rgba_pixel!(
    /// `f32` R, G, B, A.
    RgbaF(f32) { r, g, b, a },
    Wide
);
rgba_pixel!(
    /// Half-float R, G, B, A.
    RgbaHalf(f16) { r, g, b, a },
    Wide
);
bitwise_eq!(RgbaF, RgbaHalf);

macro_rules! byte_packed {
    ($($name:ident),+) => {$(
        impl PackedPixel for $name {
            type Packed = u32;

            /// Memory bytes as a little-endian `u32`: the first channel
            /// in memory lands in the low byte.
            #[inline]
            fn pack(self) -> u32 {
                u32::from_le_bytes(bytemuck::cast(self))
            }

            #[inline]
            fn unpack(packed: u32) -> Self {
                bytemuck::cast(packed.to_le_bytes())
            }
        }
    )+};
}

byte_packed!(Rgba32, Bgra32, Argb32, Abgr32);

/// Channel swizzles between the 8-bit four-channel orders.
///
/// Pure byte moves; no rescaling is involved.
macro_rules! byte_swizzle {
    ($($src:ident => $dst:ident),+ $(,)?) => {$(
        impl From<$src> for $dst {
            #[inline]
            fn from(p: $src) -> Self {
                Self::new(p.r, p.g, p.b, p.a)
            }
        }
    )+};
}

byte_swizzle!(
    Rgba32 => Bgra32,
    Rgba32 => Argb32,
    Rgba32 => Abgr32,
    Bgra32 => Rgba32,
    Bgra32 => Argb32,
    Bgra32 => Abgr32,
    Argb32 => Rgba32,
    Argb32 => Bgra32,
    Argb32 => Abgr32,
    Abgr32 => Rgba32,
    Abgr32 => Bgra32,
    Abgr32 => Argb32,
    Rgba64 => Bgra64,
    Bgra64 => Rgba64,
);
