//! Signed layouts: signed-normalized (`Snorm*`) and full-range integer (`Short*`).
//!
//! Scaled vectors stay in `[0, 1]`: signed-normalized channels map `[-1, 1]`
//! linearly onto it, and `Short` channels map `-32768..=32767`. Missing
//! channels of the two-channel types read as 0 and alpha as opaque.
//! [`to_normalized`](Snorm8x4::to_normalized) gives the natural range.

use crate::format::PixelFormat;
use crate::scale::{self, i16_to_unit as i16_unit, unit_to_i16 as unit_i16};

use super::{Depth, Family, Pixel, ScaledVector};

#[inline]
fn snorm8_unit(v: i8) -> f32 {
    scale::signed_to_unit(scale::snorm8_to_f32(v))
}
#[inline]
fn unit_snorm8(v: f32) -> i8 {
    scale::f32_to_snorm8(scale::unit_to_signed(v))
}
#[inline]
fn snorm16_unit(v: i16) -> f32 {
    scale::signed_to_unit(scale::snorm16_to_f32(v))
}
#[inline]
fn unit_snorm16(v: f32) -> i16 {
    scale::f32_to_snorm16(scale::unit_to_signed(v))
}
#[inline]
fn short_natural(v: i16) -> f32 {
    v as f32
}

macro_rules! signed_pixel {
    (
        $(#[$meta:meta])*
        $name:ident($t:ty) { r, g }, $to_unit:ident, $from_unit:ident, $natural:path
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
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

            /// Channels in their natural range.
            #[inline]
            pub fn to_normalized(self) -> [f32; 2] {
                [$natural(self.r), $natural(self.g)]
            }
        }

        impl Pixel for $name {
            const FORMAT: PixelFormat = PixelFormat::$name;
            const FAMILY: Family = Family::Color;
            const DEPTH: Depth = Depth::Wide;

            #[inline]
            fn from_scaled(v: ScaledVector) -> Self {
                Self::new($from_unit(v.r), $from_unit(v.g))
            }

            #[inline]
            fn to_scaled(self) -> ScaledVector {
                ScaledVector::opaque($to_unit(self.r), $to_unit(self.g), 0.0)
            }
        }
    };
    (
        $(#[$meta:meta])*
        $name:ident($t:ty) { r, g, b, a }, $to_unit:ident, $from_unit:ident, $natural:path
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, bytemuck::Pod, bytemuck::Zeroable)]
        #[repr(C)]
        pub struct $name {
            pub r: $t,
            pub g: $t,
            pub b: $t,
            pub a: $t,
        }

        impl $name {
            #[inline]
            pub const fn new(r: $t, g: $t, b: $t, a: $t) -> Self {
                Self { r, g, b, a }
            }

            /// Channels in their natural range.
            #[inline]
            pub fn to_normalized(self) -> [f32; 4] {
                [$natural(self.r), $natural(self.g), $natural(self.b), $natural(self.a)]
            }
        }

        impl Pixel for $name {
            const FORMAT: PixelFormat = PixelFormat::$name;
            const FAMILY: Family = Family::Color;
            const DEPTH: Depth = Depth::Wide;

            #[inline]
            fn from_scaled(v: ScaledVector) -> Self {
                Self::new($from_unit(v.r), $from_unit(v.g), $from_unit(v.b), $from_unit(v.a))
            }

            #[inline]
            fn to_scaled(self) -> ScaledVector {
                ScaledVector::new(
                    $to_unit(self.r),
                    $to_unit(self.g),
                    $to_unit(self.b),
                    $to_unit(self.a),
                )
            }
        }
    };
}

signed_pixel!(
    /// Two signed-normalized 8-bit channels.
    Snorm8x2(i8) { r, g }, snorm8_unit, unit_snorm8, scale::snorm8_to_f32
);
signed_pixel!(
    /// Four signed-normalized 8-bit channels.
    Snorm8x4(i8) { r, g, b, a }, snorm8_unit, unit_snorm8, scale::snorm8_to_f32
);
signed_pixel!(
    /// Two signed-normalized 16-bit channels.
    Snorm16x2(i16) { r, g }, snorm16_unit, unit_snorm16, scale::snorm16_to_f32
);
signed_pixel!(
    /// Four signed-normalized 16-bit channels.
    Snorm16x4(i16) { r, g, b, a }, snorm16_unit, unit_snorm16, scale::snorm16_to_f32
);
signed_pixel!(
    /// Two full-range signed 16-bit channels.
    Short2(i16) { r, g }, i16_unit, unit_i16, short_natural
);
signed_pixel!(
    /// Four full-range signed 16-bit channels.
    Short4(i16) { r, g, b, a }, i16_unit, unit_i16, short_natural
);
