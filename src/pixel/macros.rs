//! Layout macros for the uniform (one storage type per channel) pixel families.
//!
//! Each macro defines the struct, a `new` constructor in R, G, B, A order,
//! and the [`Pixel`](super::Pixel) implementation with direct integer
//! paths for every interchange role. Fields are declared in memory order.
//! The invoking module must have the family's hub types, `Channel`,
//! `Pixel`, `Family`, `Depth`, `ScaledVector`, `PixelFormat` and `luminance`
//! in scope.

/// Bitwise `PartialEq`/`Eq`/`Hash` for layouts holding float channels.
macro_rules! bitwise_eq {
    ($($name:ident),+ $(,)?) => {$(
        impl PartialEq for $name {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                bytemuck::bytes_of(self) == bytemuck::bytes_of(other)
            }
        }

        impl Eq for $name {}

        impl core::hash::Hash for $name {
            fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
                bytemuck::bytes_of(self).hash(state);
            }
        }
    )+};
}

macro_rules! rgba_pixel {
    ($(#[$meta:meta])* $name:ident($t:ty) { $($field:ident),+ }, $depth:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
        #[repr(C)]
        pub struct $name {
            $(pub $field: $t,)+
        }

        impl $name {
            #[inline]
            pub const fn new(r: $t, g: $t, b: $t, a: $t) -> Self {
                Self { r, g, b, a }
            }
        }

        impl Pixel for $name {
            const FORMAT: PixelFormat = PixelFormat::$name;
            const FAMILY: Family = Family::Color;
            const DEPTH: Depth = Depth::$depth;

            #[inline]
            fn from_scaled(v: ScaledVector) -> Self {
                Self::new(
                    <$t as Channel>::from_unit(v.r),
                    <$t as Channel>::from_unit(v.g),
                    <$t as Channel>::from_unit(v.b),
                    <$t as Channel>::from_unit(v.a),
                )
            }
            #[inline]
            fn to_scaled(self) -> ScaledVector {
                ScaledVector::new(
                    Channel::to_unit(self.r),
                    Channel::to_unit(self.g),
                    Channel::to_unit(self.b),
                    Channel::to_unit(self.a),
                )
            }

            #[inline]
            fn from_alpha8(v: Alpha8) -> Self {
                let m = <$t as Channel>::MAX;
                Self::new(m, m, m, <$t as Channel>::from_u8(v.a))
            }
            #[inline]
            fn from_alpha16(v: Alpha16) -> Self {
                let m = <$t as Channel>::MAX;
                Self::new(m, m, m, <$t as Channel>::from_u16(v.a))
            }
            #[inline]
            fn from_alpha_f(v: AlphaF) -> Self {
                let m = <$t as Channel>::MAX;
                Self::new(m, m, m, <$t as Channel>::from_unit(Channel::to_unit(v.a)))
            }
            #[inline]
            fn from_gray8(v: Gray8) -> Self {
                let l = <$t as Channel>::from_u8(v.l);
                Self::new(l, l, l, <$t as Channel>::MAX)
            }
            #[inline]
            fn from_gray16(v: Gray16) -> Self {
                let l = <$t as Channel>::from_u16(v.l);
                Self::new(l, l, l, <$t as Channel>::MAX)
            }
            #[inline]
            fn from_gray_f(v: GrayF) -> Self {
                let l = <$t as Channel>::from_unit(Channel::to_unit(v.l));
                Self::new(l, l, l, <$t as Channel>::MAX)
            }
            #[inline]
            fn from_gray_alpha16(v: GrayAlpha16) -> Self {
                let l = <$t as Channel>::from_u8(v.l);
                Self::new(l, l, l, <$t as Channel>::from_u8(v.a))
            }
            #[inline]
            fn from_gray_alpha32(v: GrayAlpha32) -> Self {
                let l = <$t as Channel>::from_u16(v.l);
                Self::new(l, l, l, <$t as Channel>::from_u16(v.a))
            }
            #[inline]
            fn from_rgb24(v: Rgb24) -> Self {
                Self::new(
                    <$t as Channel>::from_u8(v.r),
                    <$t as Channel>::from_u8(v.g),
                    <$t as Channel>::from_u8(v.b),
                    <$t as Channel>::MAX,
                )
            }
            #[inline]
            fn from_rgb48(v: Rgb48) -> Self {
                Self::new(
                    <$t as Channel>::from_u16(v.r),
                    <$t as Channel>::from_u16(v.g),
                    <$t as Channel>::from_u16(v.b),
                    <$t as Channel>::MAX,
                )
            }
            #[inline]
            fn from_rgba32(v: Rgba32) -> Self {
                Self::new(
                    <$t as Channel>::from_u8(v.r),
                    <$t as Channel>::from_u8(v.g),
                    <$t as Channel>::from_u8(v.b),
                    <$t as Channel>::from_u8(v.a),
                )
            }
            #[inline]
            fn from_rgba64(v: Rgba64) -> Self {
                Self::new(
                    <$t as Channel>::from_u16(v.r),
                    <$t as Channel>::from_u16(v.g),
                    <$t as Channel>::from_u16(v.b),
                    <$t as Channel>::from_u16(v.a),
                )
            }

            #[inline]
            fn from_alpha32(v: Alpha32) -> Self {
                let m = <$t as Channel>::MAX;
                Self::new(m, m, m, <$t as Channel>::from_u32(v.a))
            }
            #[inline]
            fn from_gray32(v: Gray32) -> Self {
                let l = <$t as Channel>::from_u32(v.l);
                Self::new(l, l, l, <$t as Channel>::MAX)
            }
            #[inline]
            fn from_rgba128(v: Rgba128) -> Self {
                Self::new(
                    <$t as Channel>::from_u32(v.r),
                    <$t as Channel>::from_u32(v.g),
                    <$t as Channel>::from_u32(v.b),
                    <$t as Channel>::from_u32(v.a),
                )
            }

            #[inline]
            fn to_alpha8(self) -> Alpha8 {
                Alpha8::new(Channel::to_u8(self.a))
            }
            #[inline]
            fn to_alpha16(self) -> Alpha16 {
                Alpha16::new(Channel::to_u16(self.a))
            }
            #[inline]
            fn to_alpha_f(self) -> AlphaF {
                AlphaF::new(Channel::to_unit(self.a))
            }
            #[inline]
            fn to_gray8(self) -> Gray8 {
                Gray8::new(crate::scale::f32_to_u8(self.luma()))
            }
            #[inline]
            fn to_gray16(self) -> Gray16 {
                Gray16::new(crate::scale::f32_to_u16(self.luma()))
            }
            #[inline]
            fn to_gray_f(self) -> GrayF {
                GrayF::new(self.luma())
            }
            #[inline]
            fn to_gray_alpha16(self) -> GrayAlpha16 {
                GrayAlpha16::new(crate::scale::f32_to_u8(self.luma()), Channel::to_u8(self.a))
            }
            #[inline]
            fn to_gray_alpha32(self) -> GrayAlpha32 {
                GrayAlpha32::new(crate::scale::f32_to_u16(self.luma()), Channel::to_u16(self.a))
            }
            #[inline]
            fn to_rgb24(self) -> Rgb24 {
                Rgb24::new(Channel::to_u8(self.r), Channel::to_u8(self.g), Channel::to_u8(self.b))
            }
            #[inline]
            fn to_rgb48(self) -> Rgb48 {
                Rgb48::new(Channel::to_u16(self.r), Channel::to_u16(self.g), Channel::to_u16(self.b))
            }
            #[inline]
            fn to_rgba32(self) -> Rgba32 {
                Rgba32::new(
                    Channel::to_u8(self.r),
                    Channel::to_u8(self.g),
                    Channel::to_u8(self.b),
                    Channel::to_u8(self.a),
                )
            }
            #[inline]
            fn to_rgba64(self) -> Rgba64 {
                Rgba64::new(
                    Channel::to_u16(self.r),
                    Channel::to_u16(self.g),
                    Channel::to_u16(self.b),
                    Channel::to_u16(self.a),
                )
            }
            #[inline]
            fn to_alpha32(self) -> Alpha32 {
                Alpha32::new(Channel::to_u32(self.a))
            }
            #[inline]
            fn to_gray32(self) -> Gray32 {
                Gray32::new(crate::scale::f32_to_u32(self.luma()))
            }
            #[inline]
            fn to_rgba128(self) -> Rgba128 {
                Rgba128::new(
                    Channel::to_u32(self.r),
                    Channel::to_u32(self.g),
                    Channel::to_u32(self.b),
                    Channel::to_u32(self.a),
                )
            }
        }

        impl $name {
            #[inline]
            fn luma(self) -> f32 {
                luminance(Channel::to_unit(self.r), Channel::to_unit(self.g), Channel::to_unit(self.b))
            }
        }
    };
}

/// Opaque three-channel layouts. An optional padding field is filled with
/// the given value by `new` and ignored by everything else.
macro_rules! rgb_pixel {
    ($(#[$meta:meta])* $name:ident($t:ty) { $($field:ident),+ }, $depth:ident $(, pad $x:ident = $xv:expr)?) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
        #[repr(C)]
        pub struct $name {
            $(pub $field: $t,)+
        }

        impl $name {
            #[inline]
            pub const fn new(r: $t, g: $t, b: $t) -> Self {
                Self { r, g, b, $($x: $xv,)? }
            }
        }

        impl Pixel for $name {
            const FORMAT: PixelFormat = PixelFormat::$name;
            const FAMILY: Family = Family::Color;
            const DEPTH: Depth = Depth::$depth;

            #[inline]
            fn from_scaled(v: ScaledVector) -> Self {
                Self::new(
                    <$t as Channel>::from_unit(v.r),
                    <$t as Channel>::from_unit(v.g),
                    <$t as Channel>::from_unit(v.b),
                )
            }
            #[inline]
            fn to_scaled(self) -> ScaledVector {
                ScaledVector::opaque(
                    Channel::to_unit(self.r),
                    Channel::to_unit(self.g),
                    Channel::to_unit(self.b),
                )
            }

            #[inline]
            fn from_alpha8(_: Alpha8) -> Self {
                Self::white()
            }
            #[inline]
            fn from_alpha16(_: Alpha16) -> Self {
                Self::white()
            }
            #[inline]
            fn from_alpha_f(_: AlphaF) -> Self {
                Self::white()
            }
            #[inline]
            fn from_gray8(v: Gray8) -> Self {
                let l = <$t as Channel>::from_u8(v.l);
                Self::new(l, l, l)
            }
            #[inline]
            fn from_gray16(v: Gray16) -> Self {
                let l = <$t as Channel>::from_u16(v.l);
                Self::new(l, l, l)
            }
            #[inline]
            fn from_gray_f(v: GrayF) -> Self {
                let l = <$t as Channel>::from_unit(Channel::to_unit(v.l));
                Self::new(l, l, l)
            }
            #[inline]
            fn from_gray_alpha16(v: GrayAlpha16) -> Self {
                let l = <$t as Channel>::from_u8(v.l);
                Self::new(l, l, l)
            }
            #[inline]
            fn from_gray_alpha32(v: GrayAlpha32) -> Self {
                let l = <$t as Channel>::from_u16(v.l);
                Self::new(l, l, l)
            }
            #[inline]
            fn from_rgb24(v: Rgb24) -> Self {
                Self::new(
                    <$t as Channel>::from_u8(v.r),
                    <$t as Channel>::from_u8(v.g),
                    <$t as Channel>::from_u8(v.b),
                )
            }
            #[inline]
            fn from_rgb48(v: Rgb48) -> Self {
                Self::new(
                    <$t as Channel>::from_u16(v.r),
                    <$t as Channel>::from_u16(v.g),
                    <$t as Channel>::from_u16(v.b),
                )
            }
            #[inline]
            fn from_rgba32(v: Rgba32) -> Self {
                Self::new(
                    <$t as Channel>::from_u8(v.r),
                    <$t as Channel>::from_u8(v.g),
                    <$t as Channel>::from_u8(v.b),
                )
            }
            #[inline]
            fn from_rgba64(v: Rgba64) -> Self {
                Self::new(
                    <$t as Channel>::from_u16(v.r),
                    <$t as Channel>::from_u16(v.g),
                    <$t as Channel>::from_u16(v.b),
                )
            }

            #[inline]
            fn from_alpha32(_: Alpha32) -> Self {
                Self::white()
            }
            #[inline]
            fn from_gray32(v: Gray32) -> Self {
                let l = <$t as Channel>::from_u32(v.l);
                Self::new(l, l, l)
            }
            #[inline]
            fn from_rgba128(v: Rgba128) -> Self {
                Self::new(
                    <$t as Channel>::from_u32(v.r),
                    <$t as Channel>::from_u32(v.g),
                    <$t as Channel>::from_u32(v.b),
                )
            }

            #[inline]
            fn to_alpha8(self) -> Alpha8 {
                Alpha8::new(u8::MAX)
            }
            #[inline]
            fn to_alpha16(self) -> Alpha16 {
                Alpha16::new(u16::MAX)
            }
            #[inline]
            fn to_alpha_f(self) -> AlphaF {
                AlphaF::new(1.0)
            }
            #[inline]
            fn to_gray8(self) -> Gray8 {
                Gray8::new(crate::scale::f32_to_u8(self.luma()))
            }
            #[inline]
            fn to_gray16(self) -> Gray16 {
                Gray16::new(crate::scale::f32_to_u16(self.luma()))
            }
            #[inline]
            fn to_gray_f(self) -> GrayF {
                GrayF::new(self.luma())
            }
            #[inline]
            fn to_gray_alpha16(self) -> GrayAlpha16 {
                GrayAlpha16::new(crate::scale::f32_to_u8(self.luma()), u8::MAX)
            }
            #[inline]
            fn to_gray_alpha32(self) -> GrayAlpha32 {
                GrayAlpha32::new(crate::scale::f32_to_u16(self.luma()), u16::MAX)
            }
            #[inline]
            fn to_rgb24(self) -> Rgb24 {
                Rgb24::new(Channel::to_u8(self.r), Channel::to_u8(self.g), Channel::to_u8(self.b))
            }
            #[inline]
            fn to_rgb48(self) -> Rgb48 {
                Rgb48::new(Channel::to_u16(self.r), Channel::to_u16(self.g), Channel::to_u16(self.b))
            }
            #[inline]
            fn to_rgba32(self) -> Rgba32 {
                Rgba32::new(
                    Channel::to_u8(self.r),
                    Channel::to_u8(self.g),
                    Channel::to_u8(self.b),
                    u8::MAX,
                )
            }
            #[inline]
            fn to_rgba64(self) -> Rgba64 {
                Rgba64::new(
                    Channel::to_u16(self.r),
                    Channel::to_u16(self.g),
                    Channel::to_u16(self.b),
                    u16::MAX,
                )
            }
            #[inline]
            fn to_alpha32(self) -> Alpha32 {
                Alpha32::new(u32::MAX)
            }
            #[inline]
            fn to_gray32(self) -> Gray32 {
                Gray32::new(crate::scale::f32_to_u32(self.luma()))
            }
            #[inline]
            fn to_rgba128(self) -> Rgba128 {
                Rgba128::new(
                    Channel::to_u32(self.r),
                    Channel::to_u32(self.g),
                    Channel::to_u32(self.b),
                    u32::MAX,
                )
            }
        }

        impl $name {
            #[inline]
            const fn white() -> Self {
                let m = <$t as Channel>::MAX;
                Self::new(m, m, m)
            }

            #[inline]
            fn luma(self) -> f32 {
                luminance(Channel::to_unit(self.r), Channel::to_unit(self.g), Channel::to_unit(self.b))
            }
        }
    };
}

macro_rules! gray_pixel {
    ($(#[$meta:meta])* $name:ident($t:ty), $depth:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
        #[repr(C)]
        pub struct $name {
            pub l: $t,
        }

        impl $name {
            #[inline]
            pub const fn new(l: $t) -> Self {
                Self { l }
            }
        }

        impl Pixel for $name {
            const FORMAT: PixelFormat = PixelFormat::$name;
            const FAMILY: Family = Family::Gray;
            const DEPTH: Depth = Depth::$depth;

            #[inline]
            fn from_scaled(v: ScaledVector) -> Self {
                Self::new(<$t as Channel>::from_unit(v.luminance()))
            }
            #[inline]
            fn to_scaled(self) -> ScaledVector {
                ScaledVector::gray(Channel::to_unit(self.l), 1.0)
            }

            #[inline]
            fn from_alpha8(_: Alpha8) -> Self {
                Self::new(<$t as Channel>::MAX)
            }
            #[inline]
            fn from_alpha16(_: Alpha16) -> Self {
                Self::new(<$t as Channel>::MAX)
            }
            #[inline]
            fn from_alpha_f(_: AlphaF) -> Self {
                Self::new(<$t as Channel>::MAX)
            }
            #[inline]
            fn from_gray8(v: Gray8) -> Self {
                Self::new(<$t as Channel>::from_u8(v.l))
            }
            #[inline]
            fn from_gray16(v: Gray16) -> Self {
                Self::new(<$t as Channel>::from_u16(v.l))
            }
            #[inline]
            fn from_gray_f(v: GrayF) -> Self {
                Self::new(<$t as Channel>::from_unit(Channel::to_unit(v.l)))
            }
            #[inline]
            fn from_gray_alpha16(v: GrayAlpha16) -> Self {
                Self::new(<$t as Channel>::from_u8(v.l))
            }
            #[inline]
            fn from_gray_alpha32(v: GrayAlpha32) -> Self {
                Self::new(<$t as Channel>::from_u16(v.l))
            }

            #[inline]
            fn from_alpha32(_: Alpha32) -> Self {
                Self::new(<$t as Channel>::MAX)
            }
            #[inline]
            fn from_gray32(v: Gray32) -> Self {
                Self::new(<$t as Channel>::from_u32(v.l))
            }
            #[inline]
            fn from_rgba128(v: Rgba128) -> Self {
                Self::from_scaled(v.to_scaled())
            }

            #[inline]
            fn to_alpha8(self) -> Alpha8 {
                Alpha8::new(u8::MAX)
            }
            #[inline]
            fn to_alpha16(self) -> Alpha16 {
                Alpha16::new(u16::MAX)
            }
            #[inline]
            fn to_alpha_f(self) -> AlphaF {
                AlphaF::new(1.0)
            }
            #[inline]
            fn to_gray8(self) -> Gray8 {
                Gray8::new(Channel::to_u8(self.l))
            }
            #[inline]
            fn to_gray16(self) -> Gray16 {
                Gray16::new(Channel::to_u16(self.l))
            }
            #[inline]
            fn to_gray_f(self) -> GrayF {
                GrayF::new(Channel::to_unit(self.l))
            }
            #[inline]
            fn to_gray_alpha16(self) -> GrayAlpha16 {
                GrayAlpha16::new(Channel::to_u8(self.l), u8::MAX)
            }
            #[inline]
            fn to_gray_alpha32(self) -> GrayAlpha32 {
                GrayAlpha32::new(Channel::to_u16(self.l), u16::MAX)
            }
            #[inline]
            fn to_rgb24(self) -> Rgb24 {
                let l = Channel::to_u8(self.l);
                Rgb24::new(l, l, l)
            }
            #[inline]
            fn to_rgb48(self) -> Rgb48 {
                let l = Channel::to_u16(self.l);
                Rgb48::new(l, l, l)
            }
            #[inline]
            fn to_rgba32(self) -> Rgba32 {
                let l = Channel::to_u8(self.l);
                Rgba32::new(l, l, l, u8::MAX)
            }
            #[inline]
            fn to_rgba64(self) -> Rgba64 {
                let l = Channel::to_u16(self.l);
                Rgba64::new(l, l, l, u16::MAX)
            }
            #[inline]
            fn to_alpha32(self) -> Alpha32 {
                Alpha32::new(u32::MAX)
            }
            #[inline]
            fn to_gray32(self) -> Gray32 {
                Gray32::new(Channel::to_u32(self.l))
            }
            #[inline]
            fn to_rgba128(self) -> Rgba128 {
                let l = Channel::to_u32(self.l);
                Rgba128::new(l, l, l, u32::MAX)
            }
        }
    };
}

macro_rules! alpha_pixel {
    ($(#[$meta:meta])* $name:ident($t:ty), $depth:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
        #[repr(C)]
        pub struct $name {
            pub a: $t,
        }

        impl $name {
            #[inline]
            pub const fn new(a: $t) -> Self {
                Self { a }
            }
        }

        impl Pixel for $name {
            const FORMAT: PixelFormat = PixelFormat::$name;
            const FAMILY: Family = Family::Alpha;
            const DEPTH: Depth = Depth::$depth;

            #[inline]
            fn from_scaled(v: ScaledVector) -> Self {
                Self::new(<$t as Channel>::from_unit(v.a))
            }
            #[inline]
            fn to_scaled(self) -> ScaledVector {
                ScaledVector::new(1.0, 1.0, 1.0, Channel::to_unit(self.a))
            }

            #[inline]
            fn from_alpha8(v: Alpha8) -> Self {
                Self::new(<$t as Channel>::from_u8(v.a))
            }
            #[inline]
            fn from_alpha16(v: Alpha16) -> Self {
                Self::new(<$t as Channel>::from_u16(v.a))
            }
            #[inline]
            fn from_alpha_f(v: AlphaF) -> Self {
                Self::new(<$t as Channel>::from_unit(Channel::to_unit(v.a)))
            }
            #[inline]
            fn from_gray8(_: Gray8) -> Self {
                Self::new(<$t as Channel>::MAX)
            }
            #[inline]
            fn from_gray16(_: Gray16) -> Self {
                Self::new(<$t as Channel>::MAX)
            }
            #[inline]
            fn from_gray_f(_: GrayF) -> Self {
                Self::new(<$t as Channel>::MAX)
            }
            #[inline]
            fn from_gray_alpha16(v: GrayAlpha16) -> Self {
                Self::new(<$t as Channel>::from_u8(v.a))
            }
            #[inline]
            fn from_gray_alpha32(v: GrayAlpha32) -> Self {
                Self::new(<$t as Channel>::from_u16(v.a))
            }
            #[inline]
            fn from_rgb24(_: Rgb24) -> Self {
                Self::new(<$t as Channel>::MAX)
            }
            #[inline]
            fn from_rgb48(_: Rgb48) -> Self {
                Self::new(<$t as Channel>::MAX)
            }
            #[inline]
            fn from_rgba32(v: Rgba32) -> Self {
                Self::new(<$t as Channel>::from_u8(v.a))
            }
            #[inline]
            fn from_rgba64(v: Rgba64) -> Self {
                Self::new(<$t as Channel>::from_u16(v.a))
            }

            #[inline]
            fn from_alpha32(v: Alpha32) -> Self {
                Self::new(<$t as Channel>::from_u32(v.a))
            }
            #[inline]
            fn from_gray32(_: Gray32) -> Self {
                Self::new(<$t as Channel>::MAX)
            }
            #[inline]
            fn from_rgba128(v: Rgba128) -> Self {
                Self::new(<$t as Channel>::from_u32(v.a))
            }

            #[inline]
            fn to_alpha8(self) -> Alpha8 {
                Alpha8::new(Channel::to_u8(self.a))
            }
            #[inline]
            fn to_alpha16(self) -> Alpha16 {
                Alpha16::new(Channel::to_u16(self.a))
            }
            #[inline]
            fn to_alpha_f(self) -> AlphaF {
                AlphaF::new(Channel::to_unit(self.a))
            }
            #[inline]
            fn to_gray8(self) -> Gray8 {
                Gray8::new(u8::MAX)
            }
            #[inline]
            fn to_gray16(self) -> Gray16 {
                Gray16::new(u16::MAX)
            }
            #[inline]
            fn to_gray_f(self) -> GrayF {
                GrayF::new(1.0)
            }
            #[inline]
            fn to_gray_alpha16(self) -> GrayAlpha16 {
                GrayAlpha16::new(u8::MAX, Channel::to_u8(self.a))
            }
            #[inline]
            fn to_gray_alpha32(self) -> GrayAlpha32 {
                GrayAlpha32::new(u16::MAX, Channel::to_u16(self.a))
            }
            #[inline]
            fn to_rgb24(self) -> Rgb24 {
                Rgb24::new(u8::MAX, u8::MAX, u8::MAX)
            }
            #[inline]
            fn to_rgb48(self) -> Rgb48 {
                Rgb48::new(u16::MAX, u16::MAX, u16::MAX)
            }
            #[inline]
            fn to_rgba32(self) -> Rgba32 {
                Rgba32::new(u8::MAX, u8::MAX, u8::MAX, Channel::to_u8(self.a))
            }
            #[inline]
            fn to_rgba64(self) -> Rgba64 {
                Rgba64::new(u16::MAX, u16::MAX, u16::MAX, Channel::to_u16(self.a))
            }
            #[inline]
            fn to_alpha32(self) -> Alpha32 {
                Alpha32::new(Channel::to_u32(self.a))
            }
            #[inline]
            fn to_gray32(self) -> Gray32 {
                Gray32::new(u32::MAX)
            }
            #[inline]
            fn to_rgba128(self) -> Rgba128 {
                Rgba128::new(u32::MAX, u32::MAX, u32::MAX, Channel::to_u32(self.a))
            }
        }
    };
}

macro_rules! gray_alpha_pixel {
    ($(#[$meta:meta])* $name:ident($t:ty), $depth:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, Default, bytemuck::Pod, bytemuck::Zeroable)]
        #[repr(C)]
        pub struct $name {
            pub l: $t,
            pub a: $t,
        }

        impl $name {
            #[inline]
            pub const fn new(l: $t, a: $t) -> Self {
                Self { l, a }
            }
        }

        impl Pixel for $name {
            const FORMAT: PixelFormat = PixelFormat::$name;
            const FAMILY: Family = Family::GrayAlpha;
            const DEPTH: Depth = Depth::$depth;

            #[inline]
            fn from_scaled(v: ScaledVector) -> Self {
                Self::new(
                    <$t as Channel>::from_unit(v.luminance()),
                    <$t as Channel>::from_unit(v.a),
                )
            }
            #[inline]
            fn to_scaled(self) -> ScaledVector {
                ScaledVector::gray(Channel::to_unit(self.l), Channel::to_unit(self.a))
            }

            #[inline]
            fn from_alpha8(v: Alpha8) -> Self {
                Self::new(<$t as Channel>::MAX, <$t as Channel>::from_u8(v.a))
            }
            #[inline]
            fn from_alpha16(v: Alpha16) -> Self {
                Self::new(<$t as Channel>::MAX, <$t as Channel>::from_u16(v.a))
            }
            #[inline]
            fn from_alpha_f(v: AlphaF) -> Self {
                Self::new(
                    <$t as Channel>::MAX,
                    <$t as Channel>::from_unit(Channel::to_unit(v.a)),
                )
            }
            #[inline]
            fn from_gray8(v: Gray8) -> Self {
                Self::new(<$t as Channel>::from_u8(v.l), <$t as Channel>::MAX)
            }
            #[inline]
            fn from_gray16(v: Gray16) -> Self {
                Self::new(<$t as Channel>::from_u16(v.l), <$t as Channel>::MAX)
            }
            #[inline]
            fn from_gray_f(v: GrayF) -> Self {
                Self::new(
                    <$t as Channel>::from_unit(Channel::to_unit(v.l)),
                    <$t as Channel>::MAX,
                )
            }
            #[inline]
            fn from_gray_alpha16(v: GrayAlpha16) -> Self {
                Self::new(<$t as Channel>::from_u8(v.l), <$t as Channel>::from_u8(v.a))
            }
            #[inline]
            fn from_gray_alpha32(v: GrayAlpha32) -> Self {
                Self::new(<$t as Channel>::from_u16(v.l), <$t as Channel>::from_u16(v.a))
            }

            #[inline]
            fn from_alpha32(v: Alpha32) -> Self {
                Self::new(<$t as Channel>::MAX, <$t as Channel>::from_u32(v.a))
            }
            #[inline]
            fn from_gray32(v: Gray32) -> Self {
                Self::new(<$t as Channel>::from_u32(v.l), <$t as Channel>::MAX)
            }
            #[inline]
            fn from_rgba128(v: Rgba128) -> Self {
                Self::new(
                    <$t as Channel>::from_unit(v.to_scaled().luminance()),
                    <$t as Channel>::from_u32(v.a),
                )
            }

            #[inline]
            fn to_alpha8(self) -> Alpha8 {
                Alpha8::new(Channel::to_u8(self.a))
            }
            #[inline]
            fn to_alpha16(self) -> Alpha16 {
                Alpha16::new(Channel::to_u16(self.a))
            }
            #[inline]
            fn to_alpha_f(self) -> AlphaF {
                AlphaF::new(Channel::to_unit(self.a))
            }
            #[inline]
            fn to_gray8(self) -> Gray8 {
                Gray8::new(Channel::to_u8(self.l))
            }
            #[inline]
            fn to_gray16(self) -> Gray16 {
                Gray16::new(Channel::to_u16(self.l))
            }
            #[inline]
            fn to_gray_f(self) -> GrayF {
                GrayF::new(Channel::to_unit(self.l))
            }
            #[inline]
            fn to_gray_alpha16(self) -> GrayAlpha16 {
                GrayAlpha16::new(Channel::to_u8(self.l), Channel::to_u8(self.a))
            }
            #[inline]
            fn to_gray_alpha32(self) -> GrayAlpha32 {
                GrayAlpha32::new(Channel::to_u16(self.l), Channel::to_u16(self.a))
            }
            #[inline]
            fn to_rgb24(self) -> Rgb24 {
                let l = Channel::to_u8(self.l);
                Rgb24::new(l, l, l)
            }
            #[inline]
            fn to_rgb48(self) -> Rgb48 {
                let l = Channel::to_u16(self.l);
                Rgb48::new(l, l, l)
            }
            #[inline]
            fn to_rgba32(self) -> Rgba32 {
                let l = Channel::to_u8(self.l);
                Rgba32::new(l, l, l, Channel::to_u8(self.a))
            }
            #[inline]
            fn to_rgba64(self) -> Rgba64 {
                let l = Channel::to_u16(self.l);
                Rgba64::new(l, l, l, Channel::to_u16(self.a))
            }
            #[inline]
            fn to_alpha32(self) -> Alpha32 {
                Alpha32::new(Channel::to_u32(self.a))
            }
            #[inline]
            fn to_gray32(self) -> Gray32 {
                Gray32::new(Channel::to_u32(self.l))
            }
            #[inline]
            fn to_rgba128(self) -> Rgba128 {
                let l = Channel::to_u32(self.l);
                Rgba128::new(l, l, l, Channel::to_u32(self.a))
            }
        }
    };
}
