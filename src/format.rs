//! Runtime tags for the pixel types.
//!
//! [`PixelFormat`] names every concrete layout in [`crate::pixel`] and is
//! how type-erased buffers say what they hold. Going from a tag back to a
//! type is a single `match` (see `with_pixel_type!`), done once per row.

use core::fmt;

use crate::descriptor::{ChannelDomain, ChannelRole, ComponentDescriptor, uniform};
use crate::pixel::{Bgr565, Bgra4444, Bgra5551, Depth, Family, Rgba1010102};

/// Every supported pixel layout.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PixelFormat {
    Alpha8,
    Alpha16,
    Alpha32,
    AlphaF,
    Gray8,
    Gray16,
    Gray32,
    GrayF,
    GrayHalf,
    /// 8-bit luminance + alpha.
    GrayAlpha16,
    /// 16-bit luminance + alpha.
    GrayAlpha32,
    GrayAlphaF,
    Rgb24,
    Bgr24,
    Rgb48,
    Bgr48,
    Rgb96,
    RgbF,
    /// RGB with a trailing padding byte.
    Rgbx32,
    /// BGR with a trailing padding byte.
    Bgrx32,
    Rg16,
    Rg32,
    RgHalf,
    Rgba32,
    Bgra32,
    Argb32,
    Abgr32,
    Rgba64,
    Bgra64,
    Rgba128,
    RgbaF,
    RgbaHalf,
    /// 5-6-5 bit field.
    Bgr565,
    /// 4-4-4-4 bit field.
    Bgra4444,
    /// 5-5-5-1 bit field.
    Bgra5551,
    /// 10-10-10-2 bit field.
    Rgba1010102,
    Snorm8x2,
    Snorm8x4,
    Snorm16x2,
    Snorm16x4,
    Short2,
    Short4,
}

/// Run `$body` with `$P` bound to the pixel type that `$format` names.
macro_rules! with_pixel_type {
    ($format:expr, $P:ident => $body:expr) => {{
        use $crate::format::PixelFormat as F;
        use $crate::pixel as px;
        match $format {
            F::Alpha8 => { type $P = px::Alpha8; $body }
            F::Alpha16 => { type $P = px::Alpha16; $body }
            F::Alpha32 => { type $P = px::Alpha32; $body }
            F::AlphaF => { type $P = px::AlphaF; $body }
            F::Gray8 => { type $P = px::Gray8; $body }
            F::Gray16 => { type $P = px::Gray16; $body }
            F::Gray32 => { type $P = px::Gray32; $body }
            F::GrayF => { type $P = px::GrayF; $body }
            F::GrayHalf => { type $P = px::GrayHalf; $body }
            F::GrayAlpha16 => { type $P = px::GrayAlpha16; $body }
            F::GrayAlpha32 => { type $P = px::GrayAlpha32; $body }
            F::GrayAlphaF => { type $P = px::GrayAlphaF; $body }
            F::Rgb24 => { type $P = px::Rgb24; $body }
            F::Bgr24 => { type $P = px::Bgr24; $body }
            F::Rgb48 => { type $P = px::Rgb48; $body }
            F::Bgr48 => { type $P = px::Bgr48; $body }
            F::Rgb96 => { type $P = px::Rgb96; $body }
            F::RgbF => { type $P = px::RgbF; $body }
            F::Rgbx32 => { type $P = px::Rgbx32; $body }
            F::Bgrx32 => { type $P = px::Bgrx32; $body }
            F::Rg16 => { type $P = px::Rg16; $body }
            F::Rg32 => { type $P = px::Rg32; $body }
            F::RgHalf => { type $P = px::RgHalf; $body }
            F::Rgba32 => { type $P = px::Rgba32; $body }
            F::Bgra32 => { type $P = px::Bgra32; $body }
            F::Argb32 => { type $P = px::Argb32; $body }
            F::Abgr32 => { type $P = px::Abgr32; $body }
            F::Rgba64 => { type $P = px::Rgba64; $body }
            F::Bgra64 => { type $P = px::Bgra64; $body }
            F::Rgba128 => { type $P = px::Rgba128; $body }
            F::RgbaF => { type $P = px::RgbaF; $body }
            F::RgbaHalf => { type $P = px::RgbaHalf; $body }
            F::Bgr565 => { type $P = px::Bgr565; $body }
            F::Bgra4444 => { type $P = px::Bgra4444; $body }
            F::Bgra5551 => { type $P = px::Bgra5551; $body }
            F::Rgba1010102 => { type $P = px::Rgba1010102; $body }
            F::Snorm8x2 => { type $P = px::Snorm8x2; $body }
            F::Snorm8x4 => { type $P = px::Snorm8x4; $body }
            F::Snorm16x2 => { type $P = px::Snorm16x2; $body }
            F::Snorm16x4 => { type $P = px::Snorm16x4; $body }
            F::Short2 => { type $P = px::Short2; $body }
            F::Short4 => { type $P = px::Short4; $body }
        }
    }};
}

macro_rules! uniform_desc {
    ([$($role:ident),+], $domain:ident, $bits:literal, $size:literal) => {{
        static D: ComponentDescriptor = ComponentDescriptor {
            components: &uniform([$(ChannelRole::$role),+], ChannelDomain::$domain, $bits),
            size: $size,
        };
        &D
    }};
}

macro_rules! field_desc {
    ($ty:ident, $size:literal) => {{
        static D: ComponentDescriptor = ComponentDescriptor::new($ty::FIELDS, $size);
        &D
    }};
}

impl PixelFormat {
    /// Every format, in declaration order.
    pub const ALL: [PixelFormat; 42] = [
        Self::Alpha8,
        Self::Alpha16,
        Self::Alpha32,
        Self::AlphaF,
        Self::Gray8,
        Self::Gray16,
        Self::Gray32,
        Self::GrayF,
        Self::GrayHalf,
        Self::GrayAlpha16,
        Self::GrayAlpha32,
        Self::GrayAlphaF,
        Self::Rgb24,
        Self::Bgr24,
        Self::Rgb48,
        Self::Bgr48,
        Self::Rgb96,
        Self::RgbF,
        Self::Rgbx32,
        Self::Bgrx32,
        Self::Rg16,
        Self::Rg32,
        Self::RgHalf,
        Self::Rgba32,
        Self::Bgra32,
        Self::Argb32,
        Self::Abgr32,
        Self::Rgba64,
        Self::Bgra64,
        Self::Rgba128,
        Self::RgbaF,
        Self::RgbaHalf,
        Self::Bgr565,
        Self::Bgra4444,
        Self::Bgra5551,
        Self::Rgba1010102,
        Self::Snorm8x2,
        Self::Snorm8x4,
        Self::Snorm16x2,
        Self::Snorm16x4,
        Self::Short2,
        Self::Short4,
    ];

    /// Channel layout metadata.
    pub fn descriptor(self) -> &'static ComponentDescriptor {
        match self {
            Self::Alpha8 => uniform_desc!([Alpha], Unorm, 8, 1),
            Self::Alpha16 => uniform_desc!([Alpha], Unorm, 16, 2),
            Self::Alpha32 => uniform_desc!([Alpha], Unorm, 32, 4),
            Self::AlphaF => uniform_desc!([Alpha], Float, 32, 4),
            Self::Gray8 => uniform_desc!([Luminance], Unorm, 8, 1),
            Self::Gray16 => uniform_desc!([Luminance], Unorm, 16, 2),
            Self::Gray32 => uniform_desc!([Luminance], Unorm, 32, 4),
            Self::GrayF => uniform_desc!([Luminance], Float, 32, 4),
            Self::GrayHalf => uniform_desc!([Luminance], Half, 16, 2),
            Self::GrayAlpha16 => uniform_desc!([Luminance, Alpha], Unorm, 8, 2),
            Self::GrayAlpha32 => uniform_desc!([Luminance, Alpha], Unorm, 16, 4),
            Self::GrayAlphaF => uniform_desc!([Luminance, Alpha], Float, 32, 8),
            Self::Rgb24 => uniform_desc!([Red, Green, Blue], Unorm, 8, 3),
            Self::Bgr24 => uniform_desc!([Blue, Green, Red], Unorm, 8, 3),
            Self::Rgb48 => uniform_desc!([Red, Green, Blue], Unorm, 16, 6),
            Self::Bgr48 => uniform_desc!([Blue, Green, Red], Unorm, 16, 6),
            Self::Rgb96 => uniform_desc!([Red, Green, Blue], Unorm, 32, 12),
            Self::RgbF => uniform_desc!([Red, Green, Blue], Float, 32, 12),
            Self::Rgbx32 => uniform_desc!([Red, Green, Blue, Padding], Unorm, 8, 4),
            Self::Bgrx32 => uniform_desc!([Blue, Green, Red, Padding], Unorm, 8, 4),
            Self::Rg16 => uniform_desc!([Red, Green], Unorm, 8, 2),
            Self::Rg32 => uniform_desc!([Red, Green], Unorm, 16, 4),
            Self::RgHalf => uniform_desc!([Red, Green], Half, 16, 4),
            Self::Rgba32 => uniform_desc!([Red, Green, Blue, Alpha], Unorm, 8, 4),
            Self::Bgra32 => uniform_desc!([Blue, Green, Red, Alpha], Unorm, 8, 4),
            Self::Argb32 => uniform_desc!([Alpha, Red, Green, Blue], Unorm, 8, 4),
            Self::Abgr32 => uniform_desc!([Alpha, Blue, Green, Red], Unorm, 8, 4),
            Self::Rgba64 => uniform_desc!([Red, Green, Blue, Alpha], Unorm, 16, 8),
            Self::Bgra64 => uniform_desc!([Blue, Green, Red, Alpha], Unorm, 16, 8),
            Self::Rgba128 => uniform_desc!([Red, Green, Blue, Alpha], Unorm, 32, 16),
            Self::RgbaF => uniform_desc!([Red, Green, Blue, Alpha], Float, 32, 16),
            Self::RgbaHalf => uniform_desc!([Red, Green, Blue, Alpha], Half, 16, 8),
            Self::Bgr565 => field_desc!(Bgr565, 2),
            Self::Bgra4444 => field_desc!(Bgra4444, 2),
            Self::Bgra5551 => field_desc!(Bgra5551, 2),
            Self::Rgba1010102 => field_desc!(Rgba1010102, 4),
            Self::Snorm8x2 => uniform_desc!([Red, Green], Snorm, 8, 2),
            Self::Snorm8x4 => uniform_desc!([Red, Green, Blue, Alpha], Snorm, 8, 4),
            Self::Snorm16x2 => uniform_desc!([Red, Green], Snorm, 16, 4),
            Self::Snorm16x4 => uniform_desc!([Red, Green, Blue, Alpha], Snorm, 16, 8),
            Self::Short2 => uniform_desc!([Red, Green], Sint, 16, 4),
            Self::Short4 => uniform_desc!([Red, Green, Blue, Alpha], Sint, 16, 8),
        }
    }

    /// Bytes per pixel (1 to 16).
    #[inline]
    pub fn bytes_per_pixel(self) -> usize {
        self.descriptor().size as usize
    }

    /// Number of channels, counting padding.
    #[inline]
    pub fn channels(self) -> usize {
        self.descriptor().channel_count()
    }

    pub fn has_alpha(self) -> bool {
        self.descriptor().has_alpha()
    }

    pub fn family(self) -> Family {
        with_pixel_type!(self, P => <P as crate::pixel::Pixel>::FAMILY)
    }

    pub fn depth(self) -> Depth {
        with_pixel_type!(self, P => <P as crate::pixel::Pixel>::DEPTH)
    }

    /// Type name, e.g. `"Bgra32"`.
    pub fn name(self) -> &'static str {
        with_pixel_type!(self, P => {
            let full = core::any::type_name::<P>();
            full.rsplit("::").next().unwrap_or(full)
        })
    }
}

impl fmt::Display for PixelFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
