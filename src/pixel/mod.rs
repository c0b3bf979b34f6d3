//! Packed pixel types and their conversion contract.
//!
//! Every type implements [`Pixel`]: conversion to and from a
//! [`ScaledVector`] plus one method per interchange role (alpha, gray and
//! RGBA at 8, 16 and 32 bits, gray+alpha and RGB at 8 and 16 bits, and
//! float). The role methods default to a round trip through the scaled
//! vector; the uniform layouts override them with direct integer rescaling.
//!
//! Types are grouped by family:
//!
//! | Family     | Types |
//! |------------|-------|
//! | alpha      | [`Alpha8`], [`Alpha16`], [`Alpha32`], [`AlphaF`] |
//! | gray       | [`Gray8`], [`Gray16`], [`Gray32`], [`GrayF`], [`GrayHalf`] |
//! | gray+alpha | [`GrayAlpha16`], [`GrayAlpha32`], [`GrayAlphaF`] |
//! | RGB        | [`Rgb24`], [`Bgr24`], [`Rgb48`], [`Bgr48`], [`Rgb96`], [`RgbF`], [`Rgbx32`], [`Bgrx32`] |
//! | two-channel| [`Rg16`], [`Rg32`], [`RgHalf`] |
//! | RGBA       | [`Rgba32`], [`Bgra32`], [`Argb32`], [`Abgr32`], [`Rgba64`], [`Bgra64`], [`Rgba128`], [`RgbaF`], [`RgbaHalf`] |
//! | bit field  | [`Bgr565`], [`Bgra4444`], [`Bgra5551`], [`Rgba1010102`] |
//! | signed     | [`Snorm8x2`], [`Snorm8x4`], [`Snorm16x2`], [`Snorm16x4`], [`Short2`], [`Short4`] |

use core::fmt;

use bytemuck::Pod;

use crate::descriptor::ComponentDescriptor;
use crate::format::PixelFormat;
use crate::scale;

mod channel;
#[macro_use]
mod macros;

mod alpha;
mod gray;
mod gray_alpha;
mod packed;
mod rg;
mod rgb;
mod rgba;
mod signed;

#[cfg(feature = "rgb")]
mod interop;

pub use alpha::{Alpha8, Alpha16, Alpha32, AlphaF};
pub use channel::Channel;
pub use gray::{Gray8, Gray16, Gray32, GrayF, GrayHalf};
pub use gray_alpha::{GrayAlpha16, GrayAlpha32, GrayAlphaF};
pub use packed::{Bgr565, Bgra4444, Bgra5551, Rgba1010102};
pub use rg::{Rg16, Rg32, RgHalf};
pub use rgb::{Bgr24, Bgr48, Bgrx32, Rgb24, Rgb48, Rgb96, RgbF, Rgbx32};
pub use rgba::{Abgr32, Argb32, Bgra32, Bgra64, Rgba32, Rgba64, Rgba128, RgbaF, RgbaHalf};
pub use signed::{Short2, Short4, Snorm8x2, Snorm8x4, Snorm16x2, Snorm16x4};

// ── Scaled vector ───────────────────────────────────────────────────

/// Canonical interchange form: four `f32` components in `[0, 1]`.
///
/// Alpha-less pixels produce `a = 1.0`. Signed types map their natural
/// range linearly into `[0, 1]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScaledVector {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ScaledVector {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    #[inline]
    pub const fn opaque(r: f32, g: f32, b: f32) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Luminance replicated into the color channels.
    #[inline]
    pub const fn gray(l: f32, a: f32) -> Self {
        Self::new(l, l, l, a)
    }

    /// Every component clamped to `[0, 1]` (NaN becomes 0).
    pub fn clamped(self) -> Self {
        Self::new(
            scale::clamp_unit(self.r),
            scale::clamp_unit(self.g),
            scale::clamp_unit(self.b),
            scale::clamp_unit(self.a),
        )
    }

    #[inline]
    pub const fn rgb(self) -> [f32; 3] {
        [self.r, self.g, self.b]
    }

    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    #[inline]
    pub const fn from_array(v: [f32; 4]) -> Self {
        Self::new(v[0], v[1], v[2], v[3])
    }

    /// BT.709 luminance of the color components.
    #[inline]
    pub fn luminance(self) -> f32 {
        luminance(self.r, self.g, self.b)
    }
}

/// BT.709 luminance weights (red, green, blue).
pub const BT709: [f32; 3] = [0.2126, 0.7152, 0.0722];

/// BT.709 weighted sum of scaled components, clamped to `[0, 1]`.
///
/// Returns `r` unchanged when `r == g == b`, so gray round trips exactly.
#[inline]
pub fn luminance(r: f32, g: f32, b: f32) -> f32 {
    if r == g && g == b {
        return scale::clamp_unit(r);
    }
    scale::clamp_unit(BT709[0] * r + BT709[1] * g + BT709[2] * b)
}

// ── Classification ──────────────────────────────────────────────────

/// Interchange role a pixel type belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// Alpha only; color is implicitly white.
    Alpha,
    /// Luminance only; opaque.
    Gray,
    GrayAlpha,
    /// Two or more color channels, with or without alpha.
    Color,
}

/// Precision class used to pick the interchange hub.
///
/// `Wide` covers float, half-float and signed channels, all of which
/// convert through `f32`. The integer classes rescale exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Depth {
    Bits8,
    Bits16,
    Bits32,
    Wide,
}

// ── Pixel trait ─────────────────────────────────────────────────────

/// A fixed-layout pixel value.
///
/// The in-memory layout is exactly the channel list of
/// [`Pixel::descriptor`], so slices of any pixel type can be viewed as
/// bytes with `bytemuck`.
///
/// Every role method has a working default through [`ScaledVector`];
/// implementations only override the ones with a cheaper exact path. The
/// 32-bit roles default to the 8 or 16-bit role of the same kind for
/// integer types, so they never take a float detour.
pub trait Pixel: Copy + Default + PartialEq + fmt::Debug + Pod + Send + Sync + 'static {
    /// Runtime tag of this type.
    const FORMAT: PixelFormat;
    const FAMILY: Family;
    const DEPTH: Depth;

    /// Populate from a scaled vector. Alpha-less types ignore `a`;
    /// luminance types use [`luminance`].
    fn from_scaled(v: ScaledVector) -> Self;

    /// Components in `[0, 1]`. Opaque types report `a = 1.0`.
    fn to_scaled(self) -> ScaledVector;

    #[inline]
    fn from_scaled3(rgb: [f32; 3]) -> Self {
        Self::from_scaled(ScaledVector::opaque(rgb[0], rgb[1], rgb[2]))
    }

    #[inline]
    fn to_scaled3(self) -> [f32; 3] {
        self.to_scaled().rgb()
    }

    /// Channel layout of this type.
    #[inline]
    fn descriptor() -> &'static ComponentDescriptor {
        Self::FORMAT.descriptor()
    }

    // Construction from interchange roles.

    #[inline]
    fn from_alpha8(v: Alpha8) -> Self {
        Self::from_scaled(v.to_scaled())
    }
    #[inline]
    fn from_alpha16(v: Alpha16) -> Self {
        Self::from_scaled(v.to_scaled())
    }
    #[inline]
    fn from_alpha32(v: Alpha32) -> Self {
        match Self::DEPTH {
            Depth::Bits8 => Self::from_alpha8(v.to_alpha8()),
            Depth::Bits16 => Self::from_alpha16(v.to_alpha16()),
            _ => Self::from_scaled(v.to_scaled()),
        }
    }
    #[inline]
    fn from_alpha_f(v: AlphaF) -> Self {
        Self::from_scaled(v.to_scaled())
    }
    #[inline]
    fn from_gray8(v: Gray8) -> Self {
        Self::from_scaled(v.to_scaled())
    }
    #[inline]
    fn from_gray16(v: Gray16) -> Self {
        Self::from_scaled(v.to_scaled())
    }
    #[inline]
    fn from_gray32(v: Gray32) -> Self {
        match Self::DEPTH {
            Depth::Bits8 => Self::from_gray8(v.to_gray8()),
            Depth::Bits16 => Self::from_gray16(v.to_gray16()),
            _ => Self::from_scaled(v.to_scaled()),
        }
    }
    #[inline]
    fn from_gray_f(v: GrayF) -> Self {
        Self::from_scaled(v.to_scaled())
    }
    #[inline]
    fn from_gray_alpha16(v: GrayAlpha16) -> Self {
        Self::from_scaled(v.to_scaled())
    }
    #[inline]
    fn from_gray_alpha32(v: GrayAlpha32) -> Self {
        Self::from_scaled(v.to_scaled())
    }
    #[inline]
    fn from_rgb24(v: Rgb24) -> Self {
        Self::from_scaled(v.to_scaled())
    }
    #[inline]
    fn from_rgb48(v: Rgb48) -> Self {
        Self::from_scaled(v.to_scaled())
    }
    #[inline]
    fn from_rgba32(v: Rgba32) -> Self {
        Self::from_scaled(v.to_scaled())
    }
    #[inline]
    fn from_rgba64(v: Rgba64) -> Self {
        Self::from_scaled(v.to_scaled())
    }
    #[inline]
    fn from_rgba128(v: Rgba128) -> Self {
        match Self::DEPTH {
            Depth::Bits8 => Self::from_rgba32(v.to_rgba32()),
            Depth::Bits16 => Self::from_rgba64(v.to_rgba64()),
            _ => Self::from_scaled(v.to_scaled()),
        }
    }

    // Projection onto interchange roles.

    #[inline]
    fn to_alpha8(self) -> Alpha8 {
        Alpha8::from_scaled(self.to_scaled())
    }
    #[inline]
    fn to_alpha16(self) -> Alpha16 {
        Alpha16::from_scaled(self.to_scaled())
    }
    #[inline]
    fn to_alpha32(self) -> Alpha32 {
        match Self::DEPTH {
            Depth::Bits8 | Depth::Bits16 => Alpha32::from_alpha16(self.to_alpha16()),
            _ => Alpha32::from_scaled(self.to_scaled()),
        }
    }
    #[inline]
    fn to_alpha_f(self) -> AlphaF {
        AlphaF::from_scaled(self.to_scaled())
    }
    #[inline]
    fn to_gray8(self) -> Gray8 {
        Gray8::from_scaled(self.to_scaled())
    }
    #[inline]
    fn to_gray16(self) -> Gray16 {
        Gray16::from_scaled(self.to_scaled())
    }
    #[inline]
    fn to_gray32(self) -> Gray32 {
        match Self::DEPTH {
            Depth::Bits8 | Depth::Bits16 => Gray32::from_gray16(self.to_gray16()),
            _ => Gray32::from_scaled(self.to_scaled()),
        }
    }
    #[inline]
    fn to_gray_f(self) -> GrayF {
        GrayF::from_scaled(self.to_scaled())
    }
    #[inline]
    fn to_gray_alpha16(self) -> GrayAlpha16 {
        GrayAlpha16::from_scaled(self.to_scaled())
    }
    #[inline]
    fn to_gray_alpha32(self) -> GrayAlpha32 {
        GrayAlpha32::from_scaled(self.to_scaled())
    }
    #[inline]
    fn to_rgb24(self) -> Rgb24 {
        Rgb24::from_scaled(self.to_scaled())
    }
    #[inline]
    fn to_rgb48(self) -> Rgb48 {
        Rgb48::from_scaled(self.to_scaled())
    }
    #[inline]
    fn to_rgba32(self) -> Rgba32 {
        Rgba32::from_scaled(self.to_scaled())
    }
    #[inline]
    fn to_rgba64(self) -> Rgba64 {
        Rgba64::from_scaled(self.to_scaled())
    }
    #[inline]
    fn to_rgba128(self) -> Rgba128 {
        match Self::DEPTH {
            Depth::Bits8 | Depth::Bits16 => Rgba128::from_rgba64(self.to_rgba64()),
            _ => Rgba128::from_scaled(self.to_scaled()),
        }
    }
}

/// Explicit conversion between a pixel and its packed integer form.
///
/// Implemented by the bit-field types and the 8-bit four-channel types.
/// The integer is the pixel's memory read in native byte order for the
/// bit-field types and little-endian byte order (first channel in the low
/// byte) for the byte-addressed types.
pub trait PackedPixel: Pixel {
    type Packed: Copy + Eq + fmt::Debug;

    fn pack(self) -> Self::Packed;
    fn unpack(packed: Self::Packed) -> Self;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn luminance_of_gray_is_exact() {
        for v in [0.0f32, 0.1, 0.5, 0.77, 1.0] {
            assert_eq!(luminance(v, v, v), v);
        }
    }

    #[test]
    fn luminance_uses_bt709() {
        let l = luminance(1.0, 0.0, 0.0);
        assert!((l - 0.2126).abs() < 1e-6);
        let l = luminance(0.0, 1.0, 0.0);
        assert!((l - 0.7152).abs() < 1e-6);
        let l = luminance(0.0, 0.0, 1.0);
        assert!((l - 0.0722).abs() < 1e-6);
    }

    #[test]
    fn luminance_clamps_out_of_range() {
        assert_eq!(luminance(2.0, 2.0, 2.0), 1.0);
        assert_eq!(luminance(-1.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn clamped_maps_nan_to_zero() {
        let v = ScaledVector::new(f32::NAN, 1.5, -0.5, 0.25).clamped();
        assert_eq!(v, ScaledVector::new(0.0, 1.0, 0.0, 0.25));
    }
}
