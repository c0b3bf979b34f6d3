//! Per-channel storage types shared by the uniform pixel layouts.

use half::f16;

use crate::scale;

/// A single channel's storage type.
///
/// Sealed; implemented for `u8`, `u16`, `u32`, `f32`, and `f16`. Integer
/// to integer conversions use the exact rescaling in [`crate::scale`].
pub trait Channel: Copy + sealed::Sealed {
    /// The value representing full intensity.
    const MAX: Self;
    /// The value representing zero intensity.
    const ZERO: Self;

    fn from_u8(v: u8) -> Self;
    fn to_u8(self) -> u8;
    fn from_u16(v: u16) -> Self;
    fn to_u16(self) -> u16;
    fn from_u32(v: u32) -> Self;
    fn to_u32(self) -> u32;
    /// From a `[0, 1]` value.
    fn from_unit(v: f32) -> Self;
    /// To a value clamped to `[0, 1]`.
    fn to_unit(self) -> f32;
}

mod sealed {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for f32 {}
    impl Sealed for half::f16 {}
}

impl Channel for u8 {
    const MAX: Self = u8::MAX;
    const ZERO: Self = 0;

    #[inline]
    fn from_u8(v: u8) -> Self {
        v
    }
    #[inline]
    fn to_u8(self) -> u8 {
        self
    }
    #[inline]
    fn from_u16(v: u16) -> Self {
        scale::u16_to_u8(v)
    }
    #[inline]
    fn to_u16(self) -> u16 {
        scale::u8_to_u16(self)
    }
    #[inline]
    fn from_u32(v: u32) -> Self {
        scale::u32_to_u8(v)
    }
    #[inline]
    fn to_u32(self) -> u32 {
        scale::u8_to_u32(self)
    }
    #[inline]
    fn from_unit(v: f32) -> Self {
        scale::f32_to_u8(v)
    }
    #[inline]
    fn to_unit(self) -> f32 {
        scale::u8_to_f32(self)
    }
}

impl Channel for u16 {
    const MAX: Self = u16::MAX;
    const ZERO: Self = 0;

    #[inline]
    fn from_u8(v: u8) -> Self {
        scale::u8_to_u16(v)
    }
    #[inline]
    fn to_u8(self) -> u8 {
        scale::u16_to_u8(self)
    }
    #[inline]
    fn from_u16(v: u16) -> Self {
        v
    }
    #[inline]
    fn to_u16(self) -> u16 {
        self
    }
    #[inline]
    fn from_u32(v: u32) -> Self {
        scale::u32_to_u16(v)
    }
    #[inline]
    fn to_u32(self) -> u32 {
        scale::u16_to_u32(self)
    }
    #[inline]
    fn from_unit(v: f32) -> Self {
        scale::f32_to_u16(v)
    }
    #[inline]
    fn to_unit(self) -> f32 {
        scale::u16_to_f32(self)
    }
}

impl Channel for u32 {
    const MAX: Self = u32::MAX;
    const ZERO: Self = 0;

    #[inline]
    fn from_u8(v: u8) -> Self {
        scale::u8_to_u32(v)
    }
    #[inline]
    fn to_u8(self) -> u8 {
        scale::u32_to_u8(self)
    }
    #[inline]
    fn from_u16(v: u16) -> Self {
        scale::u16_to_u32(v)
    }
    #[inline]
    fn to_u16(self) -> u16 {
        scale::u32_to_u16(self)
    }
    #[inline]
    fn from_u32(v: u32) -> Self {
        v
    }
    #[inline]
    fn to_u32(self) -> u32 {
        self
    }
    #[inline]
    fn from_unit(v: f32) -> Self {
        scale::f32_to_u32(v)
    }
    #[inline]
    fn to_unit(self) -> f32 {
        scale::u32_to_f32(self)
    }
}

impl Channel for f32 {
    const MAX: Self = 1.0;
    const ZERO: Self = 0.0;

    #[inline]
    fn from_u8(v: u8) -> Self {
        scale::u8_to_f32(v)
    }
    #[inline]
    fn to_u8(self) -> u8 {
        scale::f32_to_u8(self)
    }
    #[inline]
    fn from_u16(v: u16) -> Self {
        scale::u16_to_f32(v)
    }
    #[inline]
    fn to_u16(self) -> u16 {
        scale::f32_to_u16(self)
    }
    #[inline]
    fn from_u32(v: u32) -> Self {
        scale::u32_to_f32(v)
    }
    #[inline]
    fn to_u32(self) -> u32 {
        scale::f32_to_u32(self)
    }
    #[inline]
    fn from_unit(v: f32) -> Self {
        v
    }
    #[inline]
    fn to_unit(self) -> f32 {
        scale::clamp_unit(self)
    }
}

impl Channel for f16 {
    const MAX: Self = f16::ONE;
    const ZERO: Self = f16::ZERO;

    #[inline]
    fn from_u8(v: u8) -> Self {
        f16::from_f32(scale::u8_to_f32(v))
    }
    #[inline]
    fn to_u8(self) -> u8 {
        scale::f32_to_u8(self.to_f32())
    }
    #[inline]
    fn from_u16(v: u16) -> Self {
        f16::from_f32(scale::u16_to_f32(v))
    }
    #[inline]
    fn to_u16(self) -> u16 {
        scale::f32_to_u16(self.to_f32())
    }
    #[inline]
    fn from_u32(v: u32) -> Self {
        f16::from_f32(scale::u32_to_f32(v))
    }
    #[inline]
    fn to_u32(self) -> u32 {
        scale::f32_to_u32(self.to_f32())
    }
    #[inline]
    fn from_unit(v: f32) -> Self {
        f16::from_f32(v)
    }
    #[inline]
    fn to_unit(self) -> f32 {
        scale::clamp_unit(self.to_f32())
    }
}
