//! Static conversion between any two pixel types.
//!
//! The path is picked at compile time from the two types' [`Family`] and
//! the hub [`Depth`] (see [`hub_depth`]):
//!
//! - same type: bit copy;
//! - anything to or from alpha-only: the alpha hub;
//! - gray to gray, gray+alpha or colour: the gray hub (replication);
//! - gray+alpha to gray+alpha or colour: the gray+alpha hub;
//! - colour to colour: the RGBA hub;
//! - colour to gray or gray+alpha, and any float gray+alpha/colour pair:
//!   the scaled vector.
//!
//! Integer hubs are taken at the destination's depth, so a narrowing
//! conversion rounds exactly once. Widening into 32 bits goes through the
//! 16-bit hub, which both 8 and 16-bit channels reach exactly.

use alloc::vec::Vec;

use crate::error::SizeError;
use crate::pixel::{Depth, Family, Pixel};

/// Conversion path between two pixel types.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    Identity,
    Alpha(Depth),
    Gray(Depth),
    GrayAlpha(Depth),
    Color(Depth),
    /// Through [`ScaledVector`](crate::pixel::ScaledVector).
    Vector,
}

/// Depth of the hub between a `src` and a `dst` channel class.
pub const fn hub_depth(src: Depth, dst: Depth) -> Depth {
    match (src, dst) {
        (Depth::Bits8 | Depth::Bits16, Depth::Bits32) => Depth::Bits16,
        (Depth::Wide, Depth::Bits32) => Depth::Wide,
        (_, d) => d,
    }
}

/// Choose the path from `src` to `dst` through a hub at `depth`.
pub const fn route(src: Family, dst: Family, depth: Depth) -> Route {
    match (src, dst) {
        (Family::Alpha, _) | (_, Family::Alpha) => Route::Alpha(depth),
        (Family::Gray, _) | (Family::GrayAlpha, Family::Gray) => Route::Gray(depth),
        (Family::GrayAlpha, _) => match depth {
            Depth::Bits32 | Depth::Wide => Route::Vector,
            d => Route::GrayAlpha(d),
        },
        (Family::Color, Family::Color) => match depth {
            Depth::Wide => Route::Vector,
            d => Route::Color(d),
        },
        (Family::Color, Family::Gray | Family::GrayAlpha) => Route::Vector,
    }
}

/// The path [`convert`] takes from `S` to `D`.
pub const fn route_of<S: Pixel, D: Pixel>() -> Route {
    if S::FORMAT as u8 == D::FORMAT as u8 {
        return Route::Identity;
    }
    route(S::FAMILY, D::FAMILY, hub_depth(S::DEPTH, D::DEPTH))
}

/// Convert one pixel.
#[inline]
pub fn convert<S: Pixel, D: Pixel>(src: S) -> D {
    match const { route_of::<S, D>() } {
        Route::Identity => bytemuck::cast(src),
        Route::Alpha(Depth::Bits8) => D::from_alpha8(src.to_alpha8()),
        Route::Alpha(Depth::Bits16) => D::from_alpha16(src.to_alpha16()),
        Route::Alpha(Depth::Bits32) => D::from_alpha32(src.to_alpha32()),
        Route::Alpha(Depth::Wide) => D::from_alpha_f(src.to_alpha_f()),
        Route::Gray(Depth::Bits8) => D::from_gray8(src.to_gray8()),
        Route::Gray(Depth::Bits16) => D::from_gray16(src.to_gray16()),
        Route::Gray(Depth::Bits32) => D::from_gray32(src.to_gray32()),
        Route::Gray(Depth::Wide) => D::from_gray_f(src.to_gray_f()),
        Route::GrayAlpha(Depth::Bits8) => D::from_gray_alpha16(src.to_gray_alpha16()),
        Route::GrayAlpha(_) => D::from_gray_alpha32(src.to_gray_alpha32()),
        Route::Color(Depth::Bits8) => D::from_rgba32(src.to_rgba32()),
        Route::Color(Depth::Bits32) => D::from_rgba128(src.to_rgba128()),
        Route::Color(_) => D::from_rgba64(src.to_rgba64()),
        Route::Vector => D::from_scaled(src.to_scaled()),
    }
}

/// Convert `src` into `dst` pixel by pixel. Lengths must match.
pub fn convert_slice<S: Pixel, D: Pixel>(src: &[S], dst: &mut [D]) -> Result<(), SizeError> {
    if src.len() != dst.len() {
        return Err(SizeError {
            expected: src.len(),
            actual: dst.len(),
        });
    }
    for (d, &s) in dst.iter_mut().zip(src) {
        *d = convert(s);
    }
    Ok(())
}

/// Convert `src` into a new vector.
pub fn convert_vec<S: Pixel, D: Pixel>(src: &[S]) -> Vec<D> {
    src.iter().map(|&s| convert(s)).collect()
}
