//! # zenpack
//!
//! Packed pixel types, exact bit-depth conversions between them, and a
//! row-streaming encode pipeline.
//!
//! ## Pixel types
//!
//! Forty-odd fixed-layout `#[repr(C)]` pixel structs: alpha-only, gray,
//! gray+alpha, RGB/BGR, two-channel, every common RGBA byte order, 16-bit
//! and float variants, bit-field packings (565, 4444, 5551, 1010102), and
//! signed normalized vectors. All of them implement [`Pixel`], which
//! converts to and from a [`ScaledVector`] and to every interchange role
//! (`to_gray8`, `to_rgba64`, `from_alpha_f`, ...). Bit-field types also
//! implement [`PackedPixel`] for explicit `pack()`/`unpack()`.
//!
//! ## Conversions
//!
//! [`convert`] picks its path at compile time from the two types' families:
//! same-family conversions go through an integer hub at the destination's
//! depth (so narrowing rounds exactly once), cross-family ones through the
//! scaled vector. The integer scaling rules live in [`scale`].
//!
//! ```
//! use zenpack::{Bgr565, Gray8, Pixel, Rgb24, Rgba32, convert};
//!
//! let px = Rgba32::new(255, 128, 0, 255);
//! let packed: Bgr565 = convert(px);
//! assert_eq!(packed.to_rgb24(), Rgb24::new(255, 130, 0));
//! let gray: Gray8 = convert(Rgba32::new(90, 90, 90, 7));
//! assert_eq!(gray, Gray8::new(90));
//! ```
//!
//! ## Encoding
//!
//! A [`RowProvider`] turns any [`ImageRows`] source into tightly packed
//! byte or float rows for a [`RowCodec`]. The `std` pipeline
//! ([`EncoderConfig`], [`EncoderState`]) owns the stream, a pooled scratch
//! buffer, cancellation, and progress reporting.
//!
//! ```
//! use zenpack::{Codec, EncoderConfig, PixelSlice, Rgb24, Unstoppable};
//! use zenpack::codec::PnmFormat;
//!
//! let px = [Rgb24::new(1, 2, 3), Rgb24::new(4, 5, 6)];
//! let img = PixelSlice::from_pixels(&px, 2, 1)?;
//! let ppm = EncoderConfig::new(Codec::Pnm(PnmFormat::Ppm)).encode_to_vec(&img, &Unstoppable)?;
//! assert!(ppm.ends_with(&[1, 2, 3, 4, 5, 6]));
//! # Ok::<(), zenpack::EncodeError>(())
//! ```
//!
//! ## Non-Goals
//!
//! - Color management (ICC profiles, gamma-correct blending)
//! - GPU-side conversion
//! - Decoding

#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[macro_use]
mod format;

pub mod codec;
mod convert;
mod descriptor;
mod error;
mod image;
mod limits;
pub mod pixel;
mod row;
pub mod scale;

#[cfg(feature = "std")]
mod pipeline;

// Re-exports
pub use codec::{Codec, RowCodec};
pub use convert::{Route, convert, convert_slice, convert_vec, hub_depth, route, route_of};
pub use descriptor::{ChannelDomain, ChannelRole, Component, ComponentDescriptor};
pub use enough::{Stop, StopReason, Unstoppable};
pub use error::{EncodeError, SizeError};
pub use format::PixelFormat;
pub use image::{ImageRows, PixelSlice};
pub use limits::Limits;
pub use pixel::*;
pub use row::{ProgressFn, Rect, RowFormat, RowLayout, RowProvider, RowSample};

#[cfg(feature = "std")]
pub use pipeline::{
    BufferPool, DEFAULT_SCRATCH_LEN, EncodeStatus, EncoderConfig, EncoderState, HeapPool,
    SharedPool,
};
