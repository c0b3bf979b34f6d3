//! Row-oriented output codecs.
//!
//! A codec sees the image only through a [`RowProvider`]: it picks a row
//! format in [`negotiate`](RowCodec::negotiate), then pulls rows top to
//! bottom and hands encoded bytes to a [`ByteSink`]. It never touches the
//! source pixel type.
//!
//! The built-in codecs cover the simple container formats:
//!
//! | Codec | Rows | Layouts |
//! |-------|------|---------|
//! | PGM (P5) | `u8` | Gray |
//! | PPM (P6) | `u8` | Rgb |
//! | PAM (P7) | `u8` | any |
//! | PFM | `f32` | Gray, Rgb |
//! | BMP | `u8` | Rgb, Rgba |
//! | farbfeld | `u8` (written as 16-bit) | any |
//! | Radiance HDR | `f32` | Rgb |
//! | QOI (`qoi` feature) | `u8` | Rgb, Rgba |

mod bmp;
mod farbfeld;
mod hdr;
mod pnm;
#[cfg(feature = "qoi")]
mod qoi;

pub use bmp::BmpEncoder;
pub use farbfeld::FarbfeldEncoder;
pub use hdr::HdrEncoder;
pub use pnm::{PnmEncoder, PnmFormat};
#[cfg(feature = "qoi")]
pub use qoi::QoiEncoder;

use alloc::vec::Vec;

use crate::error::EncodeError;
use crate::format::PixelFormat;
use crate::row::{RowFormat, RowLayout, RowProvider};

/// Destination for encoded bytes.
pub trait ByteSink {
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), EncodeError>;
}

impl ByteSink for Vec<u8> {
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        self.extend_from_slice(bytes);
        Ok(())
    }
}

impl<S: ByteSink + ?Sized> ByteSink for &mut S {
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), EncodeError> {
        (**self).write_all(bytes)
    }
}

/// An encoder that consumes converted rows.
pub trait RowCodec {
    /// Short name for logs and errors.
    fn name(&self) -> &'static str;

    /// Pick the row format for `source`, honoring `requested` when given.
    ///
    /// Returns [`EncodeError::UnsupportedConversion`] when the codec cannot
    /// store the requested layout.
    fn negotiate(
        &self,
        source: PixelFormat,
        requested: Option<RowLayout>,
    ) -> Result<RowFormat, EncodeError>;

    /// Encode every row of `rows` in `format` (the value returned by
    /// `negotiate`) into `out`.
    fn encode(
        &mut self,
        rows: &mut RowProvider<'_>,
        format: RowFormat,
        out: &mut dyn ByteSink,
    ) -> Result<(), EncodeError>;
}

/// Built-in codec selection.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Codec {
    Pnm(PnmFormat),
    Bmp,
    Farbfeld,
    Hdr,
    #[cfg(feature = "qoi")]
    Qoi,
}

impl Codec {
    pub(crate) fn encoder(self) -> alloc::boxed::Box<dyn RowCodec> {
        use alloc::boxed::Box;
        match self {
            Codec::Pnm(format) => Box::new(PnmEncoder::new(format)),
            Codec::Bmp => Box::new(BmpEncoder::new()),
            Codec::Farbfeld => Box::new(FarbfeldEncoder::new()),
            Codec::Hdr => Box::new(HdrEncoder::new()),
            #[cfg(feature = "qoi")]
            Codec::Qoi => Box::new(QoiEncoder::new()),
        }
    }
}

/// `requested` if it is one of `allowed`, else `fallback`; an explicit
/// request outside `allowed` is an error.
pub(crate) fn pick_layout(
    source: PixelFormat,
    requested: Option<RowLayout>,
    allowed: &[RowLayout],
    fallback: RowLayout,
) -> Result<RowLayout, EncodeError> {
    match requested {
        None => Ok(fallback),
        Some(layout) if allowed.contains(&layout) => Ok(layout),
        Some(layout) => Err(EncodeError::UnsupportedConversion {
            from: source,
            to: layout,
        }),
    }
}

/// `width * bytes_per_pixel * height` with overflow checks.
pub(crate) fn image_bytes(
    width: u32,
    height: u32,
    bytes_per_pixel: usize,
) -> Result<usize, EncodeError> {
    (width as usize)
        .checked_mul(bytes_per_pixel)
        .and_then(|r| r.checked_mul(height as usize))
        .ok_or(EncodeError::DimensionsTooLarge { width, height })
}
