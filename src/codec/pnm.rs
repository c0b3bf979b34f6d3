//! PNM encoders: P5, P6, P7, PFM.

use alloc::format;
use alloc::vec::Vec;

use super::{ByteSink, RowCodec, image_bytes, pick_layout};
use crate::error::EncodeError;
use crate::format::PixelFormat;
use crate::row::{RowFormat, RowLayout, RowProvider, RowSample};

/// Which PNM sub-format to write.
#[non_exhaustive]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PnmFormat {
    /// P5: binary grayscale.
    Pgm,
    /// P6: binary RGB.
    Ppm,
    /// P7: PAM, any of the four row layouts.
    Pam,
    /// PFM: 32-bit float grayscale or RGB, little-endian, bottom-up.
    Pfm,
}

/// Streams rows into a PNM container.
#[derive(Clone, Debug)]
pub struct PnmEncoder {
    format: PnmFormat,
}

impl PnmEncoder {
    pub fn new(format: PnmFormat) -> Self {
        Self { format }
    }

    fn header(&self, layout: RowLayout, width: u32, height: u32) -> alloc::string::String {
        match self.format {
            PnmFormat::Pgm => format!("P5\n{width} {height}\n255\n"),
            PnmFormat::Ppm => format!("P6\n{width} {height}\n255\n"),
            PnmFormat::Pam => {
                let tupltype = match layout {
                    RowLayout::Gray => "GRAYSCALE",
                    RowLayout::GrayAlpha => "GRAYSCALE_ALPHA",
                    RowLayout::Rgb => "RGB",
                    RowLayout::Rgba => "RGB_ALPHA",
                };
                format!(
                    "P7\nWIDTH {width}\nHEIGHT {height}\nDEPTH {}\nMAXVAL 255\nTUPLTYPE {tupltype}\nENDHDR\n",
                    layout.channels()
                )
            }
            PnmFormat::Pfm => {
                let magic = if layout == RowLayout::Gray { "Pf" } else { "PF" };
                format!("{magic}\n{width} {height}\n-1.0\n")
            }
        }
    }
}

impl RowCodec for PnmEncoder {
    fn name(&self) -> &'static str {
        match self.format {
            PnmFormat::Pgm => "pgm",
            PnmFormat::Ppm => "ppm",
            PnmFormat::Pam => "pam",
            PnmFormat::Pfm => "pfm",
        }
    }

    fn negotiate(
        &self,
        source: PixelFormat,
        requested: Option<RowLayout>,
    ) -> Result<RowFormat, EncodeError> {
        let (layout, sample) = match self.format {
            PnmFormat::Pgm => (
                pick_layout(source, requested, &[RowLayout::Gray], RowLayout::Gray)?,
                RowSample::U8,
            ),
            PnmFormat::Ppm => (
                pick_layout(source, requested, &[RowLayout::Rgb], RowLayout::Rgb)?,
                RowSample::U8,
            ),
            PnmFormat::Pam => (
                requested.unwrap_or(RowLayout::natural(source)),
                RowSample::U8,
            ),
            PnmFormat::Pfm => {
                let fallback = if RowLayout::natural(source) == RowLayout::Gray {
                    RowLayout::Gray
                } else {
                    RowLayout::Rgb
                };
                (
                    pick_layout(source, requested, &[RowLayout::Gray, RowLayout::Rgb], fallback)?,
                    RowSample::F32,
                )
            }
        };
        Ok(RowFormat::new(layout, sample))
    }

    fn encode(
        &mut self,
        rows: &mut RowProvider<'_>,
        format: RowFormat,
        out: &mut dyn ByteSink,
    ) -> Result<(), EncodeError> {
        let (width, height) = (rows.width(), rows.height());
        out.write_all(self.header(format.layout, width, height).as_bytes())?;

        if self.format != PnmFormat::Pfm {
            for y in 0..height {
                out.write_all(rows.byte_row(y)?)?;
            }
            return Ok(());
        }

        // PFM stores bottom-to-top, so the rows are collected first.
        let row_bytes = rows.row_bytes(RowSample::F32);
        let mut pixels = Vec::with_capacity(image_bytes(width, height, format.bytes_per_pixel())?);
        for y in 0..height {
            for v in rows.float_row(y)? {
                pixels.extend_from_slice(&v.to_le_bytes());
            }
        }
        for row in pixels.chunks_exact(row_bytes).rev() {
            out.write_all(row)?;
        }
        Ok(())
    }
}
