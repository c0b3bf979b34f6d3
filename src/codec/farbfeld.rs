//! Farbfeld encoder.
//!
//! Farbfeld is 8-byte magic (`farbfeld`), width and height as big-endian
//! `u32`, then big-endian RGBA `u16` pixels. Byte rows are widened with
//! `v * 257`; gray layouts are replicated and missing alpha is `0xFFFF`.

use alloc::vec::Vec;

use super::{ByteSink, RowCodec};
use crate::error::EncodeError;
use crate::format::PixelFormat;
use crate::row::{RowFormat, RowLayout, RowProvider, RowSample};

#[derive(Clone, Debug, Default)]
pub struct FarbfeldEncoder {
    row: Vec<u8>,
}

impl FarbfeldEncoder {
    pub fn new() -> Self {
        Self::default()
    }
}

fn widen(v: u8) -> [u8; 2] {
    (v as u16 * 257).to_be_bytes()
}

impl RowCodec for FarbfeldEncoder {
    fn name(&self) -> &'static str {
        "farbfeld"
    }

    fn negotiate(
        &self,
        _source: PixelFormat,
        requested: Option<RowLayout>,
    ) -> Result<RowFormat, EncodeError> {
        Ok(RowFormat::new(
            requested.unwrap_or(RowLayout::Rgba),
            RowSample::U8,
        ))
    }

    fn encode(
        &mut self,
        rows: &mut RowProvider<'_>,
        format: RowFormat,
        out: &mut dyn ByteSink,
    ) -> Result<(), EncodeError> {
        let (width, height) = (rows.width(), rows.height());
        let mut header = [0u8; 16];
        header[..8].copy_from_slice(b"farbfeld");
        header[8..12].copy_from_slice(&width.to_be_bytes());
        header[12..].copy_from_slice(&height.to_be_bytes());
        out.write_all(&header)?;

        let channels = format.layout.channels();
        for y in 0..height {
            let src = rows.byte_row(y)?;
            self.row.clear();
            for px in src.chunks_exact(channels) {
                let (rgb, a) = match format.layout {
                    RowLayout::Gray => ([px[0]; 3], None),
                    RowLayout::GrayAlpha => ([px[0]; 3], Some(px[1])),
                    RowLayout::Rgb => ([px[0], px[1], px[2]], None),
                    RowLayout::Rgba => ([px[0], px[1], px[2]], Some(px[3])),
                };
                for c in rgb {
                    self.row.extend_from_slice(&widen(c));
                }
                self.row.extend_from_slice(&widen(a.unwrap_or(u8::MAX)));
            }
            out.write_all(&self.row)?;
        }
        Ok(())
    }
}
