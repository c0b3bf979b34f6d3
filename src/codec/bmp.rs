//! BMP encoder: uncompressed 24-bit and 32-bit, top-down.

use alloc::vec::Vec;

use super::{ByteSink, RowCodec, pick_layout};
use crate::error::EncodeError;
use crate::format::PixelFormat;
use crate::row::{RowFormat, RowLayout, RowProvider, RowSample};

const HEADER_LEN: usize = 54;
/// 72 DPI in pixels per metre.
const RESOLUTION: u32 = 2835;

/// Streams rows into a BMP file.
///
/// Opaque sources are written as 24-bit BGR, sources with alpha as 32-bit
/// BGRA. The height is stored negative so rows go out top to bottom.
#[derive(Clone, Debug, Default)]
pub struct BmpEncoder {
    row: Vec<u8>,
}

impl BmpEncoder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RowCodec for BmpEncoder {
    fn name(&self) -> &'static str {
        "bmp"
    }

    fn negotiate(
        &self,
        source: PixelFormat,
        requested: Option<RowLayout>,
    ) -> Result<RowFormat, EncodeError> {
        let fallback = if source.has_alpha() {
            RowLayout::Rgba
        } else {
            RowLayout::Rgb
        };
        let layout = pick_layout(
            source,
            requested,
            &[RowLayout::Rgb, RowLayout::Rgba],
            fallback,
        )?;
        Ok(RowFormat::new(layout, RowSample::U8))
    }

    fn encode(
        &mut self,
        rows: &mut RowProvider<'_>,
        format: RowFormat,
        out: &mut dyn ByteSink,
    ) -> Result<(), EncodeError> {
        let (width, height) = (rows.width(), rows.height());
        let channels = format.layout.channels();
        let row_stride = (width as usize)
            .checked_mul(channels)
            .and_then(|r| r.checked_add(3))
            .map(|r| r & !3)
            .ok_or(EncodeError::DimensionsTooLarge { width, height })?;
        let pixel_data_size = row_stride
            .checked_mul(height as usize)
            .and_then(|n| u32::try_from(n).ok())
            .ok_or(EncodeError::DimensionsTooLarge { width, height })?;
        let file_size = pixel_data_size
            .checked_add(HEADER_LEN as u32)
            .ok_or(EncodeError::DimensionsTooLarge { width, height })?;
        let (w, h) = match (i32::try_from(width), i32::try_from(height)) {
            (Ok(w), Ok(h)) => (w, h),
            _ => return Err(EncodeError::DimensionsTooLarge { width, height }),
        };

        let mut header = Vec::with_capacity(HEADER_LEN);
        write_header(&mut header, file_size, pixel_data_size, w, -h, channels as u16 * 8);
        out.write_all(&header)?;

        for y in 0..height {
            let src = rows.byte_row(y)?;
            self.row.clear();
            for px in src.chunks_exact(channels) {
                self.row.extend_from_slice(&[px[2], px[1], px[0]]);
                if channels == 4 {
                    self.row.push(px[3]);
                }
            }
            self.row.resize(row_stride, 0);
            out.write_all(&self.row)?;
        }
        Ok(())
    }
}

fn write_header(
    out: &mut Vec<u8>,
    file_size: u32,
    pixel_data_size: u32,
    width: i32,
    height: i32,
    bpp: u16,
) {
    // File header (14 bytes)
    out.extend_from_slice(b"BM");
    out.extend_from_slice(&file_size.to_le_bytes());
    out.extend_from_slice(&[0u8; 4]); // reserved
    out.extend_from_slice(&(HEADER_LEN as u32).to_le_bytes());

    // BITMAPINFOHEADER (40 bytes)
    out.extend_from_slice(&40u32.to_le_bytes());
    out.extend_from_slice(&width.to_le_bytes());
    out.extend_from_slice(&height.to_le_bytes()); // negative = top-down
    out.extend_from_slice(&1u16.to_le_bytes()); // planes
    out.extend_from_slice(&bpp.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // BI_RGB
    out.extend_from_slice(&pixel_data_size.to_le_bytes());
    out.extend_from_slice(&RESOLUTION.to_le_bytes());
    out.extend_from_slice(&RESOLUTION.to_le_bytes());
    out.extend_from_slice(&0u32.to_le_bytes()); // colors used
    out.extend_from_slice(&0u32.to_le_bytes()); // important colors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_is_54_bytes() {
        let mut out = Vec::new();
        write_header(&mut out, 70, 16, 2, -2, 32);
        assert_eq!(out.len(), HEADER_LEN);
        assert_eq!(&out[..2], b"BM");
        assert_eq!(i32::from_le_bytes([out[22], out[23], out[24], out[25]]), -2);
        assert_eq!(u16::from_le_bytes([out[28], out[29]]), 32);
    }

    #[test]
    fn layout_follows_source_alpha() {
        let enc = BmpEncoder::new();
        let f = enc.negotiate(PixelFormat::Bgra5551, None).unwrap();
        assert_eq!(f.layout, RowLayout::Rgba);
        let f = enc.negotiate(PixelFormat::Gray16, None).unwrap();
        assert_eq!(f.layout, RowLayout::Rgb);
        assert!(enc.negotiate(PixelFormat::Gray16, Some(RowLayout::Gray)).is_err());
    }
}
