//! Radiance HDR encoder: flat (uncompressed) RGBE scanlines from float rows.

use alloc::format;
use alloc::vec::Vec;

use super::{ByteSink, RowCodec, pick_layout};
use crate::error::EncodeError;
use crate::format::PixelFormat;
use crate::row::{RowFormat, RowLayout, RowProvider, RowSample};

#[derive(Clone, Debug, Default)]
pub struct HdrEncoder {
    row: Vec<u8>,
}

impl HdrEncoder {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Shared-exponent encoding of one linear RGB triple.
///
/// Values below `1e-32` encode as black. Mantissas are truncated, as the
/// reference `float2rgbe` does.
pub(crate) fn to_rgbe(rgb: [f32; 3]) -> [u8; 4] {
    let max = rgb[0].max(rgb[1]).max(rgb[2]);
    if !(max >= 1e-32) {
        return [0; 4];
    }
    // max = m * 2^exp with m in [0.5, 1)
    let exp = ((max.to_bits() >> 23) & 0xFF) as i32 - 126;
    let biased = 127 + 8 - exp;
    if !(1..=254).contains(&biased) {
        return [0; 4];
    }
    let scale = f32::from_bits((biased as u32) << 23);
    let m = |v: f32| (v.max(0.0) * scale) as u8;
    [m(rgb[0]), m(rgb[1]), m(rgb[2]), (exp + 128) as u8]
}

impl RowCodec for HdrEncoder {
    fn name(&self) -> &'static str {
        "hdr"
    }

    fn negotiate(
        &self,
        source: PixelFormat,
        requested: Option<RowLayout>,
    ) -> Result<RowFormat, EncodeError> {
        let layout = pick_layout(source, requested, &[RowLayout::Rgb], RowLayout::Rgb)?;
        Ok(RowFormat::new(layout, RowSample::F32))
    }

    fn encode(
        &mut self,
        rows: &mut RowProvider<'_>,
        _format: RowFormat,
        out: &mut dyn ByteSink,
    ) -> Result<(), EncodeError> {
        let (width, height) = (rows.width(), rows.height());
        let header = format!("#?RADIANCE\nFORMAT=32-bit_rle_rgbe\n\n-Y {height} +X {width}\n");
        out.write_all(header.as_bytes())?;

        for y in 0..height {
            let src = rows.float_row(y)?;
            self.row.clear();
            for px in src.chunks_exact(3) {
                self.row.extend_from_slice(&to_rgbe([px[0], px[1], px[2]]));
            }
            out.write_all(&self.row)?;
        }
        Ok(())
    }
}
