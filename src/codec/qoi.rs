//! QOI encoder via `rapid-qoi`.
//!
//! `rapid-qoi` encodes a whole buffer at once, so rows are collected before
//! the stream sees any bytes.

use alloc::vec::Vec;

use super::{ByteSink, RowCodec, image_bytes, pick_layout};
use crate::error::EncodeError;
use crate::format::PixelFormat;
use crate::row::{RowFormat, RowLayout, RowProvider, RowSample};

#[derive(Clone, Debug, Default)]
pub struct QoiEncoder;

impl QoiEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl RowCodec for QoiEncoder {
    fn name(&self) -> &'static str {
        "qoi"
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
        let mut pixels = Vec::with_capacity(image_bytes(width, height, format.bytes_per_pixel())?);
        for y in 0..height {
            pixels.extend_from_slice(rows.byte_row(y)?);
        }

        let colors = if format.layout == RowLayout::Rgba {
            rapid_qoi::Colors::Rgba
        } else {
            rapid_qoi::Colors::Rgb
        };
        let qoi = rapid_qoi::Qoi {
            width,
            height,
            colors,
        };
        let encoded = qoi
            .encode_alloc(&pixels)
            .map_err(|e| EncodeError::Codec(alloc::format!("QOI encode failed: {e:?}")))?;
        out.write_all(&encoded)
    }
}
