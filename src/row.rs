//! Scanline adapter between a source image and a row-oriented codec.
//!
//! A [`RowProvider`] converts one source row at a time into the tightly
//! packed layout a codec asked for, either as bytes (`u8` per channel) or
//! as floats (`f32` per channel, clamped to `[0, 1]`). For any source row,
//! `byte_row(y)[i] == round(float_row(y)[i] * 255)`.
//!
//! The returned row borrows an internal buffer that the next call
//! overwrites. Cancellation is checked before each row, never mid-row, and
//! progress for finished rows is reported when the next row is requested
//! and at [`finish`](RowProvider::finish).

use alloc::vec::Vec;
use core::mem::size_of;

use enough::Stop;

use crate::convert::convert;
use crate::error::EncodeError;
use crate::format::PixelFormat;
use crate::image::ImageRows;
use crate::pixel::{Family, Gray8, GrayAlpha16, GrayAlphaF, GrayF, Pixel, Rgb24, RgbF, Rgba32, RgbaF};
use crate::scale;

/// Channel layout of a converted row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowLayout {
    /// Luminance.
    Gray = 1,
    /// Luminance, alpha.
    GrayAlpha = 2,
    /// Red, green, blue.
    Rgb = 3,
    /// Red, green, blue, alpha.
    Rgba = 4,
}

impl RowLayout {
    #[inline]
    pub const fn channels(self) -> usize {
        self as usize
    }

    pub const fn has_alpha(self) -> bool {
        matches!(self, Self::GrayAlpha | Self::Rgba)
    }

    /// The smallest layout that holds `format` without losing channels.
    /// Alpha-only sources become gray+alpha (white with alpha).
    pub fn natural(format: PixelFormat) -> Self {
        match format.family() {
            Family::Gray => Self::Gray,
            Family::Alpha | Family::GrayAlpha => Self::GrayAlpha,
            Family::Color if format.has_alpha() => Self::Rgba,
            Family::Color => Self::Rgb,
        }
    }
}

/// Sample type of a converted row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RowSample {
    U8,
    F32,
}

/// What a codec receives per row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RowFormat {
    pub layout: RowLayout,
    pub sample: RowSample,
}

impl RowFormat {
    pub const fn new(layout: RowLayout, sample: RowSample) -> Self {
        Self { layout, sample }
    }

    /// Bytes per converted pixel.
    pub const fn bytes_per_pixel(self) -> usize {
        match self.sample {
            RowSample::U8 => self.layout.channels(),
            RowSample::F32 => self.layout.channels() * 4,
        }
    }
}

/// Pixel rectangle reported with progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Progress callback: percentage in `0.0..=100.0` and the rows just finished.
pub type ProgressFn<'a> = dyn FnMut(f32, Option<Rect>) + 'a;

/// Produces converted scanlines of one image for one codec.
pub struct RowProvider<'a> {
    image: &'a dyn ImageRows,
    layout: RowLayout,
    stop: &'a dyn Stop,
    progress: Option<&'a mut ProgressFn<'a>>,
    bytes: Vec<u8>,
    floats: Vec<f32>,
    /// Rows before this index have been reported as finished.
    reported: u32,
    finished: bool,
}

impl<'a> RowProvider<'a> {
    /// Rows of `image` converted to `layout`.
    pub fn new(
        image: &'a dyn ImageRows,
        layout: RowLayout,
        stop: &'a dyn Stop,
    ) -> Result<Self, EncodeError> {
        let (width, height) = (image.width(), image.height());
        if width == 0 || height == 0 {
            return Err(EncodeError::InvalidArgument(alloc::format!(
                "image dimensions must be non-zero, got {width}x{height}"
            )));
        }
        (width as usize)
            .checked_mul(layout.channels() * 4)
            .ok_or(EncodeError::DimensionsTooLarge { width, height })?;
        Ok(Self {
            image,
            layout,
            stop,
            progress: None,
            bytes: Vec::new(),
            floats: Vec::new(),
            reported: 0,
            finished: false,
        })
    }

    /// Report progress to `progress`.
    pub fn with_progress(mut self, progress: &'a mut ProgressFn<'a>) -> Self {
        self.progress = Some(progress);
        self
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn layout(&self) -> RowLayout {
        self.layout
    }

    pub fn source_format(&self) -> PixelFormat {
        self.image.format()
    }

    /// Length in bytes of one converted row.
    pub fn row_bytes(&self, sample: RowSample) -> usize {
        self.width() as usize * RowFormat::new(self.layout, sample).bytes_per_pixel()
    }

    /// Row `y` as `u8` channels.
    pub fn byte_row(&mut self, y: u32) -> Result<&[u8], EncodeError> {
        let src = self.begin_row(y)?;
        let len = self.width() as usize * self.layout.channels();
        self.bytes.resize(len, 0);
        fill_byte_row(self.image.format(), self.layout, src, &mut self.bytes);
        Ok(&self.bytes)
    }

    /// Row `y` as `f32` channels in `[0, 1]`.
    pub fn float_row(&mut self, y: u32) -> Result<&[f32], EncodeError> {
        let src = self.begin_row(y)?;
        let len = self.width() as usize * self.layout.channels();
        self.floats.resize(len, 0.0);
        fill_float_row(self.image.format(), self.layout, src, &mut self.floats);
        Ok(&self.floats)
    }

    /// Report the remaining rows and 100%. Later calls do nothing.
    pub fn finish(&mut self) {
        if self.finished {
            return;
        }
        self.finished = true;
        let height = self.height();
        let rect = (self.reported < height).then(|| self.rows_rect(self.reported, height));
        self.reported = height;
        if let Some(progress) = self.progress.as_mut() {
            progress(100.0, rect);
        }
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    fn rows_rect(&self, from: u32, to: u32) -> Rect {
        Rect {
            x: 0,
            y: from,
            width: self.width(),
            height: to - from,
        }
    }

    /// Report rows before `y`, check for cancellation, and return the
    /// validated source row.
    fn begin_row(&mut self, y: u32) -> Result<&'a [u8], EncodeError> {
        let height = self.height();
        if y >= height || self.finished {
            return Err(EncodeError::InvalidArgument(alloc::format!(
                "row {y} requested from an image of {height} rows{}",
                if self.finished { " after finish" } else { "" }
            )));
        }
        if y > self.reported {
            let rect = self.rows_rect(self.reported, y);
            self.reported = y;
            let percent = y as f32 * 100.0 / height as f32;
            if let Some(progress) = self.progress.as_mut() {
                progress(percent, Some(rect));
            }
        }
        self.stop.check()?;

        let image: &'a dyn ImageRows = self.image;
        let format = image.format();
        let needed = self.width() as usize * format.bytes_per_pixel();
        let src = image.row(y);
        if src.len() < needed {
            return Err(EncodeError::InvalidArgument(alloc::format!(
                "row {y} of {format} image has {} bytes, need {needed}",
                src.len()
            )));
        }
        Ok(&src[..needed])
    }
}

// ── Per-row conversion ──────────────────────────────────────────────

/// Convert packed `S` pixels in `src` into `dst`. `src` may be unaligned.
fn convert_row<S: Pixel, D: Pixel>(src: &[u8], dst: &mut [D]) {
    match bytemuck::try_cast_slice::<u8, S>(src) {
        Ok(pixels) => {
            for (d, &s) in dst.iter_mut().zip(pixels) {
                *d = convert(s);
            }
        }
        Err(_) => {
            for (d, chunk) in dst.iter_mut().zip(src.chunks_exact(size_of::<S>())) {
                *d = convert(bytemuck::pod_read_unaligned::<S>(chunk));
            }
        }
    }
}

fn fill_byte_row(format: PixelFormat, layout: RowLayout, src: &[u8], dst: &mut [u8]) {
    #[cfg(feature = "simd")]
    if swizzle_row(format, layout, src, dst) {
        return;
    }
    with_pixel_type!(format, S => match layout {
        RowLayout::Gray => convert_row::<S, Gray8>(src, bytemuck::cast_slice_mut(dst)),
        RowLayout::GrayAlpha => convert_row::<S, GrayAlpha16>(src, bytemuck::cast_slice_mut(dst)),
        RowLayout::Rgb => convert_row::<S, Rgb24>(src, bytemuck::cast_slice_mut(dst)),
        RowLayout::Rgba => convert_row::<S, Rgba32>(src, bytemuck::cast_slice_mut(dst)),
    })
}

fn fill_float_row(format: PixelFormat, layout: RowLayout, src: &[u8], dst: &mut [f32]) {
    with_pixel_type!(format, S => match layout {
        RowLayout::Gray => convert_row::<S, GrayF>(src, bytemuck::cast_slice_mut(dst)),
        RowLayout::GrayAlpha => convert_row::<S, GrayAlphaF>(src, bytemuck::cast_slice_mut(dst)),
        RowLayout::Rgb => convert_row::<S, RgbF>(src, bytemuck::cast_slice_mut(dst)),
        RowLayout::Rgba => convert_row::<S, RgbaF>(src, bytemuck::cast_slice_mut(dst)),
    });
    for v in dst {
        *v = scale::clamp_unit(*v);
    }
}

/// Byte-shuffle rows through `garb`. Returns false when the pair has no
/// shuffle (or the lengths are off) and the generic path must run.
#[cfg(feature = "simd")]
pub(crate) fn swizzle_row(format: PixelFormat, layout: RowLayout, src: &[u8], dst: &mut [u8]) -> bool {
    use PixelFormat as F;
    use RowLayout as L;
    let done = match (format, layout) {
        (F::Bgra32, L::Rgba) => garb::bytes::bgra_to_rgba(src, dst),
        (F::Rgb24, L::Rgba) => garb::bytes::rgb_to_rgba(src, dst),
        (F::Bgr24, L::Rgba) => garb::bytes::bgr_to_rgba(src, dst),
        (F::Gray8, L::Rgba) => garb::bytes::gray_to_rgba(src, dst),
        (F::GrayAlpha16, L::Rgba) => garb::bytes::gray_alpha_to_rgba(src, dst),
        (F::Rgba32 | F::Rgbx32, L::Rgb) => garb::bytes::rgba_to_rgb(src, dst),
        (F::Bgra32 | F::Bgrx32, L::Rgb) => garb::bytes::bgra_to_rgb(src, dst),
        (F::Bgr24, L::Rgb) => garb::bytes::bgr_to_rgb(src, dst),
        _ => return false,
    };
    done.is_ok()
}
