//! Encode sources: anything that can hand out rows of one pixel format.

use crate::error::EncodeError;
use crate::format::PixelFormat;
use crate::pixel::Pixel;

/// A source image read one row at a time.
///
/// `row(y)` returns the bytes of row `y` (`y < height`) in the layout of
/// [`format`](ImageRows::format): at least `width * bytes_per_pixel` bytes,
/// native byte order for multi-byte channels. Anything shorter is rejected
/// by the row provider.
pub trait ImageRows {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn format(&self) -> PixelFormat;
    fn row(&self, y: u32) -> &[u8];
}

/// Borrowed, type-erased pixel buffer with an explicit stride.
#[derive(Clone, Copy, Debug)]
pub struct PixelSlice<'a> {
    data: &'a [u8],
    width: u32,
    height: u32,
    stride: usize,
    format: PixelFormat,
}

impl<'a> PixelSlice<'a> {
    /// Wrap `data` holding `height` rows spaced `stride` bytes apart.
    ///
    /// The last row only needs `width * bytes_per_pixel` bytes.
    pub fn new(
        data: &'a [u8],
        width: u32,
        height: u32,
        stride: usize,
        format: PixelFormat,
    ) -> Result<Self, EncodeError> {
        if width == 0 || height == 0 {
            return Err(EncodeError::InvalidArgument(alloc::format!(
                "image dimensions must be non-zero, got {width}x{height}"
            )));
        }
        let row_bytes = (width as usize)
            .checked_mul(format.bytes_per_pixel())
            .ok_or(EncodeError::DimensionsTooLarge { width, height })?;
        if stride < row_bytes {
            return Err(EncodeError::InvalidArgument(alloc::format!(
                "stride {stride} is smaller than a {format} row of {row_bytes} bytes"
            )));
        }
        let needed = stride
            .checked_mul(height as usize - 1)
            .and_then(|n| n.checked_add(row_bytes))
            .ok_or(EncodeError::DimensionsTooLarge { width, height })?;
        if data.len() < needed {
            return Err(EncodeError::BufferTooSmall {
                needed,
                actual: data.len(),
            });
        }
        Ok(Self {
            data,
            width,
            height,
            stride,
            format,
        })
    }

    /// Wrap tightly packed rows.
    pub fn packed(
        data: &'a [u8],
        width: u32,
        height: u32,
        format: PixelFormat,
    ) -> Result<Self, EncodeError> {
        let stride = (width as usize)
            .checked_mul(format.bytes_per_pixel())
            .ok_or(EncodeError::DimensionsTooLarge { width, height })?;
        Self::new(data, width, height, stride, format)
    }

    /// View a typed pixel slice of `width * height` pixels.
    pub fn from_pixels<P: Pixel>(
        pixels: &'a [P],
        width: u32,
        height: u32,
    ) -> Result<Self, EncodeError> {
        Self::packed(bytemuck::cast_slice(pixels), width, height, P::FORMAT)
    }

    /// Bytes between the starts of consecutive rows.
    pub fn stride(&self) -> usize {
        self.stride
    }
}

impl ImageRows for PixelSlice<'_> {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn format(&self) -> PixelFormat {
        self.format
    }

    fn row(&self, y: u32) -> &[u8] {
        let start = y as usize * self.stride;
        let len = self.width as usize * self.format.bytes_per_pixel();
        self.data.get(start..start + len).unwrap_or(&[])
    }
}

impl<T: ImageRows + ?Sized> ImageRows for &T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn format(&self) -> PixelFormat {
        (**self).format()
    }

    fn row(&self, y: u32) -> &[u8] {
        (**self).row(y)
    }
}

/// Sizes past `u32::MAX` clamp to it instead of wrapping. Rows of such an
/// image come back empty, which the row provider rejects.
#[cfg(feature = "imgref")]
fn saturating_dimension(v: usize) -> u32 {
    u32::try_from(v).unwrap_or(u32::MAX)
}

#[cfg(feature = "imgref")]
macro_rules! imgref_rows {
    ($($img:ty),+) => {$(
        impl<P: Pixel> ImageRows for $img {
            fn width(&self) -> u32 {
                saturating_dimension(imgref::Img::width(self))
            }

            fn height(&self) -> u32 {
                saturating_dimension(imgref::Img::height(self))
            }

            fn format(&self) -> PixelFormat {
                P::FORMAT
            }

            fn row(&self, y: u32) -> &[u8] {
                if u32::try_from(imgref::Img::width(self)).is_err() {
                    return &[];
                }
                let start = y as usize * self.stride();
                self.buf()
                    .get(start..start + imgref::Img::width(self))
                    .map(bytemuck::cast_slice)
                    .unwrap_or(&[])
            }
        }
    )+};
}

#[cfg(feature = "imgref")]
imgref_rows!(imgref::ImgRef<'_, P>, imgref::ImgVec<P>);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pixel::{Rgb24, Rgba32};

    #[test]
    fn rejects_empty_images() {
        let err = PixelSlice::packed(&[], 0, 1, PixelFormat::Gray8).unwrap_err();
        assert!(matches!(err, EncodeError::InvalidArgument(_)));
    }

    #[test]
    fn rejects_short_stride_and_data() {
        let data = [0u8; 32];
        let err = PixelSlice::new(&data, 4, 2, 8, PixelFormat::Rgb24).unwrap_err();
        assert!(matches!(err, EncodeError::InvalidArgument(_)));
        let err = PixelSlice::new(&data, 4, 3, 12, PixelFormat::Rgb24).unwrap_err();
        assert!(matches!(err, EncodeError::BufferTooSmall { needed: 36, actual: 32 }));
    }

    #[test]
    fn last_row_needs_no_stride_padding() {
        let data = [0u8; 16 + 12];
        let img = PixelSlice::new(&data, 4, 2, 16, PixelFormat::Rgb24).unwrap();
        assert_eq!(img.row(1).len(), 12);
        assert_eq!(img.row(2), &[] as &[u8]);
    }

    #[test]
    fn typed_view_keeps_format() {
        let px = [Rgba32::new(1, 2, 3, 4), Rgba32::new(5, 6, 7, 8)];
        let img = PixelSlice::from_pixels(&px, 1, 2).unwrap();
        assert_eq!(img.format(), PixelFormat::Rgba32);
        assert_eq!(img.row(1), &[5, 6, 7, 8]);
        assert_eq!(img.stride(), 4);
    }

    #[cfg(feature = "imgref")]
    #[test]
    fn imgref_rows_respect_stride() {
        let px = vec![
            Rgb24::new(1, 1, 1),
            Rgb24::new(2, 2, 2),
            Rgb24::new(9, 9, 9),
            Rgb24::new(3, 3, 3),
            Rgb24::new(4, 4, 4),
            Rgb24::new(9, 9, 9),
        ];
        let img = imgref::ImgVec::new_stride(px, 2, 2, 3);
        assert_eq!(ImageRows::width(&img), 2);
        assert_eq!(img.format(), PixelFormat::Rgb24);
        assert_eq!(ImageRows::row(&img, 1), &[3, 3, 3, 4, 4, 4]);
        let r = img.as_ref();
        assert_eq!(ImageRows::row(&r, 0), &[1, 1, 1, 2, 2, 2]);
    }

    #[cfg(all(feature = "imgref", target_pointer_width = "64"))]
    #[test]
    fn oversized_imgref_dimensions_saturate() {
        assert_eq!(saturating_dimension(7), 7);
        assert_eq!(saturating_dimension(u32::MAX as usize), u32::MAX);
        assert_eq!(saturating_dimension(u32::MAX as usize + 3), u32::MAX);
    }

    #[test]
    fn rgb_rows_are_tight() {
        let px = [Rgb24::new(1, 2, 3); 3];
        let img = PixelSlice::from_pixels(&px, 3, 1).unwrap();
        assert_eq!(img.row(0).len(), 9);
    }
}
