#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpack::*;

fn settle<P: Pixel>(data: &[u8]) {
    for chunk in data.chunks_exact(size_of::<P>()) {
        let v: P = bytemuck::pod_read_unaligned(chunk);
        let s = v.to_scaled();
        assert!(s.to_array().iter().all(|c| (0.0..=1.0).contains(c)));
        // One rescale reaches a fixed point
        let once = P::from_scaled(s);
        assert_eq!(P::from_scaled(once.to_scaled()), once);
    }
}

fuzz_target!(|data: &[u8]| {
    let Some((&tag, rest)) = data.split_first() else {
        return;
    };
    let format = PixelFormat::ALL[tag as usize % PixelFormat::ALL.len()];
    macro_rules! dispatch {
        ($($t:ident),+) => {
            match format {
                $(PixelFormat::$t => settle::<$t>(rest),)+
                _ => {}
            }
        };
    }
    dispatch!(
        Alpha8, Alpha16, Alpha32, AlphaF, Gray8, Gray16, Gray32, GrayF, GrayHalf,
        GrayAlpha16, GrayAlpha32, GrayAlphaF, Rgb24, Bgr24, Rgb48, Bgr48, Rgb96, RgbF,
        Rgbx32, Bgrx32, Rg16, Rg32, RgHalf, Rgba32, Bgra32, Argb32, Abgr32, Rgba64,
        Bgra64, Rgba128, RgbaF, RgbaHalf, Bgr565, Bgra4444, Bgra5551, Rgba1010102,
        Snorm8x2, Snorm8x4, Snorm16x2, Snorm16x4, Short2, Short4
    );
});
