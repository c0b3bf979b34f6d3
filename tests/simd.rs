//! Row fast paths against the scalar conversions, on every SIMD tier.
#![cfg(feature = "simd")]

use archmage::testing::{CompileTimePolicy, for_each_token_permutation};
use zenpack::*;

fn policy() -> CompileTimePolicy {
    if std::env::var_os("CI").is_some() {
        CompileTimePolicy::Fail
    } else {
        CompileTimePolicy::WarnStderr
    }
}

fn noise(len: usize) -> Vec<u8> {
    let mut x = 0x1234_5678u32;
    (0..len)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            x as u8
        })
        .collect()
}

/// Odd width so the vector loops leave a scalar tail.
const WIDTH: u32 = 67;

fn scalar_row<S: Pixel, D: Pixel>(src: &[u8]) -> Vec<u8> {
    let px: Vec<S> = src
        .chunks_exact(size_of::<S>())
        .map(bytemuck::pod_read_unaligned)
        .collect();
    bytemuck::cast_slice(&convert_vec::<S, D>(&px)).to_vec()
}

fn check<S: Pixel>(layout: RowLayout, tier: &str) {
    let data = noise(WIDTH as usize * size_of::<S>());
    let img = PixelSlice::packed(&data, WIDTH, 1, S::FORMAT).unwrap();
    let mut rows = RowProvider::new(&img, layout, &Unstoppable).unwrap();
    let fast = rows.byte_row(0).unwrap().to_vec();
    let expected = match layout {
        RowLayout::Rgb => scalar_row::<S, Rgb24>(&data),
        RowLayout::Rgba => scalar_row::<S, Rgba32>(&data),
        RowLayout::Gray => scalar_row::<S, Gray8>(&data),
        RowLayout::GrayAlpha => scalar_row::<S, GrayAlpha16>(&data),
    };
    assert_eq!(fast, expected, "{} -> {layout:?} tier={tier}", S::FORMAT);
}

#[test]
fn swizzled_rows_match_scalar_conversion() {
    let report = for_each_token_permutation(policy(), |perm| {
        let tier = perm.to_string();
        check::<Bgra32>(RowLayout::Rgba, &tier);
        check::<Rgb24>(RowLayout::Rgba, &tier);
        check::<Bgr24>(RowLayout::Rgba, &tier);
        check::<Gray8>(RowLayout::Rgba, &tier);
        check::<GrayAlpha16>(RowLayout::Rgba, &tier);
        check::<Rgba32>(RowLayout::Rgb, &tier);
        check::<Rgbx32>(RowLayout::Rgb, &tier);
        check::<Bgra32>(RowLayout::Rgb, &tier);
        check::<Bgrx32>(RowLayout::Rgb, &tier);
        check::<Bgr24>(RowLayout::Rgb, &tier);
    });
    std::eprintln!("swizzle permutations: {report}");
}
