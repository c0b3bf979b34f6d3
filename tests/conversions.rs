use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use zenpack::scale;
use zenpack::*;

/// Deterministic xorshift bytes.
fn noise(len: usize, seed: u32) -> Vec<u8> {
    let mut x = seed.wrapping_mul(0x9E37_79B9) | 1;
    (0..len)
        .map(|_| {
            x ^= x << 13;
            x ^= x >> 17;
            x ^= x << 5;
            (x >> 16) as u8
        })
        .collect()
}

fn samples<P: Pixel>(count: usize) -> Vec<P> {
    let bytes = noise(count * size_of::<P>(), P::FORMAT as u32 + 1);
    bytes
        .chunks_exact(size_of::<P>())
        .map(bytemuck::pod_read_unaligned)
        .collect()
}

macro_rules! for_types {
    ($f:ident: $($t:ty),+ $(,)?) => {$( $f::<$t>(); )+};
}

macro_rules! for_all_types {
    ($f:ident) => {
        for_types!($f:
            Alpha8, Alpha16, Alpha32, AlphaF,
            Gray8, Gray16, Gray32, GrayF, GrayHalf,
            GrayAlpha16, GrayAlpha32, GrayAlphaF,
            Rgb24, Bgr24, Rgb48, Bgr48, Rgb96, RgbF, Rgbx32, Bgrx32,
            Rg16, Rg32, RgHalf,
            Rgba32, Bgra32, Argb32, Abgr32, Rgba64, Bgra64, Rgba128, RgbaF, RgbaHalf,
            Bgr565, Bgra4444, Bgra5551, Rgba1010102,
            Snorm8x2, Snorm8x4, Snorm16x2, Snorm16x4, Short2, Short4,
        )
    };
}

fn exact_round_trip<P: Pixel>() {
    for v in samples::<P>(512) {
        assert_eq!(P::from_scaled(v.to_scaled()), v, "{}", P::FORMAT);
    }
}

#[test]
fn unsigned_integer_types_round_trip_exactly() {
    // The scaled vector is f32, so the 32-bit types are checked against
    // their integer hubs below instead.
    for_types!(exact_round_trip:
        Alpha8, Alpha16, Gray8, Gray16, GrayAlpha16, GrayAlpha32,
        Rgb24, Bgr24, Rgb48, Bgr48, Rgbx32, Bgrx32, Rg16, Rg32,
        Rgba32, Bgra32, Argb32, Abgr32, Rgba64, Bgra64,
        Bgr565, Bgra4444, Bgra5551, Rgba1010102, Short2, Short4,
    );
}

#[test]
fn widening_into_32_bits_is_exact() {
    for v in 0..=u16::MAX {
        let wide: Gray32 = convert(Gray16::new(v));
        assert_eq!(wide, Gray32::new(scale::u16_to_u32(v)), "v={v}");
        assert_eq!(convert::<Gray32, Gray16>(wide), Gray16::new(v));
        let a: Alpha32 = convert(Alpha16::new(v));
        assert_eq!(a.a, scale::u16_to_u32(v));
    }
    for v in 0..=u8::MAX {
        let src = Rgba32::new(v, 255 - v, v / 2, v ^ 0x5A);
        let wide: Rgba128 = convert(src);
        let expected = Rgba128::new(
            scale::u8_to_u32(src.r),
            scale::u8_to_u32(src.g),
            scale::u8_to_u32(src.b),
            scale::u8_to_u32(src.a),
        );
        assert_eq!(wide, expected, "v={v}");
        assert_eq!(convert::<Rgba128, Rgba32>(wide), src);
        let rgb: Rgb96 = convert(Bgr24::new(v, 1, 2));
        assert_eq!((rgb.r, rgb.b), (scale::u8_to_u32(v), scale::u8_to_u32(2)));
    }
}

#[test]
fn narrowing_from_32_bits_rounds_at_the_integer_midpoint() {
    for k in 0..255u32 {
        // Largest value that still rounds down to k.
        let below = k * 16_843_009 + 8_421_504;
        let above = below + 1;
        for (v, want) in [(below, k as u8), (above, k as u8 + 1)] {
            assert_eq!(scale::u32_to_u8(v), want, "v={v}");
            assert_eq!(convert::<Gray32, Gray8>(Gray32::new(v)), Gray8::new(want), "v={v}");
            assert_eq!(Gray32::new(v).to_gray8(), Gray8::new(want));
            let rgb: Rgb24 = convert(Rgb96::new(v, 0, v));
            assert_eq!(rgb, Rgb24::new(want, 0, want), "v={v}");
            let rgba: Rgba32 = convert(Rgb96::new(v, v, 0));
            assert_eq!(rgba, Rgba32::new(want, want, 0, 255), "v={v}");
            assert_eq!(convert::<Alpha32, Alpha8>(Alpha32::new(v)), Alpha8::new(want));
        }
    }
    for k in 0..u16::MAX as u32 {
        let below = k * 65_537 + 32_768;
        let above = below + 1;
        for (v, want) in [(below, k as u16), (above, k as u16 + 1)] {
            assert_eq!(scale::u32_to_u16(v), want, "v={v}");
            assert_eq!(convert::<Gray32, Gray16>(Gray32::new(v)), Gray16::new(want), "v={v}");
            let rgb: Rgb48 = convert(Rgb96::new(0, v, 0));
            assert_eq!(rgb.g, want, "v={v}");
            let rgba: Rgba64 = convert(Rgba128::new(v, 0, 0, v));
            assert_eq!((rgba.r, rgba.a), (want, want), "v={v}");
        }
    }
}

fn settles_after_one_pass<P: Pixel>() {
    for v in samples::<P>(256) {
        let once = P::from_scaled(v.to_scaled());
        let twice = P::from_scaled(once.to_scaled());
        assert_eq!(once, twice, "{}", P::FORMAT);
    }
}

#[test]
fn every_type_is_stable_under_rescaling() {
    for_all_types!(settles_after_one_pass);
}

fn scaled_components_are_in_unit_range<P: Pixel>() {
    for v in samples::<P>(256) {
        let s = v.to_scaled();
        for c in s.to_array() {
            assert!((0.0..=1.0).contains(&c), "{}: {s:?}", P::FORMAT);
        }
    }
}

#[test]
fn scaled_vectors_stay_in_range_for_any_bits() {
    for_all_types!(scaled_components_are_in_unit_range);
}

fn ends_are_preserved<P: Pixel>() {
    let white = P::from_scaled(ScaledVector::WHITE).to_scaled();
    let black = P::from_scaled(ScaledVector::TRANSPARENT).to_scaled();
    for c in P::descriptor().components {
        let (w, b) = match c.role {
            ChannelRole::Red | ChannelRole::Luminance => (white.r, black.r),
            ChannelRole::Green => (white.g, black.g),
            ChannelRole::Blue => (white.b, black.b),
            ChannelRole::Alpha => (white.a, black.a),
            _ => continue,
        };
        assert_eq!(w, 1.0, "{} {:?}", P::FORMAT, c.role);
        assert_eq!(b, 0.0, "{} {:?}", P::FORMAT, c.role);
    }
}

#[test]
fn zero_and_max_survive_every_type() {
    for_all_types!(ends_are_preserved);
}

#[test]
fn boundaries_survive_every_depth_pair() {
    assert_eq!(scale::u16_to_u8(scale::u8_to_u16(0)), 0);
    assert_eq!(scale::u16_to_u8(scale::u8_to_u16(255)), 255);
    assert_eq!(scale::u16_to_u8(65535), 255);
    assert_eq!(scale::u32_to_u16(u32::MAX), u16::MAX);
    assert_eq!(scale::u32_to_u8(scale::u8_to_u32(255)), 255);
    assert_eq!(scale::f32_to_u8(scale::u16_to_f32(65535)), 255);
    for bits in 1..=16 {
        let max = scale::max_value(bits);
        assert_eq!(scale::rescale(max, bits, 8), 255, "{bits} bits");
        assert_eq!(scale::rescale(0, bits, 8), 0);
        assert_eq!(scale::rescale(255, 8, bits), max);
    }
}

fn opaque_reports_full_alpha<P: Pixel>() {
    if P::descriptor().has_alpha() || P::FAMILY == Family::Alpha {
        return;
    }
    for v in samples::<P>(64) {
        assert_eq!(v.to_alpha_f(), AlphaF::new(1.0), "{}", P::FORMAT);
        assert_eq!(v.to_alpha8(), Alpha8::new(255), "{}", P::FORMAT);
        assert_eq!(v.to_rgba64().a, 65535, "{}", P::FORMAT);
    }
    let a = P::from_scaled(ScaledVector::new(0.2, 0.4, 0.6, 0.0));
    let b = P::from_scaled(ScaledVector::new(0.2, 0.4, 0.6, 1.0));
    assert_eq!(a, b, "{}", P::FORMAT);
}

#[test]
fn opaque_types_ignore_and_report_alpha() {
    for_all_types!(opaque_reports_full_alpha);
}

fn alpha_only_is_white<P: Pixel>() {
    let d = P::descriptor();
    // Two-channel color types have no blue to whiten.
    if P::FAMILY == Family::Alpha
        || (d.component(ChannelRole::Blue).is_none()
            && d.component(ChannelRole::Luminance).is_none())
    {
        return;
    }
    let p: P = convert(Alpha8::new(77));
    assert_eq!(p.to_gray8(), Gray8::new(255), "{}", P::FORMAT);
}

#[test]
fn alpha_converts_to_white() {
    for_all_types!(alpha_only_is_white);
    let c: Rgba32 = convert(Alpha16::new(0x8080));
    assert_eq!(c, Rgba32::new(255, 255, 255, 128));
}

fn hash_of<T: Hash>(v: &T) -> u64 {
    let mut h = DefaultHasher::new();
    v.hash(&mut h);
    h.finish()
}

#[test]
fn padding_is_excluded_from_equality_and_hash() {
    let a: Rgbx32 = bytemuck::cast([1u8, 2, 3, 0]);
    let b: Rgbx32 = bytemuck::cast([1u8, 2, 3, 0xAB]);
    assert_eq!(a, b);
    assert_eq!(hash_of(&a), hash_of(&b));
    let c: Bgrx32 = bytemuck::cast([9u8, 8, 7, 1]);
    let d: Bgrx32 = bytemuck::cast([9u8, 8, 7, 2]);
    assert_eq!(c, d);
    assert_eq!(hash_of(&c), hash_of(&d));
    let e: Bgrx32 = bytemuck::cast([9u8, 8, 6, 1]);
    assert_ne!(c, e);
}

#[test]
fn luminance_is_bt709_and_ignores_alpha() {
    for (i, px) in samples::<Rgba32>(256).into_iter().enumerate() {
        let expected = scale::f32_to_u8(luminance(
            scale::u8_to_f32(px.r),
            scale::u8_to_f32(px.g),
            scale::u8_to_f32(px.b),
        ));
        let g: Gray8 = convert(px);
        assert_eq!(g, Gray8::new(expected), "sample {i}");
        let other_alpha = Rgba32::new(px.r, px.g, px.b, px.a.wrapping_add(99));
        assert_eq!(convert::<Rgba32, Gray8>(other_alpha), g);
    }
    let y: GrayF = convert(RgbF::new(1.0, 0.0, 0.0));
    assert!((y.l - BT709[0]).abs() < 1e-6);
}

#[test]
fn gray_replicates_into_color() {
    let c: Bgra64 = convert(Gray8::new(0x40));
    assert_eq!(c, Bgra64::new(0x4040, 0x4040, 0x4040, 0xFFFF));
    let c: Rgb24 = convert(GrayAlpha32::new(0xFFFF, 0));
    assert_eq!(c, Rgb24::new(255, 255, 255));
}

#[test]
fn slices_convert_with_length_checks() {
    let src = [Bgra32::new(1, 2, 3, 4), Bgra32::new(5, 6, 7, 8)];
    let out: Vec<Argb32> = convert_vec(&src);
    assert_eq!(out[1], Argb32::new(5, 6, 7, 8));
    let mut short = [Rgba32::default(); 1];
    assert_eq!(
        convert_slice(&src, &mut short),
        Err(SizeError {
            expected: 2,
            actual: 1
        })
    );
}

#[test]
fn every_format_names_its_type() {
    fn check<P: Pixel>() {
        assert_eq!(P::FORMAT.bytes_per_pixel(), size_of::<P>());
        assert_eq!(P::FORMAT.family(), P::FAMILY);
        assert_eq!(P::descriptor().total_bits() as usize, size_of::<P>() * 8);
    }
    for_all_types!(check);
    assert_eq!(PixelFormat::ALL.len(), 42);
}
