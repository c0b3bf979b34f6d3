#![no_main]
use libfuzzer_sys::fuzz_target;
use zenpack::codec::PnmFormat;
use zenpack::*;

const CODECS: [Codec; 8] = [
    Codec::Pnm(PnmFormat::Pgm),
    Codec::Pnm(PnmFormat::Ppm),
    Codec::Pnm(PnmFormat::Pam),
    Codec::Pnm(PnmFormat::Pfm),
    Codec::Bmp,
    Codec::Farbfeld,
    Codec::Hdr,
    Codec::Qoi,
];

fuzz_target!(|data: &[u8]| {
    let [fmt, codec, w, rest @ ..] = data else {
        return;
    };
    let format = PixelFormat::ALL[*fmt as usize % PixelFormat::ALL.len()];
    let codec = CODECS[*codec as usize % CODECS.len()];
    let width = u32::from(*w % 16) + 1;
    let row = width as usize * format.bytes_per_pixel();
    let height = (rest.len() / row).min(64) as u32;
    if height == 0 {
        return;
    }
    let Ok(img) = PixelSlice::packed(rest, width, height, format) else {
        return;
    };
    let limits = Limits {
        max_memory_bytes: Some(1 << 20),
        ..Limits::default()
    };
    // Any pixel bytes must encode; only the pipeline's own checks may refuse.
    let out = EncoderConfig::new(codec)
        .with_limits(limits)
        .with_scratch_len(97)
        .encode_to_vec(&img, &enough::Unstoppable);
    assert!(out.is_ok(), "{format} via {codec:?}: {out:?}");
});
