//! `From` conversions with the `rgb` crate's pixel structs.
//!
//! Only layouts with identical channel order and storage convert; anything
//! else goes through [`Pixel`](super::Pixel).

use rgb::alt::{BGR, BGRA};
use rgb::{Rgb, Rgba};

use super::{Bgr24, Bgr48, Bgra32, Bgra64, Rgb24, Rgb48, RgbF, Rgba32, Rgba64, RgbaF};

macro_rules! rgb_interop {
    ($($ours:ident <=> $theirs:ident<$t:ty> { $($f:ident),+ }),+ $(,)?) => {$(
        impl From<$theirs<$t>> for $ours {
            #[inline]
            fn from(p: $theirs<$t>) -> Self {
                Self { $($f: p.$f,)+ }
            }
        }

        impl From<$ours> for $theirs<$t> {
            #[inline]
            fn from(p: $ours) -> Self {
                Self { $($f: p.$f,)+ }
            }
        }
    )+};
}

rgb_interop!(
    Rgb24 <=> Rgb<u8> { r, g, b },
    Rgb48 <=> Rgb<u16> { r, g, b },
    RgbF <=> Rgb<f32> { r, g, b },
    Rgba32 <=> Rgba<u8> { r, g, b, a },
    Rgba64 <=> Rgba<u16> { r, g, b, a },
    RgbaF <=> Rgba<f32> { r, g, b, a },
    Bgr24 <=> BGR<u8> { b, g, r },
    Bgr48 <=> BGR<u16> { b, g, r },
    Bgra32 <=> BGRA<u8> { b, g, r, a },
    Bgra64 <=> BGRA<u16> { b, g, r, a },
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_map_by_name() {
        let ours = Bgra32::from(BGRA { b: 1, g: 2, r: 3, a: 4 });
        assert_eq!(ours, Bgra32::new(3, 2, 1, 4));
        let theirs: Rgba<u8> = Rgba32::new(5, 6, 7, 8).into();
        assert_eq!(theirs, Rgba { r: 5, g: 6, b: 7, a: 8 });
    }

    #[test]
    fn sixteen_bit_round_trip() {
        let ours = Bgr48::new(1, 2, 3);
        let theirs: BGR<u16> = ours.into();
        assert_eq!((theirs.b, theirs.g, theirs.r), (3, 2, 1));
        assert_eq!(Bgr48::from(theirs), ours);
    }
}
