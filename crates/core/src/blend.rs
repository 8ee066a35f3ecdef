//! Alpha compositing and channel averaging.
//!
//! Integer math on 8-bit channels, no gamma. The `blend_argb` formula is kept
//! bit-exact so frames match previously recorded output.

use crate::types::{alpha, blue, green, red, Argb};

/// Composite `top` over `bottom` ("over" operator).
///
/// ```text
/// c = top_c * ta / 255 + bottom_c * ba * (255 - ta) / (255 * 255)
/// a = ta + ba * (255 - ta) / 255
/// ```
///
/// # Examples
///
/// ```
/// use term_raster_core::blend_argb;
///
/// // Opaque top wins.
/// assert_eq!(blend_argb(0xff10_2030, 0xffff_ffff), 0xff10_2030);
/// // Transparent top leaves an opaque bottom alone.
/// assert_eq!(blend_argb(0x0010_2030, 0xff40_5060), 0xff40_5060);
/// ```
#[inline]
pub fn blend_argb(top: Argb, bottom: Argb) -> Argb {
    let ta = alpha(top) as u32;
    let ba = alpha(bottom) as u32;
    let inv = 255 - ta;

    let mix = |t: u8, b: u8| -> u32 { t as u32 * ta / 255 + b as u32 * ba * inv / (255 * 255) };

    let a = ta + ba * inv / 255;
    let r = mix(red(top), red(bottom));
    let g = mix(green(top), green(bottom));
    let b = mix(blue(top), blue(bottom));

    (a.min(255) << 24) | (r.min(255) << 16) | (g.min(255) << 8) | b.min(255)
}

/// Average `N` pixels channel by channel (sum, then integer divide).
///
/// ```
/// use term_raster_core::aver_argb;
///
/// assert_eq!(aver_argb([0xff00_0000, 0xff00_00ff]), 0xff00_007f);
/// ```
#[inline]
pub fn aver_argb<const N: usize>(taps: [Argb; N]) -> Argb {
    if N == 0 {
        return 0;
    }
    let mut sum = [0u32; 4];
    for px in taps {
        sum[0] += alpha(px) as u32;
        sum[1] += red(px) as u32;
        sum[2] += green(px) as u32;
        sum[3] += blue(px) as u32;
    }
    let n = N as u32;
    (sum[0] / n) << 24 | (sum[1] / n) << 16 | (sum[2] / n) << 8 | (sum[3] / n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::argb;

    #[test]
    fn opaque_top_replaces_bottom() {
        for bottom in [0, 0x8012_3456, 0xffff_ffff] {
            assert_eq!(blend_argb(0xffab_cdef, bottom), 0xffab_cdef);
        }
    }

    #[test]
    fn transparent_top_keeps_bottom_alpha() {
        for ba in [0u8, 1, 0x7f, 0xfe, 0xff] {
            let out = blend_argb(argb(0, 0xff, 0xff, 0xff), argb(ba, 10, 20, 30));
            assert_eq!(alpha(out), ba);
        }
    }

    #[test]
    fn half_alpha_matches_reference_values() {
        // 0x80 * 255 / 255 = 128, 255 * 255 * 127 / 65025 = 127
        let out = blend_argb(argb(0x80, 0xff, 0, 0), argb(0xff, 0, 0, 0xff));
        assert_eq!(out, argb(0xff, 0x80, 0, 0x7f));
    }

    #[test]
    fn average_of_four_taps_truncates() {
        let out = aver_argb([
            argb(0xff, 1, 0, 0),
            argb(0xff, 2, 0, 0),
            argb(0xff, 2, 0, 0),
            argb(0xff, 2, 0, 3),
        ]);
        assert_eq!(out, argb(0xff, 1, 0, 0));
    }

    #[test]
    fn average_of_zero_taps_is_transparent() {
        assert_eq!(aver_argb::<0>([]), 0);
    }
}
