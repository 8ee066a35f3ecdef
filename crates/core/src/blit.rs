//! Bitmap-to-bitmap operations: copies, alpha blits, affine blits, cut-outs.
//!
//! Sources are read through [`pixel`] / [`pixel_or`], destinations written
//! through [`pixel_mut`], so neither side needs clipping.

use crate::bitmap::{
    pixel, pixel_mut, pixel_or, set_pixel, visible_steps, Bitmap, Raster, RasterMut,
};
use crate::blend::{aver_argb, blend_argb};
use crate::rotor::Rotor;
use crate::types::Argb;

/// Copy `src` into `dst` pixel by pixel, optionally mirrored.
///
/// A mirrored axis maps coordinate `c` to `extent - c`: source index 0 lands
/// on `extent` (out of range, dropped) and destination index 0 on that axis is
/// left untouched.
pub fn copy_flipped<D, S>(dst: &mut D, src: &S, x_flip: bool, y_flip: bool)
where
    D: RasterMut + ?Sized,
    S: Raster + ?Sized,
{
    let w = src.width() as i64;
    let h = src.height() as i64;
    for y in 0..h {
        let dy = if y_flip { h - y } else { y };
        for x in 0..w {
            let dx = if x_flip { w - x } else { x };
            set_pixel(dst, dx, dy, pixel(src, x, y));
        }
    }
}

/// Plain copy of `src` into the top-left of `dst`.
pub fn copy<D, S>(dst: &mut D, src: &S)
where
    D: RasterMut + ?Sized,
    S: Raster + ?Sized,
{
    copy_flipped(dst, src, false, false);
}

/// Blend a `w x h` window of `src` (from its origin) over `dst` at `(ox, oy)`.
pub fn blit<D, S>(dst: &mut D, src: &S, ox: i64, oy: i64, w: usize, h: usize)
where
    D: RasterMut + ?Sized,
    S: Raster + ?Sized,
{
    let (ox, oy) = (ox as i128, oy as i128);
    let xs = visible_steps(ox, w as i128, dst.width());
    for y in visible_steps(oy, h as i128, dst.height()) {
        for x in xs.clone() {
            if let Some(bottom) = pixel_mut(dst, (x + ox) as i64, (y + oy) as i64) {
                *bottom = blend_argb(pixel(src, x as i64, y as i64), *bottom);
            }
        }
    }
}

/// Blend all of `src` over `dst` at `(ox, oy)`.
pub fn blit_all<D, S>(dst: &mut D, src: &S, ox: i64, oy: i64)
where
    D: RasterMut + ?Sized,
    S: Raster + ?Sized,
{
    blit(dst, src, ox, oy, src.width(), src.height());
}

/// Blend `src`, rotated by `rotor` and scaled by `scaler` about its own
/// center, over `dst` with that center placed at `(cx, cy)`.
///
/// Walks the destination-space bounding box of the transformed source,
/// clipped to `dst`, and maps each pixel back through the inverse transform.
/// Each destination pixel takes the plain average of the four source pixels
/// at the truncated sample point and its right, down, and diagonal
/// neighbours; taps outside the source read as transparent.
///
/// A zero or non-finite rotor, or a scaler that is not a positive finite
/// number, paints nothing.
pub fn blit_transformed<D, S>(dst: &mut D, src: &S, rotor: Rotor, scaler: f64, cx: i64, cy: i64)
where
    D: RasterMut + ?Sized,
    S: Raster + ?Sized,
{
    if !(scaler.is_finite() && scaler > 0.0) {
        return;
    }
    let Some(inv_rotor) = rotor.inverse() else {
        return;
    };

    let sw = src.width();
    let sh = src.height();
    let hw = sw as f64 / 2.0 * scaler;
    let hh = sh as f64 / 2.0 * scaler;

    let corners = [
        rotor.apply(-hw, -hh),
        rotor.apply(hw, -hh),
        rotor.apply(-hw, hh),
        rotor.apply(hw, hh),
    ];
    let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
    let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
    for (x, y) in corners {
        min_x = min_x.min(x);
        max_x = max_x.max(x);
        min_y = min_y.min(y);
        max_y = max_y.max(y);
    }
    if !(min_x < max_x && min_y < max_y) {
        return;
    }

    // Integer halves: the sample grid is anchored on whole source pixels.
    let half_w = (sw / 2) as f64;
    let half_h = (sh / 2) as f64;
    const GARBAGE: Argb = 0;

    // Only the part of the box that lands on `dst`.
    let (cx, cy) = (cx as i128, cy as i128);
    let x_start = (min_x as i64 as i128).max(-cx);
    let x_end = dst.width() as i128 - cx;
    let y_end = dst.height() as i128 - cy;

    let mut y = (min_y as i64 as i128).max(-cy);
    while y < y_end && (y as f64) < max_y {
        let mut x = x_start;
        while x < x_end && (x as f64) < max_x {
            let (rx, ry) = inv_rotor.apply(x as f64, y as f64);
            let sx = rx / scaler + half_w;
            let sy = ry / scaler + half_h;

            let (x0, y0) = (sx as i64, sy as i64);
            let (x1, y1) = ((sx + 1.0) as i64, (sy + 1.0) as i64);

            let sample = aver_argb([
                pixel_or(src, x0, y0, GARBAGE),
                pixel_or(src, x1, y0, GARBAGE),
                pixel_or(src, x0, y1, GARBAGE),
                pixel_or(src, x1, y1, GARBAGE),
            ]);

            if let Some(bottom) = pixel_mut(dst, (x + cx) as i64, (y + cy) as i64) {
                *bottom = blend_argb(sample, *bottom);
            }
            x += 1;
        }
        y += 1;
    }
}

/// Rotate `src` about its center onto the center of `dst`.
pub fn rotate<D, S>(dst: &mut D, src: &S, rotor: Rotor)
where
    D: RasterMut + ?Sized,
    S: Raster + ?Sized,
{
    let cx = (dst.width() / 2) as i64;
    let cy = (dst.height() / 2) as i64;
    blit_transformed(dst, src, rotor, 1.0, cx, cy);
}

/// Copy the `w x h` region of `src` at `(x, y)` into a new bitmap.
///
/// Parts of the region outside `src` come out transparent black.
pub fn cut_out<S: Raster + ?Sized>(src: &S, x: i64, y: i64, w: usize, h: usize) -> Bitmap {
    let mut out = Bitmap::new(w, h);
    if out.is_empty() {
        return out;
    }
    for j in 0..h as i64 {
        for i in 0..w as i64 {
            set_pixel(&mut out, i, j, pixel(src, x.saturating_add(i), y.saturating_add(j)));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::argb;

    fn numbered(w: usize, h: usize) -> Bitmap {
        let px = (0..(w * h) as u32).map(|i| 0xff00_0000 | (i + 1)).collect();
        Bitmap::from_pixels(w, h, px).unwrap()
    }

    #[test]
    fn copy_is_identity_on_same_size() {
        let src = numbered(3, 3);
        let mut dst = Bitmap::new(3, 3);
        copy(&mut dst, &src);
        assert_eq!(dst, src);
    }

    #[test]
    fn x_flip_shifts_by_one_and_drops_first_column() {
        let src = numbered(3, 1);
        let mut dst = Bitmap::filled(3, 1, 0xaaaa_aaaa);
        copy_flipped(&mut dst, &src, true, false);
        // src[0] -> 3 (dropped), src[1] -> 2, src[2] -> 1
        assert_eq!(dst.pixels(), &[0xaaaa_aaaa, pixel(&src, 2, 0), pixel(&src, 1, 0)]);
    }

    #[test]
    fn blit_offsets_and_clips() {
        let src = Bitmap::filled(2, 2, argb(0xff, 1, 2, 3));
        let mut dst = Bitmap::filled(3, 3, argb(0xff, 0, 0, 0));
        blit_all(&mut dst, &src, 2, 2);
        assert_eq!(pixel(&dst, 2, 2), argb(0xff, 1, 2, 3));
        assert_eq!(pixel(&dst, 1, 1), argb(0xff, 0, 0, 0));
    }

    #[test]
    fn transformed_with_bad_scaler_paints_nothing() {
        let src = Bitmap::filled(4, 4, 0xffff_ffff);
        let mut dst = Bitmap::new(8, 8);
        for s in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            blit_transformed(&mut dst, &src, Rotor::IDENTITY, s, 4, 4);
        }
        blit_transformed(&mut dst, &src, Rotor::new(0.0, 0.0), 1.0, 4, 4);
        assert!(dst.pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn transformed_empty_source_paints_nothing() {
        let src = Bitmap::empty();
        let mut dst = Bitmap::filled(4, 4, 0xff12_3456);
        blit_transformed(&mut dst, &src, Rotor::from_angle(0.3), 2.0, 2, 2);
        assert!(dst.pixels().iter().all(|&p| p == 0xff12_3456));
    }

    #[test]
    fn quarter_turn_keeps_opaque_core() {
        let src = Bitmap::filled(6, 6, 0xffff_0000);
        let mut dst = Bitmap::filled(12, 12, 0xff00_0000);
        blit_transformed(&mut dst, &src, Rotor::from_angle(std::f64::consts::FRAC_PI_2), 1.0, 6, 6);
        assert_eq!(pixel(&dst, 6, 6), 0xffff_0000);
        assert_eq!(pixel(&dst, 0, 0), 0xff00_0000);
    }

    #[test]
    fn cut_out_copies_region_and_zero_fills_outside() {
        let src = numbered(4, 4);
        let part = cut_out(&src, 2, 3, 3, 2);
        assert_eq!(part.width(), 3);
        assert_eq!(part.height(), 2);
        assert_eq!(pixel(&part, 0, 0), pixel(&src, 2, 3));
        assert_eq!(pixel(&part, 1, 0), pixel(&src, 3, 3));
        assert_eq!(pixel(&part, 2, 0), 0);
        assert_eq!(pixel(&part, 0, 1), 0);
    }

    #[test]
    fn extreme_blit_offsets_are_clipped() {
        let src = Bitmap::filled(2, 2, argb(0xff, 1, 2, 3));
        let mut dst = Bitmap::filled(3, 3, argb(0xff, 0, 0, 0));
        blit(&mut dst, &src, i64::MAX, i64::MIN, usize::MAX, usize::MAX);
        assert!(dst.pixels().iter().all(|&p| p == argb(0xff, 0, 0, 0)));

        blit(&mut dst, &src, -1, -1, usize::MAX, usize::MAX);
        assert_eq!(pixel(&dst, 0, 0), argb(0xff, 1, 2, 3));
    }

    #[test]
    fn huge_zoom_covers_only_the_destination() {
        let src = Bitmap::filled(4, 4, 0xffff_ffff);
        let mut dst = Bitmap::filled(8, 8, 0xff00_0000);
        blit_transformed(&mut dst, &src, Rotor::IDENTITY, 1e30, i64::MAX, i64::MIN);
        assert!(dst.pixels().iter().all(|&p| p == 0xffff_ffff));

        let mut far = Bitmap::filled(8, 8, 0xff00_0000);
        blit_transformed(&mut far, &src, Rotor::IDENTITY, 1.0, i64::MAX, i64::MIN);
        assert!(far.pixels().iter().all(|&p| p == 0xff00_0000));
    }

    #[test]
    fn cut_out_at_the_coordinate_limit_is_transparent() {
        let part = cut_out(&numbered(4, 4), i64::MAX, i64::MAX, 3, 2);
        assert!(part.pixels().iter().all(|&p| p == 0));
    }
}
