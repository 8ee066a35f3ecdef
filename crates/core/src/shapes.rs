//! Shape primitives: lines, rectangles, squares, circles, grids.
//!
//! Every routine writes through [`set_pixel`], so shapes that leave the bitmap
//! are clipped for free and degenerate input simply paints nothing (or a
//! single point, for zero-length lines and zero-radius shapes).
//!
//! Coordinates are widened to `i128` internally and each walk only visits the
//! steps that can land on the bitmap, so extreme endpoints neither overflow
//! nor cost more than the bitmap's own extent.

use std::ops::Range;

use crate::bitmap::{set_pixel, set_pixel_wide, visible_steps, RasterMut};
use crate::types::Argb;

/// Integer line from `(x0, y0)` to `(x1, y1)`, both endpoints inclusive.
///
/// Endpoints are swapped so the line always walks downward, then the line
/// steps along its major axis with an integer error term.
pub fn draw_line<R: RasterMut + ?Sized>(
    btmp: &mut R,
    mut x0: i64,
    mut y0: i64,
    mut x1: i64,
    mut y1: i64,
    argb: Argb,
) {
    if y1 < y0 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }
    let adx = x0.abs_diff(x1);
    let dy = y0.abs_diff(y1);

    if adx == 0 {
        vspan(btmp, x0 as i128, y0 as i128, dy as i128 + 1, argb);
        return;
    }
    if dy == 0 {
        hspan(btmp, x0.min(x1) as i128, y0 as i128, adx as i128 + 1, argb);
        return;
    }

    let left = x1 < x0;
    if dy > adx {
        walk_line(btmp, (x0, y0), dy, adx, true, left, argb);
    } else {
        walk_line(btmp, (x0, y0), adx, dy, false, left, argb);
    }
}

/// Bresenham walk of `major + 1` steps from `(x0, y0)`.
///
/// Steep lines step down `y` and drift along `x` (leftward when `left`),
/// shallow ones step along `x` and drift down `y`; the drift totals `minor`.
/// Only steps whose major coordinate is on the bitmap are walked. The drift
/// and error term at the first of them come from `minor * k / major` directly.
fn walk_line<R: RasterMut + ?Sized>(
    btmp: &mut R,
    (x0, y0): (i64, i64),
    major: u64,
    minor: u64,
    steep: bool,
    left: bool,
    argb: Argb,
) {
    let (x0, y0) = (x0 as i128, y0 as i128);
    let len = major as i128 + 1;
    let steps = match (steep, left) {
        (true, _) => visible_steps(y0, len, btmp.height()),
        (false, false) => visible_steps(x0, len, btmp.width()),
        // x0 - k in [0, w) exactly when (w - 1 - x0) + k is.
        (false, true) => visible_steps(btmp.width() as i128 - 1 - x0, len, btmp.width()),
    };
    if steps.is_empty() {
        return;
    }

    let p = minor as u128 * steps.start as u128;
    let q = (p / major as u128) as i128;
    let r = (p % major as u128) as i128;
    let (major, minor) = (major as i128, minor as i128);

    // Steep walks round the drift half up, shallow ones half down.
    let carry = if steep { 2 * r >= major } else { 2 * r > major };
    let wrap = if carry { 2 * major } else { 0 };
    let mut drift = q + carry as i128;
    let mut d = if steep {
        major - 2 * minor - 2 * r + wrap
    } else {
        2 * minor - major + 2 * r - wrap
    };

    let sx = if left { -1 } else { 1 };
    for k in steps {
        if steep {
            set_pixel_wide(btmp, x0 + sx * drift, y0 + k, argb);
            if d >= 1 {
                d -= 2 * minor;
            } else {
                drift += 1;
                d += 2 * major - 2 * minor;
            }
        } else {
            set_pixel_wide(btmp, x0 + sx * k, y0 + drift, argb);
            if d <= 0 {
                d += 2 * minor;
            } else {
                drift += 1;
                d += 2 * minor - 2 * major;
            }
        }
    }
}

fn vspan<R: RasterMut + ?Sized>(btmp: &mut R, x: i128, y: i128, len: i128, argb: Argb) {
    for i in visible_steps(y, len, btmp.height()) {
        set_pixel_wide(btmp, x, y + i, argb);
    }
}

fn hspan<R: RasterMut + ?Sized>(btmp: &mut R, x: i128, y: i128, len: i128, argb: Argb) {
    for i in visible_steps(x, len, btmp.width()) {
        set_pixel_wide(btmp, x + i, y, argb);
    }
}

/// `len` pixels downward from `(x, y)`.
pub fn draw_vertical_line<R: RasterMut + ?Sized>(
    btmp: &mut R,
    x: i64,
    y: i64,
    len: u64,
    argb: Argb,
) {
    vspan(btmp, x as i128, y as i128, len as i128, argb);
}

/// `len` pixels rightward from `(x, y)`.
pub fn draw_horizontal_line<R: RasterMut + ?Sized>(
    btmp: &mut R,
    x: i64,
    y: i64,
    len: u64,
    argb: Argb,
) {
    hspan(btmp, x as i128, y as i128, len as i128, argb);
}

/// Rectangle outline through both corners (inclusive), in any corner order.
pub fn draw_rect<R: RasterMut + ?Sized>(
    btmp: &mut R,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    argb: Argb,
) {
    let (min_x, max_x) = (x0.min(x1) as i128, x0.max(x1) as i128);
    let (min_y, max_y) = (y0.min(y1) as i128, y0.max(y1) as i128);
    let w = max_x - min_x + 1;
    let h = max_y - min_y + 1;

    hspan(btmp, min_x, min_y, w, argb);
    hspan(btmp, min_x, max_y, w, argb);
    vspan(btmp, min_x, min_y, h, argb);
    vspan(btmp, max_x, min_y, h, argb);
}

/// Fill the half-open box between two corners, in any corner order.
///
/// Zero width or height paints nothing.
pub fn fill_area<R: RasterMut + ?Sized>(
    btmp: &mut R,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    argb: Argb,
) {
    let w = btmp.width() as i64;
    let h = btmp.height() as i64;
    let min_x = x0.min(x1).clamp(0, w);
    let max_x = x0.max(x1).clamp(0, w);
    let min_y = y0.min(y1).clamp(0, h);
    let max_y = y0.max(y1).clamp(0, h);

    for y in min_y..max_y {
        for x in min_x..max_x {
            set_pixel(btmp, x, y, argb);
        }
    }
}

/// Square outline of side `2 * radius` centered on `(cx, cy)`.
pub fn draw_square<R: RasterMut + ?Sized>(
    btmp: &mut R,
    cx: i64,
    cy: i64,
    radius: u32,
    argb: Argb,
) {
    let r = radius as i128;
    let (bx, by) = (cx as i128 - r, cy as i128 - r);
    let len = 2 * r;

    hspan(btmp, bx, by, len, argb);
    // The bottom edge also takes the far corner.
    hspan(btmp, bx, by + len, len + 1, argb);
    vspan(btmp, bx, by, len, argb);
    vspan(btmp, bx + len, by, len, argb);
}

/// Filled square covering `[c - radius, c + radius)` on both axes.
pub fn fill_square<R: RasterMut + ?Sized>(
    btmp: &mut R,
    cx: i64,
    cy: i64,
    radius: u32,
    argb: Argb,
) {
    let r = radius as i64;
    fill_area(
        btmp,
        cx.saturating_sub(r),
        cy.saturating_sub(r),
        cx.saturating_add(r),
        cy.saturating_add(r),
        argb,
    );
}

/// Circle outline of `radius` around `(cx, cy)`.
///
/// Walks one octant with `i2 = sqrt(r² - i²)` and mirrors each step into the
/// other seven. Stops once `i + 1 >= i2`.
///
/// A step `i` can only paint when one of `cx ± i` or `cy ± i` is on the bitmap,
/// so only those four windows of `i` are walked. Overlapping windows repaint
/// the same pixels.
pub fn draw_circle<R: RasterMut + ?Sized>(
    btmp: &mut R,
    cx: i64,
    cy: i64,
    radius: u32,
    argb: Argb,
) {
    let r2 = radius as u64 * radius as u64;
    // Only called with i <= radius.
    let octant_y = |i: i128| ((r2 - (i * i) as u64) as f64).sqrt() as i128;

    let (cx, cy) = (cx as i128, cy as i128);
    let (w, h) = (btmp.width() as i128, btmp.height() as i128);
    let windows = [
        (-cx, w - 1 - cx),
        (cx - (w - 1), cx),
        (-cy, h - 1 - cy),
        (cy - (h - 1), cy),
    ];

    for (lo, hi) in windows {
        let (lo, hi) = (lo.max(0), hi.min(radius as i128));
        if lo > hi {
            continue;
        }
        let mut i2 = if lo == 0 { i128::MAX } else { octant_y(lo - 1) };
        for i in lo..=hi {
            if i + 1 >= i2 {
                break;
            }
            i2 = octant_y(i);

            set_pixel_wide(btmp, cx + i, cy + i2, argb);
            set_pixel_wide(btmp, cx - i, cy - i2, argb);
            set_pixel_wide(btmp, cx + i, cy - i2, argb);
            set_pixel_wide(btmp, cx - i, cy + i2, argb);

            set_pixel_wide(btmp, cx + i2, cy + i, argb);
            set_pixel_wide(btmp, cx - i2, cy - i, argb);
            set_pixel_wide(btmp, cx - i2, cy + i, argb);
            set_pixel_wide(btmp, cx + i2, cy - i, argb);
        }
    }
}

/// Line indices `i < count` whose offset `origin + i * step` is in `[0, extent)`.
fn grid_steps(origin: i128, step: i128, count: i128, extent: usize) -> Range<i128> {
    let lo = (step - 1 - origin).div_euclid(step).max(0);
    let hi = ((extent as i128 - 1 - origin).div_euclid(step) + 1).min(count);
    lo..hi.max(lo)
}

/// Grid of lines every `interval` pixels inside `(x0, y0)..(x1, y1)`.
///
/// Vertical lines first, then horizontal ones. `interval == 0` paints nothing.
pub fn draw_grid<R: RasterMut + ?Sized>(
    btmp: &mut R,
    x0: i64,
    y0: i64,
    x1: i64,
    y1: i64,
    interval: u32,
    argb: Argb,
) {
    if interval == 0 {
        return;
    }
    let step = interval as i128;
    let (x0, y0) = (x0 as i128, y0 as i128);
    let w = x1 as i128 - x0;
    let h = y1 as i128 - y0;
    if w <= 0 || h <= 0 {
        return;
    }

    for i in grid_steps(x0, step, w / step, btmp.width()) {
        vspan(btmp, x0 + i * step, y0, h, argb);
    }
    for i in grid_steps(y0, step, h / step, btmp.height()) {
        hspan(btmp, x0, y0 + i * step, w, argb);
    }
}
