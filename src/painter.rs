//! Procedural scene for the demo binary.

use term_raster_core::{draw_line, set_pixel, Bitmap, RasterMut};
use term_raster_types::Argb;

/// Radial color field that drifts with `t_ms`.
///
/// Pixels inside the disc of squared radius 0.5 get a 24-bit color derived
/// from the distance and time; the rest are black. Alpha follows the same
/// intensity, so the disc fades in and out as it cycles.
pub fn paint_radial<R: RasterMut + ?Sized>(btmp: &mut R, t_ms: f64) {
    let (w, h) = (btmp.width(), btmp.height());
    if w == 0 || h == 0 {
        return;
    }
    let aspect = w as f64 / h as f64;
    let drift = t_ms * 0.001;

    for y in 0..h {
        let yy = y as f64 / h as f64 * 2.0 - 1.0;
        for x in 0..w {
            let xx = (x as f64 / w as f64 * 2.0 - 1.0) * aspect;
            let radius = xx * xx + yy * yy;
            let intensity = radius * 2.0 + drift;

            let rgb = if radius < 0.5 {
                (intensity * 0xff_ffff as f64) as u64 % 0xff_ffff
            } else {
                0
            };
            let a = (intensity * 255.0) as u64 % 0xff;
            set_pixel(btmp, x as i64, y as i64, ((a << 24) as u32) | rgb as u32);
        }
    }
}

/// `size x size` checkerboard with a border and both diagonals.
pub fn checker_sprite(size: usize, cell: usize, light: Argb, dark: Argb) -> Bitmap {
    let mut btmp = Bitmap::new(size, size);
    let cell = cell.max(1);
    for y in 0..size {
        for x in 0..size {
            let argb = if (x / cell + y / cell) % 2 == 0 { light } else { dark };
            set_pixel(&mut btmp, x as i64, y as i64, argb);
        }
    }
    let last = size as i64 - 1;
    draw_line(&mut btmp, 0, 0, last, last, 0xffff_0000);
    draw_line(&mut btmp, last, 0, 0, last, 0xffff_0000);
    btmp
}

#[cfg(test)]
mod tests {
    use super::*;
    use term_raster_core::{pixel, Raster};

    #[test]
    fn radial_disc_is_centered() {
        let mut b = Bitmap::new(20, 20);
        paint_radial(&mut b, 0.0);
        // corners are outside the disc
        assert_eq!(pixel(&b, 0, 0) & 0x00ff_ffff, 0);
        assert_ne!(pixel(&b, 11, 11) & 0x00ff_ffff, 0);
    }

    #[test]
    fn radial_skips_empty_bitmaps() {
        let mut b = Bitmap::empty();
        paint_radial(&mut b, 10.0);
        assert!(b.is_empty());
    }

    #[test]
    fn checker_has_red_diagonals() {
        let s = checker_sprite(8, 2, 0xffff_ffff, 0xff00_0000);
        assert_eq!(pixel(&s, 0, 0), 0xffff_0000);
        assert_eq!(pixel(&s, 7, 0), 0xffff_0000);
        assert_eq!(pixel(&s, 2, 0), 0xff00_0000);
        assert_eq!(pixel(&s, 4, 1), 0xffff_ffff);
    }
}
