//! Bitmap module - flat ARGB pixel grids and bounds-policy pixel access
//!
//! A bitmap is a row-major `width * height` array of ARGB words. Three shapes
//! share the same access traits:
//!
//! - [`Bitmap`]: owns its pixels (the writer's surface, images, cut-outs)
//! - [`BitmapView`]: borrows pixels read-only (a decoded video frame)
//! - [`BitmapViewMut`]: borrows pixels mutably (a window surface)
//!
//! # Bounds Policy
//!
//! Pixel access never fails. Reads outside `[0, width) x [0, height)` return a
//! garbage value ([`GARBAGE_PIXEL`] unless the caller supplies one) and writes
//! outside are dropped. Coordinates are signed so negative positions are just
//! another out-of-range case. Hot loops rely on this instead of clipping.

use std::ops::Range;

use crate::types::{Argb, GARBAGE_PIXEL};

/// Read access to an ARGB pixel grid.
pub trait Raster {
    fn width(&self) -> usize;
    fn height(&self) -> usize;
    /// Row-major pixels. Empty for an empty raster.
    fn pixels(&self) -> &[Argb];

    fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0 || self.pixels().is_empty()
    }
}

/// Write access to an ARGB pixel grid.
pub trait RasterMut: Raster {
    fn pixels_mut(&mut self) -> &mut [Argb];
}

/// Owned ARGB bitmap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bitmap {
    width: usize,
    height: usize,
    pixels: Vec<Argb>,
}

impl Bitmap {
    /// Allocate a zero-filled (transparent black) bitmap.
    ///
    /// A zero dimension yields the empty bitmap.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0)
    }

    pub fn filled(width: usize, height: usize, argb: Argb) -> Self {
        if width == 0 || height == 0 {
            return Self::empty();
        }
        Self {
            width,
            height,
            pixels: vec![argb; width * height],
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Wrap an existing pixel vector.
    ///
    /// Returns `None` if `pixels.len() != width * height`.
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Argb>) -> Option<Self> {
        if pixels.len() != width.checked_mul(height)? {
            return None;
        }
        if pixels.is_empty() {
            return Some(Self::empty());
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn into_pixels(self) -> Vec<Argb> {
        self.pixels
    }

    pub fn view(&self) -> BitmapView<'_> {
        BitmapView {
            width: self.width,
            height: self.height,
            pixels: &self.pixels,
        }
    }

    pub fn view_mut(&mut self) -> BitmapViewMut<'_> {
        BitmapViewMut {
            width: self.width,
            height: self.height,
            pixels: &mut self.pixels,
        }
    }
}

impl Raster for Bitmap {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixels(&self) -> &[Argb] {
        &self.pixels
    }
}

impl RasterMut for Bitmap {
    fn pixels_mut(&mut self) -> &mut [Argb] {
        &mut self.pixels
    }
}

/// Borrowed read-only bitmap.
#[derive(Debug, Clone, Copy)]
pub struct BitmapView<'a> {
    width: usize,
    height: usize,
    pixels: &'a [Argb],
}

impl<'a> BitmapView<'a> {
    /// Returns `None` if `pixels.len() != width * height`.
    pub fn new(width: usize, height: usize, pixels: &'a [Argb]) -> Option<Self> {
        (pixels.len() == width.checked_mul(height)?).then_some(Self {
            width,
            height,
            pixels,
        })
    }
}

impl Raster for BitmapView<'_> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixels(&self) -> &[Argb] {
        self.pixels
    }
}

/// Borrowed mutable bitmap.
#[derive(Debug)]
pub struct BitmapViewMut<'a> {
    width: usize,
    height: usize,
    pixels: &'a mut [Argb],
}

impl<'a> BitmapViewMut<'a> {
    /// Returns `None` if `pixels.len() != width * height`.
    pub fn new(width: usize, height: usize, pixels: &'a mut [Argb]) -> Option<Self> {
        if pixels.len() != width.checked_mul(height)? {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }
}

impl Raster for BitmapViewMut<'_> {
    fn width(&self) -> usize {
        self.width
    }

    fn height(&self) -> usize {
        self.height
    }

    fn pixels(&self) -> &[Argb] {
        &*self.pixels
    }
}

impl RasterMut for BitmapViewMut<'_> {
    fn pixels_mut(&mut self) -> &mut [Argb] {
        &mut *self.pixels
    }
}

impl<T: Raster + ?Sized> Raster for &T {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn pixels(&self) -> &[Argb] {
        (**self).pixels()
    }
}

impl<T: Raster + ?Sized> Raster for &mut T {
    fn width(&self) -> usize {
        (**self).width()
    }

    fn height(&self) -> usize {
        (**self).height()
    }

    fn pixels(&self) -> &[Argb] {
        (**self).pixels()
    }
}

impl<T: RasterMut + ?Sized> RasterMut for &mut T {
    fn pixels_mut(&mut self) -> &mut [Argb] {
        (**self).pixels_mut()
    }
}

#[inline(always)]
fn index_of(width: usize, height: usize, len: usize, x: i64, y: i64) -> Option<usize> {
    if x < 0 || y < 0 {
        return None;
    }
    let (x, y) = (x as usize, y as usize);
    if x >= width || y >= height {
        return None;
    }
    let i = y * width + x;
    (i < len).then_some(i)
}

/// Pixel at `(x, y)`, or [`GARBAGE_PIXEL`] when out of range.
#[inline]
pub fn pixel<R: Raster + ?Sized>(btmp: &R, x: i64, y: i64) -> Argb {
    pixel_or(btmp, x, y, GARBAGE_PIXEL)
}

/// Pixel at `(x, y)`, or `garbage` when out of range.
#[inline]
pub fn pixel_or<R: Raster + ?Sized>(btmp: &R, x: i64, y: i64, garbage: Argb) -> Argb {
    let px = btmp.pixels();
    match index_of(btmp.width(), btmp.height(), px.len(), x, y) {
        Some(i) => px[i],
        None => garbage,
    }
}

/// Mutable pixel at `(x, y)`, `None` when out of range.
#[inline]
pub fn pixel_mut<R: RasterMut + ?Sized>(btmp: &mut R, x: i64, y: i64) -> Option<&mut Argb> {
    let (w, h) = (btmp.width(), btmp.height());
    let px = btmp.pixels_mut();
    let i = index_of(w, h, px.len(), x, y)?;
    Some(&mut px[i])
}

/// Write `argb` at `(x, y)`; out-of-range writes are dropped.
#[inline]
pub fn set_pixel<R: RasterMut + ?Sized>(btmp: &mut R, x: i64, y: i64, argb: Argb) {
    if let Some(p) = pixel_mut(btmp, x, y) {
        *p = argb;
    }
}

/// [`set_pixel`] for coordinates computed past the `i64` range.
#[inline]
pub(crate) fn set_pixel_wide<R: RasterMut + ?Sized>(btmp: &mut R, x: i128, y: i128, argb: Argb) {
    if let (Ok(x), Ok(y)) = (i64::try_from(x), i64::try_from(y)) {
        set_pixel(btmp, x, y, argb);
    }
}

/// Offsets `k` in `[0, len)` for which `origin + k` lies in `[0, extent)`.
///
/// Primitives iterate this instead of their full length, so their work is
/// bounded by the bitmap whatever the input coordinates.
#[inline]
pub(crate) fn visible_steps(origin: i128, len: i128, extent: usize) -> Range<i128> {
    let lo = (-origin).max(0);
    let hi = (extent as i128 - origin).min(len);
    lo..hi.max(lo)
}
