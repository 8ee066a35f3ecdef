//! Host-facing renderer: the drawing calls a game or video engine makes each
//! frame, forwarded onto a terminal writer's surface.

use anyhow::Result;
use log::debug;

use crate::core::{
    blit_transformed, draw_circle, draw_line, draw_rect, draw_square, fill_area, set_pixel,
    Bitmap, Raster, RasterMut, Rotor,
};
use crate::term::{Style, StyleConfig, StyleError, TerminalOutput, Writer};
use crate::types::Argb;

/// A point in host coordinates. Truncated toward zero to address pixels.
pub type Point = (f64, f64);

/// How a rectangle is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ShapeFormat {
    pub fill: bool,
}

impl ShapeFormat {
    pub const OUTLINE: ShapeFormat = ShapeFormat { fill: false };
    pub const FILLED: ShapeFormat = ShapeFormat { fill: true };
}

/// Drawing surface a host engine renders into.
///
/// Calls between two [`update`](Renderer::update)s accumulate on one frame.
pub trait Renderer {
    fn fill(&mut self, argb: Argb);
    fn draw_pixel(&mut self, p: Point, argb: Argb);
    fn draw_line(&mut self, p0: Point, p1: Point, argb: Argb);
    fn draw_rect(&mut self, p0: Point, p1: Point, argb: Argb, format: ShapeFormat);
    fn draw_square(&mut self, center: Point, radius: f64, argb: Argb);
    fn draw_circle(&mut self, center: Point, radius: f64, argb: Argb);

    /// Blend `image` rotated by `angle` radians and scaled by `zoom`, centered
    /// on `center`.
    fn draw_image(&mut self, image: &Bitmap, center: Point, angle: f64, zoom: f64);

    /// Hand the raw pixel rows of the current frame to `f`.
    fn modify_bitmap(&mut self, f: &mut dyn FnMut(&mut [Argb]));

    /// Follow the terminal size.
    fn set_fullscreen(&mut self, fullscreen: bool);
    fn set_resolution(&mut self, w: usize, h: usize);
    fn resolution(&self) -> (usize, usize);

    /// Present the frame.
    fn update(&mut self) -> Result<()>;
}

#[inline]
fn px(p: Point) -> (i64, i64) {
    (p.0 as i64, p.1 as i64)
}

#[inline]
fn radius(r: f64) -> u32 {
    // `as` saturates: negative and NaN become 0.
    r as u32
}

/// [`Renderer`] backed by a terminal [`Writer`].
pub struct ConsoleRenderer<W: TerminalOutput> {
    writer: Writer<W>,
}

impl<W: TerminalOutput> ConsoleRenderer<W> {
    pub fn new(out: W, style: Style) -> Result<Self, StyleError> {
        Ok(Self::from_writer(Writer::new(out, style)?))
    }

    pub fn from_config(out: W, config: &StyleConfig) -> Result<Self, StyleError> {
        Ok(Self::from_writer(config.writer(out)?))
    }

    pub fn from_writer(writer: Writer<W>) -> Self {
        Self { writer }
    }

    pub fn writer(&self) -> &Writer<W> {
        &self.writer
    }

    pub fn writer_mut(&mut self) -> &mut Writer<W> {
        &mut self.writer
    }

    pub fn into_writer(self) -> Writer<W> {
        self.writer
    }
}

impl<W: TerminalOutput> Renderer for ConsoleRenderer<W> {
    fn fill(&mut self, argb: Argb) {
        let btmp = self.writer.bitmap_mut();
        let (w, h) = (btmp.width() as i64, btmp.height() as i64);
        fill_area(btmp, 0, 0, w, h, argb);
    }

    fn draw_pixel(&mut self, p: Point, argb: Argb) {
        let (x, y) = px(p);
        set_pixel(self.writer.bitmap_mut(), x, y, argb);
    }

    fn draw_line(&mut self, p0: Point, p1: Point, argb: Argb) {
        let ((x0, y0), (x1, y1)) = (px(p0), px(p1));
        draw_line(self.writer.bitmap_mut(), x0, y0, x1, y1, argb);
    }

    fn draw_rect(&mut self, p0: Point, p1: Point, argb: Argb, format: ShapeFormat) {
        let ((x0, y0), (x1, y1)) = (px(p0), px(p1));
        if format.fill {
            fill_area(self.writer.bitmap_mut(), x0, y0, x1, y1, argb);
        } else {
            draw_rect(self.writer.bitmap_mut(), x0, y0, x1, y1, argb);
        }
    }

    fn draw_square(&mut self, center: Point, r: f64, argb: Argb) {
        let (x, y) = px(center);
        draw_square(self.writer.bitmap_mut(), x, y, radius(r), argb);
    }

    fn draw_circle(&mut self, center: Point, r: f64, argb: Argb) {
        let (x, y) = px(center);
        draw_circle(self.writer.bitmap_mut(), x, y, radius(r), argb);
    }

    fn draw_image(&mut self, image: &Bitmap, center: Point, angle: f64, zoom: f64) {
        let (x, y) = px(center);
        blit_transformed(
            self.writer.bitmap_mut(),
            image,
            Rotor::from_angle(angle),
            zoom,
            x,
            y,
        );
    }

    fn modify_bitmap(&mut self, f: &mut dyn FnMut(&mut [Argb])) {
        f(self.writer.bitmap_mut().pixels_mut());
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.writer.set_auto_resize(fullscreen);
    }

    fn set_resolution(&mut self, w: usize, h: usize) {
        debug!("resolution requested: {w}x{h}");
        self.writer.set_frame_size(w, h);
    }

    fn resolution(&self) -> (usize, usize) {
        let btmp = self.writer.bitmap();
        (btmp.width(), btmp.height())
    }

    fn update(&mut self) -> Result<()> {
        self.writer.write_frame()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::pixel;

    const BLACK: Argb = 0xff00_0000;
    const WHITE: Argb = 0xffff_ffff;
    const RED: Argb = 0xffff_0000;

    fn renderer(w: usize, h: usize) -> ConsoleRenderer<Vec<u8>> {
        let mut r = ConsoleRenderer::new(Vec::new(), Style::default().with_symbol_wh_fraction(1.0))
            .unwrap();
        r.set_fullscreen(false);
        r.set_resolution(w, h);
        r
    }

    #[test]
    fn fill_covers_every_pixel() {
        let mut r = renderer(5, 3);
        r.fill(RED);
        assert!(r.writer().bitmap().pixels().iter().all(|&p| p == RED));
    }

    #[test]
    fn points_are_truncated() {
        let mut r = renderer(4, 4);
        r.draw_pixel((2.9, 1.2), WHITE);
        assert_eq!(pixel(r.writer().bitmap(), 2, 1), WHITE);
        r.draw_pixel((-0.5, 3.7), RED);
        assert_eq!(pixel(r.writer().bitmap(), 0, 3), RED);
    }

    #[test]
    fn rect_format_selects_outline_or_fill() {
        let mut r = renderer(6, 6);
        r.draw_rect((1.0, 1.0), (4.0, 4.0), WHITE, ShapeFormat::OUTLINE);
        assert_eq!(pixel(r.writer().bitmap(), 4, 4), WHITE);
        assert_eq!(pixel(r.writer().bitmap(), 2, 2), 0);

        r.draw_rect((1.0, 1.0), (4.0, 4.0), RED, ShapeFormat::FILLED);
        assert_eq!(pixel(r.writer().bitmap(), 2, 2), RED);
        // half-open fill leaves the far edge alone
        assert_eq!(pixel(r.writer().bitmap(), 4, 4), WHITE);
    }

    #[test]
    fn circle_and_square_take_truncated_radius() {
        let mut r = renderer(20, 20);
        r.draw_circle((10.0, 10.0), 5.9, WHITE);
        assert_eq!(pixel(r.writer().bitmap(), 15, 10), WHITE);
        r.draw_square((10.0, 10.0), 2.5, RED);
        assert_eq!(pixel(r.writer().bitmap(), 8, 8), RED);
        assert_eq!(pixel(r.writer().bitmap(), 12, 12), RED);
    }

    #[test]
    fn draw_image_centers_the_sprite() {
        let mut r = renderer(16, 16);
        r.fill(BLACK);
        let sprite = Bitmap::filled(4, 4, WHITE);
        r.draw_image(&sprite, (8.0, 8.0), 0.0, 1.0);
        assert_eq!(pixel(r.writer().bitmap(), 8, 8), WHITE);
        assert_eq!(pixel(r.writer().bitmap(), 6, 6), WHITE);
        assert_eq!(pixel(r.writer().bitmap(), 4, 8), BLACK);
        assert_eq!(pixel(r.writer().bitmap(), 11, 8), BLACK);
    }

    #[test]
    fn zero_zoom_draws_nothing() {
        let mut r = renderer(8, 8);
        r.draw_image(&Bitmap::filled(4, 4, WHITE), (4.0, 4.0), 0.3, 0.0);
        assert!(r.writer().bitmap().pixels().iter().all(|&p| p == 0));
    }

    #[test]
    fn modify_bitmap_sees_the_frame() {
        let mut r = renderer(3, 2);
        let mut seen = 0;
        r.modify_bitmap(&mut |px| {
            seen = px.len();
            px[0] = RED;
        });
        assert_eq!(seen, 6);
        assert_eq!(pixel(r.writer().bitmap(), 0, 0), RED);
    }

    #[test]
    fn update_writes_one_frame() {
        let mut r = renderer(2, 2);
        r.fill(WHITE);
        r.update().unwrap();
        assert_eq!(r.writer().frames_written(), 1);
        assert!(r.writer().output().starts_with(b"@@\n@@\n"));
        assert_eq!(r.resolution(), (2, 2));
    }

    #[test]
    fn fullscreen_resizes_after_update() {
        let mut r = renderer(2, 2);
        r.set_fullscreen(true);
        r.update().unwrap();
        assert_eq!(r.resolution(), (80, 23));
    }

    #[test]
    fn extreme_host_coordinates_are_clipped() {
        let mut r = renderer(8, 8);
        let (lo, hi) = (-1e30, 1e30);
        r.draw_rect((lo, lo), (hi, hi), WHITE, ShapeFormat::OUTLINE);
        r.draw_line((hi, lo), (lo, hi), WHITE);
        r.draw_pixel((hi, lo), WHITE);
        r.draw_square((hi, lo), 1e10, WHITE);
        r.draw_circle((4.0, 4.0), 1e10, WHITE);
        r.draw_circle((lo, hi), 1e10, WHITE);
        r.draw_image(&Bitmap::filled(4, 4, WHITE), (hi, hi), 0.3, 2.0);
        assert!(r.writer().bitmap().pixels().iter().all(|&p| p == 0));

        r.draw_line((lo, 3.0), (hi, 3.0), RED);
        assert!((0..8).all(|x| pixel(r.writer().bitmap(), x, 3) == RED));
        r.draw_rect((lo, lo), (hi, hi), RED, ShapeFormat::FILLED);
        assert!(r.writer().bitmap().pixels().iter().all(|&p| p == RED));
        r.draw_square((4.0, 4.0), 1e10, WHITE);
        assert!(r.writer().bitmap().pixels().iter().all(|&p| p == RED));
    }

    #[test]
    fn renderer_is_object_safe() {
        let mut r = renderer(2, 2);
        let dynr: &mut dyn Renderer = &mut r;
        dynr.fill(WHITE);
        assert_eq!(dynr.resolution(), (2, 2));
    }
}
