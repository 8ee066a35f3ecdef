//! Image provider for the console renderer.
//!
//! Images are shared, immutable bitmaps. Operations that "modify" an image
//! return a new one.

use std::sync::Arc;

use crate::core::{blit, copy, cut_out, Bitmap, Raster};
use crate::renderer::ConsoleRenderer;
use crate::term::{Style, StyleError, TerminalOutput};

/// A shared image handle.
pub type Image = Arc<Bitmap>;

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleGraphics;

impl ConsoleGraphics {
    pub fn new() -> Self {
        Self
    }

    /// Renderer writing to `out`.
    pub fn renderer<W: TerminalOutput>(
        &self,
        out: W,
        style: Style,
    ) -> Result<ConsoleRenderer<W>, StyleError> {
        ConsoleRenderer::new(out, style)
    }

    /// Transparent `w x h` image.
    pub fn create_image(&self, w: usize, h: usize) -> Image {
        Arc::new(Bitmap::new(w, h))
    }

    /// `w x h` image filled in by `init`.
    pub fn create_image_with<F>(&self, w: usize, h: usize, init: F) -> Image
    where
        F: FnOnce(&mut Bitmap),
    {
        let mut btmp = Bitmap::new(w, h);
        init(&mut btmp);
        Arc::new(btmp)
    }

    pub fn image_from_bitmap(&self, btmp: Bitmap) -> Image {
        Arc::new(btmp)
    }

    /// The `w x h` region of `image` at `(x, y)`.
    pub fn image_fragment(&self, image: &Image, x: i64, y: i64, w: usize, h: usize) -> Image {
        Arc::new(cut_out(&**image, x, y, w, h))
    }

    /// A copy of `base` with a `w x h` window of `top` blended over it at `(x, y)`.
    pub fn blit_images(
        &self,
        base: &Image,
        top: &Image,
        x: i64,
        y: i64,
        w: usize,
        h: usize,
    ) -> Image {
        let mut out = Bitmap::new(base.width(), base.height());
        copy(&mut out, &**base);
        blit(&mut out, &**top, x, y, w, h);
        Arc::new(out)
    }
}
