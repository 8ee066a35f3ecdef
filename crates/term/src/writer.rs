//! Writer: serializes a bitmap into one terminal frame.
//!
//! The writer owns the draw surface. Callers draw into [`Writer::bitmap_mut`]
//! and then call [`Writer::write_frame`], which samples the bitmap one cell at
//! a time, picks a glyph from the style's gradient, and emits color escapes
//! only where the color changes. The whole frame goes out in a single write.

use anyhow::Result;
use crossterm::{cursor, style::ResetColor, terminal, QueueableCommand};
use log::{debug, trace};

use crate::core::{pixel, Bitmap, Raster};
use crate::size::{output_frame_size, TerminalOutput};
use crate::style::{Style, StyleError};
use crate::types::Argb;

pub struct Writer<W: TerminalOutput> {
    out: W,
    style: Style,
    bitmap: Bitmap,
    auto_resize: bool,
    frames: u64,
    buf: String,
}

impl<W: TerminalOutput> Writer<W> {
    /// Create a writer with an empty surface.
    ///
    /// Auto-resize starts enabled: the first [`write_frame`](Self::write_frame)
    /// only probes the terminal and sizes the surface.
    pub fn new(out: W, style: Style) -> Result<Self, StyleError> {
        style.validate()?;
        Ok(Self {
            out,
            style,
            bitmap: Bitmap::empty(),
            auto_resize: true,
            frames: 0,
            buf: String::with_capacity(64 * 1024),
        })
    }

    pub fn with_auto_resize(mut self, auto_resize: bool) -> Self {
        self.auto_resize = auto_resize;
        self
    }

    pub fn auto_resize(&self) -> bool {
        self.auto_resize
    }

    pub fn set_auto_resize(&mut self, auto_resize: bool) {
        self.auto_resize = auto_resize;
    }

    pub fn style(&self) -> &Style {
        &self.style
    }

    /// Replace the style wholesale.
    pub fn set_style(&mut self, style: Style) -> Result<(), StyleError> {
        style.validate()?;
        self.style = style;
        Ok(())
    }

    pub fn bitmap(&self) -> &Bitmap {
        &self.bitmap
    }

    pub fn bitmap_mut(&mut self) -> &mut Bitmap {
        &mut self.bitmap
    }

    pub fn output(&self) -> &W {
        &self.out
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Non-empty frames written so far.
    pub fn frames_written(&self) -> u64 {
        self.frames
    }

    pub fn symbol_wh_fraction(&self) -> f64 {
        self.style.symbol_wh_fraction
    }

    pub fn char_from_argb(&self, argb: Argb) -> char {
        self.style.char_from_argb(argb)
    }

    pub fn char_from_brightness(&self, brightness: u8) -> char {
        self.style.char_from_brightness(brightness)
    }

    /// Resize the surface to `w x h`.
    ///
    /// Same size is a no-op. A zero dimension keeps the current surface, so a
    /// terminal that briefly reports 0 rows does not drop the frame.
    /// Otherwise the old buffer is replaced by a fresh transparent one.
    pub fn set_frame_size(&mut self, w: usize, h: usize) {
        if w == self.bitmap.width() && h == self.bitmap.height() {
            return;
        }
        if w == 0 || h == 0 {
            debug!(
                "ignoring frame size {w}x{h}; keeping {}x{}",
                self.bitmap.width(),
                self.bitmap.height()
            );
            return;
        }
        debug!(
            "frame size {}x{} -> {w}x{h}",
            self.bitmap.width(),
            self.bitmap.height()
        );
        self.bitmap = Bitmap::new(w, h);
    }

    /// Serialize the surface to the output as one frame.
    ///
    /// Returns the number of frame bytes written (the trailing color reset is
    /// not counted); `0` when the surface is empty. With auto-resize on, the
    /// terminal is probed afterwards and the surface resized for the next
    /// frame.
    pub fn write_frame(&mut self) -> Result<usize> {
        let mut written = 0;
        if !self.bitmap.is_empty() {
            self.buf.clear();
            encode_frame_into(&self.bitmap, &self.style, &mut self.buf);
            self.out.write_all(self.buf.as_bytes())?;
            self.out.queue(ResetColor)?;
            self.out.flush()?;
            written = self.buf.len();
            self.frames += 1;
            trace!("frame {} written: {written} bytes", self.frames);
        }
        if self.auto_resize {
            let (w, h) = output_frame_size(&self.out, self.style.symbol_wh_fraction);
            self.set_frame_size(w, h);
        }
        Ok(written)
    }
}

impl<W: TerminalOutput> Drop for Writer<W> {
    fn drop(&mut self) {
        // Leave a clean screen for the shell prompt.
        let _ = self.out.queue(terminal::Clear(terminal::ClearType::All));
        let _ = self.out.queue(cursor::MoveTo(0, 0));
        let _ = self.out.flush();
    }
}

/// Encode `bitmap` as glyph rows into `out`.
///
/// Columns are `width / symbol_wh_fraction` rounded up; column `c` samples pixel
/// `c * symbol_wh_fraction`. Each row ends in `'\n'`. Color sequences are
/// written only when they differ from the previous cell's; switching to a
/// pixel with no sequence writes the colorizer's reset instead.
pub fn encode_frame_into<R: Raster + ?Sized>(bitmap: &R, style: &Style, out: &mut String) {
    let fraction = style.symbol_wh_fraction;
    let cols = (bitmap.width() as f64 / fraction).ceil() as usize;
    let rows = bitmap.height();
    out.reserve(rows * (cols + 1));

    let mut last_seq = String::new();
    for y in 0..rows {
        for x in 0..cols {
            let sx = (x as f64 * fraction) as i64;
            let argb = style.prepare(pixel(bitmap, sx, y as i64));

            if let Some(colorizer) = &style.colorizer {
                let seq = colorizer.begin_seq(argb);
                if seq.as_ref() != last_seq {
                    if seq.is_empty() {
                        out.push_str(&colorizer.end_seq());
                    } else {
                        out.push_str(&seq);
                    }
                    last_seq.clear();
                    last_seq.push_str(&seq);
                }
            }
            out.push(style.char_from_argb(argb));
        }
        out.push('\n');
    }
}

/// Encode `bitmap` into a fresh string (tests and debugging).
pub fn encode_frame<R: Raster + ?Sized>(bitmap: &R, style: &Style) -> String {
    let mut s = String::new();
    encode_frame_into(bitmap, style, &mut s);
    s
}

/// Render `bitmap` as plain glyph rows without any color, one `String` per row.
pub fn glyph_rows<R: Raster + ?Sized>(bitmap: &R, style: &Style) -> Vec<String> {
    let plain = Style {
        colorizer: None,
        ..style.clone()
    };
    let mut s = String::new();
    encode_frame_into(bitmap, &plain, &mut s);
    s.lines().map(str::to_owned).collect()
}
