//! Colorizers: map an ARGB pixel to the escape sequence printed before its glyph.
//!
//! Two strategies ship with the crate:
//!
//! - [`AnsiColorizer`]: nearest of the 16 standard SGR colors
//! - [`TrueColorizer`]: 24-bit `38;2;r;g;b` color, optionally quantized
//!
//! The writer only emits a sequence when it differs from the previous cell's,
//! so coarser colorizers produce smaller frames.

use std::borrow::Cow;
use std::fmt::{self, Write as _};

use crate::style::StyleError;
use crate::types::{blue, green, red, rgb_part, Argb, RESET_SEQ};

/// Pixel-to-escape-sequence strategy.
pub trait Colorizer: fmt::Debug + Send + Sync {
    /// Sequence to emit before the glyph for `argb`, or empty to fall back to
    /// the terminal's default color.
    fn begin_seq(&self, argb: Argb) -> Cow<'static, str>;

    /// Sequence restoring the default color.
    fn end_seq(&self) -> Cow<'static, str> {
        Cow::Borrowed(RESET_SEQ)
    }
}

/// One entry of the 16-color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaletteEntry {
    pub name: &'static str,
    pub code: &'static str,
    pub rgb: u32,
}

const fn entry(name: &'static str, code: &'static str, rgb: u32) -> PaletteEntry {
    PaletteEntry { name, code, rgb }
}

/// Standard SGR foreground colors and the RGB they approximate.
pub const PALETTE: [PaletteEntry; 16] = [
    entry("black", "\x1b[30m", 0x000000),
    entry("red", "\x1b[31m", 0x880000),
    entry("green", "\x1b[32m", 0x008800),
    entry("yellow", "\x1b[33m", 0x888800),
    entry("blue", "\x1b[34m", 0x000088),
    entry("magenta", "\x1b[35m", 0x880088),
    entry("cyan", "\x1b[36m", 0x008888),
    entry("white", "\x1b[37m", 0xaaaaaa),
    entry("bright_black", "\x1b[90m", 0x888888),
    entry("bright_red", "\x1b[91m", 0xff0000),
    entry("bright_green", "\x1b[92m", 0x00ff00),
    entry("bright_yellow", "\x1b[93m", 0xffff00),
    entry("bright_blue", "\x1b[94m", 0x0000ff),
    entry("bright_magenta", "\x1b[95m", 0xff00ff),
    entry("bright_cyan", "\x1b[96m", 0x00ffff),
    entry("bright_white", "\x1b[97m", 0xffffff),
];

const RED: usize = 1;
const GREEN: usize = 2;
const BLUE: usize = 4;

/// Nearest-named-color colorizer.
///
/// Grays map to the default color. Pixels with a single non-zero channel map
/// straight to red, green, or blue. Everything else takes the palette entry
/// with the smallest `|palette_rgb - pixel_rgb|`, comparing the packed 24-bit
/// values as integers; ties go to the earlier entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnsiColorizer;

impl AnsiColorizer {
    pub fn new() -> Self {
        Self
    }

    /// Palette entry chosen for `argb`, `None` for grays.
    pub fn nearest(argb: Argb) -> Option<&'static PaletteEntry> {
        let (r, g, b) = (red(argb), green(argb), blue(argb));
        if r == g && r == b {
            return None;
        }
        if g == 0 && b == 0 {
            return Some(&PALETTE[RED]);
        }
        if r == 0 && b == 0 {
            return Some(&PALETTE[GREEN]);
        }
        if r == 0 && g == 0 {
            return Some(&PALETTE[BLUE]);
        }

        let target = rgb_part(argb) as i64;
        let mut best = &PALETTE[0];
        let mut best_delta = i64::MAX;
        for e in &PALETTE {
            let delta = (e.rgb as i64 - target).abs();
            if delta < best_delta {
                best_delta = delta;
                best = e;
            }
        }
        Some(best)
    }
}

impl Colorizer for AnsiColorizer {
    fn begin_seq(&self, argb: Argb) -> Cow<'static, str> {
        match Self::nearest(argb) {
            Some(e) => Cow::Borrowed(e.code),
            None => Cow::Borrowed(""),
        }
    }
}

/// 24-bit colorizer.
///
/// Each channel is quantized to a multiple of `deterioration` before it is
/// printed; `1` keeps full precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrueColorizer {
    deterioration: u8,
}

impl TrueColorizer {
    /// Fails with [`StyleError::ZeroDeterioration`] when `deterioration == 0`.
    pub fn new(deterioration: u8) -> Result<Self, StyleError> {
        if deterioration == 0 {
            return Err(StyleError::ZeroDeterioration);
        }
        Ok(Self { deterioration })
    }

    pub fn deterioration(&self) -> u8 {
        self.deterioration
    }

    #[inline]
    fn quantize(&self, c: u8) -> u8 {
        c / self.deterioration * self.deterioration
    }
}

impl Default for TrueColorizer {
    fn default() -> Self {
        Self { deterioration: 1 }
    }
}

impl Colorizer for TrueColorizer {
    fn begin_seq(&self, argb: Argb) -> Cow<'static, str> {
        let mut s = String::with_capacity(20);
        let _ = write!(
            s,
            "\x1b[38;2;{};{};{}m",
            self.quantize(red(argb)),
            self.quantize(green(argb)),
            self.quantize(blue(argb))
        );
        Cow::Owned(s)
    }
}
