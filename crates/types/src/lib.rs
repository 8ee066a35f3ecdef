//! Shared pixel types and constants
//!
//! This crate defines the pixel format and the constants shared by the raster
//! core, the terminal writer, and the renderer adapter. It has no dependencies
//! so every other crate in the workspace can use it.
//!
//! # Pixel Format
//!
//! Pixels are 32-bit ARGB words, one byte per channel packed high-to-low:
//!
//! | Bits | Channel |
//! |------|---------|
//! | 24..32 | alpha |
//! | 16..24 | red |
//! | 8..16 | green |
//! | 0..8 | blue |
//!
//! Alpha `0xFF` is fully opaque, `0x00` is fully transparent.
//!
//! # Terminal Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRADIENT` | `" .:!/r(l1Z4H9W8$@"` | Glyphs from darkest to brightest |
//! | `DEFAULT_SYMBOL_WH_FRACTION` | 11/24 | Glyph width divided by glyph height |
//! | `CONTRAST_PIVOT` | `0x88` | Brightness left unchanged by contrast |
//! | `FALLBACK_COLUMNS` x `FALLBACK_ROWS` | 80x24 | Terminal size when probing fails |
//!
//! # Examples
//!
//! ```
//! use term_raster_types::{argb, alpha, red, green, blue, rgb};
//!
//! let px = argb(0x80, 0x11, 0x22, 0x33);
//! assert_eq!(px, 0x8011_2233);
//! assert_eq!((alpha(px), red(px), green(px), blue(px)), (0x80, 0x11, 0x22, 0x33));
//! assert_eq!(rgb(1, 2, 3), 0xff01_0203);
//! ```

/// A packed ARGB8888 pixel.
pub type Argb = u32;

/// Fully opaque alpha bits.
pub const OPAQUE: Argb = 0xff00_0000;

/// Value returned for out-of-bounds reads.
pub const GARBAGE_PIXEL: Argb = 0;

/// Glyph ramp from darkest to brightest.
pub const DEFAULT_GRADIENT: &str = " .:!/r(l1Z4H9W8$@";

/// Terminal glyphs are taller than wide; one column covers this fraction of a row.
pub const DEFAULT_SYMBOL_WH_FRACTION: f64 = 11.0 / 24.0;

/// Brightness value that contrast scaling pivots around.
pub const CONTRAST_PIVOT: u8 = 0x88;

/// Terminal width assumed when the window size cannot be queried.
pub const FALLBACK_COLUMNS: u16 = 80;

/// Terminal height assumed when the window size cannot be queried.
pub const FALLBACK_ROWS: u16 = 24;

/// Rows kept free below the frame for input/status.
pub const RESERVED_ROWS: u16 = 1;

/// SGR sequence restoring the terminal's default colors.
pub const RESET_SEQ: &str = "\x1b[0m";

/// Pack four channels into an ARGB word.
#[inline]
pub const fn argb(a: u8, r: u8, g: u8, b: u8) -> Argb {
    (a as u32) << 24 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Pack an opaque RGB color.
#[inline]
pub const fn rgb(r: u8, g: u8, b: u8) -> Argb {
    argb(0xff, r, g, b)
}

#[inline]
pub const fn alpha(px: Argb) -> u8 {
    (px >> 24) as u8
}

#[inline]
pub const fn red(px: Argb) -> u8 {
    (px >> 16) as u8
}

#[inline]
pub const fn green(px: Argb) -> u8 {
    (px >> 8) as u8
}

#[inline]
pub const fn blue(px: Argb) -> u8 {
    px as u8
}

/// Split a pixel into `[a, r, g, b]`.
#[inline]
pub const fn channels(px: Argb) -> [u8; 4] {
    [alpha(px), red(px), green(px), blue(px)]
}

/// The 24-bit RGB part of a pixel.
#[inline]
pub const fn rgb_part(px: Argb) -> u32 {
    px & 0x00ff_ffff
}
