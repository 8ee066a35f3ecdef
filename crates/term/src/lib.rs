//! Terminal output for raster frames.
//!
//! A [`Writer`] owns an ARGB surface and serializes it to any
//! [`TerminalOutput`] as rows of glyphs. Brightness picks the glyph from a
//! gradient, and an optional [`Colorizer`] prefixes glyphs with SGR color
//! sequences. Frames go out in a single write; color escapes are emitted only
//! where the color changes.
//!
//! ```
//! use term_raster_term::{core::fill_area, Style, Writer};
//!
//! let mut w = Writer::new(Vec::new(), Style::default().with_symbol_wh_fraction(1.0))
//!     .unwrap()
//!     .with_auto_resize(false);
//! w.set_frame_size(2, 1);
//! fill_area(w.bitmap_mut(), 0, 0, 2, 1, 0xffff_ffff);
//! w.write_frame().unwrap();
//! assert!(w.output().starts_with(b"@@\n"));
//! ```

pub mod colorizer;
pub mod config;
pub mod size;
pub mod style;
pub mod writer;

pub use term_raster_core as core;
pub use term_raster_types as types;

pub use colorizer::{AnsiColorizer, Colorizer, PaletteEntry, TrueColorizer, PALETTE};
pub use config::{ColorizerKind, StyleConfig};
pub use size::{frame_size_for, output_frame_size, terminal_size, TerminalOutput};
pub use style::{Style, StyleError};
pub use writer::{encode_frame, encode_frame_into, glyph_rows, Writer};
