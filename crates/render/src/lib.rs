//! Renderer adapter - the boundary a host engine draws through
//!
//! A host game or video engine talks to the terminal backend through two
//! pieces:
//!
//! - [`Renderer`]: per-frame drawing calls (fill, lines, shapes, rotated and
//!   zoomed images) plus resolution control and frame presentation.
//!   [`ConsoleRenderer`] implements it over a [`term::Writer`].
//! - [`ConsoleGraphics`]: creates images, cuts fragments out of them and
//!   composites one image onto another.
//!
//! Host coordinates are `f64` and are truncated toward zero before they reach
//! the pixel primitives, so anything off-surface is clipped silently.
//!
//! # Example
//!
//! ```
//! use term_raster_render::{ConsoleGraphics, Renderer, ShapeFormat};
//! use term_raster_render::core::RasterMut;
//! use term_raster_render::term::Style;
//!
//! let gfx = ConsoleGraphics::new();
//! let mut r = gfx.renderer(Vec::new(), Style::default()).unwrap();
//! r.set_fullscreen(false);
//! r.set_resolution(40, 20);
//!
//! let sprite = gfx.create_image_with(6, 6, |b| b.pixels_mut().fill(0xffff_ffff));
//! r.fill(0xff00_0000);
//! r.draw_rect((2.0, 2.0), (10.0, 8.0), 0xff00_ff00, ShapeFormat::OUTLINE);
//! r.draw_image(&sprite, (20.0, 10.0), 0.4, 1.5);
//! r.update().unwrap();
//! assert_eq!(r.writer().frames_written(), 1);
//! ```

pub mod graphics;
pub mod renderer;

pub use term_raster_core as core;
pub use term_raster_term as term;
pub use term_raster_types as types;

pub use graphics::{ConsoleGraphics, Image};
pub use renderer::{ConsoleRenderer, Point, Renderer, ShapeFormat};
