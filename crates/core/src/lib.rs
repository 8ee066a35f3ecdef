//! Raster core - ARGB bitmaps and pixel primitives
//!
//! This crate is the drawing half of the workspace. It has **zero dependencies**
//! on terminals or I/O, so everything here is deterministic and unit-testable:
//!
//! - [`bitmap`]: owned and borrowed ARGB grids with bounds-policy pixel access
//! - [`blend`]: "over" alpha compositing and N-tap channel averaging
//! - [`shapes`]: lines, rectangles, squares, circles, grids
//! - [`blit`]: copies, flips, alpha blits, rotated/scaled blits, cut-outs
//! - [`rotor`]: complex-number rotations used by the affine blit
//!
//! # Bounds Policy
//!
//! No primitive returns an error or panics on geometry. Reads outside a bitmap
//! return a garbage pixel and writes outside are dropped, so callers never clip.
//! Degenerate input (zero radius, empty box, zero scale) paints nothing or a
//! single point.
//!
//! # Example
//!
//! ```
//! use term_raster_core::{blit_transformed, draw_circle, fill_area, pixel, Bitmap, Rotor};
//!
//! let mut canvas = Bitmap::new(32, 32);
//! fill_area(&mut canvas, 0, 0, 32, 32, 0xff00_0000);
//! draw_circle(&mut canvas, 16, 16, 10, 0xff00_ff00);
//! assert_eq!(pixel(&canvas, 26, 16), 0xff00_ff00);
//!
//! let sprite = Bitmap::filled(8, 8, 0xffff_ffff);
//! blit_transformed(&mut canvas, &sprite, Rotor::from_angle(0.5), 1.5, 16, 16);
//! assert_eq!(pixel(&canvas, 16, 16), 0xffff_ffff);
//! ```
//!
//! # Allocation
//!
//! Only [`cut_out`] allocates. Every other primitive works in place.

pub mod bitmap;
pub mod blend;
pub mod blit;
pub mod rotor;
pub mod shapes;

pub use term_raster_types as types;

pub use bitmap::{
    pixel, pixel_mut, pixel_or, set_pixel, Bitmap, BitmapView, BitmapViewMut, Raster, RasterMut,
};
pub use blend::{aver_argb, blend_argb};
pub use blit::{blit, blit_all, blit_transformed, copy, copy_flipped, cut_out, rotate};
pub use rotor::Rotor;
pub use shapes::{
    draw_circle, draw_grid, draw_horizontal_line, draw_line, draw_rect, draw_square,
    draw_vertical_line, fill_area, fill_square,
};
