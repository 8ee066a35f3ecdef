//! Terminal raster renderer (workspace facade crate).
//!
//! Re-exports the workspace crates as `term_raster::{core, render, term, types}`
//! so binaries, integration tests and benches depend on one package.

pub use term_raster_core as core;
pub use term_raster_render as render;
pub use term_raster_term as term;
pub use term_raster_types as types;
