//! Frame style: how pixels become glyphs and colors.

use std::sync::Arc;

use thiserror::Error;

use crate::colorizer::Colorizer;
use crate::types::{
    alpha, blue, green, red, Argb, CONTRAST_PIVOT, DEFAULT_GRADIENT, DEFAULT_SYMBOL_WH_FRACTION,
};

/// Invalid style or colorizer configuration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StyleError {
    /// A true-color deterioration step of zero would divide by zero.
    #[error("colorizer deterioration must be at least 1")]
    ZeroDeterioration,

    /// The glyph gradient has no characters to choose from.
    #[error("gradient must contain at least one glyph")]
    EmptyGradient,

    /// Glyph width/height ratio must be a positive finite number.
    #[error("symbol width/height fraction must be positive and finite, got {0}")]
    InvalidSymbolRatio(f64),

    /// Contrast must be finite.
    #[error("contrast must be finite, got {0}")]
    InvalidContrast(f64),
}

/// Immutable rendering style.
///
/// Built once, validated when handed to a writer, and replaced wholesale to
/// change how frames look.
#[derive(Debug, Clone)]
pub struct Style {
    /// Color strategy; `None` prints glyphs only.
    pub colorizer: Option<Arc<dyn Colorizer>>,
    /// Glyphs from darkest to brightest.
    pub gradient: Vec<char>,
    /// Brightness multiplier around `0x88`.
    pub contrast: f64,
    /// ANDed into every sampled pixel.
    pub mask: Argb,
    /// Treat every sampled pixel as opaque.
    pub ignore_alpha: bool,
    /// Glyph width divided by glyph height.
    pub symbol_wh_fraction: f64,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            colorizer: None,
            gradient: DEFAULT_GRADIENT.chars().collect(),
            contrast: 1.0,
            mask: 0xffff_ffff,
            ignore_alpha: false,
            symbol_wh_fraction: DEFAULT_SYMBOL_WH_FRACTION,
        }
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_colorizer<C: Colorizer + 'static>(mut self, colorizer: C) -> Self {
        self.colorizer = Some(Arc::new(colorizer));
        self
    }

    pub fn with_shared_colorizer(mut self, colorizer: Option<Arc<dyn Colorizer>>) -> Self {
        self.colorizer = colorizer;
        self
    }

    pub fn with_gradient(mut self, gradient: &str) -> Self {
        self.gradient = gradient.chars().collect();
        self
    }

    pub fn with_contrast(mut self, contrast: f64) -> Self {
        self.contrast = contrast;
        self
    }

    pub fn with_mask(mut self, mask: Argb) -> Self {
        self.mask = mask;
        self
    }

    pub fn with_ignore_alpha(mut self, ignore_alpha: bool) -> Self {
        self.ignore_alpha = ignore_alpha;
        self
    }

    pub fn with_symbol_wh_fraction(mut self, fraction: f64) -> Self {
        self.symbol_wh_fraction = fraction;
        self
    }

    pub fn validate(&self) -> Result<(), StyleError> {
        if self.gradient.is_empty() {
            return Err(StyleError::EmptyGradient);
        }
        let f = self.symbol_wh_fraction;
        if !(f.is_finite() && f > 0.0) {
            return Err(StyleError::InvalidSymbolRatio(f));
        }
        if !self.contrast.is_finite() {
            return Err(StyleError::InvalidContrast(self.contrast));
        }
        Ok(())
    }

    /// Apply `ignore_alpha` and `mask` to a sampled pixel.
    #[inline]
    pub fn prepare(&self, mut argb: Argb) -> Argb {
        if self.ignore_alpha {
            argb |= 0xff00_0000;
        }
        argb & self.mask
    }

    /// Glyph for a pixel: mean of R, G, B scaled by alpha.
    #[inline]
    pub fn char_from_argb(&self, argb: Argb) -> char {
        let sum = red(argb) as u32 + green(argb) as u32 + blue(argb) as u32;
        let brightness = sum * alpha(argb) as u32 / 3 / 0xff;
        self.char_from_brightness(brightness as u8)
    }

    /// Glyph for a brightness, after contrast adjustment.
    ///
    /// The adjusted brightness saturates at `0..=255` instead of wrapping.
    #[inline]
    pub fn char_from_brightness(&self, brightness: u8) -> char {
        let mut b = brightness;
        if (self.contrast - 1.0).abs() >= f64::EPSILON {
            let pivot = CONTRAST_PIVOT as f64;
            b = ((b as f64 - pivot) * self.contrast + pivot).clamp(0.0, 255.0) as u8;
        }
        let Some(last) = self.gradient.len().checked_sub(1) else {
            return ' ';
        };
        self.gradient[b as usize * last / 0xff]
    }
}
