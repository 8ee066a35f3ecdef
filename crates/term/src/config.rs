//! Serializable style configuration.
//!
//! [`StyleConfig`] is the on-disk form of a [`Style`] plus the writer's
//! auto-resize flag. Every field has a default, so a config file only needs
//! the settings it changes:
//!
//! ```
//! use term_raster_term::{ColorizerKind, StyleConfig};
//!
//! let json = r#"{ "colorizer": "true_color", "deterioration": 32 }"#;
//! let cfg: StyleConfig = serde_json::from_str(json).unwrap();
//! assert_eq!(cfg.colorizer, ColorizerKind::TrueColor);
//! assert_eq!(cfg.contrast, 1.0);
//! assert!(cfg.into_style().is_ok());
//! ```

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::colorizer::{AnsiColorizer, Colorizer, TrueColorizer};
use crate::size::TerminalOutput;
use crate::style::{Style, StyleError};
use crate::types::{DEFAULT_GRADIENT, DEFAULT_SYMBOL_WH_FRACTION};
use crate::writer::Writer;

/// Which colorizer a style uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorizerKind {
    /// Glyphs only.
    #[default]
    None,
    /// Nearest of the 16 standard colors.
    Ansi,
    /// 24-bit color, quantized by `deterioration`.
    TrueColor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleConfig {
    pub colorizer: ColorizerKind,
    /// True-color quantization step; must be at least 1.
    pub deterioration: u8,
    pub gradient: String,
    pub contrast: f64,
    pub mask: u32,
    pub ignore_alpha: bool,
    pub symbol_wh_fraction: f64,
    /// Follow the terminal size after every frame.
    pub auto_resize: bool,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            colorizer: ColorizerKind::None,
            deterioration: 1,
            gradient: DEFAULT_GRADIENT.to_string(),
            contrast: 1.0,
            mask: 0xffff_ffff,
            ignore_alpha: false,
            symbol_wh_fraction: DEFAULT_SYMBOL_WH_FRACTION,
            auto_resize: true,
        }
    }
}

impl StyleConfig {
    pub fn colorizer(&self) -> Result<Option<Arc<dyn Colorizer>>, StyleError> {
        Ok(match self.colorizer {
            ColorizerKind::None => None,
            ColorizerKind::Ansi => Some(Arc::new(AnsiColorizer)),
            ColorizerKind::TrueColor => Some(Arc::new(TrueColorizer::new(self.deterioration)?)),
        })
    }

    /// Build and validate the style.
    pub fn into_style(&self) -> Result<Style, StyleError> {
        let style = Style::new()
            .with_shared_colorizer(self.colorizer()?)
            .with_gradient(&self.gradient)
            .with_contrast(self.contrast)
            .with_mask(self.mask)
            .with_ignore_alpha(self.ignore_alpha)
            .with_symbol_wh_fraction(self.symbol_wh_fraction);
        style.validate()?;
        Ok(style)
    }

    /// Build a writer over `out` with this style and auto-resize setting.
    pub fn writer<W: TerminalOutput>(&self, out: W) -> Result<Writer<W>, StyleError> {
        Ok(Writer::new(out, self.into_style()?)?.with_auto_resize(self.auto_resize))
    }
}
