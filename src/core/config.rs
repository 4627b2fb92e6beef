//! Indicator column configuration.
//!
//! [`IndicatorConfig`] carries everything that varies between indicator columns:
//! glyphs, column width, raw-code mode, ignored files and the revision to compare
//! against. It is read from `config.json` in the git-indicators config directory;
//! every field is optional and falls back to its default.
//!
//! ```json
//! {
//!   "indicators": { "Modified": "M", "Untracked": "+" },
//!   "column_length": 2,
//!   "indicator_width": 2,
//!   "show_ignored": true,
//!   "raw_mode": false,
//!   "compare_revision": "main"
//! }
//! ```

use crate::core::{
    cache::{StatusOptions, DEFAULT_REVISION},
    dirs::get_config_file,
    error::{GitIndicatorError, Result},
    indicator::IndicatorCategory,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// Glyph per category. Missing categories use the built-in glyph.
    pub indicators: BTreeMap<IndicatorCategory, String>,
    pub column_length: usize,
    /// Terminal cells taken by one glyph. Blank cells are widened to match.
    pub indicator_width: usize,
    pub show_ignored: bool,
    /// Show the raw two-character state code instead of a glyph
    pub raw_mode: bool,
    pub compare_revision: String,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            indicators: default_indicators(),
            column_length: 1,
            indicator_width: 1,
            show_ignored: false,
            raw_mode: false,
            compare_revision: DEFAULT_REVISION.to_string(),
        }
    }
}

fn default_indicators() -> BTreeMap<IndicatorCategory, String> {
    IndicatorCategory::ALL
        .iter()
        .map(|category| (*category, category.default_glyph().to_string()))
        .collect()
}

impl IndicatorConfig {
    /// Load the user config file, falling back to defaults when it does not exist.
    pub fn load_or_default() -> Result<Self> {
        let config_file = get_config_file();
        if config_file.exists() {
            Self::load_from(&config_file)
        } else {
            log::debug!(
                "No config file at {}, using defaults",
                config_file.display()
            );
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| GitIndicatorError::config_read_failed(path, e))?;
        let config: Self = serde_json::from_str(&content)
            .map_err(|e| GitIndicatorError::config_parse_failed(path, e))?;
        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Glyph for a category, falling back to the built-in one
    pub fn glyph(&self, category: IndicatorCategory) -> &str {
        match self.indicators.get(&category) {
            Some(glyph) => glyph.as_str(),
            None => {
                log::warn!("No indicator configured for {category}, using default");
                category.default_glyph()
            }
        }
    }

    /// Width of the indicator column. Raw codes need at least two cells.
    pub fn column_width(&self) -> usize {
        let min_width = if self.raw_mode { 2 } else { 1 };
        self.column_length.max(min_width)
    }

    /// Width of a blank cell, so rows without a glyph line up with wide glyphs
    pub fn blank_width(&self) -> usize {
        self.column_width() + self.indicator_width.max(1) - 1
    }

    pub fn status_options(&self) -> StatusOptions {
        StatusOptions {
            include_ignored: self.show_ignored,
            compare_revision: self.compare_revision.clone(),
        }
    }
}
