//! The git indicator column.
//!
//! [`GitColumn`] is what a file listing talks to. For every rendered entry it receives a
//! [`Candidate`] and answers with an [`Indicator`]: padded display text plus the
//! category used for highlighting. A root candidate (the listed directory itself)
//! refreshes the status cache; every other candidate only reads it.
//!
//! # Public API
//! - [`GitColumn`]: Cache plus configuration, generic over the command runner
//! - [`Candidate`]: One listed entry
//! - [`Indicator`]: Rendered column cell

use crate::core::{
    cache::StatusCache,
    colors::{category_color, HighlightGroup, HighlightRegistry},
    config::IndicatorConfig,
    indicator::IndicatorCategory,
    runner::{CommandRunner, GitCommandRunner},
};
use serde::Serialize;
use std::path::PathBuf;

/// A listed entry as supplied by the host's file listing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    pub path: PathBuf,
    pub is_directory: bool,
    /// Set for the listing's top-level directory; triggers a status refresh
    pub is_root: bool,
}

impl Candidate {
    pub fn root(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_directory: true,
            is_root: true,
        }
    }

    pub fn file(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_directory: false,
            is_root: false,
        }
    }

    pub fn directory(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            is_directory: true,
            is_root: false,
        }
    }
}

/// One rendered column cell
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Indicator {
    pub text: String,
    pub category: Option<IndicatorCategory>,
}

impl Indicator {
    pub fn is_blank(&self) -> bool {
        self.category.is_none()
    }
}

pub struct GitColumn<R: CommandRunner = GitCommandRunner> {
    config: IndicatorConfig,
    runner: R,
    cache: StatusCache,
}

impl GitColumn<GitCommandRunner> {
    pub fn new(config: IndicatorConfig) -> Self {
        Self::with_runner(config, GitCommandRunner::new())
    }
}

impl<R: CommandRunner> GitColumn<R> {
    pub fn with_runner(config: IndicatorConfig, runner: R) -> Self {
        Self {
            config,
            runner,
            cache: StatusCache::new(),
        }
    }

    pub fn config(&self) -> &IndicatorConfig {
        &self.config
    }

    pub fn cache(&self) -> &StatusCache {
        &self.cache
    }

    /// Fixed display width of the column
    pub fn column_width(&self) -> usize {
        self.config.column_width()
    }

    /// Indicator for one listed entry.
    ///
    /// Root candidates refresh the cache and render blank. Other candidates render the
    /// glyph (or raw code) of their matching status line, or blank when nothing matches.
    pub fn get_indicator(&mut self, candidate: &Candidate) -> Indicator {
        if candidate.is_root {
            let options = self.config.status_options();
            self.cache.refresh(&self.runner, &candidate.path, &options);
            return self.blank();
        }

        let Some(line) = self.cache.resolve(&candidate.path, candidate.is_directory) else {
            return self.blank();
        };

        let category = line.category();
        let text = if self.config.raw_mode {
            line.code()
        } else {
            self.config.glyph(category).to_string()
        };

        Indicator {
            text: self.pad(&text),
            category: Some(category),
        }
    }

    /// Forget the cached root and status lines
    pub fn reset(&mut self) {
        self.cache.clear();
    }

    /// Hand one highlight group per category to the host.
    pub fn register_highlights(&self, registry: &mut dyn HighlightRegistry) {
        let groups: Vec<HighlightGroup> = IndicatorCategory::ALL
            .iter()
            .map(|&category| {
                let glyph = self.config.glyph(category).to_string();
                let pattern = if self.config.raw_mode {
                    category.raw_pattern().to_string()
                } else {
                    format!("[{glyph}]")
                };
                HighlightGroup {
                    category,
                    glyph,
                    pattern,
                    color: category_color(category),
                }
            })
            .collect();
        registry.register_highlights(&groups);
    }

    fn blank(&self) -> Indicator {
        Indicator {
            text: " ".repeat(self.config.blank_width()),
            category: None,
        }
    }

    fn pad(&self, text: &str) -> String {
        format!("{text:<width$}", width = self.column_width())
    }
}
