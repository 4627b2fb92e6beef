//! Indicator categories and the state-code classifier.
//!
//! This module defines [`IndicatorCategory`], the semantic classification shown next to
//! each listed entry, and [`classify`], which maps a porcelain two-character state code
//! onto exactly one category.
//!
//! # Public API
//! - [`IndicatorCategory`]: The eight display categories
//! - [`classify`]: Ordered rule set from `(us, them)` to a category
//!
//! # Classification order
//! Rules are checked top to bottom and the first match wins:
//! 1. `??` is untracked
//! 2. ` M` is modified in the worktree only
//! 3. any `U`, `AA` or `DD` is an unmerged conflict
//! 4. `M`, `A` or `C` in the index is staged
//! 5. `R` in the index is renamed
//! 6. `!` is ignored
//! 7. `D` in the worktree is deleted
//! 8. anything else is unknown

use serde::{Deserialize, Serialize};
use std::fmt;

/// Semantic status category for one entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum IndicatorCategory {
    Modified,
    Staged,
    Untracked,
    Renamed,
    Unmerged,
    Deleted,
    Ignored,
    Unknown,
}

impl IndicatorCategory {
    /// Every category, in display order
    pub const ALL: [IndicatorCategory; 8] = [
        IndicatorCategory::Modified,
        IndicatorCategory::Staged,
        IndicatorCategory::Renamed,
        IndicatorCategory::Unmerged,
        IndicatorCategory::Deleted,
        IndicatorCategory::Untracked,
        IndicatorCategory::Ignored,
        IndicatorCategory::Unknown,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            IndicatorCategory::Modified => "Modified",
            IndicatorCategory::Staged => "Staged",
            IndicatorCategory::Untracked => "Untracked",
            IndicatorCategory::Renamed => "Renamed",
            IndicatorCategory::Unmerged => "Unmerged",
            IndicatorCategory::Deleted => "Deleted",
            IndicatorCategory::Ignored => "Ignored",
            IndicatorCategory::Unknown => "Unknown",
        }
    }

    /// Default glyph rendered for this category
    pub fn default_glyph(&self) -> &'static str {
        match self {
            IndicatorCategory::Modified => "✹",
            IndicatorCategory::Staged => "✚",
            IndicatorCategory::Untracked => "✭",
            IndicatorCategory::Renamed => "➜",
            IndicatorCategory::Unmerged => "═",
            IndicatorCategory::Deleted => "✖",
            IndicatorCategory::Ignored => "☒",
            IndicatorCategory::Unknown => "?",
        }
    }

    /// Regular expression matching the raw two-character codes of this category.
    /// Used when highlighting raw-mode columns.
    pub fn raw_pattern(&self) -> &'static str {
        match self {
            IndicatorCategory::Modified => " M",
            IndicatorCategory::Staged => "[MAC].",
            IndicatorCategory::Untracked => r"\?\?",
            IndicatorCategory::Renamed => "R.",
            IndicatorCategory::Unmerged => "(U.|.U|AA|DD)",
            IndicatorCategory::Deleted => ".D",
            IndicatorCategory::Ignored => "!!",
            IndicatorCategory::Unknown => "X ",
        }
    }
}

impl fmt::Display for IndicatorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Classify a porcelain state code.
///
/// `us` is the index column, `them` the worktree column.
pub fn classify(us: char, them: char) -> IndicatorCategory {
    if us == '?' && them == '?' {
        return IndicatorCategory::Untracked;
    }
    if us == ' ' && them == 'M' {
        return IndicatorCategory::Modified;
    }
    // Conflicts outrank staging: "AA" is both-added, not a plain add.
    if us == 'U' || them == 'U' || (us == 'A' && them == 'A') || (us == 'D' && them == 'D') {
        return IndicatorCategory::Unmerged;
    }
    match us {
        'M' | 'A' | 'C' => IndicatorCategory::Staged,
        'R' => IndicatorCategory::Renamed,
        '!' => IndicatorCategory::Ignored,
        _ if them == 'D' => IndicatorCategory::Deleted,
        _ => IndicatorCategory::Unknown,
    }
}
