//! Highlight registration and the terminal color scheme.
//!
//! The indicator column does not know how its host draws colors. It describes one
//! [`HighlightGroup`] per category and hands them to whatever [`HighlightRegistry`]
//! the host provides. [`TerminalHighlights`] is the registry used by the CLI; it paints
//! indicator text with `colored`.
//!
//! # Color Scheme
//! - **Modified / Renamed**: Yellow
//! - **Staged**: Green
//! - **Unmerged**: Red bold, conflicts need attention
//! - **Deleted**: Red
//! - **Untracked / Ignored / Unknown**: Terminal default

use crate::core::indicator::IndicatorCategory;
use colored::*;
use std::collections::BTreeMap;

/// Everything a host needs to highlight one indicator category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighlightGroup {
    pub category: IndicatorCategory,
    /// Text rendered for this category (glyph or raw code pattern)
    pub glyph: String,
    /// Regular expression matching the rendered text inside the column
    pub pattern: String,
    pub color: Option<Color>,
}

/// Host capability receiving highlight definitions
pub trait HighlightRegistry {
    fn register_highlights(&mut self, groups: &[HighlightGroup]);
}

/// Color for a category, `None` meaning the terminal default
pub fn category_color(category: IndicatorCategory) -> Option<Color> {
    match category {
        IndicatorCategory::Modified | IndicatorCategory::Renamed => Some(Color::Yellow),
        IndicatorCategory::Staged => Some(Color::Green),
        IndicatorCategory::Unmerged | IndicatorCategory::Deleted => Some(Color::Red),
        IndicatorCategory::Untracked | IndicatorCategory::Ignored | IndicatorCategory::Unknown => {
            None
        }
    }
}

/// Registry that paints text for terminal output
#[derive(Debug, Default)]
pub struct TerminalHighlights {
    groups: BTreeMap<IndicatorCategory, HighlightGroup>,
}

impl TerminalHighlights {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn group(&self, category: IndicatorCategory) -> Option<&HighlightGroup> {
        self.groups.get(&category)
    }

    pub fn groups(&self) -> impl Iterator<Item = &HighlightGroup> {
        self.groups.values()
    }

    /// Apply the registered color of `category` to `text`.
    /// Unregistered or uncategorised text is left plain.
    pub fn paint(&self, category: Option<IndicatorCategory>, text: &str) -> ColoredString {
        let Some(group) = category.and_then(|c| self.groups.get(&c)) else {
            return text.normal();
        };
        let painted = match group.color {
            Some(color) => text.color(color),
            None => text.normal(),
        };
        if group.category == IndicatorCategory::Unmerged {
            painted.bold()
        } else {
            painted
        }
    }
}

impl HighlightRegistry for TerminalHighlights {
    fn register_highlights(&mut self, groups: &[HighlightGroup]) {
        for group in groups {
            log::debug!(
                "Registering highlight for {} ({:?})",
                group.category,
                group.pattern
            );
            self.groups.insert(group.category, group.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(category: IndicatorCategory) -> HighlightGroup {
        HighlightGroup {
            category,
            glyph: category.default_glyph().to_string(),
            pattern: format!("[{}]", category.default_glyph()),
            color: category_color(category),
        }
    }

    #[test]
    fn test_register_and_lookup() {
        let mut highlights = TerminalHighlights::new();
        highlights.register_highlights(&[group(IndicatorCategory::Modified)]);

        assert!(highlights.group(IndicatorCategory::Modified).is_some());
        assert!(highlights.group(IndicatorCategory::Staged).is_none());
        assert_eq!(highlights.groups().count(), 1);
    }

    #[test]
    fn test_re_registration_replaces_group() {
        let mut highlights = TerminalHighlights::new();
        highlights.register_highlights(&[group(IndicatorCategory::Staged)]);
        let mut replacement = group(IndicatorCategory::Staged);
        replacement.glyph = "+".to_string();
        highlights.register_highlights(&[replacement]);

        assert_eq!(highlights.groups().count(), 1);
        assert_eq!(
            highlights.group(IndicatorCategory::Staged).unwrap().glyph,
            "+"
        );
    }

    #[test]
    fn test_paint_keeps_text() {
        let mut highlights = TerminalHighlights::new();
        highlights.register_highlights(&[group(IndicatorCategory::Unmerged)]);

        let painted = highlights.paint(Some(IndicatorCategory::Unmerged), "═");
        assert!(painted.to_string().contains('═'));
        assert_eq!(painted, "═".red().bold());

        let plain = highlights.paint(None, "file.txt");
        assert!(plain.to_string().contains("file.txt"));
        assert_eq!(plain, "file.txt".normal());
    }

    #[test]
    fn test_category_colors() {
        assert_eq!(category_color(IndicatorCategory::Modified), Some(Color::Yellow));
        assert_eq!(category_color(IndicatorCategory::Staged), Some(Color::Green));
        assert_eq!(category_color(IndicatorCategory::Deleted), Some(Color::Red));
        assert_eq!(category_color(IndicatorCategory::Untracked), None);
    }
}
