//! Core functionality for the git-indicators tool.
//!
//! This module provides the status pipeline (runner, parser, sorter, cache), the
//! indicator column built on top of it, and the supporting configuration, error and
//! output utilities.

pub mod cache;
pub mod colors;
pub mod column;
pub mod config;
pub mod dirs;
pub mod error;
pub mod indicator;
pub mod output;
pub mod runner;
pub mod sorter;
pub mod status_line;

// === Error handling ===
pub use error::{GitIndicatorError, Result};

// === Command execution ===
// Process boundary to the git binary
pub use runner::{CommandRunner, GitCommandRunner};

// === Status records ===
// Porcelain parsing into typed records
pub use status_line::{
    parse_name_status, parse_status, parse_untracked_listing, StatusLine, StatusPath,
};

// === Classification and ordering ===
pub use indicator::{classify, IndicatorCategory};
pub use sorter::{severity, sort_lines};

// === Status cache ===
// Per-repository cache with directory-aware path resolution
pub use cache::{StatusCache, StatusOptions};

// === Indicator column ===
pub use column::{Candidate, GitColumn, Indicator};
pub use config::IndicatorConfig;

// === Highlighting ===
pub use colors::{category_color, HighlightGroup, HighlightRegistry, TerminalHighlights};

// === Output formatting ===
pub use output::{print_error, print_section_header};
