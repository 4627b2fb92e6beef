//! Git Indicators - git status indicators for file listings.
//!
//! This library resolves the git status of every entry in a directory listing. It runs
//! `git` to collect porcelain status for a repository, caches the parsed and
//! severity-sorted lines, and answers per-entry queries with a glyph (or raw status code)
//! and a category for highlighting.
//!
//! # Public API
//! The main public interface is re-exported from the [`core`] module, which provides:
//! - The indicator column and its candidates
//! - Status parsing, classification and severity ordering
//! - The per-repository status cache
//! - Configuration, highlighting and error types

pub mod commands;
pub mod core;

// Re-export the core public API for external users
pub use crate::core::{
    // Indicator column
    Candidate,
    GitColumn,
    Indicator,
    IndicatorConfig,

    // Classification
    classify,
    IndicatorCategory,

    // Status records and cache
    parse_status,
    StatusCache,
    StatusLine,
    StatusOptions,
    StatusPath,

    // Command execution
    CommandRunner,
    GitCommandRunner,

    // Highlighting
    HighlightGroup,
    HighlightRegistry,
    TerminalHighlights,

    // Error handling
    GitIndicatorError,
    Result,
};
