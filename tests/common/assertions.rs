//! Common assertion helpers for test output validation
//!
//! Provides predicates for validating git-indicators command output
//! and error messages.

#![allow(dead_code)]

use predicates::prelude::*;

/// Creates a predicate that checks for git repository error messages
pub fn not_in_git_repo() -> impl Predicate<str> {
    predicates::str::contains("Not in a git repository")
        .or(predicates::str::contains("NotInGitRepo"))
}

/// Creates a predicate that checks a listed entry carries the given indicator
pub fn has_entry(indicator: &str, name: &str) -> impl Predicate<str> {
    predicates::str::contains(format!("{indicator} {name}"))
}

/// Creates a predicate that checks for a category name
pub fn has_category(category: &str) -> impl Predicate<str> {
    predicates::str::contains(category)
}
