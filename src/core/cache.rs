//! Per-repository status cache and path resolution.
//!
//! [`StatusCache`] holds the sorted status lines of one repository root. It is rebuilt
//! wholesale by [`StatusCache::refresh`] (triggered by root-level queries) and read by
//! [`StatusCache::resolve`] for every listed entry. Nothing watches the filesystem:
//! lookups are only as fresh as the last refresh.
//!
//! # Refresh
//! 1. Re-resolve the repository root with `git rev-parse --show-toplevel` when no root
//!    is cached or the refreshed path lies outside it.
//! 2. Collect status for the root, either from `git status --porcelain -u` or, when a
//!    revision other than `HEAD` is configured, from `git diff --name-status <rev>`
//!    combined with `git ls-files --others`.
//! 3. Sort by severity and replace the previous lines.
//!
//! # Resolution
//! Candidates are made relative to the root. Directories match the first line whose
//! path lies beneath them, which the severity sort turns into "the most severe status
//! under this directory".

use crate::core::{
    runner::CommandRunner,
    sorter::sort_lines,
    status_line::{parse_name_status, parse_status, parse_untracked_listing, StatusLine},
};
use std::path::Path;

pub const DEFAULT_REVISION: &str = "HEAD";

/// Which status to collect on refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusOptions {
    pub include_ignored: bool,
    pub compare_revision: String,
}

impl Default for StatusOptions {
    fn default() -> Self {
        Self {
            include_ignored: false,
            compare_revision: DEFAULT_REVISION.to_string(),
        }
    }
}

impl StatusOptions {
    /// True when status is taken from the working tree rather than a revision diff
    pub fn uses_working_tree(&self) -> bool {
        self.compare_revision.is_empty() || self.compare_revision == DEFAULT_REVISION
    }
}

#[derive(Debug, Default)]
pub struct StatusCache {
    root: Option<String>,
    lines: Vec<StatusLine>,
    include_ignored: bool,
}

impl StatusCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolved repository root, forward-slash separated
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    pub fn lines(&self) -> &[StatusLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Whether the last refresh asked for ignored entries
    pub fn include_ignored(&self) -> bool {
        self.include_ignored
    }

    /// Rebuild the cache for the repository containing `path`.
    ///
    /// Never fails: an unresolvable root or a failed status command leaves the cache
    /// empty until the next successful refresh.
    pub fn refresh<R: CommandRunner + ?Sized>(
        &mut self,
        runner: &R,
        path: &Path,
        options: &StatusOptions,
    ) {
        self.include_ignored = options.include_ignored;

        let query = normalize_path(path);
        let root_is_stale = match &self.root {
            Some(root) => !is_within(root, &query),
            None => true,
        };
        if root_is_stale {
            let resolved = runner.run(&["git", "rev-parse", "--show-toplevel"], Some(path));
            self.root = if resolved.is_empty() {
                None
            } else {
                Some(normalize_str(&resolved))
            };
            log::debug!("Resolved repository root for {query}: {:?}", self.root);
        }

        let Some(root) = self.root.as_deref() else {
            log::debug!("No repository found for {query}, clearing status cache");
            self.lines = Vec::new();
            return;
        };

        let root_dir = Path::new(root);
        let mut lines = if options.uses_working_tree() {
            collect_working_tree(runner, root_dir, options)
        } else {
            collect_against_revision(runner, root_dir, options)
        };
        sort_lines(&mut lines);

        log::debug!("Cached {} status lines for {root}", lines.len());
        self.lines = lines;
    }

    /// Find the status line for a candidate path.
    ///
    /// Absolute candidates must lie inside the cached root; relative candidates are
    /// taken as already relative to it. The first line whose path starts with the
    /// candidate wins; directories get a trailing `/` first. Files inside a collapsed
    /// directory line (`!! target/`) match that line too.
    pub fn resolve(&self, candidate: &Path, is_directory: bool) -> Option<&StatusLine> {
        if self.lines.is_empty() {
            return None;
        }

        let mut relative = self.relative_path(candidate)?;
        if relative.is_empty() {
            return None;
        }
        if is_directory {
            relative.push('/');
        }

        self.lines.iter().find(|line| {
            let path = line.matching_path();
            path.starts_with(&relative)
                || (!is_directory && path.ends_with('/') && relative.starts_with(path))
        })
    }

    /// Drop all lines and forget the repository root
    pub fn clear(&mut self) {
        self.root = None;
        self.lines = Vec::new();
    }

    fn relative_path(&self, candidate: &Path) -> Option<String> {
        let normalized = normalize_path(candidate);
        if !is_absolute(&normalized) {
            return Some(normalized.trim_start_matches("./").trim_end_matches('/').to_string());
        }

        let root = self.root.as_deref()?.trim_end_matches('/');
        if normalized.trim_end_matches('/') == root {
            return Some(String::new());
        }
        normalized
            .strip_prefix(root)
            .and_then(|rest| rest.strip_prefix('/'))
            .map(|rest| rest.trim_end_matches('/').to_string())
    }
}

fn collect_working_tree<R: CommandRunner + ?Sized>(
    runner: &R,
    root: &Path,
    options: &StatusOptions,
) -> Vec<StatusLine> {
    let mut command = vec!["git", "status", "--porcelain", "-u"];
    if options.include_ignored {
        command.push("--ignored");
    }
    parse_status(&runner.run(&command, Some(root)))
}

fn collect_against_revision<R: CommandRunner + ?Sized>(
    runner: &R,
    root: &Path,
    options: &StatusOptions,
) -> Vec<StatusLine> {
    let diff = runner.run(
        &[
            "git",
            "diff",
            "--name-status",
            options.compare_revision.as_str(),
        ],
        Some(root),
    );

    let mut command = vec!["git", "ls-files", "--exclude-standard", "--others"];
    if options.include_ignored {
        command.push("--ignored");
    }
    let untracked = runner.run(&command, Some(root));

    let mut lines = parse_name_status(&diff);
    lines.extend(parse_untracked_listing(&untracked));
    lines
}

pub(crate) fn normalize_path(path: &Path) -> String {
    normalize_str(&path.to_string_lossy())
}

fn normalize_str(path: &str) -> String {
    path.replace('\\', "/")
}

fn is_absolute(path: &str) -> bool {
    let bytes = path.as_bytes();
    path.starts_with('/') || (bytes.len() >= 2 && bytes[0].is_ascii_alphabetic() && bytes[1] == b':')
}

/// Component-aware prefix check: `/repo2` is not within `/repo`.
fn is_within(root: &str, path: &str) -> bool {
    let root = root.trim_end_matches('/');
    path == root
        || path
            .strip_prefix(root)
            .is_some_and(|rest| rest.starts_with('/'))
}
