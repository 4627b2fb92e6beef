//! Severity ordering for cached status lines.
//!
//! Directory lookups return the first line under a prefix, so the cache is kept
//! ordered with the most severe status first: conflicts, then modifications, then
//! untracked files, then everything else. The sort is stable, so lines of equal
//! severity keep the order git printed them in.

use crate::core::status_line::StatusLine;

/// Sort key for a status line. Lower is more severe.
pub fn severity(line: &StatusLine) -> u8 {
    if line.is_unmerged_marker() {
        0
    } else if line.is_modified_marker() {
        1
    } else if line.is_untracked() {
        2
    } else {
        3
    }
}

/// Order lines by severity, keeping encountered order within a severity.
pub fn sort_lines(lines: &mut [StatusLine]) {
    lines.sort_by_key(severity);
}
