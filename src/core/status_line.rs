//! Parsed status records and the parsers that produce them.
//!
//! # Public API
//! - [`StatusLine`]: One status record (state code plus path)
//! - [`StatusPath`]: Plain path or rename pair
//! - [`parse_status`]: `git status --porcelain` output
//! - [`parse_name_status`]: `git diff --name-status <rev>` output
//! - [`parse_untracked_listing`]: `git ls-files --others` output
//!
//! # Porcelain line format
//! ```text
//! XY path
//! XY "quoted path"
//! R  old -> new
//! ```
//! `X` is the index state (`us`), `Y` the worktree state (`them`). Paths are relative
//! to the repository root and use forward slashes.

use crate::core::indicator::{classify, IndicatorCategory};
use serde::Serialize;
use std::fmt;

/// Shortest parseable line: two code characters, a separator and one path byte.
const MIN_LINE_LEN: usize = 4;

const RENAME_ARROW: &str = " -> ";

/// Path payload of a status record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StatusPath {
    Plain(String),
    Renamed { from: String, to: String },
}

impl StatusPath {
    /// Path used for prefix matching. For renames this is the new path.
    pub fn matching_path(&self) -> &str {
        match self {
            StatusPath::Plain(path) => path,
            StatusPath::Renamed { to, .. } => to,
        }
    }
}

impl fmt::Display for StatusPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusPath::Plain(path) => write!(f, "{path}"),
            StatusPath::Renamed { from, to } => write!(f, "{from}{RENAME_ARROW}{to}"),
        }
    }
}

/// One parsed status record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusLine {
    pub us: char,
    pub them: char,
    pub path: StatusPath,
}

impl StatusLine {
    pub fn new(us: char, them: char, path: StatusPath) -> Self {
        Self { us, them, path }
    }

    pub fn plain(us: char, them: char, path: impl Into<String>) -> Self {
        Self::new(us, them, StatusPath::Plain(path.into()))
    }

    /// The raw two-character state code, e.g. `" M"` or `"??"`
    pub fn code(&self) -> String {
        let mut code = String::with_capacity(2);
        code.push(self.us);
        code.push(self.them);
        code
    }

    pub fn matching_path(&self) -> &str {
        self.path.matching_path()
    }

    pub fn category(&self) -> IndicatorCategory {
        classify(self.us, self.them)
    }

    pub fn is_unmerged_marker(&self) -> bool {
        self.us == 'U' || self.them == 'U'
    }

    pub fn is_modified_marker(&self) -> bool {
        self.us == 'M' || self.them == 'M'
    }

    pub fn is_untracked(&self) -> bool {
        self.us == '?' && self.them == '?'
    }

    fn has_rename_payload(&self) -> bool {
        matches!(self.us, 'R' | 'C') || self.them == 'R'
    }
}

impl fmt::Display for StatusLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{} {}", self.us, self.them, self.path)
    }
}

/// Parse `git status --porcelain` output, keeping input order.
///
/// Blank and malformed lines are skipped without aborting the rest.
pub fn parse_status(raw: &str) -> Vec<StatusLine> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let parsed = parse_status_line(line);
            if parsed.is_none() {
                log::debug!("Skipping unparseable status line: {line:?}");
            }
            parsed
        })
        .collect()
}

/// Parse a single porcelain line.
pub fn parse_status_line(line: &str) -> Option<StatusLine> {
    let line = line.replace('\t', " ");
    if line.len() < MIN_LINE_LEN {
        return None;
    }

    let bytes = line.as_bytes();
    if !bytes[0].is_ascii() || !bytes[1].is_ascii() || bytes[2] != b' ' {
        return None;
    }
    let us = bytes[0] as char;
    let them = bytes[1] as char;
    let payload = line.get(3..)?;

    let mut status = StatusLine::plain(us, them, String::new());
    status.path = if status.has_rename_payload() {
        split_rename(payload)
    } else {
        StatusPath::Plain(unquote(payload))
    };

    if status.matching_path().is_empty() {
        return None;
    }
    Some(status)
}

/// Parse `git diff --name-status <rev>` output.
///
/// Each record is shifted into the worktree column (`us` is a space) so that the
/// codes line up with porcelain semantics. Similarity scores (`R100`) are dropped.
pub fn parse_name_status(raw: &str) -> Vec<StatusLine> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| {
            let mut fields = line.split('\t');
            let letter = fields.next()?.chars().next()?;
            let first = fields.next().filter(|path| !path.is_empty())?;
            let path = match (letter, fields.next()) {
                ('R' | 'C', Some(second)) if !second.is_empty() => StatusPath::Renamed {
                    from: unquote(first),
                    to: unquote(second),
                },
                _ => StatusPath::Plain(unquote(first)),
            };
            Some(StatusLine::new(' ', letter, path))
        })
        .collect()
}

/// Parse `git ls-files --others` output; every entry is untracked.
pub fn parse_untracked_listing(raw: &str) -> Vec<StatusLine> {
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| StatusLine::plain('?', '?', unquote(line)))
        .collect()
}

fn split_rename(payload: &str) -> StatusPath {
    let split = match quoted_len(payload) {
        Some(end) => payload[end..]
            .strip_prefix(RENAME_ARROW)
            .map(|to| (&payload[..end], to)),
        None => payload.split_once(RENAME_ARROW),
    };

    match split {
        Some((from, to)) => StatusPath::Renamed {
            from: unquote(from),
            to: unquote(to),
        },
        None => StatusPath::Plain(unquote(payload)),
    }
}

/// Byte length of a leading quoted string, closing quote included.
fn quoted_len(s: &str) -> Option<usize> {
    if !s.starts_with('"') {
        return None;
    }
    let mut escaped = false;
    for (i, b) in s.bytes().enumerate().skip(1) {
        match b {
            _ if escaped => escaped = false,
            b'\\' => escaped = true,
            b'"' => return Some(i + 1),
            _ => {}
        }
    }
    None
}

/// Strip git's path quoting, decoding C-style escapes.
///
/// Octal escapes encode raw bytes (`\303\251` is `é`), so decoding goes through a
/// byte buffer.
fn unquote(raw: &str) -> String {
    let Some(inner) = raw.strip_prefix('"').and_then(|s| s.strip_suffix('"')) else {
        return raw.to_string();
    };

    let mut bytes = Vec::with_capacity(inner.len());
    let mut chars = inner.chars().peekable();
    let mut buf = [0u8; 4];

    while let Some(c) = chars.next() {
        if c != '\\' {
            bytes.extend_from_slice(c.encode_utf8(&mut buf).as_bytes());
            continue;
        }
        match chars.next() {
            Some('n') => bytes.push(b'\n'),
            Some('t') => bytes.push(b'\t'),
            Some('r') => bytes.push(b'\r'),
            Some('"') => bytes.push(b'"'),
            Some('\\') | None => bytes.push(b'\\'),
            Some(d) if d.is_digit(8) => {
                let mut value = d.to_digit(8).unwrap_or(0);
                for _ in 0..2 {
                    match chars.peek().and_then(|next| next.to_digit(8)) {
                        Some(digit) => {
                            value = value * 8 + digit;
                            chars.next();
                        }
                        None => break,
                    }
                }
                bytes.push((value & 0xff) as u8);
            }
            Some(other) => {
                bytes.push(b'\\');
                bytes.extend_from_slice(other.encode_utf8(&mut buf).as_bytes());
            }
        }
    }

    String::from_utf8_lossy(&bytes).into_owned()
}
