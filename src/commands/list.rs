use crate::core::{
    colors::TerminalHighlights,
    column::{Candidate, GitColumn},
    config::IndicatorConfig,
    error::{GitIndicatorError, Result},
    indicator::IndicatorCategory,
    runner::CommandRunner,
};
use serde::Serialize;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Command-line overrides for the `list` command
#[derive(Debug, Default, Clone)]
pub struct ListOptions {
    pub path: Option<PathBuf>,
    pub show_ignored: bool,
    pub raw: bool,
    pub revision: Option<String>,
    pub width: Option<usize>,
    pub json: bool,
}

impl ListOptions {
    fn apply(&self, config: &mut IndicatorConfig) {
        if self.show_ignored {
            config.show_ignored = true;
        }
        if self.raw {
            config.raw_mode = true;
        }
        if let Some(revision) = &self.revision {
            config.compare_revision = revision.clone();
        }
        if let Some(width) = self.width {
            config.column_length = width;
        }
    }
}

/// One listed directory entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ListEntry {
    pub name: String,
    pub is_directory: bool,
    pub indicator: String,
    pub category: Option<IndicatorCategory>,
}

pub fn execute_list(options: ListOptions) -> Result<()> {
    let mut config = IndicatorConfig::load_or_default()?;
    options.apply(&mut config);

    let dir = match &options.path {
        Some(path) => path.clone(),
        None => env::current_dir()?,
    };
    if !dir.is_dir() {
        return Err(GitIndicatorError::path_not_found(dir));
    }
    // git reports the root with symlinks resolved
    let dir = dir.canonicalize()?;

    let mut column = GitColumn::new(config);
    let (entries, indicators) = list_directory(&mut column, &dir)?;

    if options.json {
        let json = serde_json::to_string_pretty(&entries)?;
        println!("{json}");
        return Ok(());
    }

    let mut highlights = TerminalHighlights::new();
    column.register_highlights(&mut highlights);

    for (entry, indicator_text) in entries.iter().zip(indicators) {
        let suffix = if entry.is_directory { "/" } else { "" };
        let name = format!("{}{suffix}", entry.name);
        println!(
            "{} {}",
            highlights.paint(entry.category, &indicator_text),
            highlights.paint(entry.category, &name)
        );
    }

    Ok(())
}

/// Refresh the column for `dir` and resolve every entry in it.
///
/// Returns the entries (directories first, then files, each sorted by name) and the
/// padded indicator text of each.
pub fn list_directory<R: CommandRunner>(
    column: &mut GitColumn<R>,
    dir: &Path,
) -> Result<(Vec<ListEntry>, Vec<String>)> {
    column.get_indicator(&Candidate::root(dir));
    if column.cache().root().is_none() {
        return Err(GitIndicatorError::NotInGitRepo);
    }

    let mut children: Vec<(String, PathBuf, bool)> = fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| {
            let name = entry.file_name().to_string_lossy().into_owned();
            // git reports symlinks as files, so a link to a directory stays a file
            let is_directory = entry.file_type().is_ok_and(|kind| kind.is_dir());
            (name, entry.path(), is_directory)
        })
        .filter(|(name, _, _)| name != ".git")
        .collect();
    children.sort_by(|a, b| b.2.cmp(&a.2).then_with(|| a.0.cmp(&b.0)));

    log::debug!("Listing {} entries in {}", children.len(), dir.display());

    let mut entries = Vec::with_capacity(children.len());
    let mut indicators = Vec::with_capacity(children.len());
    for (name, path, is_directory) in children {
        let candidate = if is_directory {
            Candidate::directory(path)
        } else {
            Candidate::file(path)
        };
        let indicator = column.get_indicator(&candidate);
        entries.push(ListEntry {
            name,
            is_directory,
            indicator: indicator.text.trim_end().to_string(),
            category: indicator.category,
        });
        indicators.push(indicator.text);
    }

    Ok((entries, indicators))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_to_config() {
        let options = ListOptions {
            show_ignored: true,
            raw: true,
            revision: Some("main".to_string()),
            width: Some(3),
            ..ListOptions::default()
        };
        let mut config = IndicatorConfig::default();
        options.apply(&mut config);

        assert!(config.show_ignored);
        assert!(config.raw_mode);
        assert_eq!(config.compare_revision, "main");
        assert_eq!(config.column_length, 3);
    }

    #[test]
    fn test_absent_overrides_keep_config() {
        let mut config = IndicatorConfig {
            show_ignored: true,
            compare_revision: "develop".to_string(),
            ..IndicatorConfig::default()
        };
        ListOptions::default().apply(&mut config);

        assert!(config.show_ignored);
        assert_eq!(config.compare_revision, "develop");
        assert_eq!(config.column_length, 1);
    }
}
