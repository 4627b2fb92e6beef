//! Test data generation utilities and predefined scenarios
//!
//! Provides functions for creating repositories with specific file states
//! to test various git scenarios consistently.

#![allow(dead_code)]

use super::repository::*;
use git_indicators::core::error::Result;

/// Scenario: one file of each common state
///
/// ```text
///  M tracked.txt
/// A  staged.txt
///  D doomed.txt
/// ?? fresh.txt
/// ```
pub fn create_mixed_status_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "tracked.txt", "v1\n")?;
    create_file(&repo.path, "doomed.txt", "bye\n")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    create_file(&repo.path, "tracked.txt", "v2\n")?;
    create_file(&repo.path, "staged.txt", "new\n")?;
    git_add(&repo.path, "staged.txt")?;
    remove_file(&repo.path, "doomed.txt")?;
    create_file(&repo.path, "fresh.txt", "untracked\n")?;

    Ok(repo)
}

/// Scenario: a directory holding an untracked file and a modified file
pub fn create_directory_aggregation_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "dir/b.txt", "v1\n")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Initial commit")?;

    create_file(&repo.path, "dir/a.txt", "untracked\n")?;
    create_file(&repo.path, "dir/b.txt", "v2\n")?;

    Ok(repo)
}

/// Scenario: a merge conflict next to a plain modification in the same directory
///
/// ```text
///  M src/plain.txt
/// UU src/clash.txt
/// ```
pub fn create_conflicted_repo() -> Result<TestRepo> {
    let repo = setup_test_repo()?;

    create_file(&repo.path, "src/clash.txt", "base\n")?;
    create_file(&repo.path, "src/plain.txt", "base\n")?;
    git_add(&repo.path, ".")?;
    git_commit(&repo.path, "Base")?;

    git(&repo.path, &["checkout", "--quiet", "-b", "theirs"])?;
    create_file(&repo.path, "src/clash.txt", "theirs\n")?;
    git_commit_all(&repo.path, "Theirs")?;

    git(&repo.path, &["checkout", "--quiet", "-"])?;
    create_file(&repo.path, "src/clash.txt", "ours\n")?;
    git_commit_all(&repo.path, "Ours")?;

    git_allow_failure(&repo.path, &["merge", "--no-edit", "theirs"])?;
    create_file(&repo.path, "src/plain.txt", "edited\n")?;

    Ok(repo)
}

fn git_commit_all(repo_path: &std::path::Path, message: &str) -> Result<()> {
    git_add(repo_path, ".")?;
    git_commit(repo_path, message)
}
