//! Shared test utilities for integration tests.
//!
//! Provides helper functions for creating temporary git repositories and
//! performing common git operations used across multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;

/// Creates temporary git repository with test configuration.
///
/// Sets up a clean git repository with user name and email configured.
///
/// # Errors
///
/// Returns error if git commands fail or directory creation fails
pub fn create_test_repo() -> Result<TempDir> {
    let dir = TempDir::new()?;
    let path = dir.path();

    run_git(path, &["init"])?;
    run_git(path, &["config", "user.name", "Test User"])?;
    run_git(path, &["config", "user.email", "test@example.com"])?;
    run_git(path, &["config", "commit.gpgsign", "false"])?;

    Ok(dir)
}

/// Runs a git command in the repository and returns trimmed stdout.
///
/// # Errors
///
/// Returns error if git cannot be spawned or exits unsuccessfully
pub fn run_git(repo_path: &Path, args: &[&str]) -> Result<String> {
    let output = Command::new("git")
        .args(args)
        .current_dir(repo_path)
        .output()?;

    if !output.status.success() {
        anyhow::bail!(
            "git {} failed: {}",
            args.join(" "),
            String::from_utf8_lossy(&output.stderr)
        );
    }

    Ok(String::from_utf8(output.stdout)?.trim().to_string())
}

/// Commits staged changes and returns full commit hash.
///
/// # Errors
///
/// Returns error if commit fails or hash cannot be retrieved
pub fn git_commit(repo_path: &Path, message: &str) -> Result<String> {
    run_git(repo_path, &["commit", "-m", message])?;
    run_git(repo_path, &["rev-parse", "HEAD"])
}

/// Stages files in repository.
///
/// # Errors
///
/// Returns error if git add fails
pub fn git_add(repo_path: &Path, files: &[&str]) -> Result<()> {
    let mut args = vec!["add"];
    args.extend_from_slice(files);
    run_git(repo_path, &args)?;
    Ok(())
}

/// Writes file to repository, creating parent directories as needed.
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_file(repo_path: &Path, path: &str, content: &str) -> Result<()> {
    let file_path = repo_path.join(path);
    if let Some(parent) = file_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(file_path, content)?;
    Ok(())
}

/// Writes, stages and commits one file, returning the full commit hash.
///
/// # Errors
///
/// Returns error if any git step fails
pub fn commit_file(repo_path: &Path, path: &str, content: &str, message: &str) -> Result<String> {
    write_file(repo_path, path, content)?;
    git_add(repo_path, &[path])?;
    git_commit(repo_path, message)
}

/// Lists file names in a directory, sorted by their numeric index prefix.
///
/// # Errors
///
/// Returns error if directory cannot be read
pub fn exported_files(dir: &Path) -> Result<Vec<String>> {
    let mut names: Vec<String> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| entry.file_name().to_str().map(String::from))
        .collect();

    names.sort_by_key(|name| {
        name.split('_')
            .next()
            .and_then(|n| n.parse::<usize>().ok())
            .unwrap_or(usize::MAX)
    });

    Ok(names)
}

/// Output directory inside a fresh temporary directory.
pub fn output_dir(temp: &TempDir) -> PathBuf {
    temp.path().join("commits_html")
}

/// Writes, stages and commits one file with fixed author and committer
/// dates, returning the full commit hash.
///
/// # Arguments
///
/// * `date`: Date in a format git accepts, such as `2030-01-01T00:00:00Z`
///
/// # Errors
///
/// Returns error if any git step fails
pub fn commit_file_dated(
    repo_path: &Path,
    path: &str,
    content: &str,
    message: &str,
    date: &str,
) -> Result<String> {
    write_file(repo_path, path, content)?;
    git_add(repo_path, &[path])?;

    let output = Command::new("git")
        .args(["commit", "-m", message])
        .env("GIT_AUTHOR_DATE", date)
        .env("GIT_COMMITTER_DATE", date)
        .current_dir(repo_path)
        .output()?;

    if !output.status.success() {
        anyhow::bail!(
            "Git commit failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    run_git(repo_path, &["rev-parse", "HEAD"])
}

/// Returns `git log --reverse --pretty=%h|%s` output as (hash, subject) pairs.
///
/// # Errors
///
/// Returns error if git log fails
pub fn git_log_reverse(repo_path: &Path) -> Result<Vec<(String, String)>> {
    let log = run_git(repo_path, &["log", "--reverse", "--pretty=format:%h|%s"])?;

    Ok(log
        .lines()
        .filter_map(|line| line.split_once('|'))
        .map(|(hash, subject)| (hash.to_string(), subject.to_string()))
        .collect())
}
